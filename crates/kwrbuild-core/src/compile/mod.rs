//! Compilation pipeline.
//!
//! ```text
//! manifest.txt ──► Manifest ──┐
//!                             ├──► CompileCommand ──► g++ ──► bin/<name>
//! sdl-config --cflags --libs ─┘
//! ```

mod builder;
mod command;
mod toolchain;

pub use builder::{BuildReport, Builder};
pub use command::CompileCommand;
pub use toolchain::Toolchain;
