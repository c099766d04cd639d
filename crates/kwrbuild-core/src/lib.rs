//! Core engine for kwrbuild, a manifest-driven build invoker.
//!
//! This crate provides:
//! - Manifest loading (one source path per line)
//! - The fixed build configuration and its environment overrides
//! - Toolchain discovery and the SDL library-flag query
//! - Compile command construction and execution

pub mod compile;
pub mod config;
pub mod error;
pub mod manifest;

pub use compile::{BuildReport, Builder, CompileCommand, Toolchain};
pub use config::BuildConfig;
pub use error::{Error, Result};
pub use manifest::Manifest;
