//! The build operation: manifest in, one compiler run out.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::compile::{CompileCommand, Toolchain};
use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::manifest::Manifest;

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Path of the produced binary
    pub output: PathBuf,

    /// Wall-clock time spent in the compiler
    pub duration: Duration,
}

/// Drives a single compiler invocation for a manifest.
pub struct Builder {
    config: BuildConfig,
}

impl Builder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Resolve tools, query library flags and assemble the compile command
    /// without running the compiler.
    pub fn plan(&self, manifest: &Manifest, output_name: Option<&str>) -> Result<CompileCommand> {
        let output = self.config.output_path(output_name)?;
        let toolchain = Toolchain::discover(&self.config)?;
        let library_flags = toolchain.library_flags()?;

        let command = CompileCommand::new(
            toolchain.compiler(),
            &self.config,
            manifest,
            &library_flags,
            output,
        );

        tracing::debug!("Compile command: {}", command);
        Ok(command)
    }

    /// Plan and run the build, waiting for the compiler to exit.
    ///
    /// The output directory is created if missing. Compiler output goes
    /// straight to the inherited stdout/stderr.
    ///
    /// # Errors
    /// Returns [`Error::Compilation`] if the compiler exits unsuccessfully.
    pub fn build(&self, manifest: &Manifest, output_name: Option<&str>) -> Result<BuildReport> {
        let command = self.plan(manifest, output_name)?;

        if let Some(dir) = command.output().parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        tracing::info!(
            "Compiling {} sources into {}",
            manifest.len(),
            command.output().display()
        );

        let start = Instant::now();
        let status = command.to_command().status()?;
        let duration = start.elapsed();

        if !status.success() {
            return Err(Error::Compilation {
                status,
                command: command.to_string(),
            });
        }

        tracing::info!("Built {} in {:.2}s", command.output().display(), duration.as_secs_f64());

        Ok(BuildReport {
            output: command.output().to_path_buf(),
            duration,
        })
    }
}
