//! Toolchain discovery and the library-flag query.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::BuildConfig;
use crate::error::{Error, Result};

/// Resolved compiler and library-configuration helper.
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Path to the compiler
    compiler: PathBuf,

    /// Path to the library-configuration helper
    library_config: PathBuf,

    /// Arguments for the helper (`--cflags --libs`)
    library_config_args: Vec<String>,
}

impl Toolchain {
    /// Locate the configured tools on `PATH`.
    pub fn discover(config: &BuildConfig) -> Result<Self> {
        let compiler = find_tool(&config.compiler)?;
        let library_config = find_tool(&config.library_config)?;

        tracing::debug!("Using compiler {}", compiler.display());
        tracing::debug!("Using library helper {}", library_config.display());

        Ok(Self {
            compiler,
            library_config,
            library_config_args: config.library_config_args.clone(),
        })
    }

    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    /// Run the helper and split its output into individual flags.
    ///
    /// Output is split on whitespace only; quotes are not interpreted,
    /// matching how a shell splits command substitution output.
    pub fn library_flags(&self) -> Result<Vec<String>> {
        let output = Command::new(&self.library_config)
            .args(&self.library_config_args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                Error::LibraryConfig(format!(
                    "failed to run {}: {}",
                    self.library_config.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::LibraryConfig(format!(
                "{} exited with {}: {}",
                self.library_config.display(),
                output.status,
                stderr.trim()
            )));
        }

        let flags: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .split_whitespace()
            .map(String::from)
            .collect();

        tracing::debug!("Library flags: {}", flags.join(" "));
        Ok(flags)
    }
}

fn find_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|source| Error::ToolNotFound {
        tool: name.to_string(),
        source,
    })
}
