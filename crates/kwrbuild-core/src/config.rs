//! Build configuration.
//!
//! The flag set is fixed. Only the locations of the compiler and of the
//! library-configuration helper can be overridden, through environment
//! variables.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable overriding the compiler program.
pub const CXX_ENV: &str = "KWRBUILD_CXX";

/// Environment variable overriding the library-configuration helper.
pub const LIBRARY_CONFIG_ENV: &str = "KWRBUILD_LIBRARY_CONFIG";

/// Configuration for a build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Compiler program (`g++`)
    pub compiler: String,

    /// Language standard passed as `-std=<standard>`
    pub standard: String,

    /// Warning flags placed after the sources
    pub warning_flags: Vec<String>,

    /// Helper queried for library compiler/linker flags (`sdl-config`)
    pub library_config: String,

    /// Arguments passed to the helper
    pub library_config_args: Vec<String>,

    /// Directory the binary is written to
    pub output_dir: PathBuf,

    /// Binary name used when none is given
    pub default_output_name: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: "g++".to_string(),
            standard: "c++0x".to_string(),
            warning_flags: vec!["-pedantic".to_string()],
            library_config: "sdl-config".to_string(),
            library_config_args: vec!["--cflags".to_string(), "--libs".to_string()],
            output_dir: PathBuf::from("bin"),
            default_output_name: "test".to_string(),
        }
    }
}

impl BuildConfig {
    /// Default configuration with program overrides from the environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Default configuration with overrides looked up through `var`.
    ///
    /// Empty values are ignored.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(compiler) = var(CXX_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Compiler overridden by {}: {}", CXX_ENV, compiler);
            config.compiler = compiler;
        }
        if let Some(helper) = var(LIBRARY_CONFIG_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Library helper overridden by {}: {}", LIBRARY_CONFIG_ENV, helper);
            config.library_config = helper;
        }

        config
    }

    /// The `-std=` flag for the configured standard.
    pub fn standard_flag(&self) -> String {
        format!("-std={}", self.standard)
    }

    /// Resolve where the binary goes: `<output_dir>/<name>`, falling back
    /// to the default name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOutputName`] unless `name` is exactly one
    /// normal path component, so the binary never lands outside
    /// `output_dir`.
    pub fn output_path(&self, output_name: Option<&str>) -> Result<PathBuf> {
        let name = output_name.unwrap_or(&self.default_output_name);

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !name.contains(std::path::is_separator) => {
                Ok(self.output_dir.join(name))
            }
            _ => Err(Error::InvalidOutputName(name.to_string())),
        }
    }
}
