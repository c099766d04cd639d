//! Error types for kwrbuild-core.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type for kwrbuild-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kwrbuild-core.
#[derive(Debug, Error)]
pub enum Error {
    /// The project manifest could not be read.
    #[error("failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required external tool is not on `PATH`.
    #[error("{tool} not found in PATH")]
    ToolNotFound {
        tool: String,
        #[source]
        source: which::Error,
    },

    /// The library-configuration helper failed or produced unusable output.
    #[error("library configuration failed: {0}")]
    LibraryConfig(String),

    /// The output name is not a plain file name.
    #[error("invalid output name {0:?}: must be a single file name under the output directory")]
    InvalidOutputName(String),

    /// The compiler ran and exited unsuccessfully.
    #[error("compilation failed ({status}): {command}")]
    Compilation { status: ExitStatus, command: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A short recovery hint to print alongside the error.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::ManifestRead { .. } => {
                Some("check the manifest path; it should list one source file per line")
            }
            Error::ToolNotFound { .. } => Some(
                "install the tool or point KWRBUILD_CXX / KWRBUILD_LIBRARY_CONFIG at it",
            ),
            Error::LibraryConfig(_) => {
                Some("make sure the SDL development package is installed")
            }
            Error::InvalidOutputName(_) => {
                Some("pass a bare name such as `game`; the binary is always written under bin/")
            }
            Error::Compilation { .. } => None,
            Error::Io(_) => None,
        }
    }

    /// Render the error followed by its hint, if any.
    pub fn with_hint(&self) -> String {
        match self.hint() {
            Some(hint) => format!("{}\n  hint: {}", self, hint),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_names_path() {
        let err = Error::ManifestRead {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        let rendered = err.with_hint();
        assert!(rendered.contains("missing.txt"));
        assert!(rendered.contains("hint:"));
    }

    #[test]
    fn test_io_error_has_no_hint() {
        let err = Error::from(std::io::Error::other("boom"));
        assert_eq!(err.with_hint(), "IO error: boom");
    }
}
