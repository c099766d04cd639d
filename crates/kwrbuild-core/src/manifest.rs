//! Project manifest loading.
//!
//! A manifest is a plain text file listing one source path per line.
//! There is no comment or escape syntax; surrounding whitespace on each
//! line is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ordered list of source files read from a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Where the manifest was loaded from, if it came from disk.
    path: Option<PathBuf>,

    /// Trimmed source paths, in file order.
    sources: Vec<String>,
}

impl Manifest {
    /// Read and parse a manifest file.
    ///
    /// # Errors
    /// Returns [`Error::ManifestRead`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut manifest = Self::parse(&text);
        manifest.path = Some(path.to_path_buf());

        tracing::debug!(
            "Loaded manifest {} ({} sources)",
            path.display(),
            manifest.len()
        );
        Ok(manifest)
    }

    /// Parse manifest text. Blank lines are skipped.
    pub fn parse(text: &str) -> Self {
        let sources = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        Self {
            path: None,
            sources,
        }
    }

    /// Source paths in manifest order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Source paths joined by single spaces.
    pub fn joined(&self) -> String {
        self.sources.join(" ")
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_trims_and_keeps_order() {
        let manifest = Manifest::parse("a.cpp\n b.cpp \nc.cpp\n");

        assert_eq!(manifest.sources(), ["a.cpp", "b.cpp", "c.cpp"]);
        assert_eq!(manifest.joined(), "a.cpp b.cpp c.cpp");
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::parse("");

        assert!(manifest.is_empty());
        assert_eq!(manifest.joined(), "");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let manifest = Manifest::parse("\n  \nmain.cpp\r\n\t\nkwr/Object.cpp\n");
        assert_eq!(manifest.sources(), ["main.cpp", "kwr/Object.cpp"]);
    }

    #[test]
    fn test_join_is_idempotent() {
        let first = Manifest::parse("  kwrlib.cpp\nkwrsdl.cpp  \n maze.cpp");
        let second = Manifest::parse(&first.joined().split(' ').collect::<Vec<_>>().join("\n"));

        assert_eq!(first.sources(), second.sources());
        assert_eq!(first.joined(), second.joined());
    }

    #[test]
    fn test_load_from_disk() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("project.txt");
        fs::write(&path, "hello.cpp\nkwrsdl.cpp\n").expect("Failed to write manifest");

        let manifest = Manifest::load(&path).expect("Failed to load manifest");

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.path(), Some(path.as_path()));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("nope.txt");

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, Error::ManifestRead { .. }));
    }
}
