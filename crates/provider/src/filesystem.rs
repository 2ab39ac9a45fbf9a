//! Filesystem-backed output provider.
//!
//! Mirrors a document tree onto nested directories under a base path,
//! creating directories on demand. Output names are plain file names;
//! anything that could escape the base directory is rejected up front.

use crate::targets::FileTarget;
use folio_traits::{OutputProvider, OutputTarget, ProviderError};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// An output provider that writes artifacts below a base directory.
///
/// Each `new_child` scope becomes a subdirectory, created eagerly so the
/// scope is usable the moment it is handed out. `fs::create_dir_all` is
/// idempotent, which is all the locking concurrent scope creation needs.
#[derive(Debug)]
pub struct DirectoryOutputProvider {
    base: PathBuf,
}

impl DirectoryOutputProvider {
    /// Creates a provider rooted at `base`, creating the directory if it
    /// does not exist yet.
    pub fn new(base: impl Into<PathBuf>) -> Result<Self, ProviderError> {
        let base = base.into();
        fs::create_dir_all(&base).map_err(|err| ProviderError::CreateFailed {
            path: base.display().to_string(),
            message: err.to_string(),
        })?;
        debug!("directory output rooted at '{}'", base.display());
        Ok(Self { base })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Rejects names that are empty, contain a path separator, or traverse
    /// upwards. Output names are single path components by construction.
    fn check_name(name: &str) -> Result<(), ProviderError> {
        if name.is_empty()
            || name.contains('/')
            || name.contains('\\')
            || name == "."
            || name == ".."
        {
            return Err(ProviderError::InvalidName(name.to_string()));
        }
        Ok(())
    }
}

impl OutputProvider for DirectoryOutputProvider {
    fn new_output(&self, name: &str) -> Result<Box<dyn OutputTarget>, ProviderError> {
        Self::check_name(name)?;
        Ok(Box::new(FileTarget::new(self.base.join(name))))
    }

    fn new_child(&self, name: &str) -> Result<Box<dyn OutputProvider>, ProviderError> {
        Self::check_name(name)?;
        Ok(Box::new(Self::new(self.base.join(name))?))
    }

    fn name(&self) -> &'static str {
        "DirectoryOutputProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_child_scopes_become_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectoryOutputProvider::new(dir.path().join("out")).unwrap();

        let child = provider.new_child("guide").unwrap();
        let mut target = child.new_output("intro.html").unwrap();
        let mut writer = target.open().unwrap();
        writer.write_all(b"<p>hi</p>").unwrap();
        writer.flush().unwrap();
        drop(writer);

        let written = std::fs::read(dir.path().join("out/guide/intro.html")).unwrap();
        assert_eq!(written, b"<p>hi</p>");
    }

    #[test]
    fn test_rejects_traversal_names() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectoryOutputProvider::new(dir.path()).unwrap();

        assert!(matches!(provider.new_output(".."), Err(ProviderError::InvalidName(_))));
        assert!(matches!(
            provider.new_output("../escape.html"),
            Err(ProviderError::InvalidName(_))
        ));
        assert!(matches!(provider.new_child("a/b"), Err(ProviderError::InvalidName(_))));
    }

    #[test]
    fn test_same_child_twice_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectoryOutputProvider::new(dir.path()).unwrap();
        provider.new_child("sub").unwrap();
        provider.new_child("sub").unwrap();
    }
}
