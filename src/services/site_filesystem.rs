use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::SiteStore;

/// Filesystem-based site store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemSiteStore {
    root: PathBuf,
}

impl FilesystemSiteStore {
    /// Create a site store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl SiteStore for FilesystemSiteStore {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve(path).is_dir()
    }

    fn read_text(&self, path: &str) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AppError> {
        Ok(fs::read(self.resolve(path))?)
    }

    fn write_bytes(&self, path: &str, bytes: &[u8]) -> Result<(), AppError> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, bytes)?;
        Ok(())
    }
}
