use crate::domain::AppError;

/// Port for reading and writing files under a site root.
///
/// All paths are relative to the root; writes create missing parent
/// directories. Commands never touch the filesystem directly, which keeps
/// them testable against the in-memory store.
pub trait SiteStore {
    /// Whether a file or directory exists at the path.
    fn exists(&self, path: &str) -> bool;

    /// Whether the path exists and is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Read a UTF-8 text file.
    fn read_text(&self, path: &str) -> Result<String, AppError>;

    /// Read a file's raw bytes.
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AppError>;

    /// Write raw bytes, creating parent directories as needed.
    fn write_bytes(&self, path: &str, bytes: &[u8]) -> Result<(), AppError>;

    /// Write a UTF-8 text file, creating parent directories as needed.
    fn write_text(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.write_bytes(path, content.as_bytes())
    }
}
