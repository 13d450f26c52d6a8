//! Shared testing harness for `masthead` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated site directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    site_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated site directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let site_dir = root.path().join("site");
        fs::create_dir_all(&site_dir).expect("Failed to create test site directory");
        Self { root, site_dir }
    }

    /// Path to the site directory used for CLI invocations.
    pub(crate) fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    /// Absolute path to a file inside the site directory.
    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.site_dir.join(relative)
    }

    /// Build a command for invoking the compiled `masthead` binary within the site directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.site_dir())
    }

    /// Build a command for invoking the compiled `masthead` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("masthead").expect("Failed to locate masthead binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Run `masthead init` with the standard answers and assert success.
    pub(crate) fn init_site(&self) {
        self.cli()
            .args([
                "init",
                "--title",
                "Example Blog",
                "--name",
                "Jane Doe",
                "--url",
                "https://example.com",
                "--description",
                "A personal blog.",
            ])
            .assert()
            .success();
    }

    /// Write `site.toml` with the given contents.
    pub(crate) fn write_site_toml(&self, contents: &str) {
        self.write_file("site.toml", contents);
    }

    /// Write the legacy `site.yml` with the given contents.
    pub(crate) fn write_site_yml(&self, contents: &str) {
        self.write_file("site.yml", contents);
    }

    /// Write a text file inside the site directory, creating parent directories.
    pub(crate) fn write_file(&self, relative: &str, contents: &str) {
        self.write_bytes(relative, contents.as_bytes());
    }

    /// Write a binary file inside the site directory, creating parent directories.
    pub(crate) fn write_bytes(&self, relative: &str, contents: &[u8]) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, contents).expect("Failed to write test file");
    }

    /// Read a text file from the site directory.
    pub(crate) fn read_text(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read test file")
    }

    /// Re-write `site.toml` with `from` replaced by `to`.
    pub(crate) fn edit_site_toml(&self, from: &str, to: &str) {
        let edited = self.read_text("site.toml").replace(from, to);
        self.write_site_toml(&edited);
    }
}
