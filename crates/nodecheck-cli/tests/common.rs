//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary environment for driving the nodecheck binary: an isolated
/// config location and journal directories with controlled permissions.
pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Create a journal directory with the given permission mode bits.
    #[cfg(unix)]
    pub fn journal_dir(&self, name: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let dir = self.root.join(name);
        fs::create_dir(&dir).expect("Failed to create journal dir");
        fs::set_permissions(&dir, fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
        dir
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    /// Run nodecheck with this fixture's config location.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("nodecheck").expect("Failed to find nodecheck binary");
        cmd.arg("--config").arg(self.config_path());
        cmd
    }
}
