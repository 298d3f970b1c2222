//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Hand-checked Godfather key (checksum computed independently).
pub const GODFATHER_KEY: &str = "GOD4E4∞CQ7X#∞1830F∞K2P!AS∞33";

pub struct TestFixture {
    _temp_dir: TempDir,
    config_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join(".nexus");

        Self {
            _temp_dir: temp_dir,
            config_dir,
        }
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(&self.config_dir).expect("Failed to create config dir");
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// `nexus` isolated from the user's environment.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("nexus").expect("Failed to find nexus binary");
        cmd.env("NEXUS_PATH", &self.config_dir)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
