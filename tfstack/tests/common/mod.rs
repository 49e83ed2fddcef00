//! Common test utilities for integration tests.
//!
//! [`ConfigFixture`] lays out a config directory (manifest plus account
//! files) and an optional template directory inside a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write `content` to `dir/name`, creating parent directories.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent directory");
    }
    fs::write(&path, content).expect("failed to write fixture file");
    path
}

/// Builder for a temporary config directory.
///
/// # Examples
///
/// ```no_run
/// # use common::ConfigFixture;
/// let fixture = ConfigFixture::new()
///     .with_manifest("modules: {}\n")
///     .with_account("prod", "region: us-east-1\n");
/// ```
#[allow(dead_code)]
pub struct ConfigFixture {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl ConfigFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary directory");
        fs::create_dir_all(temp_dir.path().join("config").join("accounts"))
            .expect("failed to create config directory");
        Self { temp_dir }
    }

    /// Root of the temporary tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The config directory (`<root>/config`).
    pub fn config_dir(&self) -> PathBuf {
        self.root().join("config")
    }

    /// The template directory (`<root>/templates`).
    pub fn template_dir(&self) -> PathBuf {
        self.root().join("templates")
    }

    /// The component root (`<root>/components`).
    pub fn component_root(&self) -> PathBuf {
        self.root().join("components")
    }

    /// Writes `provider_backend.yaml`.
    pub fn with_manifest(self, content: &str) -> Self {
        write_file(&self.config_dir(), "provider_backend.yaml", content);
        self
    }

    /// Writes `accounts/<name>.yaml`.
    pub fn with_account(self, name: &str, content: &str) -> Self {
        write_file(
            &self.config_dir(),
            &format!("accounts/{name}.yaml"),
            content,
        );
        self
    }

    /// Writes a template into the template directory.
    pub fn with_template(self, name: &str, content: &str) -> Self {
        write_file(&self.template_dir(), name, content);
        self
    }

    /// Creates `components/<name>` and returns its path.
    pub fn component_dir(&self, name: &str) -> PathBuf {
        let dir = self.component_root().join(name);
        fs::create_dir_all(&dir).expect("failed to create component directory");
        dir
    }
}

impl Default for ConfigFixture {
    fn default() -> Self {
        Self::new()
    }
}
