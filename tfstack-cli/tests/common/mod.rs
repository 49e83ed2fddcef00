//! Common test utilities for CLI integration tests.
//!
//! [`TestEnv`] lays out a config directory, a template directory and a
//! component root inside a temporary directory, and builds `tfstack`
//! commands with a clean environment.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would otherwise leak into the child process.
const ISOLATED_VARS: &[&str] = &[
    "CONFIG_PATHS",
    "CONFIG_PATH",
    "TFSTACK_LOG_MODE",
    "TFSTACK_CONFIG_DIR",
    "TFSTACK_TEMPLATE_DIR",
    "TFSTACK_COMPONENT_DIR",
];

pub const MANIFEST: &str = r#"
defaults:
  terraform_required_version: ">= 1.5"
  aws_provider_version: "~> 5.0"
modules:
  web:
    account: prod
    backend:
      bucket: state-bucket
  api:
    account: prod
    component_dir: api-service
    backend:
      bucket: api-state
  broken:
    account: prod
"#;

pub const PROD_ACCOUNT: &str = "region: us-east-1\n";

pub const PROVIDER_TEMPLATE: &str = "terraform {\n  required_version = \"{{ TF_VERSION }}\"\n}\n\nprovider \"aws\" {\n  region = \"{{ region }}\"\n}\n";

pub const BACKEND_TEMPLATE: &str = "terraform {\n  backend \"s3\" {\n    bucket = \"{{ backend.bucket }}\"\n    key    = \"{{ backend.key }}\"\n    region = \"{{ backend.region }}\"\n  }\n}\n";

/// Isolated test environment.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Create an environment with the standard manifest, account and
    /// templates, plus a `web` component directory.
    pub fn with_fixtures() -> Self {
        let env = Self::new();
        env.write("config/provider_backend.yaml", MANIFEST);
        env.write("config/accounts/prod.yaml", PROD_ACCOUNT);
        env.write("templates/provider.tf.j2", PROVIDER_TEMPLATE);
        env.write("templates/backend.tf.j2", BACKEND_TEMPLATE);
        env.create_dir("components/web");
        env
    }

    /// Get a command builder with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tfstack").expect("Failed to find tfstack binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    pub fn config_dir(&self) -> PathBuf {
        self.temp_path.join("config")
    }

    pub fn template_dir(&self) -> PathBuf {
        self.temp_path.join("templates")
    }

    pub fn component_dir(&self) -> PathBuf {
        self.temp_path.join("components")
    }

    /// Create a subdirectory and return its path.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file relative to the temp path, creating parents.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the temp path.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.temp_path.join(name)).expect("Failed to read test file")
    }

    /// A `render` command with all directory flags set.
    pub fn render_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("render")
            .arg("--config-dir")
            .arg(self.config_dir())
            .arg("--template-dir")
            .arg(self.template_dir())
            .arg("--component-dir")
            .arg(self.component_dir());
        cmd
    }
}
