//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Writing catalog documents and config files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// Every command runs with `--config <temp>/frontdoor/config.toml`, so the
/// user's real config is never read.
///
/// # Example
/// ```no_run
/// use frontdoor_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["list", "--type", "Dashboard"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    format: &'static str,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("frontdoor");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            config_path: config_dir.join("config.toml"),
            temp_dir,
            env_vars: HashMap::new(),
            format: "plain",
        }
    }

    /// Emit `--format json` instead of plain text.
    pub fn json(mut self) -> Self {
        self.format = "json";
        self
    }

    /// Path passed as `--config` (may not exist yet).
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Directory holding the config file; relative catalog paths resolve here.
    pub fn config_dir(&self) -> &Path {
        self.config_path
            .parent()
            .expect("config path always has a parent")
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` verbatim.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Write a catalog document into the config dir as `<name>.json`.
    pub fn with_catalog_file(self, name: &str, document: &serde_json::Value) -> Self {
        let path = self.catalog_path(name);
        fixtures::write_catalog(&path, document).expect("Failed to write catalog");
        self
    }

    /// Where `with_catalog_file` puts the document for `name`.
    pub fn catalog_path(&self, name: &str) -> PathBuf {
        self.config_dir().join(format!("{}.json", name))
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `Command::cargo_bin("frontdoor")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--format")
            .arg(self.format);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("FRONTDOOR_CONFIG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("frontdoor")
            .map_err(|e| anyhow::anyhow!("Failed to find frontdoor binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
