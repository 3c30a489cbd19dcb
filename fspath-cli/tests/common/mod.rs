//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside a fresh temporary directory with the
//! `FSPATH_*` environment cleared, so configuration discovery and search
//! paths only see what the test sets up.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "FSPATH_CONFIG",
    "FSPATH_SEARCH_PATHS",
    "FSPATH_INCLUDE_CWD",
    "FSPATH_CWD_POSITION",
    "FSPATH_LOG_MODE",
];

/// Isolated working directory for one test.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// The fspath binary with no working directory or environment changes.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("fspath").expect("Failed to find fspath binary")
    }

    /// The fspath binary running in the temp directory with a clean
    /// environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.temp_path);
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// `path` relative to the temp directory, as a string argument.
    pub fn arg(&self, relative: &str) -> String {
        self.temp_path.join(relative).display().to_string()
    }

    /// Create a directory (and parents) under the temp directory.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with `contents`, creating parent directories.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write `fspath.yaml` into the temp directory.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        self.write_file("fspath.yaml", yaml)
    }

    /// Run `args` and return stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run fspath");

        assert!(
            output.status.success(),
            "fspath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
