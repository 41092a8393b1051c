//! Test environment for isolated holdr runs.
//!
//! Provides `TestEnv` - temp directories for the project and for HOME, plus
//! helpers to run the holdr binary inside them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a run
const HOLDR_ENV_VARS: &[&str] = &[
    "HOLDR_PACKAGE",
    "HOLDR_OUTPUT_DIR",
    "HOLDR_DEFAULT_INCLUDE",
    "HOLDR_JOBS",
    "HOLDR_PRUNE_STALE",
    "HOLDR_VERBOSITY",
];

/// Result of running a holdr CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {line:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated project + home directory
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    holdr_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            holdr_bin: PathBuf::from(env!("CARGO_BIN_EXE_holdr")),
        }
    }

    /// Environment with `holdr.toml` declaring `package`
    pub fn with_package(package: &str) -> Self {
        let env = Self::new();
        env.write_project_file("holdr.toml", &format!("package = \"{package}\"\n"));
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run holdr from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run holdr from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.holdr_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));
        for key in HOLDR_ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute holdr");
        output_to_result(output)
    }

    /// Write a file below the project root, creating directories
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn remove_project_file(&self, relative_path: &str) {
        std::fs::remove_file(self.project_path(relative_path)).expect("Failed to remove file");
    }

    /// Read a generated file's content
    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
