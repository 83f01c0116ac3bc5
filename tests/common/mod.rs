//! Shared testing utilities for yoga-advisor CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `yoga-advisor` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("yoga-advisor").expect("Failed to locate yoga-advisor binary");
        cmd.current_dir(self.work_dir()).env_remove("GROQ_API_KEY");
        cmd
    }

    /// Write `content` to a file in the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

/// Arguments for a complete `prompt` invocation.
#[allow(dead_code)]
pub fn prompt_args() -> Vec<&'static str> {
    vec![
        "prompt",
        "--weight",
        "72.5",
        "--height-feet",
        "5",
        "--height-inches",
        "9",
        "--age",
        "34",
        "--gender",
        "female",
        "--health-issue",
        "lower back pain",
    ]
}
