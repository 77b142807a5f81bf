//! Test helpers for black-box CLI tests.
//!
//! Provides a scratch project DSL for running the ctask binary against
//! stub build and test commands.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the ctask binary with a clean
/// environment for the variables ctask reads.
pub fn ctask_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ctask"));
    for var in ["CTASK_CONFIG", "CTASK_LOG", "NO_COLOR", "COLOR"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Scratch project directory bounded by a `.git` marker.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Project without a config file (defaults apply).
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with the given ctask.toml content.
    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.write("ctask.toml", config);
        project
    }

    /// Project whose steps append their names to `log.txt` at the root.
    ///
    /// Each argument is a shell snippet appended after the log line, e.g.
    /// `"exit 2"` to make that step fail.
    pub fn with_stubs(configure: &str, build: &str, test: &str) -> Self {
        Self::with_config(&format!(
            r#"version = 1

[build]
configure = "echo configure >> ../log.txt; {configure}"
command = "echo build >> ../log.txt; {build}"

[test]
command = "echo test >> ../log.txt; {test}"
"#
        ))
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, content: &str) {
        let full = self.path().join(rel);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    pub fn mkdir(&self, rel: &str) {
        std::fs::create_dir_all(self.path().join(rel)).unwrap();
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path().join(rel).exists()
    }

    /// Contents of the step log, empty when no step ran.
    pub fn log(&self) -> String {
        std::fs::read_to_string(self.path().join("log.txt")).unwrap_or_default()
    }

    /// ctask invocation rooted in this project.
    pub fn ctask(&self, args: &[&str]) -> Command {
        let mut cmd = ctask_cmd();
        cmd.args(args).current_dir(self.path());
        cmd
    }
}
