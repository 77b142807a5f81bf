//! Behavioral tests for ctask.toml handling, environment variables, and
//! diagnostics.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > An unsupported config version is an error with exit 1.
#[test]
fn unsupported_version_fails() {
    let project = Project::with_config("version = 2\n");
    project
        .ctask(&["build"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unsupported config version 2"));
    assert!(!project.exists("build"));
}

/// > Explicit config paths must exist.
#[test]
fn missing_explicit_config_fails() {
    let project = Project::empty();
    project
        .ctask(&["--config", "nope.toml", "build"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("config file not found"));
}

/// > Config errors are checked after the action, so bad actions still
/// > report the action.
#[test]
fn unknown_action_reported_before_config_errors() {
    let project = Project::with_config("version = 9\n");
    project
        .ctask(&["deploy"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Unknown action: deploy"));
}

#[cfg(unix)]
mod with_shell {
    use crate::prelude::*;

    /// > Unknown keys are warnings, not errors.
    #[test]
    fn unknown_key_warns() {
        let project = Project::with_config(
            "version = 1\nparallel = true\n[build]\nconfigure = \"true\"\ncommand = \"true\"\n",
        );
        project
            .ctask(&["build"])
            .assert()
            .success()
            .stderr(predicates::str::contains("unrecognized field `parallel`"));
    }

    /// > CTASK_CONFIG selects the config file.
    #[test]
    fn env_config_sets_path() {
        let project = Project::empty();
        project.write(
            "configs/ci.toml",
            "version = 1\n[build]\nconfigure = \"echo ci >> ../log.txt\"\ncommand = \"true\"\n",
        );

        project
            .ctask(&["build"])
            .env("CTASK_CONFIG", project.path().join("configs/ci.toml"))
            .assert()
            .success();

        assert_eq!(project.log(), "ci\n");
    }

    /// > -C takes precedence over a discovered ctask.toml.
    #[test]
    fn short_config_flag_wins_over_discovery() {
        let project = Project::with_stubs("exit 5", "true", "true");
        project.write(
            "alt.toml",
            "version = 1\n[build]\nconfigure = \"true\"\ncommand = \"true\"\n",
        );

        project.ctask(&["-C", "alt.toml", "build"]).assert().success();
    }

    /// > A custom build directory is created and used.
    #[test]
    fn custom_build_dir() {
        let project = Project::with_config(
            "version = 1\n[build]\ndir = \"out/debug\"\nconfigure = \"pwd > ../../cwd.txt\"\ncommand = \"true\"\n",
        );

        project.ctask(&["build"]).assert().success();

        assert!(project.path().join("out/debug").is_dir());
        assert!(!project.exists("build"));
        let cwd = std::fs::read_to_string(project.path().join("cwd.txt")).unwrap();
        assert!(cwd.trim_end().ends_with("out/debug"));
    }

    /// > --verbose writes diagnostics to stderr only.
    #[test]
    fn verbose_writes_to_stderr() {
        let project = Project::with_stubs("true", "true", "true");
        project
            .ctask(&["--verbose", "build"])
            .assert()
            .success()
            .stderr(
                predicates::str::contains("[verbose] config:")
                    .and(predicates::str::contains("[verbose] configure finished in")),
            )
            .stdout(predicates::str::contains("[verbose]").not());
    }

    /// > CTASK_LOG enables debug logging to stderr.
    #[test]
    fn env_log_enables_debug() {
        let project = Project::with_stubs("true", "true", "true");
        project
            .ctask(&["build"])
            .env("CTASK_LOG", "debug")
            .assert()
            .success()
            .stderr(predicates::str::contains("DEBUG"));
    }
}
