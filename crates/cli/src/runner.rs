// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External command execution.
//!
//! Commands are opaque shell strings. Each one runs to completion with an
//! explicit working directory and inherited stdio.

use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};

/// How an external command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// The process exited with this status code.
    Exited(i32),
    /// The process was terminated without an exit code (e.g., by a signal).
    Signaled,
}

impl CommandStatus {
    pub fn success(self) -> bool {
        self == CommandStatus::Exited(0)
    }
}

impl From<ExitStatus> for CommandStatus {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => CommandStatus::Exited(code),
            None => CommandStatus::Signaled,
        }
    }
}

/// Seam between the dispatcher and the operating system.
pub trait CommandRunner {
    /// Run `command` in `cwd`, blocking until it finishes.
    ///
    /// Returns `Err` only when the command could not be started at all.
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandStatus>;
}

/// Runs commands through the platform shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandStatus> {
        tracing::trace!(command, cwd = %cwd.display(), "spawning shell");

        let status = shell_command(command)
            .current_dir(cwd)
            .status()
            .map_err(|e| Error::Spawn {
                command: command.to_string(),
                source: e,
            })?;

        tracing::trace!(command, ?status, "shell exited");
        Ok(status.into())
    }
}

/// Build a `Command` that hands `command` to the shell.
pub fn shell_command(command: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
