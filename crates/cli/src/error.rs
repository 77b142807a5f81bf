// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// ctask error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing, extra, or malformed command-line arguments
    #[error("{}", crate::cli::USAGE)]
    Usage,

    /// Action outside the supported set
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// `test` was requested before the build directory exists
    #[error("Build directory does not exist. Run build first.")]
    MissingBuildDir(PathBuf),

    /// An external command exited with a non-zero status
    #[error("Command failed with return code {code}")]
    CommandFailed { command: String, code: i32 },

    /// An external command was terminated without an exit status
    #[error("Command terminated by signal: {command}")]
    Terminated { command: String },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The shell could not be started
    #[error("failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the message belongs on stdout as part of the run transcript.
    ///
    /// Dispatcher outcomes are reported on stdout next to the `Running:`
    /// lines; environment problems go to stderr with a `ctask:` prefix.
    pub fn is_dispatch_outcome(&self) -> bool {
        matches!(
            self,
            Error::Usage
                | Error::UnknownAction(_)
                | Error::MissingBuildDir(_)
                | Error::CommandFailed { .. }
                | Error::Terminated { .. }
        )
    }
}

/// Result type using ctask Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every step succeeded
    Success,
    /// Validation, configuration, or environment failure
    Failure,
    /// Exit status forwarded from a failed external command
    Forwarded(i32),
}

impl ExitCode {
    /// Numeric status passed to `std::process::exit`.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Failure => 1,
            ExitCode::Forwarded(code) => code,
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::CommandFailed { code, .. } => ExitCode::Forwarded(*code),
            Error::Usage
            | Error::UnknownAction(_)
            | Error::MissingBuildDir(_)
            | Error::Terminated { .. }
            | Error::Config { .. }
            | Error::Io { .. }
            | Error::Spawn { .. } => ExitCode::Failure,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
