// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output for `--verbose`.
//!
//! Writes `[verbose]` prefixed lines to stderr so stdout stays a clean
//! transcript of `Running:` lines and tool output.

use std::time::Duration;

/// Verbose output logger. All output is conditional on verbose mode.
#[derive(Debug, Clone, Copy)]
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("{}", Self::line(msg));
        }
    }

    /// Report how long a step took.
    pub fn step_finished(&self, step: &str, elapsed: Duration) {
        if self.enabled {
            eprintln!("{}", Self::step_line(step, elapsed));
        }
    }

    fn line(msg: &str) -> String {
        format!("[verbose] {}", msg)
    }

    fn step_line(step: &str, elapsed: Duration) -> String {
        Self::line(&format!("{} finished in {}ms", step, elapsed.as_millis()))
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
