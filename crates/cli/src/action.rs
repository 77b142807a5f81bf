// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of dispatcher actions.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Action selected by the single positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Configure and compile inside the build directory.
    Build,
    /// Run the test suite inside an existing build directory.
    Test,
}

impl Action {
    /// All actions, in help order.
    pub const ALL: &'static [Action] = &[Action::Build, Action::Test];

    pub fn name(self) -> &'static str {
        match self {
            Action::Build => "build",
            Action::Test => "test",
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    /// Exact, case-sensitive match against the action names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
