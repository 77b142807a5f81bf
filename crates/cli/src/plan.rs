// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered steps for each action.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::action::Action;
use crate::config::Config;

/// Which external tool a step delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Prepare build metadata from the source tree.
    Configure,
    /// Compile and link using the prepared metadata.
    Compile,
    /// Execute the test suite against build artifacts.
    Test,
}

impl StepKind {
    pub fn name(self) -> &'static str {
        match self {
            StepKind::Configure => "configure",
            StepKind::Compile => "build",
            StepKind::Test => "test",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    /// Shell command line, passed verbatim to the shell.
    pub command: String,
}

/// How the build directory is treated before the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirPolicy {
    /// Create it (and parents) if absent.
    Create,
    /// Fail if it does not already exist.
    Require,
}

/// Everything needed to run one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub action: Action,
    /// Working directory for every step.
    pub build_dir: PathBuf,
    pub dir_policy: DirPolicy,
    /// Steps in execution order.
    pub steps: Vec<Step>,
}

impl Plan {
    /// Build the plan for `action`, resolving the build directory against `root`.
    pub fn new(action: Action, config: &Config, root: &Path) -> Self {
        let build_dir = root.join(&config.build.dir);

        let (dir_policy, steps) = match action {
            Action::Build => (
                DirPolicy::Create,
                vec![
                    Step {
                        kind: StepKind::Configure,
                        command: config.build.configure.clone(),
                    },
                    Step {
                        kind: StepKind::Compile,
                        command: config.build.command.clone(),
                    },
                ],
            ),
            Action::Test => (
                DirPolicy::Require,
                vec![Step {
                    kind: StepKind::Test,
                    command: config.test.command.clone(),
                }],
            ),
        };

        Self {
            action,
            build_dir,
            dir_policy,
            steps,
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
