// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::action::Action;
use crate::error::{Error, Result};

/// Usage line printed for malformed invocations.
pub const USAGE: &str = "Usage: ctask [build|test]";

/// Configure, build, and test a CMake project with one command
#[derive(Debug, Parser)]
#[command(name = "ctask")]
#[command(version, about, long_about = None)]
#[command(after_help = "Actions:\n  build  Configure and compile inside the build directory\n  test   Run the test suite inside an existing build directory")]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "CTASK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Action to run (build or test)
    #[arg(value_name = "ACTION")]
    pub action: Option<String>,
}

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum Parsed {
    /// Arguments are well formed.
    Run(Cli),
    /// `--help` or `--version`: print the text and exit successfully.
    Info(String),
}

impl Cli {
    /// Parse arguments, folding every clap failure into a usage error.
    pub fn parse_args<I, T>(args: I) -> Result<Parsed>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(Parsed::Run(cli)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Ok(Parsed::Info(e.render().to_string()))
            }
            Err(e) => {
                tracing::debug!("argument error: {}", e.kind());
                Err(Error::Usage)
            }
        }
    }

    /// The requested action; a missing argument is a usage error.
    pub fn action(&self) -> Result<Action> {
        match &self.action {
            Some(name) => name.parse(),
            None => Err(Error::Usage),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
