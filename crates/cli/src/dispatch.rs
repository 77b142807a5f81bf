// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Action dispatch.
//!
//! Runs the steps of a [`Plan`] in order and stops at the first failure,
//! forwarding that step's exit code. The process working directory is never
//! changed; every step receives the build directory explicitly.

use std::path::{Path, PathBuf};
use std::time::Instant;

use termcolor::WriteColor;

use crate::cli::Cli;
use crate::color;
use crate::config::{self, Config};
use crate::discovery;
use crate::error::{Error, Result};
use crate::plan::{DirPolicy, Plan, Step};
use crate::runner::{CommandRunner, CommandStatus};
use crate::verbose::VerboseLogger;

/// Executes plans against a [`CommandRunner`], writing the transcript to `out`.
pub struct Dispatcher<'a, R: CommandRunner + ?Sized, W: WriteColor> {
    runner: &'a R,
    out: W,
    verbose: VerboseLogger,
}

impl<'a, R: CommandRunner + ?Sized, W: WriteColor> Dispatcher<'a, R, W> {
    pub fn new(runner: &'a R, out: W, verbose: VerboseLogger) -> Self {
        Self {
            runner,
            out,
            verbose,
        }
    }

    /// Recover the output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run every step of `plan`; the first failure aborts the rest.
    pub fn run(&mut self, plan: &Plan) -> Result<()> {
        tracing::debug!(action = %plan.action, build_dir = %plan.build_dir.display(), "dispatching");
        self.verbose
            .log(&format!("build dir: {}", plan.build_dir.display()));

        self.prepare_build_dir(plan)?;

        for step in &plan.steps {
            self.run_step(step, &plan.build_dir)?;
        }
        Ok(())
    }

    fn prepare_build_dir(&self, plan: &Plan) -> Result<()> {
        match plan.dir_policy {
            DirPolicy::Create => {
                std::fs::create_dir_all(&plan.build_dir).map_err(|e| Error::Io {
                    path: plan.build_dir.clone(),
                    source: e,
                })
            }
            DirPolicy::Require if plan.build_dir.is_dir() => Ok(()),
            DirPolicy::Require => Err(Error::MissingBuildDir(plan.build_dir.clone())),
        }
    }

    fn run_step(&mut self, step: &Step, cwd: &Path) -> Result<()> {
        color::write_running(&mut self.out, &step.command).map_err(stdout_error)?;
        tracing::debug!(step = %step.kind, command = %step.command, "running step");

        let start = Instant::now();
        let status = self.runner.run(&step.command, cwd)?;
        self.verbose.step_finished(step.kind.name(), start.elapsed());

        match status {
            CommandStatus::Exited(0) => Ok(()),
            CommandStatus::Exited(code) => Err(Error::CommandFailed {
                command: step.command.clone(),
                code,
            }),
            CommandStatus::Signaled => Err(Error::Terminated {
                command: step.command.clone(),
            }),
        }
    }
}

fn stdout_error(source: std::io::Error) -> Error {
    Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}

/// Parse the action, resolve config, and run the resulting plan from `cwd`.
pub fn run<R, W>(cli: &Cli, cwd: &Path, runner: &R, out: W) -> Result<()>
where
    R: CommandRunner + ?Sized,
    W: WriteColor,
{
    let action = cli.action()?;
    let verbose = VerboseLogger::new(cli.verbose);

    let config = match discovery::resolve_config(cli.config.as_deref(), cwd)? {
        Some(path) => {
            verbose.log(&format!("config: {}", path.display()));
            config::load_with_warnings(&path)?
        }
        None => {
            verbose.log("config: none (using defaults)");
            Config::default()
        }
    };

    let plan = Plan::new(action, &config, cwd);
    Dispatcher::new(runner, out, verbose).run(&plan)
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
