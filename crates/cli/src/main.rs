// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ctask CLI entry point.

use termcolor::StandardStream;
use tracing_subscriber::{EnvFilter, fmt};

use ctask::cli::{Cli, Parsed};
use ctask::color;
use ctask::error::ExitCode;
use ctask::runner::ShellRunner;

fn init_logging() {
    let filter = EnvFilter::try_from_env("CTASK_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => match e.downcast_ref::<ctask::Error>() {
            Some(err) => {
                report(err);
                ExitCode::from(err)
            }
            None => {
                eprintln!("ctask: {}", e);
                ExitCode::Failure
            }
        },
    };

    std::process::exit(exit_code.code());
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = match Cli::parse_args(std::env::args_os())? {
        Parsed::Run(cli) => cli,
        Parsed::Info(text) => {
            print!("{}", text);
            return Ok(ExitCode::Success);
        }
    };

    let cwd = std::env::current_dir()?;
    let out = StandardStream::stdout(color::resolve_color());
    ctask::dispatch::run(&cli, &cwd, &ShellRunner, out)?;
    Ok(ExitCode::Success)
}

/// Print an error where the user expects it.
fn report(err: &ctask::Error) {
    if err.is_dispatch_outcome() {
        let mut out = StandardStream::stdout(color::resolve_color());
        if color::write_failure(&mut out, &err.to_string()).is_err() {
            eprintln!("{}", err);
        }
    } else {
        eprintln!("ctask: {}", err);
    }
}
