// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. default:
//!    - If not stdout.is_tty() → no color
//!    - If CI env var set → no color
//!    - Else → auto

use std::io::{self, IsTerminal, Write};

use termcolor::{ColorChoice, WriteColor};

/// Resolve color choice from environment variables.
///
/// Priority: NO_COLOR > COLOR > auto-detect
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !io::stdout().is_terminal() || std::env::var_os("CI").is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for dispatcher output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold cyan "Running:" label.
    pub fn running() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan)).set_bold(true);
        spec
    }

    /// Bold command text.
    pub fn command() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Red failure line.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

/// Write `Running: <command>` and flush so it precedes the child's output.
pub fn write_running<W: WriteColor + ?Sized>(out: &mut W, command: &str) -> io::Result<()> {
    out.set_color(&scheme::running())?;
    write!(out, "Running:")?;
    out.reset()?;
    write!(out, " ")?;
    out.set_color(&scheme::command())?;
    write!(out, "{command}")?;
    out.reset()?;
    writeln!(out)?;
    out.flush()
}

/// Write a failure line in the failure color.
pub fn write_failure<W: WriteColor + ?Sized>(out: &mut W, message: &str) -> io::Result<()> {
    out.set_color(&scheme::fail())?;
    write!(out, "{message}")?;
    out.reset()?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
