pub mod action;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod dispatch;
pub mod error;
pub mod plan;
pub mod runner;
pub mod verbose;

pub use action::Action;
pub use cli::{Cli, Parsed};
pub use config::{BuildConfig, Config, TestConfig};
pub use dispatch::Dispatcher;
pub use error::{Error, ExitCode, Result};
pub use plan::{DirPolicy, Plan, Step, StepKind};
pub use runner::{CommandRunner, CommandStatus, ShellRunner};
pub use verbose::VerboseLogger;
