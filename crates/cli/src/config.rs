// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles ctask.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    build: Option<toml::Value>,

    #[serde(default)]
    test: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Configure and build-execution settings.
    pub build: BuildConfig,

    /// Test-runner settings.
    pub test: TestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            build: BuildConfig::default(),
            test: TestConfig::default(),
        }
    }
}

/// `[build]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Build directory, relative to the invocation directory (default: build).
    pub dir: PathBuf,

    /// Configure command, run inside the build directory (default: cmake ..).
    pub configure: String,

    /// Build-execution command (default: cmake --build .).
    pub command: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(Self::DEFAULT_DIR),
            configure: Self::DEFAULT_CONFIGURE.to_string(),
            command: Self::DEFAULT_COMMAND.to_string(),
        }
    }
}

impl BuildConfig {
    pub const DEFAULT_DIR: &'static str = "build";
    pub const DEFAULT_CONFIGURE: &'static str = "cmake ..";
    pub const DEFAULT_COMMAND: &'static str = "cmake --build .";
}

/// `[test]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfig {
    /// Test-runner command (default: ctest --output-on-failure).
    pub command: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            command: Self::DEFAULT_COMMAND.to_string(),
        }
    }
}

impl TestConfig {
    pub const DEFAULT_COMMAND: &'static str = "ctest --output-on-failure";
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "build", "test"];

/// Known `[build]` keys.
const KNOWN_BUILD_KEYS: &[&str] = &["dir", "configure", "command"];

/// Known `[test]` keys.
const KNOWN_TEST_KEYS: &[&str] = &["command"];

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown_keys) = parse(content, path)?;
    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }
    Ok(config)
}

/// Parse config from string content.
///
/// Returns the config together with the dotted names of every unknown key.
pub fn parse(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade ctask to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let mut unknown_keys: Vec<String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    let build = match flexible.build {
        None => BuildConfig::default(),
        Some(value) => {
            let table = section_table("build", value).map_err(config_error)?;
            collect_unknown("build", &table, KNOWN_BUILD_KEYS, &mut unknown_keys);

            let defaults = BuildConfig::default();
            let dir = string_field("build", "dir", &table)
                .map_err(config_error)?
                .map(PathBuf::from)
                .unwrap_or(defaults.dir);
            let configure = command_field("build", "configure", &table)
                .map_err(config_error)?
                .unwrap_or(defaults.configure);
            let command = command_field("build", "command", &table)
                .map_err(config_error)?
                .unwrap_or(defaults.command);

            if dir.as_os_str().is_empty() {
                return Err(config_error("build.dir must not be empty".to_string()));
            }

            BuildConfig {
                dir,
                configure,
                command,
            }
        }
    };

    let test = match flexible.test {
        None => TestConfig::default(),
        Some(value) => {
            let table = section_table("test", value).map_err(config_error)?;
            collect_unknown("test", &table, KNOWN_TEST_KEYS, &mut unknown_keys);

            let command = command_field("test", "command", &table)
                .map_err(config_error)?
                .unwrap_or_else(|| TestConfig::default().command);

            TestConfig { command }
        }
    };

    Ok((
        Config {
            version,
            build,
            test,
        },
        unknown_keys,
    ))
}

fn section_table(section: &str, value: toml::Value) -> std::result::Result<toml::Table, String> {
    match value {
        toml::Value::Table(t) => Ok(t),
        other => Err(format!(
            "[{}] must be a table, found {}",
            section,
            other.type_str()
        )),
    }
}

fn collect_unknown(section: &str, table: &toml::Table, known: &[&str], out: &mut Vec<String>) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            out.push(format!("{}.{}", section, key));
        }
    }
}

fn string_field(
    section: &str,
    key: &str,
    table: &toml::Table,
) -> std::result::Result<Option<String>, String> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(format!(
            "{}.{} must be a string, found {}",
            section,
            key,
            other.type_str()
        )),
    }
}

/// Like `string_field`, but rejects blank commands.
fn command_field(
    section: &str,
    key: &str,
    table: &toml::Table,
) -> std::result::Result<Option<String>, String> {
    match string_field(section, key, table)? {
        Some(cmd) if cmd.trim().is_empty() => {
            Err(format!("{}.{} must not be empty", section, key))
        }
        other => Ok(other),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "ctask: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
