//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::destination::backend::DEFAULT_ENDPOINT;
use crate::destination::console::DEFAULT_CATEGORY_WIDTH;
use crate::destination::{BackendLog, ConsoleLog, LogDestination};
use crate::dispatch::Logger;
use crate::model::{LevelRange, LogLevel, DEFAULT_SEPARATOR};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PRETTYLOG_CONFIG";

/// Environment variable overriding the console's minimum level.
pub const MIN_LEVEL_ENV_VAR: &str = "PRETTYLOG_MIN_LEVEL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A level name in the config or environment is unknown.
    #[error("Invalid level for {setting}: {value:?}")]
    InvalidLevel {
        /// Which setting held the value.
        setting: String,
        /// The rejected value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/prettylog/config.toml`:
///
/// ```toml
/// separator = " | "
///
/// [console]
/// min_level = "verbose"
/// category_width = 16
///
/// [backend]
/// enabled = true
/// endpoint = "https://logs.example.com/ingest"
/// min_level = "warning"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Separator between message fragments.
    #[serde(default)]
    pub separator: Option<String>,

    /// Path to the file receiving internal diagnostics.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// `[console]` table.
    #[serde(default)]
    pub console: Option<ConsoleSection>,

    /// `[backend]` table.
    #[serde(default)]
    pub backend: Option<BackendSection>,
}

/// `[console]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConsoleSection {
    /// Print to stdout at all.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Lowest level printed, by name.
    #[serde(default)]
    pub min_level: Option<String>,

    /// Highest level printed, by name.
    #[serde(default)]
    pub max_level: Option<String>,

    /// Include sensitive fragments.
    #[serde(default)]
    pub allow_sensitive: Option<bool>,

    /// Width of the category column.
    #[serde(default)]
    pub category_width: Option<usize>,
}

/// `[backend]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BackendSection {
    /// Send statements to the backend.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Log server URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Lowest level sent, by name.
    #[serde(default)]
    pub min_level: Option<String>,

    /// Include sensitive fragments.
    #[serde(default)]
    pub allow_sensitive: Option<bool>,
}

/// Resolved console settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    /// Whether a console destination is built.
    pub enabled: bool,
    /// `None` means no lower bound.
    pub min_level: Option<LogLevel>,
    /// `None` means no upper bound.
    pub max_level: Option<LogLevel>,
    /// Include sensitive fragments.
    pub allow_sensitive: bool,
    /// Width of the category column.
    pub category_width: usize,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min_level: None,
            max_level: None,
            allow_sensitive: true,
            category_width: DEFAULT_CATEGORY_WIDTH,
        }
    }
}

/// Resolved backend settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    /// Whether a backend destination is built.
    pub enabled: bool,
    /// Log server URL.
    pub endpoint: String,
    /// Lowest level sent.
    pub min_level: LogLevel,
    /// Include sensitive fragments.
    pub allow_sensitive: bool,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            min_level: LogLevel::Info,
            allow_sensitive: false,
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Separator between message fragments.
    pub separator: String,
    /// File receiving internal diagnostics.
    pub log_file_path: PathBuf,
    /// Console destination settings.
    pub console: ConsoleSettings,
    /// Backend destination settings.
    pub backend: BackendSettings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            log_file_path: default_log_path(),
            console: ConsoleSettings::default(),
            backend: BackendSettings::default(),
        }
    }
}

impl ResolvedConfig {
    /// Level range of the console destination.
    pub fn console_range(&self) -> LevelRange {
        match (&self.console.min_level, &self.console.max_level) {
            (None, None) => LevelRange::allow_all(),
            (Some(min), None) => LevelRange::allow_from(min.clone()),
            (None, Some(max)) => LevelRange::allow_until(max.clone()),
            (Some(min), Some(max)) => LevelRange::between(min.clone(), max.clone()),
        }
    }

    /// Build the destinations this configuration enables.
    pub fn build_destinations(&self) -> Vec<Box<dyn LogDestination>> {
        let mut destinations: Vec<Box<dyn LogDestination>> = Vec::new();

        if self.console.enabled {
            destinations.push(Box::new(
                ConsoleLog::new()
                    .with_level_range(self.console_range())
                    .with_sensitive_content(self.console.allow_sensitive)
                    .with_category_width(self.console.category_width),
            ));
        }

        if self.backend.enabled {
            destinations.push(Box::new(
                BackendLog::new(self.backend.endpoint.clone())
                    .with_level_range(LevelRange::allow_from(self.backend.min_level.clone()))
                    .with_sensitive_content(self.backend.allow_sensitive),
            ));
        }

        destinations
    }

    /// [`Logger`] over [`ResolvedConfig::build_destinations`].
    pub fn build_logger(&self) -> Logger {
        Logger::new(self.build_destinations())
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/prettylog/prettylog.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("prettylog").join("prettylog.log")
    } else {
        PathBuf::from("prettylog.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/prettylog/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("prettylog").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `PRETTYLOG_CONFIG` environment variable
/// 3. Default path `~/.config/prettylog/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV_VAR} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn parse_level(setting: &str, value: &str) -> Result<LogLevel, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidLevel {
        setting: setting.to_string(),
        value: value.to_string(),
    })
}

fn parse_optional_level(
    setting: &str,
    value: Option<String>,
) -> Result<Option<LogLevel>, ConfigError> {
    value.map(|v| parse_level(setting, &v)).transpose()
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLevel`] for unknown level names.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let console = config.console.unwrap_or_default();
    let backend = config.backend.unwrap_or_default();

    Ok(ResolvedConfig {
        separator: config.separator.unwrap_or(defaults.separator),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        console: ConsoleSettings {
            enabled: console.enabled.unwrap_or(defaults.console.enabled),
            min_level: parse_optional_level("console.min_level", console.min_level)?,
            max_level: parse_optional_level("console.max_level", console.max_level)?,
            allow_sensitive: console
                .allow_sensitive
                .unwrap_or(defaults.console.allow_sensitive),
            category_width: console
                .category_width
                .unwrap_or(defaults.console.category_width),
        },
        backend: BackendSettings {
            enabled: backend.enabled.unwrap_or(defaults.backend.enabled),
            endpoint: backend.endpoint.unwrap_or(defaults.backend.endpoint),
            min_level: parse_optional_level("backend.min_level", backend.min_level)?
                .unwrap_or(defaults.backend.min_level),
            allow_sensitive: backend
                .allow_sensitive
                .unwrap_or(defaults.backend.allow_sensitive),
        },
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PRETTYLOG_MIN_LEVEL`: Override the console's minimum level
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLevel`] if the variable holds an unknown level.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(level) = std::env::var(MIN_LEVEL_ENV_VAR) {
        config.console.min_level = Some(parse_level(MIN_LEVEL_ENV_VAR, &level)?);
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    separator_override: Option<String>,
    min_level_override: Option<LogLevel>,
    backend_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(separator) = separator_override {
        config.separator = separator;
    }

    if let Some(level) = min_level_override {
        config.console.min_level = Some(level);
    }

    if let Some(enabled) = backend_override {
        config.backend.enabled = enabled;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
