//! Configuration file loading with precedence handling.

use crate::model::{Existing, Hints, Placement, Strategy};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
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

    /// A hint setting names an unknown value.
    #[error("Invalid value {value:?} for `{field}` in {path}")]
    InvalidValue {
        /// Path of the offending file.
        path: PathBuf,
        /// Setting name.
        field: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tabviews/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default existence requirement (`always`, `never`, `current_tab`).
    #[serde(default)]
    pub existing: Option<String>,

    /// Default strategy list, tried in order.
    #[serde(default)]
    pub strategy: Option<Vec<String>>,

    /// Whether views may be created when none qualifies.
    #[serde(default)]
    pub create_if_needed: Option<bool>,

    /// Placement of created views (`new_tab`, `current_tab`).
    #[serde(default)]
    pub placement: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Width of the rendered tab bar in columns.
    #[serde(default)]
    pub tab_bar_width: Option<u16>,
}

impl ConfigFile {
    /// Reject hint values that do not name a known option.
    ///
    /// Hints passed at runtime ignore unknown values; the config file is
    /// written by hand, so typos are reported instead.
    pub fn validate(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, value: &str| ConfigError::InvalidValue {
            path: path.to_path_buf(),
            field,
            value: value.to_string(),
        };

        if let Some(existing) = &self.existing {
            Existing::parse(existing).ok_or_else(|| invalid("existing", existing.as_str()))?;
        }
        for name in self.strategy.iter().flatten() {
            Strategy::parse(name).ok_or_else(|| invalid("strategy", name.as_str()))?;
        }
        if let Some(placement) = &self.placement {
            Placement::parse(placement).ok_or_else(|| invalid("placement", placement.as_str()))?;
        }
        Ok(())
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Hints used when the caller supplies none of its own.
    pub default_hints: Hints,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Tab bar width in columns.
    pub tab_bar_width: u16,
}

/// Default tab bar width.
pub const DEFAULT_TAB_BAR_WIDTH: u16 = 80;

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            default_hints: Hints::default(),
            log_file_path: default_log_path(),
            tab_bar_width: DEFAULT_TAB_BAR_WIDTH,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tabviews/tabviews.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tabviews").join("tabviews.log")
    } else {
        PathBuf::from("tabviews.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read, parsed or validated.
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

    config.validate(&path)?;
    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tabviews/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tabviews").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `TABVIEWS_CONFIG` environment variable
/// 3. Default path `~/.config/tabviews/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("TABVIEWS_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TABVIEWS_STRATEGY`: comma-separated strategy list
/// - `TABVIEWS_EXISTING`: existence requirement
///
/// Unrecognized values leave the config unchanged.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("TABVIEWS_STRATEGY") {
        let strategy: Vec<Strategy> = raw.split(',').filter_map(Strategy::parse).collect();
        if !strategy.is_empty() {
            config.default_hints.strategy = strategy;
        }
    }

    if let Some(existing) = std::env::var("TABVIEWS_EXISTING")
        .ok()
        .as_deref()
        .and_then(Existing::parse)
    {
        config.default_hints.existing = existing;
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// Unrecognized hint names fall back to defaults (files read through
/// [`load_config_file`] are already validated).
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let hints = &defaults.default_hints;
    let default_hints = Hints {
        existing: config
            .existing
            .as_deref()
            .and_then(Existing::parse)
            .unwrap_or(hints.existing),
        strategy: config
            .strategy
            .map(|names| names.iter().filter_map(|n| Strategy::parse(n)).collect())
            .unwrap_or_else(|| hints.strategy.clone()),
        create_if_needed: config.create_if_needed.unwrap_or(hints.create_if_needed),
        placement: config
            .placement
            .as_deref()
            .and_then(Placement::parse)
            .unwrap_or(hints.placement),
    };

    ResolvedConfig {
        default_hints,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        tab_bar_width: config.tab_bar_width.unwrap_or(defaults.tab_bar_width),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `existing_override` - Optional `--existing` value
/// * `strategy_override` - `--strategy` values; empty leaves the configured list
/// * `create_override` - Optional creation permission (`--no-create` gives `Some(false)`)
/// * `placement_override` - Optional `--placement` value
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    existing_override: Option<Existing>,
    strategy_override: Vec<Strategy>,
    create_override: Option<bool>,
    placement_override: Option<Placement>,
) -> ResolvedConfig {
    if let Some(existing) = existing_override {
        config.default_hints.existing = existing;
    }

    if !strategy_override.is_empty() {
        config.default_hints.strategy = strategy_override;
    }

    if let Some(create) = create_override {
        config.default_hints.create_if_needed = create;
    }

    if let Some(placement) = placement_override {
        config.default_hints.placement = placement;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
