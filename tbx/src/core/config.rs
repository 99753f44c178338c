//! # Tbx Configuration System
//!
//! File: tbx/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the optional configuration of the
//! `tbx` command-line tool. The library helpers never read configuration;
//! only the binary does.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.tbx.toml` in the current directory or an ancestor
//!    (the search stops at the first directory containing `.git`)
//! 2. The user file: `--config`/`TBX_CONFIG` if given, otherwise
//!    `config.toml` in the platform config directory for `tbx`
//! 3. Empty defaults
//!
//! Both tables merge key by key, so a project can override one alias without
//! hiding the rest of the user's. Values are expanded with
//! [`crate::common::fs::paths::expand`] after merging.
//!
//! ## Examples
//!
//! ```toml
//! [env]
//! PAGER = "cat"
//! BUILD_ROOT = "~/build"
//!
//! [aliases]
//! today = "date +%F"
//! tags = "git --no-pager tag"
//! ```
//!
//! ```rust,no_run
//! # fn main() -> tbx::Result<()> {
//! let cfg = tbx::core::config::load_config(None)?;
//! for (name, command) in &cfg.aliases {
//!     println!("{name}: {command}");
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::paths::expand;
use crate::common::process::CommandLine;
use crate::core::error::{Result, TbxError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The configuration file contents.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Environment variables applied while `tbx run` executes a command.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    /// Named command lines, run by `tbx alias <name>` or `tbx run @<name>`.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

const PROJECT_CONFIG_FILENAME: &str = ".tbx.toml";

/// Loads the merged, expanded and validated configuration.
///
/// `user_path` replaces the platform user config location when given. An
/// explicitly given file must exist.
pub fn load_config(user_path: Option<&Path>) -> Result<Config> {
    let user_config = match user_path {
        Some(path) => {
            info!("Loading user configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        None => load_user_config()?,
    };
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = load_project_config(&current_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_values(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "tbx", "tbx") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.tbx.toml) found in {} or ancestors.", start.display());
        Ok(None)
    }
}

/// Looks for `.tbx.toml` in `start` and its ancestors, up to the first
/// directory that contains `.git`.
pub fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for path in start.ancestors() {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
    }
    None
}

/// Reads and parses one TOML configuration file.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Overlays `project` on `user`, entry by entry.
pub fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = user;
    merged.env.extend(project_cfg.env);
    merged.aliases.extend(project_cfg.aliases);
    merged
}

fn expand_config_values(config: &mut Config) {
    debug!("Expanding configuration values...");
    for value in config.env.values_mut() {
        *value = expand(value);
    }
    for command in config.aliases.values_mut() {
        *command = expand(command);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    for name in config.env.keys() {
        if name.is_empty() || name.contains('=') || name.contains('\0') {
            return Err(anyhow!(TbxError::Config(format!(
                "Invalid environment variable name: '{}'.",
                name
            ))));
        }
    }
    for (name, command) in &config.aliases {
        if name.is_empty() || name.chars().any(char::is_whitespace) || name.starts_with('-') {
            return Err(anyhow!(TbxError::Config(format!(
                "Invalid alias name: '{}'. Names must be non-empty, without whitespace or a leading '-'.",
                name
            ))));
        }
        if let Err(err) = CommandLine::parse(command) {
            return Err(anyhow!(TbxError::Config(format!(
                "Alias '{}' has an invalid command line: {}",
                name, err
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
