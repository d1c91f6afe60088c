// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Values are resolved in three tiers, later tiers winning:
//! 1. TOML file
//! 2. Environment variables
//! 3. CLI arguments

use crate::{CellsplitterConfig, ConfigError, ConfigResult};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "cellsplitter_configuration.toml";

const CONFIG_PATH_ENV: &str = "CELLSPLITTER_CONFIG_PATH";

/// Find the cellsplitter configuration file
///
/// Search order:
/// 1. `CELLSPLITTER_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location,
/// or if `CELLSPLITTER_CONFIG_PATH` names a file that does not exist
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by {} not found: {}",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        search_paths.extend(cwd.ancestors().skip(1).take(5).map(|p| p.join(CONFIG_FILE_NAME)));
    }

    if let Some(found) = search_paths.iter().find(|p| p.exists()) {
        return Ok(found.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet {} to specify a custom location.",
        CONFIG_FILE_NAME, search_list, CONFIG_PATH_ENV
    )))
}

/// Load configuration from a TOML file and apply overrides
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if the config file is not found or contains invalid TOML.
/// Validation is separate; see [`crate::validate_config`].
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<CellsplitterConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: CellsplitterConfig = toml::from_str(&content)?;

    apply_overrides(&mut config, cli_args);
    Ok(config)
}

/// Like [`load_config`], but a config file that cannot be discovered yields
/// the built-in defaults (with overrides still applied).
///
/// An explicit path, or one named by `CELLSPLITTER_CONFIG_PATH`, must exist.
pub fn load_config_or_default(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<CellsplitterConfig> {
    if config_path.is_some() || env::var_os(CONFIG_PATH_ENV).is_some() {
        return load_config(config_path, cli_args);
    }

    match find_config_file() {
        Ok(path) => load_config(Some(&path), cli_args),
        Err(ConfigError::FileNotFound(_)) => {
            let mut config = CellsplitterConfig::default();
            apply_overrides(&mut config, cli_args);
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

fn apply_overrides(config: &mut CellsplitterConfig, cli_args: Option<&HashMap<String, String>>) {
    apply_environment_overrides(config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(config, cli);
    }
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `CELLSPLITTER_API_HOST` -> `api.host`
/// - `CELLSPLITTER_API_PORT` -> `api.port`
/// - `CELLSPLITTER_LOG_LEVEL` -> `logging.level`
/// - `CELLSPLITTER_VESSELS_PATH` -> `catalog.vessels_path`
/// - `CELLSPLITTER_CELL_LINES_PATH` -> `catalog.cell_lines_path`
///
/// Values that fail to parse are ignored.
pub fn apply_environment_overrides(config: &mut CellsplitterConfig) {
    if let Ok(value) = env::var("CELLSPLITTER_API_HOST") {
        config.api.host = value;
    }
    if let Ok(value) = env::var("CELLSPLITTER_API_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }
    if let Ok(value) = env::var("CELLSPLITTER_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("CELLSPLITTER_VESSELS_PATH") {
        config.catalog.vessels_path = Some(PathBuf::from(value));
    }
    if let Ok(value) = env::var("CELLSPLITTER_CELL_LINES_PATH") {
        config.catalog.cell_lines_path = Some(PathBuf::from(value));
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - e.g. `{"api_host": "127.0.0.1", "api_port": "9000"}`
pub fn apply_cli_overrides(config: &mut CellsplitterConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("api_host") {
        config.api.host = value.clone();
    }
    if let Some(value) = cli_args.get("api_port") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("vessels_path") {
        config.catalog.vessels_path = Some(PathBuf::from(value));
    }
    if let Some(value) = cli_args.get("cell_lines_path") {
        config.catalog.cell_lines_path = Some(PathBuf::from(value));
    }
    if let Some(value) = cli_args.get("file_logging") {
        config.logging.file_logging = value.eq_ignore_ascii_case("true") || value == "1";
    }
}
