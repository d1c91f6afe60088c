// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to one section of `cellsplitter_configuration.toml`.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CellsplitterConfig {
    pub api: ApiConfig,
    pub catalog: CatalogConfig,
    pub calculator: CalculatorConfig,
    pub logging: LoggingConfig,
}

/// REST API server configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Catalog sources. `None` uses the built-in list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON array of vessels
    pub vessels_path: Option<PathBuf>,
    /// JSON array of cell lines
    pub cell_lines_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Vessel count used when a request omits `vessels_used`
    pub default_vessels_used: i64,
    /// Significant figures in compact labels
    pub significant_digits: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_vessels_used: 1,
            significant_digits: 2,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level (error, warn, info, debug, trace)
    pub level: String,
    pub log_dir: PathBuf,
    /// Write JSON log files in addition to the console
    pub file_logging: bool,
    /// Delete run directories older than this many days
    pub retention_days: u64,
    /// Keep at most this many most recent runs
    pub retention_runs: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("./logs"),
            file_logging: false,
            retention_days: 7,
            retention_runs: 10,
        }
    }
}
