// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! All problems are collected and reported together.

use crate::{CellsplitterConfig, ConfigError, ConfigResult};

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    InvalidPortRange { port_name: String, port: u16 },
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPortRange { port_name, port } => {
                write!(
                    f,
                    "Port {} = {} is outside valid range (1024-65535)",
                    port_name, port
                )
            }
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &CellsplitterConfig) -> ConfigResult<()> {
    let errors = collect_errors(config);
    if errors.is_empty() {
        return Ok(());
    }

    let error_messages = errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n");
    Err(ConfigError::ValidationError(format!(
        "Configuration validation failed:\n{}",
        error_messages
    )))
}

/// Every validation problem in `config`, in section order
pub fn collect_errors(config: &CellsplitterConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    if config.api.port < 1024 {
        errors.push(ConfigValidationError::InvalidPortRange {
            port_name: "api.port".to_string(),
            port: config.api.port,
        });
    }
    if config.api.host.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "api.host".to_string(),
        });
    }

    if config.calculator.default_vessels_used < 1 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "calculator.default_vessels_used".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if !(1..=6).contains(&config.calculator.significant_digits) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "calculator.significant_digits".to_string(),
            reason: "must be between 1 and 6".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }
    if config.logging.file_logging && config.logging.log_dir.as_os_str().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "logging.log_dir".to_string(),
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_port_range() {
        let mut config = CellsplitterConfig::default();
        config.api.port = 80;

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("api.port"));
                assert!(msg.contains("1024-65535"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_all_problems_reported() {
        let mut config = CellsplitterConfig::default();
        config.api.host = " ".to_string();
        config.calculator.significant_digits = 0;
        config.calculator.default_vessels_used = 0;
        config.logging.level = "loud".to_string();

        let errors = collect_errors(&config);
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors[0],
            ConfigValidationError::MissingRequired {
                field: "api.host".to_string()
            }
        );
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = CellsplitterConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
