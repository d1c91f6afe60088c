// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Cellsplitter HTTP server

Usage:
  cargo run --bin cellsplitter-server -- [--config <file>] [--host <ip>] [--port <n>]
  cargo run --bin cellsplitter-server -- --debug-cellsplitter-api

Per-crate debug flags (`--debug-<crate>`, `--debug-all`) and
`CELLSPLITTER_DEBUG` are read before the regular arguments.
*/

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};

use cellsplitter_api::{create_http_server, ApiState};
use cellsplitter_config::{load_config_or_default, validate_config, CellsplitterConfig};
use cellsplitter_observability::{init_logging, parse_debug_flags, LoggingOptions};
use cellsplitter_services::{CalculatorSettings, Catalog};

/// Cellsplitter - cell-culture passage calculator REST server
#[derive(Parser, Debug)]
#[command(name = "cellsplitter-server", version, author, long_about = None)]
struct Args {
    /// Path to cellsplitter_configuration.toml (searched for when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    host: Option<String>,

    /// Bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON file with the vessel catalog
    #[arg(long)]
    vessels: Option<PathBuf>,

    /// JSON file with the cell-line catalog
    #[arg(long)]
    cell_lines: Option<PathBuf>,

    /// Base log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Also write JSON log files
    #[arg(long, default_value_t = false)]
    file_logging: bool,
}

impl Args {
    /// CLI values in the form `apply_cli_overrides` expects
    fn overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if let Some(host) = &self.host {
            overrides.insert("api_host".to_string(), host.clone());
        }
        if let Some(port) = self.port {
            overrides.insert("api_port".to_string(), port.to_string());
        }
        if let Some(path) = &self.vessels {
            overrides.insert("vessels_path".to_string(), path.display().to_string());
        }
        if let Some(path) = &self.cell_lines {
            overrides.insert("cell_lines_path".to_string(), path.display().to_string());
        }
        if let Some(level) = &self.log_level {
            overrides.insert("log_level".to_string(), level.clone());
        }
        if self.file_logging {
            overrides.insert("file_logging".to_string(), "true".to_string());
        }
        overrides
    }
}

fn logging_options(config: &CellsplitterConfig) -> LoggingOptions {
    LoggingOptions {
        base_level: config.logging.level.clone(),
        file_logging: config.logging.file_logging,
        log_dir: config.logging.log_dir.clone(),
        retention_days: config.logging.retention_days,
        retention_runs: config.logging.retention_runs,
        ..LoggingOptions::default()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let debug_flags = parse_debug_flags();
    let args = Args::parse_from(std::env::args().filter(|arg| !arg.starts_with("--debug-")));

    let config = load_config_or_default(args.config.as_deref(), Some(&args.overrides()))
        .context("Failed to load configuration")?;
    validate_config(&config)?;

    let _logging_guard = init_logging(&debug_flags, &logging_options(&config))?;
    info!(target: "cellsplitter-server", "🧫 Cellsplitter v{}", cellsplitter::VERSION);
    if debug_flags.any_enabled() {
        info!(
            target: "cellsplitter-server",
            "Debug logging enabled for: {:?}",
            debug_flags.enabled_crates
        );
    }

    let catalog = Catalog::load(
        config.catalog.vessels_path.as_deref(),
        config.catalog.cell_lines_path.as_deref(),
    )
    .context("Failed to load catalog")?;
    if catalog.vessels().is_empty() {
        warn!(target: "cellsplitter-server", "⚠️ Vessel catalog is empty; confluency mode will reject every request");
    }

    let settings = CalculatorSettings {
        default_vessels_used: config.calculator.default_vessels_used,
        significant_digits: config.calculator.significant_digits,
    };
    let app = create_http_server(ApiState::from_catalog(catalog, settings));

    let address = format!("{}:{}", config.api.host, config.api.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!(target: "cellsplitter-server", "🚀 Listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!(target: "cellsplitter-server", "👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(target: "cellsplitter-server", "⚠️ Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!(target: "cellsplitter-server", "🛑 Shutdown requested");
}
