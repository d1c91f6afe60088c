// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # cellsplitter-observability
//!
//! Logging setup shared by the cellsplitter binaries, with per-crate debug
//! flag support.
//!
//! ## Features
//! - `file-logging`: JSON log files with daily rotation and run retention

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

// Re-export commonly used items
pub use cli::*;
pub use config::*;
pub use init::*;

/// Known cellsplitter crate names for debug flags.
///
/// These double as the `target:` used in each crate's tracing macros.
pub const KNOWN_CRATES: &[&str] = &[
    "cellsplitter-services",
    "cellsplitter-api",
    "cellsplitter-server",
];
