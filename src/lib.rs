// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cellsplitter
//!
//! Passage planning for adherent and suspension cell culture: how many cells
//! to seed so a vessel reaches a target confluency after a given time, how to
//! dilute a counted suspension to a working concentration, and how to split
//! one harvest between a seed portion and fresh vessels.
//!
//! ## Crates
//!
//! - [`calc`]: pure arithmetic (parsing, growth, seeding, dilution, formatting)
//! - [`services`]: vessel/cell-line catalog and the async calculator service
//! - [`api`]: axum REST adapter
//! - [`config`]: TOML configuration with environment and CLI overrides
//! - [`observability`]: logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use cellsplitter::prelude::*;
//!
//! let plan = plan_dilution(
//!     5e6,
//!     DilutionTarget::Concentration { final_concentration: 5e5 },
//!     20.0,
//! )
//! .unwrap();
//! assert_eq!(plan.slurry_volume_ml, 2.0);
//! assert_eq!(format_volume(plan.media_volume_ml), "18.00 mL");
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cellsplitter_api as api;
pub use cellsplitter_calc as calc;
pub use cellsplitter_config as config;
pub use cellsplitter_observability as observability;
pub use cellsplitter_services as services;

/// Commonly used items
pub mod prelude {
    pub use cellsplitter_calc::{
        format_cells, format_volume, parse_numeric, plan_dilution, plan_seeding, CalcError,
        DilutionTarget, SeedingInput, VesselSpec,
    };
    pub use cellsplitter_services::{
        CalculatorService, CalculatorServiceImpl, CalculatorSettings, Catalog, CatalogService,
        CatalogServiceImpl,
    };
}
