// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # cellsplitter-calc
//!
//! All passage arithmetic in one place:
//! - **Parse**: free-form numeric input ("300K", "1.5e6", "2.3M")
//! - **Growth**: exponential doubling-time projection
//! - **Seeding**: cells/volume needed now to reach a target confluency later
//! - **Dilution**: slurry + media volumes for a target concentration
//! - **Seed-and-split**: one harvest split between a seed portion and reseeded vessels
//! - **Format / Label**: display strings and clipboard labels
//!
//! Every function here is pure; nothing holds state between calls.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod dilution;
pub mod error;
pub mod format;
pub mod growth;
pub mod label;
pub mod parse;
pub mod seed_split;
pub mod seeding;

pub use dilution::{plan_dilution, DilutionPlan, DilutionTarget};
pub use error::{CalcError, CalcResult};
pub use format::{
    format_cells, format_cells_compact, format_hours, format_plain, format_significant,
    format_volume, PLACEHOLDER,
};
pub use growth::{average_doubling_time, project_growth, GrowthInput, GrowthProjection};
pub use parse::{parse_millions, parse_numeric, parse_required, NumericInput};
pub use label::{
    compact_label, dilution_label, dilution_note, seed_split_note, seeding_label, seeding_note,
};
pub use seed_split::{combine_seed_split, measured_total_cells, RemainderSource, SeedSplitPlan};
pub use seeding::{plan_seeding, SeedingInput, SeedingPlan, VesselSpec};
