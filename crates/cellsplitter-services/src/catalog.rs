// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
In-memory vessel and cell-line catalog.

Built from defaults compiled into the binary, or from JSON files holding an
array of records. Ids are assigned in load order starting at 1; a record whose
name was already seen is skipped.
*/

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::types::{CellLine, ServiceError, ServiceResult, Vessel};

/// Substring of a lower-cased vessel name → harvest slurry volume (mL).
///
/// Checked in order; the first match wins, so more specific keys come first.
const HARVEST_VOLUME_HINTS: &[(&str, f64)] = &[
    ("t225", 15.0),
    ("t175", 10.0),
    ("t150", 12.0),
    ("t125", 9.0),
    ("t75", 7.0),
    ("t25", 3.0),
    ("t12", 2.0),
    ("225", 15.0),
    ("175", 10.0),
    ("150", 10.0),
    ("125", 9.0),
    ("75", 7.0),
    ("25", 3.0),
    ("12.5", 2.0),
    ("100 mm", 7.0),
    ("150 mm", 10.0),
    ("60 mm", 5.0),
    ("35 mm", 2.0),
    ("6-well", 1.5),
    ("12-well", 1.0),
    ("24-well", 0.5),
    ("48-well", 0.25),
    ("96-well", 0.1),
    ("384-well", 0.02),
    ("1536", 0.01),
];

/// Typical slurry volume to resuspend a harvest from this vessel in.
pub fn suggest_slurry_volume(vessel_name: &str) -> Option<f64> {
    if vessel_name.is_empty() {
        return None;
    }
    let normalized = vessel_name.to_lowercase();
    HARVEST_VOLUME_HINTS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, volume)| *volume)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    vessels: Vec<Vessel>,
    cell_lines: Vec<CellLine>,
}

impl Catalog {
    /// Build a catalog from raw records, skipping duplicate names and assigning ids
    pub fn from_records(vessels: Vec<Vessel>, cell_lines: Vec<CellLine>) -> Self {
        let mut seen = HashSet::new();
        let vessels: Vec<Vessel> = vessels
            .into_iter()
            .filter(|v| seen.insert(v.name.clone()))
            .enumerate()
            .map(|(idx, mut v)| {
                v.id = idx as u32 + 1;
                v
            })
            .collect();

        let mut seen = HashSet::new();
        let cell_lines: Vec<CellLine> = cell_lines
            .into_iter()
            .filter(|c| seen.insert(c.name.clone()))
            .enumerate()
            .map(|(idx, mut c)| {
                c.id = idx as u32 + 1;
                c
            })
            .collect();

        Self {
            vessels,
            cell_lines,
        }
    }

    pub fn with_defaults() -> Self {
        Self::from_records(default_vessels(), default_cell_lines())
    }

    /// Load from JSON files; a `None` path uses the built-in list for that half.
    ///
    /// # Errors
    /// * `ServiceError::Catalog` if a file cannot be read or parsed
    pub fn load(vessels_path: Option<&Path>, cell_lines_path: Option<&Path>) -> ServiceResult<Self> {
        let vessels = match vessels_path {
            Some(path) => read_records(path)?,
            None => default_vessels(),
        };
        let cell_lines = match cell_lines_path {
            Some(path) => read_records(path)?,
            None => default_cell_lines(),
        };

        let catalog = Self::from_records(vessels, cell_lines);
        info!(
            target: "cellsplitter-services",
            "📚 Catalog loaded: {} vessels, {} cell lines",
            catalog.vessels.len(),
            catalog.cell_lines.len()
        );
        Ok(catalog)
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn cell_lines(&self) -> &[CellLine] {
        &self.cell_lines
    }

    pub fn vessel(&self, id: u32) -> Option<&Vessel> {
        self.vessels.iter().find(|v| v.id == id)
    }

    pub fn cell_line(&self, id: u32) -> Option<&CellLine> {
        self.cell_lines.iter().find(|c| c.id == id)
    }
}

fn read_records<T: serde::de::DeserializeOwned>(path: &Path) -> ServiceResult<Vec<T>> {
    debug!(target: "cellsplitter-services", "Reading catalog file {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| {
        warn!(target: "cellsplitter-services", "Failed to read {}: {}", path.display(), e);
        ServiceError::Catalog(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| ServiceError::Catalog(format!("Failed to parse {}: {}", path.display(), e)))
}

fn vessel(name: &str, area_cm2: f64, cells_at_100_confluency: f64) -> Vessel {
    Vessel {
        id: 0,
        name: name.to_string(),
        area_cm2,
        cells_at_100_confluency,
        notes: None,
    }
}

fn cell_line(name: &str, min_hours: f64, max_hours: f64) -> CellLine {
    CellLine {
        id: 0,
        name: name.to_string(),
        doubling_time_min_hours: Some(min_hours),
        doubling_time_max_hours: Some(max_hours),
        reference_url: None,
        notes: None,
    }
}

/// Common flasks, dishes and plates with typical confluent yields
fn default_vessels() -> Vec<Vessel> {
    vec![
        vessel("T25 flask", 25.0, 2_800_000.0),
        vessel("T75 flask", 75.0, 8_400_000.0),
        vessel("T175 flask", 175.0, 23_300_000.0),
        vessel("T225 flask", 225.0, 30_000_000.0),
        vessel("35 mm dish", 8.8, 1_200_000.0),
        vessel("60 mm dish", 21.5, 3_200_000.0),
        vessel("100 mm dish", 56.7, 8_800_000.0),
        vessel("150 mm dish", 145.0, 21_000_000.0),
        vessel("6-well plate (per well)", 9.6, 1_200_000.0),
        vessel("12-well plate (per well)", 3.5, 460_000.0),
        vessel("24-well plate (per well)", 1.9, 240_000.0),
        vessel("48-well plate (per well)", 1.1, 120_000.0),
        vessel("96-well plate (per well)", 0.32, 40_000.0),
    ]
}

fn default_cell_lines() -> Vec<CellLine> {
    vec![
        cell_line("A549", 22.0, 24.0),
        cell_line("CHO-K1", 14.0, 17.0),
        cell_line("HEK293", 24.0, 36.0),
        cell_line("HeLa", 20.0, 24.0),
        cell_line("Jurkat", 25.0, 30.0),
        cell_line("MCF-7", 30.0, 40.0),
    ]
}
