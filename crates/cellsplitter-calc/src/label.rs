// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Human-readable notes and clipboard labels built from computed plans.
//!
//! Notes are full sentences meant for a culture's notes field. Labels are a
//! single line short enough for a tube or flask sticker.

use crate::dilution::{DilutionPlan, DilutionTarget};
use crate::format::{compact_with_digits, format_cells, format_plain, format_volume};
use crate::seed_split::{RemainderSource, SeedSplitPlan};
use crate::seeding::SeedingPlan;

const LABEL_SEPARATOR: &str = " | ";

/// Sentence describing a confluency-mode plan.
///
/// ```
/// use cellsplitter_calc::{label, plan_seeding, SeedingInput, VesselSpec};
///
/// let plan = plan_seeding(&SeedingInput {
///     vessel: VesselSpec { name: "T75".into(), area_cm2: 75.0, cells_at_100_confluency: 5e6 },
///     target_confluency_percent: 80.0,
///     target_hours: 72.0,
///     doubling_time_hours: 24.0,
///     vessels_used: 1,
///     cell_concentration: None,
/// })
/// .unwrap();
/// assert_eq!(
///     label::seeding_note(&plan),
///     "Seeding planner: Seed 500.00 K cells per T75 (75 cm²) × 1 vessel(s) \
///      to reach 80.0% confluency in 72.0 hours."
/// );
/// ```
pub fn seeding_note(plan: &SeedingPlan) -> String {
    format!(
        "Seeding planner: Seed {} cells per {} ({} cm²) × {} vessel(s) to reach {:.1}% confluency in {:.1} hours.",
        format_cells(Some(plan.required_cells_per_vessel)),
        plan.vessel.name,
        format_plain(plan.vessel.area_cm2),
        plan.vessels_used,
        plan.target_confluency_percent,
        plan.target_hours,
    )
}

/// Sentence describing a dilution, with a per-portion sentence in cells mode.
pub fn dilution_note(plan: &DilutionPlan) -> String {
    let mut note = format!(
        "Dilution planner: Combine {} of culture at {} cells/mL with {} of media to yield {} at {} cells/mL.",
        format_volume(plan.slurry_volume_ml),
        format_cells(Some(plan.start_concentration)),
        format_volume(plan.media_volume_ml),
        format_volume(plan.total_volume_ml),
        format_cells(Some(plan.final_concentration)),
    );
    if let DilutionTarget::CellsPerPortion {
        cells_to_seed,
        volume_per_seed_ml,
    } = plan.target
    {
        note.push_str(&format!(
            " This delivers {} cells in {} per portion.",
            format_cells(Some(cells_to_seed)),
            format_volume(volume_per_seed_ml),
        ));
    }
    note
}

/// Both notes followed by a sentence about what is left for the split.
pub fn seed_split_note(plan: &SeedSplitPlan) -> String {
    let remainder = match plan.remainder_source {
        RemainderSource::Measured => {
            let mut sentence = format!(
                "Seed-and-split: {} harvested, {} go to the seed portion, leaving {} for the split.",
                format_cells(plan.measured_total_cells),
                format_cells(Some(plan.seed_portion_cells)),
                format_cells(Some(plan.remainder_cells)),
            );
            if let Some(shortfall) = plan.split_shortfall_cells.filter(|s| *s > 0.0) {
                sentence.push_str(&format!(
                    " The split is short by {} cells.",
                    format_cells(Some(shortfall))
                ));
            }
            sentence
        }
        RemainderSource::SplitRequirement => format!(
            "Seed-and-split: no harvest count recorded; harvest at least {} cells ({} seed + {} split).",
            format_cells(Some(plan.total_cells_committed)),
            format_cells(Some(plan.seed_portion_cells)),
            format_cells(Some(plan.split.required_cells_total)),
        ),
    };
    format!(
        "{} {} {}",
        dilution_note(&plan.seed),
        seeding_note(&plan.split),
        remainder
    )
}

/// Join non-empty parts into a one-line label.
///
/// ```
/// use cellsplitter_calc::label::compact_label;
///
/// let parts = ["T75 ×2".to_string(), String::new(), "80% @ 72h".to_string()];
/// assert_eq!(compact_label(&parts), "T75 ×2 | 80% @ 72h");
/// ```
pub fn compact_label(parts: &[String]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}

/// Label for a confluency plan, e.g. "T75 ×2 | 500K/vessel | 80% @ 72h".
pub fn seeding_label(plan: &SeedingPlan, significant_digits: u32) -> String {
    let mut parts = vec![
        format!("{} ×{}", plan.vessel.name, plan.vessels_used),
        format!(
            "{}/vessel",
            compact_with_digits(plan.required_cells_per_vessel, significant_digits)
        ),
    ];
    if let Some(volume) = plan.volume_per_vessel_ml {
        parts.push(format!("{}/vessel", format_volume(volume)));
    }
    parts.push(format!(
        "{}% @ {}h",
        format_plain(plan.target_confluency_percent),
        format_plain(plan.target_hours)
    ));
    compact_label(&parts)
}

/// Label for a dilution, e.g. "2.00 mL + 18.00 mL media | 500K/mL".
pub fn dilution_label(plan: &DilutionPlan, significant_digits: u32) -> String {
    let mut parts = vec![
        format!(
            "{} + {} media",
            format_volume(plan.slurry_volume_ml),
            format_volume(plan.media_volume_ml)
        ),
        format!(
            "{}/mL",
            compact_with_digits(plan.final_concentration, significant_digits)
        ),
    ];
    if let Some(portions) = plan.portions_prepared {
        parts.push(format!("{} portions", format_plain(portions.floor())));
    }
    compact_label(&parts)
}
