// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Display formatting for counts, volumes and durations.

/// Shown in place of a missing or non-numeric value
pub const PLACEHOLDER: &str = "—";

const UNITS: [(f64, &str); 3] = [
    (1_000_000_000.0, "B"),
    (1_000_000.0, "M"),
    (1_000.0, "K"),
];

/// Format a cell count with a K/M/B suffix and two decimals.
///
/// # Example
/// ```
/// use cellsplitter_calc::format_cells;
///
/// assert_eq!(format_cells(Some(999.0)), "999");
/// assert_eq!(format_cells(Some(1_000.0)), "1.00 K");
/// assert_eq!(format_cells(Some(2_300_000.0)), "2.30 M");
/// assert_eq!(format_cells(None), "—");
/// ```
pub fn format_cells(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_string();
    };
    let magnitude = value.abs();
    for (scale, suffix) in UNITS {
        if magnitude >= scale {
            return format!("{:.2} {}", value / scale, suffix);
        }
    }
    format!("{:.0}", value)
}

/// Round `value` to `digits` significant figures.
///
/// Returns the rounded value and how many decimals it needs to print.
fn round_significant(value: f64, digits: u32) -> (f64, usize) {
    if value == 0.0 || !value.is_finite() {
        return (value, 0);
    }
    let digits = digits.max(1) as i32;
    let order = value.abs().log10().floor() as i32;
    let scale = digits - 1 - order;
    let factor = 10f64.powi(scale.abs());
    let rounded = if scale >= 0 {
        (value * factor).round() / factor
    } else {
        (value / factor).round() * factor
    };
    (rounded, scale.max(0) as usize)
}

/// Format `value` rounded to `digits` significant figures.
///
/// ```
/// use cellsplitter_calc::format_significant;
///
/// assert_eq!(format_significant(0.0, 2), "0");
/// assert_eq!(format_significant(123_456.0, 2), "120000");
/// assert_eq!(format_significant(1.234, 2), "1.2");
/// assert_eq!(format_significant(0.01234, 2), "0.012");
/// ```
pub fn format_significant(value: f64, digits: u32) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let (rounded, decimals) = round_significant(value, digits);
    format!("{:.*}", decimals, rounded)
}

/// Short label form of a cell count: two significant figures, no space.
///
/// A value that rounds up to 1000 of one unit moves to the next unit, so
/// 999 900 reads "1M" rather than "1000K".
///
/// ```
/// use cellsplitter_calc::format_cells_compact;
///
/// assert_eq!(format_cells_compact(500_000.0), "500K");
/// assert_eq!(format_cells_compact(1_500_000.0), "1.5M");
/// assert_eq!(format_cells_compact(999_900.0), "1M");
/// ```
pub fn format_cells_compact(value: f64) -> String {
    compact_with_digits(value, 2)
}

pub(crate) fn compact_with_digits(value: f64, digits: u32) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let magnitude = value.abs();
    // Largest unit first; index into UNITS, or None for a bare number
    let mut unit = UNITS.iter().position(|(scale, _)| magnitude >= *scale);

    loop {
        let scale = unit.map_or(1.0, |i| UNITS[i].0);
        let (rounded, _) = round_significant(value / scale, digits);
        match unit {
            // Promote once when rounding lands on a full 1000 of the current unit
            Some(i) if rounded.abs() >= 1_000.0 && i > 0 => unit = Some(i - 1),
            None if rounded.abs() >= 1_000.0 => unit = Some(UNITS.len() - 1),
            _ => {
                let suffix = unit.map_or("", |i| UNITS[i].1);
                return format!("{}{}", trim_decimal(&format_significant(value / scale, digits)), suffix);
            }
        }
    }
}

fn trim_decimal(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

/// Format a number without trailing zeros ("75", "21.5").
pub fn format_plain(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        trim_decimal(&format!("{:.6}", value))
    }
}

/// Format a volume in millilitres, switching to microlitres below 0.01 mL.
///
/// ```
/// use cellsplitter_calc::format_volume;
///
/// assert_eq!(format_volume(2.0), "2.00 mL");
/// assert_eq!(format_volume(0.005), "5.00 uL");
/// assert_eq!(format_volume(0.0), "0.00 mL");
/// assert_eq!(format_volume(-1.5), "-1.50 mL");
/// ```
pub fn format_volume(ml: f64) -> String {
    if !ml.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if ml < 0.0 {
        return format!("-{}", format_volume(-ml));
    }
    if ml == 0.0 {
        return "0.00 mL".to_string();
    }
    if ml < 0.01 {
        return format!("{:.2} uL", ml * 1_000.0);
    }
    format!("{:.2} mL", ml)
}

/// Format a duration in hours, `None` becomes the placeholder.
pub fn format_hours(hours: Option<f64>) -> String {
    match hours.filter(|h| h.is_finite()) {
        Some(h) => format!("{} h", format_plain(h)),
        None => PLACEHOLDER.to_string(),
    }
}
