// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Free-form numeric input parsing
//!
//! Bench users type counts the way they say them: "300K", "1.5e6", "2.3M",
//! "1,200,000". Everything funnels through [`parse_numeric`].

use crate::error::{CalcError, CalcResult};

/// A value as it arrives from a form or JSON body: either already numeric or text.
///
/// Booleans are accepted on the wire so a stray checkbox value does not reject
/// the whole request, but they never parse as a number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl NumericInput {
    /// Parse this input, `None` when it is not a finite number
    pub fn parse(&self) -> Option<f64> {
        match self {
            NumericInput::Number(value) => value.is_finite().then_some(*value),
            NumericInput::Text(text) => parse_numeric(text),
            NumericInput::Flag(_) => None,
        }
    }

    /// True for blank text, which callers treat the same as an absent field
    pub fn is_blank(&self) -> bool {
        matches!(self, NumericInput::Text(text) if text.trim().is_empty())
    }
}

/// Parse a free-form numeric string.
///
/// - Whitespace and thousands separators are removed.
/// - A trailing `K`, `M` or `B` (any case) multiplies by 1e3, 1e6 or 1e9.
/// - Exponential notation (`1.5e6`, `300E3`) is accepted.
/// - Empty input, non-numeric text and non-finite results give `None`.
///
/// # Example
/// ```
/// use cellsplitter_calc::parse_numeric;
///
/// assert_eq!(parse_numeric("300K"), Some(300_000.0));
/// assert_eq!(parse_numeric("1.5e6"), Some(1_500_000.0));
/// assert_eq!(parse_numeric(""), None);
/// assert_eq!(parse_numeric("abc"), None);
/// ```
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    if cleaned.is_empty() {
        return None;
    }

    let (literal, multiplier) = split_magnitude_suffix(&cleaned);
    let value = literal.parse::<f64>().ok()? * multiplier;
    value.is_finite().then_some(value)
}

fn split_magnitude_suffix(cleaned: &str) -> (&str, f64) {
    if let Some(literal) = cleaned.strip_suffix('K') {
        (literal, 1_000.0)
    } else if let Some(literal) = cleaned.strip_suffix('M') {
        (literal, 1_000_000.0)
    } else if let Some(literal) = cleaned.strip_suffix('B') {
        (literal, 1_000_000_000.0)
    } else {
        (cleaned, 1.0)
    }
}

/// Parse a harvest yield that is usually typed in millions of cells.
///
/// Bare numbers below one million are read as millions ("2.5" → 2.5e6).
/// Explicit magnitudes are kept: a K/M/B suffix, an exponent, or a value that
/// is already ≥ 1e6. A trailing "cell"/"cells" word is ignored.
pub fn parse_millions(input: &NumericInput) -> Option<f64> {
    match input {
        NumericInput::Number(_) => input.parse().map(scale_to_millions),
        NumericInput::Flag(_) => None,
        NumericInput::Text(text) => {
            let trimmed = text.trim();
            let without_unit = strip_suffix_ignore_case(trimmed, "cells")
                .or_else(|| strip_suffix_ignore_case(trimmed, "cell"))
                .map(str::trim)
                .unwrap_or(trimmed);

            let value = parse_numeric(without_unit)?;
            let upper = without_unit.to_uppercase();
            let explicit_magnitude = upper.ends_with('K')
                || upper.ends_with('M')
                || upper.ends_with('B')
                || upper.contains('E');
            if explicit_magnitude {
                Some(value)
            } else {
                Some(scale_to_millions(value))
            }
        }
    }
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    let tail = text.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &text[..split])
}

fn scale_to_millions(value: f64) -> f64 {
    if value >= 1_000_000.0 {
        value
    } else {
        value * 1_000_000.0
    }
}

/// Parse a field that must be present and numeric.
///
/// # Errors
/// * `CalcError::Parse` naming `field` when the input is missing, blank or not a number
pub fn parse_required(input: Option<&NumericInput>, field: &str) -> CalcResult<f64> {
    input
        .and_then(NumericInput::parse)
        .ok_or_else(|| CalcError::parse(field))
}
