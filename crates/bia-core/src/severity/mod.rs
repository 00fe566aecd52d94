//! Severity levels, raw cell values, and the extraction boundary.
//!
//! Matrix cells arrive from an untrusted upstream: partially-entered
//! assessments, or payloads produced by an AI generation service. A cell
//! may be a bare number, an object carrying a numeric severity plus
//! explanatory metadata, or any other JSON shape. This module is the
//! single normalization boundary: [`extract_severity`] turns a raw
//! [`CellValue`] into either a [`SeverityLevel`] or no-signal (`None`).
//!
//! # Error Policy
//!
//! Malformed input never produces an error and never panics; it degrades
//! locally to no-signal and is logged at `debug`. "No impact" (severity 0)
//! and "no data" are distinct by construction: the former is
//! `Some(SeverityLevel::NoImpact)`, the latter is `None`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordinal impact rating for one (impact type, time bucket) cell.
///
/// The ordering is the severity scale itself: `NoImpact < Minor <
/// Moderate < Major < Severe`. The recovery-timeline reductions treat
/// `Major` and above as a major occurrence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    /// No measurable impact.
    NoImpact = 0,
    /// Minor impact, absorbed by normal operations.
    Minor    = 1,
    /// Moderate impact requiring attention.
    Moderate = 2,
    /// Major impact; the process is in an unacceptable state.
    Major    = 3,
    /// Severe impact threatening the organization.
    Severe   = 4,
}

impl SeverityLevel {
    /// All levels in ascending order.
    pub const ALL: &'static [Self] = &[
        Self::NoImpact,
        Self::Minor,
        Self::Moderate,
        Self::Major,
        Self::Severe,
    ];

    /// Returns the numeric ordinal of this level.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the level with the given ordinal, if it is in range.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::NoImpact),
            1 => Some(Self::Minor),
            2 => Some(Self::Moderate),
            3 => Some(Self::Major),
            4 => Some(Self::Severe),
            _ => None,
        }
    }

    /// Returns `true` if this level counts as a major occurrence.
    #[must_use]
    pub const fn is_major(self) -> bool {
        (self as u8) >= (Self::Major as u8)
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoImpact => "no_impact",
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Major => "major",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw matrix cell as delivered by the upstream source.
///
/// The variants cover the shapes the upstream actually produces; anything
/// else lands in [`CellValue::Unparsed`] and is interpreted (or rejected)
/// by [`extract_severity`]. Deserialization is untagged so a bare JSON
/// number, an annotated object, and arbitrary other JSON all round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A bare numeric severity, as produced by manual matrix entry.
    Numeric(f64),
    /// A scored cell with explanatory metadata from the generation
    /// service. Extra fields are ignored; only the severity is read.
    Annotated {
        /// The numeric severity score.
        severity: f64,
        /// Optional explanation attached by the assessor or generator.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// Any other payload, held verbatim for best-effort extraction.
    Unparsed(serde_json::Value),
}

impl CellValue {
    /// Creates a bare numeric cell.
    #[must_use]
    pub const fn numeric(severity: f64) -> Self {
        Self::Numeric(severity)
    }

    /// Creates an annotated cell.
    #[must_use]
    pub fn annotated(severity: f64, note: impl Into<String>) -> Self {
        Self::Annotated {
            severity,
            note: Some(note.into()),
        }
    }
}

/// Extracts the severity level from a raw cell, if one is present.
///
/// Returns `None` (no-signal) for anything that does not carry an integer
/// severity in `0..=4`: non-finite or fractional numbers, out-of-range
/// values, and JSON shapes without a usable severity. No-signal is a valid
/// input state for the downstream reductions, never an error.
#[must_use]
pub fn extract_severity(cell: &CellValue) -> Option<SeverityLevel> {
    match cell {
        CellValue::Numeric(raw) | CellValue::Annotated { severity: raw, .. } => {
            severity_from_f64(*raw)
        },
        CellValue::Unparsed(raw) => severity_from_json(raw),
    }
}

/// Interprets a raw numeric score as a severity level.
fn severity_from_f64(raw: f64) -> Option<SeverityLevel> {
    if !raw.is_finite() || raw.fract() != 0.0 || !(0.0..=4.0).contains(&raw) {
        debug!(raw, "discarding cell with non-ordinal severity score");
        return None;
    }
    // In-range integral f64, so the cast is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ordinal = raw as u8;
    SeverityLevel::from_ordinal(ordinal)
}

/// Best-effort severity recovery from an unparsed JSON payload.
///
/// Accepts a bare number, a numeric string, or an object carrying a
/// `severity` field with either of those. Everything else is no-signal.
fn severity_from_json(raw: &serde_json::Value) -> Option<SeverityLevel> {
    match raw {
        serde_json::Value::Null => None,
        serde_json::Value::Number(n) => n.as_f64().and_then(severity_from_f64),
        serde_json::Value::String(s) => match s.trim().parse::<f64>() {
            Ok(parsed) => severity_from_f64(parsed),
            Err(_) => {
                debug!(value = %s, "discarding cell with non-numeric severity string");
                None
            },
        },
        serde_json::Value::Object(fields) => {
            fields.get("severity").and_then(severity_from_json)
        },
        serde_json::Value::Bool(_) | serde_json::Value::Array(_) => {
            debug!("discarding cell with unusable severity shape");
            None
        },
    }
}
