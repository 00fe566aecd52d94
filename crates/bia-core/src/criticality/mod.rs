//! Criticality classification and portfolio aggregation.
//!
//! Classification turns the computed RTO and the organization's threshold
//! into one of three states. The precedence order is fixed:
//!
//! 1. Threshold still loading → [`Criticality::Unknown`] (loading).
//! 2. Threshold unavailable → [`Criticality::Unknown`] (error).
//! 3. No RTO → [`Criticality::NonCritical`]: a process with no identified
//!    major-impact horizon is not time-critical.
//! 4. Otherwise, the RTO's hour count is compared to the threshold:
//!    at or under the threshold → [`Criticality::Critical`], else
//!    [`Criticality::NonCritical`].
//!
//! Classification never fails: unrecoverable input states resolve to
//! `Unknown` rather than to either concrete class, because silently
//! mis-classifying a process as non-critical has compliance consequences.

use serde::{Deserialize, Serialize};

use crate::horizon::TimeBucket;
use crate::matrix::ImpactMatrix;
use crate::recovery::{compute_mtpd, compute_rto};
use crate::threshold::ThresholdState;

/// Why a classification is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownReason {
    /// The threshold provider has not answered yet.
    ThresholdLoading,
    /// The threshold provider failed.
    ThresholdUnavailable,
}

/// Criticality of one business process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum Criticality {
    /// The process must recover within the organization's threshold.
    Critical,
    /// The process tolerates disruption beyond the threshold, or has no
    /// identified major-impact horizon.
    NonCritical,
    /// No classification is possible; the reason says why.
    Unknown(UnknownReason),
}

impl Criticality {
    /// Returns `true` for [`Criticality::Critical`].
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }

    /// Returns `true` for [`Criticality::Unknown`].
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// Classifies one process from its computed RTO and the threshold state.
///
/// Pure and total: every combination of inputs maps to a classification,
/// in the precedence order documented at the module level.
#[must_use]
pub const fn classify_criticality(
    rto: Option<TimeBucket>,
    threshold: &ThresholdState,
) -> Criticality {
    let hours = match threshold {
        ThresholdState::Loading => {
            return Criticality::Unknown(UnknownReason::ThresholdLoading);
        },
        ThresholdState::Unavailable { .. } => {
            return Criticality::Unknown(UnknownReason::ThresholdUnavailable);
        },
        ThresholdState::Loaded { hours } => *hours,
    };

    match rto {
        None => Criticality::NonCritical,
        Some(bucket) => {
            if bucket.hours() <= hours {
                Criticality::Critical
            } else {
                Criticality::NonCritical
            }
        },
    }
}

/// The engine's output triple for one process.
///
/// Computed on demand from the snapshot it was given; the engine caches
/// nothing, so callers recompute whenever the matrix or threshold
/// changes. `None` in `rto`/`mtpd` means "not applicable".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Recovery Time Objective, if any dimension ever turns major.
    pub rto: Option<TimeBucket>,
    /// Maximum Tolerable Period of Disruption, if any single dimension
    /// sustains a second major occurrence.
    pub mtpd: Option<TimeBucket>,
    /// The resulting criticality class.
    pub criticality: Criticality,
}

/// Runs the full reduction for one process snapshot.
#[must_use]
pub fn classify_process(matrix: &ImpactMatrix, threshold: &ThresholdState) -> Classification {
    let rto = compute_rto(matrix);
    Classification {
        rto,
        mtpd: compute_mtpd(matrix),
        criticality: classify_criticality(rto, threshold),
    }
}

/// Aggregate counts over a set of classified processes.
///
/// Backs the portfolio views the surrounding suite renders: how many
/// processes are critical, how many could not be classified, and how many
/// have no identified major-impact horizon at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Processes classified.
    pub total: usize,
    /// Processes classified critical.
    pub critical: usize,
    /// Processes classified non-critical.
    pub non_critical: usize,
    /// Processes with an unknown classification.
    pub unknown: usize,
    /// Processes with no applicable RTO.
    pub without_rto: usize,
}

/// Summarizes a set of classifications.
#[must_use]
pub fn summarize(classifications: &[Classification]) -> PortfolioSummary {
    let mut summary = PortfolioSummary {
        total: classifications.len(),
        ..PortfolioSummary::default()
    };

    for classification in classifications {
        match classification.criticality {
            Criticality::Critical => summary.critical += 1,
            Criticality::NonCritical => summary.non_critical += 1,
            Criticality::Unknown(_) => summary.unknown += 1,
        }
        if classification.rto.is_none() {
            summary.without_rto += 1;
        }
    }

    summary
}
