//! # bia-core
//!
//! The Business Impact Analysis (BIA) criticality and recovery-timeline
//! engine: the rules that turn a matrix of time-bucketed impact-severity
//! scores into a Recovery Time Objective (RTO), a Maximum Tolerable
//! Period of Disruption (MTPD), and a Critical/NonCritical classification
//! per business process.
//!
//! The engine is a set of pure functions over immutable snapshots. It
//! performs no I/O, owns no state, and recovers every data-quality
//! anomaly locally: dashboards, exporters, persistence, and the
//! (possibly AI-assisted) score generation that surround it are external
//! collaborators that hand it already-resolved values.
//!
//! ## Data Flow
//!
//! ```text
//! Matrix source ──▶ ImpactMatrix ──┐
//!                                  ├──▶ classify_process ──▶ Classification
//! Threshold provider ─▶ ThresholdState ─┘        { rto, mtpd, criticality }
//! ```
//!
//! ## Core Concepts
//!
//! - **Time bucket**: one of eight fixed recovery horizons, `1h` through
//!   `>1week`, totally ordered by chronology ([`TimeBucket`]).
//! - **Severity**: a 0–4 ordinal per (impact type, bucket) cell;
//!   [`extract_severity`] is the single boundary that normalizes the
//!   upstream's untrusted cell payloads, degrading malformed data to
//!   no-signal instead of failing ([`CellValue`], [`SeverityLevel`]).
//! - **RTO**: earliest bucket at which any impact dimension turns major
//!   ([`compute_rto`]).
//! - **MTPD**: earliest bucket at which any single dimension sustains a
//!   second major occurrence ([`compute_mtpd`]).
//! - **Criticality**: the RTO compared against the organization's
//!   threshold, with the threshold's loading/unavailable states
//!   propagated as [`Criticality::Unknown`] ([`classify_criticality`]).
//!
//! ## Example
//!
//! ```rust
//! use bia_core::{
//!     classify_process, CellValue, Criticality, ImpactMatrix, ImpactType,
//!     ThresholdState, TimeBucket,
//! };
//!
//! let mut matrix = ImpactMatrix::new();
//! let financial = ImpactType::new("Financial");
//! matrix.insert_cell(financial.clone(), TimeBucket::EightHours, CellValue::numeric(3.0));
//! matrix.insert_cell(financial, TimeBucket::TwelveHours, CellValue::numeric(4.0));
//!
//! let result = classify_process(&matrix, &ThresholdState::loaded(12));
//! assert_eq!(result.rto, Some(TimeBucket::EightHours));
//! assert_eq!(result.mtpd, Some(TimeBucket::TwelveHours));
//! assert_eq!(result.criticality, Criticality::Critical);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod criticality;
pub mod horizon;
pub mod matrix;
pub mod recovery;
pub mod severity;
pub mod threshold;

pub use config::{AssessmentProfile, ConfigError};
pub use criticality::{
    classify_criticality, classify_process, summarize, Classification, Criticality,
    PortfolioSummary, UnknownReason,
};
pub use horizon::TimeBucket;
pub use matrix::{completeness, CompletenessReport, ImpactMatrix, ImpactType, MissingCell};
pub use recovery::{compute_mtpd, compute_rto};
pub use severity::{extract_severity, CellValue, SeverityLevel};
pub use threshold::ThresholdState;
