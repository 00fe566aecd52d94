//! The impact matrix: per-process severity scores keyed by impact type
//! and recovery horizon.
//!
//! An [`ImpactMatrix`] is an immutable snapshot of one business process's
//! assessment at a point in time. The engine computes classifications from
//! whatever snapshot the caller hands it; it keeps no state of its own, so
//! callers freeze the matrix before invoking a reduction and re-invoke
//! when the data changes.
//!
//! Rows are keyed by [`ImpactType`], an opaque identifier supplied by
//! configuration (see [`crate::config`]); the engine never hard-codes the
//! dimension set. Storage is `BTreeMap` throughout so enumeration order,
//! and therefore every derived result, is deterministic.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::horizon::TimeBucket;
use crate::severity::{extract_severity, CellValue, SeverityLevel};

mod completeness;

pub use completeness::{completeness, CompletenessReport, MissingCell};

/// One dimension of harm assessed by the organization.
///
/// Impact types are configuration, not code: the reference profile uses
/// five (Financial, Operational, Legal/Regulatory, Reputational,
/// Customer), but the engine treats the set as opaque identifiers. The
/// `Ord` impl exists so types can key deterministic maps; it carries no
/// domain meaning.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ImpactType(String);

impl ImpactType {
    /// Creates an impact type from its configured name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the configured name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImpactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImpactType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A snapshot of one process's impact assessment.
///
/// Maps `(ImpactType, TimeBucket)` to the raw [`CellValue`] delivered by
/// the upstream source. Cells may be absent (no data yet); absent and
/// malformed cells are no-signal, never an implicit severity 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactMatrix {
    rows: BTreeMap<ImpactType, BTreeMap<TimeBucket, CellValue>>,
}

impl ImpactMatrix {
    /// Creates an empty matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces one cell.
    pub fn insert_cell(
        &mut self,
        impact_type: ImpactType,
        bucket: TimeBucket,
        value: CellValue,
    ) {
        self.rows.entry(impact_type).or_default().insert(bucket, value);
    }

    /// Returns the raw cell for `(impact_type, bucket)`, if present.
    #[must_use]
    pub fn cell(&self, impact_type: &ImpactType, bucket: TimeBucket) -> Option<&CellValue> {
        self.rows.get(impact_type).and_then(|row| row.get(&bucket))
    }

    /// Returns the extracted severity for `(impact_type, bucket)`.
    ///
    /// `None` covers both an absent cell and a cell whose payload carries
    /// no usable severity.
    #[must_use]
    pub fn severity(
        &self,
        impact_type: &ImpactType,
        bucket: TimeBucket,
    ) -> Option<SeverityLevel> {
        self.cell(impact_type, bucket).and_then(extract_severity)
    }

    /// Returns the row for one impact type, if any cell of it exists.
    #[must_use]
    pub fn row(&self, impact_type: &ImpactType) -> Option<&BTreeMap<TimeBucket, CellValue>> {
        self.rows.get(impact_type)
    }

    /// Iterates the impact types present in this snapshot, in name order.
    pub fn impact_types(&self) -> impl Iterator<Item = &ImpactType> {
        self.rows.keys()
    }

    /// Returns the number of populated cells (raw, before extraction).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Returns `true` if no cell has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
