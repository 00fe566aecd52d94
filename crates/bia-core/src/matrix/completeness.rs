//! Completeness reporting for partially-populated matrices.
//!
//! The upstream matrix source fills in gradually: manual entry proceeds
//! dimension by dimension, and the generation service may return partial
//! payloads. Collaborating surfaces use the completeness report to decide
//! whether to request more data before trusting a classification. This is
//! a pure enumeration over the snapshot; it does not alter any reduction.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::horizon::TimeBucket;
use crate::matrix::{ImpactMatrix, ImpactType};

/// One expected cell that is still no-signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCell {
    /// The impact dimension of the missing cell.
    pub impact_type: ImpactType,
    /// The recovery horizon of the missing cell.
    pub bucket: TimeBucket,
}

/// Result of a completeness query over one matrix snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Expected cells that carry no usable severity, ordered by impact
    /// type name and then chronologically.
    pub missing: Vec<MissingCell>,
    /// Total number of expected cells (impact types × horizons).
    pub total_cells: usize,
    /// Number of expected cells with an extractable severity.
    pub populated_cells: usize,
}

impl CompletenessReport {
    /// Returns `true` if every expected cell carries a severity.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Returns the number of expected cells still without a signal.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }
}

/// Reports which expected cells of `matrix` are still no-signal.
///
/// `expected_types` is the organization's configured dimension set (see
/// [`crate::config::AssessmentProfile`]); duplicates are ignored. A cell
/// counts as populated only when severity extraction succeeds, so a
/// present-but-malformed cell is reported as missing rather than silently
/// scored.
#[must_use]
pub fn completeness(
    matrix: &ImpactMatrix,
    expected_types: &[ImpactType],
) -> CompletenessReport {
    let expected: BTreeSet<&ImpactType> = expected_types.iter().collect();
    let total_cells = expected.len() * TimeBucket::ALL.len();

    let mut missing = Vec::new();
    for &impact_type in &expected {
        for &bucket in TimeBucket::ALL {
            if matrix.severity(impact_type, bucket).is_none() {
                missing.push(MissingCell {
                    impact_type: impact_type.clone(),
                    bucket,
                });
            }
        }
    }

    let populated_cells = total_cells - missing.len();
    CompletenessReport {
        missing,
        total_cells,
        populated_cells,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::severity::CellValue;

    fn types(names: &[&str]) -> Vec<ImpactType> {
        names.iter().copied().map(ImpactType::new).collect()
    }

    #[test]
    fn test_empty_matrix_is_fully_missing() {
        let report = completeness(&ImpactMatrix::new(), &types(&["Financial", "Customer"]));

        assert_eq!(report.total_cells, 16);
        assert_eq!(report.populated_cells, 0);
        assert_eq!(report.missing_count(), 16);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_fully_populated_row_set_is_complete() {
        let mut matrix = ImpactMatrix::new();
        for ty in types(&["Financial"]) {
            for &bucket in TimeBucket::ALL {
                matrix.insert_cell(ty.clone(), bucket, CellValue::numeric(2.0));
            }
        }

        let report = completeness(&matrix, &types(&["Financial"]));
        assert!(report.is_complete());
        assert_eq!(report.populated_cells, 8);
    }

    #[test]
    fn test_malformed_cell_counts_as_missing() {
        let mut matrix = ImpactMatrix::new();
        let financial = ImpactType::new("Financial");
        for &bucket in TimeBucket::ALL {
            matrix.insert_cell(financial.clone(), bucket, CellValue::numeric(1.0));
        }
        matrix.insert_cell(
            financial.clone(),
            TimeBucket::TwoDays,
            CellValue::Unparsed(json!({ "rating": "high" })),
        );

        let report = completeness(&matrix, std::slice::from_ref(&financial));
        assert_eq!(report.missing_count(), 1);
        assert_eq!(report.missing[0].bucket, TimeBucket::TwoDays);
    }

    #[test]
    fn test_missing_cells_are_deterministically_ordered() {
        let matrix = ImpactMatrix::new();
        let report = completeness(&matrix, &types(&["Operational", "Financial"]));

        // Type name order first, chronological order within a type.
        assert_eq!(report.missing[0].impact_type.as_str(), "Financial");
        assert_eq!(report.missing[0].bucket, TimeBucket::OneHour);
        assert_eq!(report.missing[7].bucket, TimeBucket::BeyondWeek);
        assert_eq!(report.missing[8].impact_type.as_str(), "Operational");
    }

    #[test]
    fn test_duplicate_expected_types_are_ignored() {
        let report = completeness(&ImpactMatrix::new(), &types(&["Financial", "Financial"]));
        assert_eq!(report.total_cells, 8);
    }

    #[test]
    fn test_unexpected_rows_do_not_count() {
        let mut matrix = ImpactMatrix::new();
        matrix.insert_cell(
            ImpactType::new("Experimental"),
            TimeBucket::OneHour,
            CellValue::numeric(4.0),
        );

        let report = completeness(&matrix, &types(&["Financial"]));
        assert_eq!(report.total_cells, 8);
        assert_eq!(report.populated_cells, 0);
    }
}
