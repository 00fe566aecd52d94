//! Recovery-timeline reductions: RTO and MTPD.
//!
//! Both objectives reduce the matrix with the same worst-dimension-first
//! policy: each impact type is scanned independently along the horizon
//! ladder, and the earliest qualifying bucket across all types wins.
//!
//! - **RTO** (Recovery Time Objective): the first bucket at which *any*
//!   impact type reaches a major severity. The process enters an
//!   unacceptable state the moment a single dimension of damage becomes
//!   major.
//! - **MTPD** (Maximum Tolerable Period of Disruption): the first bucket
//!   at which any single impact type, rescanned independently, sustains
//!   its *second* major occurrence. MTPD is not derived from RTO; the two
//!   only coincide with "RTO plus one bucket" when one type produces both
//!   occurrences back to back.
//!
//! # Invariants
//!
//! - Absent and malformed cells contribute no signal; severity scores are
//!   not assumed monotonic along the ladder.
//! - Whenever both objectives are defined for the same matrix, the MTPD
//!   bucket is the RTO bucket or later.
//! - `None` means "not applicable": no dimension ever qualifies.

use crate::horizon::TimeBucket;
use crate::matrix::{ImpactMatrix, ImpactType};
use crate::severity::SeverityLevel;

/// Computes the Recovery Time Objective for one matrix snapshot.
///
/// Returns the chronologically earliest bucket at which any impact type
/// first reaches [`SeverityLevel::Major`] or worse, or `None` when no
/// type ever does (including the all-no-signal matrix).
#[must_use]
pub fn compute_rto(matrix: &ImpactMatrix) -> Option<TimeBucket> {
    matrix
        .impact_types()
        .filter_map(|impact_type| nth_major_occurrence(matrix, impact_type, 1))
        .min()
}

/// Computes the Maximum Tolerable Period of Disruption for one matrix
/// snapshot.
///
/// Returns the chronologically earliest bucket at which any single impact
/// type reaches its second major occurrence, or `None` when no type has
/// two qualifying buckets.
#[must_use]
pub fn compute_mtpd(matrix: &ImpactMatrix) -> Option<TimeBucket> {
    matrix
        .impact_types()
        .filter_map(|impact_type| nth_major_occurrence(matrix, impact_type, 2))
        .min()
}

/// Scans one impact type along the ladder and returns the bucket of its
/// `n`-th major occurrence (1-based), stopping at the first hit.
fn nth_major_occurrence(
    matrix: &ImpactMatrix,
    impact_type: &ImpactType,
    n: usize,
) -> Option<TimeBucket> {
    debug_assert!(n >= 1, "occurrence index is 1-based");
    let mut seen = 0usize;
    for &bucket in TimeBucket::ALL {
        if matrix
            .severity(impact_type, bucket)
            .is_some_and(SeverityLevel::is_major)
        {
            seen += 1;
            if seen == n {
                return Some(bucket);
            }
        }
    }
    None
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::severity::CellValue;

    const TYPE_NAMES: [&str; 5] = [
        "Financial",
        "Operational",
        "Legal/Regulatory",
        "Reputational",
        "Customer",
    ];

    /// Arbitrary cell placements; scores run past 4 so out-of-range
    /// values exercise the no-signal path.
    fn arb_cells() -> impl Strategy<Value = Vec<(usize, u8, u8)>> {
        prop::collection::vec((0usize..5, 0u8..8, 0u8..=6), 0..48)
    }

    fn build_matrix(cells: &[(usize, u8, u8)]) -> ImpactMatrix {
        let mut matrix = ImpactMatrix::new();
        for &(type_idx, bucket_ordinal, score) in cells {
            let bucket = TimeBucket::from_ordinal(bucket_ordinal).unwrap();
            matrix.insert_cell(
                ImpactType::new(TYPE_NAMES[type_idx]),
                bucket,
                CellValue::numeric(f64::from(score)),
            );
        }
        matrix
    }

    proptest! {
        #[test]
        fn reductions_are_deterministic(cells in arb_cells()) {
            let matrix = build_matrix(&cells);
            prop_assert_eq!(compute_rto(&matrix), compute_rto(&matrix));
            prop_assert_eq!(compute_mtpd(&matrix), compute_mtpd(&matrix));
        }

        #[test]
        fn mtpd_never_precedes_rto(cells in arb_cells()) {
            let matrix = build_matrix(&cells);
            if let (Some(rto), Some(mtpd)) = (compute_rto(&matrix), compute_mtpd(&matrix)) {
                prop_assert!(rto <= mtpd);
            }
        }

        #[test]
        fn mtpd_defined_implies_rto_defined(cells in arb_cells()) {
            let matrix = build_matrix(&cells);
            if compute_mtpd(&matrix).is_some() {
                prop_assert!(compute_rto(&matrix).is_some());
            }
        }

        #[test]
        fn raising_a_cell_to_severe_never_delays_rto(
            cells in arb_cells(),
            type_idx in 0usize..5,
            bucket_ordinal in 0u8..8,
        ) {
            let matrix = build_matrix(&cells);
            let before = compute_rto(&matrix);

            let bucket = TimeBucket::from_ordinal(bucket_ordinal).unwrap();
            let mut raised = matrix.clone();
            raised.insert_cell(
                ImpactType::new(TYPE_NAMES[type_idx]),
                bucket,
                CellValue::numeric(4.0),
            );

            let after = compute_rto(&raised)
                .expect("a severe cell always yields an RTO");
            prop_assert!(after <= bucket);
            if let Some(before) = before {
                prop_assert!(after <= before);
            }
        }
    }
}
