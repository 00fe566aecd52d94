//! Fuzz harness for the cell-extraction boundary.
//!
//! This target exercises severity extraction and matrix deserialization
//! with arbitrary byte sequences, ensuring no panics occur on malformed
//! Unicode, arbitrary JSON shapes, deeply nested payloads, or
//! out-of-range numerics. The engine's contract is that untrusted input
//! degrades to no-signal; it never aborts a computation.

#![no_main]
use bia_core::{
    classify_process, compute_mtpd, compute_rto, extract_severity, CellValue, ImpactMatrix,
    ThresholdState,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only valid UTF-8 can reach the JSON layer in practice.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Arbitrary JSON as a single cell: extraction must never panic and
    // must always produce Some(level) or no-signal.
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        let _ = extract_severity(&CellValue::Unparsed(value.clone()));

        // The same payload as an untagged cell.
        if let Ok(cell) = serde_json::from_value::<CellValue>(value.clone()) {
            let _ = extract_severity(&cell);
        }

        // The same payload as a whole matrix snapshot: every reduction
        // must complete on whatever deserializes.
        if let Ok(matrix) = serde_json::from_value::<ImpactMatrix>(value) {
            let rto = compute_rto(&matrix);
            let mtpd = compute_mtpd(&matrix);
            if let (Some(rto), Some(mtpd)) = (rto, mtpd) {
                assert!(rto <= mtpd, "second occurrence cannot precede the first");
            }

            let _ = classify_process(&matrix, &ThresholdState::Loading);
            let _ = classify_process(&matrix, &ThresholdState::loaded(24));
            let _ = classify_process(&matrix, &ThresholdState::unavailable("fuzz"));
        }
    }
});
