//! Per-job test detail collection.
//!
//! Maps cached [`TestCaseRecord`]s to wire [`TestResult`]s. Failure error
//! text is truncated to a hard bound so a single pathological assertion
//! message cannot blow up the payload.

use payload::{TestCaseRecord, TestResult};

/// Hard upper bound on the length of one failure message, in characters.
pub const MAX_ERROR_CHARS: usize = 5000;

/// Maps one list of cached test cases to wire results.
///
/// `include_errors` is set for the failed list only; successful and skipped
/// tests carry no `errors` key at all.
pub fn collect_test_results(records: &[TestCaseRecord], include_errors: bool) -> Vec<TestResult> {
    records
        .iter()
        .map(|record| TestResult {
            name: record.name.clone(),
            method_name: record.method_name.clone(),
            class_name: record.class_name.clone(),
            errors: include_errors.then(|| {
                record
                    .errors
                    .iter()
                    .map(|message| truncate_error(message))
                    .collect()
            }),
        })
        .collect()
}

/// Cuts a failure message to its first [`MAX_ERROR_CHARS`] characters.
///
/// Counted in characters, not bytes, so multi-byte text never splits inside
/// a code point.
fn truncate_error(message: &str) -> String {
    match message.char_indices().nth(MAX_ERROR_CHARS) {
        Some((byte_offset, _)) => message[..byte_offset].to_owned(),
        None => message.to_owned(),
    }
}
