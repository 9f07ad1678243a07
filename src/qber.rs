//! Quantum bit error rate: the percentage of positional mismatches
//! between the two sifted keys.
//!
//! An elevated QBER is the protocol's eavesdropping alarm: full
//! intercept-resend interception pushes it toward 25%, while an
//! undisturbed channel leaves it at 0.

/// Estimate the QBER between two sifted keys, in percent.
///
/// Compares the overlapping prefix of the two keys and returns
/// `mismatches / compared * 100`, rounded to two decimals (half away from
/// zero). Returns 0.0 when either key is empty; callers that care
/// distinguish an empty reconciliation by key length. Unequal lengths
/// truncate to the shorter key rather than erroring.
pub fn estimate_qber(alice_key: &[bool], bob_key: &[bool]) -> f64 {
    if alice_key.is_empty() || bob_key.is_empty() {
        return 0.0;
    }
    let len = alice_key.len().min(bob_key.len());
    let mismatches = alice_key[..len]
        .iter()
        .zip(&bob_key[..len])
        .filter(|(a, b)| a != b)
        .count();
    let percent = mismatches as f64 / len as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}
