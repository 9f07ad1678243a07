//! Basis reconciliation: keep only the positions where both parties
//! measured in the same basis.
//!
//! Sifting walks the indices in ascending order, so the two key candidates
//! stay positionally aligned. QBER comparison downstream is positional,
//! not value-based.

use crate::error::{Bb84Error, Result};
use crate::qubit::Basis;

/// The two sifted key candidates produced by basis reconciliation.
///
/// Both vectors have the same length: the number of indices where the
/// bases agreed, in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiftedKeys {
    /// Alice's retained bits (her raw bits at matching indices).
    pub alice: Vec<bool>,
    /// Bob's retained bits (his outcomes at matching indices).
    pub bob: Vec<bool>,
}

impl SiftedKeys {
    /// Number of bits that survived sifting.
    pub fn len(&self) -> usize {
        self.alice.len()
    }

    /// True when no bases matched.
    pub fn is_empty(&self) -> bool {
        self.alice.is_empty()
    }
}

/// Sift a measured transmission down to its matching-basis positions.
///
/// For every index where `alice_bases[i] == bob_bases[i]`, Alice keeps
/// `alice_bits[i]` and Bob keeps `bob_results[i]`. All four sequences must
/// have equal length; a mismatch means the caller's run bookkeeping is
/// broken and fails fast.
pub fn sift_keys(
    alice_bits: &[bool],
    alice_bases: &[Basis],
    bob_bases: &[Basis],
    bob_results: &[bool],
) -> Result<SiftedKeys> {
    let n = alice_bits.len();
    for (context, len) in [
        ("alice_bases", alice_bases.len()),
        ("bob_bases", bob_bases.len()),
        ("bob_results", bob_results.len()),
    ] {
        if len != n {
            return Err(Bb84Error::MisalignedSequences {
                context,
                expected: n,
                actual: len,
            });
        }
    }

    let mut alice = Vec::new();
    let mut bob = Vec::new();
    for i in 0..n {
        if alice_bases[i] == bob_bases[i] {
            alice.push(alice_bits[i]);
            bob.push(bob_results[i]);
        }
    }
    Ok(SiftedKeys { alice, bob })
}

#[cfg(test)]
mod tests {
    use super::*;

    const Z: Basis = Basis::Rectilinear;
    const X: Basis = Basis::Diagonal;

    #[test]
    fn keeps_only_matching_positions_in_order() {
        let alice_bits = vec![true, false, true, false, true];
        let alice_bases = vec![Z, X, Z, X, Z];
        let bob_bases = vec![Z, Z, Z, X, X];
        let bob_results = vec![true, true, false, false, true];

        let keys = sift_keys(&alice_bits, &alice_bases, &bob_bases, &bob_results).unwrap();
        // Indices 0, 2 and 3 match.
        assert_eq!(keys.alice, vec![true, true, false]);
        assert_eq!(keys.bob, vec![true, false, false]);
        assert_eq!(keys.len(), 3);
        assert!(!keys.is_empty());
    }

    #[test]
    fn key_lengths_equal_matching_count() {
        let alice_bits = vec![true; 6];
        let alice_bases = vec![Z, Z, X, X, Z, X];
        let bob_bases = vec![X, Z, X, Z, Z, Z];
        let bob_results = vec![false; 6];

        let matching = alice_bases
            .iter()
            .zip(&bob_bases)
            .filter(|(a, b)| a == b)
            .count();
        let keys = sift_keys(&alice_bits, &alice_bases, &bob_bases, &bob_results).unwrap();
        assert_eq!(keys.alice.len(), matching);
        assert_eq!(keys.bob.len(), matching);
    }

    #[test]
    fn disjoint_bases_leave_empty_keys() {
        let keys = sift_keys(&[true, false], &[Z, X], &[X, Z], &[true, true]).unwrap();
        assert!(keys.is_empty());
        assert_eq!(keys.len(), 0);
    }

    #[test]
    fn empty_inputs_sift_to_empty_keys() {
        let keys = sift_keys(&[], &[], &[], &[]).unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn unequal_lengths_fail_fast() {
        let err = sift_keys(&[true, false], &[Z, X], &[Z], &[true, false]).unwrap_err();
        assert_eq!(
            err,
            Bb84Error::MisalignedSequences {
                context: "bob_bases",
                expected: 2,
                actual: 1,
            }
        );

        let err = sift_keys(&[true], &[Z], &[Z], &[]).unwrap_err();
        assert_eq!(
            err,
            Bb84Error::MisalignedSequences {
                context: "bob_results",
                expected: 1,
                actual: 0,
            }
        );
    }
}
