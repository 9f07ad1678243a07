//! Channel models: direct transmission and intercept-resend eavesdropping.
//!
//! Both models measure index-by-index with one shared rule: measuring in
//! the preparation basis reproduces the prepared bit and consumes no
//! randomness; measuring in the other basis consumes one draw and
//! collapses to a uniform bit. The intercept-resend model inserts Eve
//! between the parties: she measures with her own random basis and
//! forwards a qubit re-prepared from her result, so her basis (not
//! Alice's) governs what Bob sees on intercepted positions.
//!
//! The interception coin is evaluated per qubit, so a probability below
//! 1.0 gives a partial eavesdropper; at 0.0 every qubit passes through
//! unmodified.

use rand::Rng;

use crate::error::{Bb84Error, Result};
use crate::qubit::{random_bit, Basis};

/// Per-qubit record of what Eve did in the intercept-resend run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interception {
    /// The qubit passed through unmodified.
    NotIntercepted,
    /// Eve measured in `basis` and forwarded a qubit carrying `outcome`.
    Intercepted { basis: Basis, outcome: bool },
}

impl Interception {
    /// Whether Eve touched this qubit.
    pub fn is_intercepted(self) -> bool {
        matches!(self, Interception::Intercepted { .. })
    }

    /// Eve's measurement basis, when she intercepted.
    pub fn basis(self) -> Option<Basis> {
        match self {
            Interception::NotIntercepted => None,
            Interception::Intercepted { basis, .. } => Some(basis),
        }
    }

    /// Eve's measured bit, when she intercepted.
    pub fn outcome(self) -> Option<bool> {
        match self {
            Interception::NotIntercepted => None,
            Interception::Intercepted { outcome, .. } => Some(outcome),
        }
    }
}

/// Measure one qubit prepared as (`bit`, `prepared`) in the basis
/// `measured`.
///
/// Basis match reproduces the prepared bit exactly; mismatch collapses to
/// a fresh uniform bit. This is the only measurement rule in the protocol;
/// both channel models and Eve herself apply it.
pub fn measure_qubit<R: Rng>(bit: bool, prepared: Basis, measured: Basis, rng: &mut R) -> bool {
    if prepared == measured {
        bit
    } else {
        random_bit(rng)
    }
}

fn ensure_aligned(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Bb84Error::MisalignedSequences {
            context,
            expected,
            actual,
        })
    }
}

/// Measure a transmission over the direct channel (no eavesdropper).
///
/// Index i of the result is Alice's bit when the bases agree at i, and a
/// uniform random bit otherwise. Empty inputs yield an empty result; the
/// three sequences must have equal length.
pub fn measure_direct<R: Rng>(
    alice_bits: &[bool],
    alice_bases: &[Basis],
    bob_bases: &[Basis],
    rng: &mut R,
) -> Result<Vec<bool>> {
    let n = alice_bits.len();
    ensure_aligned("alice_bases", n, alice_bases.len())?;
    ensure_aligned("bob_bases", n, bob_bases.len())?;

    let mut results = Vec::with_capacity(n);
    for i in 0..n {
        results.push(measure_qubit(
            alice_bits[i],
            alice_bases[i],
            bob_bases[i],
            rng,
        ));
    }
    Ok(results)
}

/// Measure a transmission over the intercept-resend channel.
///
/// Eve's pass runs first: per qubit, with probability
/// `intercept_probability` she picks a uniform basis, measures Alice's
/// qubit by the shared rule, and forwards a qubit re-prepared with her
/// measured bit and her basis; otherwise the qubit passes unmodified.
/// Bob's pass then measures every forwarded qubit against his own basis.
/// Returns his outcomes alongside one [`Interception`] per qubit.
///
/// The probability coin is compared as `draw < p`, so values at or below
/// 0.0 never intercept and values at or above 1.0 always do.
pub fn measure_intercepted<R: Rng>(
    alice_bits: &[bool],
    alice_bases: &[Basis],
    bob_bases: &[Basis],
    intercept_probability: f64,
    rng: &mut R,
) -> Result<(Vec<bool>, Vec<Interception>)> {
    let n = alice_bits.len();
    ensure_aligned("alice_bases", n, alice_bases.len())?;
    ensure_aligned("bob_bases", n, bob_bases.len())?;

    // Eve's pass: decide, measure, and re-prepare each forwarded qubit.
    let mut forwarded: Vec<(bool, Basis)> = Vec::with_capacity(n);
    let mut interceptions = Vec::with_capacity(n);
    for i in 0..n {
        if rng.gen::<f64>() < intercept_probability {
            let eve_basis = Basis::random(rng);
            let eve_outcome = measure_qubit(alice_bits[i], alice_bases[i], eve_basis, rng);
            forwarded.push((eve_outcome, eve_basis));
            interceptions.push(Interception::Intercepted {
                basis: eve_basis,
                outcome: eve_outcome,
            });
        } else {
            forwarded.push((alice_bits[i], alice_bases[i]));
            interceptions.push(Interception::NotIntercepted);
        }
    }

    // Bob's pass over whatever reached him.
    let mut bob_results = Vec::with_capacity(n);
    for i in 0..n {
        let (bit, basis) = forwarded[i];
        bob_results.push(measure_qubit(bit, basis, bob_bases[i], rng));
    }
    Ok((bob_results, interceptions))
}
