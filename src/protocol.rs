//! One protocol session: a single transmission measured through both
//! channel models, sifted, and scored.
//!
//! The two runs share Alice's bits and bases and Bob's bases. Bob's bases
//! are drawn once per session, so the runs differ only in the channel
//! model and stay comparable qubit-for-qubit.

use rand::Rng;

use crate::channel::{measure_direct, measure_intercepted, Interception};
use crate::error::Result;
use crate::qber::estimate_qber;
use crate::qubit::{generate_bases, generate_bits, Basis};
use crate::sift::{sift_keys, SiftedKeys};

/// Fallback sequence length when a caller supplies no usable size.
pub const DEFAULT_NUM_QUBITS: usize = 8;

/// Configuration for one protocol session.
#[derive(Debug, Clone)]
pub struct ProtocolConfig {
    /// Number of qubits Alice transmits.
    pub num_qubits: usize,
    /// Per-qubit probability that Eve intercepts in the eavesdropped run.
    pub intercept_probability: f64,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            num_qubits: DEFAULT_NUM_QUBITS,
            intercept_probability: 1.0,
        }
    }
}

/// Aggregate of one channel model's run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolRun {
    /// Bob's measurement outcome per qubit.
    pub bob_results: Vec<bool>,
    /// Eve's per-qubit trace; empty in the no-Eve run.
    pub interceptions: Vec<Interception>,
    /// The two sifted key candidates.
    pub keys: SiftedKeys,
    /// Estimated error rate between the sifted keys, in percent.
    pub qber: f64,
}

/// The two runs of one session over a single transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolComparison {
    /// Alice's raw bits.
    pub alice_bits: Vec<bool>,
    /// Alice's preparation bases.
    pub alice_bases: Vec<Basis>,
    /// Bob's measurement bases, shared by both runs.
    pub bob_bases: Vec<Basis>,
    /// The run without interception.
    pub no_eve: ProtocolRun,
    /// The intercept-resend run.
    pub with_eve: ProtocolRun,
}

/// Measure one prepared transmission through both channel models.
///
/// Returns the no-Eve run first. The direct run consumes its randomness
/// before the intercepted run begins.
pub fn measure_transmission<R: Rng>(
    alice_bits: &[bool],
    alice_bases: &[Basis],
    bob_bases: &[Basis],
    intercept_probability: f64,
    rng: &mut R,
) -> Result<(ProtocolRun, ProtocolRun)> {
    let direct_results = measure_direct(alice_bits, alice_bases, bob_bases, rng)?;
    let direct_keys = sift_keys(alice_bits, alice_bases, bob_bases, &direct_results)?;
    let no_eve = ProtocolRun {
        qber: estimate_qber(&direct_keys.alice, &direct_keys.bob),
        bob_results: direct_results,
        interceptions: Vec::new(),
        keys: direct_keys,
    };

    let (eve_results, interceptions) = measure_intercepted(
        alice_bits,
        alice_bases,
        bob_bases,
        intercept_probability,
        rng,
    )?;
    let eve_keys = sift_keys(alice_bits, alice_bases, bob_bases, &eve_results)?;
    let with_eve = ProtocolRun {
        qber: estimate_qber(&eve_keys.alice, &eve_keys.bob),
        bob_results: eve_results,
        interceptions,
        keys: eve_keys,
    };

    Ok((no_eve, with_eve))
}

/// Run one full session: generate a transmission, measure it through both
/// channel models, sift, and estimate the QBER of each.
pub fn run_protocol<R: Rng>(config: &ProtocolConfig, rng: &mut R) -> Result<ProtocolComparison> {
    let n = config.num_qubits;
    let alice_bits = generate_bits(n, rng)?;
    let alice_bases = generate_bases(n, rng)?;
    let bob_bases = generate_bases(n, rng)?;

    let (no_eve, with_eve) = measure_transmission(
        &alice_bits,
        &alice_bases,
        &bob_bases,
        config.intercept_probability,
        rng,
    )?;

    Ok(ProtocolComparison {
        alice_bits,
        alice_bases,
        bob_bases,
        no_eve,
        with_eve,
    })
}
