//! Staged key-exchange session: transmit, measure, encrypt, decrypt.
//!
//! [`KeyExchangeSession`] drives one exchange through the same stages an
//! interactive front end would: Alice transmits a fresh sequence, both
//! channel models are measured, and the reconciled no-Eve key carries a
//! message through the toy cipher. Each stage requires its predecessor
//! and re-running an earlier stage discards everything downstream of it.

use rand::Rng;

use crate::channel::Interception;
use crate::cipher::{decrypt, encrypt};
use crate::error::{Bb84Error, Result};
use crate::protocol::{measure_transmission, ProtocolComparison, DEFAULT_NUM_QUBITS};
use crate::qubit::{generate_bases, generate_bits, Basis};

/// Resolve a requested sequence length, falling back to
/// [`DEFAULT_NUM_QUBITS`] when the request is absent or zero.
pub fn clamp_num_qubits(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if n > 0 => n,
        _ => DEFAULT_NUM_QUBITS,
    }
}

/// One qubit's journey through a measured session, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QubitRecord {
    /// Position in the transmitted sequence.
    pub index: usize,
    /// The bit Alice encoded.
    pub alice_bit: bool,
    /// The basis Alice prepared in.
    pub alice_basis: Basis,
    /// The basis Bob measured in.
    pub bob_basis: Basis,
    /// Whether preparation and measurement bases agree.
    pub bases_match: bool,
    /// Bob's outcome over the direct channel.
    pub bob_no_eve: bool,
    /// Bob's outcome over the intercepted channel.
    pub bob_with_eve: bool,
    /// Eve's action on this qubit in the intercepted run.
    pub interception: Interception,
}

/// A prepared transmission awaiting measurement.
#[derive(Debug, Clone)]
struct Transmission {
    alice_bits: Vec<bool>,
    alice_bases: Vec<Basis>,
}

/// Stateful driver for one exchange, owning its randomness source.
///
/// ```
/// use bb84_sim::session::KeyExchangeSession;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut session = KeyExchangeSession::new(StdRng::seed_from_u64(7));
/// session.transmit(Some(32)).unwrap();
/// let comparison = session.measure().unwrap();
/// assert_eq!(comparison.no_eve.qber, 0.0);
/// ```
#[derive(Debug)]
pub struct KeyExchangeSession<R: Rng> {
    rng: R,
    intercept_probability: f64,
    transmission: Option<Transmission>,
    comparison: Option<ProtocolComparison>,
    ciphertext: Option<String>,
}

impl<R: Rng> KeyExchangeSession<R> {
    /// Create a session with full interception in the eavesdropped run.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            intercept_probability: 1.0,
            transmission: None,
            comparison: None,
            ciphertext: None,
        }
    }

    /// Set the per-qubit interception probability for the with-Eve run.
    pub fn with_intercept_probability(mut self, intercept_probability: f64) -> Self {
        self.intercept_probability = intercept_probability;
        self
    }

    /// Generate a fresh transmission of `requested` qubits (clamped via
    /// [`clamp_num_qubits`]) and discard any prior measurement and
    /// ciphertext. Returns the resolved length.
    pub fn transmit(&mut self, requested: Option<usize>) -> Result<usize> {
        let n = clamp_num_qubits(requested);
        let alice_bits = generate_bits(n, &mut self.rng)?;
        let alice_bases = generate_bases(n, &mut self.rng)?;
        self.transmission = Some(Transmission {
            alice_bits,
            alice_bases,
        });
        self.comparison = None;
        self.ciphertext = None;
        Ok(n)
    }

    /// Draw Bob's bases and measure the pending transmission through both
    /// channel models.
    ///
    /// Bob's bases are drawn here, once, and shared by the two runs.
    /// Measuring again draws fresh bases and outcomes over the same
    /// transmission, and discards any ciphertext from the previous
    /// measurement, since the sifted keys it was built from no longer
    /// apply.
    pub fn measure(&mut self) -> Result<&ProtocolComparison> {
        let transmission = self
            .transmission
            .as_ref()
            .ok_or(Bb84Error::StageOrder("measure requires a prior transmit"))?;
        let bob_bases = generate_bases(transmission.alice_bits.len(), &mut self.rng)?;
        let (no_eve, with_eve) = measure_transmission(
            &transmission.alice_bits,
            &transmission.alice_bases,
            &bob_bases,
            self.intercept_probability,
            &mut self.rng,
        )?;
        let comparison = ProtocolComparison {
            alice_bits: transmission.alice_bits.clone(),
            alice_bases: transmission.alice_bases.clone(),
            bob_bases,
            no_eve,
            with_eve,
        };
        self.ciphertext = None;
        Ok(self.comparison.insert(comparison))
    }

    /// The most recent measurement, if any.
    pub fn comparison(&self) -> Option<&ProtocolComparison> {
        self.comparison.as_ref()
    }

    /// Per-qubit records of the most recent measurement.
    pub fn transcript(&self) -> Result<Vec<QubitRecord>> {
        let comparison = self
            .comparison
            .as_ref()
            .ok_or(Bb84Error::StageOrder("transcript requires a measurement"))?;
        let records = comparison
            .alice_bits
            .iter()
            .enumerate()
            .map(|(index, &alice_bit)| {
                let alice_basis = comparison.alice_bases[index];
                let bob_basis = comparison.bob_bases[index];
                QubitRecord {
                    index,
                    alice_bit,
                    alice_basis,
                    bob_basis,
                    bases_match: alice_basis == bob_basis,
                    bob_no_eve: comparison.no_eve.bob_results[index],
                    bob_with_eve: comparison.with_eve.bob_results[index],
                    interception: comparison.with_eve.interceptions[index],
                }
            })
            .collect();
        Ok(records)
    }

    /// Encrypt `plaintext` with Alice's reconciled no-Eve key and retain
    /// the ciphertext for [`decrypt_message`](Self::decrypt_message).
    pub fn encrypt_message(&mut self, plaintext: &str) -> Result<String> {
        let comparison = self
            .comparison
            .as_ref()
            .ok_or(Bb84Error::StageOrder("encrypt requires a measurement"))?;
        if comparison.no_eve.keys.is_empty() {
            return Err(Bb84Error::EmptySiftedKey);
        }
        let ciphertext = encrypt(plaintext, &comparison.no_eve.keys.alice);
        self.ciphertext = Some(ciphertext.clone());
        Ok(ciphertext)
    }

    /// Decrypt the retained ciphertext with Bob's reconciled no-Eve key.
    pub fn decrypt_message(&self) -> Result<String> {
        let ciphertext = self
            .ciphertext
            .as_deref()
            .ok_or(Bb84Error::StageOrder("decrypt requires a prior encrypt"))?;
        let comparison = self
            .comparison
            .as_ref()
            .ok_or(Bb84Error::StageOrder("decrypt requires a measurement"))?;
        Ok(decrypt(ciphertext, &comparison.no_eve.keys.bob))
    }

    /// The retained ciphertext, if a message has been encrypted.
    pub fn ciphertext(&self) -> Option<&str> {
        self.ciphertext.as_deref()
    }

    /// Clear every stage, keeping the randomness source.
    pub fn reset(&mut self) {
        self.transmission = None;
        self.comparison = None;
        self.ciphertext = None;
    }
}
