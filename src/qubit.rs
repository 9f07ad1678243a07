//! Qubit preparation: random bits and random measurement bases.
//!
//! BB84 encodes each raw key bit in one of two conjugate bases. A qubit
//! read back in its preparation basis reproduces the encoded bit; read in
//! the other basis it collapses to an uncorrelated 50/50 outcome. The
//! basis sequences drawn here are index-aligned with the bit sequence:
//! `bits[i]`, `alice_bases[i]`, `bob_bases[i]` all describe qubit i.

use std::fmt;

use rand::Rng;

use crate::error::{Bb84Error, Result};

/// A measurement basis for a single qubit.
///
/// Equality is all the protocol ever asks of a basis: matching bases give
/// correlated measurements, mismatched bases give uncorrelated ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// Rectilinear (computational) basis, transcript label `Z`.
    Rectilinear,
    /// Diagonal (Hadamard) basis, transcript label `X`.
    Diagonal,
}

impl Basis {
    /// Draw a uniformly random basis.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..2) {
            0 => Basis::Rectilinear,
            _ => Basis::Diagonal,
        }
    }

    /// Single-letter transcript label (`Z` or `X`).
    pub fn label(self) -> char {
        match self {
            Basis::Rectilinear => 'Z',
            Basis::Diagonal => 'X',
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Draw one uniformly random bit.
pub fn random_bit<R: Rng>(rng: &mut R) -> bool {
    rng.gen()
}

/// Generate Alice's raw bit sequence: n independent uniform draws.
///
/// Fails with [`Bb84Error::InvalidLength`] for n = 0. Callers holding
/// untrusted input clamp it first (see [`crate::session::clamp_num_qubits`]).
pub fn generate_bits<R: Rng>(n: usize, rng: &mut R) -> Result<Vec<bool>> {
    if n < 1 {
        return Err(Bb84Error::InvalidLength { requested: n });
    }
    Ok((0..n).map(|_| random_bit(rng)).collect())
}

/// Generate a basis sequence: n independent uniform draws, independent of
/// any bit draws.
pub fn generate_bases<R: Rng>(n: usize, rng: &mut R) -> Result<Vec<Basis>> {
    if n < 1 {
        return Err(Bb84Error::InvalidLength { requested: n });
    }
    Ok((0..n).map(|_| Basis::random(rng)).collect())
}
