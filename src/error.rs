//! Error types for the BB84 simulation.

use thiserror::Error;

/// Result type alias for simulation and session operations
pub type Result<T> = std::result::Result<T, Bb84Error>;

/// Errors that can occur during a protocol run or session
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Bb84Error {
    /// Sequence generation was asked for a zero-length sequence
    #[error("sequence length must be at least 1, got {requested}")]
    InvalidLength { requested: usize },

    /// Index-aligned input sequences had different lengths
    #[error("misaligned sequences: {context} has length {actual}, expected {expected}")]
    MisalignedSequences {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A session stage was invoked before its prerequisite stage
    #[error("session stage out of order: {0}")]
    StageOrder(&'static str),

    /// Encryption requires at least one sifted key bit
    #[error("sifted key is empty: no bases matched during reconciliation")]
    EmptySiftedKey,
}
