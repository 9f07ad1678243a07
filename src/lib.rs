//! # bb84-sim
//!
//! Simulation of the BB84 quantum key distribution protocol: Alice encodes
//! random bits in random bases, Bob measures in his own random bases, the
//! two sift out the positions where their bases agreed, and the error rate
//! of the sifted keys (QBER) reveals whether an eavesdropper disturbed the
//! channel.
//!
//! ## Channel models
//!
//! Every transmission is measured through two channels over the same
//! sequences:
//! - **direct**: no interception; a basis match reproduces the prepared bit
//!   and a mismatch collapses to a uniform random bit
//! - **intercept-resend**: Eve measures each qubit with probability p in a
//!   random basis of her own and forwards a qubit re-prepared from her
//!   result, imprinting a detectable ~25% error rate at p = 1
//!
//! ## Usage
//!
//! ```
//! use bb84_sim::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let comparison = run_protocol(&ProtocolConfig::default(), &mut rng).unwrap();
//! println!("QBER without Eve: {:.2}%", comparison.no_eve.qber);
//! println!("QBER with Eve: {:.2}%", comparison.with_eve.qber);
//! ```
//!
//! Every randomized operation takes `rng: &mut R` where `R: Rng`, so tests
//! and concurrent sessions inject their own seeded or thread-local
//! generators instead of sharing global state.

pub mod error;
pub mod qubit;
pub mod channel;
pub mod sift;
pub mod qber;
pub mod protocol;
pub mod cipher;
pub mod session;

pub use error::{Bb84Error, Result};

pub mod prelude {
    pub use crate::channel::*;
    pub use crate::cipher::*;
    pub use crate::error::*;
    pub use crate::protocol::*;
    pub use crate::qber::*;
    pub use crate::qubit::*;
    pub use crate::session::*;
    pub use crate::sift::*;
}
