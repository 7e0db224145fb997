// simish-votes/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod tally;
pub mod confidence;
pub mod statistics;

pub use confidence::{vote_confidence, ConfidenceParams};
pub use tally::{VoteDirection, VoteTally};

/// Common type definitions
pub type Confidence = f64;
