//! errors.rs - Custom error types for the simish-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `simish-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SimishError {
    #[error("Invalid weight '{0}': {1} (weights must be finite and non-negative)")]
    InvalidWeight(String, f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot record a vote without both an input and a matched text")]
    EmptyVoteTarget,

    #[error("Failed to serialize store contents: {0}")]
    SerializationError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
