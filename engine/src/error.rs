//! Error type shared by the parser, the replay engine, and the writers.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Every failure the engine can report. All of them are terminal for a run.
#[derive(Debug, Error)]
pub enum Error {
    /// A sequence token is empty, has no operations, or does not start with a
    /// direction character. Raised before any replay happens.
    #[error("malformed algorithm: sequence {token:?} {reason}")]
    MalformedAlgorithm {
        /// The offending sequence token (after case normalization).
        token: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A direction character outside `U`, `A`, `D` reached the direction decoder.
    #[error("invalid direction {symbol:?}: expected one of 'U', 'A', 'D'")]
    InvalidDirection {
        /// The rejected character.
        symbol: char,
    },

    /// A new pattern was offered to a registry that is already full.
    ///
    /// Unreachable for syntactically valid algorithms; seeing it means the
    /// state-space bound was broken.
    #[error("pattern registry capacity of {capacity} exceeded")]
    RegistryCapacityExceeded {
        /// The fixed registry capacity.
        capacity: usize,
    },

    /// The trace generator was asked for an address range wider than it supports.
    #[error("address width of {bits} bits exceeds the maximum of {max}")]
    AddressWidthTooLarge {
        /// Requested width.
        bits: u32,
        /// Largest accepted width.
        max: u32,
    },

    /// Writing a report or trace failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the JSON report failed.
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
