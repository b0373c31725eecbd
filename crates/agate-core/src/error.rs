//! Framework error type.
//!
//! The automaton has no recoverable internal errors — every branch is total
//! over the defined state space — so the only variant is configuration,
//! surfaced before a run starts.

use thiserror::Error;

/// The top-level error type for `agate-core` and a common base for the
/// other `agate-*` crates.
#[derive(Debug, Error)]
pub enum AgateError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `agate-*` crates.
pub type AgateResult<T> = Result<T, AgateError>;
