//! Error types for the execution engine.

use thiserror::Error;

/// Errors that can occur while executing a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit exceeds the engine's qubit capacity.
    #[error("Circuit exceeds engine capacity: {0}")]
    CircuitTooLarge(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),
}

/// Result type for execution operations.
pub type SimResult<T> = Result<T, SimError>;
