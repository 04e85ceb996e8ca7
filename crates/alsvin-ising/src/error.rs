//! Error types for the Ising crate.

use thiserror::Error;

/// Errors in Ising-model construction and translation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IsingError {
    /// The same interaction key was supplied more than once.
    #[error("Duplicate interaction key {0:?}")]
    DuplicateKey(Vec<u32>),

    /// Interaction keys may couple at most two spins.
    #[error("Interaction key {key:?} has arity {arity}; only arities 0, 1, 2 are supported")]
    UnsupportedArity {
        /// The offending key, as supplied.
        key: Vec<u32>,
        /// Its arity.
        arity: usize,
    },

    /// A coupling must involve two distinct spins.
    #[error("Interaction key {0:?} repeats a spin index")]
    RepeatedIndex(Vec<u32>),

    /// A spin index exceeds the qubit register.
    #[error("Spin index {qubit} out of range for {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending spin index.
        qubit: u32,
        /// The register size being translated against.
        num_qubits: u32,
    },
}

/// Result type for Ising operations.
pub type IsingResult<T> = Result<T, IsingError>;
