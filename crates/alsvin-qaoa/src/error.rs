//! Error types for QAOA construction and estimation.

use thiserror::Error;

/// Errors in QAOA circuit building, execution, and reduction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QaoaError {
    /// The parameter vector does not match the layer count.
    #[error("Expected {expected} parameters for {layers} layers, got {got}")]
    ParameterCount {
        /// Required parameter count (two per layer).
        expected: usize,
        /// Number of layers.
        layers: usize,
        /// Supplied parameter count.
        got: usize,
    },

    /// Execution produced no usable measurement outcomes.
    #[error("Measurement results are empty; cannot estimate an expectation value")]
    EmptyCounts,

    /// Malformed Ising model.
    #[error(transparent)]
    Ising(#[from] alsvin_ising::IsingError),

    /// Circuit construction failed.
    #[error(transparent)]
    Ir(#[from] alsvin_ir::IrError),

    /// Native-basis translation failed.
    #[error(transparent)]
    Compile(#[from] alsvin_compile::CompileError),

    /// The execution engine rejected the job.
    #[error(transparent)]
    Execution(#[from] alsvin_sim::SimError),
}

/// Result type for QAOA operations.
pub type QaoaResult<T> = Result<T, QaoaError>;
