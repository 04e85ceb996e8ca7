//! Error types for the translation crate.

use thiserror::Error;

/// Errors that can occur while rewriting a circuit to the native basis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// A rewritten instruction failed circuit validation.
    #[error("IR error during translation: {0}")]
    Ir(#[from] alsvin_ir::IrError),

    /// The worklist failed to converge to the native basis.
    #[error("Gate '{0}' did not reduce to the native basis")]
    NotReducible(String),
}

/// Result type for translation operations.
pub type CompileResult<T> = Result<T, CompileError>;
