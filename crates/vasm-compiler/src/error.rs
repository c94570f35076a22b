//! Compiler error types

use thiserror::Error;
use vasm_core::Operator;

/// Compiler error
///
/// Every variant is terminal: the pipeline fails fast on the first
/// error and no partial listing is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Statement does not match `identifier = expression`
    #[error("invalid statement: expected `identifier = expression`")]
    InvalidStatement,

    /// Right-hand side contains no tokens
    #[error("empty expression")]
    EmptyExpression,

    /// An operator had fewer than two pending operands
    #[error("insufficient operands for `{op}`")]
    InsufficientOperands {
        /// The operator that could not be applied
        op: Operator,
    },

    /// The expression did not reduce to a single value
    #[error("expression does not reduce to a single value")]
    InvalidExpression,
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
