//! Statement validator
//!
//! First pipeline stage: checks that the raw input has the shape
//! `identifier = expression` and splits it into the assignment target
//! and the right-hand side text.

use crate::error::{CompileError, Result};
use vasm_core::token::is_identifier;

/// A validated assignment statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The assignment's left-hand identifier
    pub target: String,
    /// The right-hand side text, trimmed
    pub expression: String,
}

/// Statement-shape validator
pub struct StatementValidator;

impl StatementValidator {
    /// Validate a raw statement and split it at the `=` sign.
    ///
    /// Whitespace around the target, the `=` and the right-hand side
    /// is insignificant. A missing `=`, an invalid target identifier,
    /// or more than one `=` all reject the statement. An empty
    /// right-hand side is accepted here and reported by the tokenizer
    /// as an empty expression.
    pub fn validate(statement: &str) -> Result<Statement> {
        let (target, expression) = statement
            .split_once('=')
            .ok_or(CompileError::InvalidStatement)?;

        // A second `=` would leave the expression ambiguous
        if expression.contains('=') {
            return Err(CompileError::InvalidStatement);
        }

        let target = target.trim();
        if !is_identifier(target) {
            return Err(CompileError::InvalidStatement);
        }

        Ok(Statement {
            target: target.to_string(),
            expression: expression.trim().to_string(),
        })
    }
}
