//! Expression tokenizer
//!
//! Second pipeline stage: splits the right-hand side text into a flat
//! token sequence by longest-prefix matching. Characters that start no
//! token (whitespace, stray symbols) are skipped without error.

use crate::error::{CompileError, Result};
use vasm_core::{Operator, Token};

/// Expression tokenizer
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenize an expression string.
    ///
    /// Recognizes identifiers, unsigned integer literals, the five
    /// arithmetic operators and parentheses. Returns an error only
    /// when the result is empty.
    pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut chars = expression.chars().peekable();

        while let Some(&c) = chars.peek() {
            if c.is_ascii_alphabetic() || c == '_' {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Identifier(name));
            } else if c.is_ascii_digit() {
                let mut digits = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() {
                        digits.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Literal(digits));
            } else if let Some(op) = Operator::from_symbol(c) {
                tokens.push(Token::Operator(op));
                chars.next();
            } else if c == '(' {
                tokens.push(Token::LeftParen);
                chars.next();
            } else if c == ')' {
                tokens.push(Token::RightParen);
                chars.next();
            } else {
                // Skip-unknown policy: no token, no error
                if !c.is_whitespace() {
                    log::trace!("skipping unrecognized character {:?}", c);
                }
                chars.next();
            }
        }

        if tokens.is_empty() {
            return Err(CompileError::EmptyExpression);
        }

        Ok(tokens)
    }
}
