//! Lexical tokens for VASM statements
//!
//! The tokenizer classifies the right-hand side of a statement into a
//! flat sequence of these tokens. Tokens are immutable and own their
//! text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
    /// Modulo (%)
    Mod,
}

impl Operator {
    /// Parse a single-character operator symbol
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '%' => Some(Operator::Mod),
            _ => None,
        }
    }

    /// The source-level symbol for this operator
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Mod => '%',
        }
    }

    /// The instruction mnemonic this operator compiles to
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Operator::Add => "ADD",
            Operator::Sub => "SUB",
            Operator::Mul => "MUL",
            Operator::Div => "DIV",
            Operator::Mod => "MOD",
        }
    }

    /// Binding strength used during infix-to-postfix conversion.
    ///
    /// All operators are left-associative; `*`, `/` and `%` bind
    /// tighter than `+` and `-`.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div | Operator::Mod => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified lexical unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// An identifier: `[A-Za-z_][A-Za-z0-9_]*`
    Identifier(String),
    /// An unsigned integer literal, kept as text
    Literal(String),
    /// An arithmetic operator
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Returns true if this token is an operand (identifier or literal)
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Identifier(_) | Token::Literal(_))
    }

    /// The operand text, if this token is an operand
    pub fn operand_text(&self) -> Option<&str> {
        match self {
            Token::Identifier(name) => Some(name),
            Token::Literal(digits) => Some(digits),
            _ => None,
        }
    }
}

/// Check a string against the identifier grammar `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
