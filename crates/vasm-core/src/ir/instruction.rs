//! IR Instructions
//!
//! Pseudo-assembly instructions over virtual registers. There is no
//! real machine behind these: the rendered mnemonic text is the final
//! output of the compiler.

use crate::token::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A virtual register, named `R{n}` by allocation order.
///
/// The pool is append-only: indices start at 0 within one compilation
/// and are never reused or freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register(pub u32);

impl Register {
    /// The register's index in allocation order
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// An instruction operand, kept as opaque text.
///
/// Source identifiers, integer literals and register names all travel
/// through the pipeline uniformly as operand strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand(String);

impl Operand {
    /// Create an operand from source text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The operand text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Register> for Operand {
    fn from(reg: Register) -> Self {
        Self(reg.to_string())
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single pseudo-assembly instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Load an operand into a freshly allocated register
    Load {
        /// Destination register
        dst: Register,
        /// Source operand
        src: Operand,
    },

    /// Apply an arithmetic operator to a register in place
    /// (`ADD R0, b` and friends)
    Arith {
        /// The operator to apply
        op: Operator,
        /// Destination register (also the left-hand side)
        dst: Register,
        /// Right-hand operand
        src: Operand,
    },

    /// Store the final value into the assignment target
    Store {
        /// The assignment's left-hand identifier
        target: String,
        /// The value being stored
        src: Operand,
    },
}

impl Instruction {
    /// The destination register, if this instruction writes one
    pub fn dst(&self) -> Option<Register> {
        match self {
            Instruction::Load { dst, .. } | Instruction::Arith { dst, .. } => Some(*dst),
            Instruction::Store { .. } => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Load { dst, src } => write!(f, "LOAD {}, {}", dst, src),
            Instruction::Arith { op, dst, src } => {
                write!(f, "{} {}, {}", op.mnemonic(), dst, src)
            }
            Instruction::Store { target, src } => write!(f, "STORE {}, {}", target, src),
        }
    }
}
