//! IR Program
//!
//! A program is the ordered instruction sequence produced by one
//! compilation. Its `Display` form is the newline-joined listing
//! handed back to callers.

use crate::ir::Instruction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A compiled instruction listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// The sequence of instructions
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new program
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Get the number of instructions
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the program is empty
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Add an instruction to the end
    pub fn push_instruction(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Get instruction at index
    pub fn get_instruction(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}
