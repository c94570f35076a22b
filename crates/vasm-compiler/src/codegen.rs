//! Instruction generation
//!
//! Final pipeline stage: walks the postfix token sequence with an
//! operand stack and synthesizes LOAD/arithmetic/STORE instructions,
//! allocating a fresh virtual register per operator.

use crate::error::{CompileError, Result};
use vasm_core::{Instruction, Operand, Program, Register, Token};

/// Postfix-to-instruction generator.
///
/// Owns the register counter for one compilation; registers are
/// allocated in strictly increasing order starting at `R0` and never
/// reused.
#[derive(Debug, Default)]
pub struct InstructionGenerator {
    register_count: u32,
}

impl InstructionGenerator {
    /// Create a generator with an empty register pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registers allocated so far
    pub fn registers_allocated(&self) -> u32 {
        self.register_count
    }

    /// Allocate the next virtual register
    fn allocate(&mut self) -> Register {
        let reg = Register(self.register_count);
        self.register_count += 1;
        reg
    }

    /// Generate the instruction listing for a postfix token sequence.
    ///
    /// Each operator consumes two pending operands (right popped
    /// first) and emits a LOAD of the left operand followed by the
    /// operator's instruction, both into one fresh register. The walk
    /// must leave exactly one operand, which the final STORE writes to
    /// `target`.
    pub fn generate(&mut self, target: &str, postfix: &[Token]) -> Result<Program> {
        let mut program = Program::default();
        let mut operands: Vec<Operand> = Vec::new();

        for token in postfix {
            match token {
                Token::Operator(op) => {
                    let right = operands.pop();
                    let left = operands.pop();
                    let (right, left) = match (right, left) {
                        (Some(right), Some(left)) => (right, left),
                        _ => return Err(CompileError::InsufficientOperands { op: *op }),
                    };

                    let dst = self.allocate();
                    program.push_instruction(Instruction::Load { dst, src: left });
                    program.push_instruction(Instruction::Arith {
                        op: *op,
                        dst,
                        src: right,
                    });
                    operands.push(Operand::from(dst));
                }
                Token::Identifier(name) => operands.push(Operand::new(name.clone())),
                Token::Literal(digits) => operands.push(Operand::new(digits.clone())),
                // Parentheses never survive postfix conversion
                Token::LeftParen | Token::RightParen => {
                    return Err(CompileError::InvalidExpression)
                }
            }
        }

        match (operands.pop(), operands.pop()) {
            (Some(value), None) => {
                program.push_instruction(Instruction::Store {
                    target: target.to_string(),
                    src: value,
                });
                Ok(program)
            }
            _ => Err(CompileError::InvalidExpression),
        }
    }
}
