//! Pseudo-assembly IR for VASM
//!
//! The IR is a flat instruction sequence over an unbounded pool of
//! virtual registers. It is the target of compilation and, rendered
//! through `Display`, the external listing format.

pub mod instruction;
pub mod program;

pub use instruction::{Instruction, Operand, Register};
pub use program::Program;
