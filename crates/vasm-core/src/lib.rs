//! VASM Core - Core types for the VASM statement compiler
//!
//! This crate provides the fundamental types shared across the VASM
//! pipeline:
//! - Token definitions for the lexical layer
//! - IR (pseudo-assembly instruction) definitions
//! - The program listing type

pub mod ir;
pub mod token;

// Re-export commonly used types
pub use ir::{Instruction, Operand, Program, Register};
pub use token::{Operator, Token};
