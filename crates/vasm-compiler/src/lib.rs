//! VASM Compiler - assignment statements to pseudo-assembly
//!
//! This crate compiles a single-assignment arithmetic statement
//! (`variable = expression`) into a listing of pseudo-assembly
//! instructions over virtual registers. The pipeline runs four stages
//! in sequence: validation, tokenization, infix-to-postfix conversion,
//! and instruction generation.

pub mod codegen;
pub mod compiler;
pub mod error;
pub mod postfix;
pub mod tokenizer;
pub mod validator;

// Re-export main types
pub use compiler::Compiler;
pub use error::{CompileError, Result};

pub use codegen::InstructionGenerator;
pub use postfix::PostfixConverter;
pub use tokenizer::Tokenizer;
pub use validator::{Statement, StatementValidator};
