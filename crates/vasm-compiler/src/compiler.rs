//! Main compiler
//!
//! Chains the four pipeline stages: validation, tokenization,
//! infix-to-postfix conversion, and instruction generation. Each call
//! owns all of its working state, so compilations are independent and
//! safe to run concurrently.

use crate::codegen::InstructionGenerator;
use crate::error::Result;
use crate::postfix::PostfixConverter;
use crate::tokenizer::Tokenizer;
use crate::validator::StatementValidator;
use vasm_core::Program;

/// The VASM statement compiler
pub struct Compiler;

impl Compiler {
    /// Compile an assignment statement into an instruction listing.
    ///
    /// The pipeline fails fast: the first stage error is returned and
    /// no partial program is produced.
    pub fn compile(statement: &str) -> Result<Program> {
        let statement = StatementValidator::validate(statement)?;
        log::debug!("compiling assignment to `{}`", statement.target);

        let tokens = Tokenizer::tokenize(&statement.expression)?;
        let postfix = PostfixConverter::convert(&tokens);
        log::debug!(
            "{} tokens, {} in postfix order",
            tokens.len(),
            postfix.len()
        );

        let mut generator = InstructionGenerator::new();
        generator.generate(&statement.target, &postfix)
    }

    /// Text-in/text-out surface for I/O callers.
    ///
    /// The success payload is the newline-joined listing; the failure
    /// payload is the error message, to be displayed as-is.
    pub fn compile_to_listing(statement: &str) -> std::result::Result<String, String> {
        Self::compile(statement)
            .map(|program| program.to_string())
            .map_err(|err| err.to_string())
    }
}
