//! End-to-end compiler tests
//!
//! Exercises the public `Compiler` surface from raw statement text to
//! the rendered instruction listing.

use vasm_compiler::{CompileError, Compiler};
use vasm_core::{Instruction, Program, Register};

// =============================================================================
// Successful compilations
// =============================================================================

#[test]
fn test_literal_assignment_emits_single_store() {
    let program = Compiler::compile("x = 7").unwrap();
    assert_eq!(program.to_string(), "STORE x, 7");
}

#[test]
fn test_identifier_assignment_emits_single_store() {
    let program = Compiler::compile("alias = source").unwrap();
    assert_eq!(program.to_string(), "STORE alias, source");
}

#[test]
fn test_single_addition() {
    let program = Compiler::compile("x = a + b").unwrap();
    assert_eq!(program.to_string(), "LOAD R0, a\nADD R0, b\nSTORE x, R0");
}

#[test]
fn test_all_operators_emit_their_mnemonics() {
    let cases = [
        ("x = a + b", "ADD"),
        ("x = a - b", "SUB"),
        ("x = a * b", "MUL"),
        ("x = a / b", "DIV"),
        ("x = a % b", "MOD"),
    ];

    for (statement, mnemonic) in cases {
        let listing = Compiler::compile(statement).unwrap().to_string();
        assert_eq!(
            listing,
            format!("LOAD R0, a\n{} R0, b\nSTORE x, R0", mnemonic)
        );
    }
}

#[test]
fn test_subtraction_is_left_associative() {
    // a - b - c subtracts in source order, not right to left
    let program = Compiler::compile("x = a - b - c").unwrap();
    assert_eq!(
        program.to_string(),
        "LOAD R0, a\nSUB R0, b\nLOAD R1, R0\nSUB R1, c\nSTORE x, R1"
    );
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    // b * c is computed into a register before being added to a
    let program = Compiler::compile("x = a + b * c").unwrap();
    assert_eq!(
        program.to_string(),
        "LOAD R0, b\nMUL R0, c\nLOAD R1, a\nADD R1, R0\nSTORE x, R1"
    );
}

#[test]
fn test_parentheses_override_precedence() {
    // (a + b) is computed before the multiplication
    let program = Compiler::compile("x = (a + b) * c").unwrap();
    assert_eq!(
        program.to_string(),
        "LOAD R0, a\nADD R0, b\nLOAD R1, R0\nMUL R1, c\nSTORE x, R1"
    );
}

#[test]
fn test_mixed_literals_and_identifiers() {
    let program = Compiler::compile("total = price * 100 + tax").unwrap();
    assert_eq!(
        program.to_string(),
        "LOAD R0, price\nMUL R0, 100\nLOAD R1, R0\nADD R1, tax\nSTORE total, R1"
    );
}

#[test]
fn test_whitespace_is_insignificant() {
    let spaced = Compiler::compile("  x   =  a+b  ").unwrap();
    let tight = Compiler::compile("x=a + b").unwrap();
    assert_eq!(spaced.to_string(), tight.to_string());
}

#[test]
fn test_unknown_characters_are_skipped() {
    let program = Compiler::compile("x = a $ + @ b").unwrap();
    assert_eq!(program.to_string(), "LOAD R0, a\nADD R0, b\nSTORE x, R0");
}

#[test]
fn test_unmatched_right_paren_is_tolerated() {
    // The converter drains safely instead of panicking
    let program = Compiler::compile("x = )a + b").unwrap();
    assert_eq!(program.to_string(), "LOAD R0, a\nADD R0, b\nSTORE x, R0");
}

#[test]
fn test_register_indices_strictly_increase() {
    let program = Compiler::compile("x = (a + b) * (c - d) % e").unwrap();

    let mut seen = 0;
    for instruction in &program.instructions {
        if let Instruction::Load { dst, .. } = instruction {
            assert_eq!(dst.index(), seen, "registers must allocate in order");
            seen += 1;
        }
    }
    assert_eq!(seen, 4);
}

#[test]
fn test_final_instruction_is_store_to_target() {
    let program = Compiler::compile("answer = a * b + c").unwrap();

    match program.instructions.last() {
        Some(Instruction::Store { target, .. }) => assert_eq!(target, "answer"),
        other => panic!("Expected trailing Store, got {:?}", other),
    }
}

#[test]
fn test_no_forward_register_references() {
    let program = Compiler::compile("x = a * b + c * d - e").unwrap();

    let mut allocated: Vec<Register> = Vec::new();
    for instruction in &program.instructions {
        let src = match instruction {
            Instruction::Load { src, .. }
            | Instruction::Arith { src, .. }
            | Instruction::Store { src, .. } => src,
        };
        if let Some(digits) = src.as_str().strip_prefix('R') {
            if let Ok(index) = digits.parse::<u32>() {
                assert!(
                    allocated.contains(&Register(index)),
                    "instruction references {} before allocation",
                    src
                );
            }
        }
        if let Some(dst) = instruction.dst() {
            if !allocated.contains(&dst) {
                allocated.push(dst);
            }
        }
    }
}

// =============================================================================
// Failing compilations
// =============================================================================

#[test]
fn test_missing_equals_is_rejected() {
    assert_eq!(
        Compiler::compile("a + b"),
        Err(CompileError::InvalidStatement)
    );
}

#[test]
fn test_broken_target_identifier_is_rejected() {
    assert_eq!(
        Compiler::compile("x y = a + b"),
        Err(CompileError::InvalidStatement)
    );
}

#[test]
fn test_double_assignment_is_rejected() {
    assert_eq!(
        Compiler::compile("x = a = b"),
        Err(CompileError::InvalidStatement)
    );
}

#[test]
fn test_empty_rhs_is_an_empty_expression() {
    assert_eq!(
        Compiler::compile("x = "),
        Err(CompileError::EmptyExpression)
    );
}

#[test]
fn test_rhs_of_only_noise_is_an_empty_expression() {
    assert_eq!(
        Compiler::compile("x = $$$"),
        Err(CompileError::EmptyExpression)
    );
}

#[test]
fn test_trailing_operator_has_insufficient_operands() {
    let result = Compiler::compile("x = a +");
    assert!(matches!(
        result,
        Err(CompileError::InsufficientOperands { .. })
    ));
}

#[test]
fn test_adjacent_operands_do_not_reduce() {
    assert_eq!(
        Compiler::compile("x = a b"),
        Err(CompileError::InvalidExpression)
    );
}

#[test]
fn test_unmatched_left_paren_is_rejected() {
    assert_eq!(
        Compiler::compile("x = (a + b"),
        Err(CompileError::InvalidExpression)
    );
}

#[test]
fn test_failures_surface_as_display_text() {
    let message = Compiler::compile_to_listing("x = a +").unwrap_err();
    assert_eq!(message, "insufficient operands for `+`");
}

// =============================================================================
// Listing serde
// =============================================================================

#[test]
fn test_program_round_trips_through_json() {
    let program = Compiler::compile("x = a + b * c").unwrap();

    let json = serde_json::to_string(&program).unwrap();
    let deserialized: Program = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized, program);
    assert_eq!(deserialized.to_string(), program.to_string());
}
