//! Infix-to-postfix conversion
//!
//! Third pipeline stage: reorders the infix token sequence into
//! postfix (Reverse Polish) order with the classic shunting-yard
//! algorithm. All operators are left-associative; `*`, `/` and `%`
//! bind tighter than `+` and `-`.

use vasm_core::Token;

/// Shunting-yard converter
pub struct PostfixConverter;

impl PostfixConverter {
    /// Convert an infix token sequence to postfix order.
    ///
    /// Conversion never fails. An unmatched `)` drains whatever
    /// operators are stacked without underflowing; an unmatched `(`
    /// passes through to the output, where instruction generation
    /// rejects it. Other malformed shapes also surface during
    /// generation.
    pub fn convert(tokens: &[Token]) -> Vec<Token> {
        let mut output = Vec::with_capacity(tokens.len());
        let mut stack: Vec<Token> = Vec::new();

        for token in tokens {
            match token {
                Token::Identifier(_) | Token::Literal(_) => output.push(token.clone()),

                Token::Operator(op) => {
                    while let Some(popped) = stack.pop() {
                        match popped {
                            Token::Operator(top) if top.precedence() >= op.precedence() => {
                                output.push(popped);
                            }
                            other => {
                                stack.push(other);
                                break;
                            }
                        }
                    }
                    stack.push(token.clone());
                }

                Token::LeftParen => stack.push(Token::LeftParen),

                // Pop to the matching `(` and discard it; an unmatched
                // `)` just drains the stack without underflow
                Token::RightParen => {
                    while let Some(popped) = stack.pop() {
                        if popped == Token::LeftParen {
                            break;
                        }
                        output.push(popped);
                    }
                }
            }
        }

        // Drain the stack in LIFO order. A leftover `(` is passed
        // through so the generator rejects the expression.
        while let Some(token) = stack.pop() {
            output.push(token);
        }

        output
    }
}
