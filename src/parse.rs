//! Expression front end: whitespace tokenizing and shunting-yard conversion
//! from infix to postfix order.
//!
//! Grammar accepted by the converter:
//!
//! ```text
//! expression ::= ( expression )
//!              | I expression
//!              | expression binaryOp expression
//!              | file
//! binaryOp   ::= U | X | D
//! ```
//!
//! Every file, operator and parenthesis must be its own whitespace-delimited
//! word. Operators are upper case; any other word names a file.

use std::fmt;

use tracing::debug;

use crate::error::{FilesetsError, Result};
use crate::stack::BoundedStack;
use crate::token::{Paren, Token};

/// A postfix token sequence, consumed front to back by the evaluator.
#[derive(Debug)]
pub struct Postfix {
    tokens: BoundedStack<Token>,
}

impl Postfix {
    pub fn len(&self) -> usize {
        self.tokens.depth()
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
    pub(crate) fn into_queue(self) -> BoundedStack<Token> {
        self.tokens
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Joins expression words given as separate arguments into one expression.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}

pub fn tokenize(expression: &str) -> Vec<Token> {
    expression.split_whitespace().map(Token::classify).collect()
}

/// Converts infix tokens to postfix order. Operators and parentheses are
/// staged on a stack of at most `capacity` entries, and the output is bounded
/// the same way.
pub fn to_postfix<I>(tokens: I, capacity: usize) -> Result<Postfix>
where
    I: IntoIterator<Item = Token>,
{
    let mut output = BoundedStack::with_capacity(capacity);
    let mut operators: BoundedStack<Token> = BoundedStack::with_capacity(capacity);
    for token in tokens {
        match token {
            Token::Operator(operator) => {
                while let Some(&Token::Operator(top)) = operators.peek() {
                    if !operator.yields_to(&top) {
                        break;
                    }
                    if let Some(top) = operators.pop() {
                        output.push(top)?;
                    }
                }
                operators.push(Token::Operator(operator))?;
            }
            Token::Paren(Paren::Open) => {
                operators.push(token)?;
            }
            Token::Paren(Paren::Close) => {
                let mut matched = false;
                while let Some(top) = operators.pop() {
                    if let Token::Paren(Paren::Open) = top {
                        matched = true;
                        break;
                    }
                    output.push(top)?;
                }
                if !matched {
                    return Err(FilesetsError::MismatchedParentheses);
                }
            }
            operand => {
                output.push(operand)?;
            }
        }
    }
    while let Some(top) = operators.pop() {
        if let Token::Paren(_) = top {
            return Err(FilesetsError::MismatchedParentheses);
        }
        output.push(top)?;
    }
    let postfix = Postfix { tokens: output };
    debug!(postfix = %postfix, "converted to postfix");
    Ok(postfix)
}
