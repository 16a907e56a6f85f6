use tracing::debug;

use crate::config::Domain;
use crate::error::{FilesetsError, Result};
use crate::parse::{tokenize, to_postfix, Postfix};
use crate::set::Set;
use crate::shuffle::{order_ids, OutputOrder};
use crate::source::SetSource;
// used for the operand stack
use crate::stack::{BoundedStack, DEFAULT_CAPACITY};
use crate::token::{Operator, Token};

/// Turns an operand into a set, loading it from `source` if it is still a
/// file reference.
fn materialize(token: Token, source: &dyn SetSource, domain: Domain) -> Result<Set> {
    match token {
        Token::Set(set) => Ok(set),
        Token::FileRef(path) => source.load(&path, domain),
        other => Err(FilesetsError::Invariant(format!(
            "{} found where an operand was expected",
            other
        ))),
    }
}

fn apply(
    operator: Operator,
    operands: &mut BoundedStack<Token>,
    source: &dyn SetSource,
    domain: Domain,
) -> Result<Set> {
    if operands.depth() < operator.arity() {
        return Err(FilesetsError::InsufficientOperands { operator });
    }
    match operator {
        Operator::Invert => {
            let operand = pop_operand(operands)?;
            Ok(materialize(operand, source, domain)?.invert())
        }
        Operator::Union | Operator::Intersect | Operator::Difference => {
            // the operand pushed last is the right-hand side
            let right = pop_operand(operands)?;
            let left = pop_operand(operands)?;
            let left = materialize(left, source, domain)?;
            let right = materialize(right, source, domain)?;
            left.combine(operator, right)
        }
    }
}

fn pop_operand(operands: &mut BoundedStack<Token>) -> Result<Token> {
    operands
        .pop()
        .ok_or_else(|| FilesetsError::Invariant("operand stack drained".into()))
}

/// Runs a postfix sequence. File operands are loaded only when an operator
/// (or the final result) needs them.
pub fn evaluate(postfix: Postfix, source: &dyn SetSource, domain: Domain, capacity: usize) -> Result<Set> {
    let mut queue = postfix.into_queue();
    let mut operands: BoundedStack<Token> = BoundedStack::with_capacity(capacity);
    let mut step = 0;
    while let Some(token) = queue.shift() {
        match token {
            Token::Operator(operator) => {
                debug!(step, %operator, depth = operands.depth(), "applying");
                step += 1;
                let result = apply(operator, &mut operands, source, domain)?;
                operands.push(Token::Set(result))?;
            }
            Token::Paren(paren) => {
                return Err(FilesetsError::Invariant(format!(
                    "parenthesis {} in postfix sequence",
                    paren
                )));
            }
            operand => operands.push(operand)?,
        }
    }
    if operands.depth() != 1 {
        return Err(FilesetsError::InvalidExpressionResult {
            depth: operands.depth(),
        });
    }
    let result = materialize(pop_operand(&mut operands)?, source, domain)?;
    debug!(result = %result.provenance(), ids = result.len(), "evaluated");
    Ok(result)
}

/// Compiles and evaluates expressions against sets from one source.
pub struct Engine<'src> {
    domain: Domain,
    source: &'src dyn SetSource,
    capacity: usize,
}

impl<'src> Engine<'src> {
    pub fn new(domain: Domain, source: &'src dyn SetSource) -> Self {
        Self {
            domain,
            source,
            capacity: DEFAULT_CAPACITY,
        }
    }
    /// Bounds the converter's and evaluator's stacks to `capacity` entries.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
    pub fn domain(&self) -> Domain {
        self.domain
    }
    pub fn compile(&self, expression: &str) -> Result<Postfix> {
        debug!(input = expression, "compiling");
        to_postfix(tokenize(expression), self.capacity)
    }
    pub fn evaluate(&self, postfix: Postfix) -> Result<Set> {
        evaluate(postfix, self.source, self.domain, self.capacity)
    }
    pub fn execute(&self, expression: &str) -> Result<Set> {
        let postfix = self.compile(expression)?;
        self.evaluate(postfix)
    }
    /// Evaluates `expression` and returns its IDs in the requested order.
    pub fn execute_collect(&self, expression: &str, order: OutputOrder) -> Result<Vec<u32>> {
        let set = self.execute(expression)?;
        Ok(order_ids(set, order))
    }
}
