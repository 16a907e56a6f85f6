use thiserror::Error;

use crate::token::Operator;

#[derive(Error, Debug)]
pub enum FilesetsError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Parentheses mismatched")]
    MismatchedParentheses,
    #[error("Unknown operator: {symbol}")]
    UnknownOperator { symbol: String },
    #[error("Insufficient values for the current operator ({operator})")]
    InsufficientOperands { operator: Operator },
    #[error("Invalid expression: evaluation ended with {depth} values on the stack, expected 1")]
    InvalidExpressionResult { depth: usize },
    #[error("{origin}:{line}: value {value} is out of range, the max ID is {max_id}")]
    ValueOutOfRange {
        origin: String,
        line: usize,
        value: String,
        max_id: u32,
    },
    #[error("Stack capacity of {capacity} entries exceeded")]
    StackCapacityExceeded { capacity: usize },
    #[error("Resource failure: {0}")]
    Resource(String),
    #[error("Internal invariant violated: {0}")]
    Invariant(String),
    #[error("{source} in expression: {expression}")]
    InExpression {
        expression: String,
        #[source]
        source: Box<FilesetsError>,
    },
}

impl FilesetsError {
    /// Attaches the expression being evaluated to the error.
    pub fn in_expression(self, expression: impl Into<String>) -> Self {
        Self::InExpression {
            expression: expression.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilesetsError>;

// Helper conversions
impl From<std::io::Error> for FilesetsError {
    fn from(e: std::io::Error) -> Self { Self::Resource(e.to_string()) }
}

impl From<::config::ConfigError> for FilesetsError {
    fn from(e: ::config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
