// used to print out readable forms of tokens
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{FilesetsError, Result};
use crate::set::Set;

// ------------- Operator -------------
/// The four set operators. `Invert` is unary and binds tighter than the
/// binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Union,
    Intersect,
    Difference,
    Invert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Union,
        Operator::Intersect,
        Operator::Difference,
        Operator::Invert,
    ];
    pub fn symbol(&self) -> char {
        match self {
            Operator::Union => 'U',
            Operator::Intersect => 'X',
            Operator::Difference => 'D',
            Operator::Invert => 'I',
        }
    }
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'U' => Ok(Operator::Union),
            'X' => Ok(Operator::Intersect),
            'D' => Ok(Operator::Difference),
            'I' => Ok(Operator::Invert),
            _ => Err(FilesetsError::UnknownOperator {
                symbol: symbol.to_string(),
            }),
        }
    }
    /// Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Invert => 2,
            Operator::Union | Operator::Intersect | Operator::Difference => 1,
        }
    }
    pub fn associativity(&self) -> Associativity {
        Associativity::Left
    }
    pub fn arity(&self) -> usize {
        match self {
            Operator::Invert => 1,
            Operator::Union | Operator::Intersect | Operator::Difference => 2,
        }
    }
    /// Whether `self`, arriving at the converter, forces `top` off the
    /// operator stack first.
    pub fn yields_to(&self, top: &Operator) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence() <= top.precedence(),
            Associativity::Right => self.precedence() < top.precedence(),
        }
    }
}

impl FromStr for Operator {
    type Err = FilesetsError;
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_symbol(c),
            _ => Err(FilesetsError::UnknownOperator {
                symbol: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ------------- Paren -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Paren::Open => write!(f, "("),
            Paren::Close => write!(f, ")"),
        }
    }
}

// ------------- Token -------------
/// A unit of an expression. Parentheses only ever live inside the converter;
/// `Set` only ever appears on the evaluator's operand stack.
#[derive(Debug)]
pub enum Token {
    Operator(Operator),
    Paren(Paren),
    FileRef(PathBuf),
    Set(Set),
}

impl Token {
    /// Classifies one whitespace-delimited word of an expression.
    pub fn classify(word: &str) -> Self {
        match word {
            "(" => Token::Paren(Paren::Open),
            ")" => Token::Paren(Paren::Close),
            _ => match word.parse::<Operator>() {
                Ok(operator) => Token::Operator(operator),
                Err(_) => Token::FileRef(PathBuf::from(word)),
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Paren(paren) => write!(f, "{}", paren),
            Token::FileRef(path) => write!(f, "{}", path.display()),
            Token::Set(set) => write!(f, "{}", set.provenance()),
        }
    }
}
