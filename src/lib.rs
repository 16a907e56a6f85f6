//! Filesets – set algebra over files of integer IDs.
//!
//! Each operand of an expression is a file holding positive integer IDs, one
//! per line. Expressions combine them with four operators:
//! * `U` – union.
//! * `X` – intersection.
//! * `D` – difference (members of the left set not in the right).
//! * `I` – inversion/complement relative to the whole ID domain (highest
//!   precedence, unary prefix).
//!
//! Parentheses group. Operators, parentheses and file names must be separated
//! by whitespace, e.g. `f1 D ( f2 X f3 )` or `I ( f1 U f2 )`.
//!
//! ## Modules
//! * [`config`] – The ID [`config::Domain`] and layered [`config::Settings`].
//! * [`set`] – [`set::Set`], a bitset over the domain that records the
//!   sub-expression that produced it.
//! * [`token`] – Operators, parentheses and operand tokens.
//! * [`stack`] – The bounded stack used for conversion and evaluation.
//! * [`parse`] – Tokenizer and shunting-yard conversion to postfix.
//! * [`engine`] – The postfix evaluator and the [`engine::Engine`] facade.
//! * [`shuffle`] – Ascending or randomized output order.
//! * [`source`] – Where operand sets are loaded from.
//! * [`output`] – Writing results.
//!
//! ## Evaluation
//! An expression is split on whitespace, converted to postfix order, and run
//! on a stack machine. File operands are loaded lazily the first time an
//! operator needs them. Every operation consumes its operands, so no set is
//! ever shared. Evaluation is all-or-nothing: the first error aborts it.
//!
//! ## Quick Start
//! ```
//! use filesets::{config::Domain, engine::Engine, shuffle::OutputOrder, source::MemorySource};
//! let source = MemorySource::new()
//!     .with("f1", "1\n3\n5\n")
//!     .with("f2", "3\n4\n");
//! let engine = Engine::new(Domain::new(10).unwrap(), &source);
//! let ids = engine.execute_collect("f1 U f2", OutputOrder::Ascending).unwrap();
//! assert_eq!(ids, vec![1, 3, 4, 5]);
//! let set = engine.execute("f1 D ( f2 X f1 )").unwrap();
//! assert_eq!(set.provenance(), "( f1 D ( f2 X f1 ) )");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod parse;
pub mod set;
pub mod shuffle;
pub mod source;
pub mod stack;
pub mod token;

pub use error::{FilesetsError, Result};
