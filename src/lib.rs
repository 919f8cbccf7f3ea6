//! # terneval
//!
//! terneval is a small interpreter for integer conditional expressions.
//! It tokenizes, parses, and evaluates expressions made of integer
//! literals, named variables, and `if(condition, truthy, falsy)` ternaries
//! whose condition is itself an expression (non-zero is true).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_expression},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression variants: number literals,
///   variable references, and ternaries.
/// - Attaches source offsets to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during parsing or
/// evaluating code, and the umbrella [`Error`] type returned by
/// [`evaluate`]. Errors carry the offending token text, source offset, or
/// variable name so that callers can match on the failure kind instead of
/// inspecting messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches source offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates `source` against `context` and returns the resulting integer.
///
/// The pipeline runs once per call with no shared state: the source is
/// tokenized, the leading expression is parsed, and the resulting tree is
/// walked against the context. The grammar recognizes only a single
/// leading ternary or primary term; tokens after it (such as a top-level
/// `+` and everything that follows) are dropped without error.
///
/// # Parameters
/// - `source`: The expression text.
/// - `context`: The variable bindings used to resolve references.
///
/// # Returns
/// The computed integer value.
///
/// # Errors
/// Returns an [`Error`] if the leading expression cannot be parsed or if
/// evaluation references a variable absent from the context.
///
/// # Examples
/// ```
/// use terneval::{evaluate, interpreter::evaluator::core::Context};
///
/// let mut context = Context::new();
/// context.define("threshold", 4);
///
/// // The truthy branch is selected: `threshold` is non-zero.
/// assert_eq!(evaluate("if (threshold, 15, 0)", &context).unwrap(), 15);
///
/// // Unbound variables are reported as errors.
/// assert!(evaluate("missing", &context).is_err());
/// ```
pub fn evaluate(source: &str, context: &Context) -> Result<i64, Error> {
    let tokens = tokenize(source);
    let mut iter = tokens.iter().peekable();

    let expression = parse_expression(&mut iter)?;

    Ok(context.eval(&expression)?)
}
