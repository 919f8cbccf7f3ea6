/// Core parsing logic for expressions.
///
/// Contains the expression entry point, ternary parsing, and the shared
/// `ParseResult` type.
pub mod core;

/// Primary (atomic) expression parsing.
///
/// Handles integer literals and variable references, the leaves of the
/// grammar.
pub mod primary;
