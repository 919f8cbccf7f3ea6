/// Core evaluation logic and context management.
///
/// Contains the variable context, the recursive tree walk over AST nodes,
/// and the shared `EvalResult` type.
pub mod core;
