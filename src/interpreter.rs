/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST produced by the parser, resolves
/// variable references through the caller-supplied context, and produces
/// one integer result. It is the final stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, selecting exactly one ternary branch per node.
/// - Resolves variables against the read-only context.
/// - Reports runtime errors for unbound variable names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence
/// of tokens, each corresponding to a meaningful language element such as a
/// number, identifier, operator, or delimiter. This is the first stage of
/// the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Handles integer literals, identifiers, operators, and punctuation.
/// - Emits unmatched characters verbatim instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer via
/// recursive descent and constructs a single AST node representing the
/// leading expression.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Recognizes the ternary and primary productions, reporting errors with
///   location info at primary positions.
/// - Leaves tokens after the leading expression unconsumed.
pub mod parser;
