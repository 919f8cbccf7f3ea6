/// Parsing errors.
///
/// Defines all error types that can occur while turning the token sequence
/// into an abstract syntax tree: unexpected tokens at a primary position and
/// running out of tokens while the grammar still required one.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. The only
/// runtime failure this language knows is referencing a variable that is not
/// bound in the context.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Unified error returned by [`crate::evaluate`].
///
/// Callers can pattern-match on the variant to distinguish parse failures
/// from evaluation failures instead of inspecting message strings.
pub enum Error {
    /// The source could not be parsed.
    Parse(ParseError),
    /// The expression could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
