#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing a primary expression.
    UnexpectedToken {
        /// The lexeme text of the token encountered.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Reached the end of input while the grammar still required a token.
    UnexpectedEndOfInput {
        /// The construct that was expected next.
        expected: &'static str,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Unexpected end of input: expected {expected}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
