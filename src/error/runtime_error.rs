#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that is not bound in the context.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the reference in the source.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, position } => {
                write!(f, "Error at offset {position}: Unknown variable '{name}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
