/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers the three constructs the grammar recognizes: integer
/// literals, variable references, and `if(condition, truthy, falsy)`
/// ternaries. Each variant is immutable once constructed, and every ternary
/// exclusively owns its three children, so a parse always produces a tree
/// with no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value:    i64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Byte offset of the reference in the source.
        position: usize,
    },
    /// Conditional ("if-then-else") expression.
    Ternary {
        /// The condition expression; non-zero selects the truthy branch.
        condition: Box<Self>,
        /// Expression evaluated if the condition is non-zero.
        truthy:    Box<Self>,
        /// Expression evaluated if the condition is zero.
        falsy:     Box<Self>,
        /// Byte offset of the `if` keyword in the source.
        position:  usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    /// ## Example
    /// ```
    /// use terneval::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Variable { position, .. }
            | Self::Ternary { position, .. } => *position,
        }
    }
}
