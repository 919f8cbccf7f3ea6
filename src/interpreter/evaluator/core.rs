use std::collections::HashMap;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variable bindings used during evaluation.
///
/// The context is constructed by the caller before the pipeline runs and is
/// read-only while an expression is evaluated; no evaluation path mutates
/// it. A context can therefore be reused to evaluate any number of
/// expressions.
pub struct Context {
    /// A mapping from variable names to their integer values.
    variables: HashMap<String, i64>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no variable bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: i64) {
        self.variables.insert(name.into(), value);
    }

    /// Looks up a variable binding without treating absence as an error.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Evaluates an expression and returns the resulting integer.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator walks the tree recursively, dispatching on the expression
    /// variant: literals yield their value, variables are resolved through
    /// the context, and ternaries evaluate their condition before
    /// evaluating exactly one branch.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed integer value.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if a variable reference is not bound in
    /// the context.
    ///
    /// # Example
    /// ```
    /// use terneval::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    /// let expr = Expr::Number { value:    7,
    ///                           position: 0, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), 7);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, position } => self.eval_variable(name, *position),
            Expr::Ternary { condition,
                            truthy,
                            falsy,
                            .. } => self.eval_ternary(condition, truthy, falsy),
        }
    }

    /// Looks up a variable by name.
    ///
    /// If the variable is not bound in the context, an `UnknownVariable`
    /// error carrying the name is returned.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `position`: Byte offset for error reporting.
    ///
    /// # Returns
    /// The bound value, if present.
    fn eval_variable(&self, name: &str, position: usize) -> EvalResult<i64> {
        self.get_variable(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_owned(),
                                                           position })
    }

    /// Evaluates a ternary expression.
    ///
    /// The condition is evaluated first; a non-zero result selects the
    /// truthy branch and zero selects the falsy branch. The branch not
    /// taken is never evaluated.
    ///
    /// # Parameters
    /// - `condition`: The condition expression.
    /// - `truthy`: Branch evaluated when the condition is non-zero.
    /// - `falsy`: Branch evaluated when the condition is zero.
    ///
    /// # Returns
    /// The value of the selected branch.
    fn eval_ternary(&self, condition: &Expr, truthy: &Expr, falsy: &Expr) -> EvalResult<i64> {
        let cond = self.eval(condition)?;

        if cond == 0 {
            self.eval(falsy)
        } else {
            self.eval(truthy)
        }
    }
}

impl From<HashMap<String, i64>> for Context {
    fn from(variables: HashMap<String, i64>) -> Self {
        Self { variables }
    }
}

impl FromIterator<(String, i64)> for Context {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self { variables: iter.into_iter().collect() }
    }
}
