use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a primary (atomic) expression.
///
/// Exactly one token is consumed:
/// - an integer literal produces an [`Expr::Number`],
/// - an identifier produces an [`Expr::Variable`].
///
/// Grammar: `primary := INTEGER | IDENTIFIER`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the primary token.
///
/// # Returns
/// The parsed leaf expression.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the token is neither an integer nor an identifier
///   (`UnexpectedToken` carrying the lexeme text and its offset),
/// - an integer literal does not fit in an `i64` (also `UnexpectedToken`),
/// - the input ends before a token is available (`UnexpectedEndOfInput`).
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(text), position)) => match text.parse() {
            Ok(value) => Ok(Expr::Number { value,
                                           position: *position, }),
            Err(_) => Err(ParseError::UnexpectedToken { token:    text.clone(),
                                                        position: *position, }),
        },
        Some((Token::Identifier(name), position)) => Ok(Expr::Variable { name:     name.clone(),
                                                                         position: *position, }),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: "an integer or identifier" }),
    }
}
