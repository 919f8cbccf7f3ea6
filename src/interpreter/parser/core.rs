use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::primary::parse_primary},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// A peeked `if` keyword dispatches to ternary parsing; anything else is
/// parsed as a primary expression.
///
/// Grammar: `expression := ternary | primary`
///
/// The grammar recognizes exactly one leading term. Operator tokens are
/// never consumed by any production, so tokens after the first term remain
/// in the iterator and are dropped by the caller without error.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Propagates any `ParseError` from ternary or primary parsing.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::If, position)) => {
            let position = *position;
            tokens.next();
            parse_ternary(tokens, position)
        },
        _ => parse_primary(tokens),
    }
}

/// Parses a ternary expression after its `if` keyword has been consumed.
///
/// Grammar: `ternary := "if" "(" expression "," expression "," expression ")"`
///
/// The `(`, `,`, `,` and `)` positions are advanced past unconditionally;
/// the token value at a punctuation position is never inspected. Malformed
/// punctuation therefore does not fail here: the cursor moves on, and the
/// failure (if any) surfaces at a later primary position, either as an
/// unexpected token or as an end-of-input error.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `position`: Byte offset of the `if` token.
///
/// # Returns
/// An [`Expr::Ternary`] node owning its three child expressions.
///
/// # Errors
/// Propagates any `ParseError` from parsing the three child expressions.
pub(crate) fn parse_ternary<'a, I>(tokens: &mut Peekable<I>, position: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    skip_punctuation(tokens); // `(`
    let condition = parse_expression(tokens)?;
    skip_punctuation(tokens); // `,`
    let truthy = parse_expression(tokens)?;
    skip_punctuation(tokens); // `,`
    let falsy = parse_expression(tokens)?;
    skip_punctuation(tokens); // `)`

    Ok(Expr::Ternary { condition: Box::new(condition),
                       truthy: Box::new(truthy),
                       falsy: Box::new(falsy),
                       position })
}

/// Advances the cursor past a single punctuation position.
///
/// The token value is deliberately not inspected, and advancing past
/// exhausted input is silent. Both mirror the unconditional cursor
/// increments of the grammar.
fn skip_punctuation<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
}
