use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Operators and the brace/arrow punctuation are recognized so that the
/// token stream faithfully covers the input, but no grammar production
/// consumes them; the parser only ever looks at `If`, `Integer` and
/// `Identifier`.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `if`
    #[token("if")]
    If,
    /// `=>`
    #[token("=>")]
    FatArrow,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Integer literal tokens, such as `42`. The token carries its lexeme
    /// unparsed so that the text (including any leading zeros) survives;
    /// the parser converts it to a value at the primary position.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// Identifier tokens; variable names such as `x` or `var_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Any other single non-whitespace character, emitted verbatim.
    #[regex(r"[^ \t\r\n]", |lex| lex.slice().to_string(), priority = 0)]
    Unknown(String),

    /// Whitespace between tokens; discarded, never produces a token.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::If => write!(f, "if"),
            Self::FatArrow => write!(f, "=>"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Integer(text) | Self::Identifier(text) | Self::Unknown(text) => {
                write!(f, "{text}")
            },
            Self::Ignored => Ok(()),
        }
    }
}

/// Tokenizes `source` into an ordered sequence of tokens paired with their
/// starting byte offsets.
///
/// Tokenization never fails: any character that matches no other rule is
/// emitted verbatim as a single [`Token::Unknown`]. Meaningless tokens are
/// only rejected later, by the parser.
///
/// Every token's `Display` output is its exact lexeme, so rejoining the
/// token texts reproduces the input with its whitespace removed.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The tokens in source order, each with its byte offset.
///
/// # Example
/// ```
/// use terneval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("if (x, 1, 0)");
/// assert_eq!(tokens[0], (Token::If, 0));
/// assert_eq!(tokens[2], (Token::Identifier("x".to_string()), 4));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => tokens.push((Token::Unknown(lexer.slice().to_string()), lexer.span().start)),
        }
    }

    tokens
}
