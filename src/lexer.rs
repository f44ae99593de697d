//! Lexer for the category notation
//!
//! Tokenizes source into a stream for the parser.

use chumsky::prelude::*;
use std::ops::Range;

/// Token types for the category notation
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Atomic category name, e.g. `np` or `s_3`
    Atom(String),

    // Connectives
    Slash,     // /
    Backslash, // \
    Caret,     // ^
    Bang,      // !

    // Grouping
    LParen, // (
    RParen, // )
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Atom(s) => write!(f, "{}", s),
            Token::Slash => write!(f, "/"),
            Token::Backslash => write!(f, "\\"),
            Token::Caret => write!(f, "^"),
            Token::Bang => write!(f, "!"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Type alias for spans
pub type Span = Range<usize>;

/// Create a lexer for the category notation
pub fn lexer() -> impl Parser<char, Vec<(Token, Span)>, Error = Simple<char>> {
    // text::ident() accepts `_` and digits after the first character, which is
    // exactly the `base_3` indexed-atom shape
    let atom = text::ident().map(Token::Atom);

    let punctuation = choice((
        just('/').to(Token::Slash),
        just('\\').to(Token::Backslash),
        just('^').to(Token::Caret),
        just('!').to(Token::Bang),
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
    ));

    atom.or(punctuation)
        .map_with_span(|tok, span| (tok, span))
        .padded()
        .repeated()
        .then_ignore(end())
}
