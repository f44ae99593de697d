//! Parser for the category notation
//!
//! Parses token streams into category terms. The grammar is the canonical
//! parenthesized form: at most one connective per parenthesization level, so
//! `s/np/np` is rejected rather than associated either way.

use chumsky::prelude::*;

use crate::ast::{Atom, Category, Conn};
use crate::lexer::Token;

/// Create a parser for a single category term
pub fn parser() -> impl Parser<Token, Category, Error = Simple<Token>> + Clone {
    category().then_ignore(end())
}

fn category() -> impl Parser<Token, Category, Error = Simple<Token>> + Clone {
    recursive(|category| {
        let atom = select! {
            Token::Atom(name) => Category::Atom(Atom::from_name(&name)),
        };

        let operand = atom.or(category.delimited_by(just(Token::LParen), just(Token::RParen)));

        let conn = select! {
            Token::Slash => Conn::Over,
            Token::Backslash => Conn::Under,
            Token::Caret => Conn::Caret,
            Token::Bang => Conn::Bang,
        };

        operand
            .clone()
            .then(conn.then(operand).or_not())
            .map(|(left, rest)| match rest {
                Some((conn, right)) => Category::compound(conn, left, right),
                None => left,
            })
    })
}
