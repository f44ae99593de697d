//! catseq: proof search for categorial sequents
//!
//! Two engines over a shared category-term algebra: a CYK chart parser for a
//! continuized CCG with tower (delayed-result) categories, and a memoized
//! sequent-calculus search for the product-free Lambek calculus. Both report
//! proofs as sets of links between indexed atom occurrences.

pub mod ast;
pub mod chart;
pub mod error;
pub mod index;
pub mod lambek;
pub mod lexer;
pub mod links;
pub mod parser;
pub mod pretty;
pub mod tower;
pub mod tree;

pub use ast::{atomic_iden, cat_iden, Atom, Category, Conn};
pub use chart::{ChartConfig, ChartParser, Item};
pub use error::Error;
pub use index::{index_sequent, IndexedSequent};
pub use lambek::{Budget, Prover, Sequent, TraceEntry};
pub use links::{Link, LinkSet, ProofSet};
pub use tower::{collapse, tower_split, TowerParts};
pub use tree::{build_tree, Children, ProofTree};

/// Parse a category from its canonical notation
pub fn parse(input: &str) -> Result<Category, String> {
    use chumsky::prelude::*;

    let tokens = lexer::lexer()
        .parse(input)
        .map_err(|errs| error::format_lexer_errors(input, errs))?;

    let len = input.len();
    parser::parser()
        .parse(chumsky::Stream::from_iter(len..len + 1, tokens.into_iter()))
        .map_err(|errs| error::format_parser_errors(input, errs))
}
