//! Proptest generators for category terms
//!
//! Provides `Strategy` values for building categories used in property tests.

use catseq::{Atom, Category, Conn};
use proptest::prelude::*;

/// Generate an atomic base symbol
pub fn arb_base() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["s", "np", "n", "pp"]).prop_map(String::from)
}

/// Generate an atom, with or without an index
pub fn arb_atom() -> impl Strategy<Value = Category> {
    (arb_base(), prop::option::of(0u32..100))
        .prop_map(|(base, index)| Category::Atom(Atom { base, index }))
}

/// Generate any of the four connectives
pub fn arb_conn() -> impl Strategy<Value = Conn> {
    prop::sample::select(vec![Conn::Over, Conn::Under, Conn::Caret, Conn::Bang])
}

/// Generate a slash connective only
pub fn arb_slash() -> impl Strategy<Value = Conn> {
    prop::sample::select(vec![Conn::Over, Conn::Under])
}

/// Generate a category over all four connectives
pub fn arb_category(depth: u32) -> impl Strategy<Value = Category> {
    arb_atom().prop_recursive(depth, 16, 2, |inner| {
        (arb_conn(), inner.clone(), inner)
            .prop_map(|(conn, left, right)| Category::compound(conn, left, right))
    })
}

/// Generate a slash-only category (the product-free Lambek fragment)
pub fn arb_slash_category(depth: u32) -> impl Strategy<Value = Category> {
    arb_atom().prop_recursive(depth, 16, 2, |inner| {
        (arb_slash(), inner.clone(), inner)
            .prop_map(|(conn, left, right)| Category::compound(conn, left, right))
    })
}
