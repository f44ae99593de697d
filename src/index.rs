//! Atom indexing for sequents
//!
//! Both engines report proofs as links between atom occurrences, so before a
//! search every atomic leaf gets a unique index: the conclusion is walked
//! first, then each premise left to right, counting from 0.

use crate::ast::Category;

/// A sequent whose atoms all carry distinct indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedSequent {
    pub con: Category,
    pub pres: Vec<Category>,
    /// Total number of atoms indexed; indices run over `0..atoms`.
    pub atoms: u32,
}

/// Assign a fresh index to every atomic leaf of the sequent.
pub fn index_sequent(con: &Category, pres: &[Category]) -> IndexedSequent {
    let mut next = 0;
    let con = index_category(con, &mut next);
    let pres = pres.iter().map(|p| index_category(p, &mut next)).collect();
    IndexedSequent { con, pres, atoms: next }
}

fn index_category(cat: &Category, next: &mut u32) -> Category {
    match cat {
        Category::Atom(a) => {
            let mut a = a.clone();
            a.index = Some(*next);
            *next += 1;
            Category::Atom(a)
        }
        Category::Compound(conn, left, right) => {
            let left = index_category(left, next);
            let right = index_category(right, next);
            Category::compound(*conn, left, right)
        }
    }
}
