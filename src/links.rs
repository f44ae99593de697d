//! Link-sets: the shared proof representation
//!
//! A proof, for both engines, is a set of unordered pairs of atom indices
//! witnessing which atomic leaves a derivation identified with which. The
//! `(i, j)` pair list printed by [`LinkSet`]'s `Display` is the contract
//! downstream consumers rely on.

use std::collections::BTreeSet;
use std::fmt;

/// An unordered pair of atom indices, stored normalized (`lo <= hi`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Link {
    pub lo: u32,
    pub hi: u32,
}

impl Link {
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Link { lo: a, hi: b }
        } else {
            Link { lo: b, hi: a }
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// An immutable-by-convention set of links; engines only ever union these.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkSet(BTreeSet<Link>);

impl LinkSet {
    pub fn new() -> Self {
        LinkSet(BTreeSet::new())
    }

    pub fn insert(&mut self, link: Link) {
        self.0.insert(link);
    }

    pub fn merge(&mut self, other: LinkSet) {
        self.0.extend(other.0);
    }

    /// The union of two link-sets as a fresh value.
    pub fn union(&self, other: &LinkSet) -> LinkSet {
        LinkSet(self.0.union(&other.0).copied().collect())
    }

    pub fn difference(&self, other: &LinkSet) -> LinkSet {
        LinkSet(self.0.difference(&other.0).copied().collect())
    }

    pub fn is_strict_subset(&self, other: &LinkSet) -> bool {
        self.0.len() < other.0.len() && self.0.is_subset(&other.0)
    }

    pub fn is_disjoint(&self, other: &LinkSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    pub fn contains(&self, link: &Link) -> bool {
        self.0.contains(link)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.0.iter()
    }
}

impl FromIterator<Link> for LinkSet {
    fn from_iter<T: IntoIterator<Item = Link>>(iter: T) -> Self {
        LinkSet(iter.into_iter().collect())
    }
}

impl fmt::Display for LinkSet {
    /// Sorted, comma-joined `(i, j)` pairs; sorting comes for free from the
    /// underlying ordered set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for link in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", link)?;
            first = false;
        }
        Ok(())
    }
}

/// All distinct proofs of one search, in canonical order.
///
/// Canonical ordering makes the determinism property of repeated searches a
/// plain equality of values.
pub type ProofSet = BTreeSet<LinkSet>;
