//! Derivation-tree reconstruction from a search trace
//!
//! The sequent search records only which sequents resolved with proofs, in
//! resolution order. Because every subderivation resolves before the
//! derivation that uses it, each composite proof can be reassembled from
//! earlier trace entries: either a single pass-through child with the same
//! links, or a pair of earlier proofs partitioning its links.

use std::collections::HashMap;

use crate::error::Error;
use crate::lambek::{Sequent, TraceEntry};
use crate::links::LinkSet;

/// A node of the derivation forest: one proof of one sequent.
pub type ProofKey = (Sequent, LinkSet);

/// The children of a reconstructed node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children {
    /// A connective-reduction step: same links, one premise-shifted child
    Lift(ProofKey),
    /// A case-split: the links partition between two subproofs
    Split(ProofKey, ProofKey),
}

/// The reconstructed derivation forest, keyed by proof.
#[derive(Clone, Debug, Default)]
pub struct ProofTree {
    nodes: HashMap<ProofKey, Children>,
}

impl ProofTree {
    pub fn children(&self, sequent: &Sequent, proof: &LinkSet) -> Option<&Children> {
        self.nodes.get(&(sequent.clone(), proof.clone()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Reconstruct the derivation forest of a trace.
///
/// Single-link proofs are axioms and need no node. A composite proof with
/// neither a pass-through child nor a partition among earlier entries means
/// the trace did not come from a completed search.
pub fn build_tree(trace: &[TraceEntry]) -> Result<ProofTree, Error> {
    let mut nodes = HashMap::new();

    for (i, entry) in trace.iter().enumerate() {
        for proof in &entry.proofs {
            if proof.len() <= 1 {
                continue;
            }
            let key = (entry.sequent.clone(), proof.clone());
            if nodes.contains_key(&key) {
                continue;
            }
            match find_children(trace, i, proof) {
                Some(children) => {
                    nodes.insert(key, children);
                }
                None => {
                    return Err(Error::Reconstruction {
                        sequent: entry.sequent.to_string(),
                        proof: proof.to_string(),
                    });
                }
            }
        }
    }

    Ok(ProofTree { nodes })
}

fn find_children(trace: &[TraceEntry], i: usize, proof: &LinkSet) -> Option<Children> {
    // Pass-through: an earlier entry carries the same links. The child is
    // not necessarily adjacent: each sequent is recorded once, so a parent
    // reusing a memoized child finds it farther back. Nearest match wins.
    for entry in trace[..i].iter().rev() {
        for prev_proof in &entry.proofs {
            if prev_proof == proof {
                return Some(Children::Lift((entry.sequent.clone(), prev_proof.clone())));
            }
        }
    }

    // Split: the most recent strict subproof whose complement also occurs
    // earlier; first match wins
    for j in (0..i).rev() {
        for sub in &trace[j].proofs {
            if !sub.is_strict_subset(proof) {
                continue;
            }
            let rest = proof.difference(sub);
            for k in (0..j).rev() {
                for other in &trace[k].proofs {
                    if *other == rest {
                        return Some(Children::Split(
                            (trace[j].sequent.clone(), sub.clone()),
                            (trace[k].sequent.clone(), other.clone()),
                        ));
                    }
                }
            }
        }
    }

    None
}
