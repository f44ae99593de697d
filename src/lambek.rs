//! Product-free Lambek sequent search
//!
//! Backward-chaining proof search that reports each proof as the set of
//! axiom links it bottoms out in. Non-atomic conclusions reduce losslessly
//! by their principal connective; atomic conclusions case-split every
//! compound premise over every cut of the surrounding premises. Resolved
//! sequents are memoized per search, and first resolutions with proofs are
//! recorded in a trace for derivation-tree reconstruction.

use std::collections::HashMap;

use crate::ast::{atomic_iden, cat_iden, Category, Conn};
use crate::error::Error;
use crate::links::ProofSet;

/// A sequent: premises on the left, conclusion on the right.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequent {
    pub con: Category,
    pub pres: Vec<Category>,
}

impl Sequent {
    pub fn new(con: Category, pres: Vec<Category>) -> Self {
        Sequent { con, pres }
    }
}

impl std::fmt::Display for Sequent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for p in &self.pres {
            write!(f, "{} ", p)?;
        }
        write!(f, "-> {}", self.con)
    }
}

/// One trace record: a sequent and its full proof set, appended when the
/// sequent is first resolved with at least one proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub sequent: Sequent,
    pub proofs: ProofSet,
}

/// Step budget for one search. A step is one sequent resolved for the first
/// time; memo hits are free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Budget {
    pub steps: usize,
}

impl Budget {
    pub fn unlimited() -> Self {
        Budget { steps: usize::MAX }
    }

    pub fn quick() -> Self {
        Budget { steps: 10_000 }
    }

    pub fn medium() -> Self {
        Budget { steps: 100_000 }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Budget::unlimited()
    }
}

/// Proof search state. One `Prover` per search chain; `prove` resets all
/// per-search state at entry, so reuse across sequents is safe.
pub struct Prover {
    memo: HashMap<Sequent, ProofSet>,
    trace: Vec<TraceEntry>,
    budget: Budget,
    steps: usize,
}

impl Default for Prover {
    fn default() -> Self {
        Prover::new()
    }
}

impl Prover {
    pub fn new() -> Self {
        Prover::with_budget(Budget::default())
    }

    pub fn with_budget(budget: Budget) -> Self {
        Prover {
            memo: HashMap::new(),
            trace: Vec::new(),
            budget,
            steps: 0,
        }
    }

    /// Search for all proofs of `pres -> con`.
    pub fn prove(&mut self, con: Category, pres: Vec<Category>) -> Result<ProofSet, Error> {
        self.memo.clear();
        self.trace.clear();
        self.steps = 0;
        self.find_proof(Sequent::new(con, pres))
    }

    /// Trace of the last `prove` call, in first-resolution order.
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    fn find_proof(&mut self, sequent: Sequent) -> Result<ProofSet, Error> {
        if let Some(cached) = self.memo.get(&sequent) {
            return Ok(cached.clone());
        }

        self.steps += 1;
        if self.steps > self.budget.steps {
            return Err(Error::BudgetExhausted(self.budget.steps));
        }

        let proofs = self.resolve(&sequent)?;
        self.memo.insert(sequent.clone(), proofs.clone());
        if !proofs.is_empty() {
            self.trace.push(TraceEntry {
                sequent,
                proofs: proofs.clone(),
            });
        }
        Ok(proofs)
    }

    fn resolve(&mut self, sequent: &Sequent) -> Result<ProofSet, Error> {
        let Sequent { con, pres } = sequent;

        // Non-atomic conclusion: move its argument to the premise side
        if let Some((conn, left, right)) = con.split() {
            return match conn {
                Conn::Over => {
                    let mut pres = pres.clone();
                    pres.push(right.clone());
                    self.find_proof(Sequent::new(left.clone(), pres))
                }
                Conn::Under => {
                    let mut new_pres = vec![left.clone()];
                    new_pres.extend(pres.iter().cloned());
                    self.find_proof(Sequent::new(right.clone(), new_pres))
                }
                Conn::Caret | Conn::Bang => Err(Error::UnsupportedConnective {
                    conn: conn.to_string(),
                    cat: con.to_string(),
                }),
            };
        }

        // Atomic conclusion: case-split every compound premise
        let mut alts = ProofSet::new();
        let mut hit_compound = false;
        for (cut, premise) in pres.iter().enumerate() {
            if let Some((conn, left, right)) = premise.split() {
                hit_compound = true;
                match conn {
                    Conn::Over => {
                        alts.extend(self.split_over(con, pres, cut, left, right)?);
                    }
                    Conn::Under => {
                        alts.extend(self.split_under(con, pres, cut, left, right)?);
                    }
                    Conn::Caret | Conn::Bang => {
                        return Err(Error::UnsupportedConnective {
                            conn: conn.to_string(),
                            cat: premise.to_string(),
                        });
                    }
                }
            }
        }
        if hit_compound {
            return Ok(alts);
        }

        // Axiom: a single premise identical to the conclusion up to index
        if pres.len() == 1 && atomic_iden(&pres[0], con) {
            // cat_iden on two identical atoms always succeeds
            let links = cat_iden(&pres[0], con).unwrap_or_default();
            Ok(ProofSet::from([links]))
        } else {
            Ok(ProofSet::new())
        }
    }

    /// Case-split for `left / right` at premise position `cut`: some span
    /// `T` just after the cut proves `right`, and the conclusion follows
    /// from the rest with `left` in the premise's place.
    fn split_over(
        &mut self,
        con: &Category,
        pres: &[Category],
        cut: usize,
        left: &Category,
        right: &Category,
    ) -> Result<ProofSet, Error> {
        let mut alts = ProofSet::new();
        for j in cut + 1..=pres.len() {
            let t = &pres[cut + 1..j];
            let right_proofs = self.find_proof(Sequent::new(right.clone(), t.to_vec()))?;
            if right_proofs.is_empty() {
                continue;
            }
            let mut rest: Vec<Category> = pres[..cut].to_vec();
            rest.push(left.clone());
            rest.extend(pres[j..].iter().cloned());
            let left_proofs = self.find_proof(Sequent::new(con.clone(), rest))?;
            for r in &right_proofs {
                for l in &left_proofs {
                    alts.insert(r.union(l));
                }
            }
        }
        Ok(alts)
    }

    /// Case-split for `left \ right` at premise position `cut`: some span
    /// `T` just before the cut proves `left`, and the conclusion follows
    /// from the rest with `right` in the premise's place.
    fn split_under(
        &mut self,
        con: &Category,
        pres: &[Category],
        cut: usize,
        left: &Category,
        right: &Category,
    ) -> Result<ProofSet, Error> {
        let mut alts = ProofSet::new();
        for j in 0..=cut {
            let t = &pres[j..cut];
            let left_proofs = self.find_proof(Sequent::new(left.clone(), t.to_vec()))?;
            if left_proofs.is_empty() {
                continue;
            }
            let mut rest: Vec<Category> = pres[..j].to_vec();
            rest.push(right.clone());
            rest.extend(pres[cut + 1..].iter().cloned());
            let right_proofs = self.find_proof(Sequent::new(con.clone(), rest))?;
            for l in &left_proofs {
                for r in &right_proofs {
                    alts.insert(l.union(r));
                }
            }
        }
        Ok(alts)
    }
}
