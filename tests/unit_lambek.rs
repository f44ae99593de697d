//! Unit tests for the Lambek sequent search

use std::collections::HashSet;

use catseq::{index_sequent, parse, Budget, Category, Error, Link, LinkSet, ProofSet, Prover};

fn sequent(con: &str, pres: &[&str]) -> (Category, Vec<Category>, u32) {
    let con = parse(con).unwrap();
    let pres: Vec<_> = pres.iter().map(|p| parse(p).unwrap()).collect();
    let indexed = index_sequent(&con, &pres);
    (indexed.con, indexed.pres, indexed.atoms)
}

fn links(pairs: &[(u32, u32)]) -> LinkSet {
    pairs.iter().map(|&(a, b)| Link::new(a, b)).collect()
}

// ============================================================================
// Proof search
// ============================================================================

#[test]
fn test_derivable_sequent_links_every_atom_once() {
    let (con, pres, atoms) = sequent("s", &[r"s/(np\s)", r"(np\s)/np", r"(s/np)\s"]);
    let proofs = Prover::new().prove(con, pres).unwrap();
    assert!(!proofs.is_empty());
    assert_eq!(atoms, 10);
    for proof in &proofs {
        assert_eq!(proof.len(), 5);
        let endpoints: HashSet<u32> = proof.iter().flat_map(|l| [l.lo, l.hi]).collect();
        assert_eq!(endpoints, (0..atoms).collect::<HashSet<u32>>());
    }
}

#[test]
fn test_axiom_under_single_premise() {
    let (con, pres, _) = sequent(r"np\s", &[r"np\s"]);
    let proofs = Prover::new().prove(con, pres).unwrap();
    assert_eq!(proofs, ProofSet::from([links(&[(0, 2), (1, 3)])]));
}

#[test]
fn test_empty_premises_have_no_proof() {
    let (con, pres, _) = sequent("s", &[]);
    assert!(Prover::new().prove(con, pres).unwrap().is_empty());
}

#[test]
fn test_mismatched_atom_has_no_proof() {
    let (con, pres, _) = sequent("s", &["np"]);
    assert!(Prover::new().prove(con, pres).unwrap().is_empty());
}

#[test]
fn test_conclusion_reduction_is_lossless() {
    let (con, pres, _) = sequent("s/np", &["s/np"]);
    let full = Prover::new().prove(con.clone(), pres.clone()).unwrap();

    let (_, left, right) = con.split().unwrap();
    let mut reduced_pres = pres;
    reduced_pres.push(right.clone());
    let reduced = Prover::new().prove(left.clone(), reduced_pres).unwrap();

    assert!(!full.is_empty());
    assert_eq!(full, reduced);
}

#[test]
fn test_search_is_deterministic() {
    let (con, pres, _) = sequent("s", &[r"s/(np\s)", r"(np\s)/np", r"(s/np)\s"]);
    let mut a = Prover::new();
    let mut b = Prover::new();
    assert_eq!(
        a.prove(con.clone(), pres.clone()).unwrap(),
        b.prove(con, pres).unwrap()
    );
    assert_eq!(a.trace(), b.trace());
}

// ============================================================================
// Budget and unsupported inputs
// ============================================================================

#[test]
fn test_budget_exhaustion_is_an_error() {
    let (con, pres, _) = sequent(r"np\s", &[r"np\s"]);
    let result = Prover::with_budget(Budget { steps: 1 }).prove(con, pres);
    assert_eq!(result, Err(Error::BudgetExhausted(1)));
}

#[test]
fn test_tower_conclusion_is_rejected() {
    let (con, pres, _) = sequent("(s^np)!s", &["s"]);
    assert!(matches!(
        Prover::new().prove(con, pres),
        Err(Error::UnsupportedConnective { .. })
    ));
}

#[test]
fn test_tower_premise_is_rejected() {
    let (con, pres, _) = sequent("s", &["(s^np)!s"]);
    assert!(matches!(
        Prover::new().prove(con, pres),
        Err(Error::UnsupportedConnective { .. })
    ));
}

// ============================================================================
// Trace discipline
// ============================================================================

#[test]
fn test_trace_records_each_proved_sequent_once() {
    let (con, pres, _) = sequent(r"np\s", &[r"np\s"]);
    let mut prover = Prover::new();
    let proofs = prover.prove(con.clone(), pres.clone()).unwrap();

    let trace = prover.trace();
    assert_eq!(trace.len(), 4);
    let sequents: HashSet<_> = trace.iter().map(|e| e.sequent.clone()).collect();
    assert_eq!(sequents.len(), trace.len());
    for entry in trace {
        assert!(!entry.proofs.is_empty());
    }

    // The searched sequent resolves last, with the full proof set
    let last = trace.last().unwrap();
    assert_eq!(last.sequent.con, con);
    assert_eq!(last.sequent.pres, pres);
    assert_eq!(last.proofs, proofs);
}

#[test]
fn test_prove_resets_state_between_searches() {
    let mut prover = Prover::new();

    let (con, pres, _) = sequent(r"np\s", &[r"np\s"]);
    assert!(!prover.prove(con, pres).unwrap().is_empty());

    let (con, pres, _) = sequent("s", &[]);
    assert!(prover.prove(con, pres).unwrap().is_empty());
    assert!(prover.trace().is_empty());
}
