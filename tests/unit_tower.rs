//! Unit tests for tower splitting and lowering

use catseq::tower::{collapse, tower_split};
use catseq::{parse, Category, Error, Link, LinkSet};

fn cat(s: &str) -> Category {
    parse(s).unwrap()
}

fn links(pairs: &[(u32, u32)]) -> LinkSet {
    pairs.iter().map(|&(a, b)| Link::new(a, b)).collect()
}

// ============================================================================
// tower_split
// ============================================================================

#[test]
fn test_split_atom_is_not_a_tower() {
    assert_eq!(tower_split(&cat("s")).unwrap(), None);
}

#[test]
fn test_split_slash_compound_is_not_a_tower() {
    assert_eq!(tower_split(&cat(r"(np\s)/np")).unwrap(), None);
}

#[test]
fn test_split_tower_parts() {
    let tower = cat("(s^np)!s");
    let parts = tower_split(&tower).unwrap().unwrap();
    assert_eq!(parts.core, &cat("np"));
    assert_eq!(parts.deferred, &cat("s"));
    assert_eq!(parts.delivered, &cat("s"));
}

#[test]
fn test_split_rejects_malformed_tower() {
    assert_eq!(
        tower_split(&cat("s!s")),
        Err(Error::MalformedTower("s!s".to_string()))
    );
    assert!(tower_split(&cat("s^np")).is_err());
}

// ============================================================================
// collapse
// ============================================================================

#[test]
fn test_collapse_leaves_non_towers_alone() {
    for input in ["s", r"np\s", r"(s/np)\s"] {
        let c = cat(input);
        let (lowered, delta) = collapse(&c).unwrap();
        assert_eq!(lowered, c);
        assert!(delta.is_empty());
    }
}

#[test]
fn test_collapse_discharges_when_core_reaches_delivered() {
    let (lowered, delta) = collapse(&cat("(s_1^s_2)!np_3")).unwrap();
    assert_eq!(lowered, cat("np_3"));
    assert_eq!(delta, links(&[(1, 2)]));
}

#[test]
fn test_collapse_keeps_pending_towers() {
    // The core does not reach the delivered type, so the tower survives
    let tower = cat("(s_1^np_2)!s_3");
    let (lowered, delta) = collapse(&tower).unwrap();
    assert_eq!(lowered, tower);
    assert!(delta.is_empty());
}

#[test]
fn test_collapse_recurses_through_nested_towers() {
    let (lowered, delta) = collapse(&cat("(s_1^((s_3^s_4)!s_5))!np_2")).unwrap();
    assert_eq!(lowered, cat("np_2"));
    assert_eq!(delta, links(&[(3, 4), (1, 5)]));
}

#[test]
fn test_collapse_propagates_malformed_tower() {
    assert!(collapse(&cat("s!s")).is_err());
}
