//! Tower categories and lowering
//!
//! A tower `((b ^ c) ! a)` is a category that will ultimately deliver `b`,
//! currently computes toward `c`, and owes a continuation of type `a`.
//! Lowering (collapse) discharges towers whose computation has reached the
//! delivered type, recursively from the innermost core outward.

use crate::ast::{cat_iden, Category, Conn};
use crate::error::Error;
use crate::links::LinkSet;

/// The three components of a tower category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TowerParts<'a> {
    /// Current computation type: `c` in `((b ^ c) ! a)`
    pub core: &'a Category,
    /// Deferred obligation: `a` in `((b ^ c) ! a)`
    pub deferred: &'a Category,
    /// Type delivered once the core is done: `b` in `((b ^ c) ! a)`
    pub delivered: &'a Category,
}

/// Split a category at its tower connectives, if it has any.
///
/// Atoms and slash compounds are not towers (`Ok(None)`). A `^` or `!` at
/// the top whose left branch is not itself a compound cannot be read as a
/// tower and is rejected outright.
pub fn tower_split(cat: &Category) -> Result<Option<TowerParts<'_>>, Error> {
    match cat.split() {
        None | Some((Conn::Over | Conn::Under, _, _)) => Ok(None),
        Some((Conn::Caret | Conn::Bang, left, deferred)) => match left.split() {
            Some((_, delivered, core)) => Ok(Some(TowerParts {
                core,
                deferred,
                delivered,
            })),
            None => Err(Error::MalformedTower(cat.to_string())),
        },
    }
}

/// Recursively lower a category.
///
/// Non-towers come back unchanged with an empty link delta. A tower first
/// lowers its core; if the lowered core is identical (up to indices) to the
/// delivered type, the tower discharges to its deferred type and the witness
/// pairs join the delta. Otherwise the tower is still pending and is rebuilt
/// around the lowered core.
pub fn collapse(cat: &Category) -> Result<(Category, LinkSet), Error> {
    let Some(parts) = tower_split(cat)? else {
        return Ok((cat.clone(), LinkSet::new()));
    };

    let (lowered, mut delta) = collapse(parts.core)?;
    match cat_iden(&lowered, parts.delivered) {
        Some(pairs) => {
            delta.merge(pairs);
            Ok((parts.deferred.clone(), delta))
        }
        None => {
            let inner = parts.delivered.clone().add_hypo(Conn::Caret, lowered);
            let rebuilt = parts.deferred.clone().add_hypo(Conn::Bang, inner);
            Ok((rebuilt, delta))
        }
    }
}
