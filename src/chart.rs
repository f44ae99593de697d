//! Continuized-CCG chart parser
//!
//! Generalized application: two adjacent items combine by lining up the
//! argument layers of their categories, trying offsets in increasing total
//! depth and keeping only the shallowest productive level. Tower categories
//! take part through a recursive reduction of their core, with the lowering
//! step either applied eagerly per combination or once over the final span.

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::ast::{cat_iden, Category, Conn, Layer};
use crate::error::Error;
use crate::links::{LinkSet, ProofSet};
use crate::tower::{collapse, tower_split};

/// A chart entry: a category together with the links its derivation
/// committed to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub cat: Category,
    pub links: LinkSet,
}

impl Item {
    pub fn new(cat: Category) -> Self {
        Item {
            cat,
            links: LinkSet::new(),
        }
    }

    pub fn with_links(cat: Category, links: LinkSet) -> Self {
        Item { cat, links }
    }
}

/// Chart parser configuration.
#[derive(Clone, Copy, Debug)]
pub struct ChartConfig {
    /// Lower towers as soon as a combination produces them. When off, the
    /// full-span items are lowered once after the chart is filled.
    pub early_collapse: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            early_collapse: true,
        }
    }
}

/// Wrap the hypotheses consumed up to cell `(i, j)` back around `cat`,
/// innermost first, restoring a category for layer (0, 0).
fn propagate(prim: &[Layer], sec: &[Layer], i: usize, j: usize, mut cat: Category) -> Category {
    for layer in sec[..=j].iter().rev() {
        if let Some((conn, hypo)) = &layer.hypo {
            cat = cat.add_hypo(*conn, hypo.clone());
        }
    }
    for layer in prim[..=i].iter().rev() {
        if let Some((conn, hypo)) = &layer.hypo {
            cat = cat.add_hypo(*conn, hypo.clone());
        }
    }
    cat
}

/// Try to combine at cell `(i, j)`: `prim` applying to `sec` in the `slash`
/// direction.
fn cell_apply(
    prim: &[Layer],
    sec: &[Layer],
    i: usize,
    j: usize,
    slash: Conn,
    config: ChartConfig,
) -> Result<IndexSet<Item>, Error> {
    let mut res = IndexSet::new();

    // Direct application: the next argument slot of prim matches sec at
    // layer j
    if let Some(layer) = prim.get(i + 1) {
        if let Some((conn, hypo)) = &layer.hypo {
            if *conn == slash {
                if let Some(pairs) = cat_iden(hypo, &sec[j].cat) {
                    let cat = propagate(prim, sec, i, j, layer.cat.clone());
                    res.insert(Item::with_links(cat, pairs));
                    return Ok(res);
                }
            }
        }
    }

    // Tower argument: sec's innermost layer is a tower; reduce against its
    // core and carry the tower wrapper along
    if j + 1 == sec.len() {
        if let Some(parts) = tower_split(&sec[j].cat)? {
            let outer = Item::new(prim[i].cat.clone());
            let core = Item::new(parts.core.clone());
            let reduced = match slash {
                Conn::Over => reduce(&outer, &core, config)?,
                Conn::Under => reduce(&core, &outer, config)?,
                Conn::Caret | Conn::Bang => unreachable!("slash direction"),
            };
            for mut r in reduced {
                r.cat = propagate(prim, sec, i, j, r.cat);
                let discharge = if config.early_collapse {
                    cat_iden(parts.delivered, &r.cat)
                } else {
                    None
                };
                match discharge {
                    Some(pairs) => {
                        r.links.merge(pairs);
                        r.cat = parts.deferred.clone();
                    }
                    None => {
                        let inner = parts.delivered.clone().add_hypo(Conn::Caret, r.cat);
                        r.cat = parts.deferred.clone().add_hypo(Conn::Bang, inner);
                    }
                }
                res.insert(r);
            }
        }
    }

    Ok(res)
}

/// Combine two adjacent items by generalized application.
///
/// Offsets into the two layer lists are scanned in increasing total depth,
/// boundary cells only; the first level that produces anything wins. The
/// operands' own links are folded into every result.
pub fn reduce(x: &Item, y: &Item, config: ChartConfig) -> Result<IndexSet<Item>, Error> {
    let xlist = x.cat.unslash();
    let ylist = y.cat.unslash();

    let mut res: IndexSet<Item> = IndexSet::new();
    for s in 0..xlist.len() + ylist.len() - 1 {
        if !res.is_empty() {
            break;
        }
        for i in (0..=s).rev() {
            let j = s - i;
            if i >= xlist.len() || j >= ylist.len() {
                continue;
            }
            if i * j != 0 {
                continue;
            }
            res.extend(cell_apply(&xlist, &ylist, i, j, Conn::Over, config)?);
            res.extend(cell_apply(&ylist, &xlist, j, i, Conn::Under, config)?);
        }
    }

    let carried = x.links.union(&y.links);
    Ok(res
        .into_iter()
        .map(|mut r| {
            r.links.merge(carried.clone());
            r
        })
        .collect())
}

/// CYK chart over a premise sequence, aiming at a conclusion category.
pub struct ChartParser {
    con: Category,
    pres: Vec<Category>,
    config: ChartConfig,
    chart: HashMap<(usize, usize), IndexSet<Item>>,
}

impl ChartParser {
    pub fn new(con: Category, pres: Vec<Category>) -> Self {
        ChartParser::with_config(con, pres, ChartConfig::default())
    }

    pub fn with_config(con: Category, pres: Vec<Category>, config: ChartConfig) -> Self {
        ChartParser {
            con,
            pres,
            config,
            chart: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.pres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pres.is_empty()
    }

    /// Fill the chart bottom-up. Cells are keyed by inclusive premise
    /// positions; the answer lives at `(0, len - 1)`.
    pub fn parse(&mut self) -> Result<(), Error> {
        self.chart.clear();
        let n = self.len();
        for i in 0..n {
            let mut cell = IndexSet::new();
            cell.insert(Item::new(self.pres[i].clone()));
            self.chart.insert((i, i), cell);
        }

        for step in 1..n {
            for i in 0..n - step {
                let k = i + step;
                let mut cell = IndexSet::new();
                for j in i + 1..=k {
                    let lefts = &self.chart[&(i, j - 1)];
                    let rights = &self.chart[&(j, k)];
                    for x in lefts {
                        for y in rights {
                            cell.extend(reduce(x, y, self.config)?);
                        }
                    }
                }
                self.chart.insert((i, k), cell);
            }
        }

        if !self.config.early_collapse && n > 0 {
            let top = self.chart.remove(&(0, n - 1)).unwrap_or_default();
            let mut lowered = IndexSet::new();
            for mut item in top {
                let (cat, delta) = collapse(&item.cat)?;
                item.cat = cat;
                item.links.merge(delta);
                lowered.insert(item);
            }
            self.chart.insert((0, n - 1), lowered);
        }
        Ok(())
    }

    /// Items covering premises `i..=k`, if the chart has been filled.
    pub fn span(&self, i: usize, k: usize) -> Option<&IndexSet<Item>> {
        self.chart.get(&(i, k))
    }

    /// All full-span items, conclusion-matched or not.
    pub fn proofs(&self) -> impl Iterator<Item = &Item> {
        let top = self
            .len()
            .checked_sub(1)
            .and_then(|k| self.chart.get(&(0, k)));
        top.into_iter().flatten()
    }

    /// Proofs whose category matches the conclusion, with the matching
    /// witness pairs folded in.
    pub fn proofs_for_conclusion(&self) -> ProofSet {
        self.proofs()
            .filter_map(|item| {
                cat_iden(&item.cat, &self.con).map(|pairs| item.links.union(&pairs))
            })
            .collect()
    }

    pub fn proof_count(&self) -> usize {
        self.proofs_for_conclusion().len()
    }
}
