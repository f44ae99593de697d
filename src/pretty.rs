//! Plain-text renderers for proofs and derivation trees
//!
//! Proof listings follow the `(i, j), (k, l)` link contract; derivation
//! trees print each node below its children with dotted indentation.

use crate::chart::Item;
use crate::lambek::Sequent;
use crate::links::{LinkSet, ProofSet};
use crate::tree::{Children, ProofTree};

/// One line per proof, each the sorted comma-joined link list.
pub fn render_proofs(proofs: &ProofSet) -> String {
    let mut out = String::new();
    for proof in proofs {
        out.push_str(&proof.to_string());
        out.push('\n');
    }
    out
}

/// One line per chart item: category, then its links.
pub fn render_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&item.cat.to_string());
        if !item.links.is_empty() {
            out.push_str("  [");
            out.push_str(&item.links.to_string());
            out.push(']');
        }
        out.push('\n');
    }
    out
}

/// A derivation-tree printer with indentation tracking
struct TreePrinter<'a> {
    tree: &'a ProofTree,
    output: String,
    indent: String,
}

impl<'a> TreePrinter<'a> {
    fn new(tree: &'a ProofTree) -> Self {
        TreePrinter {
            tree,
            output: String::new(),
            indent: ".".repeat(4),
        }
    }

    fn node(&mut self, sequent: &Sequent, links: &LinkSet, depth: usize) {
        if let Some(children) = self.tree.children(sequent, links) {
            match children {
                Children::Lift((seq, sub)) => {
                    self.node(seq, sub, depth + 1);
                }
                Children::Split((lseq, lsub), (rseq, rsub)) => {
                    self.node(lseq, lsub, depth + 1);
                    self.node(rseq, rsub, depth + 1);
                }
            }
        }
        let prefix = self.indent.repeat(depth);
        self.output.push_str(&prefix);
        self.output.push_str(&sequent.to_string());
        self.output.push('\n');
    }
}

/// Render the derivation forest of a proved sequent: per proof, the link
/// header, a rule, then each node below its children.
pub fn render_tree(sequent: &Sequent, proofs: &ProofSet, tree: &ProofTree) -> String {
    let mut printer = TreePrinter::new(tree);
    for links in proofs {
        printer.output.push_str(&links.to_string());
        printer.output.push('\n');
        printer.output.push_str(&"-".repeat(10));
        printer.output.push('\n');
        printer.node(sequent, links, 0);
        printer.output.push('\n');
    }
    printer.output
}
