//! Category terms for categorial sequents
//!
//! A category is a binary tree whose leaves are atomic symbols and whose
//! internal nodes carry one of four connectives: the ordinary slashes `/`
//! and `\`, and the tower connectives `^` and `!` used to encode delayed
//! (lifted) results. The printed parenthesized form is canonical and
//! round-trips through the parser.

use std::fmt;

use crate::links::{Link, LinkSet};

/// A binary connective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Conn {
    /// `a / b`: a result `a` seeking an argument `b` to its right
    Over,
    /// `a \ b`: a result `b` seeking an argument `a` to its left
    Under,
    /// `^`: inner tower connective (delivered `^` core)
    Caret,
    /// `!`: outer tower connective (... `!` deferred)
    Bang,
}

impl fmt::Display for Conn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conn::Over => write!(f, "/"),
            Conn::Under => write!(f, "\\"),
            Conn::Caret => write!(f, "^"),
            Conn::Bang => write!(f, "!"),
        }
    }
}

/// An atomic category: a base symbol plus an optional disambiguating index.
///
/// The index is assigned by [`crate::index::index_sequent`] and ignored by
/// identity tests; it exists so link-sets can name individual occurrences.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Atom {
    pub base: String,
    pub index: Option<u32>,
}

impl Atom {
    pub fn new(base: impl Into<String>) -> Self {
        Atom {
            base: base.into(),
            index: None,
        }
    }

    pub fn indexed(base: impl Into<String>, index: u32) -> Self {
        Atom {
            base: base.into(),
            index: Some(index),
        }
    }

    /// Read an atom from its canonical name, splitting a trailing
    /// `_<digits>` suffix into the index. A suffix with a leading zero is
    /// not an index (it would not round-trip), so `s_007` stays a bare base.
    pub fn from_name(name: &str) -> Self {
        if let Some((base, suffix)) = name.rsplit_once('_') {
            let numeric = !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit());
            let canonical = suffix == "0" || !suffix.starts_with('0');
            if !base.is_empty() && numeric && canonical {
                if let Ok(index) = suffix.parse() {
                    return Atom {
                        base: base.to_string(),
                        index: Some(index),
                    };
                }
            }
        }
        Atom {
            base: name.to_string(),
            index: None,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}_{}", self.base, i),
            None => write!(f, "{}", self.base),
        }
    }
}

/// A category term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Atom(Atom),
    Compound(Conn, Box<Category>, Box<Category>),
}

/// One layer of an unslashed category: the category remaining at this depth
/// and the hypothesis that was peeled off to reach it (`None` at layer 0).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub cat: Category,
    pub hypo: Option<(Conn, Category)>,
}

impl Category {
    pub fn atom(base: impl Into<String>) -> Self {
        Category::Atom(Atom::new(base))
    }

    pub fn compound(conn: Conn, left: Category, right: Category) -> Self {
        Category::Compound(conn, Box::new(left), Box::new(right))
    }

    pub fn over(left: Category, right: Category) -> Self {
        Category::compound(Conn::Over, left, right)
    }

    pub fn under(left: Category, right: Category) -> Self {
        Category::compound(Conn::Under, left, right)
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Category::Atom(_))
    }

    /// Decompose at the principal connective. `None` for atoms.
    pub fn split(&self) -> Option<(Conn, &Category, &Category)> {
        match self {
            Category::Atom(_) => None,
            Category::Compound(conn, left, right) => Some((*conn, left, right)),
        }
    }

    /// Wrap a hypothesis around this category.
    ///
    /// `Over` and `Caret` put the hypothesis on the right (`self / h`,
    /// `self ^ h`); `Under` and `Bang` put it on the left (`h \ self`,
    /// `h ! self`). For the slash connectives this is the inverse of one
    /// [`Category::unslash`] step.
    pub fn add_hypo(self, conn: Conn, hypo: Category) -> Category {
        match conn {
            Conn::Over | Conn::Caret => Category::compound(conn, self, hypo),
            Conn::Under | Conn::Bang => Category::compound(conn, hypo, self),
        }
    }

    /// Peel successive slash arguments into a list of layers.
    ///
    /// Layer 0 is the whole category with no hypothesis; each further layer
    /// records the result after removing one outer argument slot together
    /// with the connective and argument removed. Tower connectives stop the
    /// peeling, so a tower can only appear as the innermost layer.
    pub fn unslash(&self) -> Vec<Layer> {
        let mut layers = vec![Layer {
            cat: self.clone(),
            hypo: None,
        }];
        let mut cur = self;
        loop {
            match cur {
                Category::Compound(Conn::Over, left, right) => {
                    layers.push(Layer {
                        cat: (**left).clone(),
                        hypo: Some((Conn::Over, (**right).clone())),
                    });
                    cur = left;
                }
                Category::Compound(Conn::Under, left, right) => {
                    layers.push(Layer {
                        cat: (**right).clone(),
                        hypo: Some((Conn::Under, (**left).clone())),
                    });
                    cur = right;
                }
                _ => break,
            }
        }
        layers
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn child(f: &mut fmt::Formatter<'_>, cat: &Category) -> fmt::Result {
            if cat.is_atomic() {
                write!(f, "{}", cat)
            } else {
                write!(f, "({})", cat)
            }
        }
        match self {
            Category::Atom(a) => write!(f, "{}", a),
            Category::Compound(conn, left, right) => {
                child(f, left)?;
                write!(f, "{}", conn)?;
                child(f, right)
            }
        }
    }
}

/// Do two atomic categories share a base symbol, ignoring indices?
pub fn atomic_iden(a: &Category, b: &Category) -> bool {
    match (a, b) {
        (Category::Atom(x), Category::Atom(y)) => x.base == y.base,
        _ => false,
    }
}

/// Structural identity up to atom indices.
///
/// On success, returns the witness pairs linking corresponding atom
/// occurrences (pairs are only emitted where both atoms carry an index).
pub fn cat_iden(a: &Category, b: &Category) -> Option<LinkSet> {
    match (a, b) {
        (Category::Atom(x), Category::Atom(y)) => {
            if x.base == y.base {
                let mut links = LinkSet::new();
                if let (Some(i), Some(j)) = (x.index, y.index) {
                    links.insert(Link::new(i, j));
                }
                Some(links)
            } else {
                None
            }
        }
        (Category::Compound(c1, l1, r1), Category::Compound(c2, l2, r2)) if c1 == c2 => {
            let mut links = cat_iden(l1, l2)?;
            links.merge(cat_iden(r1, r2)?);
            Some(links)
        }
        _ => None,
    }
}
