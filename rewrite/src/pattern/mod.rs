//! Structural patterns.
//!
//! A [`Pattern`] describes the shape of a tree. Matching a pattern against a
//! tree either fails or yields an ordered [`Bindings`] list that is handed to
//! the rule's guard and action.
//!
//! Binding order is left-to-right, depth-first. Wildcards and predicates take
//! one fresh slot each. A named variable takes a slot on its first occurrence;
//! later occurrences of the same name match anything and overwrite that slot,
//! so the last occurrence wins. Names are not unified.

pub mod bindings;
pub mod helpers;

use std::fmt;
use std::sync::Arc;

use arbor_tree::{Atom, Tree};
use smallvec::SmallVec;

pub use bindings::Bindings;
pub use helpers::{is_literal, is_number, is_one, is_op, is_symbol, is_type, is_zero};

/// Type-erased tree predicate.
pub type PredicateFn = dyn Fn(&Tree) -> bool + Send + Sync;

/// A named tree predicate. The name shows up in pattern display and logs.
#[derive(Clone)]
pub struct Predicate {
    name: Arc<str>,
    test: Arc<PredicateFn>,
}

impl Predicate {
    pub fn new(name: impl Into<Arc<str>>, test: impl Fn(&Tree) -> bool + Send + Sync + 'static) -> Self {
        Self { name: name.into(), test: Arc::new(test) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, tree: &Tree) -> bool {
        (self.test)(tree)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

/// A structural tree pattern.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches any tree. One binding.
    Wildcard,
    /// Matches any tree. One binding, keyed by name.
    Named(Arc<str>),
    /// Matches a structurally equal tree. No binding.
    Literal(Tree),
    /// Matches when the predicate holds. One binding.
    Predicate(Predicate),
    /// Matches a node with the same operator and exactly as many children,
    /// each matching its sub-pattern.
    Node { op: Arc<str>, children: Vec<Pattern> },
}

/// Matches any tree.
pub fn wildcard() -> Pattern {
    Pattern::Wildcard
}

/// A named variable.
pub fn var(name: impl Into<Arc<str>>) -> Pattern {
    Pattern::Named(name.into())
}

/// An exact value. String literals are symbols.
///
/// Integers and floats never compare equal, so `lit(0)` does not match `0.0`;
/// use [`is_zero`] or [`is_one`] to match by numeric value.
pub fn lit(value: impl Into<Tree>) -> Pattern {
    Pattern::Literal(value.into())
}

/// A predicate pattern.
pub fn pred(name: impl Into<Arc<str>>, test: impl Fn(&Tree) -> bool + Send + Sync + 'static) -> Pattern {
    Pattern::Predicate(Predicate::new(name, test))
}

/// A node pattern.
pub fn node<P: Into<Pattern>>(op: impl Into<Arc<str>>, children: impl IntoIterator<Item = P>) -> Pattern {
    Pattern::Node { op: op.into(), children: children.into_iter().map(Into::into).collect() }
}

impl Pattern {
    /// Try to match `tree`, returning the bindings on success.
    ///
    /// Fails fast on the first mismatching child. There is no backtracking.
    pub fn match_tree(&self, tree: &Tree) -> Option<Bindings> {
        let mut bindings = Bindings::new();
        self.match_into(tree, &mut bindings).then_some(bindings)
    }

    fn match_into(&self, tree: &Tree, bindings: &mut Bindings) -> bool {
        match self {
            Pattern::Wildcard => {
                bindings.push(tree.clone());
                true
            }
            Pattern::Named(name) => {
                bindings.bind_named(name, tree.clone());
                true
            }
            Pattern::Literal(value) => value == tree,
            Pattern::Predicate(predicate) => {
                if !predicate.test(tree) {
                    return false;
                }
                bindings.push(tree.clone());
                true
            }
            Pattern::Node { op, children } => {
                let Some(node) = tree.as_node() else {
                    return false;
                };
                node.op() == &**op
                    && node.arity() == children.len()
                    && children.iter().zip(node.children()).all(|(pattern, child)| pattern.match_into(child, bindings))
            }
        }
    }

    /// Number of binding slots a successful match produces.
    pub fn slot_count(&self) -> usize {
        let mut seen: SmallVec<[&str; 4]> = SmallVec::new();
        self.count_slots(&mut seen)
    }

    fn count_slots<'a>(&'a self, seen: &mut SmallVec<[&'a str; 4]>) -> usize {
        match self {
            Pattern::Wildcard | Pattern::Predicate(_) => 1,
            Pattern::Named(name) if seen.contains(&&**name) => 0,
            Pattern::Named(name) => {
                seen.push(name);
                1
            }
            Pattern::Literal(_) => 0,
            Pattern::Node { children, .. } => children.iter().map(|c| c.count_slots(seen)).sum(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard => f.write_str("_"),
            Pattern::Named(name) => write!(f, "${name}"),
            Pattern::Literal(value) => write!(f, "{value}"),
            Pattern::Predicate(predicate) => write!(f, "<{}>", predicate.name()),
            Pattern::Node { op, children } => {
                write!(f, "({op}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<Tree> for Pattern {
    fn from(value: Tree) -> Self {
        Pattern::Literal(value)
    }
}

impl From<Atom> for Pattern {
    fn from(value: Atom) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<Predicate> for Pattern {
    fn from(predicate: Predicate) -> Self {
        Pattern::Predicate(predicate)
    }
}

macro_rules! literal_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Pattern {
            fn from(value: $ty) -> Self {
                Pattern::Literal(Tree::from(value))
            }
        })*
    };
}

literal_from!(i64, i32, f64, bool, &str, String);
