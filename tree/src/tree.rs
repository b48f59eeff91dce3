//! The recursive tree type.
//!
//! Trees are immutable. Rewriting builds new trees and shares unchanged
//! subtrees with the input through reference-counted nodes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::NotANumberSnafu;
use crate::{Atom, Kind, Result};

/// Child storage. Most operators are unary or binary, so four inline slots
/// avoid a heap allocation for the common case.
pub type Children = SmallVec<[Tree; 4]>;

/// An expression tree: an atom or an operator node.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tree {
    Atom(Atom),
    Node(Arc<Node>),
}

/// An operator tag with an ordered, fixed-arity list of children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    op: Arc<str>,
    children: Children,
}

impl Node {
    pub fn op(&self) -> &str {
        &self.op
    }

    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    pub fn arity(&self) -> usize {
        self.children.len()
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Tree::Atom(a), Tree::Atom(b)) => a == b,
            (Tree::Node(a), Tree::Node(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl Eq for Tree {}

impl Hash for Tree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Tree::Atom(atom) => {
                0u8.hash(state);
                atom.hash(state);
            }
            Tree::Node(node) => {
                1u8.hash(state);
                node.hash(state);
            }
        }
    }
}

impl Tree {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn int(v: i64) -> Self {
        Tree::Atom(Atom::Int(v))
    }

    pub fn float(v: f64) -> Self {
        Tree::Atom(Atom::Float(v))
    }

    pub fn bool(v: bool) -> Self {
        Tree::Atom(Atom::Bool(v))
    }

    /// The null sentinel.
    pub fn nil() -> Self {
        Tree::Atom(Atom::Nil)
    }

    pub fn sym(name: impl Into<Arc<str>>) -> Self {
        Tree::Atom(Atom::Sym(name.into()))
    }

    /// Build an operator node. A node with no children is valid.
    pub fn node(op: impl Into<Arc<str>>, children: impl IntoIterator<Item = Tree>) -> Self {
        Tree::Node(Arc::new(Node { op: op.into(), children: children.into_iter().collect() }))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Tree::Atom(atom) => Some(atom),
            Tree::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Tree::Atom(_) => None,
            Tree::Node(node) => Some(node),
        }
    }

    /// Operator tag, if this is a node.
    pub fn op(&self) -> Option<&str> {
        self.as_node().map(Node::op)
    }

    /// Children of a node. Atoms have none.
    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Atom(_) => &[],
            Tree::Node(node) => node.children(),
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Tree::Node(_))
    }

    pub fn is_op(&self, op: &str) -> bool {
        self.op() == Some(op)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Tree::Atom(atom) => atom.kind(),
            Tree::Node(_) => Kind::Node,
        }
    }

    /// Numbers, booleans and nil. Symbols and nodes are not literals.
    pub fn is_literal(&self) -> bool {
        self.kind().is_literal()
    }

    pub fn is_number(&self) -> bool {
        self.kind().is_number()
    }

    pub fn is_zero(&self) -> bool {
        self.as_atom().is_some_and(Atom::is_zero)
    }

    pub fn is_one(&self) -> bool {
        self.as_atom().is_some_and(Atom::is_one)
    }

    pub fn as_int(&self) -> Option<i64> {
        self.as_atom().and_then(Atom::as_int)
    }

    pub fn as_float(&self) -> Option<f64> {
        self.as_atom().and_then(Atom::as_float)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_atom().and_then(Atom::as_bool)
    }

    pub fn as_sym(&self) -> Option<&str> {
        self.as_atom().and_then(Atom::as_sym)
    }

    // =========================================================================
    // Rebuilding
    // =========================================================================

    /// Rebuild this node by mapping every child through `f`.
    ///
    /// Returns a clone of `self` (same allocation) when no child changed, so
    /// unchanged subtrees stay shared. Atoms are returned as-is.
    pub fn try_map_children<E>(
        &self,
        mut f: impl FnMut(&Tree) -> std::result::Result<Tree, E>,
    ) -> std::result::Result<Tree, E> {
        let Tree::Node(node) = self else {
            return Ok(self.clone());
        };

        let mut changed = false;
        let mut children = Children::with_capacity(node.arity());
        for child in node.children() {
            let next = f(child)?;
            changed |= next != *child;
            children.push(next);
        }

        if !changed {
            return Ok(self.clone());
        }
        Ok(Tree::Node(Arc::new(Node { op: node.op.clone(), children })))
    }

    /// Replace the children of this node, keeping its operator.
    ///
    /// Returns `None` for atoms.
    pub fn with_children(&self, children: impl IntoIterator<Item = Tree>) -> Option<Tree> {
        self.as_node().map(|node| Tree::node(node.op.clone(), children))
    }

    // =========================================================================
    // Arithmetic on numeric atoms
    // =========================================================================

    fn number(&self) -> Result<&Atom> {
        match self {
            Tree::Atom(atom) if atom.is_number() => Ok(atom),
            _ => NotANumberSnafu { kind: self.kind() }.fail(),
        }
    }

    pub fn checked_add(&self, rhs: &Tree) -> Result<Tree> {
        self.number()?.checked_add(rhs.number()?).map(Tree::Atom)
    }

    pub fn checked_sub(&self, rhs: &Tree) -> Result<Tree> {
        self.number()?.checked_sub(rhs.number()?).map(Tree::Atom)
    }

    pub fn checked_mul(&self, rhs: &Tree) -> Result<Tree> {
        self.number()?.checked_mul(rhs.number()?).map(Tree::Atom)
    }

    pub fn checked_div(&self, rhs: &Tree) -> Result<Tree> {
        self.number()?.checked_div(rhs.number()?).map(Tree::Atom)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Atom(atom) => write!(f, "{atom}"),
            Tree::Node(node) => {
                write!(f, "({}", node.op)?;
                for child in node.children() {
                    write!(f, " {child}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<Atom> for Tree {
    fn from(atom: Atom) -> Self {
        Tree::Atom(atom)
    }
}

impl From<i64> for Tree {
    fn from(v: i64) -> Self {
        Tree::int(v)
    }
}

impl From<i32> for Tree {
    fn from(v: i32) -> Self {
        Tree::int(v as i64)
    }
}

impl From<f64> for Tree {
    fn from(v: f64) -> Self {
        Tree::float(v)
    }
}

impl From<bool> for Tree {
    fn from(v: bool) -> Self {
        Tree::bool(v)
    }
}

impl From<&str> for Tree {
    fn from(v: &str) -> Self {
        Tree::sym(v)
    }
}

impl From<String> for Tree {
    fn from(v: String) -> Self {
        Tree::sym(v)
    }
}

/// Build a [`Tree`] from tuple-like syntax.
///
/// A parenthesized group whose first element is a string literal becomes a
/// node; anything else goes through `Tree::from`, so string literals are
/// symbols. Children that are more than one token (negative numbers, paths,
/// calls) must be wrapped in braces.
///
/// ```
/// use arbor_tree::{tree, Tree};
///
/// let t = tree!(("*", ("+", "x", 0), {-1}));
/// assert_eq!(t.to_string(), "(* (+ x 0) -1)");
/// assert_eq!(tree!(("pi")), Tree::node("pi", []));
/// ```
#[macro_export]
macro_rules! tree {
    (($op:literal $(, $child:tt)*)) => {
        $crate::Tree::node($op, ::std::vec::Vec::<$crate::Tree>::from([$($crate::tree!($child)),*]))
    };
    ($e:expr) => {
        $crate::Tree::from($e)
    };
}
