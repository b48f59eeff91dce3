//! Predicate patterns for common conditions.
//!
//! Each helper returns a [`Pattern::Predicate`] that binds the matched tree.

use std::sync::Arc;

use arbor_tree::{EnumSet, Kind, Tree};

use super::{Pattern, pred};

/// Match trees whose runtime kind is in `kinds`.
///
/// ```
/// use arbor_rewrite::pattern::is_type;
/// use arbor_tree::{Kind, Tree};
///
/// let number = is_type(Kind::Int | Kind::Float);
/// assert!(number.match_tree(&Tree::float(0.5)).is_some());
/// assert!(number.match_tree(&Tree::sym("x")).is_none());
/// ```
pub fn is_type(kinds: impl Into<EnumSet<Kind>>) -> Pattern {
    let kinds = kinds.into();
    let name = kinds.iter().map(<&'static str>::from).collect::<Vec<_>>().join("|");
    pred(format!("is_type({name})"), move |tree| kinds.contains(tree.kind()))
}

/// Match self-evaluating atoms: numbers, booleans and nil. Symbols and nodes
/// do not match.
pub fn is_literal() -> Pattern {
    pred("is_literal", Tree::is_literal)
}

/// Match integers and floats.
pub fn is_number() -> Pattern {
    pred("is_number", Tree::is_number)
}

/// Match symbol atoms.
pub fn is_symbol() -> Pattern {
    pred("is_symbol", |tree| tree.as_sym().is_some())
}

/// Match any node with operator `op`, whatever its children.
pub fn is_op(op: impl Into<Arc<str>>) -> Pattern {
    let op: Arc<str> = op.into();
    pred(format!("is_op({op})"), move |tree| tree.is_op(&op))
}

/// Match an integer or float zero.
#[inline]
pub fn is_zero() -> Pattern {
    pred("is_zero", Tree::is_zero)
}

/// Match an integer or float one.
#[inline]
pub fn is_one() -> Pattern {
    pred("is_one", Tree::is_one)
}
