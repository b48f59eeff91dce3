//! Immutable S-expression trees for the Arbor rewriting engine.
//!
//! A [`Tree`] is either an [`Atom`] (number, boolean, nil or symbol) or a
//! [`Node`] carrying an operator tag and an ordered list of children. Trees are
//! cheap to clone (nodes are reference counted) and compare by deep structural
//! equality, which is how the rewrite engine detects that nothing changed.
//!
//! # Module Organization
//!
//! - [`atom`] - Leaf values and numeric helpers
//! - [`kind`] - Runtime kind of a tree, used by type-test predicates
//! - [`tree`] - The recursive [`Tree`] type and [`Node`]
//! - [`walk`] - Breadth-first traversal and shape metrics
//! - [`render`] - ASCII tree rendering
//! - [`error`] - Error types and result handling

pub mod atom;
pub mod error;
pub mod kind;
pub mod render;
pub mod tree;
pub mod walk;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest_gen;


pub use atom::Atom;
pub use error::{Error, Result};
pub use kind::{Kind, LITERAL_KINDS, NUMBER_KINDS};
pub use tree::{Children, Node, Tree};
pub use walk::BreadthFirst;

// Re-exported so downstream crates can build kind sets without naming enumset.
pub use enumset::EnumSet;
