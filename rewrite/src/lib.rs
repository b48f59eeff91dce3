//! Pattern-directed term rewriting over [`arbor_tree::Tree`].
//!
//! Rules are built with a fluent builder ([`when`] / [`RuleBuilder`]) and
//! applied by [`rewrite`], which repeatedly scans the rule list until no rule
//! changes the tree.
//!
//! ```
//! use arbor_rewrite::prelude::*;
//! use arbor_tree::tree;
//!
//! let rules = [
//!     bottom_up(when("+", [wildcard(), lit(0)]).then(|b| b[0].clone())),
//!     bottom_up(when("*", [wildcard(), lit(1)]).then(|b| b[0].clone())),
//! ];
//! let out = rewrite(&tree!(("*", ("+", "x", 0), 1)), &rules).unwrap();
//! assert_eq!(out, Tree::sym("x"));
//! ```
//!
//! # Module Organization
//!
//! - [`pattern`] - Structural patterns, bindings and predicate helpers
//! - [`rule`] - Rules, the rule builder, actions and guards
//! - [`rewrite`] - The fixed-point engine and its configuration
//! - [`traversal`] - Bottom-up and top-down tree walks
//! - [`compose`] - Rule combinators
//! - [`error`] - Error types and result handling

pub mod compose;
pub mod error;
pub mod pattern;
pub mod prelude;
pub mod rewrite;
pub mod rule;
pub mod traversal;


pub use compose::{all, commutative, first, repeat, sort_commutative};
pub use error::{BoxError, Error, Result};
pub use pattern::{Bindings, Pattern, Predicate};
pub use rewrite::{RewriteConfig, RewriteOutput, rewrite, rewrite_with};
pub use rule::{Action, Guard, Rule, RuleBuilder, when, when_pattern};
pub use traversal::{bottom_up, top_down};
