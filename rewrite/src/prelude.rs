//! Common imports for writing rule sets.
//!
//! ```
//! use arbor_rewrite::prelude::*;
//! ```

pub use arbor_tree::{Atom, Kind, Tree};

pub use crate::compose::{all, commutative, first, repeat, sort_commutative};
pub use crate::error::{Error, Result};
pub use crate::pattern::{
    Bindings, Pattern, Predicate, is_literal, is_number, is_one, is_op, is_symbol, is_type, is_zero, lit, node, pred,
    var, wildcard,
};
pub use crate::rewrite::{RewriteConfig, RewriteOutput, rewrite, rewrite_with};
pub use crate::rule::{Action, Guard, Rule, RuleBuilder, negate, when, when_pattern, where_all, where_any};
pub use crate::traversal::{bottom_up, top_down};
