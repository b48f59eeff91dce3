//! Rewrite engine implementation.
//!
//! # Algorithm
//!
//! Rules are tried in order against the root of the current tree. The first
//! rule whose output differs structurally from its input wins: the output
//! becomes the current tree and the scan restarts from the first rule. The
//! engine stops when a full scan leaves the tree unchanged.
//!
//! Only the root is handed to the rules. Rules that need to reach inside the
//! tree are wrapped with [`bottom_up`](crate::bottom_up) or
//! [`top_down`](crate::top_down).
//!
//! Termination is the rule author's responsibility. A rule pair that undoes
//! each other (for example commuting the same operands back and forth) loops
//! forever unless [`RewriteConfig::max_rewrites`] is set.

use arbor_tree::Tree;

use crate::error::RewriteLimitExceededSnafu;
use crate::{Result, RewriteConfig, Rule};

/// Result of [`rewrite_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteOutput {
    /// The tree at the fixed point.
    pub tree: Tree,
    /// Number of rule applications that changed the tree.
    pub rewrites: usize,
}

/// Rewrite `tree` until no rule in `rules` changes it.
///
/// Unbounded; see [`rewrite_with`] for a limit.
#[tracing::instrument(skip_all, fields(rules = rules.len()))]
pub fn rewrite(tree: &Tree, rules: &[Rule]) -> Result<Tree> {
    rewrite_with(tree, rules, &RewriteConfig::default()).map(|output| output.tree)
}

/// Rewrite `tree` to a fixed point under `config`, reporting how many rewrites
/// were performed.
#[tracing::instrument(skip_all, fields(rules = rules.len(), max_rewrites = ?config.max_rewrites))]
pub fn rewrite_with(tree: &Tree, rules: &[Rule], config: &RewriteConfig) -> Result<RewriteOutput> {
    let mut current = tree.clone();
    let mut rewrites = 0usize;

    'scan: loop {
        for (rule_idx, rule) in rules.iter().enumerate() {
            let next = rule.apply(&current)?;
            if next == current {
                tracing::trace!(rule_idx, rule = rule.name(), "rule left tree unchanged");
                continue;
            }

            if let Some(limit) = config.max_rewrites
                && rewrites >= limit
            {
                tracing::warn!(limit, rule = rule.name(), tree = %current, "rewrite limit exceeded");
                return RewriteLimitExceededSnafu { limit }.fail();
            }

            rewrites += 1;
            tracing::debug!(rule_idx, rule = rule.name(), tree = %next, "rule fired");
            current = next;
            continue 'scan;
        }
        break;
    }

    tracing::debug!(rewrites, "fixed point reached");
    Ok(RewriteOutput { tree: current, rewrites })
}
