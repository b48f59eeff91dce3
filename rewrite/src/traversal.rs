//! Traversal wrappers that let a root-level rule reach every subtree.

use arbor_tree::Tree;

use crate::{Result, Rule};

/// Apply `rule` to every subtree, children before parents.
///
/// Each child is rewritten recursively, the node is rebuilt from the results,
/// then `rule` runs once on the rebuilt node. Unchanged subtrees keep their
/// allocation.
pub fn bottom_up(rule: Rule) -> Rule {
    let name = format!("bottom_up({})", rule.name());
    Rule::new(name, move |tree| bottom_up_apply(&rule, tree))
}

fn bottom_up_apply(rule: &Rule, tree: &Tree) -> Result<Tree> {
    let rebuilt = tree.try_map_children(|child| bottom_up_apply(rule, child))?;
    rule.apply(&rebuilt)
}

/// Apply `rule` to a node before visiting its children, then again after.
pub fn top_down(rule: Rule) -> Rule {
    let name = format!("top_down({})", rule.name());
    Rule::new(name, move |tree| top_down_apply(&rule, tree))
}

fn top_down_apply(rule: &Rule, tree: &Tree) -> Result<Tree> {
    let pre = rule.apply(tree)?;
    let rebuilt = pre.try_map_children(|child| top_down_apply(rule, child))?;
    rule.apply(&rebuilt)
}
