//! Rule combinators.
//!
//! Combinators build new rules out of existing ones. All of them keep the
//! "unchanged input means no match" convention, so the results can be fed to
//! the engine or to other combinators.

use std::sync::Arc;

use arbor_tree::Tree;

use crate::pattern::{lit, wildcard};
use crate::{Action, Rule, when};

fn joined_names(rules: &[Rule]) -> String {
    rules.iter().map(Rule::name).collect::<Vec<_>>().join(", ")
}

/// Try rules in order; the first one that changes the tree wins.
///
/// Returns the input unchanged when none applies.
pub fn first(rules: impl IntoIterator<Item = Rule>) -> Rule {
    let rules: Vec<Rule> = rules.into_iter().collect();
    let name = format!("first({})", joined_names(&rules));
    Rule::new(name, move |tree| {
        for rule in &rules {
            let next = rule.apply(tree)?;
            if next != *tree {
                return Ok(next);
            }
        }
        Ok(tree.clone())
    })
}

/// Apply every rule in sequence, each to the previous one's output.
pub fn all(rules: impl IntoIterator<Item = Rule>) -> Rule {
    let rules: Vec<Rule> = rules.into_iter().collect();
    let name = format!("all({})", joined_names(&rules));
    Rule::new(name, move |tree| rules.iter().try_fold(tree.clone(), |current, rule| rule.apply(&current)))
}

/// Apply `rule` to the same node until it stops changing it.
///
/// Does not descend into children. Loops forever if `rule` never settles.
pub fn repeat(rule: Rule) -> Rule {
    let name = format!("repeat({})", rule.name());
    Rule::new(name, move |tree| {
        let mut current = tree.clone();
        loop {
            let next = rule.apply(&current)?;
            if next == current {
                return Ok(current);
            }
            current = next;
        }
    })
}

/// Two rules for a commutative binary operator: `(op value _)` and
/// `(op _ value)`, both producing `action`.
///
/// `value` is matched as a literal, so both patterns bind exactly one slot:
/// the other operand.
pub fn commutative(op: impl Into<Arc<str>>, value: impl Into<Tree>, action: Action) -> [Rule; 2] {
    let op: Arc<str> = op.into();
    let value = lit(value);
    [
        when(op.clone(), [value.clone(), wildcard()]).then_action(action.clone()),
        when(op, [wildcard(), value]).then_action(action),
    ]
}

/// Order the operands of a binary `op` node by their rendered text.
///
/// Gives commutative operators a canonical form, so `(+ y x)` and `(+ x y)`
/// both become `(+ x y)`. Already sorted nodes are left unchanged.
pub fn sort_commutative(op: impl Into<Arc<str>>) -> Rule {
    let op: Arc<str> = op.into();
    let name = format!("sort_commutative({op})");
    when(op.clone(), [wildcard(), wildcard()]).named(name).then(move |b| {
        let (lhs, rhs) = (&b[0], &b[1]);
        if lhs.to_string() <= rhs.to_string() {
            Tree::node(op.clone(), [lhs.clone(), rhs.clone()])
        } else {
            Tree::node(op.clone(), [rhs.clone(), lhs.clone()])
        }
    })
}
