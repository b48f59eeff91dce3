//! Generators and rule sets for property-based testing.

use arbor_tree::Tree;
use proptest::prelude::*;

use crate::prelude::*;

// ============================================================================
// Tree Generators
// ============================================================================

/// Arbitrary trees over the shared operator alphabet.
pub fn arb_tree() -> impl Strategy<Value = Tree> {
    Tree::generator()
}

/// Trees whose literals are small integers, so folding cannot overflow.
pub fn arb_int_tree() -> impl Strategy<Value = Tree> {
    let leaf = prop_oneof![
        3 => (-10i64..=10).prop_map(Tree::int),
        1 => prop::sample::select(vec!["x", "y"]).prop_map(Tree::sym),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        (prop::sample::select(vec!["+", "*"]), inner.clone(), inner)
            .prop_map(|(op, lhs, rhs)| Tree::node(op, [lhs, rhs]))
    })
}

// ============================================================================
// Rule Sets
// ============================================================================

/// Terminating simplifier: every rule shrinks the tree.
pub fn simplifier() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(commutative("+", 0, Action::binding(0)).map(bottom_up));
    rules.extend(commutative("*", 1, Action::binding(0)).map(bottom_up));
    rules.extend(commutative("*", 0, Action::constant(0)).map(bottom_up));
    rules.push(bottom_up(
        when("+", [is_number(), is_number()]).named("fold_add").try_then(|b| b[0].checked_add(&b[1])),
    ));
    rules
}

/// Rules that can never match generated trees.
pub fn unmatched_rules() -> Vec<Rule> {
    vec![
        when("never", [wildcard()]).then_const(0),
        bottom_up(when("also_never", [wildcard(), wildcard()]).then_const(1)),
    ]
}

/// Whether any rule of [`simplifier`] would fire at this node.
pub fn simplifiable(t: &Tree) -> bool {
    let [lhs, rhs] = t.children() else {
        return false;
    };
    match t.op() {
        Some("+") => {
            lhs.as_int() == Some(0) || rhs.as_int() == Some(0) || lhs.is_number() && rhs.is_number()
        }
        Some("*") => [lhs, rhs].iter().any(|c| c.as_int() == Some(0) || c.as_int() == Some(1)),
        _ => false,
    }
}
