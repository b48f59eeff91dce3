use arbor_tree::{Tree, tree};

use crate::prelude::*;

#[test]
fn test_no_match_returns_input() {
    let rule = when("nope", [wildcard()]).then_const(42);
    let t = tree!(("ok", 1));
    assert_eq!(rule.apply(&t).unwrap(), t);
}

#[test]
fn test_then_const() {
    let rule = when("+", [wildcard(), wildcard()]).then_const(0);
    assert_eq!(rule.apply(&tree!(("+", 1, 2))).unwrap(), Tree::int(0));
    // Arity mismatch is a plain mismatch.
    assert_eq!(rule.apply(&tree!(("+", 1))).unwrap(), tree!(("+", 1)));
}

#[test]
fn test_swap_binding_order() {
    let swap = when("+", [wildcard(), wildcard()]).then(|b| Tree::node("+", [b[1].clone(), b[0].clone()]));
    assert_eq!(swap.apply(&tree!(("+", 1, 2))).unwrap(), tree!(("+", 2, 1)));
}

#[test]
fn test_multiple_wildcards_and_named() {
    let swap_ends = when("op", [wildcard(), var("mid"), wildcard()])
        .then(|b| Tree::node("op", [b[2].clone(), b["mid"].clone(), b[0].clone()]));
    assert_eq!(swap_ends.apply(&tree!(("op", 1, "keep", 2))).unwrap(), tree!(("op", 2, "keep", 1)));
}

#[test]
fn test_guard() {
    let square = when("val", [var("x")])
        .guard(|b| b[0].as_int().is_some_and(|x| x > 0))
        .try_then(|b| b[0].checked_mul(&b[0]).map(|sq| Tree::node("val2", [sq])));

    assert_eq!(rewrite(&tree!(("val", 5)), std::slice::from_ref(&square)).unwrap(), tree!(("val2", 25)));
    assert_eq!(rewrite(&tree!(("val", {-2})), &[square]).unwrap(), tree!(("val", {-2})));
}

#[test]
fn test_guard_replaces_previous() {
    let rule = when("f", [wildcard()]).guard(|_| false).guard(|_| true).then_const("hit");
    assert_eq!(rule.apply(&tree!(("f", 1))).unwrap(), Tree::sym("hit"));
}

#[test]
fn test_guard_combinators() {
    let positive = Guard::new(|b| b[0].as_int().is_some_and(|x| x > 0));
    let even = Guard::new(|b| b[0].as_int().is_some_and(|x| x % 2 == 0));

    let both = when("n", [wildcard()]).guard_with(where_all([positive.clone(), even.clone()])).then_const("both");
    let either = when("n", [wildcard()]).guard_with(where_any([positive.clone(), even.clone()])).then_const("either");
    let odd = when("n", [wildcard()]).guard_with(negate(even)).then_const("odd");

    assert_eq!(both.apply(&tree!(("n", 4))).unwrap(), Tree::sym("both"));
    assert_eq!(both.apply(&tree!(("n", 3))).unwrap(), tree!(("n", 3)));
    assert_eq!(either.apply(&tree!(("n", 3))).unwrap(), Tree::sym("either"));
    assert_eq!(either.apply(&tree!(("n", {-3}))).unwrap(), tree!(("n", {-3})));
    assert_eq!(odd.apply(&tree!(("n", 3))).unwrap(), Tree::sym("odd"));
}

#[test]
fn test_empty_guard_lists() {
    let bindings = Bindings::new();
    let none: [Guard; 0] = [];
    assert!(where_all(none.clone()).test(&bindings));
    assert!(!where_any(none).test(&bindings));
}

#[test]
fn test_predicate_pattern_root() {
    let negative = pred("negative", |t| t.as_int().is_some_and(|x| x < 0));
    let rule = when_pattern(negative).then_const(0);
    assert_eq!(rewrite(&Tree::int(5), std::slice::from_ref(&rule)).unwrap(), Tree::int(5));
    assert_eq!(rewrite(&Tree::int(-5), &[rule]).unwrap(), Tree::int(0));
}

#[test]
fn test_default_and_custom_names() {
    let rule = when("+", [wildcard(), lit(0)]).then(|b| b[0].clone());
    assert_eq!(rule.name(), "(+ _ 0)");

    let rule = when("+", [wildcard(), lit(0)]).named("add_zero").then(|b| b[0].clone());
    assert_eq!(rule.name(), "add_zero");
    assert_eq!(rule.named("renamed").name(), "renamed");
}

#[test]
fn test_builder_exposes_pattern() {
    let builder = when("f", [var("x"), wildcard(), var("x"), lit(1)]);
    assert_eq!(builder.pattern().to_string(), "(f $x _ $x 1)");
    assert_eq!(builder.pattern().slot_count(), 2);
}

#[test]
fn test_action_error_propagates() {
    let divide = when("/", [is_number(), is_number()])
        .named("fold_div")
        .try_then(|b| b[0].checked_div(&b[1]));

    let err = rewrite(&tree!(("/", 1, 0)), &[divide]).unwrap_err();
    match err {
        Error::Action { rule, source } => {
            assert_eq!(rule, "fold_div");
            assert_eq!(source.downcast_ref::<arbor_tree::Error>(), Some(&arbor_tree::Error::DivisionByZero));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unpack_inside_action() {
    let bad = when("f", [wildcard()]).try_then(|b| b.unpack::<2>().map(|[a, _]| a.clone()));
    let err = bad.apply(&tree!(("f", 1))).unwrap_err();
    let Error::Action { source, .. } = err else { panic!("expected action error") };
    assert!(matches!(source.downcast_ref::<Error>(), Some(Error::ArityMismatch { expected: 2, actual: 1 })));
}

#[test]
fn test_binding_action() {
    let rule = when("+", [lit(0), wildcard()]).then_action(Action::binding(0));
    assert_eq!(rule.apply(&tree!(("+", 0, "x"))).unwrap(), Tree::sym("x"));

    let out_of_range = when("+", [lit(0), wildcard()]).then_action(Action::binding(3));
    assert!(out_of_range.apply(&tree!(("+", 0, "x"))).is_err());
}

#[test]
fn test_rules_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Rule>();
    assert_send_sync::<Pattern>();
    assert_send_sync::<Tree>();
}
