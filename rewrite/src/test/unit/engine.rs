use arbor_tree::{Tree, tree};

use crate::prelude::*;

fn add_literals() -> Rule {
    when("+", [is_literal(), is_literal()]).try_then(|b| {
        let [a, c] = b.unpack::<2>()?;
        Ok::<_, Error>(a.checked_add(c)?)
    })
}

#[test]
fn test_literal_addition() {
    assert_eq!(rewrite(&tree!(("+", 3, 4)), &[add_literals()]).unwrap(), Tree::int(7));
    assert_eq!(rewrite(&tree!(("+", 2, 3)), &[bottom_up(add_literals())]).unwrap(), Tree::int(5));
}

#[test]
fn test_identity_rules_end_to_end() {
    let rules = [
        bottom_up(when("+", [wildcard(), lit(0)]).then(|b| b[0].clone())),
        bottom_up(when("+", [lit(0), wildcard()]).then(|b| b[0].clone())),
        bottom_up(when("*", [wildcard(), lit(1)]).then(|b| b[0].clone())),
        bottom_up(when("*", [wildcard(), lit(0)]).then_const(0)),
    ];
    assert_eq!(rewrite(&tree!(("*", ("+", "x", 0), 1)), &rules).unwrap(), Tree::sym("x"));
}

#[test]
fn test_fixed_point_chaining() {
    let rules = [
        when::<Pattern>("a", []).then(|_| Tree::node("b", [])),
        when::<Pattern>("b", []).then(|_| Tree::node("c", [])),
    ];
    let output = rewrite_with(&tree!(("a")), &rules, &RewriteConfig::default()).unwrap();
    assert_eq!(output.tree, tree!(("c")));
    assert_eq!(output.rewrites, 2);
}

#[test]
fn test_scan_restarts_from_first_rule() {
    // After rule 1 fires, rule 0 must get another chance before rule 2.
    let rules = [
        when("s", [lit(1)]).then(|_| tree!(("done", "rule0"))),
        when("s", [lit(0)]).then(|_| tree!(("s", 1))),
        when("s", [lit(1)]).then(|_| tree!(("done", "rule2"))),
    ];
    assert_eq!(rewrite(&tree!(("s", 0)), &rules).unwrap(), tree!(("done", "rule0")));
}

#[test]
fn test_rewrite_is_root_only() {
    let rule = when("+", [wildcard(), lit(0)]).then(|b| b[0].clone());
    let nested = tree!(("f", ("+", "x", 0)));
    assert_eq!(rewrite(&nested, std::slice::from_ref(&rule)).unwrap(), nested);
    assert_eq!(rewrite(&nested, &[bottom_up(rule)]).unwrap(), tree!(("f", "x")));
}

#[test]
fn test_no_rules() {
    let t = tree!(("f", 1));
    let output = rewrite_with(&t, &[], &RewriteConfig::default()).unwrap();
    assert_eq!(output, RewriteOutput { tree: t, rewrites: 0 });
}

#[test]
fn test_nan_is_not_a_change() {
    let rebuild = when("f", [wildcard()]).then(|b| Tree::node("f", [b[0].clone()]));
    let t = tree!(("f", { f64::NAN }));
    let output = rewrite_with(&t, &[rebuild], &RewriteConfig::default()).unwrap();
    assert_eq!(output.rewrites, 0);
}

#[test]
fn test_rewrite_limit() {
    let swap = when("+", [wildcard(), wildcard()]).then(|b| Tree::node("+", [b[1].clone(), b[0].clone()]));
    let config = RewriteConfig::builder().max_rewrites(10).build();

    let err = rewrite_with(&tree!(("+", 1, 2)), &[swap], &config).unwrap_err();
    assert!(matches!(err, Error::RewriteLimitExceeded { limit: 10 }));
    assert_eq!(err.to_string(), "rewrite limit of 10 exceeded");
}

#[test]
fn test_limit_not_hit_at_fixed_point() {
    let config = RewriteConfig::builder().max_rewrites(1).build();
    let output = rewrite_with(&tree!(("+", 3, 4)), &[add_literals()], &config).unwrap();
    assert_eq!(output.tree, Tree::int(7));
    assert_eq!(output.rewrites, 1);

    let zero = RewriteConfig::builder().max_rewrites(0).build();
    let untouched = rewrite_with(&Tree::sym("x"), &[add_literals()], &zero).unwrap();
    assert_eq!(untouched.rewrites, 0);
}

#[test]
fn test_named_variables_without_unification() {
    let rule = when("+", [var("x"), var("x")]).then(|b| Tree::node("*", [Tree::int(2), b["x"].clone()]));
    assert_eq!(rewrite(&tree!(("+", "y", "y")), std::slice::from_ref(&rule)).unwrap(), tree!(("*", 2, "y")));
    // No equality check: the single slot holds the last occurrence.
    assert_eq!(rewrite(&tree!(("+", "a", "b")), &[rule]).unwrap(), tree!(("*", 2, "b")));
}

#[test]
fn test_nested_named_pattern() {
    let rule = when("f", [node("g", [var("x")])]).then(|b| Tree::node("h", [b["x"].clone()]));
    assert_eq!(rewrite(&tree!(("f", ("g", "y"))), &[rule]).unwrap(), tree!(("h", "y")));
}

#[test]
fn test_action_error_stops_rewrite() {
    let fold = when("+", [wildcard(), wildcard()]).named("fold").try_then(|b| b[0].checked_add(&b[1]));
    let err = rewrite(&tree!(("+", "x", 1)), &[fold]).unwrap_err();
    assert!(matches!(err, Error::Action { ref rule, .. } if rule == "fold"));
}
