use test_case::test_case;

use crate::{Tree, tree};

#[test_case(Tree::int(1), 1, 1, 1 ; "atom")]
#[test_case(Tree::node("pi", []), 1, 1, 1 ; "zero_arity")]
#[test_case(tree!(("+", "x", 0)), 3, 2, 2 ; "binary")]
#[test_case(tree!(("*", ("+", "x", 0), ("-", "y", 1))), 7, 3, 4 ; "balanced")]
#[test_case(tree!(("f", ("g", ("h", "x")))), 4, 4, 1 ; "chain")]
fn test_shape(t: Tree, size: usize, depth: usize, width: usize) {
    assert_eq!(t.size(), size);
    assert_eq!(t.depth(), depth);
    assert_eq!(t.width(), width);
}

#[test]
fn test_breadth_first_order() {
    let t = tree!(("*", ("+", "x", 0), 1));
    let visited: Vec<(usize, String)> = t.breadth_first().map(|(level, t)| (level, t.to_string())).collect();
    assert_eq!(
        visited,
        vec![
            (0, "(* (+ x 0) 1)".to_string()),
            (1, "(+ x 0)".to_string()),
            (1, "1".to_string()),
            (2, "x".to_string()),
            (2, "0".to_string()),
        ]
    );
}

#[test]
fn test_levels() {
    let t = tree!(("+", ("-", "a"), "b"));
    let levels = t.levels();
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[1], vec![&tree!(("-", "a")), &Tree::sym("b")]);
    assert_eq!(levels[2], vec![&Tree::sym("a")]);
}
