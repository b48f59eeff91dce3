use crate::{Tree, tree};

#[test]
fn test_render_nested() {
    let t = tree!(("*", ("+", "x", 0), 1));
    let rendered = t.render();
    println!("Tree output:\n{rendered}");

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "*");
    assert!(lines[1].ends_with("+"));
    assert!(lines[2].ends_with("x"));
    assert!(lines[3].ends_with("0"));
    assert!(lines[4].ends_with("1"));
}

#[test]
fn test_render_atom() {
    assert_eq!(Tree::float(2.5).render().trim_end(), "2.5");
    assert_eq!(Tree::nil().render().trim_end(), "nil");
}

#[test]
fn test_macro_braced_children() {
    let t = tree!(("if", ("<", "a", {-1}), true, { nil_marker() }));
    assert_eq!(t.to_string(), "(if (< a -1) true nil)");
}

fn nil_marker() -> Tree {
    Tree::nil()
}
