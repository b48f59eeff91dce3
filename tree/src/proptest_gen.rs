use proptest::prelude::*;

use crate::*;

/// Operator tags used by generated trees. Kept small so generated rules and
/// trees actually meet.
pub const OPS: [&str; 4] = ["+", "*", "-", "f"];

/// Symbols used by generated trees.
pub const SYMS: [&str; 3] = ["x", "y", "z"];

#[rustfmt::skip]
impl Atom {
    pub fn literal_generator() -> impl Strategy<Value = Self> {
        prop_oneof![
            (-100i64..=100).prop_map(Atom::Int),
            (-100.0..=100.0).prop_map(Atom::Float),
            any::<bool>().prop_map(Atom::Bool),
            Just(Atom::Nil),
        ]
    }

    pub fn generator() -> impl Strategy<Value = Self> {
        prop_oneof![
            3 => Self::literal_generator(),
            1 => prop::sample::select(SYMS.to_vec()).prop_map(Atom::sym),
        ]
    }
}

impl Tree {
    /// Trees up to depth 4 with arity 0..=3 nodes.
    pub fn generator() -> impl Strategy<Value = Self> {
        Atom::generator().prop_map(Tree::Atom).prop_recursive(4, 32, 3, |inner| {
            (prop::sample::select(OPS.to_vec()), prop::collection::vec(inner, 0..=3))
                .prop_map(|(op, children)| Tree::node(op, children))
        })
    }
}
