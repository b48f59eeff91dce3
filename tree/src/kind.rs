//! Runtime kinds of trees.
//!
//! Pattern predicates such as `is_type` test membership of a tree's [`Kind`]
//! in an [`EnumSet`], so `Kind::Int | Kind::Float` reads as "any number".

use enumset::{EnumSet, enum_set};

/// The runtime kind of a [`Tree`](crate::Tree).
#[derive(Debug, Hash, PartialOrd, Ord)]
#[derive(strum::Display, strum::EnumCount, strum::EnumIter, strum::IntoStaticStr)]
#[derive(enumset::EnumSetType)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
    Int,
    Float,
    Bool,
    /// The null sentinel.
    Nil,
    Sym,
    Node,
}

/// Kinds of self-evaluating atoms: everything except symbols and nodes.
pub const LITERAL_KINDS: EnumSet<Kind> = enum_set!(Kind::Int | Kind::Float | Kind::Bool | Kind::Nil);

/// Numeric kinds.
pub const NUMBER_KINDS: EnumSet<Kind> = enum_set!(Kind::Int | Kind::Float);

impl Kind {
    /// Whether values of this kind evaluate to themselves.
    pub fn is_literal(self) -> bool {
        LITERAL_KINDS.contains(self)
    }

    pub fn is_number(self) -> bool {
        NUMBER_KINDS.contains(self)
    }
}
