//! Leaf values of a tree.
//!
//! Atoms compare structurally. Floats are compared in canonical form: every
//! NaN equals every other NaN and `-0.0 == 0.0`. Plain IEEE equality would make
//! a NaN-carrying tree unequal to itself, and the rewrite engine would then
//! report a change on every scan and never reach its fixed point.
//!
//! Integers and floats are distinct: `Int(1) != Float(1.0)`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::discriminant;
use std::sync::Arc;

use snafu::ensure;

use crate::error::{DivisionByZeroSnafu, IntegerOverflowSnafu, NotANumberSnafu};
use crate::{Kind, Result};

/// A self-contained leaf value.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Atom {
    Int(i64),
    Float(f64),
    Bool(bool),
    /// The null sentinel.
    Nil,
    /// A symbol such as `x` or `sin`.
    Sym(Arc<str>),
}

/// Bit pattern of a float after canonicalization.
#[inline]
fn canonical_bits(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else if x == 0.0 {
        0.0f64.to_bits()
    } else {
        x.to_bits()
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom::Int(a), Atom::Int(b)) => a == b,
            (Atom::Float(a), Atom::Float(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Atom::Bool(a), Atom::Bool(b)) => a == b,
            (Atom::Nil, Atom::Nil) => true,
            (Atom::Sym(a), Atom::Sym(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(self).hash(state);
        match self {
            Atom::Int(v) => v.hash(state),
            Atom::Float(v) => canonical_bits(*v).hash(state),
            Atom::Bool(v) => v.hash(state),
            Atom::Nil => {}
            Atom::Sym(s) => s.hash(state),
        }
    }
}

/// Numeric operands after promotion.
enum Operands {
    Int(i64, i64),
    Float(f64, f64),
}

impl Atom {
    pub fn sym(name: impl Into<Arc<str>>) -> Self {
        Atom::Sym(name.into())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Atom::Int(_) => Kind::Int,
            Atom::Float(_) => Kind::Float,
            Atom::Bool(_) => Kind::Bool,
            Atom::Nil => Kind::Nil,
            Atom::Sym(_) => Kind::Sym,
        }
    }

    /// Self-evaluating atoms: numbers, booleans and nil. Symbols are not.
    pub fn is_literal(&self) -> bool {
        self.kind().is_literal()
    }

    pub fn is_number(&self) -> bool {
        self.kind().is_number()
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Atom::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value as a float, promoting integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Atom::Int(v) => Some(*v as f64),
            Atom::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Atom::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_sym(&self) -> Option<&str> {
        match self {
            Atom::Sym(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this atom is an integer or float zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Atom::Int(v) => *v == 0,
            Atom::Float(v) => *v == 0.0,
            _ => false,
        }
    }

    /// Check if this atom is an integer or float one.
    pub fn is_one(&self) -> bool {
        match self {
            Atom::Int(v) => *v == 1,
            Atom::Float(v) => *v == 1.0,
            _ => false,
        }
    }

    fn operands(&self, rhs: &Atom) -> Result<Operands> {
        match (self, rhs) {
            (Atom::Int(a), Atom::Int(b)) => Ok(Operands::Int(*a, *b)),
            _ => {
                let a = self.as_float().ok_or_else(|| NotANumberSnafu { kind: self.kind() }.build())?;
                let b = rhs.as_float().ok_or_else(|| NotANumberSnafu { kind: rhs.kind() }.build())?;
                Ok(Operands::Float(a, b))
            }
        }
    }

    /// Add two numbers. Integer + integer stays integer; anything else is float.
    pub fn checked_add(&self, rhs: &Atom) -> Result<Atom> {
        match self.operands(rhs)? {
            Operands::Int(a, b) => a.checked_add(b).map(Atom::Int).ok_or_else(|| IntegerOverflowSnafu { op: "add" }.build()),
            Operands::Float(a, b) => Ok(Atom::Float(a + b)),
        }
    }

    pub fn checked_sub(&self, rhs: &Atom) -> Result<Atom> {
        match self.operands(rhs)? {
            Operands::Int(a, b) => a.checked_sub(b).map(Atom::Int).ok_or_else(|| IntegerOverflowSnafu { op: "sub" }.build()),
            Operands::Float(a, b) => Ok(Atom::Float(a - b)),
        }
    }

    pub fn checked_mul(&self, rhs: &Atom) -> Result<Atom> {
        match self.operands(rhs)? {
            Operands::Int(a, b) => a.checked_mul(b).map(Atom::Int).ok_or_else(|| IntegerOverflowSnafu { op: "mul" }.build()),
            Operands::Float(a, b) => Ok(Atom::Float(a * b)),
        }
    }

    /// Divide two numbers.
    ///
    /// Integer division truncates toward zero and fails on a zero divisor.
    /// Float division follows IEEE semantics.
    pub fn checked_div(&self, rhs: &Atom) -> Result<Atom> {
        match self.operands(rhs)? {
            Operands::Int(a, b) => {
                ensure!(b != 0, DivisionByZeroSnafu);
                a.checked_div(b).map(Atom::Int).ok_or_else(|| IntegerOverflowSnafu { op: "div" }.build())
            }
            Operands::Float(a, b) => Ok(Atom::Float(a / b)),
        }
    }

    pub fn checked_neg(&self) -> Result<Atom> {
        match self {
            Atom::Int(v) => v.checked_neg().map(Atom::Int).ok_or_else(|| IntegerOverflowSnafu { op: "neg" }.build()),
            Atom::Float(v) => Ok(Atom::Float(-v)),
            other => NotANumberSnafu { kind: other.kind() }.fail(),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Int(v) => write!(f, "{v}"),
            // Debug keeps the trailing `.0` so floats stay distinguishable from ints.
            Atom::Float(v) => write!(f, "{v:?}"),
            Atom::Bool(v) => write!(f, "{v}"),
            Atom::Nil => f.write_str("nil"),
            Atom::Sym(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Atom {
    fn from(v: i64) -> Self {
        Atom::Int(v)
    }
}

impl From<i32> for Atom {
    fn from(v: i32) -> Self {
        Atom::Int(v as i64)
    }
}

impl From<f64> for Atom {
    fn from(v: f64) -> Self {
        Atom::Float(v)
    }
}

impl From<bool> for Atom {
    fn from(v: bool) -> Self {
        Atom::Bool(v)
    }
}

impl From<&str> for Atom {
    fn from(v: &str) -> Self {
        Atom::Sym(v.into())
    }
}

impl From<String> for Atom {
    fn from(v: String) -> Self {
        Atom::Sym(v.into())
    }
}

impl<T: Into<Atom>> From<Option<T>> for Atom {
    fn from(v: Option<T>) -> Self {
        v.map_or(Atom::Nil, Into::into)
    }
}
