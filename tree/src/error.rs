use snafu::Snafu;

use crate::Kind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Numeric helper applied to a non-numeric tree.
    #[snafu(display("expected a number, got {kind}"))]
    NotANumber { kind: Kind },

    /// Integer arithmetic overflowed.
    #[snafu(display("integer overflow in {op}"))]
    IntegerOverflow { op: &'static str },

    /// Integer division or remainder by zero.
    #[snafu(display("division by zero"))]
    DivisionByZero,
}
