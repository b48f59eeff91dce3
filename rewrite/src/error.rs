use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type carried by fallible user actions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// A fallible action returned an error. The source is the action's own error.
    #[snafu(display("action of rule {rule} failed"))]
    Action { rule: String, source: BoxError },

    /// Bindings were unpacked into the wrong number of slots.
    #[snafu(display("expected {expected} bindings, got {actual}"))]
    ArityMismatch { expected: usize, actual: usize },

    /// The configured rewrite limit was reached before a fixed point.
    #[snafu(display("rewrite limit of {limit} exceeded"))]
    RewriteLimitExceeded { limit: usize },

    /// Numeric helper failed inside an action.
    #[snafu(display("tree operation failed"))]
    Tree { source: arbor_tree::Error },
}

impl From<arbor_tree::Error> for Error {
    fn from(source: arbor_tree::Error) -> Self {
        Error::Tree { source }
    }
}
