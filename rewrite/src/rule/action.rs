use std::fmt;
use std::sync::Arc;

use arbor_tree::Tree;
use snafu::ResultExt;

use crate::error::{ActionSnafu, ArityMismatchSnafu};
use crate::pattern::Bindings;
use crate::{BoxError, Result};

/// Type-erased action body.
pub type ActionFn = dyn Fn(&Bindings) -> Result<Tree, BoxError> + Send + Sync;

/// What a matching rule produces.
#[derive(Clone)]
pub enum Action {
    /// A fixed replacement tree.
    Const(Tree),
    /// A replacement computed from the bindings.
    Compute(Arc<ActionFn>),
}

impl Action {
    pub fn constant(value: impl Into<Tree>) -> Self {
        Action::Const(value.into())
    }

    pub fn compute(f: impl Fn(&Bindings) -> Tree + Send + Sync + 'static) -> Self {
        Action::Compute(Arc::new(move |bindings| Ok(f(bindings))))
    }

    pub fn try_compute<E: Into<BoxError>>(f: impl Fn(&Bindings) -> Result<Tree, E> + Send + Sync + 'static) -> Self {
        Action::Compute(Arc::new(move |bindings| f(bindings).map_err(Into::into)))
    }

    /// Replace with the value in binding slot `slot`.
    pub fn binding(slot: usize) -> Self {
        Action::try_compute(move |bindings| match bindings.get(slot) {
            Some(tree) => Ok(tree.clone()),
            None => ArityMismatchSnafu { expected: slot + 1, actual: bindings.len() }.fail(),
        })
    }

    pub fn run(&self, rule: &str, bindings: &Bindings) -> Result<Tree> {
        match self {
            Action::Const(value) => Ok(value.clone()),
            Action::Compute(f) => f(bindings).context(ActionSnafu { rule }),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Const(value) => f.debug_tuple("Const").field(&format_args!("{value}")).finish(),
            Action::Compute(_) => f.write_str("Compute(..)"),
        }
    }
}
