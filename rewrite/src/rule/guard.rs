//! Guards over bindings and their combinators.

use std::fmt;
use std::sync::Arc;

use crate::pattern::Bindings;

/// Type-erased guard body.
pub type GuardFn = dyn Fn(&Bindings) -> bool + Send + Sync;

/// A condition over the bindings of a successful match.
#[derive(Clone)]
pub struct Guard(Arc<GuardFn>);

impl Guard {
    pub fn new(f: impl Fn(&Bindings) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn test(&self, bindings: &Bindings) -> bool {
        (self.0)(bindings)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

/// Holds when every guard holds. An empty list always holds.
pub fn where_all(guards: impl IntoIterator<Item = Guard>) -> Guard {
    let guards: Vec<Guard> = guards.into_iter().collect();
    Guard::new(move |bindings| guards.iter().all(|g| g.test(bindings)))
}

/// Holds when any guard holds. An empty list never holds.
pub fn where_any(guards: impl IntoIterator<Item = Guard>) -> Guard {
    let guards: Vec<Guard> = guards.into_iter().collect();
    Guard::new(move |bindings| guards.iter().any(|g| g.test(bindings)))
}

pub fn negate(guard: Guard) -> Guard {
    Guard::new(move |bindings| !guard.test(bindings))
}
