//! Rules and the fluent rule builder.
//!
//! A [`Rule`] is a callable `Tree -> Result<Tree>` that returns its input
//! unchanged when it does not apply. Rules built from patterns run three
//! steps: match, guard, action.
//!
//! ```
//! use arbor_rewrite::prelude::*;
//! use arbor_tree::tree;
//!
//! let fold = when("+", [is_literal(), is_literal()]).try_then(|b| {
//!     let [a, c] = b.unpack::<2>()?;
//!     Ok::<_, Error>(a.checked_add(c)?)
//! });
//! assert_eq!(fold.apply(&tree!(("+", 3, 4))).unwrap(), Tree::int(7));
//! assert_eq!(fold.apply(&tree!(("+", "x", 4))).unwrap(), tree!(("+", "x", 4)));
//! ```

pub mod action;
pub mod guard;

use std::fmt;
use std::sync::Arc;

use arbor_tree::Tree;

use crate::pattern::{Bindings, Pattern, node};
use crate::{BoxError, Result};

pub use action::Action;
pub use guard::{Guard, negate, where_all, where_any};

/// Type-erased rule body.
pub type RuleFn = dyn Fn(&Tree) -> Result<Tree> + Send + Sync;

/// A tree transformation. Returns its input unchanged when it does not apply.
#[derive(Clone)]
pub struct Rule {
    name: Arc<str>,
    apply: Arc<RuleFn>,
}

impl Rule {
    /// Wrap an arbitrary function as a rule.
    pub fn new(name: impl Into<Arc<str>>, apply: impl Fn(&Tree) -> Result<Tree> + Send + Sync + 'static) -> Self {
        Self { name: name.into(), apply: Arc::new(apply) }
    }

    /// Rename the rule. Names appear in logs and in action errors.
    pub fn named(self, name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into(), ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, tree: &Tree) -> Result<Tree> {
        (self.apply)(tree)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

/// Start a rule matching a node with operator `op` and the given children.
pub fn when<P: Into<Pattern>>(op: impl Into<Arc<str>>, children: impl IntoIterator<Item = P>) -> RuleBuilder {
    RuleBuilder::new(node(op, children))
}

/// Start a rule from an arbitrary pattern.
pub fn when_pattern(pattern: impl Into<Pattern>) -> RuleBuilder {
    RuleBuilder::new(pattern.into())
}

/// Pattern plus optional guard, waiting for an action.
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    pattern: Pattern,
    guard: Option<Guard>,
    name: Option<Arc<str>>,
}

impl RuleBuilder {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern, guard: None, name: None }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Attach a guard over the bindings. A failing guard counts as a mismatch.
    ///
    /// Calling this again replaces the previous guard; combine guards with
    /// [`where_all`] / [`where_any`] instead.
    pub fn guard(self, guard: impl Fn(&Bindings) -> bool + Send + Sync + 'static) -> Self {
        self.guard_with(Guard::new(guard))
    }

    pub fn guard_with(self, guard: Guard) -> Self {
        Self { guard: Some(guard), ..self }
    }

    /// Name the rule. Defaults to the pattern's display form.
    pub fn named(self, name: impl Into<Arc<str>>) -> Self {
        Self { name: Some(name.into()), ..self }
    }

    /// Finish with a replacement computed from the bindings.
    pub fn then(self, action: impl Fn(&Bindings) -> Tree + Send + Sync + 'static) -> Rule {
        self.then_action(Action::compute(action))
    }

    /// Finish with a constant replacement.
    pub fn then_const(self, value: impl Into<Tree>) -> Rule {
        self.then_action(Action::constant(value))
    }

    /// Finish with a fallible replacement. Errors reach the caller of
    /// [`rewrite`](crate::rewrite) wrapped in [`Error::Action`](crate::Error::Action).
    pub fn try_then<E>(self, action: impl Fn(&Bindings) -> Result<Tree, E> + Send + Sync + 'static) -> Rule
    where
        E: Into<BoxError>,
    {
        self.then_action(Action::try_compute(action))
    }

    pub fn then_action(self, action: Action) -> Rule {
        let RuleBuilder { pattern, guard, name } = self;
        let name = name.unwrap_or_else(|| pattern.to_string().into());
        let rule_name = name.clone();

        Rule::new(name, move |tree| {
            let Some(bindings) = pattern.match_tree(tree) else {
                return Ok(tree.clone());
            };
            if let Some(guard) = &guard
                && !guard.test(&bindings)
            {
                return Ok(tree.clone());
            }
            action.run(&rule_name, &bindings)
        })
    }
}
