//! Ordered binding environment produced by a successful match.

use std::ops::{Deref, Index};
use std::sync::Arc;

use arbor_tree::Tree;
use smallvec::SmallVec;

use crate::Result;
use crate::error::ArityMismatchSnafu;

/// Values bound by a match, in slot order.
///
/// Positional access goes through indexing or [`Bindings::unpack`]; named
/// variables can also be looked up with [`Bindings::by_name`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: SmallVec<[Tree; 4]>,
    names: SmallVec<[(Arc<str>, usize); 2]>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, tree: Tree) {
        self.values.push(tree);
    }

    /// Bind a named variable. The first occurrence allocates a slot; later
    /// occurrences overwrite it.
    pub(crate) fn bind_named(&mut self, name: &Arc<str>, tree: Tree) {
        match self.names.iter().find(|(n, _)| n == name) {
            Some(&(_, slot)) => self.values[slot] = tree,
            None => {
                self.names.push((name.clone(), self.values.len()));
                self.values.push(tree);
            }
        }
    }

    pub fn as_slice(&self) -> &[Tree] {
        &self.values
    }

    /// Value bound to a named variable.
    pub fn by_name(&self, name: &str) -> Option<&Tree> {
        self.names.iter().find(|(n, _)| &**n == name).map(|&(_, slot)| &self.values[slot])
    }

    /// Borrow the bindings as a fixed-size array.
    ///
    /// ```
    /// use arbor_rewrite::prelude::*;
    /// use arbor_tree::tree;
    ///
    /// let b = node("+", [wildcard(), wildcard()]).match_tree(&tree!(("+", 1, 2))).unwrap();
    /// let [a, c] = b.unpack::<2>()?;
    /// assert_eq!((a, c), (&Tree::int(1), &Tree::int(2)));
    /// assert!(b.unpack::<3>().is_err());
    /// # Ok::<(), arbor_rewrite::Error>(())
    /// ```
    pub fn unpack<const N: usize>(&self) -> Result<&[Tree; N]> {
        self.values.as_slice().try_into().map_err(|_| ArityMismatchSnafu { expected: N, actual: self.len() }.build())
    }

    pub fn into_vec(self) -> Vec<Tree> {
        self.values.into_vec()
    }
}

impl Deref for Bindings {
    type Target = [Tree];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl Index<usize> for Bindings {
    type Output = Tree;

    fn index(&self, index: usize) -> &Tree {
        &self.values[index]
    }
}

impl Index<&str> for Bindings {
    type Output = Tree;

    /// # Panics
    ///
    /// Panics if no variable with this name was bound.
    fn index(&self, name: &str) -> &Tree {
        match self.by_name(name) {
            Some(tree) => tree,
            None => panic!("no binding named `{name}`"),
        }
    }
}
