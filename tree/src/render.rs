//! Tree visualization.
//!
//! Provides pretty-printing of trees as ASCII diagrams, one operator or atom
//! per line.

use std::borrow::Cow;
use std::io;

use ptree::{Style, TreeItem};

use crate::Tree;

/// Wrapper implementing [`TreeItem`] for a borrowed tree.
#[derive(Clone)]
pub struct TreeView<'a> {
    tree: &'a Tree,
}

impl<'a> TreeView<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        Self { tree }
    }
}

impl TreeItem for TreeView<'_> {
    type Child = Self;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &Style) -> io::Result<()> {
        match self.tree {
            Tree::Atom(atom) => write!(f, "{atom}"),
            Tree::Node(node) => write!(f, "{}", node.op()),
        }
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Owned(self.tree.children().iter().map(TreeView::new).collect())
    }
}

impl Tree {
    /// Render as an ASCII tree string.
    ///
    /// ```text
    /// *
    /// ├─ +
    /// │  ├─ x
    /// │  └─ 0
    /// └─ 1
    /// ```
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        ptree::write_tree(&TreeView::new(self), &mut buf).expect("tree rendering failed");
        String::from_utf8(buf).expect("invalid utf8 in tree")
    }
}
