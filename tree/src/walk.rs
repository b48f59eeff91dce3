//! Breadth-first traversal and shape metrics.

use std::collections::VecDeque;

use crate::Tree;

/// Breadth-first iterator over a tree, yielding `(level, subtree)` pairs.
///
/// The root is level 0. Children are visited left to right.
pub struct BreadthFirst<'a> {
    queue: VecDeque<(usize, &'a Tree)>,
}

impl<'a> BreadthFirst<'a> {
    pub fn new(root: &'a Tree) -> Self {
        Self { queue: VecDeque::from([(0, root)]) }
    }
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = (usize, &'a Tree);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, tree) = self.queue.pop_front()?;
        self.queue.extend(tree.children().iter().map(|child| (level + 1, child)));
        Some((level, tree))
    }
}

impl Tree {
    pub fn breadth_first(&self) -> BreadthFirst<'_> {
        BreadthFirst::new(self)
    }

    /// Subtrees grouped by level, root first.
    pub fn levels(&self) -> Vec<Vec<&Tree>> {
        let mut levels: Vec<Vec<&Tree>> = Vec::new();
        for (level, tree) in self.breadth_first() {
            if level == levels.len() {
                levels.push(Vec::new());
            }
            levels[level].push(tree);
        }
        levels
    }

    /// Total number of atoms and nodes.
    pub fn size(&self) -> usize {
        self.breadth_first().count()
    }

    /// Number of levels. A lone atom has depth 1.
    pub fn depth(&self) -> usize {
        self.breadth_first().last().map_or(0, |(level, _)| level + 1)
    }

    /// Largest number of subtrees on a single level.
    pub fn width(&self) -> usize {
        self.levels().iter().map(Vec::len).max().unwrap_or(0)
    }
}
