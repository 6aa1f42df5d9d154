//! Read-only structural traversals
//!
//! breadth  : Empty -> 0, Leaf -> 1, Branch -> breadth(l) + breadth(r)
//! depth    : Empty -> 0, Leaf -> 1, Branch -> 1 + max(depth(l), depth(r))
//! flatten  : Empty -> [], Leaf(v) -> [v], Branch -> flatten(l) ++ flatten(r)
//!
//! All three walk with an explicit stack, so one-sided trees thousands of
//! levels deep do not exhaust the call stack.

use std::iter::FusedIterator;

use super::{FringeTree, Node};
use crate::algebra::Measured;

/// Left-to-right iterator over the elements of a tree.
#[derive(Debug)]
pub struct Fringe<'a, V, T> {
    stack: Vec<&'a Node<V, T>>,
}

impl<'a, V, T> Fringe<'a, V, T> {
    pub(crate) fn new(root: &'a Node<V, T>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, V, T> Iterator for Fringe<'a, V, T> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Empty { .. } => {}
                Node::Leaf { value, .. } => return Some(value),
                Node::Branch { left, right, .. } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}

impl<V, T> FusedIterator for Fringe<'_, V, T> {}

impl<V, M: Measured<V>> FringeTree<V, M> {
    /// Iterate the elements left to right.
    pub fn iter(&self) -> Fringe<'_, V, M::Tag> {
        Fringe::new(self.node())
    }

    /// Number of leaves.
    pub fn breadth(&self) -> usize {
        self.iter().count()
    }

    /// Longest root-to-leaf path, counted in nodes (a lone leaf has depth 1).
    ///
    /// An `Empty` node adds nothing, so `branch(empty, empty)` has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.node(), 0usize)];

        while let Some((node, above)) = stack.pop() {
            match node {
                Node::Empty { .. } => max_depth = max_depth.max(above),
                Node::Leaf { .. } => max_depth = max_depth.max(above + 1),
                Node::Branch { left, right, .. } => {
                    max_depth = max_depth.max(above + 1);
                    stack.push((&**right, above + 1));
                    stack.push((&**left, above + 1));
                }
            }
        }

        max_depth
    }

    /// All elements, left to right.
    pub fn flatten(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, V, M: Measured<V>> IntoIterator for &'a FringeTree<V, M> {
    type Item = &'a V;
    type IntoIter = Fringe<'a, V, M::Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
