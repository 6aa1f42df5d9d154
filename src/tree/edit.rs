//! Persistent edits
//!
//! prepend(v, t): Empty -> Leaf(v), otherwise Branch(Leaf(v), t)
//! append(v, t):  Empty -> Leaf(v), otherwise Branch(t, Leaf(v))
//! concat(l, r):  Branch(l, r)
//!
//! The existing root is always reused as a whole child, so an edit allocates
//! at most two nodes. Nothing is rebalanced: n one-sided edits produce a
//! spine n levels deep.

use std::sync::Arc;

use super::{FringeTree, Node};
use crate::algebra::Measured;

impl<V, M: Measured<V> + Clone> FringeTree<V, M> {
    /// New tree holding `value` followed by every element of `self`.
    pub fn prepend(&self, value: V) -> Self {
        let leaf = self.make_leaf(value);
        let root = match self.node() {
            Node::Empty { .. } => leaf,
            _ => self.make_branch(leaf, Arc::clone(self.root())),
        };
        self.with_root(root)
    }

    /// New tree holding every element of `self` followed by `value`.
    pub fn append(&self, value: V) -> Self {
        let leaf = self.make_leaf(value);
        let root = match self.node() {
            Node::Empty { .. } => leaf,
            _ => self.make_branch(Arc::clone(self.root()), leaf),
        };
        self.with_root(root)
    }

    /// New tree holding the elements of `self` followed by those of `other`.
    ///
    /// O(1) apart from one `combine`; both trees are shared as they are,
    /// empty ones included. The result keeps the binding of `self`, which
    /// also combines the two tags, so `other` is expected to carry an equal
    /// binding.
    pub fn concat(&self, other: &Self) -> Self {
        let root = self.make_branch(Arc::clone(self.root()), Arc::clone(other.root()));
        self.with_root(root)
    }
}
