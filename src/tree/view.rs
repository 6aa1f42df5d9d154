//! List views
//!
//! view_l splits off the first element, view_r the last. On a branch the
//! view recurses into the near child and re-attaches the far child onto
//! the remainder:
//!
//! ```text
//! view_l(Branch(l, r)) = Cons(v, Branch(rest, r))   where view_l(l) = Cons(v, rest)
//!                      = view_l(r)                  where view_l(l) = Nil
//! ```
//!
//! Both walk the spine with an explicit stack and rebuild it bottom-up, so
//! list-shaped trees of any depth are fine.
//!
//! `head`, `last`, `tail` and `init` fail with `FringeError::EmptySequence`
//! when the tree holds no element.

use std::sync::Arc;

use super::{FringeTree, Node};
use crate::algebra::Measured;
use crate::FringeError;

/// A tree seen from one end.
pub enum View<V, M: Measured<V>> {
    /// The tree held no element.
    Nil,
    /// An end element and every other element, in original order.
    Cons(V, FringeTree<V, M>),
}

impl<V, M: Measured<V>> View<V, M> {
    /// The view found an element.
    pub fn is_cons(&self) -> bool {
        matches!(self, View::Cons(..))
    }

    /// The tree was empty.
    pub fn is_nil(&self) -> bool {
        matches!(self, View::Nil)
    }

    /// End element, if any.
    pub fn value(&self) -> Option<&V> {
        match self {
            View::Nil => None,
            View::Cons(value, _) => Some(value),
        }
    }

    /// Remaining elements, if any.
    pub fn remainder(&self) -> Option<&FringeTree<V, M>> {
        match self {
            View::Nil => None,
            View::Cons(_, rest) => Some(rest),
        }
    }

    /// Split into `(element, remainder)`.
    pub fn into_parts(self) -> Option<(V, FringeTree<V, M>)> {
        match self {
            View::Nil => None,
            View::Cons(value, rest) => Some((value, rest)),
        }
    }
}

impl<V: std::fmt::Debug, M: Measured<V>> std::fmt::Debug for View<V, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Nil => write!(f, "Nil"),
            View::Cons(value, rest) => f.debug_tuple("Cons").field(value).field(rest).finish(),
        }
    }
}

type NodeRef<V, M> = Arc<Node<V, <M as crate::algebra::Monoid>::Tag>>;

impl<V: Clone, M: Measured<V> + Clone> FringeTree<V, M> {
    /// Split off the first element.
    pub fn view_l(&self) -> View<V, M> {
        match self.split_front(self.root()) {
            Some((value, rest)) => View::Cons(value, self.with_root(rest)),
            None => View::Nil,
        }
    }

    /// Split off the last element.
    pub fn view_r(&self) -> View<V, M> {
        match self.split_back(self.root()) {
            Some((value, rest)) => View::Cons(value, self.with_root(rest)),
            None => View::Nil,
        }
    }

    /// Every element but the first.
    pub fn tail(&self) -> Result<Self, FringeError> {
        self.view_l()
            .into_parts()
            .map(|(_, rest)| rest)
            .ok_or(FringeError::EmptySequence { operation: "tail" })
    }

    /// Every element but the last.
    pub fn init(&self) -> Result<Self, FringeError> {
        self.view_r()
            .into_parts()
            .map(|(_, rest)| rest)
            .ok_or(FringeError::EmptySequence { operation: "init" })
    }

    fn split_front(&self, node: &NodeRef<V, M>) -> Option<(V, NodeRef<V, M>)> {
        // right siblings of the left spine, innermost last
        let mut spine: Vec<&NodeRef<V, M>> = Vec::new();
        let mut current = node;
        let value = loop {
            match current.as_ref() {
                Node::Leaf { value, .. } => break value.clone(),
                Node::Branch { left, right, .. } => {
                    spine.push(right);
                    current = left;
                }
                // nothing on this side: the nearest pending sibling replaces
                // its whole branch
                Node::Empty { .. } => current = spine.pop()?,
            }
        };

        let mut rest = self.make_empty();
        while let Some(right) = spine.pop() {
            rest = self.make_branch(rest, Arc::clone(right));
        }
        Some((value, rest))
    }

    fn split_back(&self, node: &NodeRef<V, M>) -> Option<(V, NodeRef<V, M>)> {
        let mut spine: Vec<&NodeRef<V, M>> = Vec::new();
        let mut current = node;
        let value = loop {
            match current.as_ref() {
                Node::Leaf { value, .. } => break value.clone(),
                Node::Branch { left, right, .. } => {
                    spine.push(left);
                    current = right;
                }
                Node::Empty { .. } => current = spine.pop()?,
            }
        };

        let mut rest = self.make_empty();
        while let Some(left) = spine.pop() {
            rest = self.make_branch(Arc::clone(left), rest);
        }
        Some((value, rest))
    }
}

impl<V, M: Measured<V>> FringeTree<V, M> {
    /// First element.
    ///
    /// Same element `view_l` would split off, found without building the
    /// remainder.
    pub fn head(&self) -> Result<&V, FringeError> {
        self.node()
            .first()
            .ok_or(FringeError::EmptySequence { operation: "head" })
    }

    /// Last element.
    pub fn last(&self) -> Result<&V, FringeError> {
        self.node()
            .last()
            .ok_or(FringeError::EmptySequence { operation: "last" })
    }

    /// The tree holds no element.
    ///
    /// True for an `Empty` root and for branches built only from `Empty`
    /// children.
    pub fn is_empty(&self) -> bool {
        self.node().first().is_none()
    }
}
