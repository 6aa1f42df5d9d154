//! Three-shape tree node
//!
//! Every shape stores its own tag:
//!   Empty          -> identity()
//!   Leaf(v)        -> measure(v)
//!   Branch(l, r)   -> combine(tag(l), tag(r))
//! Tags are computed once, when the node is built, and never change.

use std::fmt;
use std::sync::Arc;

/// Tree node, shared between trees through `Arc`.
///
/// `FringeTree` releases its nodes without recursing. A deep chain of nodes
/// held only through a bare `Arc<Node>` is dropped recursively, and the
/// derived `Debug` (and `Serialize`) walk the structure recursively as well.
#[derive(Debug)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Node<V, T> {
    /// Zero-length sequence.
    Empty {
        /// Identity tag of the binding.
        tag: T,
    },

    /// One-element sequence.
    Leaf {
        /// Measure of `value`.
        tag: T,
        /// The element.
        value: V,
    },

    /// `left` followed by `right`.
    Branch {
        /// Combination of both child tags.
        tag: T,
        /// Elements that come first.
        left: Arc<Node<V, T>>,
        /// Elements that come last.
        right: Arc<Node<V, T>>,
    },
}

impl<V, T> Node<V, T> {
    /// Cached annotation (O(1)).
    #[inline]
    pub fn tag(&self) -> &T {
        match self {
            Node::Empty { tag } => tag,
            Node::Leaf { tag, .. } => tag,
            Node::Branch { tag, .. } => tag,
        }
    }

    /// Element stored in a leaf.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Node::Leaf { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Children of a branch.
    #[inline]
    pub fn children(&self) -> Option<(&Arc<Node<V, T>>, &Arc<Node<V, T>>)> {
        match self {
            Node::Branch { left, right, .. } => Some((left, right)),
            _ => None,
        }
    }

    /// Check for the `Empty` shape.
    ///
    /// A branch whose children hold no leaves is *not* `Empty`; use
    /// `FringeTree::is_empty` for the sequence-level question.
    #[inline]
    pub fn is_empty_node(&self) -> bool {
        matches!(self, Node::Empty { .. })
    }

    /// Dispatch on the node shape.
    pub fn accept<Vis>(&self, visitor: &mut Vis) -> Vis::Output
    where
        Vis: NodeVisitor<V, T> + ?Sized,
    {
        match self {
            Node::Empty { tag } => visitor.visit_empty(tag),
            Node::Leaf { tag, value } => visitor.visit_leaf(tag, value),
            Node::Branch { tag, left, right } => visitor.visit_branch(tag, left, right),
        }
    }

    /// Leftmost element, skipping empty subtrees.
    pub(crate) fn first(&self) -> Option<&V> {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Node::Empty { .. } => {}
                Node::Leaf { value, .. } => return Some(value),
                Node::Branch { left, right, .. } => {
                    pending.push(&**right);
                    pending.push(&**left);
                }
            }
        }
        None
    }

    /// Rightmost element, skipping empty subtrees.
    pub(crate) fn last(&self) -> Option<&V> {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Node::Empty { .. } => {}
                Node::Leaf { value, .. } => return Some(value),
                Node::Branch { left, right, .. } => {
                    pending.push(&**left);
                    pending.push(&**right);
                }
            }
        }
        None
    }
}

/// One callback per node shape.
///
/// Used with [`Node::accept`] / `FringeTree::visit`. Children are handed out
/// as `Arc`s so a visitor can tell shared subtrees apart with `Arc::ptr_eq`.
pub trait NodeVisitor<V, T> {
    /// Result produced for a node.
    type Output;

    /// Called for `Empty`.
    fn visit_empty(&mut self, tag: &T) -> Self::Output;

    /// Called for `Leaf`.
    fn visit_leaf(&mut self, tag: &T, value: &V) -> Self::Output;

    /// Called for `Branch`; recursion into the children is up to the visitor.
    fn visit_branch(
        &mut self,
        tag: &T,
        left: &Arc<Node<V, T>>,
        right: &Arc<Node<V, T>>,
    ) -> Self::Output;
}

enum Piece<'a, V, T> {
    Subtree(&'a Node<V, T>),
    Text(&'static str),
}

impl<V: fmt::Display, T> fmt::Display for Node<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Subtree(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Subtree(Node::Empty { .. }) => f.write_str("()")?,
                Piece::Subtree(Node::Leaf { value, .. }) => write!(f, "{}", value)?,
                Piece::Subtree(Node::Branch { left, right, .. }) => {
                    f.write_str("(")?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Subtree(&**right));
                    pending.push(Piece::Text(" "));
                    pending.push(Piece::Subtree(&**left));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(v: i32) -> Arc<Node<i32, usize>> {
        Arc::new(Node::Leaf { tag: 1, value: v })
    }

    #[test]
    fn test_tag_is_total() {
        let empty: Node<i32, usize> = Node::Empty { tag: 0 };
        let branch = Node::Branch {
            tag: 2,
            left: leaf(1),
            right: leaf(2),
        };
        assert_eq!(*empty.tag(), 0);
        assert_eq!(*leaf(5).tag(), 1);
        assert_eq!(*branch.tag(), 2);
    }

    #[test]
    fn test_first_and_last_skip_empty_children() {
        let node = Node::Branch {
            tag: 1,
            left: Arc::new(Node::Empty { tag: 0 }),
            right: Arc::new(Node::Branch {
                tag: 1,
                left: leaf(4),
                right: Arc::new(Node::Empty { tag: 0 }),
            }),
        };
        assert_eq!(node.first(), Some(&4));
        assert_eq!(node.last(), Some(&4));
    }

    #[test]
    fn test_display_shape() {
        let node = Node::Branch {
            tag: 3,
            left: Arc::new(Node::Branch {
                tag: 2,
                left: leaf(1),
                right: leaf(2),
            }),
            right: Arc::new(Node::Empty { tag: 0 }),
        };
        assert_eq!(node.to_string(), "((1 2) ())");
    }
}
