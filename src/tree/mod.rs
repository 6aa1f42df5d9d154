//! Measured fringe tree
//!
//! An immutable sequence stored in the leaves of a binary tree. Each node
//! caches the tag its binding assigns to the elements below it, so the
//! aggregate of a whole tree is read in O(1) from the root.
//!
//! Trees are persistent: every edit builds new nodes on top of the old ones
//! and shares everything it did not touch.
//!
//! ```text
//!        t                prepend(0, t)
//!       / \                  /    \
//!      .   3                0      t   <- old root shared
//!     / \
//!    1   2
//! ```

mod edit;
mod node;
mod traversal;
mod view;

pub use node::{Node, NodeVisitor};
pub use traversal::Fringe;
pub use view::View;

use std::fmt;
use std::sync::Arc;

use crate::algebra::Measured;

/// Handle to an immutable measured tree.
///
/// Holds the shared root node and the binding that derives tags. Cloning a
/// handle copies one `Arc` and the binding, never any nodes.
pub struct FringeTree<V, M: Measured<V>> {
    root: Arc<Node<V, M::Tag>>,
    binding: M,
}

impl<V, M: Measured<V> + Clone> Clone for FringeTree<V, M> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
            binding: self.binding.clone(),
        }
    }
}

impl<V, M: Measured<V> + Clone> FringeTree<V, M> {
    /// Tree holding no elements; its tag is `binding.identity()`.
    pub fn empty(binding: M) -> Self {
        let root = Arc::new(Node::Empty {
            tag: binding.identity(),
        });
        Self { root, binding }
    }

    /// Tree holding exactly `value`; its tag is `binding.measure(&value)`.
    pub fn leaf(binding: M, value: V) -> Self {
        let root = Arc::new(Node::Leaf {
            tag: binding.measure(&value),
            value,
        });
        Self { root, binding }
    }

    /// Join two trees: elements of `left` followed by elements of `right`.
    ///
    /// Both roots are shared, not copied. The result keeps the binding of
    /// `left`, which also combines the two tags; `right`'s binding is
    /// dropped. Both sides are expected to carry equal bindings.
    pub fn branch(left: Self, right: Self) -> Self {
        left.concat(&right)
    }

    /// Build a height-balanced tree holding `values` in order.
    ///
    /// The sequence is split at its midpoint recursively, so the depth is
    /// `⌈log2 n⌉ + 1` for `n > 0` elements.
    pub fn from_values<I>(binding: M, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let values: Vec<V> = values.into_iter().collect();
        let len = values.len();
        let empty = Self::empty(binding);
        let root = empty.build_balanced(&mut values.into_iter(), len);
        empty.with_root(root)
    }

    fn build_balanced(
        &self,
        values: &mut std::vec::IntoIter<V>,
        len: usize,
    ) -> Arc<Node<V, M::Tag>> {
        match len {
            0 => self.make_empty(),
            1 => match values.next() {
                Some(value) => self.make_leaf(value),
                None => self.make_empty(),
            },
            _ => {
                // left half takes the extra element: [1, m], [m+1, n]
                let left_len = (len + 1) / 2;
                let left = self.build_balanced(values, left_len);
                let right = self.build_balanced(values, len - left_len);
                self.make_branch(left, right)
            }
        }
    }

    /// Left subtree of a branch.
    pub fn left(&self) -> Option<Self> {
        self.root
            .children()
            .map(|(left, _)| self.with_root(Arc::clone(left)))
    }

    /// Right subtree of a branch.
    pub fn right(&self) -> Option<Self> {
        self.root
            .children()
            .map(|(_, right)| self.with_root(Arc::clone(right)))
    }

    pub(crate) fn with_root(&self, root: Arc<Node<V, M::Tag>>) -> Self {
        Self {
            root,
            binding: self.binding.clone(),
        }
    }
}

impl<V, M: Measured<V>> FringeTree<V, M> {
    /// Cached annotation of the root (O(1)).
    #[inline]
    pub fn tag(&self) -> &M::Tag {
        self.root.tag()
    }

    /// Aggregate of the whole sequence under the bound monoid.
    ///
    /// Reads the root tag; never walks the tree.
    #[inline]
    pub fn measure(&self) -> M::Tag {
        self.root.tag().clone()
    }

    /// Root node, for pattern matching on the shape.
    #[inline]
    pub fn node(&self) -> &Node<V, M::Tag> {
        &self.root
    }

    /// Shared root pointer.
    #[inline]
    pub fn root(&self) -> &Arc<Node<V, M::Tag>> {
        &self.root
    }

    /// Binding this tree derives its tags with.
    #[inline]
    pub fn binding(&self) -> &M {
        &self.binding
    }

    /// Element of a single-leaf tree.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.root.value()
    }

    /// Root is a `Leaf`.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(*self.root, Node::Leaf { .. })
    }

    /// Root is a `Branch`.
    #[inline]
    pub fn is_branch(&self) -> bool {
        matches!(*self.root, Node::Branch { .. })
    }

    /// Both handles point at the very same root node.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// Dispatch on the root shape.
    pub fn visit<Vis>(&self, visitor: &mut Vis) -> Vis::Output
    where
        Vis: NodeVisitor<V, M::Tag> + ?Sized,
    {
        self.root.accept(visitor)
    }

    fn make_empty(&self) -> Arc<Node<V, M::Tag>> {
        Arc::new(Node::Empty {
            tag: self.binding.identity(),
        })
    }

    fn make_leaf(&self, value: V) -> Arc<Node<V, M::Tag>> {
        Arc::new(Node::Leaf {
            tag: self.binding.measure(&value),
            value,
        })
    }

    fn make_branch(
        &self,
        left: Arc<Node<V, M::Tag>>,
        right: Arc<Node<V, M::Tag>>,
    ) -> Arc<Node<V, M::Tag>> {
        let tag = self.binding.combine(left.tag(), right.tag());
        Arc::new(Node::Branch { tag, left, right })
    }
}

impl<V, M: Measured<V>> Drop for FringeTree<V, M> {
    /// Releases uniquely owned nodes from a work list, so dropping a spine
    /// millions of levels deep uses constant call stack.
    fn drop(&mut self) {
        let unique_branch = matches!(Arc::get_mut(&mut self.root), Some(Node::Branch { .. }));
        if !unique_branch {
            return;
        }

        let placeholder = self.make_empty();
        let mut pending = vec![std::mem::replace(&mut self.root, placeholder)];
        while let Some(node) = pending.pop() {
            if let Ok(Node::Branch { left, right, .. }) = Arc::try_unwrap(node) {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

impl<V, M> FromIterator<V> for FringeTree<V, M>
where
    M: Measured<V> + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_values(M::default(), iter)
    }
}

impl<V: fmt::Display, M: Measured<V>> fmt::Display for FringeTree<V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.root, f)
    }
}

impl<V: fmt::Debug, M: Measured<V>> fmt::Debug for FringeTree<V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "visualize")]
impl<V, M> serde::Serialize for FringeTree<V, M>
where
    V: serde::Serialize,
    M: Measured<V>,
    M::Tag: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&*self.root, serializer)
    }
}
