//! # Measured Fringe Trees
//!
//! Immutable sequences stored in the leaves ("fringe") of a binary tree,
//! where every node caches an aggregate tag computed by a pluggable monoid.
//!
//! ## Core Pieces
//!
//! 1. **Nodes**: `Empty`, `Leaf(value)`, `Branch(left, right)`, each with its tag
//! 2. **Bindings**: a `Monoid` (identity, combine) plus a `Measured` mapping
//!    from elements to tags, injected when a tree is built
//! 3. **Edits**: prepend, append, concat; old versions stay valid and share
//!    all untouched nodes
//! 4. **Views**: split off the first or last element (head/tail, last/init)
//!
//! Result: `measure()` of any tree is an O(1) read of the root tag.
//!
//! ## Usage Example
//!
//! ```
//! use fringetree::{Count, FringeTree, Minimum};
//!
//! let t = FringeTree::branch(
//!     FringeTree::branch(FringeTree::leaf(Count, 1), FringeTree::leaf(Count, 2)),
//!     FringeTree::leaf(Count, 3),
//! );
//! assert_eq!(t.prepend(0).append(4).flatten(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(t.measure(), 3);
//!
//! let lows = FringeTree::from_values(Minimum::<i32>::new(), [4, 1, 7]);
//! assert_eq!(lows.measure(), 1);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod algebra;    // Monoid / Measured bindings and their registry
pub mod tree;       // Node shapes, traversal, edits, views
pub mod render;     // Graph description output

// Re-exports for convenience
pub use algebra::{Bounded, Count, Maximum, Measured, MeasureRegistry, Minimum, Monoid, Sum};
pub use render::{render_dot, DotRenderer, RenderConfig, RenderError};
pub use tree::{FringeTree, Node, NodeVisitor, View};

use thiserror::Error;

/// Errors raised by sequence operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FringeError {
    /// `head`, `last`, `tail` or `init` was asked of a tree with no element.
    #[error("{operation} called on an empty sequence")]
    EmptySequence {
        /// Name of the failing operation.
        operation: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = FringeError::EmptySequence { operation: "head" };
        assert_eq!(err.to_string(), "head called on an empty sequence");
    }

    #[test]
    fn test_count_measure_matches_breadth() {
        let t = FringeTree::from_values(Count, 0..17).prepend(-1).append(17);
        assert_eq!(t.measure(), t.breadth());
    }
}
