//! Monoid and measure bindings
//!
//! A tree never knows what its tags mean. It only asks the binding it was
//! built with for three things:
//! - `identity()` for an empty sequence
//! - `measure(value)` for a single element
//! - `combine(left, right)` for a concatenation
//!
//! Bindings are plain values passed to the tree at construction time, so two
//! trees over the same element type can carry different aggregates side by
//! side and a binding can be tested on its own.

mod bounded;
mod measures;
mod registry;

pub use bounded::Bounded;
pub use measures::{Count, Maximum, Minimum, Sum};
pub use registry::{MeasureInfo, MeasureRegistry, NamedMeasure};

/// Associative combine operation with a two-sided identity.
///
/// Implementations must satisfy, for all tags `a`, `b`, `c`:
/// - `combine(a, combine(b, c)) == combine(combine(a, b), c)`
/// - `combine(identity(), a) == a == combine(a, identity())`
pub trait Monoid {
    /// Annotation cached on every node.
    type Tag: Clone;

    /// Tag of the empty sequence.
    fn identity(&self) -> Self::Tag;

    /// Tag of `left` followed by `right`.
    fn combine(&self, left: &Self::Tag, right: &Self::Tag) -> Self::Tag;

    /// Fold a sequence of tags left to right, starting from `identity()`.
    fn concat_all<'a, I>(&self, tags: I) -> Self::Tag
    where
        I: IntoIterator<Item = &'a Self::Tag>,
        Self::Tag: 'a,
    {
        tags.into_iter()
            .fold(self.identity(), |acc, tag| self.combine(&acc, tag))
    }
}

/// Maps an element to its intrinsic tag.
pub trait Measured<V>: Monoid {
    /// Tag of the one-element sequence `[value]`.
    fn measure(&self, value: &V) -> Self::Tag;
}

/// Product binding: both aggregates are maintained in one tree.
impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    type Tag = (A::Tag, B::Tag);

    fn identity(&self) -> Self::Tag {
        (self.0.identity(), self.1.identity())
    }

    fn combine(&self, left: &Self::Tag, right: &Self::Tag) -> Self::Tag {
        (
            self.0.combine(&left.0, &right.0),
            self.1.combine(&left.1, &right.1),
        )
    }
}

impl<V, A: Measured<V>, B: Measured<V>> Measured<V> for (A, B) {
    fn measure(&self, value: &V) -> Self::Tag {
        (self.0.measure(value), self.1.measure(value))
    }
}
