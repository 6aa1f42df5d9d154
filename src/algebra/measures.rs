//! Stock bindings: element count, sum, minimum and maximum.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Add;

use super::{Bounded, Measured, Monoid, NamedMeasure};

/// Counts elements: identity `0`, combine `+`, every element measures `1`.
///
/// Under this binding `measure()` of a tree equals its `breadth()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count;

impl Monoid for Count {
    type Tag = usize;

    fn identity(&self) -> usize {
        0
    }

    fn combine(&self, left: &usize, right: &usize) -> usize {
        left + right
    }
}

impl<V> Measured<V> for Count {
    fn measure(&self, _value: &V) -> usize {
        1
    }
}

impl NamedMeasure for Count {
    fn name(&self) -> &'static str {
        "count"
    }

    fn description(&self) -> &'static str {
        "Number of elements in the sequence."
    }
}

macro_rules! value_binding {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<N>(PhantomData<fn() -> N>);

        impl<N> $name<N> {
            /// Create the binding.
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<N> Default for $name<N> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<N> Clone for $name<N> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<N> Copy for $name<N> {}

        impl<N> fmt::Debug for $name<N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), std::any::type_name::<N>())
            }
        }
    };
}

value_binding!(
    /// Sums element values: identity `N::default()`, combine `+`.
    ///
    /// Tags are partial sums, and `+` is used as it is: for primitive
    /// integers a partial sum past the type's range panics in debug builds
    /// and wraps in release builds. Callers summing unbounded input check
    /// its range first.
    Sum
);

value_binding!(
    /// Smallest element: identity is the `Bounded::HIGHEST` sentinel.
    ///
    /// `measure()` of an empty tree is therefore `N::HIGHEST`, and of a
    /// non-empty tree its minimum leaf value.
    Minimum
);

value_binding!(
    /// Largest element: identity is the `Bounded::LOWEST` sentinel.
    Maximum
);

impl<N> Monoid for Sum<N>
where
    N: Clone + Default + Add<Output = N>,
{
    type Tag = N;

    fn identity(&self) -> N {
        N::default()
    }

    fn combine(&self, left: &N, right: &N) -> N {
        left.clone() + right.clone()
    }
}

impl<N> Measured<N> for Sum<N>
where
    N: Clone + Default + Add<Output = N>,
{
    fn measure(&self, value: &N) -> N {
        value.clone()
    }
}

impl<N> Monoid for Minimum<N>
where
    N: Clone + Ord + Bounded,
{
    type Tag = N;

    fn identity(&self) -> N {
        N::HIGHEST
    }

    fn combine(&self, left: &N, right: &N) -> N {
        if right < left {
            right.clone()
        } else {
            left.clone()
        }
    }
}

impl<N> Measured<N> for Minimum<N>
where
    N: Clone + Ord + Bounded,
{
    fn measure(&self, value: &N) -> N {
        value.clone()
    }
}

impl<N> Monoid for Maximum<N>
where
    N: Clone + Ord + Bounded,
{
    type Tag = N;

    fn identity(&self) -> N {
        N::LOWEST
    }

    fn combine(&self, left: &N, right: &N) -> N {
        if right > left {
            right.clone()
        } else {
            left.clone()
        }
    }
}

impl<N> Measured<N> for Maximum<N>
where
    N: Clone + Ord + Bounded,
{
    fn measure(&self, value: &N) -> N {
        value.clone()
    }
}

impl<N: 'static> NamedMeasure for Sum<N> {
    fn name(&self) -> &'static str {
        "sum"
    }

    fn description(&self) -> &'static str {
        "Sum of all element values."
    }
}

impl<N: 'static> NamedMeasure for Minimum<N> {
    fn name(&self) -> &'static str {
        "min"
    }

    fn description(&self) -> &'static str {
        "Smallest element value (type maximum when empty)."
    }
}

impl<N: 'static> NamedMeasure for Maximum<N> {
    fn name(&self) -> &'static str {
        "max"
    }

    fn description(&self) -> &'static str {
        "Largest element value (type minimum when empty)."
    }
}
