//! Numeric bounds used as identity sentinels by `Minimum` and `Maximum`.

/// Types with a least and a greatest value.
pub trait Bounded: Sized {
    /// Smallest representable value; identity of `max`.
    const LOWEST: Self;
    /// Largest representable value; identity of `min`.
    const HIGHEST: Self;
}

macro_rules! impl_bounded {
    ($($t:ty),* $(,)?) => {
        $(
            impl Bounded for $t {
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    const LOWEST: Self = '\0';
    const HIGHEST: Self = char::MAX;
}
