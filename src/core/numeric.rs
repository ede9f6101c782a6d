//! Typed predicates for native Rust numbers.

use serde_json::Number;

pub trait Numeric: Copy {
    /// Remainder by two is zero. Sign does not matter.
    fn is_even(self) -> bool;

    /// No fractional part. Always true for integer types.
    fn is_whole(self) -> bool;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_even(self) -> bool {
                    self.rem_euclid(2) == 0
                }

                #[inline]
                fn is_whole(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_even(self) -> bool {
                    self.is_finite() && self % 2.0 == 0.0
                }

                #[inline]
                fn is_whole(self) -> bool {
                    self.is_finite() && self.fract() == 0.0
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// Even test for a JSON number, using the integer path when the number has
/// an exact integer representation.
pub fn number_is_even(n: &Number) -> bool {
    if let Some(i) = n.as_i64() {
        i.is_even()
    } else if let Some(u) = n.as_u64() {
        u.is_even()
    } else {
        n.as_f64().is_some_and(|f| f.is_even())
    }
}

pub fn number_is_whole(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        true
    } else {
        n.as_f64().is_some_and(|f| f.is_whole())
    }
}
