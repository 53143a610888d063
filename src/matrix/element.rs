//! Numeric element types a [`Matrix`](super::Matrix) can hold.

use std::fmt::{Debug, Display};

use num_traits::{NumAssign, One, Zero};
use rand::distributions::uniform::SampleUniform;

/// An arithmetic element type.
///
/// Implemented for every primitive integer and float type. All matrix
/// arithmetic goes through the type's own `+ - * /` and its `zero()`/`one()`;
/// nothing is promoted or overflow-checked.
pub trait Element:
    Copy + Send + Sync + Debug + Display + PartialEq + NumAssign + SampleUniform + 'static
{
    /// Lower bound of the range random matrices draw from: `0` for unsigned
    /// types, `-1` for everything else. The upper bound is always `1`.
    fn random_low() -> Self;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn random_low() -> Self {
                    Self::zero() - Self::one()
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn random_low() -> Self {
                    Self::zero()
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize, f32, f64);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
