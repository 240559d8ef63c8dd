//! Arithmetic capability for primary and auxiliary values.
//!
//! `transposition` and `inversion` need to add and subtract values, and the
//! local-change detectors need a distance once a tolerance is configured.
//! Types that cannot do arithmetic still implement the trait and fail with
//! [`VariationError::UnsupportedOperation`] the first time a detector tries,
//! so a sequence of labels can be searched for repetitions with the same
//! extractor that would reject a transposition search.

use crate::error::{Result, VariationError};
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedSub, ToPrimitive};

/// Checked addition and subtraction plus a lossy view as `f64`.
pub trait Arithmetic: Sized {
    fn try_add(&self, rhs: &Self) -> Result<Self>;

    fn try_sub(&self, rhs: &Self) -> Result<Self>;

    /// Approximate magnitude, `None` when the value is not numeric
    fn to_f64(&self) -> Option<f64>;
}

/// Absolute difference `|a - b|` as `f64`, infinite when the difference
/// overflows the value type.
pub fn distance<T: Arithmetic>(a: &T, b: &T) -> Result<f64> {
    let delta = match a.try_sub(b) {
        Ok(delta) => delta,
        Err(VariationError::Overflow { .. }) => return Ok(f64::INFINITY),
        Err(err) => return Err(err),
    };
    delta
        .to_f64()
        .map(f64::abs)
        .ok_or_else(|| VariationError::unsupported("measure", "a non-numeric difference"))
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl Arithmetic for $t {
            fn try_add(&self, rhs: &Self) -> Result<Self> {
                <$t>::checked_add(*self, *rhs)
                    .ok_or_else(|| VariationError::overflow("+", self, rhs))
            }

            fn try_sub(&self, rhs: &Self) -> Result<Self> {
                <$t>::checked_sub(*self, *rhs)
                    .ok_or_else(|| VariationError::overflow("-", self, rhs))
            }

            fn to_f64(&self) -> Option<f64> {
                ToPrimitive::to_f64(self)
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Arithmetic for $t {
            fn try_add(&self, rhs: &Self) -> Result<Self> {
                Ok(self + rhs)
            }

            fn try_sub(&self, rhs: &Self) -> Result<Self> {
                Ok(self - rhs)
            }

            fn to_f64(&self) -> Option<f64> {
                Some(*self as f64)
            }
        }
    )*};
}

impl_float!(f32, f64);

macro_rules! impl_ratio {
    ($($t:ty),*) => {$(
        impl Arithmetic for Ratio<$t> {
            fn try_add(&self, rhs: &Self) -> Result<Self> {
                CheckedAdd::checked_add(self, rhs)
                    .ok_or_else(|| VariationError::overflow("+", self, rhs))
            }

            fn try_sub(&self, rhs: &Self) -> Result<Self> {
                CheckedSub::checked_sub(self, rhs)
                    .ok_or_else(|| VariationError::overflow("-", self, rhs))
            }

            fn to_f64(&self) -> Option<f64> {
                Some(*self.numer() as f64 / *self.denom() as f64)
            }
        }
    )*};
}

impl_ratio!(i32, i64);

macro_rules! impl_unsupported {
    ($($t:ty),*) => {$(
        impl Arithmetic for $t {
            fn try_add(&self, _rhs: &Self) -> Result<Self> {
                Err(VariationError::unsupported("add", format!("{:?}", self)))
            }

            fn try_sub(&self, _rhs: &Self) -> Result<Self> {
                Err(VariationError::unsupported("subtract", format!("{:?}", self)))
            }

            fn to_f64(&self) -> Option<f64> {
                None
            }
        }
    )*};
}

impl_unsupported!(String, char, bool);

impl<'a> Arithmetic for &'a str {
    fn try_add(&self, _rhs: &Self) -> Result<Self> {
        Err(VariationError::unsupported("add", format!("{:?}", self)))
    }

    fn try_sub(&self, _rhs: &Self) -> Result<Self> {
        Err(VariationError::unsupported("subtract", format!("{:?}", self)))
    }

    fn to_f64(&self) -> Option<f64> {
        None
    }
}

// Aux type of items that carry no auxiliary attribute.
impl Arithmetic for () {
    fn try_add(&self, _rhs: &Self) -> Result<Self> {
        Ok(())
    }

    fn try_sub(&self, _rhs: &Self) -> Result<Self> {
        Ok(())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(0.0)
    }
}
