//! Operator implementations for [`Angle`].
//!
//! Addition, subtraction and negation are the raw `u32` wrapping operations. Multiplication comes in an exact
//! integer form and an approximate real form, both generated by the macros in `macros.rs`.

use crate::macros::{impl_integer_scalar, impl_real_scalar};
use crate::Angle;
use core::iter::Sum;
use core::ops::*;

impl Add for Angle {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().wrapping_add(rhs.raw()))
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for Angle {
    type Output = Self;
    /// The angle that brings `self` back to zero: `(2^32 - raw) mod 2^32`.
    #[inline]
    fn neg(self) -> Self {
        Self::from_raw(self.raw().wrapping_neg())
    }
}

impl Sub for Angle {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Rem for Angle {
    type Output = Self;
    /// # Panics
    ///
    /// Panics if `rhs` does not evenly divide a full turn (see [`Angle::divides_turn`]). Use [`Angle::try_rem`] to
    /// get an error instead.
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        match self.try_rem(rhs) {
            Ok(angle) => angle,
            Err(err) => panic!("{}", err),
        }
    }
}

impl RemAssign for Angle {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Sum for Angle {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Angle::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Angle> for Angle {
    fn sum<I: Iterator<Item = &'a Angle>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl_integer_scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_real_scalar!(f32, f64);
