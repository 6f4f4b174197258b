//! Macros for scalar multiplication impls.

/// Generates exact `Angle * int`, `int * Angle` and `Angle *= int` impls for each listed primitive integer.
///
/// The scalar is reduced modulo `2^32` first (`as u32`: truncation for wide types, two's complement for negative
/// values), which is exact because the turn itself is `2^32` steps.
macro_rules! impl_integer_scalar {
    ($($int:ty),+ $(,)?) => {
        $(
            impl core::ops::Mul<$int> for $crate::Angle {
                type Output = $crate::Angle;
                #[inline]
                fn mul(self, rhs: $int) -> $crate::Angle {
                    $crate::Angle::from_raw(self.raw().wrapping_mul(rhs as u32))
                }
            }

            impl core::ops::Mul<$crate::Angle> for $int {
                type Output = $crate::Angle;
                #[inline]
                fn mul(self, rhs: $crate::Angle) -> $crate::Angle {
                    rhs * self
                }
            }

            impl core::ops::MulAssign<$int> for $crate::Angle {
                #[inline]
                fn mul_assign(&mut self, rhs: $int) {
                    *self = *self * rhs;
                }
            }
        )+
    };
}

/// Generates approximate `Angle * real`, `real * Angle` and `Angle *= real` impls for each listed float type.
macro_rules! impl_real_scalar {
    ($($real:ty),+ $(,)?) => {
        $(
            impl core::ops::Mul<$real> for $crate::Angle {
                type Output = $crate::Angle;
                /// # Panics
                ///
                /// Panics if `rhs` is NaN or infinite; use `Angle::try_scale` to handle that case.
                #[inline]
                fn mul(self, rhs: $real) -> $crate::Angle {
                    match self.try_scale(rhs) {
                        Ok(angle) => angle,
                        Err(err) => panic!("{}", err),
                    }
                }
            }

            impl core::ops::Mul<$crate::Angle> for $real {
                type Output = $crate::Angle;
                #[inline]
                fn mul(self, rhs: $crate::Angle) -> $crate::Angle {
                    rhs * self
                }
            }

            impl core::ops::MulAssign<$real> for $crate::Angle {
                #[inline]
                fn mul_assign(&mut self, rhs: $real) {
                    *self = *self * rhs;
                }
            }
        )+
    };
}

pub(crate) use impl_integer_scalar;
pub(crate) use impl_real_scalar;
