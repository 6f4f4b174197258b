//! Numeric traits that bridge real-valued measurements and raw turn values.
//!
//! * [`Real`] is implemented by the floating-point types accepted as *input* (degrees, radians, real scalars).
//! * [`Measure`] is implemented by every type an angle can be *read out* as. Floating-point targets carry the
//!   fractional part; integral targets truncate to a whole count of the unit.
//!
//! Both traits are sealed; the set of supported primitives is fixed by this crate.

use core::f64::consts::TAU;
use core::fmt::{Display, Formatter, Result};

/// Number of raw steps in one full turn (`2^32`).
pub const TURN_SIZE: u64 = 1 << 32;

/// [`TURN_SIZE`] as a float; exactly representable.
pub(crate) const TURN: f64 = TURN_SIZE as f64;

/// Angular unit a real-valued measurement is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngularUnit {
    /// Degree (`360` per turn).
    Degree,
    /// Radian (`τ` per turn).
    Radian,
}

impl AngularUnit {
    /// One full revolution expressed in this unit.
    #[inline]
    pub const fn full_turn(self) -> f64 {
        match self {
            AngularUnit::Degree => 360.0,
            AngularUnit::Radian => TAU,
        }
    }

    /// Printable symbol, shown by [`Display`].
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            AngularUnit::Degree => "Deg",
            AngularUnit::Radian => "Rad",
        }
    }
}

impl Display for AngularUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.symbol())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Floating-point type accepted for degree/radian input and real scalars.
pub trait Real: Copy + sealed::Sealed {
    /// Widens the value to `f64`, the precision all turn arithmetic is carried out in.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` result back into this type.
    fn from_f64(value: f64) -> Self;
}

impl sealed::Sealed for f32 {}
impl Real for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl sealed::Sealed for f64 {}
impl Real for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Type an angle can be converted into with [`Angle::to_degrees`](crate::Angle::to_degrees) or
/// [`Angle::to_radians`](crate::Angle::to_radians).
pub trait Measure: Copy + sealed::Sealed {
    /// Expresses `raw` turn steps as a count of `unit`.
    fn from_raw(raw: u32, unit: AngularUnit) -> Self;
}

impl Measure for f32 {
    #[inline]
    fn from_raw(raw: u32, unit: AngularUnit) -> Self {
        scaled(raw, unit) as f32
    }
}

impl Measure for f64 {
    #[inline]
    fn from_raw(raw: u32, unit: AngularUnit) -> Self {
        scaled(raw, unit)
    }
}

macro_rules! impl_integral_measure {
    ($($int:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $int {}
            impl Measure for $int {
                #[inline]
                fn from_raw(raw: u32, unit: AngularUnit) -> Self {
                    match unit {
                        // Exact: 360 * raw fits comfortably in 64 bits.
                        AngularUnit::Degree => ((raw as u64 * 360) >> 32) as $int,
                        AngularUnit::Radian => scaled(raw, unit) as $int,
                    }
                }
            }
        )+
    };
}

// 8-bit targets cannot hold 359 whole degrees.
impl_integral_measure!(u16, u32, u64, usize, i16, i32, i64, isize);

/// `raw` steps expressed in `unit`, dividing by the raw size of one unit (`2^32 / full_turn`).
///
/// Multiplying first keeps lattice values exact: `raw * full_turn` is exact for degrees and the division by `2^32`
/// only shifts the exponent.
#[inline]
pub(crate) fn scaled(raw: u32, unit: AngularUnit) -> f64 {
    raw as f64 * unit.full_turn() / TURN
}

#[inline]
pub(crate) fn rem_euclid(x: f64, modulus: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.rem_euclid(modulus)
    }
    #[cfg(not(feature = "std"))]
    {
        let r = crate::libm::fmod(x, modulus);
        if r < 0.0 {
            r + modulus
        } else {
            r
        }
    }
}

#[inline]
pub(crate) fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.round()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::round(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::PI;

    // ─────────────────────────────────────────────────────────────────────────────
    // AngularUnit
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn unit_full_turns() {
        assert_eq!(AngularUnit::Degree.full_turn(), 360.0);
        assert_abs_diff_eq!(AngularUnit::Radian.full_turn(), 2.0 * PI, epsilon = 1e-15);
    }

    #[test]
    fn unit_display_uses_symbol() {
        assert_eq!(format!("{}", AngularUnit::Degree), "Deg");
        assert_eq!(format!("{}", AngularUnit::Radian), "Rad");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Measure
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn float_measure_is_exact_on_lattice() {
        assert_eq!(f64::from_raw(1 << 31, AngularUnit::Degree), 180.0);
        assert_eq!(f64::from_raw(1 << 30, AngularUnit::Degree), 90.0);
        assert_eq!(f64::from_raw(1 << 31, AngularUnit::Radian), PI);
        assert_eq!(f32::from_raw(3 << 30, AngularUnit::Degree), 270.0);
    }

    #[test]
    fn integral_degrees_truncate() {
        // One step short of 90 degrees.
        assert_eq!(i32::from_raw((1 << 30) - 1, AngularUnit::Degree), 89);
        assert_eq!(u16::from_raw(u32::MAX, AngularUnit::Degree), 359);
    }

    #[test]
    fn integral_radians_truncate() {
        assert_eq!(i64::from_raw(1 << 31, AngularUnit::Radian), 3);
        assert_eq!(u32::from_raw(u32::MAX, AngularUnit::Radian), 6);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn rem_euclid_wraps_negative_values() {
        assert_eq!(rem_euclid(-10.0, 360.0), 350.0);
        assert_eq!(rem_euclid(725.0, 360.0), 5.0);
        assert_eq!(rem_euclid(0.0, 360.0), 0.0);
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(2.4), 2.0);
    }

    #[test]
    fn real_roundtrip_through_f64() {
        assert_eq!(f32::from_f64(1.5_f32.to_f64()), 1.5);
        assert_eq!(f64::from_f64(0.25), 0.25);
    }
}
