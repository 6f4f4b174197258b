//! The [`Angle`] value type.
//!
//! # Design overview
//!
//! * **Representation:** one full turn is the whole `u32` range. Raw value `0` is 0°, and each raw step is
//!   `360 / 2^32` degrees. Adding one to `u32::MAX` lands back on 0°, so the integer's own wraparound *is* the
//!   modular arithmetic of the circle; no explicit reduction is ever needed.
//! * **Lattice points:** the turn is a power of two, so every binary subdivision of it (½, ¼, ⅛, …) has an exact raw
//!   value. 0°, 45°, 90°, 180°, 270° and π radians therefore convert without error in both directions.
//! * **Two multiplication paths:** integer scalars multiply raw values with `wrapping_mul` and are exact. Real
//!   scalars go through `f64` and accumulate rounding error; prefer the integer path for whole numbers.
//!
//! ## Edge cases
//!
//! NaN and `±∞` have no position on a circle. The `try_` constructors reject them with
//! [`AngleError::NonFiniteMeasure`]; the infallible constructors panic.
//!
//! ## Examples
//!
//! ```rust
//! use turn_angle::Angle;
//!
//! let a = Angle::from_degrees(349.0) + Angle::from_degrees(18.0);
//! assert_eq!(a, Angle::from_degrees(7.0));
//! assert_eq!(Angle::from_degrees(45.0) * 2, Angle::QUARTER_TURN);
//! assert_eq!(Angle::from_radians(core::f64::consts::PI), Angle::HALF_TURN);
//! ```

use crate::error::{AngleError, AngleResult};
use crate::real::{self, AngularUnit, Measure, Real, TURN, TURN_SIZE};
use core::fmt::{Display, Formatter};

/// A point on the circle, stored as a fraction of a full turn in `2^32` steps.
///
/// Equality and ordering compare raw values exactly; use [`Angle::is_near`] for tolerance-based comparison.
/// The default value is [`Angle::ZERO`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(u32);

impl Angle {
    /// 0°.
    pub const ZERO: Angle = Angle(0);
    /// 45°, an eighth of a turn.
    pub const EIGHTH_TURN: Angle = Angle(1 << 29);
    /// 90°, a quarter of a turn.
    pub const QUARTER_TURN: Angle = Angle(1 << 30);
    /// 180°, half a turn.
    pub const HALF_TURN: Angle = Angle(1 << 31);
    /// 270°, three quarters of a turn.
    pub const THREE_QUARTER_TURN: Angle = Angle(3 << 30);
    /// The largest representable angle, one raw step short of a full turn.
    pub const MAX: Angle = Angle(u32::MAX);
    /// Number of raw steps in one full turn.
    pub const TURN_SIZE: u64 = TURN_SIZE;

    /// Wraps a raw turn value.
    ///
    /// ```rust
    /// use turn_angle::Angle;
    /// assert_eq!(Angle::from_raw(1 << 31), Angle::HALF_TURN);
    /// ```
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw turn value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Builds an angle from degrees, wrapping any real input into `[0, 360)` first.
    ///
    /// ```rust
    /// use turn_angle::Angle;
    /// assert_eq!(Angle::from_degrees(-10.0), Angle::from_degrees(350.0));
    /// assert_eq!(Angle::from_degrees(90.0_f32), Angle::QUARTER_TURN);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `degrees` is NaN or infinite. See [`Angle::try_from_degrees`].
    #[inline]
    pub fn from_degrees<R: Real>(degrees: R) -> Self {
        match Self::try_from_degrees(degrees) {
            Ok(angle) => angle,
            Err(err) => panic!("{}", err),
        }
    }

    /// Builds an angle from radians, wrapping any real input into `[0, τ)` first.
    ///
    /// # Panics
    ///
    /// Panics if `radians` is NaN or infinite. See [`Angle::try_from_radians`].
    #[inline]
    pub fn from_radians<R: Real>(radians: R) -> Self {
        match Self::try_from_radians(radians) {
            Ok(angle) => angle,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible form of [`Angle::from_degrees`].
    ///
    /// ```rust
    /// use turn_angle::{Angle, AngleError};
    /// assert!(matches!(
    ///     Angle::try_from_degrees(f64::NAN),
    ///     Err(AngleError::NonFiniteMeasure { .. })
    /// ));
    /// ```
    #[inline]
    pub fn try_from_degrees<R: Real>(degrees: R) -> AngleResult<Self> {
        Self::try_from_measure(degrees.to_f64(), AngularUnit::Degree)
    }

    /// Fallible form of [`Angle::from_radians`].
    #[inline]
    pub fn try_from_radians<R: Real>(radians: R) -> AngleResult<Self> {
        Self::try_from_measure(radians.to_f64(), AngularUnit::Radian)
    }

    fn try_from_measure(value: f64, unit: AngularUnit) -> AngleResult<Self> {
        if !value.is_finite() {
            log::debug!("rejecting non-finite {} input {}", unit, value);
            return Err(AngleError::NonFiniteMeasure { unit, value });
        }
        let full = unit.full_turn();
        let wrapped = real::rem_euclid(value, full);
        Ok(Self::from_turn_steps(wrapped / full * TURN))
    }

    /// Rounds a step count in `[0, 2^32]` to the nearest raw value; a full turn wraps to zero.
    #[inline]
    fn from_turn_steps(steps: f64) -> Self {
        Self(real::round(steps) as u64 as u32)
    }

    /// Multiplies by a real scalar, rejecting NaN and infinite factors.
    ///
    /// The product is taken in `f64`, reduced into one turn and rounded to the nearest raw step. It carries
    /// floating-point error for arbitrary angles; multiply by an integer when the factor is whole.
    ///
    /// ```rust
    /// use turn_angle::Angle;
    /// assert_eq!(Angle::EIGHTH_TURN.try_scale(-6.0).unwrap(), Angle::QUARTER_TURN);
    /// ```
    pub fn try_scale<R: Real>(self, factor: R) -> AngleResult<Self> {
        let factor = factor.to_f64();
        if !factor.is_finite() {
            log::debug!("rejecting non-finite scale factor {}", factor);
            return Err(AngleError::NonFiniteScalar { value: factor });
        }
        let steps = real::rem_euclid(self.0 as f64 * factor, TURN);
        Ok(Self::from_turn_steps(steps))
    }

    /// Remainder modulo an angle that evenly divides the turn (a power-of-two raw value).
    ///
    /// The divisor is checked before anything is computed: `120° % 50°` has no meaningful wrapped answer and is
    /// rejected rather than silently returning `raw % raw`.
    ///
    /// ```rust
    /// use turn_angle::{Angle, AngleError};
    /// let a = Angle::from_degrees(120.0);
    /// assert_eq!(a.try_rem(Angle::QUARTER_TURN).unwrap(), Angle::from_degrees(30.0));
    /// assert!(matches!(
    ///     a.try_rem(Angle::from_degrees(50.0)),
    ///     Err(AngleError::InvalidModulusDivisor { .. })
    /// ));
    /// ```
    pub fn try_rem(self, divisor: Angle) -> AngleResult<Self> {
        if !divisor.divides_turn() {
            log::debug!("rejecting modulus by {:#010x}", divisor.0);
            return Err(AngleError::InvalidModulusDivisor { raw: divisor.0 });
        }
        Ok(Self(self.0 % divisor.0))
    }

    /// Whether some whole multiple of this angle is exactly one turn.
    ///
    /// `2^32` has no odd factors, so this holds exactly for the non-zero powers of two.
    #[inline]
    pub const fn divides_turn(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Converts to degrees in `[0, 360)`.
    ///
    /// Floating-point targets divide the raw value by the raw size of one degree and are exact on lattice points;
    /// elsewhere they carry rounding error. Integral targets give the truncated whole-degree count.
    ///
    /// ```rust
    /// use turn_angle::Angle;
    /// assert_eq!(Angle::HALF_TURN.to_degrees::<f64>(), 180.0);
    /// assert_eq!(Angle::from_degrees(270.0).to_degrees::<i32>(), 270);
    /// assert_eq!(Angle::from_degrees(12.7).to_degrees::<u16>(), 12);
    /// ```
    #[inline]
    pub fn to_degrees<T: Measure>(self) -> T {
        T::from_raw(self.0, AngularUnit::Degree)
    }

    /// Converts to radians in `[0, τ)`. Integral targets truncate.
    ///
    /// ```rust
    /// use turn_angle::Angle;
    /// assert_eq!(Angle::HALF_TURN.to_radians::<f64>(), core::f64::consts::PI);
    /// ```
    #[inline]
    pub fn to_radians<T: Measure>(self) -> T {
        T::from_raw(self.0, AngularUnit::Radian)
    }

    /// Reads the angle in the signed range `[-180, 180)` degrees.
    ///
    /// ```rust
    /// use turn_angle::Angle;
    /// assert_eq!(Angle::from_degrees(350.0).to_signed_degrees::<f64>().round(), -10.0);
    /// assert_eq!(Angle::HALF_TURN.to_signed_degrees::<f64>(), -180.0);
    /// ```
    #[inline]
    pub fn to_signed_degrees<R: Real>(self) -> R {
        R::from_f64(self.signed_scaled(AngularUnit::Degree))
    }

    /// Reads the angle in the signed range `[-π, π)` radians.
    #[inline]
    pub fn to_signed_radians<R: Real>(self) -> R {
        R::from_f64(self.signed_scaled(AngularUnit::Radian))
    }

    #[inline]
    fn signed_scaled(self, unit: AngularUnit) -> f64 {
        self.0 as i32 as f64 * unit.full_turn() / TURN
    }

    /// Whether `self` and `other` are closer than `tolerance` in either direction around the circle.
    ///
    /// Both one-sided wraparound differences (`self - other` and `other - self`) are compared against the tolerance
    /// with a strict `<`. Since one of them is always the shorter arc, this is the same as asking whether the
    /// shortest-arc distance is below `tolerance`. A zero tolerance is never satisfied, not even by equal angles.
    ///
    /// ```rust
    /// use turn_angle::Angle;
    /// let a = Angle::from_degrees(359.95);
    /// let b = Angle::from_degrees(0.02);
    /// assert!(a.is_near(b, Angle::from_degrees(0.1)));
    /// ```
    ///
    /// `Angle` multiplies by every primitive number type, so a method call directly on a product with an unsuffixed
    /// literal cannot pick a `Mul` impl. Suffix the literal or use the call form:
    ///
    /// ```rust
    /// use turn_angle::Angle;
    /// let one = Angle::from_degrees(1.0);
    /// let tol = Angle::from_degrees(0.1);
    /// assert!((one * 360_i32).is_near(Angle::ZERO, tol));
    /// assert!(Angle::is_near(one * 360, Angle::ZERO, tol));
    /// ```
    #[inline]
    pub fn is_near(self, other: Angle, tolerance: Angle) -> bool {
        (self - other).0 < tolerance.0 || (other - self).0 < tolerance.0
    }

    /// Shortest-arc distance to `other`, in `[0°, 180°]`.
    ///
    /// ```rust
    /// use turn_angle::Angle;
    /// let d = Angle::from_degrees(315.0).separation(Angle::EIGHTH_TURN);
    /// assert_eq!(d, Angle::QUARTER_TURN);
    /// ```
    #[inline]
    pub fn separation(self, other: Angle) -> Angle {
        let forward = self - other;
        forward.min(-forward)
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        let x = self.to_radians::<f64>();
        #[cfg(feature = "std")]
        {
            x.sin()
        }
        #[cfg(not(feature = "std"))]
        {
            crate::libm::sin(x)
        }
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        let x = self.to_radians::<f64>();
        #[cfg(feature = "std")]
        {
            x.cos()
        }
        #[cfg(not(feature = "std"))]
        {
            crate::libm::cos(x)
        }
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        let x = self.to_radians::<f64>();
        #[cfg(feature = "std")]
        {
            x.tan()
        }
        #[cfg(not(feature = "std"))]
        {
            crate::libm::tan(x)
        }
    }

    /// Simultaneously compute sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        let x = self.to_radians::<f64>();
        #[cfg(feature = "std")]
        {
            x.sin_cos()
        }
        #[cfg(not(feature = "std"))]
        {
            (crate::libm::sin(x), crate::libm::cos(x))
        }
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.to_degrees::<f64>(), AngularUnit::Degree)
    }
}
