//! Fixed-point angles on a 32-bit turn.
//!
//! `turn-angle` provides a single value type, [`Angle`], that stores a point on the circle as a `u32` where the whole
//! integer range is exactly one turn:
//!
//! - Addition, subtraction and negation are the integer's own wrapping operations, so results never leave the
//!   circle and never need reducing.
//! - Multiplication by an integer is exact. Multiplication by a real number goes through `f64` and rounds.
//! - Conversions from degrees and radians normalize any real input first (−10° is 350°), and the binary
//!   subdivisions of the turn (0°, 45°, 90°, 180°, 270°, π) map to exact raw values.
//! - `%` is defined only for divisors that evenly divide the turn.
//!
//! # What this crate solves
//!
//! - Drift-free accumulation of headings, phases and rotations: adding angles is exact and wraps for free.
//! - Exact, hashable equality (`Eq`, `Ord`, `Hash` are on the raw integer).
//!
//! # What this crate does not try to solve
//!
//! - Units other than degrees and radians.
//! - Vectors, rotation matrices or any geometry built on top of the angle.
//! - Sub-step precision: one raw step is `360 / 2^32 ≈ 8.4e-8` degrees.
//!
//! # Quick start
//!
//! ```rust
//! use turn_angle::Angle;
//!
//! let heading = Angle::from_degrees(350.0);
//! let turned = heading + Angle::from_degrees(20.0);
//! assert!(turned.is_near(Angle::from_degrees(10.0), Angle::from_degrees(1e-6)));
//!
//! assert_eq!(Angle::from_degrees(45.0) * 2, Angle::QUARTER_TURN);
//! assert_eq!(Angle::from_degrees(180.0), Angle::from_radians(core::f64::consts::PI));
//! assert_eq!(Angle::HALF_TURN.to_degrees::<i32>(), 180);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build without `std`:
//!
//! ```toml
//! [dependencies]
//! turn-angle = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//! Verify that configuration with `cargo check -p turn-angle --no-default-features`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `demo`: builds the `angle_demo` binary.
//!
//! # Panics and errors
//!
//! Fallible operations return [`AngleResult`]. The operator forms that cannot return a `Result` panic with the same
//! error message instead, and each has a fallible method counterpart:
//!
//! | Panicking form            | Fallible form                 | Error                                |
//! |---------------------------|-------------------------------|--------------------------------------|
//! | `a % b`                   | [`Angle::try_rem`]            | [`AngleError::InvalidModulusDivisor`] |
//! | [`Angle::from_degrees`]   | [`Angle::try_from_degrees`]   | [`AngleError::NonFiniteMeasure`]     |
//! | [`Angle::from_radians`]   | [`Angle::try_from_radians`]   | [`AngleError::NonFiniteMeasure`]     |
//! | `a * x` (real `x`)        | [`Angle::try_scale`]          | [`AngleError::NonFiniteScalar`]      |
//!
//! Rejections are reported through the `log` facade at `debug` level.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

mod angle;
mod error;
mod macros;
mod ops;
mod real;

pub use angle::Angle;
pub use error::{AngleError, AngleResult};
pub use real::{AngularUnit, Measure, Real, TURN_SIZE};
