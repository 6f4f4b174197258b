//! Integration-level checks of the public `turn_angle` API.

use turn_angle::*;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use std::f64::consts::PI;

fn deg(d: f64) -> Angle {
    Angle::from_degrees(d)
}

#[test]
fn full_turn_is_zero() {
    assert_eq!(deg(0.0), deg(360.0));
    assert_eq!(deg(360.0), Angle::ZERO);
    assert_eq!(Angle::TURN_SIZE, TURN_SIZE);
    assert_eq!(TURN_SIZE, u32::MAX as u64 + 1);
}

#[test]
fn doubling_lattice_angles_exact() {
    assert_eq!(deg(45.0) * 2, deg(90.0));
    assert_eq!(deg(90.0) * 2, deg(180.0));
    assert_eq!(deg(180.0) * 2, deg(0.0));

    assert_eq!(deg(45.0) * 2.0, deg(90.0));
    assert_eq!(deg(90.0) * 2.0, deg(180.0));
    assert_eq!(deg(180.0) * 2.0, deg(0.0));
}

#[test]
fn negative_scalars_wrap() {
    assert_eq!(deg(45.0) * -6, deg(90.0));
    assert_eq!(deg(180.0) * -2, deg(0.0));
    assert_eq!(deg(45.0) * -6.0, deg(90.0));
    assert_eq!(deg(180.0) * -2.0, deg(0.0));
}

#[test]
fn accumulated_error_stays_within_tolerance() {
    assert!((deg(1.0) * 360_i32).is_near(deg(0.0), deg(0.1)));
    assert!((deg(1.0) * 360.0_f64).is_near(deg(0.0), deg(0.1)));
    assert!(Angle::is_near(deg(1.0) * 360, deg(0.0), deg(0.1)));
    assert!(Angle::is_near(deg(1.0) * 360.0, deg(0.0), deg(0.1)));

    let stepped: Angle = std::iter::repeat(deg(1.0)).take(360).sum();
    assert!(stepped.is_near(Angle::ZERO, deg(0.1)));
}

#[test]
fn degrees_and_radians_agree() {
    assert_eq!(deg(0.0), Angle::from_radians(0.0));
    assert_eq!(deg(180.0), Angle::from_radians(PI));
    assert_eq!(deg(180.0), Angle::from_radians(3.141592653));
}

#[test]
fn modulus_by_dividing_angle() {
    assert_eq!(deg(120.0) % deg(90.0), deg(30.0));
    assert_eq!(deg(120.0) % deg(22.5), deg(7.5));
}

#[test]
fn modulus_by_non_dividing_angle_is_rejected() {
    let err = deg(120.0).try_rem(deg(50.0)).unwrap_err();
    assert_eq!(
        err,
        AngleError::InvalidModulusDivisor {
            raw: deg(50.0).raw()
        }
    );
}

#[test]
fn wraparound_addition() {
    assert_eq!(deg(29.0) + deg(48.0), deg(77.0));
    assert_eq!(deg(349.0) + deg(18.0), deg(7.0));
}

#[test]
fn degree_roundtrip() {
    assert_abs_diff_eq!(deg(180.0).to_degrees::<f64>(), 180.0, epsilon = 1e-9);
    for d in [0, 45, 90, 180, 270] {
        assert_eq!(deg(d as f64).to_degrees::<i32>(), d);
    }
}

#[test]
fn radian_readout() {
    assert_abs_diff_eq!(deg(180.0).to_radians::<f64>(), PI, epsilon = 1e-12);
    assert_eq!(deg(90.0).to_radians::<i32>(), 1);
}

#[test]
fn non_finite_input_is_an_error() {
    assert!(Angle::try_from_degrees(f64::INFINITY).is_err());
    assert!(Angle::try_from_radians(f32::NAN).is_err());
    assert!(Angle::HALF_TURN.try_scale(f64::NEG_INFINITY).is_err());
}

#[test]
fn angle_is_a_plain_value() {
    fn assert_value<T: Copy + Send + Sync + Default + std::hash::Hash + Ord + 'static>() {}
    assert_value::<Angle>();
    assert_eq!(std::mem::size_of::<Angle>(), 4);
}

#[test]
fn ordering_is_raw_order() {
    let mut angles = vec![deg(270.0), deg(0.0), deg(90.0), deg(180.0)];
    angles.sort();
    assert_eq!(
        angles,
        vec![
            Angle::ZERO,
            Angle::QUARTER_TURN,
            Angle::HALF_TURN,
            Angle::THREE_QUARTER_TURN
        ]
    );
}

proptest! {
    #[test]
    fn prop_periodicity(d in -720.0..720.0f64, n in -100i32..100) {
        // Quarter-degree inputs keep `d + 360 n` exact.
        let d = (d * 4.0).round() / 4.0;
        prop_assert_eq!(deg(d), deg(d + 360.0 * n as f64));
    }

    #[test]
    fn prop_negative_input_matches_complement(d in 0.0..360.0f64) {
        let d = (d * 4.0).round() / 4.0;
        prop_assert_eq!(deg(-d), -deg(d));
    }
}
