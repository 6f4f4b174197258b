//! Error types for angle construction and arithmetic.

use crate::real::AngularUnit;

/// Result type for fallible angle operations.
pub type AngleResult<T> = Result<T, AngleError>;

/// Error type for fallible angle operations.
///
/// Every variant is a caller contract violation: the same inputs always fail, so there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AngleError {
    /// The right-hand side of a modulus does not evenly divide a full turn.
    #[error("modulus divisor (raw {raw:#010x}) does not evenly divide a full turn")]
    InvalidModulusDivisor {
        /// Raw value of the rejected divisor.
        raw: u32,
    },

    /// A degree or radian measurement was NaN or infinite.
    #[error("cannot map non-finite {unit} value {value} onto a turn")]
    NonFiniteMeasure {
        /// Unit the value was given in.
        unit: AngularUnit,
        /// The rejected value.
        value: f64,
    },

    /// A real scalar multiplier was NaN or infinite.
    #[error("cannot scale an angle by non-finite factor {value}")]
    NonFiniteScalar {
        /// The rejected scalar.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_divisor_message_shows_raw_value() {
        let err = AngleError::InvalidModulusDivisor { raw: 0x3000_0000 };
        assert_eq!(
            err.to_string(),
            "modulus divisor (raw 0x30000000) does not evenly divide a full turn"
        );
    }

    #[test]
    fn non_finite_measure_message_names_unit() {
        let err = AngleError::NonFiniteMeasure {
            unit: AngularUnit::Radian,
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "cannot map non-finite Rad value inf onto a turn");
    }

    #[test]
    fn non_finite_scalar_message() {
        let err = AngleError::NonFiniteScalar { value: f64::NAN };
        assert_eq!(err.to_string(), "cannot scale an angle by non-finite factor NaN");
    }
}
