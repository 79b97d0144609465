//! Alpha level value object (confidence level for alpha-cuts).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A confidence level in [0, 1] at which trapezoids are cut.
///
/// At 0 the cut is the full support of the fuzzy number; at 1 it is the
/// core plateau.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlphaLevel(f64);

impl AlphaLevel {
    /// Full support cut.
    pub const ZERO: Self = Self(0.0);

    /// Core plateau cut.
    pub const ONE: Self = Self(1.0);

    /// Creates a new AlphaLevel, clamping to the valid range.
    ///
    /// Non-finite input clamps to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::ZERO
        }
    }

    /// Creates an AlphaLevel, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("alpha", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the complement 1 - alpha.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }
}

impl Default for AlphaLevel {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for AlphaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_new_accepts_valid_values() {
        assert_eq!(AlphaLevel::new(0.0).value(), 0.0);
        assert_eq!(AlphaLevel::new(0.5).value(), 0.5);
        assert_eq!(AlphaLevel::new(1.0).value(), 1.0);
    }

    #[test]
    fn alpha_new_clamps_out_of_range() {
        assert_eq!(AlphaLevel::new(-0.5).value(), 0.0);
        assert_eq!(AlphaLevel::new(1.5).value(), 1.0);
    }

    #[test]
    fn alpha_new_maps_non_finite_to_zero() {
        assert_eq!(AlphaLevel::new(f64::NAN).value(), 0.0);
        assert_eq!(AlphaLevel::new(f64::INFINITY).value(), 0.0);
    }

    #[test]
    fn alpha_try_new_accepts_valid_values() {
        assert!(AlphaLevel::try_new(0.0).is_ok());
        assert!(AlphaLevel::try_new(0.75).is_ok());
        assert!(AlphaLevel::try_new(1.0).is_ok());
    }

    #[test]
    fn alpha_try_new_rejects_out_of_range() {
        let result = AlphaLevel::try_new(1.1);
        assert!(result.is_err());
        match result {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "alpha");
                assert_eq!(min, 0.0);
                assert_eq!(max, 1.0);
                assert_eq!(actual, 1.1);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn alpha_try_new_rejects_nan() {
        assert!(AlphaLevel::try_new(f64::NAN).is_err());
    }

    #[test]
    fn alpha_complement_works() {
        assert_eq!(AlphaLevel::new(0.25).complement(), 0.75);
        assert_eq!(AlphaLevel::ONE.complement(), 0.0);
    }

    #[test]
    fn alpha_default_is_zero() {
        assert_eq!(AlphaLevel::default(), AlphaLevel::ZERO);
    }

    #[test]
    fn alpha_displays_two_decimals() {
        assert_eq!(format!("{}", AlphaLevel::new(0.5)), "0.50");
    }

    #[test]
    fn alpha_serializes_as_bare_number() {
        let json = serde_json::to_string(&AlphaLevel::new(0.5)).unwrap();
        assert_eq!(json, "0.5");
    }

    #[test]
    fn alpha_ordering_works() {
        assert!(AlphaLevel::new(0.2) < AlphaLevel::new(0.8));
    }
}
