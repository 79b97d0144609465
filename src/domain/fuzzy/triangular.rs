//! Triangular fuzzy number value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A triangular fuzzy number (left, middle, right).
///
/// # Invariants
///
/// After canonicalization, `left <= middle <= right`. A degenerate triple
/// (`left == middle == right`) carries no fuzziness and is rejected as a
/// registry entry by term validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularFuzzyNumber {
    pub left: f64,
    pub middle: f64,
    pub right: f64,
}

impl TriangularFuzzyNumber {
    /// Creates a triangular number from raw components without reordering.
    pub fn new(left: f64, middle: f64, right: f64) -> Self {
        Self { left, middle, right }
    }

    /// Orders an arbitrary triple into a valid triangular fuzzy number.
    ///
    /// This is a three-element sort by value, expressed via
    /// sum-minus-extremes: the middle is whatever remains after the min and
    /// max are taken out. The final clamp guards floating-point edge cases
    /// where the subtraction drifts outside `[left, right]`.
    pub fn canonicalize(x: f64, y: f64, z: f64) -> Self {
        let left = x.min(y).min(z);
        let right = x.max(y).max(z);
        let middle = (x + y + z - left - right).clamp(left, right);
        Self { left, middle, right }
    }

    /// Returns this number re-canonicalized.
    pub fn canonicalized(&self) -> Self {
        Self::canonicalize(self.left, self.middle, self.right)
    }

    /// Returns true if `left <= middle <= right`.
    pub fn is_canonical(&self) -> bool {
        self.left <= self.middle && self.middle <= self.right
    }

    /// Returns true if all three components collapse to one point.
    pub fn is_degenerate(&self) -> bool {
        self.left == self.middle && self.middle == self.right
    }

    /// Returns true if all three components are finite.
    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.middle.is_finite() && self.right.is_finite()
    }

    /// Divides every component by the given factor and re-canonicalizes.
    ///
    /// Used to convert a 0-100 user scale into the 0-1 domain the rest of
    /// the pipeline assumes.
    pub fn scaled_down(&self, factor: f64) -> Self {
        Self::canonicalize(self.left / factor, self.middle / factor, self.right / factor)
    }
}

impl fmt::Display for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.left, self.middle, self.right)
    }
}
