//! Linguistic term value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::fuzzy::TriangularFuzzyNumber;

/// Minimum trimmed length for a term name.
pub const MIN_NAME_LENGTH: usize = 3;

/// A named qualitative value backed by a triangular fuzzy number.
///
/// Terms belong to an ordered scale (the registry); order is significant
/// and defines adjacency for range expansion. A term under interactive
/// editing may be temporarily invalid; validity is checked through the pure
/// queries in [`super::TermValidation`], not enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticTerm {
    pub name: String,
    pub short_name: String,
    pub tri: TriangularFuzzyNumber,
}

impl LinguisticTerm {
    /// Creates a term, canonicalizing the triangular number.
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        tri: TriangularFuzzyNumber,
    ) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            tri: tri.canonicalized(),
        }
    }

    /// Default placeholder seeded when an empty registry is first
    /// navigated.
    pub fn placeholder(position: usize) -> Self {
        Self::new(
            format!("Term {}", position + 1),
            format!("T{}", position + 1),
            TriangularFuzzyNumber::new(0.0, 0.5, 1.0),
        )
    }

    /// Returns the term with its triangular components divided by 100 and
    /// re-canonicalized, converting a 0-100 user scale into the 0-1 domain.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.clone(),
            short_name: self.short_name.clone(),
            tri: self.tri.scaled_down(100.0),
        }
    }
}

impl fmt::Display for LinguisticTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.short_name, self.tri)
    }
}
