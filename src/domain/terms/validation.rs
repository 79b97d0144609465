//! Per-field validation report for linguistic terms.

use crate::domain::foundation::ValidationError;

use super::{LinguisticTerm, MIN_NAME_LENGTH};

/// Per-field validation outcome for a single term, suitable for live UI
/// feedback.
///
/// Each field carries the first error found, or `None` when the field is
/// valid. Uniqueness is checked against the other terms of the same
/// registry (the term itself is excluded by the caller).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TermValidation {
    pub name_error: Option<ValidationError>,
    pub short_name_error: Option<ValidationError>,
    pub shape_error: Option<ValidationError>,
}

impl TermValidation {
    /// Validates one term against the other terms of its registry.
    pub fn check<'a, I>(term: &LinguisticTerm, others: I) -> Self
    where
        I: IntoIterator<Item = &'a LinguisticTerm>,
    {
        let mut name_error = None;
        let mut short_name_error = None;

        let name = term.name.trim();
        if name.is_empty() {
            name_error = Some(ValidationError::empty_field("name"));
        } else if name.chars().count() < MIN_NAME_LENGTH {
            name_error = Some(ValidationError::too_short(
                "name",
                MIN_NAME_LENGTH,
                name.chars().count(),
            ));
        }

        let short_name = term.short_name.trim();
        if short_name.is_empty() {
            short_name_error = Some(ValidationError::empty_field("short_name"));
        }

        for other in others {
            if name_error.is_none() && other.name.trim() == name {
                name_error = Some(ValidationError::duplicate("name", name));
            }
            if short_name_error.is_none() && other.short_name.trim() == short_name {
                short_name_error = Some(ValidationError::duplicate("short_name", short_name));
            }
        }

        let shape_error = if !term.tri.is_finite() {
            Some(ValidationError::invalid_format(
                "tri",
                "all three components must be finite",
            ))
        } else if term.tri.is_degenerate() {
            Some(ValidationError::invalid_format(
                "tri",
                "left, middle and right collapse to one point",
            ))
        } else {
            None
        };

        Self {
            name_error,
            short_name_error,
            shape_error,
        }
    }

    /// Returns true when every field passed.
    pub fn is_valid(&self) -> bool {
        self.name_error.is_none() && self.short_name_error.is_none() && self.shape_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fuzzy::TriangularFuzzyNumber;

    fn term(name: &str, short: &str, l: f64, m: f64, r: f64) -> LinguisticTerm {
        LinguisticTerm::new(name, short, TriangularFuzzyNumber::new(l, m, r))
    }

    #[test]
    fn valid_term_passes_all_fields() {
        let t = term("High", "H", 0.0, 0.5, 1.0);
        let report = TermValidation::check(&t, []);
        assert!(report.is_valid());
    }

    #[test]
    fn empty_name_is_flagged() {
        let t = term("  ", "H", 0.0, 0.5, 1.0);
        let report = TermValidation::check(&t, []);
        assert_eq!(report.name_error, Some(ValidationError::empty_field("name")));
        assert!(!report.is_valid());
    }

    #[test]
    fn short_name_under_three_chars_is_flagged() {
        let t = term("Hi", "H", 0.0, 0.5, 1.0);
        let report = TermValidation::check(&t, []);
        assert!(matches!(
            report.name_error,
            Some(ValidationError::TooShort { .. })
        ));
    }

    #[test]
    fn name_length_counts_trimmed_characters() {
        // " Low " trims to exactly three characters.
        let t = term(" Low ", "L", 0.0, 0.5, 1.0);
        let report = TermValidation::check(&t, []);
        assert!(report.name_error.is_none());
    }

    #[test]
    fn duplicate_name_is_flagged() {
        let existing = term("High", "H", 0.0, 0.5, 1.0);
        let t = term("High", "H2", 0.0, 0.5, 1.0);
        let report = TermValidation::check(&t, [&existing]);
        assert!(matches!(
            report.name_error,
            Some(ValidationError::Duplicate { .. })
        ));
        assert!(report.short_name_error.is_none());
    }

    #[test]
    fn duplicate_short_name_is_flagged() {
        let existing = term("High", "H", 0.0, 0.5, 1.0);
        let t = term("Higher", "H", 0.0, 0.5, 1.0);
        let report = TermValidation::check(&t, [&existing]);
        assert!(report.name_error.is_none());
        assert!(matches!(
            report.short_name_error,
            Some(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn empty_short_name_is_flagged() {
        let t = term("High", "", 0.0, 0.5, 1.0);
        let report = TermValidation::check(&t, []);
        assert_eq!(
            report.short_name_error,
            Some(ValidationError::empty_field("short_name"))
        );
    }

    #[test]
    fn degenerate_shape_is_flagged() {
        let t = term("High", "H", 0.5, 0.5, 0.5);
        let report = TermValidation::check(&t, []);
        assert!(matches!(
            report.shape_error,
            Some(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn non_finite_shape_is_flagged() {
        let t = LinguisticTerm {
            name: "High".to_string(),
            short_name: "H".to_string(),
            tri: TriangularFuzzyNumber::new(0.0, f64::NAN, 1.0),
        };
        let report = TermValidation::check(&t, []);
        assert!(report.shape_error.is_some());
    }

    #[test]
    fn multiple_field_errors_are_reported_together() {
        let t = term("", "", 0.5, 0.5, 0.5);
        let report = TermValidation::check(&t, []);
        assert!(report.name_error.is_some());
        assert!(report.short_name_error.is_some());
        assert!(report.shape_error.is_some());
    }
}
