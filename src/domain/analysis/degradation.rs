//! Degradation report for silently-excluded term references.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A term reference that did not resolve against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedReference {
    pub alternative: usize,
    pub criterion: usize,
    pub short_name: String,
}

/// Record of unresolved references excluded during expansion or
/// aggregation.
///
/// Exclusion narrows results or substitutes the neutral zero trapezoid,
/// which materially affects scores. The report makes that degradation
/// visible to the caller instead of hiding it; each exclusion is also
/// logged at warn level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradationReport {
    unresolved: Vec<UnresolvedReference>,
}

impl DegradationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one unresolved reference and logs it.
    pub fn record(&mut self, alternative: usize, criterion: usize, short_name: impl Into<String>) {
        let short_name = short_name.into();
        warn!(
            alternative,
            criterion,
            short_name = %short_name,
            "term reference did not resolve; cell result degraded"
        );
        self.unresolved.push(UnresolvedReference {
            alternative,
            criterion,
            short_name,
        });
    }

    /// Returns the recorded unresolved references.
    pub fn unresolved(&self) -> &[UnresolvedReference] {
        &self.unresolved
    }

    /// Returns the number of exclusions.
    pub fn count(&self) -> usize {
        self.unresolved.len()
    }

    /// Returns true when nothing was excluded.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Absorbs another report's entries.
    pub fn merge(&mut self, other: DegradationReport) {
        self.unresolved.extend(other.unresolved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_clean() {
        let report = DegradationReport::new();
        assert!(report.is_clean());
        assert_eq!(report.count(), 0);
    }

    #[test]
    fn record_tracks_position_and_name() {
        let mut report = DegradationReport::new();
        report.record(1, 2, "XX");
        assert!(!report.is_clean());
        assert_eq!(
            report.unresolved(),
            &[UnresolvedReference {
                alternative: 1,
                criterion: 2,
                short_name: "XX".to_string(),
            }]
        );
    }

    #[test]
    fn merge_concatenates_entries() {
        let mut first = DegradationReport::new();
        first.record(0, 0, "A");
        let mut second = DegradationReport::new();
        second.record(1, 1, "B");
        first.merge(second);
        assert_eq!(first.count(), 2);
    }
}
