//! Trapezoidal aggregation - term sets to enclosing trapezoids.

use serde::{Deserialize, Serialize};

use crate::domain::fuzzy::TrapezoidalFuzzyNumber;
use crate::domain::terms::TermRegistry;

use super::{DegradationReport, IntervalMatrix};

/// Grid of per-cell trapezoids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapezoidMatrix {
    alternatives: usize,
    criteria: usize,
    cells: Vec<TrapezoidalFuzzyNumber>,
}

impl TrapezoidMatrix {
    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.alternatives
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criteria
    }

    /// Gets the trapezoid for an (alternative, criterion) pair.
    pub fn get(&self, alternative: usize, criterion: usize) -> Option<&TrapezoidalFuzzyNumber> {
        if alternative >= self.alternatives || criterion >= self.criteria {
            return None;
        }
        self.cells.get(alternative * self.criteria + criterion)
    }

    /// Returns one alternative's row of per-criterion trapezoids.
    pub fn row(&self, alternative: usize) -> &[TrapezoidalFuzzyNumber] {
        if alternative >= self.alternatives {
            return &[];
        }
        let start = alternative * self.criteria;
        &self.cells[start..start + self.criteria]
    }
}

/// Result of an aggregation run: the derived matrix plus its degradation
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationOutcome {
    pub trapezoids: TrapezoidMatrix,
    pub degradation: DegradationReport,
}

/// Folds each cell's covered term set into one trapezoidal fuzzy number.
pub struct TrapezoidAggregator;

impl TrapezoidAggregator {
    /// Aggregates every cell of the interval matrix.
    ///
    /// Unresolved names are discarded (recorded in the degradation
    /// report). A cell whose filtered term set is empty receives the zero
    /// trapezoid - a neutral stand-in, not a mathematically universal
    /// neutral element; see the probability boundary behavior in scoring.
    pub fn aggregate(intervals: &IntervalMatrix, registry: &TermRegistry) -> AggregationOutcome {
        let index = registry.short_name_index();
        let mut degradation = DegradationReport::new();
        let mut cells =
            Vec::with_capacity(intervals.alternative_count() * intervals.criterion_count());

        for (alternative, criterion, set) in intervals.iter() {
            let resolved = set.names().iter().filter_map(|name| {
                match index.get(name.trim()) {
                    Some(&position) => registry.get(position).map(|t| t.tri.canonicalized()),
                    None => {
                        degradation.record(alternative, criterion, name.clone());
                        None
                    }
                }
            });
            let trapezoid = TrapezoidalFuzzyNumber::enclosing(resolved.collect::<Vec<_>>())
                .unwrap_or(TrapezoidalFuzzyNumber::ZERO);
            cells.push(trapezoid);
        }

        AggregationOutcome {
            trapezoids: TrapezoidMatrix {
                alternatives: intervals.alternative_count(),
                criteria: intervals.criterion_count(),
                cells,
            },
            degradation,
        }
    }
}
