//! Interval expansion - judgment cells to ordered term sets.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::judgment::{JudgmentCell, JudgmentKind, JudgmentMatrix};
use crate::domain::terms::TermRegistry;

use super::DegradationReport;

/// Ordered subsequence of term short names covered by one judgment.
///
/// Always a contiguous slice of the registry order; empty when the
/// judgment was unfilled or referenced terms that did not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalTermSet(Vec<String>);

impl IntervalTermSet {
    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from short names in scale order.
    pub fn from_names(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Returns the covered short names in scale order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of covered terms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no term is covered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Grid of interval term sets, one per judgment cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalMatrix {
    alternatives: usize,
    criteria: usize,
    cells: Vec<IntervalTermSet>,
}

impl IntervalMatrix {
    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.alternatives
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criteria
    }

    /// Gets the term set for an (alternative, criterion) pair.
    pub fn get(&self, alternative: usize, criterion: usize) -> Option<&IntervalTermSet> {
        if alternative >= self.alternatives || criterion >= self.criteria {
            return None;
        }
        self.cells.get(alternative * self.criteria + criterion)
    }

    /// Iterates term sets in row-major order with their grid position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &IntervalTermSet)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, set)| (i / self.criteria, i % self.criteria, set))
    }
}

/// Result of an expansion run: the derived matrix plus its degradation
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionOutcome {
    pub intervals: IntervalMatrix,
    pub degradation: DegradationReport,
}

/// Maps each judgment cell to the contiguous registry slice it covers.
pub struct ExpansionEngine;

impl ExpansionEngine {
    /// Expands every cell of the matrix into its covered term set.
    ///
    /// Deterministic and idempotent: re-running on an unchanged matrix
    /// yields the same outcome.
    ///
    /// # Errors
    ///
    /// - `TermsNotDefined` if the registry holds no terms
    /// - `NotAllCellsFilled` if any judgment cell is unfilled
    ///
    /// # Edge Cases
    ///
    /// - Range endpoints may arrive in either order; only registry
    ///   position matters.
    /// - A cell referencing a short name missing from the registry expands
    ///   to the empty set, recorded in the degradation report.
    pub fn expand(
        matrix: &JudgmentMatrix,
        registry: &TermRegistry,
    ) -> Result<ExpansionOutcome, DomainError> {
        if registry.is_empty() {
            return Err(DomainError::new(
                ErrorCode::TermsNotDefined,
                "Cannot expand judgments before any terms are defined",
            ));
        }
        if !matrix.all_cells_filled() {
            return Err(DomainError::new(
                ErrorCode::NotAllCellsFilled,
                format!("{} judgment cells are still unfilled", matrix.unfilled_count()),
            ));
        }

        let index = registry.short_name_index();
        let mut degradation = DegradationReport::new();
        let mut cells = Vec::with_capacity(matrix.alternative_count() * matrix.criterion_count());

        for (alternative, criterion, cell) in matrix.iter() {
            cells.push(Self::expand_cell(
                cell,
                registry,
                &index,
                alternative,
                criterion,
                &mut degradation,
            ));
        }

        Ok(ExpansionOutcome {
            intervals: IntervalMatrix {
                alternatives: matrix.alternative_count(),
                criteria: matrix.criterion_count(),
                cells,
            },
            degradation,
        })
    }

    fn expand_cell(
        cell: &JudgmentCell,
        registry: &TermRegistry,
        index: &std::collections::HashMap<&str, usize>,
        alternative: usize,
        criterion: usize,
        degradation: &mut DegradationReport,
    ) -> IntervalTermSet {
        let resolve = |name: &str, degradation: &mut DegradationReport| -> Option<usize> {
            let position = index.get(name.trim()).copied();
            if position.is_none() {
                degradation.record(alternative, criterion, name);
            }
            position
        };

        let last = registry.len() - 1;
        let span = match cell.kind() {
            JudgmentKind::Crisp => {
                let position = resolve(cell.from.as_deref().unwrap_or(""), degradation);
                position.map(|p| (p, p))
            }
            JudgmentKind::Within => {
                let from = resolve(cell.from.as_deref().unwrap_or(""), degradation);
                let to = resolve(cell.to.as_deref().unwrap_or(""), degradation);
                match (from, to) {
                    (Some(f), Some(t)) => Some((f.min(t), f.max(t))),
                    _ => None,
                }
            }
            JudgmentKind::AtLeast => {
                let from = resolve(cell.from.as_deref().unwrap_or(""), degradation);
                from.map(|f| (f, last))
            }
            JudgmentKind::AtMost => {
                let to = resolve(cell.to.as_deref().unwrap_or(""), degradation);
                to.map(|t| (0, t))
            }
            JudgmentKind::Unfilled => None,
        };

        match span {
            Some((lo, hi)) => IntervalTermSet::from_names(
                registry.terms()[lo..=hi]
                    .iter()
                    .map(|t| t.short_name.trim().to_string())
                    .collect(),
            ),
            None => IntervalTermSet::empty(),
        }
    }
}
