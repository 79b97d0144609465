//! Judgment matrix - the mutable root of the evaluation pipeline.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

use super::JudgmentCell;

/// An alternatives x criteria grid of judgment cells.
///
/// Dimensions are fixed at setup time; cells start unfilled and are
/// mutated only through [`Self::set`]. Stored row-major, one row per
/// alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentMatrix {
    alternatives: usize,
    criteria: usize,
    cells: Vec<JudgmentCell>,
}

impl JudgmentMatrix {
    /// Creates a matrix of unfilled cells.
    pub fn new(alternatives: usize, criteria: usize) -> Self {
        Self {
            alternatives,
            criteria,
            cells: vec![JudgmentCell::unfilled(); alternatives * criteria],
        }
    }

    /// Creates a builder for constructing a filled matrix.
    pub fn builder(alternatives: usize, criteria: usize) -> JudgmentMatrixBuilder {
        JudgmentMatrixBuilder::new(alternatives, criteria)
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.alternatives
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criteria
    }

    /// Gets the cell for an (alternative, criterion) pair.
    pub fn get(&self, alternative: usize, criterion: usize) -> Option<&JudgmentCell> {
        if alternative >= self.alternatives || criterion >= self.criteria {
            return None;
        }
        self.cells.get(alternative * self.criteria + criterion)
    }

    /// Sets the cell for an (alternative, criterion) pair.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if the position is outside the grid
    pub fn set(
        &mut self,
        alternative: usize,
        criterion: usize,
        cell: JudgmentCell,
    ) -> Result<(), DomainError> {
        if alternative >= self.alternatives || criterion >= self.criteria {
            return Err(DomainError::new(
                ErrorCode::IndexOutOfBounds,
                format!(
                    "Cell ({}, {}) is outside the {}x{} matrix",
                    alternative, criterion, self.alternatives, self.criteria
                ),
            ));
        }
        self.cells[alternative * self.criteria + criterion] = cell;
        Ok(())
    }

    /// Returns true when every cell has at least one endpoint set.
    pub fn all_cells_filled(&self) -> bool {
        self.cells.iter().all(JudgmentCell::is_filled)
    }

    /// Counts the cells still unfilled, for progress feedback.
    pub fn unfilled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_filled()).count()
    }

    /// Iterates cells in row-major order with their grid position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &JudgmentCell)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / self.criteria, i % self.criteria, cell))
    }
}

/// Builder for constructing a judgment matrix cell by cell.
#[derive(Debug)]
pub struct JudgmentMatrixBuilder {
    matrix: JudgmentMatrix,
}

impl JudgmentMatrixBuilder {
    /// Creates a builder for the given dimensions.
    pub fn new(alternatives: usize, criteria: usize) -> Self {
        Self {
            matrix: JudgmentMatrix::new(alternatives, criteria),
        }
    }

    /// Sets a cell; positions outside the grid are ignored.
    pub fn cell(mut self, alternative: usize, criterion: usize, cell: JudgmentCell) -> Self {
        let _ = self.matrix.set(alternative, criterion, cell);
        self
    }

    /// Builds the matrix.
    pub fn build(self) -> JudgmentMatrix {
        self.matrix
    }
}
