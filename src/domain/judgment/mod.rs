//! The alternatives x criteria judgment matrix.

mod cell;
mod matrix;

pub use cell::{JudgmentCell, JudgmentKind};
pub use matrix::{JudgmentMatrix, JudgmentMatrixBuilder};
