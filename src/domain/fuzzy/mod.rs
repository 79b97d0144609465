//! Fuzzy number value objects.
//!
//! - `TriangularFuzzyNumber` - input shape backing each linguistic term
//! - `TrapezoidalFuzzyNumber` - aggregate shape produced per judgment cell
//! - `AlphaCutInterval` - crisp interval obtained by cutting a trapezoid,
//!   plus the dominance-probability formulas

mod interval;
mod trapezoidal;
mod triangular;

pub use interval::{AlphaCutInterval, ProbabilityFormula};
pub use trapezoidal::TrapezoidalFuzzyNumber;
pub use triangular::TriangularFuzzyNumber;
