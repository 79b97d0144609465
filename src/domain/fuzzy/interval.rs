//! Alpha-cut intervals and dominance-probability formulas.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Crisp interval obtained by cutting a trapezoid at some alpha level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaCutInterval {
    pub l: f64,
    pub r: f64,
}

impl AlphaCutInterval {
    /// Creates an interval from raw endpoints.
    pub fn new(l: f64, r: f64) -> Self {
        Self { l, r }
    }

    /// Returns the interval width.
    pub fn width(&self) -> f64 {
        self.r - self.l
    }

    /// Returns true if the interval straddles the zero reference point.
    pub fn straddles_zero(&self) -> bool {
        self.l < 0.0 && self.r > 0.0
    }
}

impl fmt::Display for AlphaCutInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.l, self.r)
    }
}

/// Closed-form used to score a straddling interval against the zero
/// reference.
///
/// The system historically shipped two disagreeing revisions of this
/// computation. Both are kept as selectable strategies; `SpanRatio` is the
/// authoritative default. The boundary branches (`l >= 0` fully dominant,
/// `r <= 0` fully dominated) are shared; the formulas differ only on
/// intervals that straddle zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbabilityFormula {
    /// `r / (r - l)` - the fraction of the interval's span lying on the
    /// positive side.
    #[default]
    SpanRatio,
    /// `max(1 - max((1 - l) / (r - l + 1), 0), 0)` - the later-revision
    /// closed form.
    ShiftedUnit,
}

impl ProbabilityFormula {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ProbabilityFormula::SpanRatio => "Span Ratio",
            ProbabilityFormula::ShiftedUnit => "Shifted Unit",
        }
    }

    /// Probability that the interval dominates the neutral zero point.
    ///
    /// Fully non-negative intervals score 1, fully non-positive intervals
    /// score 0, and straddling intervals score by the selected closed form.
    pub fn dominance_probability(&self, interval: AlphaCutInterval) -> f64 {
        if interval.l >= 0.0 {
            return 1.0;
        }
        if interval.r <= 0.0 {
            return 0.0;
        }
        match self {
            ProbabilityFormula::SpanRatio => interval.r / (interval.r - interval.l),
            ProbabilityFormula::ShiftedUnit => {
                let shifted = (1.0 - interval.l) / (interval.r - interval.l + 1.0);
                (1.0 - shifted.max(0.0)).max(0.0)
            }
        }
    }
}

impl fmt::Display for ProbabilityFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_non_negative_interval_scores_one() {
        for formula in [ProbabilityFormula::SpanRatio, ProbabilityFormula::ShiftedUnit] {
            assert_eq!(
                formula.dominance_probability(AlphaCutInterval::new(0.0, 0.5)),
                1.0
            );
            assert_eq!(
                formula.dominance_probability(AlphaCutInterval::new(0.2, 0.9)),
                1.0
            );
        }
    }

    #[test]
    fn fully_non_positive_interval_scores_zero() {
        for formula in [ProbabilityFormula::SpanRatio, ProbabilityFormula::ShiftedUnit] {
            assert_eq!(
                formula.dominance_probability(AlphaCutInterval::new(-0.9, 0.0)),
                0.0
            );
            assert_eq!(
                formula.dominance_probability(AlphaCutInterval::new(-0.9, -0.1)),
                0.0
            );
        }
    }

    #[test]
    fn zero_width_interval_at_origin_scores_one() {
        // The neutral zero trapezoid cuts to [0, 0]; the l >= 0 branch
        // applies.
        let interval = AlphaCutInterval::new(0.0, 0.0);
        assert_eq!(
            ProbabilityFormula::SpanRatio.dominance_probability(interval),
            1.0
        );
    }

    #[test]
    fn span_ratio_on_symmetric_straddle_is_half() {
        let p = ProbabilityFormula::SpanRatio
            .dominance_probability(AlphaCutInterval::new(-0.75, 0.75));
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn span_ratio_increases_with_l_for_fixed_r() {
        let formula = ProbabilityFormula::SpanRatio;
        let low = formula.dominance_probability(AlphaCutInterval::new(-0.9, 0.5));
        let high = formula.dominance_probability(AlphaCutInterval::new(-0.1, 0.5));
        assert!(high > low);
    }

    #[test]
    fn formulas_disagree_on_straddling_intervals() {
        let interval = AlphaCutInterval::new(-0.75, 0.75);
        let span = ProbabilityFormula::SpanRatio.dominance_probability(interval);
        let shifted = ProbabilityFormula::ShiftedUnit.dominance_probability(interval);
        assert!((span - shifted).abs() > 1e-9);
    }

    #[test]
    fn shifted_unit_stays_within_unit_range() {
        let formula = ProbabilityFormula::ShiftedUnit;
        for (l, r) in [(-0.01, 0.99), (-0.99, 0.01), (-0.5, 0.5), (-2.0, 3.0)] {
            let p = formula.dominance_probability(AlphaCutInterval::new(l, r));
            assert!((0.0..=1.0).contains(&p), "p={} for [{}, {}]", p, l, r);
        }
    }

    #[test]
    fn default_formula_is_span_ratio() {
        assert_eq!(ProbabilityFormula::default(), ProbabilityFormula::SpanRatio);
    }

    #[test]
    fn interval_width_and_straddle_queries_work() {
        let interval = AlphaCutInterval::new(-0.25, 0.75);
        assert_eq!(interval.width(), 1.0);
        assert!(interval.straddles_zero());
        assert!(!AlphaCutInterval::new(0.0, 1.0).straddles_zero());
    }
}
