//! Alpha-cut scoring - trapezoids to dominance probabilities and winners.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::AlphaLevel;
use crate::domain::fuzzy::{AlphaCutInterval, ProbabilityFormula, TrapezoidalFuzzyNumber};

use super::TrapezoidMatrix;

/// Policy for combining per-criterion values into one alternative-level
/// result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationMethod {
    /// Combine the row's trapezoids into one before cutting.
    #[default]
    Generalized,
    /// Alpha-cut each criterion, then take the most conservative corner.
    Pessimistic,
    /// Alpha-cut each criterion, then take the most favorable corner.
    Optimistic,
}

impl AggregationMethod {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            AggregationMethod::Generalized => "Generalized",
            AggregationMethod::Pessimistic => "Pessimistic",
            AggregationMethod::Optimistic => "Optimistic",
        }
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the generalized method folds a row of trapezoids.
///
/// Two disagreeing revisions of this fold exist; both are kept as
/// selectable strategies with `Envelope` as the authoritative default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneralizedVariant {
    /// Min/max envelope across criteria, then one alpha-cut.
    #[default]
    Envelope,
    /// Elementwise average across criteria, then one alpha-cut.
    Averaged,
}

impl GeneralizedVariant {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            GeneralizedVariant::Envelope => "Envelope",
            GeneralizedVariant::Averaged => "Averaged",
        }
    }
}

/// Full scoring policy: method plus the strategy choices for the divergent
/// computations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub method: AggregationMethod,
    pub generalized_variant: GeneralizedVariant,
    pub formula: ProbabilityFormula,
}

impl ScoringPolicy {
    /// Creates a policy with the default strategies for the given method.
    pub fn for_method(method: AggregationMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }
}

/// Scored outcome for one alternative under the active policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativeResult {
    pub alternative: usize,
    pub interval: AlphaCutInterval,
    pub probability: f64,
}

/// Results for every scoreable alternative plus the best probability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub results: Vec<AlternativeResult>,
    pub best_probability: Option<f64>,
}

impl ScoreReport {
    /// Returns the alternatives whose probability exactly equals the best.
    ///
    /// Ties all count as winners; with distinct probabilities exactly one
    /// alternative is returned.
    pub fn winners(&self) -> Vec<usize> {
        match self.best_probability {
            Some(best) => self
                .results
                .iter()
                .filter(|r| r.probability == best)
                .map(|r| r.alternative)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns true if the given alternative is marked a winner.
    pub fn is_winner(&self, alternative: usize) -> bool {
        self.winners().contains(&alternative)
    }
}

/// Converts trapezoids to crisp intervals at a confidence level and scores
/// each alternative's dominance over the neutral zero point.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores every alternative under the given method with default
    /// strategies.
    pub fn score(
        trapezoids: &TrapezoidMatrix,
        method: AggregationMethod,
        alpha: AlphaLevel,
    ) -> ScoreReport {
        Self::score_with(trapezoids, ScoringPolicy::for_method(method), alpha)
    }

    /// Scores every alternative under an explicit policy.
    ///
    /// # Edge Cases
    ///
    /// - An alternative with an empty criterion row is skipped; it emits
    ///   no result and never counts as a winner.
    /// - An empty report has no best probability.
    pub fn score_with(
        trapezoids: &TrapezoidMatrix,
        policy: ScoringPolicy,
        alpha: AlphaLevel,
    ) -> ScoreReport {
        let mut results = Vec::with_capacity(trapezoids.alternative_count());

        for alternative in 0..trapezoids.alternative_count() {
            let row = trapezoids.row(alternative);
            let Some(interval) = Self::row_interval(row, policy, alpha) else {
                continue;
            };
            results.push(AlternativeResult {
                alternative,
                interval,
                probability: policy.formula.dominance_probability(interval),
            });
        }

        let best_probability = results
            .iter()
            .map(|r| r.probability)
            .fold(None, |best: Option<f64>, p| {
                Some(best.map_or(p, |b| b.max(p)))
            });

        ScoreReport {
            results,
            best_probability,
        }
    }

    /// Combines one alternative's row into a single crisp interval.
    fn row_interval(
        row: &[TrapezoidalFuzzyNumber],
        policy: ScoringPolicy,
        alpha: AlphaLevel,
    ) -> Option<AlphaCutInterval> {
        match policy.method {
            AggregationMethod::Generalized => {
                let combined = match policy.generalized_variant {
                    GeneralizedVariant::Envelope => TrapezoidalFuzzyNumber::envelope(row.iter()),
                    GeneralizedVariant::Averaged => TrapezoidalFuzzyNumber::average(row.iter()),
                }?;
                Some(combined.alpha_cut(alpha))
            }
            AggregationMethod::Pessimistic => {
                let mut cuts = row.iter().map(|t| t.alpha_cut(alpha));
                let first = cuts.next()?;
                Some(cuts.fold(first, |acc, cut| AlphaCutInterval {
                    l: acc.l.min(cut.l),
                    r: acc.r.min(cut.r),
                }))
            }
            AggregationMethod::Optimistic => {
                let mut cuts = row.iter().map(|t| t.alpha_cut(alpha));
                let first = cuts.next()?;
                Some(cuts.fold(first, |acc, cut| AlphaCutInterval {
                    l: acc.l.max(cut.l),
                    r: acc.r.max(cut.r),
                }))
            }
        }
    }
}
