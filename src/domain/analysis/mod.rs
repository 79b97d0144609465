//! Analysis module - Pure services for the fuzzy-evaluation pipeline.
//!
//! This module contains stateless functions that operate on domain objects
//! to derive results, stage by stage.
//!
//! # Components
//!
//! - `ExpansionEngine` - judgment cells to ordered term sets
//! - `TrapezoidAggregator` - term sets to enclosing trapezoids
//! - `ScoringEngine` - trapezoids to alpha-cut intervals, dominance
//!   probabilities, and winner marking
//! - `DegradationReport` - surfaced record of silently-excluded unresolved
//!   term references
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless: they take domain objects as input
//! and return computed results. Unresolvable term references never abort a
//! stage; they narrow the result and are counted in the degradation report
//! so callers can see that scores were affected.

mod aggregation;
mod degradation;
mod expansion;
mod scoring;

pub use aggregation::{AggregationOutcome, TrapezoidAggregator, TrapezoidMatrix};
pub use degradation::{DegradationReport, UnresolvedReference};
pub use expansion::{ExpansionEngine, ExpansionOutcome, IntervalMatrix, IntervalTermSet};
pub use scoring::{
    AggregationMethod, AlternativeResult, GeneralizedVariant, ScoreReport, ScoringEngine,
    ScoringPolicy,
};
