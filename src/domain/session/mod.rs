//! Evaluation session aggregate and stage lifecycle.

mod aggregate;

pub use aggregate::EvaluationSession;
