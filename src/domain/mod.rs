//! Domain layer containing the fuzzy-evaluation pipeline.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `fuzzy` - Triangular/trapezoidal fuzzy numbers and alpha-cut intervals
//! - `terms` - Linguistic terms and the ordered term registry
//! - `judgment` - The alternatives x criteria judgment matrix
//! - `analysis` - Pure services: interval expansion, trapezoidal
//!   aggregation, alpha-cut scoring
//! - `session` - Evaluation session aggregate and stage lifecycle

pub mod analysis;
pub mod foundation;
pub mod fuzzy;
pub mod judgment;
pub mod session;
pub mod terms;
