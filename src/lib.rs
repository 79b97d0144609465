//! Lingua Rank - Fuzzy Linguistic Multi-Criteria Decision Core
//!
//! This crate implements the computational pipeline for multi-criteria
//! decision analysis under linguistic uncertainty: experts judge each
//! (alternative, criterion) pair with terms from a user-defined linguistic
//! scale, and the core turns those judgments into a ranking of alternatives
//! with dominance-probability scores.

pub mod domain;
