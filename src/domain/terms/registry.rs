//! Ordered registry of linguistic terms.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::fuzzy::TriangularFuzzyNumber;

use super::{LinguisticTerm, TermValidation};

/// Partial update merged into a registry term at replacement time.
///
/// Absent fields keep their current value; a supplied triangular number is
/// canonicalized on the way in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermPatch {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub tri: Option<TriangularFuzzyNumber>,
}

impl TermPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the short name.
    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    /// Sets the triangular number.
    pub fn tri(mut self, tri: TriangularFuzzyNumber) -> Self {
        self.tri = Some(tri);
        self
    }
}

/// The ordered scale of linguistic terms.
///
/// # Invariants
///
/// - Order is significant: it defines adjacency for range expansion.
/// - The registry grows to, but never beyond, its target count.
/// - Terms are never reordered or deleted once appended; they are only
///   amendable via replacement at their index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRegistry {
    target_count: usize,
    terms: Vec<LinguisticTerm>,
}

impl TermRegistry {
    /// Creates an empty registry for the given target term count.
    pub fn new(target_count: usize) -> Self {
        Self {
            target_count,
            terms: Vec::with_capacity(target_count),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the configured target term count.
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Returns the current number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no terms have been defined.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if the registry reached its target count.
    pub fn is_full(&self) -> bool {
        self.terms.len() >= self.target_count
    }

    /// Returns the terms in scale order.
    pub fn terms(&self) -> &[LinguisticTerm] {
        &self.terms
    }

    /// Returns the term at the given scale position.
    pub fn get(&self, index: usize) -> Option<&LinguisticTerm> {
        self.terms.get(index)
    }

    /// Returns the scale position of a short name, if it resolves.
    pub fn position_of(&self, short_name: &str) -> Option<usize> {
        self.terms
            .iter()
            .position(|t| t.short_name.trim() == short_name.trim())
    }

    /// Builds the short-name to scale-position map used by expansion and
    /// aggregation for repeated lookups.
    pub fn short_name_index(&self) -> HashMap<&str, usize> {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.short_name.trim(), i))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a term at the end of the scale.
    ///
    /// # Errors
    ///
    /// - `RegistryFull` if the target count has been reached
    pub fn append(&mut self, term: LinguisticTerm) -> Result<usize, DomainError> {
        if self.is_full() {
            return Err(DomainError::new(
                ErrorCode::RegistryFull,
                format!("Registry already holds {} terms", self.target_count),
            ));
        }
        self.terms.push(term);
        Ok(self.terms.len() - 1)
    }

    /// Merges a partial update into the term at the given position.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if no term exists at the position
    pub fn replace_at(&mut self, index: usize, patch: TermPatch) -> Result<(), DomainError> {
        let term = self.terms.get_mut(index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::IndexOutOfBounds,
                format!("No term at position {}", index),
            )
        })?;
        if let Some(name) = patch.name {
            term.name = name;
        }
        if let Some(short_name) = patch.short_name {
            term.short_name = short_name;
        }
        if let Some(tri) = patch.tri {
            term.tri = tri.canonicalized();
        }
        Ok(())
    }

    /// Divides the triangular components of the term at the given position
    /// by 100 and re-canonicalizes, converting a 0-100 user scale to 0-1.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if no term exists at the position
    pub fn normalize_at(&mut self, index: usize) -> Result<(), DomainError> {
        let term = self.terms.get_mut(index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::IndexOutOfBounds,
                format!("No term at position {}", index),
            )
        })?;
        *term = term.normalized();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Moves to the next populated position, wrapping at the end.
    ///
    /// An empty registry with a positive target count is seeded with a
    /// default placeholder first; the seeded position is returned.
    pub fn next_index(&mut self, current: usize) -> usize {
        if self.seed_if_empty() {
            return 0;
        }
        if self.terms.is_empty() {
            return 0;
        }
        (current + 1) % self.terms.len()
    }

    /// Moves to the previous populated position, wrapping at the start.
    ///
    /// Seeds a placeholder the same way as [`Self::next_index`].
    pub fn prev_index(&mut self, current: usize) -> usize {
        if self.seed_if_empty() {
            return 0;
        }
        if self.terms.is_empty() {
            return 0;
        }
        (current + self.terms.len() - 1) % self.terms.len()
    }

    /// Seeds the default placeholder when the registry is empty and the
    /// target count is positive. Returns true if seeding happened.
    fn seed_if_empty(&mut self) -> bool {
        if self.terms.is_empty() && self.target_count > 0 {
            self.terms.push(LinguisticTerm::placeholder(0));
            true
        } else {
            false
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Validation queries
    // ─────────────────────────────────────────────────────────────────────

    /// Validates the term at the given position against the rest of the
    /// registry.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if no term exists at the position
    pub fn validate_at(&self, index: usize) -> Result<TermValidation, DomainError> {
        let term = self.terms.get(index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::IndexOutOfBounds,
                format!("No term at position {}", index),
            )
        })?;
        let others = self
            .terms
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, t)| t);
        Ok(TermValidation::check(term, others))
    }

    /// Returns true when every defined term passes validation.
    pub fn all_valid(&self) -> bool {
        (0..self.terms.len()).all(|i| {
            self.validate_at(i)
                .map(|report| report.is_valid())
                .unwrap_or(false)
        })
    }

    /// Returns true when the registry is filled to its target and every
    /// term is valid - the gate for leaving setup.
    pub fn is_complete(&self) -> bool {
        self.is_full() && self.target_count > 0 && self.all_valid()
    }
}
