//! Qualitative judgment for one (alternative, criterion) pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The shape of a judgment, derived from which endpoints are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JudgmentKind {
    /// Both endpoints set and equal: a single crisp term.
    Crisp,
    /// Both endpoints set and unequal: a closed range ("within").
    Within,
    /// Only the lower endpoint set: open-ended above ("at least").
    AtLeast,
    /// Only the upper endpoint set: open-ended below ("at most").
    AtMost,
    /// Neither endpoint set; blocks progression.
    Unfilled,
}

/// A judgment cell referencing registry terms by short name.
///
/// Both fields are optional; the combination determines the judgment kind.
/// The endpoints are references into the registry, not positions - the
/// registry order decides which of the two is lower at expansion time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentCell {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl JudgmentCell {
    /// Creates an unfilled cell.
    pub fn unfilled() -> Self {
        Self::default()
    }

    /// Creates a crisp single-term judgment.
    pub fn crisp(short_name: impl Into<String>) -> Self {
        let name = short_name.into();
        Self {
            from: Some(name.clone()),
            to: Some(name),
        }
    }

    /// Creates a closed range judgment between two terms.
    pub fn within(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    /// Creates an open-ended-above judgment.
    pub fn at_least(from: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: None,
        }
    }

    /// Creates an open-ended-below judgment.
    pub fn at_most(to: impl Into<String>) -> Self {
        Self {
            from: None,
            to: Some(to.into()),
        }
    }

    /// Classifies this cell.
    pub fn kind(&self) -> JudgmentKind {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) if from == to => JudgmentKind::Crisp,
            (Some(_), Some(_)) => JudgmentKind::Within,
            (Some(_), None) => JudgmentKind::AtLeast,
            (None, Some(_)) => JudgmentKind::AtMost,
            (None, None) => JudgmentKind::Unfilled,
        }
    }

    /// Returns true if at least one endpoint is set.
    pub fn is_filled(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

impl fmt::Display for JudgmentCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) if from == to => write!(f, "{}", from),
            (Some(from), Some(to)) => write!(f, "{}..{}", from, to),
            (Some(from), None) => write!(f, ">={}", from),
            (None, Some(to)) => write!(f, "<={}", to),
            (None, None) => write!(f, "-"),
        }
    }
}
