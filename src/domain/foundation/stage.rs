//! Evaluation stage enum for the five-stage pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle stage of an evaluation session.
///
/// The pipeline moves strictly forward: terms are defined during `Setup`,
/// judgments are collected in `AwaitingJudgments`, and the three derivation
/// stages follow in order. `Scored` is terminal but re-enterable through
/// recomputation after a method or alpha change.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EvaluationStage {
    #[default]
    Setup,
    AwaitingJudgments,
    IntervalsExpanded,
    TrapezoidsAggregated,
    Scored,
}

impl EvaluationStage {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationStage::Setup => "Setup",
            EvaluationStage::AwaitingJudgments => "Awaiting Judgments",
            EvaluationStage::IntervalsExpanded => "Intervals Expanded",
            EvaluationStage::TrapezoidsAggregated => "Trapezoids Aggregated",
            EvaluationStage::Scored => "Scored",
        }
    }

    /// Returns true while judgment cells may still be edited.
    ///
    /// Interval expansion is a one-way gate: once past it the matrix is
    /// frozen.
    pub fn allows_cell_edits(&self) -> bool {
        *self < EvaluationStage::IntervalsExpanded
    }

    /// Returns true while the term registry may still be edited.
    pub fn allows_term_edits(&self) -> bool {
        *self == EvaluationStage::Setup
    }
}

impl StateMachine for EvaluationStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use EvaluationStage::*;
        matches!(
            (self, target),
            (Setup, AwaitingJudgments)
                | (AwaitingJudgments, IntervalsExpanded)
                | (IntervalsExpanded, TrapezoidsAggregated)
                | (TrapezoidsAggregated, Scored)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use EvaluationStage::*;
        match self {
            Setup => vec![AwaitingJudgments],
            AwaitingJudgments => vec![IntervalsExpanded],
            IntervalsExpanded => vec![TrapezoidsAggregated],
            TrapezoidsAggregated => vec![Scored],
            Scored => vec![],
        }
    }
}

impl fmt::Display for EvaluationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_one_step_at_a_time() {
        use EvaluationStage::*;
        assert!(Setup.can_transition_to(&AwaitingJudgments));
        assert!(AwaitingJudgments.can_transition_to(&IntervalsExpanded));
        assert!(IntervalsExpanded.can_transition_to(&TrapezoidsAggregated));
        assert!(TrapezoidsAggregated.can_transition_to(&Scored));
    }

    #[test]
    fn stages_never_move_backward() {
        use EvaluationStage::*;
        assert!(!Scored.can_transition_to(&Setup));
        assert!(!IntervalsExpanded.can_transition_to(&AwaitingJudgments));
        assert!(!AwaitingJudgments.can_transition_to(&Setup));
    }

    #[test]
    fn stages_never_skip_ahead() {
        use EvaluationStage::*;
        assert!(!Setup.can_transition_to(&IntervalsExpanded));
        assert!(!AwaitingJudgments.can_transition_to(&Scored));
    }

    #[test]
    fn scored_is_terminal() {
        assert!(EvaluationStage::Scored.is_terminal());
        assert!(!EvaluationStage::Setup.is_terminal());
    }

    #[test]
    fn cell_edits_allowed_only_before_expansion() {
        use EvaluationStage::*;
        assert!(Setup.allows_cell_edits());
        assert!(AwaitingJudgments.allows_cell_edits());
        assert!(!IntervalsExpanded.allows_cell_edits());
        assert!(!TrapezoidsAggregated.allows_cell_edits());
        assert!(!Scored.allows_cell_edits());
    }

    #[test]
    fn term_edits_allowed_only_during_setup() {
        use EvaluationStage::*;
        assert!(Setup.allows_term_edits());
        assert!(!AwaitingJudgments.allows_term_edits());
    }

    #[test]
    fn default_stage_is_setup() {
        assert_eq!(EvaluationStage::default(), EvaluationStage::Setup);
    }

    #[test]
    fn stage_ordering_follows_pipeline() {
        use EvaluationStage::*;
        assert!(Setup < AwaitingJudgments);
        assert!(AwaitingJudgments < IntervalsExpanded);
        assert!(IntervalsExpanded < TrapezoidsAggregated);
        assert!(TrapezoidsAggregated < Scored);
    }
}
