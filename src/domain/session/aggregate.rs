//! Evaluation session aggregate entity.
//!
//! The session is the single mutable root of the pipeline. The judgment
//! matrix and term registry are its inputs; interval sets, trapezoids, and
//! scores are derived artifacts that are recomputed or cleared atomically
//! whenever an upstream input changes, so stale derived data is never
//! observable.
//!
//! # Ownership
//!
//! The session is exclusively owned by the caller; every transformation is
//! a synchronous function from current state to next state.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    AggregationMethod, DegradationReport, ExpansionEngine, GeneralizedVariant, IntervalMatrix,
    ScoreReport, ScoringEngine, ScoringPolicy, TrapezoidAggregator, TrapezoidMatrix,
};
use crate::domain::foundation::{
    AlphaLevel, DomainError, ErrorCode, EvaluationStage, SessionId, StateMachine, Timestamp,
};
use crate::domain::fuzzy::ProbabilityFormula;
use crate::domain::judgment::{JudgmentCell, JudgmentMatrix};
use crate::domain::terms::{LinguisticTerm, TermPatch, TermRegistry, TermValidation};

/// Evaluation session - owns the inputs and derived artifacts of one
/// multi-criteria evaluation.
///
/// # Invariants
///
/// - The pipeline stage only moves forward (see [`EvaluationStage`]).
/// - Term edits are confined to `Setup`; cell edits end at interval
///   expansion.
/// - Derived artifacts downstream of a change are cleared in the same
///   mutation that applies the change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSession {
    /// Unique identifier for this session.
    id: SessionId,

    /// The ordered linguistic scale.
    registry: TermRegistry,

    /// The alternatives x criteria judgment grid.
    matrix: JudgmentMatrix,

    /// Current pipeline stage.
    stage: EvaluationStage,

    /// Active scoring policy (method plus strategy choices).
    policy: ScoringPolicy,

    /// Confidence level for alpha-cuts.
    alpha: AlphaLevel,

    /// Derived: per-cell covered term sets.
    intervals: Option<IntervalMatrix>,

    /// Derived: per-cell trapezoids.
    trapezoids: Option<TrapezoidMatrix>,

    /// Derived: per-alternative results under the active policy.
    scores: Option<ScoreReport>,

    /// Unresolved references recorded by the expansion stage.
    expansion_degradation: DegradationReport,

    /// Unresolved references recorded by the aggregation stage.
    aggregation_degradation: DegradationReport,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session was last updated.
    updated_at: Timestamp,
}

impl EvaluationSession {
    /// Creates a session in `Setup` for the given dimensions.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if any dimension is zero
    pub fn new(
        alternatives: usize,
        criteria: usize,
        term_target: usize,
    ) -> Result<Self, DomainError> {
        if alternatives == 0 {
            return Err(DomainError::validation(
                "alternatives",
                "At least one alternative is required",
            ));
        }
        if criteria == 0 {
            return Err(DomainError::validation(
                "criteria",
                "At least one criterion is required",
            ));
        }
        if term_target == 0 {
            return Err(DomainError::validation(
                "term_target",
                "At least one linguistic term is required",
            ));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: SessionId::new(),
            registry: TermRegistry::new(term_target),
            matrix: JudgmentMatrix::new(alternatives, criteria),
            stage: EvaluationStage::Setup,
            policy: ScoringPolicy::default(),
            alpha: AlphaLevel::default(),
            intervals: None,
            trapezoids: None,
            scores: None,
            expansion_degradation: DegradationReport::new(),
            aggregation_degradation: DegradationReport::new(),
            created_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the current pipeline stage.
    pub fn stage(&self) -> EvaluationStage {
        self.stage
    }

    /// Returns the term registry.
    pub fn registry(&self) -> &TermRegistry {
        &self.registry
    }

    /// Returns the judgment matrix.
    pub fn matrix(&self) -> &JudgmentMatrix {
        &self.matrix
    }

    /// Returns the active scoring policy.
    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Returns the active alpha level.
    pub fn alpha(&self) -> AlphaLevel {
        self.alpha
    }

    /// Returns the derived interval matrix, if expansion has run.
    pub fn intervals(&self) -> Option<&IntervalMatrix> {
        self.intervals.as_ref()
    }

    /// Returns the derived trapezoid matrix, if aggregation has run.
    pub fn trapezoids(&self) -> Option<&TrapezoidMatrix> {
        self.trapezoids.as_ref()
    }

    /// Returns the score report, if scoring has run since the last
    /// invalidation.
    pub fn scores(&self) -> Option<&ScoreReport> {
        self.scores.as_ref()
    }

    /// Returns the winning alternatives of the current score report.
    pub fn winners(&self) -> Vec<usize> {
        self.scores.as_ref().map(ScoreReport::winners).unwrap_or_default()
    }

    /// Returns the combined degradation record of the last expansion and
    /// aggregation runs.
    pub fn degradation(&self) -> DegradationReport {
        let mut combined = self.expansion_degradation.clone();
        combined.merge(self.aggregation_degradation.clone());
        combined
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────
    // Term setup
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a term to the scale.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if setup is over
    /// - `RegistryFull` if the target count has been reached
    pub fn append_term(&mut self, term: LinguisticTerm) -> Result<usize, DomainError> {
        self.ensure_term_edits_allowed()?;
        let position = self.registry.append(term)?;
        self.touch();
        Ok(position)
    }

    /// Merges a partial update into the term at the given position.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if setup is over
    /// - `IndexOutOfBounds` if no term exists at the position
    pub fn replace_term(&mut self, index: usize, patch: TermPatch) -> Result<(), DomainError> {
        self.ensure_term_edits_allowed()?;
        self.registry.replace_at(index, patch)?;
        self.touch();
        Ok(())
    }

    /// Converts the term at the given position from a 0-100 scale to 0-1.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if setup is over
    /// - `IndexOutOfBounds` if no term exists at the position
    pub fn normalize_term(&mut self, index: usize) -> Result<(), DomainError> {
        self.ensure_term_edits_allowed()?;
        self.registry.normalize_at(index)?;
        self.touch();
        Ok(())
    }

    /// Moves term navigation forward, seeding a placeholder into an empty
    /// registry.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if setup is over
    pub fn next_term_index(&mut self, current: usize) -> Result<usize, DomainError> {
        self.ensure_term_edits_allowed()?;
        Ok(self.registry.next_index(current))
    }

    /// Moves term navigation backward, seeding a placeholder into an empty
    /// registry.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if setup is over
    pub fn prev_term_index(&mut self, current: usize) -> Result<usize, DomainError> {
        self.ensure_term_edits_allowed()?;
        Ok(self.registry.prev_index(current))
    }

    /// Validates the term at the given position, for live UI feedback.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if no term exists at the position
    pub fn validate_term(&self, index: usize) -> Result<TermValidation, DomainError> {
        self.registry.validate_at(index)
    }

    /// Leaves setup once the scale is complete and valid.
    ///
    /// # Errors
    ///
    /// - `SetupIncomplete` if the registry is not filled with valid terms
    /// - `InvalidStateTransition` if the session already left setup
    pub fn complete_setup(&mut self) -> Result<(), DomainError> {
        if !self.registry.is_complete() {
            return Err(DomainError::new(
                ErrorCode::SetupIncomplete,
                format!(
                    "Registry holds {} of {} terms and must pass validation",
                    self.registry.len(),
                    self.registry.target_count()
                ),
            ));
        }
        self.stage = self
            .stage
            .transition_to(EvaluationStage::AwaitingJudgments)
            .map_err(DomainError::from)?;
        self.touch();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Judgments
    // ─────────────────────────────────────────────────────────────────────

    /// Sets the judgment for an (alternative, criterion) pair.
    ///
    /// Clears any derived artifacts so stale results are never observed.
    ///
    /// # Errors
    ///
    /// - `MatrixFrozen` once interval expansion has run
    /// - `IndexOutOfBounds` if the position is outside the grid
    pub fn set_judgment(
        &mut self,
        alternative: usize,
        criterion: usize,
        cell: JudgmentCell,
    ) -> Result<(), DomainError> {
        if !self.stage.allows_cell_edits() {
            return Err(DomainError::new(
                ErrorCode::MatrixFrozen,
                "Judgments cannot change after interval expansion",
            ));
        }
        self.matrix.set(alternative, criterion, cell)?;
        self.invalidate_derived();
        self.touch();
        Ok(())
    }

    /// Returns true when every judgment cell is filled.
    pub fn all_cells_filled(&self) -> bool {
        self.matrix.all_cells_filled()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Pipeline
    // ─────────────────────────────────────────────────────────────────────

    /// Expands every judgment into its covered term set.
    ///
    /// The one-way gate of the pipeline: on first success the matrix is
    /// frozen. Re-running from an already-advanced stage recomputes the
    /// same artifact and leaves stage and downstream results untouched.
    ///
    /// # Errors
    ///
    /// - `StageNotReached` while still in setup
    /// - `TermsNotDefined` / `NotAllCellsFilled` from the engine
    pub fn expand_intervals(&mut self) -> Result<&IntervalMatrix, DomainError> {
        if self.stage == EvaluationStage::Setup {
            return Err(DomainError::new(
                ErrorCode::StageNotReached,
                "Complete term setup before expanding judgments",
            ));
        }
        let outcome = ExpansionEngine::expand(&self.matrix, &self.registry)?;
        self.expansion_degradation = outcome.degradation;
        if self.stage == EvaluationStage::AwaitingJudgments {
            self.stage = self
                .stage
                .transition_to(EvaluationStage::IntervalsExpanded)
                .map_err(DomainError::from)?;
            // First expansion: nothing downstream exists yet.
            self.trapezoids = None;
            self.scores = None;
        }
        self.touch();
        Ok(self.intervals.insert(outcome.intervals))
    }

    /// Folds every covered term set into a trapezoid.
    ///
    /// # Errors
    ///
    /// - `StageNotReached` before interval expansion has run
    pub fn aggregate_trapezoids(&mut self) -> Result<&TrapezoidMatrix, DomainError> {
        let intervals = self.intervals.as_ref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::StageNotReached,
                "Expand judgments into intervals before aggregating",
            )
        })?;
        let outcome = TrapezoidAggregator::aggregate(intervals, &self.registry);
        self.aggregation_degradation = outcome.degradation;
        if self.stage == EvaluationStage::IntervalsExpanded {
            self.stage = self
                .stage
                .transition_to(EvaluationStage::TrapezoidsAggregated)
                .map_err(DomainError::from)?;
            self.scores = None;
        }
        self.touch();
        Ok(self.trapezoids.insert(outcome.trapezoids))
    }

    /// Scores every alternative under the active policy and alpha.
    ///
    /// # Errors
    ///
    /// - `StageNotReached` before trapezoid aggregation has run
    pub fn score(&mut self) -> Result<&ScoreReport, DomainError> {
        let trapezoids = self.trapezoids.as_ref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::StageNotReached,
                "Aggregate trapezoids before scoring",
            )
        })?;
        let report = ScoringEngine::score_with(trapezoids, self.policy, self.alpha);
        if self.stage == EvaluationStage::TrapezoidsAggregated {
            self.stage = self
                .stage
                .transition_to(EvaluationStage::Scored)
                .map_err(DomainError::from)?;
        }
        self.touch();
        Ok(self.scores.insert(report))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Policy changes
    // ─────────────────────────────────────────────────────────────────────

    /// Selects the aggregation method, clearing policy-specific results.
    ///
    /// The stage does not revert; scoring must simply run again.
    pub fn set_method(&mut self, method: AggregationMethod) {
        self.policy.method = method;
        self.scores = None;
        self.touch();
    }

    /// Selects the generalized-method fold variant, clearing results.
    pub fn set_generalized_variant(&mut self, variant: GeneralizedVariant) {
        self.policy.generalized_variant = variant;
        self.scores = None;
        self.touch();
    }

    /// Selects the dominance-probability formula, clearing results.
    pub fn set_probability_formula(&mut self, formula: ProbabilityFormula) {
        self.policy.formula = formula;
        self.scores = None;
        self.touch();
    }

    /// Sets the alpha level, clearing alpha-specific results.
    pub fn set_alpha(&mut self, alpha: AlphaLevel) {
        self.alpha = alpha;
        self.scores = None;
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────

    fn ensure_term_edits_allowed(&self) -> Result<(), DomainError> {
        if self.stage.allows_term_edits() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Terms cannot change after setup is complete",
            ))
        }
    }

    /// Clears every derived artifact in one step.
    fn invalidate_derived(&mut self) {
        self.intervals = None;
        self.trapezoids = None;
        self.scores = None;
        self.expansion_degradation = DegradationReport::new();
        self.aggregation_degradation = DegradationReport::new();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
