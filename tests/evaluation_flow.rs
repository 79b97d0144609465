//! End-to-end pipeline test: term setup through winner marking.

use lingua_rank::domain::analysis::AggregationMethod;
use lingua_rank::domain::foundation::{AlphaLevel, EvaluationStage};
use lingua_rank::domain::fuzzy::{TrapezoidalFuzzyNumber, TriangularFuzzyNumber};
use lingua_rank::domain::judgment::JudgmentCell;
use lingua_rank::domain::session::EvaluationSession;
use lingua_rank::domain::terms::LinguisticTerm;

fn term(name: &str, short: &str, l: f64, m: f64, r: f64) -> LinguisticTerm {
    LinguisticTerm::new(name, short, TriangularFuzzyNumber::new(l, m, r))
}

/// Builds a session with the reference five-term scale, ready for
/// judgments.
fn session_with_scale(alternatives: usize, criteria: usize) -> EvaluationSession {
    let mut session = EvaluationSession::new(alternatives, criteria, 5).unwrap();
    for (name, short, l, m, r) in [
        ("Very Low", "VL", -1.0, -1.0, -0.5),
        ("Low", "L", -1.0, -0.5, 0.0),
        ("Medium", "M", -0.5, 0.0, 0.5),
        ("High", "H", 0.0, 0.5, 1.0),
        ("Very High", "VH", 0.5, 1.0, 1.0),
    ] {
        session.append_term(term(name, short, l, m, r)).unwrap();
    }
    session.complete_setup().unwrap();
    session
}

#[test]
fn reference_scenario_flows_through_all_five_stages() {
    let mut session = session_with_scale(1, 1);
    session
        .set_judgment(0, 0, JudgmentCell::within("L", "H"))
        .unwrap();

    let intervals = session.expand_intervals().unwrap();
    let covered: Vec<&str> = intervals
        .get(0, 0)
        .unwrap()
        .names()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(covered, vec!["L", "M", "H"]);

    let trapezoids = session.aggregate_trapezoids().unwrap();
    assert_eq!(
        trapezoids.get(0, 0),
        Some(&TrapezoidalFuzzyNumber::new(-1.0, -0.5, 0.5, 1.0))
    );

    session.set_alpha(AlphaLevel::new(0.5));
    let report = session.score().unwrap();
    let result = &report.results[0];
    assert_eq!(result.interval.l, -0.75);
    assert_eq!(result.interval.r, 0.75);
    assert!((result.probability - 0.5).abs() < 1e-12);

    assert_eq!(session.stage(), EvaluationStage::Scored);
    assert!(session.degradation().is_clean());
}

#[test]
fn best_alternative_wins_under_every_method() {
    // Alternative 0 judged high on both criteria, alternative 1 low.
    let mut session = session_with_scale(2, 2);
    session.set_judgment(0, 0, JudgmentCell::at_least("H")).unwrap();
    session.set_judgment(0, 1, JudgmentCell::crisp("VH")).unwrap();
    session.set_judgment(1, 0, JudgmentCell::at_most("L")).unwrap();
    session.set_judgment(1, 1, JudgmentCell::crisp("VL")).unwrap();

    session.expand_intervals().unwrap();
    session.aggregate_trapezoids().unwrap();
    session.set_alpha(AlphaLevel::new(0.5));

    for method in [
        AggregationMethod::Generalized,
        AggregationMethod::Pessimistic,
        AggregationMethod::Optimistic,
    ] {
        session.set_method(method);
        assert!(session.scores().is_none(), "method change must clear scores");
        let report = session.score().unwrap();
        assert_eq!(report.results.len(), 2);
        assert_eq!(session.winners(), vec![0], "method {} picked wrong winner", method);
    }
}

#[test]
fn unresolved_judgment_degrades_to_neutral_and_is_reported() {
    let mut session = session_with_scale(2, 1);
    session.set_judgment(0, 0, JudgmentCell::crisp("bogus")).unwrap();
    session.set_judgment(1, 0, JudgmentCell::crisp("VL")).unwrap();

    session.expand_intervals().unwrap();
    session.aggregate_trapezoids().unwrap();
    session.set_alpha(AlphaLevel::new(0.5));
    let report = session.score().unwrap();

    // The unresolved cell falls back to the zero trapezoid, whose cut
    // [0, 0] scores probability 1 and here beats the genuinely low
    // alternative 1.
    assert_eq!(report.results[0].probability, 1.0);
    assert!(report.results[1].probability < 1.0);
    assert_eq!(session.winners(), vec![0]);

    let degradation = session.degradation();
    assert_eq!(degradation.count(), 1);
    assert_eq!(degradation.unresolved()[0].short_name, "bogus");
}

#[test]
fn session_survives_serialization_mid_pipeline() {
    let mut session = session_with_scale(2, 2);
    session.set_judgment(0, 0, JudgmentCell::crisp("H")).unwrap();
    session.set_judgment(0, 1, JudgmentCell::within("M", "VH")).unwrap();
    session.set_judgment(1, 0, JudgmentCell::crisp("L")).unwrap();
    session.set_judgment(1, 1, JudgmentCell::at_most("M")).unwrap();
    session.expand_intervals().unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let mut restored: EvaluationSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);

    restored.aggregate_trapezoids().unwrap();
    restored.score().unwrap();
    assert_eq!(restored.stage(), EvaluationStage::Scored);
}
