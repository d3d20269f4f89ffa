use nirvana::assessment::catalog::{ANGER_SELF_REPORT, BUSS_DURKEE, BUSS_PERRY};
use nirvana::assessment::{
    completion, evaluate, AssessmentAttempt, AssessmentError, Catalog, ResponseSet,
    ScoringEngine, UnansweredPolicy,
};

#[test]
fn respondent_answers_scores_and_retakes_anger_self_report() {
    let definition = Catalog::bundled()
        .require(ANGER_SELF_REPORT)
        .expect("bundled questionnaire");
    let engine = ScoringEngine::new(UnansweredPolicy::Strict);
    let mut attempt = AssessmentAttempt::new(definition);

    let mut previous = attempt.completion();
    for item in definition.items() {
        attempt.answer(&item.id, 3).expect("neutral is on scale");
        let current = attempt.completion();
        assert!(current > previous);
        previous = current;
    }
    assert_eq!(previous, 1.0);

    let outcome = attempt.submit(&engine).expect("complete attempt scores");
    assert_eq!(outcome.total, 45);
    assert!(outcome.complete);

    attempt.retake();
    assert_eq!(attempt.completion(), 0.0);
    assert!(attempt.outcome().is_none());
    let error = attempt.submit(&engine).expect_err("nothing answered yet");
    assert_eq!(
        error,
        AssessmentError::MissingAnswer {
            item_id: "asr1".to_string()
        }
    );
}

#[test]
fn buss_perry_extremes_span_floor_to_ceiling() {
    let definition = Catalog::bundled()
        .require(BUSS_PERRY)
        .expect("bundled questionnaire");

    let mut low = ResponseSet::new();
    let mut high = ResponseSet::new();
    for item in definition.items() {
        let (low_value, high_value) = if item.reverse { (5, 1) } else { (1, 5) };
        low.record(definition, &item.id, low_value).expect("on scale");
        high.record(definition, &item.id, high_value).expect("on scale");
    }

    let low = evaluate(definition, &low).expect("scores");
    let high = evaluate(definition, &high).expect("scores");

    assert_eq!(low.total, definition.score_floor());
    assert_eq!(high.total, definition.score_ceiling());
    assert_eq!((low.total, high.total), (29, 145));
}

#[test]
fn partially_answered_buss_durkee_is_flagged_incomplete() {
    let definition = Catalog::bundled()
        .require(BUSS_DURKEE)
        .expect("bundled questionnaire");
    let mut attempt = AssessmentAttempt::new(definition);
    attempt.answer("bd1", 1).expect("on scale");
    attempt.answer("bd2", 4).expect("on scale");

    let outcome = attempt
        .submit(&ScoringEngine::default())
        .expect("lenient policy scores partial sets")
        .clone();

    assert_eq!(outcome.total, 5 + 4);
    assert!(!outcome.complete);
    assert_eq!(outcome.answered, 2);
    assert_eq!(
        completion(definition, attempt.responses()),
        2.0 / definition.len() as f64
    );

    let report = attempt.report().expect("report after submit");
    assert!(report.disclaimer.contains("mental health professional"));
    assert!((report.completion_pct - 10.0).abs() < 1e-9);
}

#[test]
fn independent_attempts_do_not_share_answers() {
    let definition = Catalog::bundled()
        .require(ANGER_SELF_REPORT)
        .expect("bundled questionnaire");
    let mut first = AssessmentAttempt::new(definition);
    let second = AssessmentAttempt::new(definition);

    first.answer("asr1", 5).expect("on scale");

    assert_eq!(first.responses().len(), 1);
    assert!(second.responses().is_empty());
}
