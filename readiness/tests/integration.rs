//! Integration tests for readiness

use readiness::{
    AssessmentError, Recommendation, ScriptedBackend, Step, Wizard, bank, parse_tokens,
    questionnaire, score,
};

/// Script answering every agreement item with `agreement`, knowledge items
/// with the key for the first `correct` of them, and the situational items
/// with `r1`/`r2`.
fn script(agreement: &str, w2: &str, correct: usize, r1: &str, r2: &str) -> ScriptedBackend {
    let mut backend = ScriptedBackend::new();
    for question in bank::personality_questions()
        .iter()
        .chain(bank::wiscar_questions().iter())
    {
        backend = backend.with_token(question.id().as_str(), agreement);
    }

    let key = ["1", "1", "1", "1", "1", "1", "2", "0"];
    let wrong = ["0", "0", "0", "0", "0", "0", "0", "1"];
    for (index, question) in bank::knowledge_questions().iter().enumerate() {
        let token = if index < correct { key[index] } else { wrong[index] };
        backend = backend.with_token(question.id().as_str(), token);
    }

    backend
        .with_token("w2", w2)
        .with_token("r1", r1)
        .with_token("r2", r2)
}

#[test]
fn test_perfect_run() {
    let mut wizard = Wizard::new();
    let result = wizard.run(script("4", "0", 8, "1", "1")).unwrap();

    assert_eq!(result.overall_score, 100);
    assert_eq!(result.psychometric_score, 100);
    assert_eq!(result.technical_score, 100);
    assert_eq!(result.wiscar_score(), 100);
    assert_eq!(result.recommendation, Recommendation::Yes);
    assert_eq!(result.insights.len(), 4);
    assert_eq!(result.next_steps.len(), 4);
    assert!(result.alternative_paths.is_none());
    assert!(result.career_matches.iter().all(|m| m.match_percent == 100));
    assert_eq!(result.career_matches[0].title, "Clinical Medical Assistant");
}

#[test]
fn test_middling_run_is_maybe() {
    let mut wizard = Wizard::new();
    let result = wizard.run(script("2", "2", 4, "1", "0")).unwrap();

    assert_eq!(result.psychometric_score, 50);
    assert_eq!(result.technical_score, 50);
    assert_eq!(result.wiscar_scores.will, 50);
    assert_eq!(result.wiscar_scores.interest, 50);
    assert_eq!(result.wiscar_scores.real_world, 75);
    assert_eq!(result.overall_score, 51);
    assert_eq!(result.recommendation, Recommendation::Maybe);
    assert_eq!(result.insights.len(), 2);

    let matches: Vec<(&str, u8)> = result
        .career_matches
        .iter()
        .map(|m| (m.title, m.match_percent))
        .collect();
    assert_eq!(
        matches,
        [
            ("Clinical Medical Assistant", 58),
            ("Administrative Medical Assistant", 50),
            ("Patient Coordinator", 50),
        ]
    );
}

#[test]
fn test_weak_knowledge_holds_back_yes() {
    let mut wizard = Wizard::new();
    let result = wizard.run(script("4", "0", 4, "1", "1")).unwrap();

    assert_eq!(result.psychometric_score, 100);
    assert_eq!(result.technical_score, 50);
    assert_eq!(result.overall_score, 85);
    assert_eq!(result.recommendation, Recommendation::Maybe);
}

#[test]
fn test_low_psychometric_is_no() {
    // Every agreement at 1 keeps the other dimensions low as well, so raise
    // them back up explicitly.
    let mut backend = script("1", "0", 8, "1", "1");
    for question in bank::wiscar_questions() {
        if question.id().as_str() != "w2" && !question.id().as_str().starts_with('r') {
            backend = backend.with_token(question.id().as_str(), "4");
        }
    }

    let mut wizard = Wizard::new();
    let result = wizard.run(backend).unwrap();

    assert_eq!(result.psychometric_score, 25);
    assert_eq!(result.overall_score, 70);
    assert_eq!(result.recommendation, Recommendation::No);
    assert_eq!(result.alternative_paths.as_ref().map(Vec::len), Some(6));
    assert_eq!(result.next_steps.len(), 3);
}

#[test]
fn test_missing_answer_is_backend_error() {
    let mut wizard = Wizard::new();
    let err = wizard
        .run(ScriptedBackend::new().with_token("p1", "3"))
        .unwrap_err();

    assert!(matches!(err, AssessmentError::Backend(_)));
    assert!(err.to_string().contains("p2"));
    assert_eq!(wizard.step(), Step::Questions);
    assert_eq!(wizard.answers().len(), 1);
}

#[test]
fn test_restart_then_retake() {
    let mut wizard = Wizard::new();
    wizard.run(script("4", "0", 8, "1", "1")).unwrap();
    assert_eq!(wizard.step(), Step::Results);

    wizard.restart();
    assert!(wizard.result().is_none());
    assert!(wizard.answers().is_empty());

    let result = wizard.run(script("2", "2", 4, "1", "0")).unwrap();
    assert_eq!(result.recommendation, Recommendation::Maybe);
}

#[test]
fn test_wizard_matches_direct_scoring() {
    let mut wizard = Wizard::new();
    let from_wizard = wizard.run(script("3", "1", 6, "1", "2")).unwrap().clone();

    let tokens = wizard.answers().to_tokens();
    let answers = parse_tokens(
        &questionnaire(),
        tokens.iter().map(|(id, token)| (id.as_str(), token.as_str())),
    );
    assert_eq!(score(&answers), from_wizard);
}

#[test]
fn test_result_json_shape() {
    let mut wizard = Wizard::new();
    let result = wizard.run(script("2", "2", 4, "1", "0")).unwrap();
    let json = serde_json::to_value(result).unwrap();

    assert_eq!(json["overallScore"], 51);
    assert_eq!(json["recommendation"], "MAYBE");
    assert_eq!(json["wiscarScores"]["realWorld"], 75);
    assert_eq!(json["careerMatches"][0]["match"], 58);
    assert_eq!(json["careerMatches"][0]["requiredSkills"][0], "Patient Care");
    assert!(json["nextSteps"].is_array());
    assert!(json.get("alternativePaths").is_none());
}

#[test]
fn test_result_json_includes_alternative_paths_on_no() {
    let result = score(&Default::default());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["recommendation"], "NO");
    assert_eq!(json["alternativePaths"].as_array().map(Vec::len), Some(6));
}
