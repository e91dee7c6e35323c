//! Tier classification against scripted model answers.

use std::sync::Arc;

use briefcheck_core::errors::GenerationError;
use briefcheck_core::models::Tier;
use briefcheck_llm::{parse_tier_response, TierClassifier, TierParseOutcome};
use test_fixtures::{load_fixture_text, ScriptedModel};

fn fixture(name: &str) -> String {
    load_fixture_text(&format!("tier_responses/{name}"))
}

#[test]
fn complete_answer_fills_every_tier() {
    let model = Arc::new(ScriptedModel::new().respond(fixture("complete.json")));
    let classifier = TierClassifier::new(model.clone());

    let tiers = classifier.extract_tier_requirements("Build an ML service.").unwrap();
    assert_eq!(tiers.essential.len(), 2);
    assert_eq!(tiers.medium, ["Add unit tests for the preprocessing module"]);
    assert_eq!(tiers.advanced.len(), 1);
    assert_eq!(tiers.expert.len(), 1);
    assert_eq!(model.call_count(), 1);
    assert!(model.prompts()[0].contains("Build an ML service."));
}

#[test]
fn missing_tier_is_empty_and_blank_entries_dropped() {
    let model = Arc::new(ScriptedModel::new().respond(fixture("missing_key.json")));
    let tiers = TierClassifier::new(model)
        .extract_tier_requirements("brief")
        .unwrap();
    assert_eq!(tiers.essential, ["Load the dataset from CSV"]);
    assert!(tiers.expert.is_empty());
}

#[test]
fn extra_key_is_ignored() {
    match parse_tier_response(&fixture("extra_key.json")) {
        TierParseOutcome::Parsed {
            requirements,
            ignored,
            missing,
        } => {
            assert_eq!(ignored, ["notas"]);
            assert!(missing.is_empty());
            assert_eq!(requirements.expert, ["Fine-tune a transformer"]);
        }
        other => panic!("expected parse, got {other:?}"),
    }
}

#[test]
fn fenced_answer_is_accepted() {
    let model = Arc::new(ScriptedModel::new().respond(fixture("fenced.txt")));
    let tiers = TierClassifier::new(model)
        .extract_tier_requirements("brief")
        .unwrap();
    assert_eq!(tiers.get(Tier::Advanced), ["Parallelize the pipeline"]);
}

#[test]
fn prose_answer_is_malformed_without_retries() {
    let model = Arc::new(ScriptedModel::new().respond(fixture("prose.txt")));
    let err = TierClassifier::new(model.clone())
        .extract_tier_requirements("brief")
        .unwrap_err();
    match err {
        GenerationError::MalformedResponse { raw, .. } => assert!(raw.starts_with("Sure!")),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
    assert_eq!(model.call_count(), 1);
}

#[test]
fn wrong_type_is_malformed() {
    assert!(!parse_tier_response(&fixture("wrong_type.json")).is_parsed());
}

#[test]
fn retry_recovers_after_unusable_answer() {
    let model = Arc::new(
        ScriptedModel::new()
            .respond(fixture("prose.txt"))
            .respond(fixture("complete.json")),
    );
    let tiers = TierClassifier::new(model.clone())
        .with_parse_retries(1)
        .extract_tier_requirements("brief")
        .unwrap();
    assert_eq!(tiers.total(), 5);

    let prompts = model.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("Sure! Here are the requirements"));
}

#[test]
fn retries_exhausted_reports_last_answer() {
    let model = Arc::new(
        ScriptedModel::new()
            .respond("nope")
            .respond(fixture("wrong_type.json")),
    );
    let err = TierClassifier::new(model.clone())
        .with_parse_retries(1)
        .extract_tier_requirements("brief")
        .unwrap_err();
    match err {
        GenerationError::MalformedResponse { reason, raw } => {
            assert!(reason.contains("nivel_esencial"));
            assert!(raw.contains("Expose a REST endpoint"));
        }
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
    assert_eq!(model.call_count(), 2);
}

#[test]
fn model_failure_propagates() {
    let model = Arc::new(ScriptedModel::new().fail(GenerationError::Timeout {
        model: "scripted-model".to_string(),
        timeout_secs: 30,
    }));
    let err = TierClassifier::new(model)
        .with_parse_retries(3)
        .extract_tier_requirements("brief")
        .unwrap_err();
    assert!(matches!(err, GenerationError::Timeout { timeout_secs: 30, .. }));
}

#[test]
fn empty_briefing_skips_the_model() {
    let model = Arc::new(ScriptedModel::new());
    let tiers = TierClassifier::new(model.clone())
        .extract_tier_requirements("   \n")
        .unwrap();
    assert!(tiers.is_empty());
    assert_eq!(model.call_count(), 0);
}
