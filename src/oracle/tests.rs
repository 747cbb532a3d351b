use std::time::Duration;

use super::*;
use crate::analysis::{IssueType, Severity};
use crate::content::{AnalysisDepth, ArticleContent, Section};

const COMPLETE_RESPONSE: &str = r#"{
  "summary": {
    "overallScore": 45,
    "totalIssues": 99,
    "verdict": "questionable",
    "verdictExplanation": "Several dates are wrong."
  },
  "issues": [
    {
      "id": "issue-1",
      "type": "factual_error",
      "severity": "critical",
      "title": "Wrong discovery year",
      "description": "The moons were discovered in 1877.",
      "subjectExcerpt": "discovered in 1977",
      "referenceEvidence": "discovered in 1877",
      "recommendation": "Fix the year."
    }
  ],
  "topicOverview": "Mars and its moons.",
  "keyDifferences": ["Discovery year"],
  "agreementAreas": ["Orbital position"]
}"#;

fn candidate(raw: &str) -> CandidateResult {
    match parse_oracle_response(raw) {
        ParseOutcome::Parsed(candidate) => candidate,
        ParseOutcome::Malformed { reason, .. } => panic!("expected parsed response: {reason}"),
    }
}

#[test]
fn test_parse_complete_response() {
    let parsed = candidate(COMPLETE_RESPONSE);

    assert_eq!(parsed.oracle_score, Some(45.0));
    assert_eq!(parsed.oracle_verdict.as_deref(), Some("questionable"));
    assert_eq!(parsed.issues.len(), 1);
    assert_eq!(parsed.issues[0].issue_type, IssueType::FactualError);
    assert_eq!(parsed.issues[0].severity, Severity::Critical);
    assert_eq!(parsed.issues[0].subject_excerpt, "discovered in 1977");
    assert_eq!(parsed.key_differences, vec!["Discovery year".to_string()]);
    assert!(parsed.defaulted.is_empty());
    assert!(!parsed.is_incomplete());
}

#[test]
fn test_parse_strips_json_code_fence() {
    let fenced = format!("```json\n{COMPLETE_RESPONSE}\n```");

    assert_eq!(candidate(&fenced).oracle_score, Some(45.0));
}

#[test]
fn test_parse_ignores_surrounding_prose() {
    let chatty = format!("Here is my analysis:\n{COMPLETE_RESPONSE}\nLet me know if you need more.");

    assert_eq!(candidate(&chatty).issues.len(), 1);
}

#[test]
fn test_parse_without_object_is_malformed() {
    let outcome = parse_oracle_response("I cannot help with that.");

    match outcome {
        ParseOutcome::Malformed { excerpt, .. } => assert_eq!(excerpt, "I cannot help with that."),
        ParseOutcome::Parsed(_) => panic!("expected malformed outcome"),
    }
}

#[test]
fn test_parse_empty_text_is_malformed() {
    assert!(!parse_oracle_response("").is_parsed());
}

#[test]
fn test_parse_invalid_json_is_malformed() {
    match parse_oracle_response("{summary: nope}") {
        ParseOutcome::Malformed { reason, .. } => assert!(reason.starts_with("invalid JSON")),
        ParseOutcome::Parsed(_) => panic!("expected malformed outcome"),
    }
}

#[test]
fn test_malformed_excerpt_is_bounded() {
    let raw = "x".repeat(1_500);

    match parse_oracle_response(&raw) {
        ParseOutcome::Malformed { excerpt, .. } => assert_eq!(excerpt.chars().count(), 1_000),
        ParseOutcome::Parsed(_) => panic!("expected malformed outcome"),
    }
}

#[test]
fn test_missing_summary_is_recorded_as_defaulted() {
    let parsed = candidate(r#"{"issues": []}"#);

    assert_eq!(parsed.oracle_score, None);
    assert!(parsed.is_incomplete());
    assert!(parsed.defaulted.contains(&DefaultedField::OverallScore));
    assert!(parsed.defaulted.contains(&DefaultedField::VerdictExplanation));
    assert!(parsed.defaulted.contains(&DefaultedField::TopicOverview));
    assert!(!parsed.defaulted.contains(&DefaultedField::Issues));
}

#[test]
fn test_missing_issues_array_becomes_empty() {
    let parsed = candidate(r#"{"summary": {"overallScore": 80}}"#);

    assert!(parsed.issues.is_empty());
    assert!(parsed.defaulted.contains(&DefaultedField::Issues));
}

#[test]
fn test_numeric_string_score_is_accepted() {
    let parsed = candidate(r#"{"summary": {"overallScore": " 72 "}}"#);

    assert_eq!(parsed.oracle_score, Some(72.0));
}

#[test]
fn test_non_numeric_score_is_defaulted() {
    let parsed = candidate(r#"{"summary": {"overallScore": "high"}}"#);

    assert_eq!(parsed.oracle_score, None);
    assert!(parsed.is_incomplete());
}

#[test]
fn test_unknown_severity_coerced_to_medium() {
    let parsed = candidate(
        r#"{"issues": [{"id": "a", "type": "bias", "severity": "severe", "title": "t",
            "description": "d", "subjectExcerpt": "s", "referenceEvidence": "r",
            "recommendation": "fix"}]}"#,
    );

    assert_eq!(parsed.issues[0].severity, Severity::Medium);
    assert!(parsed.defaulted.contains(&DefaultedField::IssueSeverity {
        index: 0,
        raw: "severe".to_string(),
    }));
}

#[test]
fn test_unknown_issue_type_becomes_other() {
    let parsed = candidate(r#"{"issues": [{"id": "a", "type": "rumor", "severity": "low"}]}"#);

    assert_eq!(parsed.issues[0].issue_type, IssueType::Other);
    assert_eq!(parsed.issues[0].severity, Severity::Low);
}

#[test]
fn test_issue_labels_are_case_insensitive() {
    let parsed = candidate(
        r#"{"issues": [{"id": "a", "type": "Missing-Context", "severity": "HIGH"}]}"#,
    );

    assert_eq!(parsed.issues[0].issue_type, IssueType::MissingContext);
    assert_eq!(parsed.issues[0].severity, Severity::High);
}

#[test]
fn test_missing_issue_id_is_assigned_by_position() {
    let parsed = candidate(
        r#"{"issues": [{"id": "first", "type": "bias", "severity": "low"},
                        {"type": "bias", "severity": "low"}]}"#,
    );

    assert_eq!(parsed.issues[0].id, "first");
    assert_eq!(parsed.issues[1].id, "issue-2");
    assert!(parsed.defaulted.contains(&DefaultedField::IssueId { index: 1 }));
}

#[test]
fn test_non_object_issue_is_dropped() {
    let parsed = candidate(
        r#"{"issues": ["stray text", {"id": "b", "type": "bias", "severity": "low"}]}"#,
    );

    assert_eq!(parsed.issues.len(), 1);
    assert_eq!(parsed.issues[0].id, "b");
    assert!(parsed.defaulted.contains(&DefaultedField::IssueDropped { index: 0 }));
}

#[test]
fn test_legacy_excerpt_keys_are_accepted() {
    let parsed = candidate(
        r#"{"issues": [{"id": "a", "type": "bias", "severity": "low",
            "grokipediaExcerpt": "subject quote", "wikipediaEvidence": "reference quote"}]}"#,
    );

    assert_eq!(parsed.issues[0].subject_excerpt, "subject quote");
    assert_eq!(parsed.issues[0].reference_evidence, "reference quote");
    assert!(!parsed.defaulted.contains(&DefaultedField::IssueField {
        index: 0,
        field: "subjectExcerpt",
    }));
}

#[test]
fn test_defaulted_field_display() {
    assert_eq!(DefaultedField::OverallScore.to_string(), "summary.overallScore");
    assert_eq!(
        DefaultedField::IssueField { index: 3, field: "title" }.to_string(),
        "issues[3].title"
    );
}

#[test]
fn test_truncate_chars_respects_char_boundaries() {
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("short", 10), "short");
}

fn article(title: &str, body: &str) -> ArticleContent {
    ArticleContent::new(title, body)
}

#[test]
fn test_request_budgets_follow_depth() {
    let subject = article("Mars", "Mars is the fourth planet from the Sun.");
    let reference = article("Mars", "Mars is the fourth planet from the Sun.");
    let evidence = PromptEvidence::gather(&subject, &reference);

    let quick = build_oracle_request(&subject, &reference, AnalysisDepth::Quick, &evidence);
    let deep = build_oracle_request(&subject, &reference, AnalysisDepth::Comprehensive, &evidence);

    assert_eq!(quick.max_output_tokens, 4_000);
    assert_eq!(deep.max_output_tokens, 8_000);
    assert!((quick.temperature - 0.1).abs() < f64::EPSILON);
    assert!(quick.system_instructions.contains("5-10 most significant issues"));
    assert!(deep.system_instructions.contains("10-20 issues"));
}

#[test]
fn test_request_truncates_article_text_to_budget() {
    let long_body = format!("{}TAILMARKER", "a".repeat(13_000));
    let subject = article("Long", &long_body);
    let reference = article("Short", "Reference body text.");
    let evidence = PromptEvidence::gather(&subject, &reference);

    let quick = build_oracle_request(&subject, &reference, AnalysisDepth::Quick, &evidence);
    let deep = build_oracle_request(&subject, &reference, AnalysisDepth::Comprehensive, &evidence);

    assert!(!quick.prompt.contains("TAILMARKER"));
    assert!(deep.prompt.contains("TAILMARKER"));
}

#[test]
fn test_request_prompt_labels_both_articles() {
    let subject = article("Mars", "Subject body.").with_source_url("https://grokipedia.com/page/Mars");
    let reference = article("Mars (planet)", "Reference body.");
    let evidence = PromptEvidence::gather(&subject, &reference);

    let request = build_oracle_request(&subject, &reference, AnalysisDepth::Quick, &evidence);

    assert!(request.prompt.contains("URL: https://grokipedia.com/page/Mars"));
    assert!(request.prompt.contains("Title: Mars (planet)"));
    assert!(request.prompt.contains("URL: N/A"));
}

#[test]
fn test_request_carries_anchors() {
    let subject = article("Mars", "Phobos was discovered in 1877 at 23 km wide.");
    let reference = article("Mars", "No numbers here at all.");
    let evidence = PromptEvidence::gather(&subject, &reference);

    let request = build_oracle_request(&subject, &reference, AnalysisDepth::Quick, &evidence);

    assert!(request.system_instructions.contains("Subject anchors: 1877, 23 km"));
    assert!(request
        .system_instructions
        .contains("Reference anchors: No specific facts extracted"));
}

#[test]
fn test_segment_map_pairs_closest_sections() {
    let subject = article("Mars", "").with_sections(vec![Section::new(
        "Moons",
        "Mars has two small moons named Phobos and Deimos.",
    )]);
    let reference = article("Mars", "").with_sections(vec![
        Section::new("Orbit", "The orbit of Mars is elliptical around the Sun."),
        Section::new("Moons", "Phobos and Deimos are the two moons of Mars."),
    ]);

    let map = PromptEvidence::gather(&subject, &reference).segment_map();

    assert!(map.contains("- [Moons]"));
    assert!(map.contains("closest reference section \"Moons\""));
}

#[test]
fn test_segment_map_one_line_per_segment() {
    let subject = article("Mars", "").with_sections(vec![
        Section::new("Moons", "Mars has two small moons named Phobos and Deimos."),
        Section::new("Cuisine", "Local recipes favour paprika and slow roasting."),
    ]);
    let reference = article("Mars", "").with_sections(vec![Section::new(
        "Moons",
        "Phobos and Deimos are the two moons of Mars.",
    )]);

    let map = PromptEvidence::gather(&subject, &reference).segment_map();
    let lines: Vec<&str> = map.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("- [Moons] "));
    assert_eq!(lines[1], "- [Cuisine] 1 claims -> no overlapping reference section");
    assert!(map.ends_with('\n'));
}

#[test]
fn test_segment_map_without_segments() {
    let empty = article("Empty", "");
    let map = PromptEvidence::gather(&empty, &empty).segment_map();

    assert_eq!(map, "- no subject segments extracted\n");
}

#[tokio::test]
async fn test_mock_oracle_records_request() {
    let oracle = MockOracle::replying("{}");
    let request = OracleRequest {
        system_instructions: "sys".to_string(),
        prompt: "prompt".to_string(),
        max_output_tokens: 10,
        temperature: 0.1,
    };

    let text = oracle.invoke(&request).await.unwrap();

    assert_eq!(text, "{}");
    assert_eq!(oracle.call_count(), 1);
    assert_eq!(oracle.last_request(), Some(request));
}

#[tokio::test]
async fn test_mock_oracle_failure_modes() {
    let request = OracleRequest {
        system_instructions: String::new(),
        prompt: String::new(),
        max_output_tokens: 1,
        temperature: 0.1,
    };

    let failed = MockOracle::failing("quota exceeded").invoke(&request).await;
    let timed_out = MockOracle::timing_out(Duration::from_secs(5))
        .invoke(&request)
        .await;

    assert!(matches!(failed, Err(OracleError::CallFailed { reason }) if reason == "quota exceeded"));
    assert!(matches!(timed_out, Err(OracleError::Timeout { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_bounded_times_out_slow_calls() {
    let result = client::bounded(
        Duration::from_secs(1),
        tokio::time::sleep(Duration::from_secs(30)),
    )
    .await;

    assert!(matches!(result, Err(OracleError::Timeout { after }) if after == Duration::from_secs(1)));
}

#[tokio::test(start_paused = true)]
async fn test_bounded_passes_fast_calls_through() {
    let result = client::bounded(Duration::from_secs(1), async { 7 }).await;

    assert_eq!(result.unwrap(), 7);
}
