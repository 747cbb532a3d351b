//! Validation and coercion of free-form oracle output.
//!
//! The oracle is asked for one JSON object but is not trusted to produce it cleanly.
//! Parsing is done in two steps: locate a JSON object in the text, then walk it field
//! by field, substituting defaults for anything missing or mistyped and recording each
//! substitution as a [`DefaultedField`].

use serde_json::{Map, Value};

use crate::analysis::{Issue, IssueType, Severity};
use crate::constants::MALFORMED_EXCERPT_CHARS;

use super::prompt::truncate_chars;
use super::types::{CandidateResult, DefaultedField, ParseOutcome};

const SUBJECT_EXCERPT_KEYS: &[&str] = &["subjectExcerpt", "grokipediaExcerpt", "gorkpediaExcerpt"];
const REFERENCE_EVIDENCE_KEYS: &[&str] = &["referenceEvidence", "wikipediaEvidence"];

/// Parses raw oracle text into a [`CandidateResult`].
///
/// Returns [`ParseOutcome::Malformed`] only when no JSON object can be recovered.
pub fn parse_oracle_response(raw: &str) -> ParseOutcome {
    let cleaned = strip_code_fence(raw);

    let Some(span) = object_span(cleaned) else {
        return malformed("no JSON object found in oracle response", raw);
    };

    let value: Value = match serde_json::from_str(span) {
        Ok(value) => value,
        Err(err) => return malformed(&format!("invalid JSON: {err}"), raw),
    };

    match value {
        Value::Object(root) => ParseOutcome::Parsed(coerce(&root)),
        _ => malformed("oracle response is not a JSON object", raw),
    }
}

fn malformed(reason: &str, raw: &str) -> ParseOutcome {
    ParseOutcome::Malformed {
        reason: reason.to_string(),
        excerpt: truncate_chars(raw, MALFORMED_EXCERPT_CHARS).to_string(),
    }
}

/// Removes a surrounding markdown code fence (with or without a `json` tag).
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Slice from the first `{` to the last `}` inclusive.
fn object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn coerce(root: &Map<String, Value>) -> CandidateResult {
    let mut out = CandidateResult::default();
    let summary = root.get("summary").and_then(Value::as_object);

    out.oracle_score = summary
        .and_then(|s| s.get("overallScore"))
        .and_then(numeric);
    if out.oracle_score.is_none() {
        out.defaulted.push(DefaultedField::OverallScore);
    }

    out.oracle_verdict = summary
        .and_then(|s| s.get("verdict"))
        .and_then(Value::as_str)
        .map(str::to_string);

    out.verdict_explanation = summary
        .and_then(|s| s.get("verdictExplanation"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    if out.verdict_explanation.is_none() {
        out.defaulted.push(DefaultedField::VerdictExplanation);
    }

    match root.get("issues").and_then(Value::as_array) {
        Some(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                match entry.as_object() {
                    Some(obj) => {
                        let issue = coerce_issue(index, obj, &mut out.defaulted);
                        out.issues.push(issue);
                    }
                    None => out.defaulted.push(DefaultedField::IssueDropped { index }),
                }
            }
        }
        None => out.defaulted.push(DefaultedField::Issues),
    }

    match root.get("topicOverview").and_then(Value::as_str) {
        Some(overview) => out.topic_overview = overview.to_string(),
        None => out.defaulted.push(DefaultedField::TopicOverview),
    }

    match string_list(root.get("keyDifferences")) {
        Some(list) => out.key_differences = list,
        None => out.defaulted.push(DefaultedField::KeyDifferences),
    }

    match string_list(root.get("agreementAreas")) {
        Some(list) => out.agreement_areas = list,
        None => out.defaulted.push(DefaultedField::AgreementAreas),
    }

    out
}

fn coerce_issue(
    index: usize,
    obj: &Map<String, Value>,
    defaulted: &mut Vec<DefaultedField>,
) -> Issue {
    let id = match obj.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            defaulted.push(DefaultedField::IssueId { index });
            format!("issue-{}", index + 1)
        }
    };

    let raw_type = obj.get("type").and_then(Value::as_str).unwrap_or_default();
    let issue_type = IssueType::parse(raw_type).unwrap_or_else(|| {
        defaulted.push(DefaultedField::IssueType {
            index,
            raw: raw_type.to_string(),
        });
        IssueType::Other
    });

    let raw_severity = obj
        .get("severity")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let severity = Severity::parse(raw_severity).unwrap_or_else(|| {
        defaulted.push(DefaultedField::IssueSeverity {
            index,
            raw: raw_severity.to_string(),
        });
        Severity::Medium
    });

    Issue {
        id,
        issue_type,
        severity,
        title: text_field(obj, index, "title", &["title"], defaulted),
        description: text_field(obj, index, "description", &["description"], defaulted),
        subject_excerpt: text_field(obj, index, "subjectExcerpt", SUBJECT_EXCERPT_KEYS, defaulted),
        reference_evidence: text_field(
            obj,
            index,
            "referenceEvidence",
            REFERENCE_EVIDENCE_KEYS,
            defaulted,
        ),
        recommendation: text_field(obj, index, "recommendation", &["recommendation"], defaulted),
    }
}

/// First string value found under any of `keys`, or empty.
fn text_field(
    obj: &Map<String, Value>,
    index: usize,
    field: &'static str,
    keys: &[&str],
    defaulted: &mut Vec<DefaultedField>,
) -> String {
    match keys.iter().find_map(|key| obj.get(*key).and_then(Value::as_str)) {
        Some(text) => text.to_string(),
        None => {
            defaulted.push(DefaultedField::IssueField { index, field });
            String::new()
        }
    }
}

/// Finite number, or a string holding one.
fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}
