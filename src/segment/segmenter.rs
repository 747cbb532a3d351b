use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SECTION_HEADING, MAX_CLAIM_CHARS, MIN_CLAIM_CHARS, MIN_CLAIM_TOKENS,
    MIN_PARAGRAPH_CHARS,
};
use crate::content::Section;

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence break pattern is valid"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("paragraph pattern is valid"));

const NON_FACTUAL_PREFIXES: [&str; 4] = ["what ", "how ", "why ", "please "];

/// A comparable unit of article text with its candidate factual claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSegment {
    pub id: String,
    pub heading: String,
    pub text: String,
    pub claims: Vec<String>,
}

impl ContentSegment {
    fn new(index: usize, heading: String, text: String) -> Self {
        let claims = extract_claims(&text);
        Self {
            id: format!("segment-{index}"),
            heading,
            text,
            claims,
        }
    }
}

/// Splits `text` into sentences and keeps the ones that read like factual statements.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace. It is kept when it is
/// strictly between 20 and 500 characters, has at least 5 whitespace-delimited tokens,
/// and is neither a question nor an instruction.
pub fn extract_claims(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .filter(|s| is_factual_claim(s))
        .map(str::to_string)
        .collect()
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // terminal punctuation is one ASCII byte and stays with its sentence
        sentences.push(text[start..m.start() + 1].trim());
        start = m.end();
    }
    sentences.push(text[start..].trim());

    sentences
}

fn is_factual_claim(sentence: &str) -> bool {
    let len = sentence.chars().count();
    if len <= MIN_CLAIM_CHARS || len >= MAX_CLAIM_CHARS {
        return false;
    }

    let lower = sentence.to_lowercase();
    if NON_FACTUAL_PREFIXES.iter().any(|p| lower.starts_with(p)) || lower.ends_with('?') {
        return false;
    }

    sentence.split_whitespace().count() >= MIN_CLAIM_TOKENS
}

/// Segments an article into ordered [`ContentSegment`]s.
///
/// Declared sections win. Without them the raw text is split on blank lines, paragraphs
/// shorter than 50 characters are dropped, and the survivors are labelled
/// `Introduction`, `Section 1`, `Section 2`, ... in emission order.
pub fn segment_content(raw_text: &str, sections: &[Section]) -> Vec<ContentSegment> {
    if !sections.is_empty() {
        return sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let heading = if section.heading.trim().is_empty() {
                    DEFAULT_SECTION_HEADING.to_string()
                } else {
                    section.heading.clone()
                };
                ContentSegment::new(index, heading, section.text.clone())
            })
            .collect();
    }

    PARAGRAPH_BREAK
        .split(raw_text)
        .map(str::trim)
        .filter(|p| p.chars().count() >= MIN_PARAGRAPH_CHARS)
        .enumerate()
        .map(|(index, paragraph)| {
            let heading = if index == 0 {
                DEFAULT_SECTION_HEADING.to_string()
            } else {
                format!("Section {index}")
            };
            ContentSegment::new(index, heading, paragraph.to_string())
        })
        .collect()
}

/// One-line segment and claim tally for both sides, used in logs and the oracle prompt.
pub fn comparison_summary(subject: &[ContentSegment], reference: &[ContentSegment]) -> String {
    let claims = |segments: &[ContentSegment]| -> usize {
        segments.iter().map(|s| s.claims.len()).sum()
    };

    format!(
        "subject: {} segments, {} claims | reference: {} segments, {} claims",
        subject.len(),
        claims(subject),
        reference.len(),
        claims(reference)
    )
}
