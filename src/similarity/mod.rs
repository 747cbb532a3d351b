//! Token-overlap similarity between text spans.
//!
//! Jaccard index over lowercase word sets. Cheap, symmetric and deterministic; it is a
//! lookup aid, not a semantic measure.

use std::collections::HashSet;

use crate::constants::MIN_SIMILARITY_TOKEN_CHARS;
use crate::segment::ContentSegment;


fn token_set(text: &str) -> HashSet<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_SIMILARITY_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Returns `|A ∩ B| / |A ∪ B|` over the word sets of `a` and `b`, or `0.0` when both
/// sets are empty.
///
/// Words are lowercased, stripped of punctuation and must be longer than 3 characters.
pub fn similarity(a: &str, b: &str) -> f64 {
    let left = token_set(a);
    let right = token_set(b);

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = left.intersection(&right).count();
    intersection as f64 / union as f64
}

/// Finds the segment whose text best matches `claim`.
///
/// Ties keep the first segment encountered. Returns `None` when nothing overlaps.
pub fn find_relevant_evidence<'a>(
    claim: &str,
    segments: &'a [ContentSegment],
) -> Option<(&'a ContentSegment, f64)> {
    let mut best: Option<(&ContentSegment, f64)> = None;

    for segment in segments {
        let score = similarity(claim, &segment.text);
        let best_score = best.map_or(0.0, |(_, s)| s);
        if score > best_score {
            best = Some((segment, score));
        }
    }

    best
}
