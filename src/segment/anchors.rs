use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MAX_ANCHORS_PER_KIND;

static DATE_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|\d{4}|(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s*\d{4})\b",
    )
    .expect("date anchor pattern is valid")
});

static QUANTITY_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d+(?:,\d{3})*(?:\.\d+)?\s*(?:(?:percent|million|billion|trillion|thousand|km|miles|meters|feet|years|months|days)\b|%)",
    )
    .expect("quantity anchor pattern is valid")
});

/// Extracts date-like and quantity-with-unit tokens from `text`.
///
/// At most 10 of each kind are taken, then the union is deduplicated keeping first
/// occurrence order. These anchors only enrich the oracle prompt; scoring never reads
/// them.
pub fn extract_factual_anchors(text: &str) -> Vec<String> {
    let dates = DATE_ANCHOR
        .find_iter(text)
        .take(MAX_ANCHORS_PER_KIND)
        .map(|m| m.as_str());
    let quantities = QUANTITY_ANCHOR
        .find_iter(text)
        .take(MAX_ANCHORS_PER_KIND)
        .map(|m| m.as_str());

    let mut seen = HashSet::new();
    dates
        .chain(quantities)
        .filter(|anchor| seen.insert(*anchor))
        .map(str::to_string)
        .collect()
}
