use crate::constants::{
    DETERMINISTIC_BLEND_WEIGHT, MAX_SCORE, MIN_SCORE, MOSTLY_RELIABLE_CRITICAL_COUNT,
    MOSTLY_RELIABLE_HIGH_COUNT, MOSTLY_RELIABLE_SCORE_BELOW, ORACLE_BLEND_WEIGHT,
    QUESTIONABLE_CRITICAL_COUNT, QUESTIONABLE_HIGH_COUNT, QUESTIONABLE_SCORE_BELOW,
    UNRELIABLE_CRITICAL_COUNT, UNRELIABLE_SCORE_BELOW,
};

use super::types::Verdict;

/// `round(oracle * 0.7 + deterministic * 0.3)`, clamped to `0..=100`.
pub fn blend(oracle_score: f64, deterministic_score: f64) -> u8 {
    let mixed = oracle_score * ORACLE_BLEND_WEIGHT + deterministic_score * DETERMINISTIC_BLEND_WEIGHT;
    if mixed.is_nan() {
        return MIN_SCORE;
    }
    mixed
        .round()
        .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8
}

/// Maps a blended score and severity counts to a verdict. First matching rule wins.
pub fn classify(score: u8, critical: usize, high: usize) -> Verdict {
    if critical >= UNRELIABLE_CRITICAL_COUNT || score < UNRELIABLE_SCORE_BELOW {
        Verdict::Unreliable
    } else if critical >= QUESTIONABLE_CRITICAL_COUNT
        || high >= QUESTIONABLE_HIGH_COUNT
        || score < QUESTIONABLE_SCORE_BELOW
    {
        Verdict::Questionable
    } else if critical >= MOSTLY_RELIABLE_CRITICAL_COUNT
        || high >= MOSTLY_RELIABLE_HIGH_COUNT
        || score < MOSTLY_RELIABLE_SCORE_BELOW
    {
        Verdict::MostlyReliable
    } else {
        Verdict::Reliable
    }
}
