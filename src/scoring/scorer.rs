use crate::analysis::{Issue, Severity};
use crate::constants::{MAX_SCORE, MIN_SCORE, SATURATION_KNEE, SATURATION_SCALE};

/// Penalty weight of one issue of the given severity.
pub fn severity_weight(severity: Severity) -> u32 {
    severity.weight()
}

/// Sum of severity weights.
pub fn total_penalty<I>(severities: I) -> u32
where
    I: IntoIterator<Item = Severity>,
{
    severities.into_iter().map(severity_weight).sum()
}

/// Penalty after logarithmic saturation.
///
/// Linear up to the knee; above it, `knee + log2(total - knee + 1) * scale`, so many
/// small issues cannot drive the score to zero on their own.
pub fn adjusted_penalty(total: u32) -> f64 {
    if total > SATURATION_KNEE {
        let excess = f64::from(total - SATURATION_KNEE + 1);
        f64::from(SATURATION_KNEE) + excess.log2() * SATURATION_SCALE
    } else {
        f64::from(total)
    }
}

/// Oracle-free score in `0..=100`. Depends only on the severity multiset.
pub fn deterministic_score<I>(severities: I) -> u8
where
    I: IntoIterator<Item = Severity>,
{
    let adjusted = adjusted_penalty(total_penalty(severities));
    let score = (f64::from(MAX_SCORE) - adjusted).round();
    score.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8
}

/// [`deterministic_score`] over the severities of `issues`.
pub fn score_issues(issues: &[Issue]) -> u8 {
    deterministic_score(issues.iter().map(|issue| issue.severity))
}
