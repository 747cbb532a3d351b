use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Overall trust verdict for a subject article.
pub enum Verdict {
    Reliable,
    MostlyReliable,
    Questionable,
    Unreliable,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Reliable => "reliable",
            Verdict::MostlyReliable => "mostly_reliable",
            Verdict::Questionable => "questionable",
            Verdict::Unreliable => "unreliable",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Inputs and output of one blend, kept for audit logging.
pub struct ScoreBreakdown {
    /// Oracle's self-reported score, or the default when it was omitted.
    pub oracle_score: f64,
    /// `true` when `oracle_score` is the default rather than the oracle's value.
    pub oracle_score_defaulted: bool,
    /// Score recomputed from issue severities.
    pub deterministic_score: u8,
    /// Final 0-100 score.
    pub blended_score: u8,
}

impl std::fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "oracle {:.1}{} / deterministic {} -> {}",
            self.oracle_score,
            if self.oracle_score_defaulted { " (default)" } else { "" },
            self.deterministic_score,
            self.blended_score
        )
    }
}
