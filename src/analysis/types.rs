use serde::{Deserialize, Serialize};

use crate::constants::{WEIGHT_CRITICAL, WEIGHT_HIGH, WEIGHT_LOW, WEIGHT_MEDIUM};
use crate::scoring::Verdict;

/// How serious an issue is.
///
/// Deserialization is lenient: unrecognized values become [`Severity::Medium`], whose
/// weight is the scorer's default weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Penalty weight used by the deterministic scorer.
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Critical => WEIGHT_CRITICAL,
            Severity::High => WEIGHT_HIGH,
            Severity::Medium => WEIGHT_MEDIUM,
            Severity::Low => WEIGHT_LOW,
        }
    }

    /// Strict, case-insensitive parse. `None` for anything outside the four levels.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        Severity::parse(&raw).unwrap_or(Severity::Medium)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a problem found in the subject article.
///
/// `Other` holds anything the oracle invents outside the six known categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum IssueType {
    FactualError,
    Hallucination,
    Bias,
    MissingContext,
    Misleading,
    Outdated,
    Other,
}

impl IssueType {
    /// Case-insensitive parse accepting `_`, `-` or space as separators.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "factual_error" => Some(IssueType::FactualError),
            "hallucination" => Some(IssueType::Hallucination),
            "bias" => Some(IssueType::Bias),
            "missing_context" => Some(IssueType::MissingContext),
            "misleading" => Some(IssueType::Misleading),
            "outdated" => Some(IssueType::Outdated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::FactualError => "factual_error",
            IssueType::Hallucination => "hallucination",
            IssueType::Bias => "bias",
            IssueType::MissingContext => "missing_context",
            IssueType::Misleading => "misleading",
            IssueType::Outdated => "outdated",
            IssueType::Other => "other",
        }
    }
}

impl From<String> for IssueType {
    fn from(raw: String) -> Self {
        IssueType::parse(&raw).unwrap_or(IssueType::Other)
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['-', ' '], "_")
}

/// One problem the oracle found, with excerpts from both articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subject_excerpt: String,
    #[serde(default)]
    pub reference_evidence: String,
    #[serde(default)]
    pub recommendation: String,
}

/// Issue tallies by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn from_issues(issues: &[Issue]) -> Self {
        issues
            .iter()
            .fold(Self::default(), |mut counts, issue| {
                match issue.severity {
                    Severity::Critical => counts.critical += 1,
                    Severity::High => counts.high += 1,
                    Severity::Medium => counts.medium += 1,
                    Severity::Low => counts.low += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Headline numbers of an analysis, recomputed by the core.
///
/// `total_issues` always equals the sum of the four severity counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub overall_score: u8,
    pub total_issues: usize,
    pub critical_issues: usize,
    pub high_issues: usize,
    pub medium_issues: usize,
    pub low_issues: usize,
    pub verdict: Verdict,
    #[serde(default)]
    pub verdict_explanation: String,
}

/// Final output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: AnalysisSummary,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub topic_overview: String,
    #[serde(default)]
    pub key_differences: Vec<String>,
    #[serde(default)]
    pub agreement_areas: Vec<String>,
}
