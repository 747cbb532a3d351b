use crate::analysis::Issue;

/// Everything sent to the oracle for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleRequest {
    pub system_instructions: String,
    pub prompt: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
}

/// A field the oracle left out or got wrong, and which default replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultedField {
    /// `summary.overallScore` missing or not numeric; the blender uses 50.
    OverallScore,
    /// `summary.verdictExplanation` missing; the pipeline writes one.
    VerdictExplanation,
    /// `issues` missing or not an array; treated as empty.
    Issues,
    TopicOverview,
    KeyDifferences,
    AgreementAreas,
    /// An `issues` entry that was not an object and was dropped.
    IssueDropped { index: usize },
    /// Missing issue id; `issue-{n}` was assigned.
    IssueId { index: usize },
    /// Unknown issue type; rendered as `other`.
    IssueType { index: usize, raw: String },
    /// Unknown or missing severity; coerced to `medium`.
    IssueSeverity { index: usize, raw: String },
    /// Missing free-text field on an issue; left empty.
    IssueField { index: usize, field: &'static str },
}

impl std::fmt::Display for DefaultedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultedField::OverallScore => write!(f, "summary.overallScore"),
            DefaultedField::VerdictExplanation => write!(f, "summary.verdictExplanation"),
            DefaultedField::Issues => write!(f, "issues"),
            DefaultedField::TopicOverview => write!(f, "topicOverview"),
            DefaultedField::KeyDifferences => write!(f, "keyDifferences"),
            DefaultedField::AgreementAreas => write!(f, "agreementAreas"),
            DefaultedField::IssueDropped { index } => write!(f, "issues[{index}] (dropped)"),
            DefaultedField::IssueId { index } => write!(f, "issues[{index}].id"),
            DefaultedField::IssueType { index, raw } => {
                write!(f, "issues[{index}].type ({raw:?})")
            }
            DefaultedField::IssueSeverity { index, raw } => {
                write!(f, "issues[{index}].severity ({raw:?})")
            }
            DefaultedField::IssueField { index, field } => write!(f, "issues[{index}].{field}"),
        }
    }
}

/// The oracle's answer after validation and coercion. Nothing here is trusted for the
/// final output except as documented blend input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateResult {
    /// Self-reported score, if the oracle gave a numeric one.
    pub oracle_score: Option<f64>,
    /// Self-reported verdict label, kept for logging only.
    pub oracle_verdict: Option<String>,
    pub verdict_explanation: Option<String>,
    pub issues: Vec<Issue>,
    pub topic_overview: String,
    pub key_differences: Vec<String>,
    pub agreement_areas: Vec<String>,
    /// Every substitution applied while coercing the response.
    pub defaulted: Vec<DefaultedField>,
}

impl CandidateResult {
    /// `true` when the oracle omitted its overall score.
    pub fn is_incomplete(&self) -> bool {
        self.defaulted.contains(&DefaultedField::OverallScore)
    }
}

/// Outcome of parsing free-form oracle text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(CandidateResult),
    Malformed {
        reason: String,
        excerpt: String,
    },
}

impl ParseOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }
}
