use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, info};

use crate::analysis::{AnalysisResult, Issue, IssueType, Severity};
use crate::constants::{EVIDENCE_CONFIDENCE, MAX_SCORE, MAX_SEGMENT_CLAIMS, MIN_SCORE, REFERENCE_WIKI_BASE};
use crate::content::ArticleContent;

use super::types::{
    ClaimEvidence, ClaimReview, Classification, CreativeWork, Organization, Rating, SegmentClaim,
};

const DEFAULT_AUTHOR_NAME: &str = "TrustLens Verification System";
const DEFAULT_SUBJECT_AUTHOR: &str = "AI-generated encyclopedia";
const DEFAULT_METHODOLOGY: &str = "Oracle issue extraction blended 70/30 with deterministic \
     severity scoring; claim-level similarity and hallucination values are severity heuristics";

/// Labels written into every claim review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// `author.name`: the organization issuing the review.
    pub author_name: String,
    /// `itemReviewed.author`: who produced the subject article.
    pub subject_author: String,
    pub methodology: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            author_name: DEFAULT_AUTHOR_NAME.to_string(),
            subject_author: DEFAULT_SUBJECT_AUTHOR.to_string(),
            methodology: DEFAULT_METHODOLOGY.to_string(),
        }
    }
}

impl ReviewConfig {
    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = name.into();
        self
    }

    pub fn with_subject_author(mut self, author: impl Into<String>) -> Self {
        self.subject_author = author.into();
        self
    }

    pub fn with_methodology(mut self, methodology: impl Into<String>) -> Self {
        self.methodology = methodology.into();
        self
    }
}

/// Builds [`ClaimReview`] documents from finished analyses.
#[derive(Debug, Clone, Default)]
pub struct ClaimReviewAssembler {
    config: ReviewConfig,
}

impl ClaimReviewAssembler {
    pub fn new(config: ReviewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Assembles a review stamped with the current time.
    pub fn build(
        &self,
        result: &AnalysisResult,
        subject: &ArticleContent,
        reference: &ArticleContent,
        topic: &str,
    ) -> ClaimReview {
        self.build_at(result, subject, reference, topic, Utc::now())
    }

    /// Assembles a review with an explicit publication time.
    pub fn build_at(
        &self,
        result: &AnalysisResult,
        subject: &ArticleContent,
        reference: &ArticleContent,
        topic: &str,
        published_at: DateTime<Utc>,
    ) -> ClaimReview {
        let evidence_url = reference_url(reference);
        let dropped = result.issues.len().saturating_sub(MAX_SEGMENT_CLAIMS);
        if dropped > 0 {
            debug!(dropped, kept = MAX_SEGMENT_CLAIMS, "Truncating segment claims");
        }

        let segment_claims: Vec<SegmentClaim> = result
            .issues
            .iter()
            .take(MAX_SEGMENT_CLAIMS)
            .enumerate()
            .map(|(index, issue)| segment_claim(index, issue, &evidence_url))
            .collect();

        let summary = &result.summary;
        info!(
            topic,
            trust_score = summary.overall_score,
            verdict = %summary.verdict,
            segment_claims = segment_claims.len(),
            "Claim review assembled"
        );

        ClaimReview {
            context: Default::default(),
            kind: Default::default(),
            date_published: published_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            url: None,
            claim_reviewed: topic.to_string(),
            review_rating: Rating {
                kind: Default::default(),
                rating_value: summary.overall_score,
                best_rating: MAX_SCORE,
                worst_rating: MIN_SCORE,
                rating_explanation: summary.verdict_explanation.clone(),
            },
            item_reviewed: CreativeWork {
                kind: Default::default(),
                name: subject.title.clone(),
                author: self.config.subject_author.clone(),
                date_published: subject.fetched_at.clone(),
                url: subject.source_url.clone(),
            },
            author: Organization {
                kind: Default::default(),
                name: self.config.author_name.clone(),
            },
            segment_claims,
            trust_score: summary.overall_score,
            verdict: summary.verdict,
            methodology: self.config.methodology.clone(),
        }
    }
}

/// Assembles a review with the default [`ReviewConfig`].
pub fn build_claim_review(
    result: &AnalysisResult,
    subject: &ArticleContent,
    reference: &ArticleContent,
    topic: &str,
) -> ClaimReview {
    ClaimReviewAssembler::default().build(result, subject, reference, topic)
}

fn segment_claim(index: usize, issue: &Issue, evidence_url: &str) -> SegmentClaim {
    SegmentClaim {
        segment: format!("segment-{}", index + 1),
        text: issue.subject_excerpt.clone(),
        classification: classify_issue(issue.issue_type),
        similarity_score: heuristic_similarity(issue.severity),
        hallucination_probability: hallucination_probability(issue.issue_type),
        evidence: vec![ClaimEvidence {
            url: evidence_url.to_string(),
            snippet: issue.reference_evidence.clone(),
            confidence: EVIDENCE_CONFIDENCE,
            source_offset: 0,
        }],
        explanation: issue.description.clone(),
    }
}

pub fn classify_issue(issue_type: IssueType) -> Classification {
    match issue_type {
        IssueType::FactualError | IssueType::Hallucination => Classification::Conflict,
        IssueType::MissingContext => Classification::MissingContext,
        IssueType::Misleading | IssueType::Outdated => Classification::Unsupported,
        IssueType::Bias | IssueType::Other => Classification::Aligned,
    }
}

/// Placeholder similarity: 0.75 minus a severity discount.
pub fn heuristic_similarity(severity: Severity) -> f64 {
    let discount = match severity {
        Severity::Critical => 0.4,
        Severity::High => 0.3,
        Severity::Medium | Severity::Low => 0.1,
    };
    0.75 - discount
}

pub fn hallucination_probability(issue_type: IssueType) -> f64 {
    match issue_type {
        IssueType::Hallucination => 0.85,
        IssueType::FactualError => 0.65,
        _ => 0.3,
    }
}

/// The reference's own URL, or its canonical encyclopedia URL built from the title.
pub fn reference_url(reference: &ArticleContent) -> String {
    match &reference.source_url {
        Some(url) if !url.trim().is_empty() => url.clone(),
        _ => format!(
            "{REFERENCE_WIKI_BASE}{}",
            urlencoding::encode(&reference.title)
        ),
    }
}
