use serde::{Deserialize, Serialize};

use crate::scoring::Verdict;

/// `@context` marker. Only `https://schema.org` deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemaOrgContext {
    #[default]
    #[serde(rename = "https://schema.org")]
    SchemaOrg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClaimReviewType {
    #[default]
    ClaimReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RatingType {
    #[default]
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CreativeWorkType {
    #[default]
    CreativeWork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrganizationType {
    #[default]
    Organization,
}

/// How a subject claim relates to the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Aligned,
    MissingContext,
    Conflict,
    Unsupported,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Aligned => "aligned",
            Classification::MissingContext => "missing_context",
            Classification::Conflict => "conflict",
            Classification::Unsupported => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(rename = "@type")]
    pub kind: RatingType,
    pub rating_value: u8,
    pub best_rating: u8,
    pub worst_rating: u8,
    pub rating_explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeWork {
    #[serde(rename = "@type")]
    pub kind: CreativeWorkType,
    pub name: String,
    pub author: String,
    pub date_published: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: OrganizationType,
    pub name: String,
}

/// Reference passage backing a segment claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimEvidence {
    pub url: String,
    pub snippet: String,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub source_offset: usize,
}

/// One reviewed claim, derived from one analysis issue.
///
/// `similarity_score` and `hallucination_probability` are heuristics keyed off severity
/// and issue type, not measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentClaim {
    pub segment: String,
    pub text: String,
    pub classification: Classification,
    pub similarity_score: f64,
    pub hallucination_probability: f64,
    pub evidence: Vec<ClaimEvidence>,
    pub explanation: String,
}

/// schema.org `ClaimReview` document for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReview {
    #[serde(rename = "@context")]
    pub context: SchemaOrgContext,
    #[serde(rename = "@type")]
    pub kind: ClaimReviewType,
    /// RFC 3339 UTC timestamp of assembly.
    pub date_published: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The topic under review.
    pub claim_reviewed: String,
    pub review_rating: Rating,
    pub item_reviewed: CreativeWork,
    pub author: Organization,
    pub segment_claims: Vec<SegmentClaim>,
    pub trust_score: u8,
    pub verdict: Verdict,
    pub methodology: String,
}

impl ClaimReview {
    /// Sets the canonical URL of the review itself.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
