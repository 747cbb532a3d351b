use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::content::{AnalysisDepth, ArticleContent};
use crate::review::ClaimReview;

/// Body of `POST /v1/analyze`. Missing articles are reported as `InputMissing`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default, alias = "gorkpediaContent", alias = "grokipediaContent")]
    pub subject_content: Option<ArticleContent>,
    #[serde(default, alias = "wikipediaContent")]
    pub reference_content: Option<ArticleContent>,
    #[serde(default)]
    pub depth: AnalysisDepth,
}

/// Body of `POST /v1/claim-review`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReviewRequest {
    pub analysis_result: AnalysisResult,
    #[serde(alias = "gorkpediaContent", alias = "grokipediaContent")]
    pub subject_content: ArticleContent,
    #[serde(alias = "wikipediaContent")]
    pub reference_content: ArticleContent,
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    pub success: bool,
    pub locator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    pub claim_review: ClaimReview,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
