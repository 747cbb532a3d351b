use serde::{Deserialize, Serialize};

use crate::constants::{
    COMPREHENSIVE_CHAR_BUDGET, COMPREHENSIVE_MAX_OUTPUT_TOKENS, QUICK_CHAR_BUDGET,
    QUICK_MAX_OUTPUT_TOKENS,
};

/// A declared section of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub heading: String,
    #[serde(alias = "content")]
    pub text: String,
}

impl Section {
    pub fn new(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            text: text.into(),
        }
    }
}

/// Article text as delivered by a content provider.
///
/// Immutable once created. The original wire names `content` and `url` are accepted
/// as aliases for `rawText` and `sourceUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleContent {
    pub title: String,
    #[serde(alias = "content")]
    pub raw_text: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, alias = "url", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub fetched_at: String,
}

impl ArticleContent {
    /// Creates an article with no declared sections, stamped with the current time.
    pub fn new(title: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            raw_text: raw_text.into(),
            sections: Vec::new(),
            source_url: None,
            fetched_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_fetched_at(mut self, fetched_at: impl Into<String>) -> Self {
        self.fetched_at = fetched_at.into();
        self
    }

    /// `true` when there is no body text to compare.
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}

/// Which side of the comparison an article plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleRole {
    /// The AI-generated article under review.
    Subject,
    /// The trusted reference article.
    Reference,
}

impl ArticleRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleRole::Subject => "subject",
            ArticleRole::Reference => "reference",
        }
    }
}

impl std::fmt::Display for ArticleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How thorough the oracle is asked to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisDepth {
    #[default]
    Quick,
    Comprehensive,
}

impl AnalysisDepth {
    /// Per-article character budget for the oracle payload.
    pub fn char_budget(&self) -> usize {
        match self {
            AnalysisDepth::Quick => QUICK_CHAR_BUDGET,
            AnalysisDepth::Comprehensive => COMPREHENSIVE_CHAR_BUDGET,
        }
    }

    pub fn max_output_tokens(&self) -> u32 {
        match self {
            AnalysisDepth::Quick => QUICK_MAX_OUTPUT_TOKENS,
            AnalysisDepth::Comprehensive => COMPREHENSIVE_MAX_OUTPUT_TOKENS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisDepth::Quick => "quick",
            AnalysisDepth::Comprehensive => "comprehensive",
        }
    }
}

impl std::fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
