//! Content provider seam.
//!
//! Scrapers and encyclopedia API clients live outside this crate; they plug in by
//! implementing [`ContentProvider`].

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use super::types::{ArticleContent, ArticleRole};

#[derive(Debug, Error)]
/// Errors returned while fetching the article pair.
pub enum ContentError {
    /// The provider had no article for the topic.
    #[error("{role} article not found for topic '{topic}'")]
    NotFound {
        /// Side of the comparison.
        role: ArticleRole,
        /// Requested topic.
        topic: String,
    },

    /// The provider itself failed.
    #[error("{role} provider failed: {source}")]
    ProviderFailed {
        /// Side of the comparison.
        role: ArticleRole,
        source: ProviderError,
    },
}

#[derive(Debug, Error)]
/// Errors a [`ContentProvider`] reports for a single fetch.
pub enum ProviderError {
    /// The upstream service could not be reached or rejected the request.
    #[error("request failed: {0}")]
    Request(String),

    /// The upstream answered, but the page could not be turned into an article.
    #[error("unreadable article: {0}")]
    Extraction(String),
}

#[async_trait]
/// Delivers one article per topic, or `None` when the topic is unknown.
pub trait ContentProvider: Send + Sync {
    async fn fetch(&self, topic: &str) -> Result<Option<ArticleContent>, ProviderError>;
}

/// In-memory provider keyed by case-insensitive topic.
#[derive(Debug, Default, Clone)]
pub struct StaticContentProvider {
    articles: HashMap<String, ArticleContent>,
    latency: Option<Duration>,
}

impl StaticContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_article(mut self, topic: &str, article: ArticleContent) -> Self {
        self.articles.insert(topic.trim().to_lowercase(), article);
        self
    }

    /// Simulated fetch latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl ContentProvider for StaticContentProvider {
    async fn fetch(&self, topic: &str) -> Result<Option<ArticleContent>, ProviderError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(self.articles.get(&topic.trim().to_lowercase()).cloned())
    }
}

/// Fetches the subject and reference articles concurrently and returns once both are in.
///
/// Fails if either side is missing or errored; no partial pair is returned.
pub async fn fetch_pair(
    subject: &dyn ContentProvider,
    reference: &dyn ContentProvider,
    topic: &str,
) -> Result<(ArticleContent, ArticleContent), ContentError> {
    let (subject_article, reference_article) = tokio::try_join!(
        fetch_role(subject, topic, ArticleRole::Subject),
        fetch_role(reference, topic, ArticleRole::Reference)
    )?;

    debug!(
        topic,
        subject_chars = subject_article.raw_text.len(),
        reference_chars = reference_article.raw_text.len(),
        "Fetched article pair"
    );

    Ok((subject_article, reference_article))
}

async fn fetch_role(
    provider: &dyn ContentProvider,
    topic: &str,
    role: ArticleRole,
) -> Result<ArticleContent, ContentError> {
    match provider.fetch(topic).await {
        Ok(Some(article)) => Ok(article),
        Ok(None) => Err(ContentError::NotFound {
            role,
            topic: topic.to_string(),
        }),
        Err(source) => Err(ContentError::ProviderFailed { role, source }),
    }
}
