//! HTTP ledger sink.
//!
//! Posts `{ content, privacy }` to `{base}/publishnote/create`, where `content` is a
//! stringified schema.org `Article` wrapping the claim review.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};
use tracing::{error, info, instrument};

use crate::review::ClaimReview;

use super::error::{LedgerError, LedgerResult};
use super::sink::{LedgerSink, PublishReceipt};

const PUBLISH_PATH: &str = "/publishnote/create";
const PUBLISH_TIMEOUT: Duration = Duration::from_secs(30);
const LOCATOR_KEYS: &[&str] = &["ual", "UAL", "id"];
const TRANSACTION_HASH_KEYS: &[&str] = &["transactionHash", "txHash"];

/// [`LedgerSink`] backed by a ledger node's HTTP publish endpoint.
#[derive(Debug, Clone)]
pub struct HttpLedgerSink {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl HttpLedgerSink {
    /// `api_key`, when set, is sent as a bearer token.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: HttpClient::builder()
                .timeout(PUBLISH_TIMEOUT)
                .build()
                .unwrap_or_else(|_| HttpClient::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Explorer link used when the ledger does not return one.
    pub fn explorer_url(&self, locator: &str) -> String {
        format!(
            "{}/explore?ual={}",
            self.base_url,
            urlencoding::encode(locator)
        )
    }
}

/// Request body for one publish call.
pub fn publish_payload(review: &ClaimReview) -> LedgerResult<Value> {
    let article = json!({
        "@context": "https://schema.org/",
        "@type": "Article",
        "name": format!("Claim review: {}", review.claim_reviewed),
        "description": review.review_rating.rating_explanation,
        "author": review.author.name,
        "datePublished": review.date_published,
        "claimReview": review,
    });
    let content = serde_json::to_string(&article)
        .map_err(|e| LedgerError::publish_failed(format!("failed to encode claim review: {e}")))?;

    Ok(json!({ "content": content, "privacy": "public" }))
}

pub(crate) fn locator_from(body: &Value) -> Option<String> {
    LOCATOR_KEYS.iter().find_map(|key| match body.get(*key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

pub(crate) fn transaction_hash_from(body: &Value) -> Option<String> {
    TRANSACTION_HASH_KEYS.iter().find_map(|key| {
        body.get(*key)
            .and_then(Value::as_str)
            .filter(|hash| !hash.trim().is_empty())
            .map(str::to_string)
    })
}

#[async_trait]
impl LedgerSink for HttpLedgerSink {
    #[instrument(skip_all, fields(topic = %review.claim_reviewed, base_url = %self.base_url))]
    async fn publish(&self, review: &ClaimReview) -> LedgerResult<PublishReceipt> {
        let payload = publish_payload(review)?;
        let url = format!("{}{PUBLISH_PATH}", self.base_url);

        let mut request = self.http.post(&url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Ledger request failed");
            LedgerError::publish_failed(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Ledger rejected claim review");
            return Err(LedgerError::publish_failed(format!(
                "ledger returned {status}: {body}"
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            LedgerError::publish_failed(format!("invalid ledger response: {e}"))
        })?;

        let locator = locator_from(&body).ok_or_else(|| {
            error!(response = %body, "Ledger response has no locator");
            LedgerError::publish_failed("ledger response did not include a locator")
        })?;

        let explorer_url = body
            .get("explorerUrl")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| self.explorer_url(&locator));

        let transaction_hash = transaction_hash_from(&body);

        info!(
            locator = %locator,
            transaction_hash = transaction_hash.as_deref().unwrap_or("-"),
            "Claim review published"
        );
        Ok(PublishReceipt {
            locator,
            explorer_url: Some(explorer_url),
            transaction_hash,
        })
    }
}
