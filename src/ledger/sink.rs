use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::review::ClaimReview;

use super::error::LedgerResult;

/// Where a published claim review landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReceipt {
    /// Opaque identifier assigned by the ledger.
    pub locator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    /// Chain transaction that anchored the document, when the ledger reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

#[async_trait]
/// Append-only publication target for claim reviews.
///
/// Publishing is not retried. Publishing the same review twice is allowed and yields
/// two locators.
pub trait LedgerSink: Send + Sync {
    async fn publish(&self, review: &ClaimReview) -> LedgerResult<PublishReceipt>;
}
