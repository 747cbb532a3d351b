use async_trait::async_trait;
use parking_lot::Mutex;

use crate::review::ClaimReview;

use super::error::{LedgerError, LedgerResult};
use super::sink::{LedgerSink, PublishReceipt};

/// In-memory [`LedgerSink`] that records every published review.
#[derive(Debug, Default)]
pub struct MockLedgerSink {
    published: Mutex<Vec<ClaimReview>>,
    failure: Option<String>,
}

impl MockLedgerSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every publish fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    pub fn published(&self) -> Vec<ClaimReview> {
        self.published.lock().clone()
    }

    pub fn publish_count(&self) -> usize {
        self.published.lock().len()
    }
}

#[async_trait]
impl LedgerSink for MockLedgerSink {
    async fn publish(&self, review: &ClaimReview) -> LedgerResult<PublishReceipt> {
        if let Some(message) = &self.failure {
            return Err(LedgerError::publish_failed(message.clone()));
        }

        self.published.lock().push(review.clone());
        let locator = format!("did:dkg:mock/{}", uuid::Uuid::new_v4());
        Ok(PublishReceipt {
            explorer_url: Some(format!(
                "https://explorer.invalid/?ual={}",
                urlencoding::encode(&locator)
            )),
            locator,
            transaction_hash: Some(format!("0x{}", uuid::Uuid::new_v4().simple())),
        })
    }
}
