use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by a [`LedgerSink`](super::LedgerSink).
pub enum LedgerError {
    /// The sink rejected the document, was unreachable, or returned no locator.
    #[error("ledger publish failed: {message}")]
    PublishFailed {
        /// Sink-provided message.
        message: String,
    },
}

impl LedgerError {
    pub(crate) fn publish_failed(message: impl Into<String>) -> Self {
        LedgerError::PublishFailed {
            message: message.into(),
        }
    }
}

/// Convenience alias for ledger results.
pub type LedgerResult<T> = Result<T, LedgerError>;
