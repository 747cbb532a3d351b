use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by an [`Oracle`](super::Oracle) implementation.
pub enum OracleError {
    /// Transport or provider failure.
    #[error("{reason}")]
    CallFailed {
        /// Provider message.
        reason: String,
    },

    /// The call exceeded the client's time budget.
    #[error("oracle call exceeded time budget of {after:?}")]
    Timeout {
        /// Configured budget.
        after: Duration,
    },
}
