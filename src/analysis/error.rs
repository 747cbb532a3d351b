use thiserror::Error;

use crate::content::ArticleRole;
use crate::oracle::OracleError;

#[derive(Debug, Error)]
/// Errors returned by an analysis run.
///
/// A partially compliant oracle response is not an error: missing fields are replaced
/// by documented defaults and logged.
pub enum AnalysisError {
    /// One of the two articles is absent or has no body text.
    #[error("{role} article content is missing")]
    InputMissing {
        /// Side of the comparison that was missing.
        role: ArticleRole,
    },

    /// Transport failure, timeout or provider rejection from the oracle.
    #[error("oracle call failed: {reason}")]
    OracleCallFailed {
        /// Oracle client message, verbatim.
        reason: String,
    },

    /// No parseable JSON object in the oracle response.
    #[error("oracle response malformed: {reason}")]
    OracleResponseMalformed {
        /// What went wrong while parsing.
        reason: String,
        /// Leading slice of the raw response, for operators.
        excerpt: String,
    },
}

impl From<OracleError> for AnalysisError {
    fn from(err: OracleError) -> Self {
        AnalysisError::OracleCallFailed {
            reason: err.to_string(),
        }
    }
}
