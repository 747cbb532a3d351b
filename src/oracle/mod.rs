//! Oracle adapter: builds the single request for a run, calls the text-generation
//! service, and turns its free-form reply into a validated [`CandidateResult`].

pub mod client;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use client::{GenaiOracle, Oracle};
pub use error::OracleError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockOracle;
pub use parse::parse_oracle_response;
pub use prompt::{PromptEvidence, build_oracle_request, truncate_chars};
pub use types::{CandidateResult, DefaultedField, OracleRequest, ParseOutcome};
