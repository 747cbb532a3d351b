//! TrustLens library crate (used by the server binary and integration tests).
//!
//! Compares an AI-generated encyclopedia article (the *subject*) against a reference
//! article, scores the subject's trustworthiness, and assembles a schema.org
//! `ClaimReview` that can be published to a ledger.
//!
//! # Pipeline
//!
//! 1. [`segment`]: sections, claims and factual anchors per article.
//! 2. [`similarity`]: token-overlap similarity used for the prompt's segment map.
//! 3. [`oracle`]: one call to a text-generation service, then validate-and-coerce
//!    parsing of its reply.
//! 4. [`scoring`]: deterministic severity score, 70/30 blend, ordered verdict rules.
//! 5. [`review`]: claim-review assembly; [`ledger`] publishes it.
//!
//! [`Analyzer`] runs steps 1 to 4 for one request. [`gateway`] exposes everything over
//! HTTP.
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analysis;
pub mod config;
pub mod constants;
pub mod content;
pub mod gateway;
pub mod hashing;
pub mod ledger;
pub mod oracle;
pub mod review;
pub mod scoring;
pub mod segment;
pub mod similarity;

pub use analysis::{
    AnalysisError, AnalysisResult, AnalysisSummary, Analyzer, Issue, IssueType, Severity,
    SeverityCounts,
};
pub use config::{Config, ConfigError};
pub use content::{
    AnalysisDepth, ArticleContent, ArticleRole, ContentError, ContentProvider, ProviderError,
    Section, StaticContentProvider, fetch_pair,
};
pub use gateway::{AppState, GatewayError, create_router};
pub use hashing::{content_fingerprint, hash_to_u64, run_fingerprint};
#[cfg(any(test, feature = "mock"))]
pub use ledger::MockLedgerSink;
pub use ledger::{HttpLedgerSink, LedgerError, LedgerSink, PublishReceipt};
#[cfg(any(test, feature = "mock"))]
pub use oracle::MockOracle;
pub use oracle::{
    CandidateResult, DefaultedField, GenaiOracle, Oracle, OracleError, OracleRequest,
    ParseOutcome, parse_oracle_response,
};
pub use review::{
    ClaimReview, ClaimReviewAssembler, Classification, ReviewConfig, SegmentClaim,
    build_claim_review,
};
pub use scoring::{ScoreBreakdown, Verdict, blend, classify, deterministic_score};
pub use segment::{ContentSegment, extract_claims, extract_factual_anchors, segment_content};
pub use similarity::{find_relevant_evidence, similarity};
