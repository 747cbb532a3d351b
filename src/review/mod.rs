//! Claim-review assembly.
//!
//! Turns a finished [`AnalysisResult`](crate::analysis::AnalysisResult) into a
//! schema.org `ClaimReview` document suitable for publication to a ledger.

pub mod assembler;
pub mod types;


pub use assembler::{
    ClaimReviewAssembler, ReviewConfig, build_claim_review, classify_issue,
    hallucination_probability, heuristic_similarity, reference_url,
};
pub use types::{
    ClaimEvidence, ClaimReview, Classification, CreativeWork, Organization, Rating, SegmentClaim,
};
