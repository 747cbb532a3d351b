//! Deterministic trust scoring.
//!
//! The oracle's own score is never taken at face value. [`deterministic_score`] recomputes
//! a score from the severity multiset of the issues the oracle reported, [`blend`] mixes
//! the two 70/30, and [`classify`] maps the blended score plus severity counts to a
//! [`Verdict`] with ordered rules.

pub mod scorer;
pub mod types;
pub mod verdict;


pub use scorer::{adjusted_penalty, deterministic_score, score_issues, total_penalty};
pub use types::{ScoreBreakdown, Verdict};
pub use verdict::{blend, classify};
