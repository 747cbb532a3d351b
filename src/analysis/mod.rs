//! Analysis pipeline and result types.

pub mod error;
pub mod pipeline;
pub mod types;


pub use error::AnalysisError;
pub use pipeline::{Analyzer, finalize, score_breakdown};
pub use types::{
    AnalysisResult, AnalysisSummary, Issue, IssueType, Severity, SeverityCounts,
};
