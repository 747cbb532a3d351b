//! Article segmentation and factual-anchor extraction.
//!
//! Segments are built fresh for every analysis run and never persisted.

/// Date and quantity anchors.
pub mod anchors;
/// Claim filter, segmentation and the comparison tally.
pub mod segmenter;


pub use anchors::extract_factual_anchors;
pub use segmenter::{ContentSegment, comparison_summary, extract_claims, segment_content};
