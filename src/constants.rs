//! Cross-cutting, shared constants.
//!
//! Scoring weights and verdict thresholds live here so the deterministic scorer, the
//! verdict classifier and the oracle instructions cannot drift apart.

pub const WEIGHT_CRITICAL: u32 = 8;
pub const WEIGHT_HIGH: u32 = 5;
pub const WEIGHT_MEDIUM: u32 = 2;
pub const WEIGHT_LOW: u32 = 1;

/// Total penalty above which logarithmic saturation kicks in.
pub const SATURATION_KNEE: u32 = 20;
pub const SATURATION_SCALE: f64 = 10.0;

pub const ORACLE_BLEND_WEIGHT: f64 = 0.7;
pub const DETERMINISTIC_BLEND_WEIGHT: f64 = 0.3;
/// Substituted when the oracle omits `summary.overallScore`.
pub const DEFAULT_ORACLE_SCORE: f64 = 50.0;

pub const MAX_SCORE: u8 = 100;
pub const MIN_SCORE: u8 = 0;

pub const UNRELIABLE_CRITICAL_COUNT: usize = 5;
pub const UNRELIABLE_SCORE_BELOW: u8 = 20;
pub const QUESTIONABLE_CRITICAL_COUNT: usize = 3;
pub const QUESTIONABLE_HIGH_COUNT: usize = 5;
pub const QUESTIONABLE_SCORE_BELOW: u8 = 40;
pub const MOSTLY_RELIABLE_CRITICAL_COUNT: usize = 1;
pub const MOSTLY_RELIABLE_HIGH_COUNT: usize = 2;
pub const MOSTLY_RELIABLE_SCORE_BELOW: u8 = 70;

pub const QUICK_CHAR_BUDGET: usize = 12_000;
pub const COMPREHENSIVE_CHAR_BUDGET: usize = 25_000;
pub const QUICK_MAX_OUTPUT_TOKENS: u32 = 4_000;
pub const COMPREHENSIVE_MAX_OUTPUT_TOKENS: u32 = 8_000;
pub const ORACLE_TEMPERATURE: f64 = 0.1;

/// Characters of raw oracle output kept for malformed-response diagnostics.
pub const MALFORMED_EXCERPT_CHARS: usize = 1_000;

pub const MIN_CLAIM_CHARS: usize = 20;
pub const MAX_CLAIM_CHARS: usize = 500;
pub const MIN_CLAIM_TOKENS: usize = 5;
pub const MIN_PARAGRAPH_CHARS: usize = 50;
pub const MIN_SIMILARITY_TOKEN_CHARS: usize = 3;
pub const MAX_ANCHORS_PER_KIND: usize = 10;
/// Subject segments listed in the prompt's segment map.
pub const MAX_SEGMENT_MAP_ENTRIES: usize = 20;

pub const MAX_SEGMENT_CLAIMS: usize = 10;
pub const EVIDENCE_CONFIDENCE: f64 = 0.9;
pub const REFERENCE_WIKI_BASE: &str = "https://en.wikipedia.org/wiki/";

pub const DEFAULT_SECTION_HEADING: &str = "Introduction";
