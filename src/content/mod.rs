//! Article content model and the provider seam.

/// Provider trait, in-memory provider and the concurrent pair fetch.
pub mod provider;
/// Article, section, role and depth types.
pub mod types;


pub use provider::{ContentError, ContentProvider, ProviderError, StaticContentProvider, fetch_pair};
pub use types::{AnalysisDepth, ArticleContent, ArticleRole, Section};
