//! Hybrid recommendation core: collaborative + content-based score blending.
//!
//! Artifacts are loaded once into an immutable [`model::ModelContext`];
//! every request is a pure function of that context and its inputs.

pub mod config;
pub mod error;
pub mod ids;
pub mod matrix;
pub mod metadata;
pub mod model;
pub mod rank;
pub mod recommender;
pub mod scoring;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{ModelError, RecommendError};
pub use metadata::{MetadataCatalog, Recommendation};
pub use model::ModelContext;
pub use rank::{HybridRanker, RankedItem, DEFAULT_ALPHA, DEFAULT_TOP_N};
pub use recommender::{RecommendRequest, Recommender};
pub use scoring::ScoreMap;
