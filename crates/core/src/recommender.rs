//! Request entry point: resolve, score, rank, materialise.

use crate::error::RecommendError;
use crate::metadata::{MetadataCatalog, Recommendation};
use crate::model::ModelContext;
use crate::rank::{HybridRanker, RankedItem, DEFAULT_ALPHA, DEFAULT_TOP_N};
use crate::scoring::{collaborative, content};

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    pub user_id: String,
    pub seed: Option<String>,
    pub alpha: f64,
    pub top_n: usize,
}

impl RecommendRequest {
    /// Request for `user_id` with no seed, `alpha = 0.6` and `top_n = 10`.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            seed: None,
            alpha: DEFAULT_ALPHA,
            top_n: DEFAULT_TOP_N,
        }
    }

    #[must_use]
    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    #[must_use]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Rank items for `request` using only the model (no metadata).
///
/// Checks run in order: parameters, user, seed. The first failure is returned as is.
pub fn rank<'a>(
    model: &'a ModelContext,
    request: &RecommendRequest,
) -> Result<Vec<RankedItem<'a>>, RecommendError> {
    let ranker = HybridRanker::new(request.alpha, request.top_n)?;

    let cf = collaborative::scores_for_user(model, &request.user_id)?;
    let cbf = content::scores_for_optional_seed(model, request.seed.as_deref())?;

    let ranked = ranker.rank(&cf, &cbf);

    tracing::debug!(
        user = %request.user_id,
        seeded = request.seed.is_some(),
        alpha = request.alpha,
        top_n = request.top_n,
        results = ranked.len(),
        "ranked"
    );

    Ok(ranked)
}

/// Model plus metadata, shared read-only across requests.
///
/// `Send + Sync`: wrap in an `Arc` to serve several threads.
#[derive(Debug, Clone)]
pub struct Recommender {
    model: ModelContext,
    catalog: MetadataCatalog,
}

impl Recommender {
    pub fn new(model: ModelContext, catalog: MetadataCatalog) -> Self {
        Self { model, catalog }
    }

    pub fn model(&self) -> &ModelContext {
        &self.model
    }

    pub fn catalog(&self) -> &MetadataCatalog {
        &self.catalog
    }

    pub fn rank(&self, request: &RecommendRequest) -> Result<Vec<RankedItem<'_>>, RecommendError> {
        rank(&self.model, request)
    }

    /// Ranked display rows. May be shorter than `top_n` when titles lack metadata.
    pub fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let ranked = self.rank(request)?;
        Ok(self.catalog.materialize(&ranked))
    }
}
