//! Content signal: the precomputed similarity row of a seed item.

use crate::error::RecommendError;
use crate::model::ModelContext;
use crate::scoring::ScoreMap;

/// CBF scores for an optional seed. No seed yields an empty map, not zeros.
pub fn scores_for_optional_seed<'a>(
    ctx: &'a ModelContext,
    seed: Option<&str>,
) -> Result<ScoreMap<'a>, RecommendError> {
    match seed {
        Some(title) => scores_for_seed(ctx, title),
        None => Ok(ScoreMap::new()),
    }
}

pub fn scores_for_seed<'a>(
    ctx: &'a ModelContext,
    seed: &str,
) -> Result<ScoreMap<'a>, RecommendError> {
    let seed_index = ctx.index_of_seed(seed)?;
    Ok(scores_for_seed_index(ctx, seed_index))
}

/// Similarity row `seed_index`, labelled through the item index.
/// The seed's similarity to itself is kept.
///
/// # Panics
///
/// Panics if `seed_index` is not a row of the similarity matrix.
pub fn scores_for_seed_index(ctx: &ModelContext, seed_index: usize) -> ScoreMap<'_> {
    let row = ctx.similarity().row(seed_index);

    ctx.seed_items().iter().zip(row.iter().copied()).collect()
}
