//! Collaborative signal: project a user's latent factors onto every item.

use crate::error::RecommendError;
use crate::model::ModelContext;
use crate::scoring::ScoreMap;

/// CF scores for `user_id` over all items.
pub fn scores_for_user<'a>(
    ctx: &'a ModelContext,
    user_id: &str,
) -> Result<ScoreMap<'a>, RecommendError> {
    let user_index = ctx.index_of_user(user_id)?;
    Ok(scores_for_index(ctx, user_index))
}

/// `factors[user_index] · components`, labelled through the item map.
///
/// Raw projections: no normalisation, values may be negative.
///
/// # Panics
///
/// Panics if `user_index` is not a row of the user factors.
pub fn scores_for_index(ctx: &ModelContext, user_index: usize) -> ScoreMap<'_> {
    let projected = ctx
        .user_factors()
        .row(user_index)
        .dot(ctx.item_components());

    ctx.items().iter().zip(projected.iter().copied()).collect()
}
