//! Hybrid ranking: weighted blend of the CF and CBF signals, top-N.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::error::RecommendError;
use crate::scoring::ScoreMap;

pub const DEFAULT_ALPHA: f64 = 0.6;
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedItem<'a> {
    pub item: &'a str,
    pub score: f64,
}

/// Blends two score maps as `alpha * cf + (1 - alpha) * cbf` and keeps the best `top_n`.
///
/// Ordering is score descending, then identifier ascending. NaN scores sort
/// after every number. Parameters are validated once, at construction, so
/// ranking itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridRanker {
    alpha: f64,
    top_n: usize,
}

impl Default for HybridRanker {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl HybridRanker {
    pub fn new(alpha: f64, top_n: usize) -> Result<Self, RecommendError> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(RecommendError::invalid(
                "alpha",
                format!("must be within [0, 1], got {alpha}"),
            ));
        }

        if top_n == 0 {
            return Err(RecommendError::invalid("top_n", "must be at least 1"));
        }

        Ok(Self { alpha, top_n })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Blended score of one item. Absent entries count as 0.
    pub fn blend_one(&self, cf: &ScoreMap<'_>, cbf: &ScoreMap<'_>, item: &str) -> f64 {
        self.alpha * cf.score_or_zero(item) + (1.0 - self.alpha) * cbf.score_or_zero(item)
    }

    /// Rank the union of items in `cf` and `cbf`.
    ///
    /// Returns `min(top_n, |union|)` entries.
    pub fn rank<'a>(&self, cf: &ScoreMap<'a>, cbf: &ScoreMap<'a>) -> Vec<RankedItem<'a>> {
        let union: BTreeSet<&'a str> = cf.items().chain(cbf.items()).collect();

        let mut ranked: Vec<RankedItem<'a>> = union
            .into_iter()
            .map(|item| RankedItem {
                item,
                score: self.blend_one(cf, cbf, item),
            })
            .collect();

        ranked.sort_by(|a, b| cmp_score_desc(a.score, b.score).then_with(|| a.item.cmp(b.item)));
        ranked.truncate(self.top_n);

        ranked
    }
}

fn cmp_score_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
