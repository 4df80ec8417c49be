//! Per-request score mappings and the two signals that produce them.

pub mod collaborative;
pub mod content;

use std::collections::BTreeMap;

/// Item id → score for a single request.
///
/// Keys borrow from the [`ModelContext`](crate::ModelContext) that produced
/// them. Iteration is in identifier order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap<'a> {
    scores: BTreeMap<&'a str, f64>,
}

impl<'a> ScoreMap<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `score` for `item`. An item already present keeps its first score.
    pub fn insert(&mut self, item: &'a str, score: f64) {
        self.scores.entry(item).or_insert(score);
    }

    pub fn get(&self, item: &str) -> Option<f64> {
        self.scores.get(item).copied()
    }

    /// Score of `item`, or 0 when absent. Absent and zero merge identically.
    pub fn score_or_zero(&self, item: &str) -> f64 {
        self.get(item).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.scores.keys().copied()
    }
}

impl<'a> FromIterator<(&'a str, f64)> for ScoreMap<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (item, score) in iter {
            map.insert(item, score);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_item_scores_zero() {
        let map: ScoreMap = [("A", 1.5)].into_iter().collect();

        assert_eq!(map.get("B"), None);
        assert_eq!(map.score_or_zero("B"), 0.0);
        assert_eq!(map.score_or_zero("A"), 1.5);
    }

    #[test]
    fn first_insert_wins() {
        let map: ScoreMap = [("A", 1.0), ("A", 9.0)].into_iter().collect();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("A"), Some(1.0));
    }

    #[test]
    fn iterates_in_identifier_order() {
        let map: ScoreMap = [("C", 0.1), ("A", 0.3), ("B", 0.2)].into_iter().collect();
        let items: Vec<&str> = map.items().collect();

        assert_eq!(items, vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_map() {
        let map = ScoreMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get("A"), None);
    }
}
