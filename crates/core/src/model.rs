//! Immutable model context: identifier maps plus the precomputed matrices.
//!
//! Built once at startup, then shared read-only by every request.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::Array2;
use serde::de::DeserializeOwned;

use crate::error::{ModelError, RecommendError};
use crate::ids::{IdMap, RawId};
use crate::matrix;

pub const USER_MAP_FILE: &str = "user_map.json";
pub const ITEM_MAP_FILE: &str = "item_map.json";
pub const USER_FACTORS_FILE: &str = "user_factors.json";
pub const ITEM_COMPONENTS_FILE: &str = "item_components.json";
pub const SIMILARITY_FILE: &str = "similarity.json";
pub const ITEM_INDEX_FILE: &str = "item_index.json";

/// Sizes of the three model axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub users: usize,
    pub latent: usize,
    pub items: usize,
}

#[derive(Debug, Clone)]
pub struct ModelContext {
    users: IdMap,
    items: IdMap,
    user_factors: Array2<f64>,
    item_components: Array2<f64>,
    similarity: Array2<f64>,
    item_index: IdMap,
}

impl ModelContext {
    /// Assemble a context, checking that every artifact agrees on the axis sizes.
    pub fn new(
        users: IdMap,
        items: IdMap,
        user_factors: Array2<f64>,
        item_components: Array2<f64>,
        similarity: Array2<f64>,
        item_index: IdMap,
    ) -> Result<Self, ModelError> {
        check_dim("user factor rows vs user map", user_factors.nrows(), users.len())?;
        check_dim(
            "user factor columns vs item component rows",
            user_factors.ncols(),
            item_components.nrows(),
        )?;
        check_dim("item component columns vs item map", item_components.ncols(), items.len())?;
        check_dim("similarity rows vs columns", similarity.nrows(), similarity.ncols())?;
        check_dim("similarity size vs item map", similarity.nrows(), items.len())?;
        check_dim("item index vs similarity size", item_index.len(), similarity.nrows())?;

        if item_index.as_slice() != items.as_slice() {
            tracing::warn!("item index order differs from item map; scores are merged by title");
        }

        Ok(Self {
            users,
            items,
            user_factors,
            item_components,
            similarity,
            item_index,
        })
    }

    /// Load every artifact from `dir` (see the `*_FILE` constants for names).
    pub fn load(dir: &Path) -> Result<Self> {
        let users: BTreeMap<usize, RawId> = read_json(&dir.join(USER_MAP_FILE))?;
        let items: BTreeMap<usize, RawId> = read_json(&dir.join(ITEM_MAP_FILE))?;
        let user_factors: Vec<Vec<f64>> = read_json(&dir.join(USER_FACTORS_FILE))?;
        let item_components: Vec<Vec<f64>> = read_json(&dir.join(ITEM_COMPONENTS_FILE))?;
        let similarity: Vec<Vec<f64>> = read_json(&dir.join(SIMILARITY_FILE))?;
        let item_index: Vec<String> = read_json(&dir.join(ITEM_INDEX_FILE))?;

        let context = Self::new(
            IdMap::from_indexed("user_map", users)?,
            IdMap::from_indexed("item_map", items)?,
            matrix::from_rows("user_factors", user_factors)?,
            matrix::from_rows("item_components", item_components)?,
            matrix::from_rows("similarity", similarity)?,
            IdMap::from_ids("item_index", item_index),
        )
        .with_context(|| format!("inconsistent model artifacts in {}", dir.display()))?;

        let dims = context.dimensions();
        tracing::info!(
            dir = %dir.display(),
            users = dims.users,
            latent = dims.latent,
            items = dims.items,
            "model artifacts loaded"
        );

        Ok(context)
    }

    pub fn index_of_user(&self, user_id: &str) -> Result<usize, RecommendError> {
        self.users
            .index_of(user_id)
            .ok_or_else(|| RecommendError::UserNotFound(user_id.to_string()))
    }

    /// Column of `title` in the item components (CF axis).
    pub fn index_of_item(&self, title: &str) -> Result<usize, RecommendError> {
        self.items
            .index_of(title)
            .ok_or_else(|| RecommendError::ItemNotFound(title.to_string()))
    }

    /// Row of `title` in the similarity matrix (CBF axis).
    pub fn index_of_seed(&self, title: &str) -> Result<usize, RecommendError> {
        self.item_index
            .index_of(title)
            .ok_or_else(|| RecommendError::ItemNotFound(title.to_string()))
    }

    pub fn users(&self) -> &IdMap {
        &self.users
    }

    pub fn items(&self) -> &IdMap {
        &self.items
    }

    /// Titles in similarity-matrix order.
    pub fn seed_items(&self) -> &IdMap {
        &self.item_index
    }

    pub fn user_factors(&self) -> &Array2<f64> {
        &self.user_factors
    }

    pub fn item_components(&self) -> &Array2<f64> {
        &self.item_components
    }

    pub fn similarity(&self) -> &Array2<f64> {
        &self.similarity
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            users: self.users.len(),
            latent: self.item_components.nrows(),
            items: self.items.len(),
        }
    }
}

fn check_dim(what: &'static str, left: usize, right: usize) -> Result<(), ModelError> {
    if left == right {
        Ok(())
    } else {
        Err(ModelError::Dimension { what, left, right })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}
