//! Small model fixtures shared by unit tests.
//!
//! Users u1, u2; items A, B, C; factors `[[1,0],[0,1]]`;
//! components `[[1,2,3],[4,5,6]]`; identity similarity.

use std::fs;
use std::path::Path;

use ndarray::Array2;

use crate::ids::IdMap;
use crate::matrix;
use crate::metadata::{ItemMetadata, MetadataCatalog};
use crate::model::{self, ModelContext};

const FACTORS: &[&[f64]] = &[&[1.0, 0.0], &[0.0, 1.0]];
const COMPONENTS: &[&[f64]] = &[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]];
const ITEMS: &[&str] = &["A", "B", "C"];

pub fn id_map(label: &'static str, ids: &[&str]) -> IdMap {
    IdMap::from_ids(label, ids.iter().map(|s| s.to_string()).collect())
}

pub fn matrix(rows: &[&[f64]]) -> Array2<f64> {
    matrix::from_rows("fixture", rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

pub fn identity(n: usize) -> Array2<f64> {
    Array2::eye(n)
}

fn build(factors: &[&[f64]], similarity: Array2<f64>, item_index: &[&str]) -> ModelContext {
    ModelContext::new(
        id_map("user", &["u1", "u2"]),
        id_map("item", ITEMS),
        matrix(factors),
        matrix(COMPONENTS),
        similarity,
        id_map("item", item_index),
    )
    .unwrap()
}

pub fn context() -> ModelContext {
    build(FACTORS, identity(3), ITEMS)
}

pub fn context_with_factors(factors: &[&[f64]]) -> ModelContext {
    build(factors, identity(3), ITEMS)
}

pub fn context_with_similarity(similarity: &[&[f64]]) -> ModelContext {
    build(FACTORS, matrix(similarity), ITEMS)
}

pub fn context_with_item_index(item_index: &[&str]) -> ModelContext {
    build(FACTORS, identity(3), item_index)
}

pub fn catalog() -> MetadataCatalog {
    let record = |title: &str, author: &str, image: Option<&str>| ItemMetadata {
        title: title.to_string(),
        author: author.to_string(),
        image_url: image.map(str::to_string),
    };

    MetadataCatalog::from_records(vec![
        record("A", "Author A", Some("http://img/a.jpg")),
        record("B", "Author B", None),
        record("C", "Author C", Some("http://img/c.jpg")),
        record("A", "Other Author", Some("http://img/a-reprint.jpg")),
    ])
}

/// Write the default fixture as JSON artifacts into `dir`.
pub fn write_artifacts(dir: &Path) {
    let files = [
        (model::USER_MAP_FILE, r#"{"0":"u1","1":"u2"}"#),
        (model::ITEM_MAP_FILE, r#"{"0":"A","1":"B","2":"C"}"#),
        (model::USER_FACTORS_FILE, "[[1,0],[0,1]]"),
        (model::ITEM_COMPONENTS_FILE, "[[1,2,3],[4,5,6]]"),
        (model::SIMILARITY_FILE, "[[1,0,0],[0,1,0],[0,0,1]]"),
        (model::ITEM_INDEX_FILE, r#"["A","B","C"]"#),
    ];

    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
}
