//! Display metadata and the materialisation of ranked items into display rows.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rank::RankedItem;

/// One row of the metadata dataset. Rows are keyed loosely by title.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemMetadata {
    #[serde(rename = "Book-Title")]
    pub title: String,
    #[serde(rename = "Book-Author", default)]
    pub author: String,
    #[serde(rename = "Image-URL-M", default)]
    pub image_url: Option<String>,
}

/// A materialised recommendation, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub author: String,
    pub image_url: Option<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct MetadataCatalog {
    records: Vec<ItemMetadata>,
    by_title: HashMap<String, Vec<usize>>,
}

impl MetadataCatalog {
    pub fn from_records(records: Vec<ItemMetadata>) -> Self {
        let mut by_title: HashMap<String, Vec<usize>> = HashMap::new();

        let records: Vec<ItemMetadata> = records
            .into_iter()
            .map(|mut record| {
                record.image_url = record.image_url.filter(|url| !is_missing_ref(url));
                record
            })
            .collect();

        for (i, record) in records.iter().enumerate() {
            by_title.entry(record.title.clone()).or_default().push(i);
        }

        Self { records, by_title }
    }

    /// Load a CSV file with `Book-Title`, `Book-Author` and `Image-URL-M` headers.
    /// Other columns are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open metadata file {}", path.display()))?;

        let catalog = Self::from_reader(file)
            .with_context(|| format!("Failed to parse metadata file {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            rows = catalog.len(),
            titles = catalog.by_title.len(),
            "metadata loaded"
        );

        Ok(catalog)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for (line, row) in reader.deserialize::<ItemMetadata>().enumerate() {
            // +2: one for the header, one for 1-based lines.
            let record = row.with_context(|| format!("invalid metadata row at line {}", line + 2))?;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows whose title equals `title`, in dataset order.
    pub fn rows_for<'a>(&'a self, title: &str) -> impl Iterator<Item = &'a ItemMetadata> + 'a {
        self.by_title
            .get(title)
            .into_iter()
            .flatten()
            .map(move |&i| &self.records[i])
    }

    /// Expand ranked items into display rows, deduplicated by title.
    ///
    /// Each title yields its first matching row. Titles without metadata are dropped.
    pub fn materialize(&self, ranked: &[RankedItem<'_>]) -> Vec<Recommendation> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(ranked.len());
        let mut rows = Vec::with_capacity(ranked.len());

        for entry in ranked {
            if !seen.insert(entry.item) {
                continue;
            }

            let Some(record) = self.rows_for(entry.item).next() else {
                continue;
            };

            rows.push(Recommendation {
                title: record.title.clone(),
                author: record.author.clone(),
                image_url: record.image_url.clone(),
                score: entry.score,
            });
        }

        rows
    }
}

/// Empty or `nan` image references (pandas exports) count as missing.
fn is_missing_ref(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("nan")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    const CSV: &str = "\
ISBN,Book-Title,Book-Author,Year-Of-Publication,Image-URL-M
1,A,Author One,2001,http://img/a.jpg
2,B,Author Two,2002,
3,A,Someone Else,1999,http://img/a2.jpg
4,C,Author Three,2003,nan
";

    fn ranked<'a>(pairs: &[(&'a str, f64)]) -> Vec<RankedItem<'a>> {
        pairs
            .iter()
            .map(|&(item, score)| RankedItem { item, score })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    #[test]
    fn from_reader_ignores_extra_columns() {
        let catalog = MetadataCatalog::from_reader(CSV.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 4);
        let first = catalog.rows_for("A").next().unwrap();
        assert_eq!(first.author, "Author One");
        assert_eq!(first.image_url.as_deref(), Some("http://img/a.jpg"));
    }

    #[test]
    fn empty_and_nan_image_refs_are_none() {
        let catalog = MetadataCatalog::from_reader(CSV.as_bytes()).unwrap();

        assert_eq!(catalog.rows_for("B").next().unwrap().image_url, None);
        assert_eq!(catalog.rows_for("C").next().unwrap().image_url, None);
    }

    #[test]
    fn rows_for_keeps_dataset_order() {
        let catalog = MetadataCatalog::from_reader(CSV.as_bytes()).unwrap();
        let authors: Vec<&str> = catalog.rows_for("A").map(|r| r.author.as_str()).collect();

        assert_eq!(authors, vec!["Author One", "Someone Else"]);
        assert_eq!(catalog.rows_for("Z").count(), 0);
    }

    #[test]
    fn missing_required_column_fails() {
        let err = MetadataCatalog::from_reader("ISBN,Book-Author\n1,X\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("books.csv");
        std::fs::write(&path, CSV).unwrap();

        let catalog = MetadataCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = MetadataCatalog::load(Path::new("/nonexistent/books.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/books.csv"));
    }

    // -----------------------------------------------------------------------
    // Materialisation
    // -----------------------------------------------------------------------

    #[test]
    fn one_row_per_title_first_occurrence() {
        let catalog = MetadataCatalog::from_reader(CSV.as_bytes()).unwrap();

        let rows = catalog.materialize(&ranked(&[("C", 1.5), ("A", 1.0)]));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "C");
        assert_eq!(rows[0].score, 1.5);
        assert_eq!(rows[1].title, "A");
        assert_eq!(rows[1].author, "Author One");
    }

    #[test]
    fn titles_without_metadata_are_dropped() {
        let catalog = fixtures::catalog();

        let rows = catalog.materialize(&ranked(&[("Unknown", 9.0), ("B", 1.0)]));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "B");
    }

    #[test]
    fn repeated_ranked_title_is_emitted_once() {
        let catalog = fixtures::catalog();

        let rows = catalog.materialize(&ranked(&[("A", 2.0), ("A", 1.0)]));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].score, 2.0);
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        let rows = MetadataCatalog::default().materialize(&ranked(&[("A", 1.0)]));
        assert!(rows.is_empty());
    }
}
