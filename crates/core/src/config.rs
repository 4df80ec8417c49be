use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::rank::{DEFAULT_ALPHA, DEFAULT_TOP_N};

pub const DEFAULT_MODEL_DIR: &str = "model";
pub const DEFAULT_METADATA_PATH: &str = "data/books.csv";

/// Per-user configuration directory (`~/.config/hybridrec` on Linux).
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("hybridrec"))
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Composable merge for layered configuration.
pub trait Mergeable {
    fn merge(self, other: Self) -> Self;
}

/// Settings file format:
///
/// ```json
/// {
///   "modelDir": "model",
///   "metadataPath": "data/books.csv",
///   "alpha": 0.6,
///   "topN": 10
/// }
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub model_dir: Option<PathBuf>,
    pub metadata_path: Option<PathBuf>,
    pub alpha: Option<f64>,
    pub top_n: Option<usize>,
}

impl Mergeable for Settings {
    /// Fields set in `other` override `self`.
    fn merge(self, other: Self) -> Self {
        Self {
            model_dir: other.model_dir.or(self.model_dir),
            metadata_path: other.metadata_path.or(self.metadata_path),
            alpha: other.alpha.or(self.alpha),
            top_n: other.top_n.or(self.top_n),
        }
    }
}

impl Settings {
    pub fn model_dir(&self) -> PathBuf {
        self.model_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR))
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.metadata_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_METADATA_PATH))
    }

    pub fn alpha(&self) -> f64 {
        self.alpha.unwrap_or(DEFAULT_ALPHA)
    }

    pub fn top_n(&self) -> usize {
        self.top_n.unwrap_or(DEFAULT_TOP_N)
    }
}

/// Load settings by merging three layers (later layers win per field):
///
/// 1. `<config_dir>/hybridrec/settings.json`: global user settings
/// 2. `{project_dir}/.hybridrec/settings.json`: project settings (committed)
/// 3. `{project_dir}/.hybridrec/settings.local.json`: local overrides (gitignored)
pub fn load_settings(project_dir: &Path) -> Settings {
    let project = project_dir.join(".hybridrec");

    let paths: Vec<PathBuf> = vec![
        config_dir().map(|dir| dir.join("settings.json")),
        Some(project.join("settings.json")),
        Some(project.join("settings.local.json")),
    ]
    .into_iter()
    .flatten()
    .collect();

    load_settings_from_paths(&paths)
}

/// Load and merge settings from an explicit list of file paths (in order).
/// Missing files are skipped; malformed ones are skipped with a warning.
pub fn load_settings_from_paths(paths: &[PathBuf]) -> Settings {
    paths
        .iter()
        .filter_map(|p| load_settings_file(p))
        .reduce(Mergeable::merge)
        .unwrap_or_default()
}

fn load_settings_file(path: &Path) -> Option<Settings> {
    let contents = fs::read_to_string(path).ok()?;

    match serde_json::from_str(&contents) {
        Ok(settings) => Some(settings),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed settings file");
            None
        }
    }
}
