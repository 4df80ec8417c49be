pub mod info;
pub mod list;
pub mod pick;
pub mod recommend;

use anyhow::{Context, Result};
use clap::Args;

use hybridrec_core::config::Settings;
use hybridrec_core::{MetadataCatalog, ModelContext, RecommendRequest, Recommender};

/// Request knobs shared by `recommend` and `rank`. Unset values fall back to settings.
#[derive(Debug, Clone, Default, Args)]
pub struct Tuning {
    /// Seed item title for the content-based signal.
    #[arg(long)]
    pub seed: Option<String>,

    /// Weight of the collaborative signal, in [0, 1].
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Number of results.
    #[arg(long)]
    pub top_n: Option<usize>,
}

impl Tuning {
    pub fn request(&self, settings: &Settings, user: &str) -> RecommendRequest {
        let mut request = RecommendRequest::new(user)
            .alpha(self.alpha.unwrap_or(settings.alpha()))
            .top_n(self.top_n.unwrap_or(settings.top_n()));

        if let Some(seed) = self.seed.as_deref().filter(|s| !s.is_empty()) {
            request = request.seed(seed);
        }

        request
    }
}

pub fn load_model(settings: &Settings) -> Result<ModelContext> {
    let dir = settings.model_dir();
    ModelContext::load(&dir).with_context(|| format!("cannot load model from {}", dir.display()))
}

pub fn load_recommender(settings: &Settings) -> Result<Recommender> {
    let model = load_model(settings)?;
    let catalog = MetadataCatalog::load(&settings.metadata_path())?;
    Ok(Recommender::new(model, catalog))
}
