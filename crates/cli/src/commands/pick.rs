use anyhow::Result;

use hybridrec_core::config::Settings;

use super::Tuning;
use crate::ui;

const USER_CHOICES: usize = 50;
const SEED_CHOICES: usize = 100;

pub fn run(settings: &Settings) -> Result<()> {
    let recommender = super::load_recommender(settings)?;
    let model = recommender.model();

    let users: Vec<&str> = model.users().iter().take(USER_CHOICES).collect();
    let seeds: Vec<&str> = model.seed_items().iter().take(SEED_CHOICES).collect();

    let user = ui::prompt_user(&users)?;
    let tuning = Tuning {
        seed: ui::prompt_seed(&seeds)?,
        ..Default::default()
    };

    match recommender.recommend(&tuning.request(settings, &user)) {
        Ok(rows) => ui::print_recommendations(&rows),
        // Stay interactive-friendly: report and exit cleanly.
        Err(err) => ui::print_request_error(&err),
    }

    Ok(())
}
