use anyhow::Result;

use hybridrec_core::config::Settings;
use hybridrec_core::recommender;

use super::Tuning;
use crate::ui;

pub fn run(settings: &Settings, user: &str, tuning: &Tuning, json: bool) -> Result<()> {
    let recommender = super::load_recommender(settings)?;
    let request = tuning.request(settings, user);

    let rows = recommender.recommend(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        ui::print_recommendations(&rows);
    }

    Ok(())
}

pub fn run_ranked(settings: &Settings, user: &str, tuning: &Tuning) -> Result<()> {
    let model = super::load_model(settings)?;
    let request = tuning.request(settings, user);

    let ranked = recommender::rank(&model, &request)?;
    ui::print_ranked(&ranked);

    Ok(())
}
