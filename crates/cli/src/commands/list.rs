use anyhow::Result;
use colored::Colorize;

use hybridrec_core::config::Settings;
use hybridrec_core::ids::IdMap;

pub fn users(settings: &Settings, limit: usize) -> Result<()> {
    let model = super::load_model(settings)?;
    print_ids("users", model.users(), limit);
    Ok(())
}

pub fn items(settings: &Settings, limit: usize) -> Result<()> {
    let model = super::load_model(settings)?;
    print_ids("items", model.seed_items(), limit);
    Ok(())
}

fn print_ids(label: &str, ids: &IdMap, limit: usize) {
    for id in ids.iter().take(limit) {
        println!("{id}");
    }

    if ids.len() > limit {
        println!(
            "{}",
            format!("... ({} of {} {label} shown)", limit, ids.len()).dimmed()
        );
    }
}
