use anyhow::Result;
use colored::Colorize;

use hybridrec_core::config::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    let model = super::load_model(settings)?;
    let dims = model.dimensions();

    println!("{}", "Model artifacts:".bold());
    println!("  {}  {}", "directory".cyan(), settings.model_dir().display());
    println!("  {}      {}", "users".cyan(), dims.users);
    println!("  {}     {}", "latent".cyan(), dims.latent);
    println!("  {}      {}", "items".cyan(), dims.items);

    Ok(())
}
