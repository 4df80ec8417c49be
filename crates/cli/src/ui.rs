use anyhow::{Result, bail};
use colored::Colorize;
use dialoguer::Select;

use hybridrec_core::{RankedItem, RecommendError, Recommendation};

const NO_SEED: &str = "(no seed item)";

pub fn prompt_user(users: &[&str]) -> Result<String> {
    if users.is_empty() {
        bail!("the model has no users to choose from");
    }

    let selection = Select::new()
        .with_prompt("Select user id")
        .items(users)
        .default(0)
        .interact()?;

    Ok(users[selection].to_string())
}

/// `None` when the user picks the "no seed" entry.
pub fn prompt_seed(seeds: &[&str]) -> Result<Option<String>> {
    let mut items = Vec::with_capacity(seeds.len() + 1);
    items.push(NO_SEED);
    items.extend_from_slice(seeds);

    let selection = Select::new()
        .with_prompt("Select seed item (optional)")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => None,
        i => Some(items[i].to_string()),
    })
}

pub fn print_recommendations(rows: &[Recommendation]) {
    println!(
        "{}",
        format!("Top {} recommendations:", rows.len()).green().bold()
    );

    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:>3}. {} by {} {}",
            i + 1,
            row.title.bold(),
            row.author,
            format!("({:.4})", row.score).dimmed()
        );

        if let Some(url) = &row.image_url {
            println!("     {}", url.dimmed());
        }
    }
}

pub fn print_ranked(ranked: &[RankedItem<'_>]) {
    for (i, entry) in ranked.iter().enumerate() {
        println!("{:>3}. {:<12.6} {}", i + 1, entry.score, entry.item);
    }
}

pub fn print_request_error(err: &RecommendError) {
    let hint = match err {
        RecommendError::UserNotFound(_) | RecommendError::ItemNotFound(_) => {
            " Please select a valid user id and seed item."
        }
        RecommendError::InvalidParameter { .. } => "",
    };

    eprintln!("{}: {err}.{hint}", "Error".yellow().bold());
}
