mod commands;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use hybridrec_core::RecommendError;
use hybridrec_core::config::{self, Mergeable, Settings};

#[derive(Parser)]
#[command(
    name = "hybridrec",
    version,
    about = "Hybrid collaborative + content-based recommendations"
)]
struct Cli {
    /// Directory holding the model artifacts.
    #[arg(long, global = true)]
    model_dir: Option<PathBuf>,

    /// Metadata CSV (Book-Title, Book-Author, Image-URL-M).
    #[arg(long, global = true)]
    metadata: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend items for a user, optionally seeded by an item title.
    Recommend {
        user: String,
        #[command(flatten)]
        tuning: commands::Tuning,
        /// Print the rows as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print ranked titles and scores without metadata.
    Rank {
        user: String,
        #[command(flatten)]
        tuning: commands::Tuning,
    },
    /// List user ids in index order.
    Users {
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// List seed item titles in similarity order.
    Items {
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
    /// Show artifact dimensions.
    Info,
    /// Pick a user and seed interactively.
    Pick,
}

fn main() -> Result<ExitCode> {
    hybridrec_utils::init_tracing();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let flags = Settings {
        model_dir: cli.model_dir,
        metadata_path: cli.metadata,
        ..Default::default()
    };
    let settings = config::load_settings(&cwd).merge(flags);

    let result = match cli.command {
        Command::Recommend { user, tuning, json } => {
            commands::recommend::run(&settings, &user, &tuning, json)
        }
        Command::Rank { user, tuning } => commands::recommend::run_ranked(&settings, &user, &tuning),
        Command::Users { limit } => commands::list::users(&settings, limit),
        Command::Items { limit } => commands::list::items(&settings, limit),
        Command::Info => commands::info::run(&settings),
        Command::Pick => commands::pick::run(&settings),
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<RecommendError>() {
            Some(request_err) => {
                ui::print_request_error(request_err);
                Ok(ExitCode::from(2))
            }
            None => Err(err),
        },
    }
}
