// gtasks: command-line client for Google Tasks.
// Resolves task lists by title through a persistent local cache.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod api;
mod cache;
mod cli;
mod commands;
mod config;
mod error;
mod prompt;
mod resolve;

use api::TasksClient;
use cache::TasklistCache;
use cli::{Cli, Command};
use commands::CmdOutcome;
use config::Config;
use error::{GtasksError, Result};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(CmdOutcome::Completed) => ExitCode::SUCCESS,
        Ok(CmdOutcome::Cancelled) => {
            println!("Operation cancelled.");
            ExitCode::from(130)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<CmdOutcome> {
    let mut cache = TasklistCache::load(require_path(cache::paths::cache_file())?)?;
    let mut config = Config::load(require_path(cache::paths::config_file())?)?;
    let client = TasksClient::from_env()?;

    match cli.command {
        Command::Lists { limit, show_ids } => {
            commands::lists(&client, &mut cache, &config, limit, show_ids).await
        }
        Command::Tasks {
            selector,
            limit,
            show_ids,
        } => commands::tasks(&client, &mut cache, &config, &selector, limit, show_ids).await,
        Command::Add {
            title,
            selector,
            notes,
            due,
        } => commands::add(&client, &mut cache, &config, &selector, title, notes, due).await,
        Command::Delete { task_id, selector } => {
            commands::delete(&client, &mut cache, &config, &selector, task_id).await
        }
        Command::SetDefault => commands::set_default(&client, &mut cache, &mut config).await,
    }
}

fn require_path(path: Option<PathBuf>) -> Result<PathBuf> {
    path.ok_or_else(|| {
        GtasksError::Other("could not determine the user config directory".to_string())
    })
}
