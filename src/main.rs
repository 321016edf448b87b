use anyhow::{Context, Result};
use clap::Parser;
use rusty_scorecard::config::{Cli, StorageChoice, load_config};
use rusty_scorecard::repl::run_repl;
use rusty_scorecard::session::Session;
use rusty_scorecard::storage::{MemoryStorage, SqliteStorage};
use rusty_scorecard::telemetry::init_tracing;
use tracing::info;

fn main() -> Result<()> {
    let config = load_config(Cli::parse())?;
    init_tracing(&config.log_level);

    match config.storage {
        StorageChoice::Sqlite(path) => {
            info!(path = %path.display(), "using sqlite storage");
            let storage = SqliteStorage::open(&path)
                .with_context(|| format!("open scorecard db {}", path.display()))?;
            run_repl(&mut Session::load(storage))
        }
        StorageChoice::Memory => {
            info!("using in-memory storage");
            run_repl(&mut Session::load(MemoryStorage::new()))
        }
    }
}
