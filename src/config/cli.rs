use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Offline golf scorecard.", long_about = None)]
pub struct Cli {
    /// SQLite file holding the current round, history and settings.
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,
    /// Keep everything in memory; nothing survives the process.
    #[arg(long)]
    pub in_memory: bool,
    #[arg(long, value_name = "PATH")]
    pub config_toml: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set, e.g. `warn` or `rusty_scorecard=debug`.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub db: Option<PathBuf>,
    #[serde(rename = "in-memory")]
    pub in_memory: Option<bool>,
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}
