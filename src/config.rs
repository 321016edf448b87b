use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

mod cli;

pub use cli::Cli;

pub const DEFAULT_DB_PATH: &str = "scorecard.db";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageChoice {
    Sqlite(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageChoice,
    pub log_level: String,
}

/// CLI values win over the TOML file, which wins over defaults.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid.
pub fn load_config(cli: Cli) -> Result<AppConfig> {
    let file_config = match cli.config_toml.as_deref() {
        Some(path) => read_file_config(path)?,
        None => cli::FileConfig::default(),
    };

    let in_memory = cli.in_memory || file_config.in_memory.unwrap_or(false);
    let storage = if in_memory {
        StorageChoice::Memory
    } else {
        StorageChoice::Sqlite(
            cli.db
                .or(file_config.db)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
        )
    };
    let log_level = cli
        .log_level
        .or(file_config.log_level)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    Ok(AppConfig { storage, log_level })
}

fn read_file_config(path: &Path) -> Result<cli::FileConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config toml {}", path.display()))?;
    toml::from_str::<cli::FileConfig>(&contents)
        .with_context(|| format!("parse config toml {}", path.display()))
}
