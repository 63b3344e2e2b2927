//! Configuration management for the tama application.
//!
//! A single JSON file in the platform data directory holds the few settings
//! tama has — today that is an optional override for the database file
//! location. Reading tolerates a missing file (defaults apply); saving is
//! explicit via `tama init` so later runs never rewrite the file silently.
//!
//! ```rust,no_run
//! use tama::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.db_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::DB_FILE_NAME;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Application settings persisted as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Custom database file location. The platform data directory is used
    /// when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_file: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Writes the configuration to the data directory.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive setup: prompts for each setting with the current value as
    /// the default. An empty answer keeps the platform default.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;

        let db_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbPath.to_string())
            .default(current.db_file.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let db_file = db_file.trim();
        Ok(Config {
            db_file: if db_file.is_empty() { None } else { Some(PathBuf::from(db_file)) },
        })
    }

    /// Resolves the database file path: the configured override, or
    /// `tama.db` in the platform data directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.db_file {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
