//! Loader for JSON replay scripts. A script names a log level, a list of seed
//! entries inserted before anything else, and the operations to replay.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::script::Operation;
use crate::table::Hashtable;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("script file unreadable: {0}")]
    Io(String),
    #[error("script parse failed: {0}")]
    Parse(String),
    #[error("seeding failed: {0}")]
    Seed(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedEntry {
    pub key: String,
    pub value: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct Script {
    #[serde(rename = "logLevel", default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub seed: Vec<SeedEntry>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Script {
    /// Creates a fresh table holding every seed entry. A key seeded twice is
    /// rejected rather than silently overwritten.
    pub fn build_table(&self) -> Result<Hashtable, ConfigError> {
        let mut table = Hashtable::new();
        for entry in &self.seed {
            table
                .insert(&entry.key, entry.value)
                .map_err(|e| ConfigError::Seed(format!("{e}")))?;
        }
        Ok(table)
    }
}

/// Parses a script from JSON text.
pub fn parse_script(raw_json: &str) -> Result<Script, ConfigError> {
    serde_json::from_str(raw_json).map_err(|e| ConfigError::Parse(format!("{e}")))
}

/// Reads and parses a script file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Script, ConfigError> {
    let raw_json = fs::read_to_string(&path).map_err(|e| ConfigError::Io(format!("{e}")))?;
    parse_script(&raw_json)
}
