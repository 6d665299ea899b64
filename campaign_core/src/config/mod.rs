//! Campaign data files
//!
//! Both the ability catalog (`abilities.toml`) and the campaign tuning
//! (`campaign.toml`) are TOML. Each has a compiled-in copy; files on disk
//! override them.

mod campaign;

pub use campaign::{CampaignConfig, ProgressionConfig};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a campaign data file could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read campaign data file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Malformed campaign TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Well-formed TOML whose contents break a campaign rule
    #[error("Invalid campaign data: {0}")]
    ValidationError(String),
}

/// Read a campaign data file from disk
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    tracing::debug!(path = %path.display(), "reading campaign data");
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}
