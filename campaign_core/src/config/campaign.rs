//! Campaign constants configuration

use super::ConfigError;
use crate::ability::{default_milestones, AbilityCatalog, MilestoneGrant};
use crate::skill_tree::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable campaign constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub progression: ProgressionConfig,
    /// Abilities granted for the number of unlocked skills
    #[serde(default = "default_milestones")]
    pub milestones: Vec<MilestoneGrant>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        CampaignConfig {
            layout: LayoutConfig::default(),
            progression: ProgressionConfig::default(),
            milestones: default_milestones(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Tier 1 nodes display as unlocked even when the character has no rank in them
    #[serde(default = "default_tier_one_always_unlocked")]
    pub tier_one_always_unlocked: bool,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        ProgressionConfig {
            tier_one_always_unlocked: true,
        }
    }
}

fn default_tier_one_always_unlocked() -> bool {
    true
}

impl CampaignConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: CampaignConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: CampaignConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the compiled-in configuration
    pub fn default_config() -> Self {
        let toml = include_str!("../../config/campaign.toml");
        Self::parse(toml).unwrap_or_else(|err| {
            tracing::warn!(%err, "compiled-in campaign config failed to load, using defaults");
            Self::default()
        })
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.tier_spacing <= 0.0 {
            return Err(ConfigError::ValidationError(
                "layout.tier_spacing must be positive".to_string(),
            ));
        }
        if self.layout.column_width <= 0.0 {
            return Err(ConfigError::ValidationError(
                "layout.column_width must be positive".to_string(),
            ));
        }
        for milestone in &self.milestones {
            if milestone.level == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "milestone at {} skills has level 0",
                    milestone.min_unlocked_skills
                )));
            }
        }
        Ok(())
    }

    /// Check that every milestone ability exists in the catalog
    pub fn validate_against(&self, catalog: &AbilityCatalog) -> Result<(), ConfigError> {
        for milestone in &self.milestones {
            for id in &milestone.abilities {
                if !catalog.contains(id) {
                    return Err(ConfigError::ValidationError(format!(
                        "milestone at {} skills grants unknown ability '{}'",
                        milestone.min_unlocked_skills, id
                    )));
                }
            }
        }
        Ok(())
    }
}
