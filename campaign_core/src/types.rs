//! Core types shared by the ability, skill tree and damage modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ability classification in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityCategory {
    Basic,
    Skill,
    Ultimate,
}

/// The skill tree a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTreeType {
    Combat,
    Magic,
    Crafting,
    Exploration,
    Social,
    Defensive,
}

impl SkillTreeType {
    /// Get all skill tree types
    pub fn all() -> &'static [SkillTreeType] {
        &[
            SkillTreeType::Combat,
            SkillTreeType::Magic,
            SkillTreeType::Crafting,
            SkillTreeType::Exploration,
            SkillTreeType::Social,
            SkillTreeType::Defensive,
        ]
    }

    /// Parse a data store string (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "combat" => Some(SkillTreeType::Combat),
            "magic" => Some(SkillTreeType::Magic),
            "crafting" => Some(SkillTreeType::Crafting),
            "exploration" => Some(SkillTreeType::Exploration),
            "social" => Some(SkillTreeType::Social),
            "defensive" => Some(SkillTreeType::Defensive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillTreeType::Combat => "combat",
            SkillTreeType::Magic => "magic",
            SkillTreeType::Crafting => "crafting",
            SkillTreeType::Exploration => "exploration",
            SkillTreeType::Social => "social",
            SkillTreeType::Defensive => "defensive",
        }
    }
}

impl fmt::Display for SkillTreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill node category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Passive,
    Active,
    Ultimate,
    Legendary,
}

impl SkillCategory {
    /// Parse a data store string (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "passive" => Some(SkillCategory::Passive),
            "active" => Some(SkillCategory::Active),
            "ultimate" => Some(SkillCategory::Ultimate),
            "legendary" => Some(SkillCategory::Legendary),
            _ => None,
        }
    }

    /// Whether nodes of this category grant a usable ability
    pub fn grants_ability(&self) -> bool {
        matches!(self, SkillCategory::Active | SkillCategory::Ultimate)
    }
}

/// Damage classification used to pick the mitigating stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Magical,
}

impl DamageType {
    /// Name of the resistance stat that mitigates this damage type
    pub fn resistance_name(&self) -> &'static str {
        match self {
            DamageType::Physical => "armor",
            DamageType::Magical => "magic resist",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageType::Physical => f.write_str("physical"),
            DamageType::Magical => f.write_str("magical"),
        }
    }
}

/// Identifier for a skill tree node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillNodeId(pub String);

impl SkillNodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillNodeId {
    fn from(s: &str) -> Self {
        SkillNodeId(s.to_string())
    }
}

impl From<String> for SkillNodeId {
    fn from(s: String) -> Self {
        SkillNodeId(s)
    }
}

impl fmt::Display for SkillNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
