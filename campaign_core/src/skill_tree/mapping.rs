//! Mapping raw data store rows into typed skill nodes

use super::{PlayerProgression, Position, SkillCost, SkillEffect, SkillNode};
use crate::ability::SkillAbilityRules;
use crate::config::ProgressionConfig;
use crate::types::{SkillCategory, SkillNodeId, SkillTreeType};
use serde::{Deserialize, Serialize};

/// A skill definition row as stored in the data store
///
/// `skill_tree`, `category` and `effects` are free-form strings there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub tier: u32,
    pub skill_tree: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default = "default_cost_points")]
    pub cost_skill_points: u32,
    #[serde(default = "default_cost_level")]
    pub cost_level: u32,
    #[serde(default)]
    pub cost_gold: Option<u32>,
    #[serde(default = "default_max_rank")]
    pub max_rank: u32,
    /// JSON array of effect descriptors
    #[serde(default)]
    pub effects: Option<String>,
}

fn default_cost_points() -> u32 {
    1
}
fn default_cost_level() -> u32 {
    1
}
fn default_max_rank() -> u32 {
    1
}

/// Convert data store rows into skill nodes for one character
///
/// - unknown skill tree strings become `crafting`, unknown categories `passive` (both logged)
/// - tier 1 nodes display as unlocked when `tier_one_always_unlocked` is set;
///   this never grants rank
/// - missing or malformed effects are inferred from the keyword grant table,
///   or replaced by an info placeholder
pub fn map_ds_to_skill_nodes(
    rows: &[SkillRow],
    progression: &PlayerProgression,
    rules: &SkillAbilityRules,
    config: &ProgressionConfig,
) -> Vec<SkillNode> {
    rows.iter()
        .map(|row| map_row(row, progression, rules, config))
        .collect()
}

fn map_row(
    row: &SkillRow,
    progression: &PlayerProgression,
    rules: &SkillAbilityRules,
    config: &ProgressionConfig,
) -> SkillNode {
    let skill_tree = SkillTreeType::parse(&row.skill_tree).unwrap_or_else(|| {
        tracing::warn!(skill = %row.id, tree = %row.skill_tree, "unknown skill tree, defaulting to crafting");
        SkillTreeType::Crafting
    });

    let category = SkillCategory::parse(&row.category).unwrap_or_else(|| {
        if !row.category.is_empty() {
            tracing::warn!(skill = %row.id, category = %row.category, "unknown skill category, defaulting to passive");
        }
        SkillCategory::Passive
    });

    let tier = if row.tier == 0 {
        tracing::warn!(skill = %row.id, "skill has tier 0, treating as tier 1");
        1
    } else {
        row.tier
    };

    let id = SkillNodeId::from(row.id.as_str());
    let max_rank = row.max_rank.max(1);
    let current_rank = progression.rank_of(&id).min(max_rank);
    let is_unlocked = current_rank > 0 || (tier == 1 && config.tier_one_always_unlocked);

    SkillNode {
        effects: parse_effects(row, rules),
        id,
        name: row.name.clone(),
        description: row.description.clone(),
        icon: row.icon.clone(),
        tier,
        skill_tree,
        position: Position::default(),
        prerequisites: row
            .prerequisites
            .iter()
            .map(|p| SkillNodeId::from(p.as_str()))
            .collect(),
        cost: SkillCost {
            skill_points: row.cost_skill_points,
            level: row.cost_level,
            gold: row.cost_gold,
        },
        max_rank,
        current_rank,
        is_unlocked,
        is_maxed: current_rank >= max_rank,
        category,
    }
}

fn parse_effects(row: &SkillRow, rules: &SkillAbilityRules) -> Vec<SkillEffect> {
    if let Some(json) = row.effects.as_deref().filter(|s| !s.trim().is_empty()) {
        if let Some(effects) = SkillEffect::parse_list(json) {
            return effects;
        }
        tracing::warn!(skill = %row.id, "malformed effects JSON, inferring effects");
    }

    let inferred: Vec<SkillEffect> = rules
        .keyword_matches(&row.id, Some(row.name.as_str()))
        .into_iter()
        .map(SkillEffect::ability_unlock)
        .collect();

    if inferred.is_empty() {
        vec![SkillEffect::info(format!("{}: no effect data", row.name))]
    } else {
        inferred
    }
}
