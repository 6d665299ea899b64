//! SkillNode - one node of a prerequisite-gated skill tree

use crate::types::{SkillCategory, SkillNodeId, SkillTreeType};
use serde::{Deserialize, Serialize};

/// Render position of a node (derived by layout, not authoritative)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Requirements for buying one rank of a skill
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCost {
    pub skill_points: u32,
    /// Minimum character level
    pub level: u32,
    #[serde(default)]
    pub gold: Option<u32>,
}

/// Typed effect descriptor attached to a skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SkillEffect {
    /// Adds `value` per rank to the stat named by `target`
    StatBonus {
        target: String,
        #[serde(default)]
        value: f64,
    },
    /// Unlocks a catalog ability
    AbilityUnlock {
        #[serde(default)]
        target: String,
        #[serde(default)]
        value: f64,
        #[serde(rename = "abilityId", alias = "ability_id")]
        ability_id: String,
    },
    /// Flavor text with no mechanical effect
    Info {
        #[serde(default)]
        target: String,
        #[serde(default)]
        description: String,
    },
}

impl SkillEffect {
    pub fn stat_bonus(target: impl Into<String>, value: f64) -> Self {
        SkillEffect::StatBonus {
            target: target.into(),
            value,
        }
    }

    pub fn ability_unlock(ability_id: impl Into<String>) -> Self {
        let ability_id = ability_id.into();
        SkillEffect::AbilityUnlock {
            target: ability_id.clone(),
            value: 1.0,
            ability_id,
        }
    }

    pub fn info(description: impl Into<String>) -> Self {
        SkillEffect::Info {
            target: String::new(),
            description: description.into(),
        }
    }

    /// Parse an effects JSON array
    ///
    /// Returns `None` when the text is not a JSON array. Elements with an
    /// unknown shape are kept as info effects.
    pub fn parse_list(json: &str) -> Option<Vec<SkillEffect>> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json).ok()?;
        let effects = values
            .into_iter()
            .map(|value| {
                serde_json::from_value::<SkillEffect>(value.clone()).unwrap_or_else(|err| {
                    tracing::debug!(%err, %value, "unrecognized skill effect, keeping as info");
                    let description = value
                        .get("description")
                        .and_then(|d| d.as_str())
                        .map(str::to_string)
                        .unwrap_or_else(|| value.to_string());
                    SkillEffect::info(description)
                })
            })
            .collect();
        Some(effects)
    }
}

/// A skill tree node with the owning character's progression state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillNode {
    pub id: SkillNodeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,

    // === Placement ===
    /// Depth in the tree, starting at 1
    pub tier: u32,
    pub skill_tree: SkillTreeType,
    #[serde(default)]
    pub position: Position,

    // === Graph ===
    #[serde(default)]
    pub prerequisites: Vec<SkillNodeId>,

    // === Progression ===
    pub cost: SkillCost,
    pub max_rank: u32,
    #[serde(default)]
    pub current_rank: u32,
    #[serde(default)]
    pub is_unlocked: bool,
    #[serde(default)]
    pub is_maxed: bool,

    pub category: SkillCategory,
    #[serde(default)]
    pub effects: Vec<SkillEffect>,
}

impl SkillNode {
    /// Create a locked node with a cost of one skill point
    pub fn new(
        id: impl Into<SkillNodeId>,
        name: impl Into<String>,
        skill_tree: SkillTreeType,
        tier: u32,
        category: SkillCategory,
    ) -> Self {
        SkillNode {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            tier: tier.max(1),
            skill_tree,
            position: Position::default(),
            prerequisites: Vec::new(),
            cost: SkillCost {
                skill_points: 1,
                level: 1,
                gold: None,
            },
            max_rank: 1,
            current_rank: 0,
            is_unlocked: false,
            is_maxed: false,
            category,
            effects: Vec::new(),
        }
    }

    pub fn with_prerequisites(mut self, prerequisites: &[&str]) -> Self {
        self.prerequisites = prerequisites.iter().map(|p| SkillNodeId::from(*p)).collect();
        self
    }

    pub fn with_max_rank(mut self, max_rank: u32) -> Self {
        self.max_rank = max_rank.max(1);
        self.is_maxed = self.current_rank >= self.max_rank;
        self
    }

    pub fn with_effects(mut self, effects: Vec<SkillEffect>) -> Self {
        self.effects = effects;
        self
    }

    /// Set the rank and refresh the derived flags
    pub fn set_rank(&mut self, rank: u32) {
        self.current_rank = rank.min(self.max_rank);
        self.is_unlocked = self.current_rank > 0;
        self.is_maxed = self.current_rank >= self.max_rank;
    }

    /// Ability ids named by explicit unlock effects
    pub fn unlocked_ability_ids(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(|effect| match effect {
            SkillEffect::AbilityUnlock { ability_id, .. } => Some(ability_id.as_str()),
            _ => None,
        })
    }

    /// Whether any effect explicitly unlocks an ability
    pub fn has_ability_unlock(&self) -> bool {
        self.unlocked_ability_ids().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typed_effects() {
        let effects = SkillEffect::parse_list(
            r#"[
                {"type": "stat_bonus", "target": "hp", "value": 10},
                {"type": "ability_unlock", "target": "fireball", "value": 1, "abilityId": "fireball"},
                {"type": "info", "description": "Flavor"}
            ]"#,
        )
        .unwrap();
        assert_eq!(effects[0], SkillEffect::stat_bonus("hp", 10.0));
        assert_eq!(effects[1], SkillEffect::ability_unlock("fireball"));
        assert_eq!(effects[2], SkillEffect::info("Flavor"));
    }

    #[test]
    fn test_parse_snake_case_ability_id() {
        let effects =
            SkillEffect::parse_list(r#"[{"type": "ability_unlock", "ability_id": "ice_shard"}]"#).unwrap();
        assert!(matches!(&effects[0], SkillEffect::AbilityUnlock { ability_id, .. } if ability_id == "ice_shard"));
    }

    #[test]
    fn test_unknown_effect_kept_as_info() {
        let effects =
            SkillEffect::parse_list(r#"[{"type": "aura", "description": "Glows softly"}]"#).unwrap();
        assert_eq!(effects, vec![SkillEffect::info("Glows softly")]);
    }

    #[test]
    fn test_malformed_json() {
        assert!(SkillEffect::parse_list("not json").is_none());
        assert!(SkillEffect::parse_list(r#"{"type": "info"}"#).is_none());
    }

    #[test]
    fn test_set_rank_refreshes_flags() {
        let mut node = SkillNode::new("combat_sword_path", "Sword Path", SkillTreeType::Combat, 1, SkillCategory::Active)
            .with_max_rank(3);
        assert!(!node.is_unlocked);

        node.set_rank(1);
        assert!(node.is_unlocked);
        assert!(!node.is_maxed);

        node.set_rank(7);
        assert_eq!(node.current_rank, 3);
        assert!(node.is_maxed);
    }

    #[test]
    fn test_unlocked_ability_ids() {
        let node = SkillNode::new("magic_elementalist", "Elementalist", SkillTreeType::Magic, 2, SkillCategory::Active)
            .with_effects(vec![
                SkillEffect::ability_unlock("fireball"),
                SkillEffect::stat_bonus("mana", 5.0),
                SkillEffect::ability_unlock("ice_shard"),
            ]);
        assert!(node.has_ability_unlock());
        assert_eq!(node.unlocked_ability_ids().collect::<Vec<_>>(), vec!["fireball", "ice_shard"]);
    }
}
