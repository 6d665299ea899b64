//! PlayerProgression - a character's skill point budget and unlocked skills

use super::SkillNode;
use crate::types::{SkillNodeId, SkillTreeType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Highest value a mastery level can reach
pub const MAX_MASTERY: u8 = 100;

/// Reasons a skill rank cannot be bought
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("Skill '{0}' is already at max rank")]
    AlreadyMaxed(SkillNodeId),
    #[error("Skill '{skill}' requires '{missing}' to be unlocked first")]
    MissingPrerequisite {
        skill: SkillNodeId,
        missing: SkillNodeId,
    },
    #[error("Not enough skill points: need {needed}, have {available}")]
    InsufficientSkillPoints { needed: u32, available: u32 },
    #[error("Character level {current} is below the required level {required}")]
    LevelTooLow { required: u32, current: u32 },
}

/// Per-tree progress summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTreeSummary {
    pub total_points_spent: u32,
    pub highest_tier_unlocked: u32,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub mastery_bonus: f64,
}

/// Aggregate progression state for one character
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgression {
    pub total_level: u32,
    /// Lifetime skill points earned
    pub skill_points: u32,
    pub unspent_skill_points: u32,
    #[serde(default)]
    pub talent_points: u32,
    #[serde(default)]
    pub unspent_talent_points: u32,
    #[serde(default)]
    pub skill_trees: BTreeMap<SkillTreeType, SkillTreeSummary>,
    #[serde(default)]
    pub unlocked_skills: BTreeSet<SkillNodeId>,
    /// Abilities granted directly, independent of skills
    #[serde(default)]
    pub unlocked_abilities: BTreeSet<String>,
    /// Proficiency per skill category key, 0-100
    #[serde(default)]
    pub mastery_levels: BTreeMap<String, u8>,
    /// Current rank of each unlocked skill (missing means rank 1)
    #[serde(default)]
    pub skill_ranks: BTreeMap<SkillNodeId, u32>,
}

impl PlayerProgression {
    /// Fresh progression with all earned points unspent
    pub fn new(total_level: u32, skill_points: u32) -> Self {
        PlayerProgression {
            total_level,
            skill_points,
            unspent_skill_points: skill_points,
            ..Self::default()
        }
    }

    pub fn is_skill_unlocked(&self, id: &SkillNodeId) -> bool {
        self.unlocked_skills.contains(id)
    }

    /// Rank of a skill: 0 when locked, 1 when unlocked without a recorded rank
    pub fn rank_of(&self, id: &SkillNodeId) -> u32 {
        if !self.is_skill_unlocked(id) {
            return 0;
        }
        self.skill_ranks.get(id).copied().unwrap_or(1).max(1)
    }

    /// Check whether the next rank of `node` can be bought
    pub fn check_upgrade(&self, node: &SkillNode) -> Result<(), ProgressionError> {
        let current = self.rank_of(&node.id);
        if current >= node.max_rank {
            return Err(ProgressionError::AlreadyMaxed(node.id.clone()));
        }

        if let Some(missing) = node
            .prerequisites
            .iter()
            .find(|prereq| !self.is_skill_unlocked(prereq))
        {
            return Err(ProgressionError::MissingPrerequisite {
                skill: node.id.clone(),
                missing: missing.clone(),
            });
        }

        if self.unspent_skill_points < node.cost.skill_points {
            return Err(ProgressionError::InsufficientSkillPoints {
                needed: node.cost.skill_points,
                available: self.unspent_skill_points,
            });
        }

        if self.total_level < node.cost.level {
            return Err(ProgressionError::LevelTooLow {
                required: node.cost.level,
                current: self.total_level,
            });
        }

        Ok(())
    }

    pub fn can_unlock(&self, node: &SkillNode) -> bool {
        self.check_upgrade(node).is_ok()
    }

    /// Buy the next rank of `node`, spending its skill point cost
    ///
    /// Updates the node's rank flags and the per-tree summary. Returns the new rank.
    pub fn upgrade_skill(&mut self, node: &mut SkillNode) -> Result<u32, ProgressionError> {
        self.check_upgrade(node)?;

        let new_rank = self.rank_of(&node.id) + 1;
        self.unspent_skill_points -= node.cost.skill_points;
        self.unlocked_skills.insert(node.id.clone());
        self.skill_ranks.insert(node.id.clone(), new_rank);

        let summary = self.skill_trees.entry(node.skill_tree).or_default();
        summary.total_points_spent += node.cost.skill_points;
        summary.highest_tier_unlocked = summary.highest_tier_unlocked.max(node.tier);

        node.set_rank(new_rank);

        tracing::debug!(skill = %node.id, rank = new_rank, unspent = self.unspent_skill_points, "upgraded skill");
        Ok(new_rank)
    }

    /// Unspent points implied by the ranks held in `nodes`
    ///
    /// Each rank costs the node's `cost.skill_points`. Negative when more
    /// points are spent than were ever earned.
    pub fn expected_unspent_skill_points(&self, nodes: &[SkillNode]) -> i64 {
        let spent: i64 = nodes
            .iter()
            .map(|node| self.rank_of(&node.id) as i64 * node.cost.skill_points as i64)
            .sum();
        self.skill_points as i64 - spent
    }

    pub fn is_consistent(&self, nodes: &[SkillNode]) -> bool {
        self.expected_unspent_skill_points(nodes) == self.unspent_skill_points as i64
    }

    /// Reset `unspent_skill_points` to the value implied by `nodes`
    pub fn reconcile_unspent_points(&mut self, nodes: &[SkillNode]) {
        let expected = self.expected_unspent_skill_points(nodes);
        if expected != self.unspent_skill_points as i64 {
            tracing::warn!(
                recorded = self.unspent_skill_points,
                expected,
                "unspent skill points out of sync with unlocked skills"
            );
        }
        self.unspent_skill_points = expected.max(0) as u32;
    }

    /// Set a mastery level, clamped to 0-100
    pub fn set_mastery(&mut self, key: impl Into<String>, value: u8) {
        self.mastery_levels.insert(key.into(), value.min(MAX_MASTERY));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SkillCategory;

    fn sword_path() -> SkillNode {
        SkillNode::new("combat_sword_path", "Sword Path", SkillTreeType::Combat, 1, SkillCategory::Active)
            .with_max_rank(3)
    }

    fn whirlwind() -> SkillNode {
        let mut node = SkillNode::new("combat_whirlwind", "Whirlwind", SkillTreeType::Combat, 2, SkillCategory::Active)
            .with_prerequisites(&["combat_sword_path"]);
        node.cost.skill_points = 2;
        node.cost.level = 5;
        node
    }

    #[test]
    fn test_upgrade_spends_points_and_ranks_up() {
        let mut progression = PlayerProgression::new(3, 5);
        let mut node = sword_path();

        assert_eq!(progression.upgrade_skill(&mut node), Ok(1));
        assert_eq!(progression.upgrade_skill(&mut node), Ok(2));

        assert_eq!(progression.unspent_skill_points, 3);
        assert_eq!(progression.rank_of(&node.id), 2);
        assert_eq!(node.current_rank, 2);
        assert!(node.is_unlocked);

        let summary = &progression.skill_trees[&SkillTreeType::Combat];
        assert_eq!(summary.total_points_spent, 2);
        assert_eq!(summary.highest_tier_unlocked, 1);
    }

    #[test]
    fn test_max_rank_enforced() {
        let mut progression = PlayerProgression::new(3, 10);
        let mut node = sword_path();
        for _ in 0..3 {
            progression.upgrade_skill(&mut node).unwrap();
        }
        assert!(node.is_maxed);
        assert_eq!(
            progression.upgrade_skill(&mut node),
            Err(ProgressionError::AlreadyMaxed(node.id.clone()))
        );
        assert_eq!(progression.unspent_skill_points, 7);
    }

    #[test]
    fn test_prerequisite_required() {
        let progression = PlayerProgression::new(10, 10);
        let result = progression.check_upgrade(&whirlwind());
        assert!(matches!(result, Err(ProgressionError::MissingPrerequisite { .. })));
    }

    #[test]
    fn test_level_and_points_required() {
        let mut progression = PlayerProgression::new(3, 1);
        progression.unlocked_skills.insert("combat_sword_path".into());

        assert_eq!(
            progression.check_upgrade(&whirlwind()),
            Err(ProgressionError::InsufficientSkillPoints { needed: 2, available: 1 })
        );

        progression.unspent_skill_points = 4;
        assert_eq!(
            progression.check_upgrade(&whirlwind()),
            Err(ProgressionError::LevelTooLow { required: 5, current: 3 })
        );

        progression.total_level = 5;
        assert!(progression.can_unlock(&whirlwind()));
    }

    #[test]
    fn test_upgrade_updates_highest_tier() {
        let mut progression = PlayerProgression::new(5, 10);
        let mut sword = sword_path();
        let mut spin = whirlwind();
        progression.upgrade_skill(&mut sword).unwrap();
        progression.upgrade_skill(&mut spin).unwrap();

        let summary = &progression.skill_trees[&SkillTreeType::Combat];
        assert_eq!(summary.highest_tier_unlocked, 2);
        assert_eq!(summary.total_points_spent, 3);
    }

    #[test]
    fn test_unspent_invariant_and_reconcile() {
        let mut progression = PlayerProgression::new(5, 10);
        let mut sword = sword_path();
        let mut spin = whirlwind();
        progression.upgrade_skill(&mut sword).unwrap();
        progression.upgrade_skill(&mut sword).unwrap();
        progression.upgrade_skill(&mut spin).unwrap();

        let nodes = vec![sword, spin];
        assert!(progression.is_consistent(&nodes));

        progression.unspent_skill_points = 9;
        assert!(!progression.is_consistent(&nodes));
        progression.reconcile_unspent_points(&nodes);
        assert_eq!(progression.unspent_skill_points, 6);
    }

    #[test]
    fn test_mastery_clamped() {
        let mut progression = PlayerProgression::default();
        progression.set_mastery("swords", 250);
        assert_eq!(progression.mastery_levels["swords"], 100);
    }

    #[test]
    fn test_progression_json_round_trip_keys() {
        let mut progression = PlayerProgression::new(4, 6);
        let mut node = sword_path();
        progression.upgrade_skill(&mut node).unwrap();

        let json = serde_json::to_value(&progression).unwrap();
        assert_eq!(json["unspentSkillPoints"], 5);
        assert_eq!(json["skillTrees"]["combat"]["totalPointsSpent"], 1);
        assert_eq!(json["unlockedSkills"][0], "combat_sword_path");
    }
}
