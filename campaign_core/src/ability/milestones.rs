//! Milestone grants - abilities awarded for the number of unlocked skills
//!
//! Independent of which skills are unlocked. Every reached milestone applies,
//! so a character with 16 skills receives all three default tiers.

use serde::{Deserialize, Serialize};

/// Abilities granted once a character has unlocked `min_unlocked_skills` skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneGrant {
    pub min_unlocked_skills: usize,
    /// Level the granted abilities are scaled to
    pub level: u32,
    pub abilities: Vec<String>,
}

impl MilestoneGrant {
    pub fn new(min_unlocked_skills: usize, level: u32, abilities: &[&str]) -> Self {
        MilestoneGrant {
            min_unlocked_skills,
            level,
            abilities: abilities.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn is_reached(&self, unlocked_skills: usize) -> bool {
        unlocked_skills >= self.min_unlocked_skills
    }
}

/// Default milestone table: 5, 10 and 15 unlocked skills
pub fn default_milestones() -> Vec<MilestoneGrant> {
    vec![
        MilestoneGrant::new(5, 1, &["power_strike", "shield_bash", "quick_shot"]),
        MilestoneGrant::new(10, 2, &["whirlwind", "fireball", "healing_touch"]),
        MilestoneGrant::new(15, 3, &["meteor_strike", "berserker_rage"]),
    ]
}

/// Milestones reached for a given unlocked skill count, lowest threshold first
pub fn milestone_ability_grants(
    milestones: &[MilestoneGrant],
    unlocked_skills: usize,
) -> Vec<&MilestoneGrant> {
    let mut reached: Vec<&MilestoneGrant> = milestones
        .iter()
        .filter(|m| m.is_reached(unlocked_skills))
        .collect();
    reached.sort_by_key(|m| m.min_unlocked_skills);
    reached
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_stack() {
        let milestones = default_milestones();
        assert!(milestone_ability_grants(&milestones, 4).is_empty());
        assert_eq!(milestone_ability_grants(&milestones, 5).len(), 1);
        assert_eq!(milestone_ability_grants(&milestones, 10).len(), 2);
        assert_eq!(milestone_ability_grants(&milestones, 16).len(), 3);
    }

    #[test]
    fn test_reached_sorted_by_threshold() {
        let milestones = vec![
            MilestoneGrant::new(10, 2, &["b"]),
            MilestoneGrant::new(3, 1, &["a"]),
        ];
        let reached = milestone_ability_grants(&milestones, 12);
        assert_eq!(reached[0].abilities, vec!["a".to_string()]);
        assert_eq!(reached[1].abilities, vec!["b".to_string()]);
    }

    #[test]
    fn test_default_tiers_are_distinct() {
        let mut all: Vec<String> = default_milestones()
            .into_iter()
            .flat_map(|m| m.abilities)
            .collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total);
        assert_eq!(total, 8);
    }
}
