//! AbilityResolver - derives a character's usable abilities
//!
//! Sources, in priority order for deduplication:
//! 1. abilities granted by unlocked skills, scaled by skill rank
//! 2. milestone grants for the number of unlocked skills
//!
//! The first grant of an ability id wins; later grants of the same id are dropped.

use super::{apply_skill_scaling, milestone_ability_grants, Ability, AbilityCatalog, MilestoneGrant};
use crate::repository::SkillRepository;
use crate::skill_tree::{PlayerProgression, SkillNode};
use std::collections::{HashMap, HashSet};

/// Resolves abilities against a catalog and a milestone table
#[derive(Debug, Clone, Copy)]
pub struct AbilityResolver<'a> {
    catalog: &'a AbilityCatalog,
    milestones: &'a [MilestoneGrant],
}

impl<'a> AbilityResolver<'a> {
    pub fn new(catalog: &'a AbilityCatalog, milestones: &'a [MilestoneGrant]) -> Self {
        AbilityResolver {
            catalog,
            milestones,
        }
    }

    pub fn catalog(&self) -> &'a AbilityCatalog {
        self.catalog
    }

    /// Abilities granted directly through `unlocked_abilities`, unscaled
    ///
    /// Unknown ids are dropped.
    pub fn get_player_abilities(&self, progression: &PlayerProgression) -> Vec<Ability> {
        progression
            .unlocked_abilities
            .iter()
            .filter_map(|id| self.lookup(id))
            .collect()
    }

    /// Abilities a single skill unlocks, unscaled
    ///
    /// Explicit `ability_unlock` effects are used when present. Active and
    /// ultimate skills without one fall back to the grant rules, then to a
    /// name match against the catalog.
    pub fn get_abilities_from_skill(&self, skill: &SkillNode) -> Vec<Ability> {
        let ids: Vec<&str> = if skill.has_ability_unlock() {
            skill.unlocked_ability_ids().collect()
        } else if skill.category.grants_ability() {
            let skill_name = Some(skill.name.as_str());
            let ruled = self.catalog.rules().abilities_for(skill.id.as_str(), skill_name);
            if ruled.is_empty() {
                self.catalog.match_by_name(skill.id.as_str(), skill_name)
            } else {
                ruled
            }
        } else {
            Vec::new()
        };

        let mut seen = HashSet::new();
        ids.into_iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.lookup(id))
            .collect()
    }

    /// Abilities granted by a set of unlocked skills, scaled by each skill's rank
    ///
    /// Ranks come from `repo`; when the lookup fails every skill is treated
    /// as rank 1. Milestone grants for the number of distinct skill ids
    /// follow the skill grants.
    pub fn get_abilities_from_unlocked_skills_with_levels(
        &self,
        repo: &impl SkillRepository,
        character_id: &str,
        unlocked_skill_ids: &[String],
    ) -> Vec<Ability> {
        let ranks = repo.fetch_skill_ranks(character_id).unwrap_or_else(|err| {
            tracing::warn!(character = character_id, %err, "skill rank lookup failed, assuming rank 1");
            HashMap::new()
        });

        let mut granted = GrantedAbilities::default();

        for skill_id in unlocked_skill_ids {
            let rank = ranks.get(skill_id).copied().unwrap_or(1).max(1);
            for ability_id in self.catalog.rules().abilities_for(skill_id, None) {
                if let Some(ability) = self.catalog.get(ability_id) {
                    tracing::debug!(skill = %skill_id, ability = ability_id, rank, "skill grants ability");
                    granted.push(apply_skill_scaling(ability, rank));
                }
            }
        }

        let distinct: HashSet<&str> = unlocked_skill_ids.iter().map(String::as_str).collect();
        for milestone in milestone_ability_grants(self.milestones, distinct.len()) {
            tracing::debug!(
                threshold = milestone.min_unlocked_skills,
                level = milestone.level,
                "milestone reached"
            );
            for ability_id in &milestone.abilities {
                if let Some(ability) = self.lookup(ability_id) {
                    granted.push(apply_skill_scaling(&ability, milestone.level));
                }
            }
        }

        granted.into_vec()
    }

    fn lookup(&self, id: &str) -> Option<Ability> {
        let ability = self.catalog.instantiate(id);
        if ability.is_none() {
            tracing::warn!(ability = id, "unknown ability id, skipping");
        }
        ability
    }
}

/// Ordered ability list keeping the first instance of each id
#[derive(Default)]
struct GrantedAbilities {
    seen: HashSet<String>,
    abilities: Vec<Ability>,
}

impl GrantedAbilities {
    fn push(&mut self, ability: Ability) {
        if self.seen.insert(ability.id.clone()) {
            self.abilities.push(ability);
        }
    }

    fn into_vec(self) -> Vec<Ability> {
        self.abilities
    }
}
