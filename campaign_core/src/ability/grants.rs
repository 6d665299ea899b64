//! Skill to ability grant rules
//!
//! Literal skill id rules are consulted first. Keyword rules are a fallback
//! for skills without an explicit entry and are matched as case-insensitive
//! substrings of the skill id and name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Explicit skill id -> ability ids rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGrant {
    pub skill_id: String,
    pub abilities: Vec<String>,
}

/// Keyword fallback rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGrant {
    pub keyword: String,
    pub ability: String,
}

/// Lookup table deciding which abilities a skill grants
#[derive(Debug, Clone, Default)]
pub struct SkillAbilityRules {
    by_skill_id: HashMap<String, Vec<String>>,
    keywords: Vec<KeywordGrant>,
}

impl SkillAbilityRules {
    pub fn new(skill_grants: Vec<SkillGrant>, keyword_grants: Vec<KeywordGrant>) -> Self {
        let mut by_skill_id: HashMap<String, Vec<String>> = HashMap::new();
        for grant in skill_grants {
            let entry = by_skill_id.entry(grant.skill_id).or_default();
            for ability in grant.abilities {
                if !entry.contains(&ability) {
                    entry.push(ability);
                }
            }
        }

        let keywords = keyword_grants
            .into_iter()
            .map(|k| KeywordGrant {
                keyword: k.keyword.to_ascii_lowercase(),
                ability: k.ability,
            })
            .collect();

        SkillAbilityRules {
            by_skill_id,
            keywords,
        }
    }

    /// Ability ids granted by a skill, in rule order without duplicates
    pub fn abilities_for(&self, skill_id: &str, skill_name: Option<&str>) -> Vec<&str> {
        if let Some(explicit) = self.by_skill_id.get(skill_id) {
            return explicit.iter().map(String::as_str).collect();
        }
        self.keyword_matches(skill_id, skill_name)
    }

    /// Ability ids whose keyword appears in the skill id or name
    pub fn keyword_matches(&self, skill_id: &str, skill_name: Option<&str>) -> Vec<&str> {
        let id = skill_id.to_ascii_lowercase();
        let name = skill_name.map(str::to_ascii_lowercase).unwrap_or_default();

        let mut matched: Vec<&str> = Vec::new();
        for rule in &self.keywords {
            if (id.contains(&rule.keyword) || name.contains(&rule.keyword))
                && !matched.contains(&rule.ability.as_str())
            {
                matched.push(rule.ability.as_str());
            }
        }
        matched
    }

    /// Every ability id referenced by any rule
    pub fn referenced_abilities(&self) -> impl Iterator<Item = &str> {
        self.by_skill_id
            .values()
            .flatten()
            .map(String::as_str)
            .chain(self.keywords.iter().map(|k| k.ability.as_str()))
    }
}
