//! AbilityCatalog - the compiled-in table of abilities and skill grant rules

use super::{Ability, KeywordGrant, SkillAbilityRules, SkillGrant};
use crate::config::ConfigError;
use crate::types::AbilityCategory;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// On-disk layout of a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub skill_grants: Vec<SkillGrant>,
    #[serde(default)]
    pub keyword_grants: Vec<KeywordGrant>,
}

/// Ability definitions keyed by id, plus the rules mapping skills to them
#[derive(Debug, Clone, Default)]
pub struct AbilityCatalog {
    abilities: BTreeMap<String, Ability>,
    rules: SkillAbilityRules,
}

impl AbilityCatalog {
    /// Build a catalog, rejecting duplicate ids and rules that name unknown abilities
    pub fn from_file(file: CatalogFile) -> Result<Self, ConfigError> {
        let mut abilities = BTreeMap::new();
        for mut ability in file.abilities {
            if abilities.contains_key(&ability.id) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate ability id '{}'",
                    ability.id
                )));
            }
            ability.record_base_values();
            ability.current_cooldown = 0;
            ability.level = 1;
            abilities.insert(ability.id.clone(), ability);
        }

        let rules = SkillAbilityRules::new(file.skill_grants, file.keyword_grants);
        let unknown: HashSet<&str> = rules
            .referenced_abilities()
            .filter(|id| !abilities.contains_key(*id))
            .collect();
        if !unknown.is_empty() {
            let mut unknown: Vec<&str> = unknown.into_iter().collect();
            unknown.sort_unstable();
            return Err(ConfigError::ValidationError(format!(
                "grant rules reference unknown abilities: {}",
                unknown.join(", ")
            )));
        }

        Ok(AbilityCatalog { abilities, rules })
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file: CatalogFile = crate::config::load_toml(path)?;
        Self::from_file(file)
    }

    /// Parse a catalog from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = crate::config::parse_toml(content)?;
        Self::from_file(file)
    }

    /// Get the compiled-in catalog
    pub fn default_catalog() -> Self {
        let toml = include_str!("../../config/abilities.toml");
        Self::parse(toml).unwrap_or_else(|err| {
            tracing::warn!(%err, "compiled-in ability catalog failed to load, using fallback");
            Self::fallback()
        })
    }

    fn fallback() -> Self {
        let mut power_strike = Ability::new("power_strike", "Power Strike", AbilityCategory::Basic)
            .with_description("A heavy two-handed blow.")
            .with_damage("2d6 + 3")
            .with_cooldown(2);
        power_strike.record_base_values();

        let mut abilities = BTreeMap::new();
        abilities.insert(power_strike.id.clone(), power_strike);
        AbilityCatalog {
            abilities,
            rules: SkillAbilityRules::default(),
        }
    }

    /// Look up a definition
    pub fn get(&self, id: &str) -> Option<&Ability> {
        self.abilities.get(id)
    }

    /// Clone a fresh, unscaled instance of an ability
    pub fn instantiate(&self, id: &str) -> Option<Ability> {
        self.abilities.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.abilities.contains_key(id)
    }

    pub fn rules(&self) -> &SkillAbilityRules {
        &self.rules
    }

    /// Ability ids whose id or name appears in the skill id or name
    ///
    /// Comparison ignores case and treats spaces, hyphens and underscores
    /// alike, so "Quick Shot" and "quick-shot" both match `quick_shot`.
    pub fn match_by_name(&self, skill_id: &str, skill_name: Option<&str>) -> Vec<&str> {
        let haystacks: Vec<String> = std::iter::once(skill_id)
            .chain(skill_name)
            .map(normalize_name)
            .filter(|s| !s.is_empty())
            .collect();

        self.abilities
            .values()
            .filter(|ability| {
                let id = normalize_name(&ability.id);
                let name = normalize_name(&ability.name);
                haystacks.iter().any(|hay| {
                    (!id.is_empty() && hay.contains(&id)) || (!name.is_empty() && hay.contains(&name))
                })
            })
            .map(|ability| ability.id.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.values()
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

fn normalize_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
