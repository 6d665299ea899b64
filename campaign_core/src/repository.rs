//! Data access seam for per-character skill state
//!
//! Resolvers take a `SkillRepository` explicitly instead of reaching for a
//! shared client. Implementations wrap the hosted data store; the in-memory
//! one backs the example binary and tests.

use crate::skill_tree::{SkillEffect, SkillNode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Data access failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Character not found: {0}")]
    NotFound(String),
    #[error("Data store unavailable: {0}")]
    Unavailable(String),
}

/// Raw effects of one unlocked skill, for stat bonus aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillStatEffects {
    pub skill_id: String,
    pub rank: u32,
    pub effects: Vec<SkillEffect>,
}

/// Per-character skill lookups
#[cfg_attr(test, mockall::automock)]
pub trait SkillRepository {
    /// Current rank of each unlocked skill
    fn fetch_skill_ranks(&self, character_id: &str) -> Result<HashMap<String, u32>, RepositoryError>;

    /// Effects of every unlocked skill with its rank
    fn fetch_skill_stat_effects(&self, character_id: &str) -> Result<Vec<SkillStatEffects>, RepositoryError>;
}

/// Per-character skill state held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySkillRepository {
    characters: HashMap<String, Vec<SkillStatEffects>>,
}

impl InMemorySkillRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skill for a character, replacing any earlier entry for the same skill
    pub fn insert_skill(
        &mut self,
        character_id: impl Into<String>,
        skill_id: impl Into<String>,
        rank: u32,
        effects: Vec<SkillEffect>,
    ) {
        let skill_id = skill_id.into();
        let skills = self.characters.entry(character_id.into()).or_default();
        skills.retain(|s| s.skill_id != skill_id);
        skills.push(SkillStatEffects {
            skill_id,
            rank,
            effects,
        });
    }

    /// Record every node the character holds a rank in
    pub fn insert_nodes(&mut self, character_id: &str, nodes: &[SkillNode]) {
        for node in nodes.iter().filter(|n| n.current_rank > 0) {
            self.insert_skill(character_id, node.id.as_str(), node.current_rank, node.effects.clone());
        }
    }
}

impl SkillRepository for InMemorySkillRepository {
    fn fetch_skill_ranks(&self, character_id: &str) -> Result<HashMap<String, u32>, RepositoryError> {
        let skills = self
            .characters
            .get(character_id)
            .ok_or_else(|| RepositoryError::NotFound(character_id.to_string()))?;
        Ok(skills
            .iter()
            .map(|s| (s.skill_id.clone(), s.rank))
            .collect())
    }

    fn fetch_skill_stat_effects(&self, character_id: &str) -> Result<Vec<SkillStatEffects>, RepositoryError> {
        self.characters
            .get(character_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(character_id.to_string()))
    }
}
