//! campaign_core - Combat and skill progression rules for a tabletop campaign companion
//!
//! This library provides:
//! - Damage Resolution: dice rolling and armor/magic resist mitigation
//! - Ability Resolution: catalog abilities granted by skills, scaled by rank
//! - Skill Trees: data store mapping, progression rules and node layout
//! - Stat Bonuses: skill stat effects merged onto character resources
//! - Combat: ability use and the per-turn resource lifecycle

pub mod ability;
pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod dice;
pub mod prelude;
pub mod repository;
pub mod skill_tree;
pub mod stat_bonus;
pub mod types;

// Re-export core types for convenience
pub use ability::{apply_skill_scaling, Ability, AbilityCatalog, AbilityResolver, MilestoneGrant};
pub use combat::{perform_ability, reduce_cooldowns, AbilityUse, ActionError, TurnResources};
pub use config::{CampaignConfig, ConfigError};
pub use damage::{calculate_damage_with_resistance, calculate_enemy_attack_damage, is_magical_damage, DamageInfo};
pub use defense::{calculate_damage_reduction, CombatantDefenses, DamageTarget};
pub use dice::{roll_damage, DamageExpression};
pub use repository::{InMemorySkillRepository, RepositoryError, SkillRepository, SkillStatEffects};
pub use skill_tree::{
    calculate_tree_positions, map_ds_to_skill_nodes, PlayerProgression, SkillEffect, SkillNode, SkillRow,
};
pub use stat_bonus::{get_stat_bonuses_from_skills, CharacterResources, StatBonuses};
pub use types::{AbilityCategory, DamageType, SkillCategory, SkillNodeId, SkillTreeType};
