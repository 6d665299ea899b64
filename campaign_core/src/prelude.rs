//! Prelude module for convenient imports
//!
//! ```rust
//! use campaign_core::prelude::*;
//! ```

// Core types
pub use crate::types::{AbilityCategory, DamageType, SkillCategory, SkillNodeId, SkillTreeType};

// Abilities
pub use crate::ability::{Ability, AbilityCatalog, AbilityResolver, MilestoneGrant};

// Damage system
pub use crate::damage::{calculate_damage_with_resistance, calculate_enemy_attack_damage, DamageInfo};
pub use crate::defense::{CombatantDefenses, DamageTarget};
pub use crate::dice::roll_damage;

// Skill trees
pub use crate::skill_tree::{LayoutConfig, PlayerProgression, SkillEffect, SkillNode, SkillRow};

// Stats and combat
pub use crate::combat::{perform_ability, reduce_cooldowns, ActionError, TurnResources};
pub use crate::stat_bonus::{CharacterResources, StatBonuses};

// Data access and config
pub use crate::config::CampaignConfig;
pub use crate::repository::{InMemorySkillRepository, SkillRepository};
