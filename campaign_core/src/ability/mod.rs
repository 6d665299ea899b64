//! Abilities - catalog, rank scaling and resolution from skills

mod catalog;
mod definition;
mod grants;
mod milestones;
mod resolver;
mod scaling;

pub use catalog::{AbilityCatalog, CatalogFile};
pub use definition::{Ability, AbilityScaling, DiceIncrement, LevelEffect};
pub use grants::{KeywordGrant, SkillAbilityRules, SkillGrant};
pub use milestones::{default_milestones, milestone_ability_grants, MilestoneGrant};
pub use resolver::AbilityResolver;
pub use scaling::apply_skill_scaling;
