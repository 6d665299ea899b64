//! Skill trees - node model, progression rules, data store mapping and layout

mod layout;
mod mapping;
mod node;
mod progression;
mod sample;

pub use layout::{calculate_tree_positions, LayoutConfig, LayoutStyle};
pub use mapping::{map_ds_to_skill_nodes, SkillRow};
pub use node::{Position, SkillCost, SkillEffect, SkillNode};
pub use progression::{PlayerProgression, ProgressionError, SkillTreeSummary, MAX_MASTERY};
pub use sample::sample_skill_rows;
