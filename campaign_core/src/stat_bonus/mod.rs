//! Stat bonus aggregation - skill stat effects summed into flat bonuses
//! and merged onto base character resources

mod aggregate;
mod bonuses;
mod resources;

pub use aggregate::{get_stat_bonuses_from_skills, sum_stat_bonuses};
pub use bonuses::{StatBonuses, StatKind};
pub use resources::CharacterResources;
