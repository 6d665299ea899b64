//! Combat turn flow - ability use and the per-turn resource lifecycle

mod action;
mod turn;

pub use action::{check_ability, perform_ability, perform_ability_with_rng, AbilityUse, ActionError};
pub use turn::{advance_turn, reduce_cooldowns, TurnResources};
