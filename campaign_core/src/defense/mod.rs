//! Defense - Armor and magic resist mitigation

mod reduction;
mod target;

pub use reduction::{calculate_damage_reduction, resistance_for_reduction};
pub use target::{DamageTarget, CombatantDefenses};

/// Defense calculation constants
pub mod constants {
    /// Resistance values above this are treated as this value
    pub const RESISTANCE_CAP: f64 = 500.0;

    /// Curve constant: reduction = resistance / (resistance + CONSTANT)
    /// At resistance == CONSTANT the reduction is exactly 50%
    pub const REDUCTION_CONSTANT: f64 = 100.0;

    /// Maximum fraction of damage any resistance can remove
    pub const MAX_REDUCTION: f64 = 0.9;
}
