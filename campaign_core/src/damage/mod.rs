//! Damage system - rolling, classification and mitigation

mod calculation;
mod classify;
mod info;

pub use calculation::{
    apply_resistance, calculate_damage_with_resistance, calculate_damage_with_resistance_with_rng,
    calculate_enemy_attack_damage, calculate_enemy_attack_damage_with_rng,
};
pub use classify::{damage_type_of, is_magical_damage, MAGIC_KEYWORDS};
pub use info::DamageInfo;

/// Damage pipeline constants
pub mod constants {
    /// Every hit deals at least this much damage
    pub const MIN_DAMAGE: i32 = 1;

    /// Enemy attacks vary uniformly within +/- this fraction of attack power
    pub const ENEMY_ATTACK_VARIANCE: f64 = 0.25;
}
