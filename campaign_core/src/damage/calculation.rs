//! Damage calculation - roll, classify, mitigate
//!
//! Pipeline:
//! 1. Roll the base damage (dice expression or enemy attack power with variance)
//! 2. Pick the resistance: magic resist for magical damage, armor otherwise
//! 3. damage_reduced = floor(base * reduction(resistance))
//! 4. final = max(1, base - damage_reduced)

use super::constants::{ENEMY_ATTACK_VARIANCE, MIN_DAMAGE};
use super::{damage_type_of, DamageInfo};
use crate::ability::Ability;
use crate::defense::{calculate_damage_reduction, DamageTarget};
use crate::dice::roll_damage_with_rng;
use crate::types::DamageType;
use rand::Rng;

/// Resolve a damage expression against a target using the thread RNG
///
/// Without an ability context the hit is treated as physical.
pub fn calculate_damage_with_resistance(
    damage_expr: &str,
    target: &impl DamageTarget,
    ability: Option<&Ability>,
) -> DamageInfo {
    let mut rng = rand::thread_rng();
    calculate_damage_with_resistance_with_rng(damage_expr, target, ability, &mut rng)
}

/// Resolve a damage expression with a provided RNG (for deterministic testing)
pub fn calculate_damage_with_resistance_with_rng(
    damage_expr: &str,
    target: &impl DamageTarget,
    ability: Option<&Ability>,
    rng: &mut impl Rng,
) -> DamageInfo {
    let base_damage = roll_damage_with_rng(damage_expr, rng);
    let damage_type = damage_type_of(ability);
    let info = apply_resistance(base_damage, damage_type, target);

    tracing::debug!(
        expr = damage_expr,
        ability = ability.map(|a| a.id.as_str()),
        breakdown = %info.breakdown(),
        "resolved ability damage"
    );
    info
}

/// Resolve an enemy attack using the thread RNG
pub fn calculate_enemy_attack_damage(
    base_attack_power: i32,
    target: &impl DamageTarget,
    is_magical_attack: bool,
) -> DamageInfo {
    let mut rng = rand::thread_rng();
    calculate_enemy_attack_damage_with_rng(base_attack_power, target, is_magical_attack, &mut rng)
}

/// Resolve an enemy attack with a provided RNG
///
/// Attack power varies uniformly by +/-25% before mitigation.
pub fn calculate_enemy_attack_damage_with_rng(
    base_attack_power: i32,
    target: &impl DamageTarget,
    is_magical_attack: bool,
    rng: &mut impl Rng,
) -> DamageInfo {
    let variance = rng.gen_range(-ENEMY_ATTACK_VARIANCE..=ENEMY_ATTACK_VARIANCE);
    let base_damage = (base_attack_power.max(0) as f64 * (1.0 + variance)).round() as i32;

    let damage_type = if is_magical_attack {
        DamageType::Magical
    } else {
        DamageType::Physical
    };
    let info = apply_resistance(base_damage, damage_type, target);

    tracing::debug!(
        base_attack_power,
        variance,
        breakdown = %info.breakdown(),
        "resolved enemy attack"
    );
    info
}

/// Mitigate an already-rolled amount of damage
pub fn apply_resistance(
    base_damage: i32,
    damage_type: DamageType,
    target: &impl DamageTarget,
) -> DamageInfo {
    let resistance_used = match damage_type {
        DamageType::Physical => target.physical_resistance(),
        DamageType::Magical => target.magical_resistance(),
    };

    let reduction = calculate_damage_reduction(resistance_used as f64);
    let damage_reduced = (base_damage.max(0) as f64 * reduction).floor() as i32;
    let final_damage = (base_damage - damage_reduced).max(MIN_DAMAGE);

    DamageInfo {
        base_damage,
        final_damage,
        damage_reduced,
        damage_type,
        resistance_used,
        reduction,
    }
}
