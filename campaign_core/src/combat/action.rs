//! Ability use - validation, resource spending and damage resolution

use super::TurnResources;
use crate::ability::Ability;
use crate::damage::{calculate_damage_with_resistance_with_rng, DamageInfo};
use crate::defense::DamageTarget;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an ability cannot be used right now
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{ability} is on cooldown for {turns} more turn(s)")]
    OnCooldown { ability: String, turns: u32 },
    #[error("{ability} needs {needed} mana, have {available}")]
    InsufficientMana {
        ability: String,
        needed: u32,
        available: i32,
    },
    #[error("No action points left this turn")]
    NoActionPoints,
}

/// Outcome of a successful ability use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityUse {
    pub ability_id: String,
    pub mana_spent: u32,
    /// Damage dealt, `None` for abilities without a damage expression
    pub damage: Option<DamageInfo>,
    /// Cooldown now running on the ability
    pub cooldown: u32,
}

/// Check whether `ability` can be used with `resources`
pub fn check_ability(ability: &Ability, resources: &TurnResources) -> Result<(), ActionError> {
    if !resources.has_action_points() {
        return Err(ActionError::NoActionPoints);
    }
    if !ability.is_ready() {
        return Err(ActionError::OnCooldown {
            ability: ability.id.clone(),
            turns: ability.current_cooldown,
        });
    }
    let cost = ability.mana_cost.unwrap_or(0);
    if i64::from(resources.mana) < i64::from(cost) {
        return Err(ActionError::InsufficientMana {
            ability: ability.id.clone(),
            needed: cost,
            available: resources.mana,
        });
    }
    Ok(())
}

/// Use an ability against a target
pub fn perform_ability(
    ability: &mut Ability,
    resources: &mut TurnResources,
    target: &impl DamageTarget,
) -> Result<AbilityUse, ActionError> {
    let mut rng = rand::thread_rng();
    perform_ability_with_rng(ability, resources, target, &mut rng)
}

/// Use an ability with a provided RNG (for deterministic testing)
///
/// Spends one action point and the mana cost, rolls damage if the ability
/// has a damage expression, then starts its cooldown. Nothing is spent when
/// validation fails.
pub fn perform_ability_with_rng(
    ability: &mut Ability,
    resources: &mut TurnResources,
    target: &impl DamageTarget,
    rng: &mut impl Rng,
) -> Result<AbilityUse, ActionError> {
    check_ability(ability, resources)?;

    let mana_spent = ability.mana_cost.unwrap_or(0);
    resources.action_points -= 1;
    resources.mana -= i32::try_from(mana_spent).unwrap_or(i32::MAX);

    let damage = ability
        .damage
        .as_deref()
        .map(|expr| calculate_damage_with_resistance_with_rng(expr, target, Some(ability), rng));

    ability.trigger_cooldown();

    if let Some(info) = &damage {
        tracing::debug!(ability = %ability.id, breakdown = %info.breakdown(), "ability used");
    } else {
        tracing::debug!(ability = %ability.id, "ability used");
    }

    Ok(AbilityUse {
        ability_id: ability.id.clone(),
        mana_spent,
        damage,
        cooldown: ability.current_cooldown,
    })
}
