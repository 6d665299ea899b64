//! Skill rank scaling applied to catalog abilities
//!
//! Scaling always starts from the unscaled base values, so rescaling an
//! already scaled ability (up or down) gives the same result as scaling the
//! catalog entry. For every level above 1:
//! - damage: the scaling dice are appended, "2d6 + 3" at level 3 with +1d4 becomes "2d6 + 3 + 2d4"
//! - mana: reduced by `mana_reduction_per_level`, floored at 0
//! - cooldown: reduced by `cooldown_reduction_per_level`, floored at 1
//! - effects: every level effect with `level <= skill_level` follows the base effects

use super::Ability;

/// Return a copy of `ability` scaled to `skill_level`
///
/// Levels above `max_level` are clamped. Abilities without a scaling block,
/// or levels of 1 and below, get their base values back and their `level` set.
pub fn apply_skill_scaling(ability: &Ability, skill_level: u32) -> Ability {
    let level = match ability.max_level {
        Some(max) if max > 0 => skill_level.min(max),
        _ => skill_level,
    };

    let mut scaled = ability.clone();
    scaled.record_base_values();
    scaled.level = level;
    scaled.damage = scaled.base_damage.clone();
    scaled.mana_cost = scaled.base_mana_cost;
    scaled.cooldown_max = scaled.base_cooldown_turns();
    scaled.effects = scaled.base_effect_lines().to_vec();

    let scaling = match &ability.scaling {
        Some(scaling) if level > 1 => scaling,
        _ => return scaled,
    };
    let extra_levels = level - 1;

    if let Some(dice) = scaling.damage_dice {
        if let Some(base) = scaled.base_damage.as_deref() {
            scaled.damage = Some(format!("{} + {}", base, dice.term_for(extra_levels)));
        }
    }

    if scaling.mana_reduction_per_level > 0 {
        if let Some(base) = scaled.base_mana_cost {
            let reduction = scaling.mana_reduction_per_level.saturating_mul(extra_levels);
            scaled.mana_cost = Some(base.saturating_sub(reduction));
        }
    }

    if scaling.cooldown_reduction_per_level > 0 {
        let base = scaled.base_cooldown_turns();
        if base > 0 {
            let reduction = scaling.cooldown_reduction_per_level.saturating_mul(extra_levels);
            scaled.cooldown_max = base.saturating_sub(reduction).max(1);
        }
    }

    scaled.effects.extend(
        scaling
            .effects
            .iter()
            .filter(|effect| effect.level <= level)
            .map(|effect| effect.text.clone()),
    );

    scaled
}
