//! Summing stat bonus effects across unlocked skills

use super::{StatBonuses, StatKind};
use crate::repository::{SkillRepository, SkillStatEffects};
use crate::skill_tree::SkillEffect;

/// Sum every `stat_bonus` effect, each multiplied by its skill's rank
///
/// Totals are accumulated per bucket and rounded once. Unrecognized stat
/// names are ignored.
pub fn sum_stat_bonuses(skills: &[SkillStatEffects]) -> StatBonuses {
    let mut totals = [0.0_f64; StatKind::ALL.len()];

    for skill in skills {
        for effect in &skill.effects {
            let SkillEffect::StatBonus { target, value } = effect else {
                continue;
            };
            match StatKind::from_alias(target) {
                Some(kind) => totals[kind as usize] += value * skill.rank as f64,
                None => {
                    tracing::trace!(skill = %skill.skill_id, stat = %target, "ignoring unknown stat");
                }
            }
        }
    }

    let mut bonuses = StatBonuses::new();
    for (kind, total) in StatKind::ALL.iter().zip(totals) {
        bonuses.add(*kind, total.round() as i32);
    }
    bonuses
}

/// Stat bonuses from every skill a character has unlocked
///
/// A failed lookup yields all-zero bonuses.
pub fn get_stat_bonuses_from_skills(repo: &impl SkillRepository, character_id: &str) -> StatBonuses {
    match repo.fetch_skill_stat_effects(character_id) {
        Ok(skills) => {
            let bonuses = sum_stat_bonuses(&skills);
            tracing::debug!(character = character_id, skills = skills.len(), ?bonuses, "aggregated skill stat bonuses");
            bonuses
        }
        Err(err) => {
            tracing::warn!(character = character_id, %err, "skill stat lookup failed, using zero bonuses");
            StatBonuses::default()
        }
    }
}
