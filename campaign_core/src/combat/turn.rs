//! Turn lifecycle - cooldown ticks, action point reset, mana regeneration

use crate::ability::Ability;
use crate::stat_bonus::CharacterResources;
use serde::{Deserialize, Serialize};

/// Copy of `abilities` with every cooldown reduced by one turn, floored at 0
pub fn reduce_cooldowns(abilities: &[Ability]) -> Vec<Ability> {
    abilities
        .iter()
        .map(|ability| {
            let mut ability = ability.clone();
            ability.tick_cooldown();
            ability
        })
        .collect()
}

/// The per-turn budget of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResources {
    pub action_points: u32,
    pub max_action_points: u32,
    pub mana: i32,
    pub max_mana: i32,
    pub mana_regen: i32,
}

impl TurnResources {
    pub fn from_character(character: &CharacterResources) -> Self {
        TurnResources {
            action_points: character.action_points,
            max_action_points: character.max_action_points,
            mana: character.mana_current,
            max_mana: character.mana_max,
            mana_regen: character.mana_regen,
        }
    }

    /// Reset action points and regenerate mana up to its maximum
    ///
    /// Returns the mana actually regenerated.
    pub fn start_turn(&mut self) -> i32 {
        self.action_points = self.max_action_points;
        let before = self.mana;
        if self.mana < self.max_mana {
            self.mana = self
                .mana
                .saturating_add(self.mana_regen.max(0))
                .min(self.max_mana);
        }
        self.mana - before
    }

    pub fn has_action_points(&self) -> bool {
        self.action_points > 0
    }

    /// Write the turn budget back onto a character
    pub fn apply_to(&self, character: &mut CharacterResources) {
        character.action_points = self.action_points;
        character.mana_current = self.mana;
    }
}

/// Advance one turn: tick every cooldown and refresh the turn budget
pub fn advance_turn(abilities: &mut [Ability], resources: &mut TurnResources) {
    abilities.iter_mut().for_each(Ability::tick_cooldown);
    let regenerated = resources.start_turn();
    tracing::debug!(
        action_points = resources.action_points,
        mana = resources.mana,
        regenerated,
        "turn started"
    );
}
