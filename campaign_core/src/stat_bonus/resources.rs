//! CharacterResources - a character's combat resources as stored in the data store

use super::StatBonuses;
use crate::defense::DamageTarget;
use serde::{Deserialize, Serialize};

/// Base resources of a player character
///
/// Skill bonuses are merged in with [`with_bonuses`](Self::with_bonuses)
/// before the values are shown or compared against ability costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterResources {
    // === Resources ===
    pub health_current: i32,
    pub health_max: i32,
    pub mana_current: i32,
    pub mana_max: i32,
    #[serde(default)]
    pub mana_regen: i32,

    // === Defenses ===
    #[serde(default)]
    pub armor_current: i32,
    #[serde(default)]
    pub magic_resist_current: i32,

    // === Offense ===
    #[serde(default)]
    pub attack_damage: i32,
    #[serde(default)]
    pub crit_chance: i32,
    #[serde(default)]
    pub crit_damage: i32,
    #[serde(default)]
    pub attack_speed: i32,
    #[serde(default)]
    pub movement_speed: i32,

    // === Turn economy ===
    #[serde(default = "default_action_points")]
    pub action_points: u32,
    #[serde(default = "default_action_points")]
    pub max_action_points: u32,
}

fn default_action_points() -> u32 {
    3
}

impl Default for CharacterResources {
    fn default() -> Self {
        CharacterResources {
            health_current: 100,
            health_max: 100,
            mana_current: 50,
            mana_max: 50,
            mana_regen: 5,
            armor_current: 0,
            magic_resist_current: 0,
            attack_damage: 10,
            crit_chance: 5,
            crit_damage: 150,
            attack_speed: 0,
            movement_speed: 0,
            action_points: default_action_points(),
            max_action_points: default_action_points(),
        }
    }
}

impl CharacterResources {
    /// Copy of these resources with flat bonuses added
    ///
    /// Health and mana bonuses raise both the maximum and the current value.
    pub fn with_bonuses(&self, bonuses: &StatBonuses) -> Self {
        CharacterResources {
            health_current: self.health_current.saturating_add(bonuses.health),
            health_max: self.health_max.saturating_add(bonuses.health),
            mana_current: self.mana_current.saturating_add(bonuses.mana),
            mana_max: self.mana_max.saturating_add(bonuses.mana),
            mana_regen: self.mana_regen.saturating_add(bonuses.mana_regen),
            armor_current: self.armor_current.saturating_add(bonuses.armor),
            magic_resist_current: self.magic_resist_current.saturating_add(bonuses.magic_resist),
            attack_damage: self.attack_damage.saturating_add(bonuses.attack_damage),
            crit_chance: self.crit_chance.saturating_add(bonuses.crit_chance),
            crit_damage: self.crit_damage.saturating_add(bonuses.crit_damage),
            attack_speed: self.attack_speed.saturating_add(bonuses.attack_speed),
            movement_speed: self.movement_speed.saturating_add(bonuses.movement_speed),
            ..self.clone()
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health_current > 0
    }

    /// Subtract damage from current health, floored at 0. Returns the health lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.health_current;
        self.health_current = (self.health_current - amount.max(0)).max(0);
        before - self.health_current
    }
}

impl DamageTarget for CharacterResources {
    fn physical_resistance(&self) -> i32 {
        self.armor_current
    }

    fn magical_resistance(&self) -> i32 {
        self.magic_resist_current
    }
}
