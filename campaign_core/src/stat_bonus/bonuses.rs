//! StatBonuses - the ten stat buckets skill effects can feed

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A recognized stat bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    AttackDamage,
    Health,
    Mana,
    Armor,
    MagicResist,
    ManaRegen,
    CritChance,
    CritDamage,
    AttackSpeed,
    MovementSpeed,
}

impl StatKind {
    pub const ALL: [StatKind; 10] = [
        StatKind::AttackDamage,
        StatKind::Health,
        StatKind::Mana,
        StatKind::Armor,
        StatKind::MagicResist,
        StatKind::ManaRegen,
        StatKind::CritChance,
        StatKind::CritDamage,
        StatKind::AttackSpeed,
        StatKind::MovementSpeed,
    ];

    /// Normalize a stat name from effect data, case-insensitive
    ///
    /// Returns `None` for names outside the alias table.
    pub fn from_alias(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        let kind = match normalized.as_str() {
            "attack_damage" | "attack" | "damage" | "ad" => StatKind::AttackDamage,
            "health" | "hp" | "max_health" | "life" | "max_hp" => StatKind::Health,
            "mana" | "mp" | "max_mana" => StatKind::Mana,
            "armor" | "armour" | "defense" => StatKind::Armor,
            "magic_resist" | "magic_resistance" | "mr" => StatKind::MagicResist,
            "mana_regen" | "mana_regeneration" => StatKind::ManaRegen,
            "crit_chance" | "critical_chance" | "crit" => StatKind::CritChance,
            "crit_damage" | "critical_damage" => StatKind::CritDamage,
            "attack_speed" => StatKind::AttackSpeed,
            "movement_speed" | "move_speed" | "speed" => StatKind::MovementSpeed,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::AttackDamage => "attack_damage",
            StatKind::Health => "health",
            StatKind::Mana => "mana",
            StatKind::Armor => "armor",
            StatKind::MagicResist => "magic_resist",
            StatKind::ManaRegen => "mana_regen",
            StatKind::CritChance => "crit_chance",
            StatKind::CritDamage => "crit_damage",
            StatKind::AttackSpeed => "attack_speed",
            StatKind::MovementSpeed => "movement_speed",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat bonuses to add onto a character's base resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonuses {
    pub attack_damage: i32,
    pub health: i32,
    pub mana: i32,
    pub armor: i32,
    pub magic_resist: i32,
    pub mana_regen: i32,
    pub crit_chance: i32,
    pub crit_damage: i32,
    pub attack_speed: i32,
    pub movement_speed: i32,
}

impl StatBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::AttackDamage => self.attack_damage,
            StatKind::Health => self.health,
            StatKind::Mana => self.mana,
            StatKind::Armor => self.armor,
            StatKind::MagicResist => self.magic_resist,
            StatKind::ManaRegen => self.mana_regen,
            StatKind::CritChance => self.crit_chance,
            StatKind::CritDamage => self.crit_damage,
            StatKind::AttackSpeed => self.attack_speed,
            StatKind::MovementSpeed => self.movement_speed,
        }
    }

    fn slot(&mut self, kind: StatKind) -> &mut i32 {
        match kind {
            StatKind::AttackDamage => &mut self.attack_damage,
            StatKind::Health => &mut self.health,
            StatKind::Mana => &mut self.mana,
            StatKind::Armor => &mut self.armor,
            StatKind::MagicResist => &mut self.magic_resist,
            StatKind::ManaRegen => &mut self.mana_regen,
            StatKind::CritChance => &mut self.crit_chance,
            StatKind::CritDamage => &mut self.crit_damage,
            StatKind::AttackSpeed => &mut self.attack_speed,
            StatKind::MovementSpeed => &mut self.movement_speed,
        }
    }

    pub fn add(&mut self, kind: StatKind, amount: i32) {
        let slot = self.slot(kind);
        *slot = slot.saturating_add(amount);
    }

    /// Whether every bucket is zero
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Every bucket keyed by its stat name, zeros included
    pub fn to_map(&self) -> BTreeMap<&'static str, i32> {
        StatKind::ALL
            .iter()
            .map(|kind| (kind.as_str(), self.get(*kind)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(StatKind::from_alias("hp"), Some(StatKind::Health));
        assert_eq!(StatKind::from_alias("Max Health"), Some(StatKind::Health));
        assert_eq!(StatKind::from_alias("damage"), Some(StatKind::AttackDamage));
        assert_eq!(StatKind::from_alias("ATTACK"), Some(StatKind::AttackDamage));
        assert_eq!(StatKind::from_alias("magic-resist"), Some(StatKind::MagicResist));
        assert_eq!(StatKind::from_alias("luck"), None);
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for kind in StatKind::ALL {
            assert_eq!(StatKind::from_alias(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_to_map_has_all_keys() {
        let mut bonuses = StatBonuses::new();
        bonuses.add(StatKind::Armor, 7);
        let map = bonuses.to_map();
        assert_eq!(map.len(), 10);
        assert_eq!(map["armor"], 7);
        assert_eq!(map["movement_speed"], 0);
    }

    #[test]
    fn test_add_accumulates() {
        let mut bonuses = StatBonuses::new();
        assert!(bonuses.is_empty());
        bonuses.add(StatKind::Health, 10);
        bonuses.add(StatKind::Health, 5);
        assert_eq!(bonuses.get(StatKind::Health), 15);
        assert!(!bonuses.is_empty());
    }
}
