//! DamageTarget - Anything that can be hit by an ability or an enemy attack

use serde::{Deserialize, Serialize};

/// Exposes the resistance values damage resolution needs
pub trait DamageTarget {
    /// Resistance against physical damage (armor)
    fn physical_resistance(&self) -> i32;

    /// Resistance against magical damage (magic resist)
    fn magical_resistance(&self) -> i32;
}

/// Defensive columns of a combatant row as fetched from the data store
///
/// Player characters carry `armor_current`, enemies carry `defense`.
/// Physical resolution prefers `armor_current` and falls back to `defense`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantDefenses {
    #[serde(default)]
    pub armor_current: Option<i32>,
    #[serde(default)]
    pub defense: Option<i32>,
    #[serde(default)]
    pub magic_resist_current: Option<i32>,
}

impl CombatantDefenses {
    pub fn with_defense(defense: i32, magic_resist: i32) -> Self {
        CombatantDefenses {
            armor_current: None,
            defense: Some(defense),
            magic_resist_current: Some(magic_resist),
        }
    }
}

impl DamageTarget for CombatantDefenses {
    fn physical_resistance(&self) -> i32 {
        self.armor_current.or(self.defense).unwrap_or(0)
    }

    fn magical_resistance(&self) -> i32 {
        self.magic_resist_current.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armor_preferred_over_defense() {
        let target = CombatantDefenses {
            armor_current: Some(30),
            defense: Some(80),
            magic_resist_current: None,
        };
        assert_eq!(target.physical_resistance(), 30);
        assert_eq!(target.magical_resistance(), 0);
    }

    #[test]
    fn test_defense_fallback() {
        let target = CombatantDefenses::with_defense(45, 10);
        assert_eq!(target.physical_resistance(), 45);
        assert_eq!(target.magical_resistance(), 10);
    }

    #[test]
    fn test_deserialize_enemy_row() {
        let target: CombatantDefenses = serde_json::from_str(r#"{"defense": 12}"#).unwrap();
        assert_eq!(target.physical_resistance(), 12);
    }
}
