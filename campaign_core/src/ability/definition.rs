//! Ability - A catalog-defined combat action and its per-rank scaling

use crate::types::AbilityCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named action a character can take in combat
///
/// Catalog entries are unscaled (level 1). Per-character instances are
/// cloned from the catalog, scaled by skill rank and carry their own
/// `current_cooldown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// Stable catalog key
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: AbilityCategory,

    // === Combat parameters ===
    /// Damage expression ("2d6 + 3" or "15")
    #[serde(default)]
    pub damage: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<u32>,
    /// Cooldown in turns
    #[serde(default)]
    pub cooldown_max: u32,
    /// Turns until usable again
    #[serde(default)]
    pub current_cooldown: u32,
    /// Human-readable effect lines
    #[serde(default)]
    pub effects: Vec<String>,

    // === Scaling metadata ===
    /// Unscaled damage; falls back to `damage`
    #[serde(default)]
    pub base_damage: Option<String>,
    /// Unscaled mana cost; falls back to `mana_cost`
    #[serde(default)]
    pub base_mana_cost: Option<u32>,
    /// Unscaled cooldown; falls back to `cooldown_max`
    #[serde(default)]
    pub base_cooldown: Option<u32>,
    /// Unscaled effect lines; falls back to `effects`
    #[serde(default)]
    pub base_effects: Option<Vec<String>>,
    #[serde(default)]
    pub max_level: Option<u32>,
    #[serde(default)]
    pub scaling: Option<AbilityScaling>,

    /// Level this instance was scaled to
    #[serde(default = "default_level")]
    pub level: u32,
}

fn default_level() -> u32 {
    1
}

impl Ability {
    /// Create a bare ability with no damage, cost or cooldown
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: AbilityCategory) -> Self {
        Ability {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            damage: None,
            mana_cost: None,
            cooldown_max: 0,
            current_cooldown: 0,
            effects: Vec::new(),
            base_damage: None,
            base_mana_cost: None,
            base_cooldown: None,
            base_effects: None,
            max_level: None,
            scaling: None,
            level: 1,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_damage(mut self, damage: impl Into<String>) -> Self {
        self.damage = Some(damage.into());
        self
    }

    pub fn with_mana_cost(mut self, mana_cost: u32) -> Self {
        self.mana_cost = Some(mana_cost);
        self
    }

    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown_max = cooldown;
        self
    }

    pub fn with_scaling(mut self, scaling: AbilityScaling) -> Self {
        self.scaling = Some(scaling);
        self
    }

    /// Damage expression scaling starts from
    pub fn base_damage_expr(&self) -> Option<&str> {
        self.base_damage.as_deref().or(self.damage.as_deref())
    }

    /// Mana cost scaling starts from
    pub fn base_mana(&self) -> Option<u32> {
        self.base_mana_cost.or(self.mana_cost)
    }

    /// Cooldown scaling starts from
    pub fn base_cooldown_turns(&self) -> u32 {
        self.base_cooldown.unwrap_or(self.cooldown_max)
    }

    /// Effect lines scaling starts from
    pub fn base_effect_lines(&self) -> &[String] {
        self.base_effects.as_deref().unwrap_or(&self.effects)
    }

    /// Freeze the current combat parameters as the unscaled baseline
    pub(crate) fn record_base_values(&mut self) {
        if self.base_damage.is_none() {
            self.base_damage = self.damage.clone();
        }
        if self.base_mana_cost.is_none() {
            self.base_mana_cost = self.mana_cost;
        }
        if self.base_cooldown.is_none() {
            self.base_cooldown = Some(self.cooldown_max);
        }
        if self.base_effects.is_none() {
            self.base_effects = Some(self.effects.clone());
        }
    }

    /// Whether the ability is off cooldown
    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    /// Start the cooldown after use
    pub fn trigger_cooldown(&mut self) {
        self.current_cooldown = self.cooldown_max;
    }

    /// Count the cooldown down by one turn
    pub fn tick_cooldown(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }
}

/// How an ability changes per skill rank above 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScaling {
    /// Dice appended per level above 1
    #[serde(default)]
    pub damage_dice: Option<DiceIncrement>,
    /// Mana cost reduction per level above 1 (floored at 0)
    #[serde(default)]
    pub mana_reduction_per_level: u32,
    /// Cooldown reduction per level above 1 (floored at 1)
    #[serde(default)]
    pub cooldown_reduction_per_level: u32,
    /// Effects that unlock at a given level
    #[serde(default)]
    pub effects: Vec<LevelEffect>,
}

/// Extra dice added to the damage expression for each level above 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceIncrement {
    pub count: u32,
    pub sides: u32,
}

impl DiceIncrement {
    pub fn new(count: u32, sides: u32) -> Self {
        DiceIncrement { count, sides }
    }

    /// The dice term for `levels` increments, e.g. "2d4"
    pub fn term_for(&self, levels: u32) -> String {
        format!("{}d{}", self.count.saturating_mul(levels), self.sides)
    }
}

impl fmt::Display for DiceIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}d{}", self.count, self.sides)
    }
}

/// An effect line that becomes active at `level`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEffect {
    pub level: u32,
    pub text: String,
}

impl LevelEffect {
    pub fn new(level: u32, text: impl Into<String>) -> Self {
        LevelEffect {
            level,
            text: text.into(),
        }
    }
}

impl fmt::Display for LevelEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}: {}", self.level, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_values_fall_back_to_current() {
        let ability = Ability::new("fireball", "Fireball", AbilityCategory::Skill)
            .with_damage("3d6")
            .with_mana_cost(15)
            .with_cooldown(2);
        assert_eq!(ability.base_damage_expr(), Some("3d6"));
        assert_eq!(ability.base_mana(), Some(15));
        assert_eq!(ability.base_cooldown_turns(), 2);
    }

    #[test]
    fn test_record_base_values_keeps_existing() {
        let mut ability = Ability::new("x", "X", AbilityCategory::Basic).with_damage("1d6");
        ability.base_damage = Some("1d4".to_string());
        ability.record_base_values();
        assert_eq!(ability.base_damage.as_deref(), Some("1d4"));
        assert_eq!(ability.base_cooldown, Some(0));
        assert_eq!(ability.base_effects, Some(Vec::new()));
    }

    #[test]
    fn test_base_effect_lines() {
        let mut ability = Ability::new("x", "X", AbilityCategory::Basic);
        ability.effects = vec!["Burns".to_string()];
        assert_eq!(ability.base_effect_lines().to_vec(), vec!["Burns".to_string()]);

        ability.record_base_values();
        ability.effects.push("Stuns".to_string());
        assert_eq!(ability.base_effect_lines().to_vec(), vec!["Burns".to_string()]);
    }

    #[test]
    fn test_cooldown_cycle() {
        let mut ability = Ability::new("bash", "Shield Bash", AbilityCategory::Basic).with_cooldown(2);
        assert!(ability.is_ready());
        ability.trigger_cooldown();
        assert!(!ability.is_ready());
        ability.tick_cooldown();
        ability.tick_cooldown();
        ability.tick_cooldown();
        assert_eq!(ability.current_cooldown, 0);
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(DiceIncrement::new(1, 4).to_string(), "+1d4");
        assert_eq!(DiceIncrement::new(2, 6).term_for(2), "4d6");
        assert_eq!(LevelEffect::new(3, "Stuns").to_string(), "Level 3: Stuns");
    }
}
