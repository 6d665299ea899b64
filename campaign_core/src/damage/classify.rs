//! Physical vs magical classification
//!
//! The catalog has no explicit damage type field. An ability counts as
//! magical when its category is skill or ultimate, or when its name or
//! description mentions one of [`MAGIC_KEYWORDS`].

use crate::ability::Ability;
use crate::types::{AbilityCategory, DamageType};

/// Substrings that mark an ability as magical (matched case-insensitively)
pub const MAGIC_KEYWORDS: &[&str] = &[
    "fire", "ice", "lightning", "frost", "burn", "freeze", "shock", "magic", "spell", "arcane",
    "divine", "holy", "dark", "shadow", "energy", "force", "psychic", "mental", "spiritual",
    "elemental", "bolt", "blast", "wave", "beam", "orb", "missile",
];

/// Whether an ability deals magical damage
pub fn is_magical_damage(ability: &Ability) -> bool {
    if matches!(ability.category, AbilityCategory::Skill | AbilityCategory::Ultimate) {
        return true;
    }

    let name = ability.name.to_lowercase();
    let description = ability.description.to_lowercase();
    MAGIC_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword) || description.contains(keyword))
}

/// Damage type for an optional ability context (no ability means physical)
pub fn damage_type_of(ability: Option<&Ability>) -> DamageType {
    match ability {
        Some(ability) if is_magical_damage(ability) => DamageType::Magical,
        _ => DamageType::Physical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_without_keywords_is_physical() {
        let slash = Ability::new("slash", "Slash", AbilityCategory::Basic);
        assert!(!is_magical_damage(&slash));
    }

    #[test]
    fn test_keyword_overrides_basic_category() {
        let slash = Ability::new("fire_slash", "Fireball Slash", AbilityCategory::Basic);
        assert!(is_magical_damage(&slash));
    }

    #[test]
    fn test_keyword_in_description_case_insensitive() {
        let strike = Ability::new("strike", "Strike", AbilityCategory::Basic)
            .with_description("Channels HOLY light through the blade");
        assert!(is_magical_damage(&strike));
    }

    #[test]
    fn test_skill_and_ultimate_always_magical() {
        assert!(is_magical_damage(&Ability::new("a", "Whirlwind", AbilityCategory::Skill)));
        assert!(is_magical_damage(&Ability::new("b", "Rage", AbilityCategory::Ultimate)));
    }

    #[test]
    fn test_damage_type_of() {
        let slash = Ability::new("slash", "Slash", AbilityCategory::Basic);
        assert_eq!(damage_type_of(None), DamageType::Physical);
        assert_eq!(damage_type_of(Some(&slash)), DamageType::Physical);
        let bolt = Ability::new("bolt", "Bolt", AbilityCategory::Basic);
        assert_eq!(damage_type_of(Some(&bolt)), DamageType::Magical);
    }
}
