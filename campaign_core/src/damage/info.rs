//! DamageInfo - breakdown of a single resolved hit

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// Outcome of resolving one hit against a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageInfo {
    /// Rolled damage before mitigation
    pub base_damage: i32,
    /// Damage actually dealt
    pub final_damage: i32,
    /// Damage removed by the target's resistance
    pub damage_reduced: i32,
    pub damage_type: DamageType,
    /// Resistance value that was applied
    pub resistance_used: i32,
    /// Fraction removed, in [0, 0.9]
    pub reduction: f64,
}

impl DamageInfo {
    /// Reduction as a whole-number percentage
    pub fn reduction_percent(&self) -> f64 {
        self.reduction * 100.0
    }

    /// Render a breakdown line, e.g. "12 physical damage (15 - 3 blocked by 40 armor)"
    pub fn breakdown(&self) -> String {
        if self.damage_reduced == 0 {
            format!("{} {} damage", self.final_damage, self.damage_type)
        } else {
            format!(
                "{} {} damage ({} - {} blocked by {} {})",
                self.final_damage,
                self.damage_type,
                self.base_damage,
                self.damage_reduced,
                self.resistance_used,
                self.damage_type.resistance_name()
            )
        }
    }
}
