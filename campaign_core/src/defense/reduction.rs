//! Reduction - Diminishing returns curve for armor and magic resist
//!
//! Formula:
//! - capped = min(resistance, 500)
//! - reduction = capped / (capped + 100), clamped to [0, 0.9]
//!
//! 100 resistance halves incoming damage, 500 removes ~83.3%.

use super::constants::{MAX_REDUCTION, REDUCTION_CONSTANT, RESISTANCE_CAP};

/// Calculate the fraction of damage removed by a resistance value
///
/// # Returns
/// A fraction in `[0, 0.9]`. Negative resistance gives no reduction.
pub fn calculate_damage_reduction(resistance: f64) -> f64 {
    if resistance.is_nan() || resistance <= 0.0 {
        return 0.0;
    }

    let capped = resistance.min(RESISTANCE_CAP);
    let reduction = capped / (capped + REDUCTION_CONSTANT);

    reduction.min(MAX_REDUCTION)
}

/// Calculate the resistance needed to reach a target reduction fraction
///
/// Returns `None` when the target is not reachable under the resistance cap.
pub fn resistance_for_reduction(target_reduction: f64) -> Option<f64> {
    if target_reduction <= 0.0 {
        return Some(0.0);
    }
    if target_reduction >= 1.0 {
        return None;
    }

    // Solving: r = x / (x + C)  =>  x = r * C / (1 - r)
    let needed = target_reduction * REDUCTION_CONSTANT / (1.0 - target_reduction);
    if needed > RESISTANCE_CAP {
        None
    } else {
        Some(needed)
    }
}
