//! Dice - damage expression parsing and rolling
//!
//! Rolling is the only source of randomness in the crate. Every public
//! rolling function has a `_with_rng` variant for deterministic testing.

mod expression;

pub use expression::{DamageExpression, DamageTerm, DiceParseError, MAX_DICE_COUNT, MAX_DIE_SIDES};

use rand::Rng;

/// Roll a damage expression using the thread RNG
///
/// Plain integers are returned verbatim, dice notation is rolled and
/// anything unparseable yields 0.
pub fn roll_damage(expr: &str) -> i32 {
    let mut rng = rand::thread_rng();
    roll_damage_with_rng(expr, &mut rng)
}

/// Roll a damage expression with a provided RNG (for deterministic testing)
pub fn roll_damage_with_rng(expr: &str, rng: &mut impl Rng) -> i32 {
    if let Ok(value) = expr.trim().parse::<i32>() {
        return value;
    }

    match DamageExpression::parse(expr) {
        Ok(parsed) => parsed.roll(rng),
        Err(err) => {
            tracing::debug!(expr, %err, "unparseable damage expression, rolling 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_plain_integer_passthrough() {
        assert_eq!(roll_damage("15"), 15);
        assert_eq!(roll_damage(" 7 "), 7);
        assert_eq!(roll_damage("-3"), -3);
    }

    #[test]
    fn test_bogus_rolls_zero() {
        assert_eq!(roll_damage("bogus"), 0);
        assert_eq!(roll_damage(""), 0);
        assert_eq!(roll_damage("2d"), 0);
    }

    #[test]
    fn test_dice_bounds_thread_rng() {
        for _ in 0..200 {
            let roll = roll_damage("2d6+3");
            assert!((5..=15).contains(&roll), "roll {} out of range", roll);
        }
    }

    #[test]
    fn test_single_sided_die_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(roll_damage_with_rng("3d1+2", &mut rng), 5);
    }

    proptest! {
        #[test]
        fn prop_roll_within_bounds(count in 1u32..20, sides in 1u32..30, bonus in 0i32..50, seed in any::<u64>()) {
            let expr = format!("{}d{}+{}", count, sides, bonus);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let roll = roll_damage_with_rng(&expr, &mut rng);
            prop_assert!(roll >= count as i32 + bonus);
            prop_assert!(roll <= (count * sides) as i32 + bonus);
        }
    }
}
