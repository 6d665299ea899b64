//! DamageExpression - parsed dice notation like "2d6+3" or "2d6 + 3 + 2d4"

use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Largest die count accepted in a single term
pub const MAX_DICE_COUNT: u32 = 1000;

/// Largest die size accepted in a single term
pub const MAX_DIE_SIDES: u32 = 1000;

/// Error when parsing a damage expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    #[error("Empty damage expression")]
    Empty,
    #[error("Invalid term in damage expression: '{0}'")]
    InvalidTerm(String),
    #[error("Dice count must be between 1 and 1000")]
    InvalidDiceCount,
    #[error("Die size must be between 1 and 1000")]
    InvalidDieSides,
}

/// One additive term of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageTerm {
    /// `count` dice of `sides` sides, negated when `negative`
    Dice { count: u32, sides: u32, negative: bool },
    /// A flat modifier
    Flat(i32),
}

impl DamageTerm {
    fn min(&self) -> i64 {
        match *self {
            DamageTerm::Dice { count, negative, sides } => {
                if negative {
                    -(i64::from(count) * i64::from(sides))
                } else {
                    i64::from(count)
                }
            }
            DamageTerm::Flat(value) => i64::from(value),
        }
    }

    fn max(&self) -> i64 {
        match *self {
            DamageTerm::Dice { count, sides, negative } => {
                if negative {
                    -i64::from(count)
                } else {
                    i64::from(count) * i64::from(sides)
                }
            }
            DamageTerm::Flat(value) => i64::from(value),
        }
    }
}

/// A sum of dice and flat terms
///
/// Supported formats:
/// - "15" - a plain integer
/// - "NdM" / "NdM+B" / "NdM-B"
/// - "dM" - one die of size M
/// - any `+`/`-` separated chain of the above, whitespace tolerant ("2d6 + 3 + 2d4")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageExpression {
    pub terms: Vec<DamageTerm>,
}

impl DamageExpression {
    /// Parse an expression string
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        if compact.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let mut terms = Vec::new();
        let mut negative = false;
        let mut start = 0;
        let bytes = compact.as_bytes();

        for i in 0..=bytes.len() {
            let at_sign = i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-');
            if i < bytes.len() && !at_sign {
                continue;
            }
            let token = &compact[start..i];
            if token.is_empty() {
                // Only a leading sign may produce an empty token
                if i != 0 {
                    return Err(DiceParseError::InvalidTerm(compact.clone()));
                }
            } else {
                terms.push(parse_term(token, negative)?);
            }
            if i < bytes.len() {
                negative = bytes[i] == b'-';
                start = i + 1;
            }
        }

        if terms.is_empty() {
            return Err(DiceParseError::InvalidTerm(compact));
        }

        Ok(DamageExpression { terms })
    }

    /// Roll every die and sum all terms
    pub fn roll(&self, rng: &mut impl Rng) -> i32 {
        let mut total: i64 = 0;
        for term in &self.terms {
            match *term {
                DamageTerm::Dice { count, sides, negative } => {
                    let mut subtotal: i64 = 0;
                    for _ in 0..count {
                        subtotal += rng.gen_range(1..=sides) as i64;
                    }
                    tracing::trace!(count, sides, subtotal, "rolled dice");
                    total += if negative { -subtotal } else { subtotal };
                }
                DamageTerm::Flat(value) => total += value as i64,
            }
        }
        clamp_to_i32(total)
    }

    /// Get the minimum possible roll
    pub fn min_roll(&self) -> i32 {
        clamp_to_i32(self.terms.iter().map(DamageTerm::min).sum())
    }

    /// Get the maximum possible roll
    pub fn max_roll(&self) -> i32 {
        clamp_to_i32(self.terms.iter().map(DamageTerm::max).sum())
    }

    /// Whether the expression contains no dice
    pub fn is_flat(&self) -> bool {
        self.terms.iter().all(|t| matches!(t, DamageTerm::Flat(_)))
    }
}

fn clamp_to_i32(total: i64) -> i32 {
    total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn parse_term(token: &str, negative: bool) -> Result<DamageTerm, DiceParseError> {
    if let Some(d_pos) = token.find('d') {
        let count_str = &token[..d_pos];
        let sides_str = &token[d_pos + 1..];

        let count: u32 = if count_str.is_empty() {
            1
        } else {
            count_str
                .parse()
                .map_err(|_| DiceParseError::InvalidTerm(token.to_string()))?
        };
        let sides: u32 = sides_str
            .parse()
            .map_err(|_| DiceParseError::InvalidTerm(token.to_string()))?;

        if count == 0 || count > MAX_DICE_COUNT {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if sides == 0 || sides > MAX_DIE_SIDES {
            return Err(DiceParseError::InvalidDieSides);
        }

        Ok(DamageTerm::Dice { count, sides, negative })
    } else {
        let value: i32 = token
            .parse()
            .map_err(|_| DiceParseError::InvalidTerm(token.to_string()))?;
        Ok(DamageTerm::Flat(if negative { -value } else { value }))
    }
}

impl fmt::Display for DamageExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let (negative, body) = match *term {
                DamageTerm::Dice { count, sides, negative } => (negative, format!("{}d{}", count, sides)),
                DamageTerm::Flat(value) => (value < 0, value.unsigned_abs().to_string()),
            };
            match (i, negative) {
                (0, true) => write!(f, "-{}", body)?,
                (0, false) => write!(f, "{}", body)?,
                (_, true) => write!(f, " - {}", body)?,
                (_, false) => write!(f, " + {}", body)?,
            }
        }
        Ok(())
    }
}
