//! Dice, coins and booleans

use std::fmt;
use std::str::FromStr;

use sc_core::digits::last_digit;
use sc_core::{select_in_range, sub_seed};
use serde::{Deserialize, Serialize};

use crate::{table_index, Result, SeedOptions, SimError};

pub const DEFAULT_SIDES: u32 = 6;

/// Upper bound on dice in one expression
pub const MAX_DICE: u32 = 1000;

/// Single die with `sides` faces, `1..=sides`
pub fn roll(sides: u32, opts: &SeedOptions) -> Result<u32> {
    if sides == 0 {
        return Err(SimError::ZeroSides);
    }
    let seed = opts.seed()?;
    Ok(select_in_range(seed, 1, i64::from(sides))? as u32)
}

/// Parsed dice expression such as `3d8+2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSpec {
    pub count: u32,
    pub sides: u32,
    pub modifier: i64,
}

impl FromStr for DiceSpec {
    type Err = SimError;

    /// Accepts `NdS`, `dS`, `NdS+M` and `NdS-M`; whitespace is ignored and
    /// `d` may be upper case.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SimError::InvalidDiceNotation(s.to_string());
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        let (count, rest) = compact.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };
        if count == 0 || count > MAX_DICE {
            return Err(invalid());
        }

        let (sides, modifier) = match rest.find(['+', '-']) {
            Some(at) => {
                let (sides, tail) = rest.split_at(at);
                // exactly one sign, then digits only
                let magnitude = &tail[1..];
                if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let modifier = tail
                    .strip_prefix('+')
                    .unwrap_or(tail)
                    .parse::<i64>()
                    .map_err(|_| invalid())?;
                (sides, modifier)
            }
            None => (rest, 0),
        };
        let sides = sides.parse::<u32>().map_err(|_| invalid())?;
        if sides == 0 {
            return Err(SimError::ZeroSides);
        }

        log::debug!("parsed dice {:?} as {}d{}{:+}", s, count, sides, modifier);
        Ok(Self { count, sides, modifier })
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

/// Outcome of a dice expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub spec: DiceSpec,
    pub rolls: Vec<u32>,
    pub total: i64,
}

/// Roll a parsed expression; die `i` uses the batch sub-seed for `i`
pub fn roll_spec(spec: DiceSpec, opts: &SeedOptions) -> Result<DiceRoll> {
    if spec.sides == 0 {
        return Err(SimError::ZeroSides);
    }
    let seed = opts.seed()?;
    let rolls = (0..u64::from(spec.count))
        .map(|i| {
            select_in_range(sub_seed(seed, i), 1, i64::from(spec.sides))
                .map(|v| v as u32)
                .map_err(SimError::from)
        })
        .collect::<Result<Vec<_>>>()?;
    // at most MAX_DICE * u32::MAX, so only the modifier can overflow
    let total = rolls
        .iter()
        .map(|&r| i64::from(r))
        .sum::<i64>()
        .checked_add(spec.modifier)
        .ok_or_else(|| SimError::InvalidDiceNotation(spec.to_string()))?;
    Ok(DiceRoll { spec, rolls, total })
}

/// Parse and roll dice notation such as `2d6+3`
pub fn dice(notation: &str, opts: &SeedOptions) -> Result<DiceRoll> {
    roll_spec(notation.parse()?, opts)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coin {
    Heads,
    Tails,
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Coin::Heads => "heads",
            Coin::Tails => "tails",
        };
        write!(f, "{}", s)
    }
}

const COIN_FACES: [Coin; 2] = [Coin::Heads, Coin::Tails];

pub fn coin(opts: &SeedOptions) -> Result<Coin> {
    let seed = opts.seed()?;
    Ok(COIN_FACES[table_index(seed, COIN_FACES.len())])
}

/// True when the seed's last digit is even
pub fn boolean(opts: &SeedOptions) -> Result<bool> {
    Ok(last_digit(opts.seed()?) % 2 == 0)
}
