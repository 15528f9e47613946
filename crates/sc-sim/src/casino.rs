//! Bingo calls and roulette spins

use std::fmt;

use sc_core::select_in_range;
use serde::{Deserialize, Serialize};

use crate::tables::{BINGO_LETTERS, BINGO_MAX, ROULETTE_MAX, ROULETTE_RED};
use crate::{Result, SeedOptions};

const BINGO_COLUMN: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoCall {
    pub letter: char,
    pub number: u8,
}

impl fmt::Display for BingoCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.letter, self.number)
    }
}

pub fn bingo(opts: &SeedOptions) -> Result<BingoCall> {
    let number = select_in_range(opts.seed()?, 1, BINGO_MAX)? as u8;
    let letter = BINGO_LETTERS[usize::from((number - 1) / BINGO_COLUMN)];
    Ok(BingoCall { letter, number })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PocketColor {
    Green,
    Red,
    Black,
}

impl fmt::Display for PocketColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PocketColor::Green => "green",
            PocketColor::Red => "red",
            PocketColor::Black => "black",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouletteSpin {
    pub pocket: u8,
    pub color: PocketColor,
}

impl fmt::Display for RouletteSpin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pocket, self.color)
    }
}

/// Single-zero wheel
pub fn roulette(opts: &SeedOptions) -> Result<RouletteSpin> {
    let pocket = select_in_range(opts.seed()?, 0, ROULETTE_MAX)? as u8;
    let color = if pocket == 0 {
        PocketColor::Green
    } else if ROULETTE_RED.contains(&pocket) {
        PocketColor::Red
    } else {
        PocketColor::Black
    };
    Ok(RouletteSpin { pocket, color })
}
