//! Playing cards

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tables::{RANK_NAMES, RANKS, SUIT_SYMBOLS, SUITS};
use crate::{table_index, Result, SeedOptions};

pub const DECK_SIZE: usize = SUITS.len() * RANKS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn name(self) -> &'static str {
        SUITS[self as usize]
    }

    pub fn symbol(self) -> char {
        SUIT_SYMBOLS[self as usize]
    }
}

/// A card of the standard 52-card deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    /// 1 (ace) to 13 (king)
    pub rank: u8,
}

impl Card {
    /// Card at `index` in deck order (suit-major, ace low)
    pub fn from_deck_index(index: usize) -> Self {
        let index = index % DECK_SIZE;
        Self {
            suit: Suit::ALL[index / RANKS.len()],
            rank: (index % RANKS.len()) as u8 + 1,
        }
    }

    /// Long form, e.g. "Ace of Hearts"
    pub fn name(&self) -> String {
        format!("{} of {}", RANK_NAMES[self.rank as usize - 1], self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", RANKS[self.rank as usize - 1], self.suit.symbol())
    }
}

/// Card drawn by digit sum
pub fn card(opts: &SeedOptions) -> Result<Card> {
    let seed = opts.seed()?;
    Ok(Card::from_deck_index(table_index(seed, DECK_SIZE)))
}
