//! Table picks: tarot, zodiac, fortunes, magic 8-ball, free choice

use crate::tables::{FORTUNES, MAGIC_EIGHT_BALL, TAROT_MAJOR, ZODIAC_SIGNS};
use crate::{pick, Result, SeedOptions};

pub fn tarot(opts: &SeedOptions) -> Result<&'static str> {
    pick(&TAROT_MAJOR, opts).copied()
}

pub fn zodiac(opts: &SeedOptions) -> Result<&'static str> {
    pick(&ZODIAC_SIGNS, opts).copied()
}

pub fn fortune(opts: &SeedOptions) -> Result<&'static str> {
    pick(&FORTUNES, opts).copied()
}

pub fn magic_eight_ball(opts: &SeedOptions) -> Result<&'static str> {
    pick(&MAGIC_EIGHT_BALL, opts).copied()
}

/// Seeded pick from caller-supplied items; fails on an empty slice
pub fn choice<'a, T>(items: &'a [T], opts: &SeedOptions) -> Result<&'a T> {
    pick(items, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn test_default_seed_picks() {
        let opts = SeedOptions::default();
        assert_eq!(tarot(&opts).unwrap(), "Death");
        assert_eq!(zodiac(&opts).unwrap(), "Taurus");
        assert_eq!(fortune(&opts).unwrap(), "Your hard work will soon pay off.");
        assert_eq!(magic_eight_ball(&opts).unwrap(), "Cannot predict now.");
    }

    #[test]
    fn test_choice() {
        let opts = SeedOptions::default();
        let items = ["red", "green", "blue"];
        // 13 % 3
        assert_eq!(*choice(&items, &opts).unwrap(), "green");

        let empty: Vec<String> = Vec::new();
        assert!(matches!(choice(&empty, &opts), Err(SimError::EmptyChoices)));
    }
}
