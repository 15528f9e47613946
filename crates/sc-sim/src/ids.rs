//! Identifiers and colors

use std::fmt;

use sc_core::{fill_digits, select_in_range, sub_seed, Seed};
use serde::{Deserialize, Serialize};

use crate::{Result, SeedOptions};

const UUID_DIGITS: usize = 32;
const UUID_VERSION_AT: usize = 12;
const UUID_VARIANT_AT: usize = 16;

/// Seed filled to exactly `len` characters; a fill shortened by a dropped
/// leading zero is topped up by cycling its own digits.
fn digit_block(seed: Seed, len: usize) -> Result<Vec<u8>> {
    let digits = fill_digits(seed, len as i64)?;
    Ok(digits.bytes().cycle().take(len).collect())
}

/// Version-4 shaped identifier, `8-4-4-4-12`, built from seed digits
pub fn uuid(opts: &SeedOptions) -> Result<String> {
    let mut block = digit_block(opts.seed()?, UUID_DIGITS)?;
    block[UUID_VERSION_AT] = b'4';
    block[UUID_VARIANT_AT] = b'8';

    let mut out = String::with_capacity(UUID_DIGITS + 4);
    for (i, b) in block.into_iter().enumerate() {
        if matches!(i, 8 | 12 | 16 | 20) {
            out.push('-');
        }
        out.push(char::from(b));
    }
    Ok(out)
}

/// `#rrggbb` from the seed filled to six digits
pub fn hex_color(opts: &SeedOptions) -> Result<String> {
    let block = digit_block(opts.seed()?, 6)?;
    Ok(format!("#{}", String::from_utf8_lossy(&block)))
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Color whose channel `i` is a range pick in `[0, 255]` over sub-seed `i`
pub fn rgb(opts: &SeedOptions) -> Result<Rgb> {
    let seed = opts.seed()?;
    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        // in [0, 255] by construction
        *channel = select_in_range(sub_seed(seed, i as u64), 0, 255)? as u8;
    }
    let [r, g, b] = channels;
    Ok(Rgb { r, g, b })
}
