//! Seed normalization
//!
//! Every public operation starts here: a loosely-typed [`RawSeed`] is turned
//! into a canonical [`Seed`], a strictly positive integer with at least one
//! decimal digit.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, SeedError};

/// Seed used when the caller supplies none, or when a seed collapses to zero
pub const DEFAULT_SEED: u64 = 814;

/// Seed as supplied by a caller, before normalization
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSeed {
    /// No seed (omitted or null)
    #[default]
    Absent,
    /// Whole number, possibly negative
    Integer(i64),
    /// Whole number above `i64::MAX`
    Unsigned(u64),
    /// Fractional number, possibly negative
    Float(f64),
    /// Text, hashed by [`text_hash`]
    Text(String),
}

impl RawSeed {
    /// Convert a dynamically typed value into a raw seed.
    ///
    /// Booleans, arrays and objects have no defined seed meaning and are
    /// rejected instead of being coerced.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Absent),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::Unsigned(u))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Float(f))
                } else {
                    Err(SeedError::TypeMismatch { found: "number" })
                }
            }
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Bool(_) => Err(SeedError::TypeMismatch { found: "boolean" }),
            Value::Array(_) => Err(SeedError::TypeMismatch { found: "array" }),
            Value::Object(_) => Err(SeedError::TypeMismatch { found: "object" }),
        }
    }

    /// Normalize into a canonical seed
    pub fn normalize(&self) -> Result<Seed> {
        normalize(self)
    }
}

impl From<i64> for RawSeed {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for RawSeed {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u32> for RawSeed {
    fn from(v: u32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u64> for RawSeed {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(i) => Self::Integer(i),
            Err(_) => Self::Unsigned(v),
        }
    }
}

impl From<f64> for RawSeed {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for RawSeed {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for RawSeed {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Seed> for RawSeed {
    fn from(seed: Seed) -> Self {
        seed.get().into()
    }
}

impl<T: Into<RawSeed>> From<Option<T>> for RawSeed {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

/// Canonical seed: a strictly positive integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u64", from = "u64")]
pub struct Seed(u64);

impl Seed {
    /// Wrap an integer, substituting [`DEFAULT_SEED`] for zero
    pub fn new(value: u64) -> Self {
        if value == 0 {
            log::debug!("seed collapsed to zero, using default {}", DEFAULT_SEED);
            Self(DEFAULT_SEED)
        } else {
            Self(value)
        }
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self(DEFAULT_SEED)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Seed> for u64 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positional text hash: sum of `code point * (index + 1)` over characters.
///
/// The empty string hashes to 0. Wraps on overflow, which only very long
/// inputs can reach.
pub fn text_hash(text: &str) -> u64 {
    text.chars()
        .enumerate()
        .fold(0u64, |acc, (i, c)| {
            acc.wrapping_add((c as u64).wrapping_mul(i as u64 + 1))
        })
}

/// Normalize any accepted seed representation into a canonical [`Seed`].
///
/// Numbers lose their sign and fractional part; anything that ends up at
/// zero becomes [`DEFAULT_SEED`]. Finite floats beyond `u64::MAX` saturate.
pub fn normalize(raw: &RawSeed) -> Result<Seed> {
    let value = match raw {
        RawSeed::Absent => 0,
        RawSeed::Integer(v) => v.unsigned_abs(),
        RawSeed::Unsigned(v) => *v,
        RawSeed::Float(v) => {
            if !v.is_finite() {
                return Err(SeedError::NonFinite(*v));
            }
            v.abs().floor() as u64
        }
        RawSeed::Text(s) => text_hash(s),
    };
    Ok(Seed::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_seed_for_empty_inputs() {
        assert_eq!(normalize(&RawSeed::Absent).unwrap().get(), 814);
        assert_eq!(normalize(&RawSeed::Integer(0)).unwrap().get(), 814);
        assert_eq!(normalize(&RawSeed::Float(0.0)).unwrap().get(), 814);
        assert_eq!(normalize(&RawSeed::from(None::<i64>)).unwrap().get(), 814);
    }

    #[test]
    fn test_negative_and_fractional() {
        assert_eq!(normalize(&RawSeed::Integer(-42)).unwrap().get(), 42);
        assert_eq!(normalize(&RawSeed::Float(814.9)).unwrap().get(), 814);
        assert_eq!(normalize(&RawSeed::Float(-5.7)).unwrap().get(), 5);
        // (0, 1) floors to zero, which means default
        assert_eq!(normalize(&RawSeed::Float(0.5)).unwrap().get(), 814);
        assert_eq!(normalize(&RawSeed::Float(0.738193)).unwrap().get(), 814);
        assert_eq!(normalize(&RawSeed::Integer(i64::MIN)).unwrap().get(), 1u64 << 63);
    }

    #[test]
    fn test_text_hash() {
        assert_eq!(text_hash("brian"), 1579);
        assert_eq!(text_hash(""), 0);
        assert_eq!(text_hash("a"), 97);
        assert_eq!(normalize(&RawSeed::from("brian")).unwrap().get(), 1579);
        assert_eq!(normalize(&RawSeed::from("")).unwrap().get(), 814);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            normalize(&RawSeed::Float(f64::NAN)),
            Err(SeedError::NonFinite(_))
        ));
        assert!(matches!(
            normalize(&RawSeed::Float(f64::NEG_INFINITY)),
            Err(SeedError::NonFinite(_))
        ));
    }

    #[test]
    fn test_idempotent() {
        let wide = [(1u64 << 63) + 1, u64::MAX - 1, u64::MAX];
        for v in [1u64, 5, 814, 1579, 99_999, i64::MAX as u64].into_iter().chain(wide) {
            let once = normalize(&RawSeed::from(Seed::new(v))).unwrap();
            let twice = normalize(&RawSeed::from(once)).unwrap();
            assert_eq!(once.get(), v);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_wide_unsigned_seeds_keep_precision() {
        let raw = RawSeed::from((1u64 << 63) + 1);
        assert_eq!(raw, RawSeed::Unsigned(9_223_372_036_854_775_809));
        assert_eq!(normalize(&raw).unwrap().get(), 9_223_372_036_854_775_809);
        assert_eq!(RawSeed::from(42u64), RawSeed::Integer(42));

        let back: RawSeed = serde_json::from_str("18446744073709551614").unwrap();
        assert_eq!(back, RawSeed::Unsigned(u64::MAX - 1));
        assert_eq!(serde_json::to_string(&back).unwrap(), "18446744073709551614");
    }

    #[test]
    fn test_from_value() {
        assert_eq!(RawSeed::from_value(&json!(null)).unwrap(), RawSeed::Absent);
        assert_eq!(RawSeed::from_value(&json!(42)).unwrap(), RawSeed::Integer(42));
        assert_eq!(RawSeed::from_value(&json!(4.5)).unwrap(), RawSeed::Float(4.5));
        assert_eq!(
            RawSeed::from_value(&json!(18_446_744_073_709_551_614u64)).unwrap(),
            RawSeed::Unsigned(u64::MAX - 1)
        );
        assert_eq!(
            RawSeed::from_value(&json!("brian")).unwrap(),
            RawSeed::Text("brian".into())
        );
        assert!(matches!(
            RawSeed::from_value(&json!(true)),
            Err(SeedError::TypeMismatch { found: "boolean" })
        ));
        assert!(matches!(
            RawSeed::from_value(&json!([1, 2])),
            Err(SeedError::TypeMismatch { found: "array" })
        ));
    }
}
