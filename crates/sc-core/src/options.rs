//! Options accepted by every public operation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{RawSeed, Result, Seed};

/// Number of digits produced by [`crate::generate_default`]
pub const DEFAULT_DIGITS: i64 = 3;

/// Options for a single call; `seed` is the only recognized field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeedOptions {
    /// Raw seed (absent = default seed)
    #[serde(default)]
    pub seed: RawSeed,
}

impl SeedOptions {
    /// Parse a JSON options document.
    ///
    /// Unknown keys are ignored; a seed that is not null, a number or a
    /// string is rejected.
    pub fn from_json(s: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(s)?;
        let seed = match doc.get("seed") {
            Some(v) => RawSeed::from_value(v)?,
            None => RawSeed::Absent,
        };
        Ok(Self { seed })
    }

    /// Builder: numeric or text seed
    pub fn with_seed(mut self, seed: impl Into<RawSeed>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Builder: text seed
    pub fn with_text_seed(mut self, text: impl Into<String>) -> Self {
        self.seed = RawSeed::Text(text.into());
        self
    }

    /// Builder: clear the seed
    pub fn without_seed(mut self) -> Self {
        self.seed = RawSeed::Absent;
        self
    }

    /// Canonical seed for these options
    pub fn seed(&self) -> Result<Seed> {
        self.seed.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeedError;

    #[test]
    fn test_default_options() {
        let opts = SeedOptions::default();
        assert_eq!(opts.seed, RawSeed::Absent);
        assert_eq!(opts.seed().unwrap().get(), 814);
    }

    #[test]
    fn test_builder() {
        let opts = SeedOptions::default().with_seed(-42);
        assert_eq!(opts.seed().unwrap().get(), 42);

        let opts = opts.with_text_seed("brian");
        assert_eq!(opts.seed().unwrap().get(), 1579);

        let opts = opts.without_seed();
        assert_eq!(opts.seed().unwrap().get(), 814);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(SeedOptions::from_json("{}").unwrap().seed, RawSeed::Absent);
        assert_eq!(SeedOptions::from_json(r#"{"seed": null}"#).unwrap().seed, RawSeed::Absent);
        assert_eq!(
            SeedOptions::from_json(r#"{"seed": 12, "extra": true}"#).unwrap().seed,
            RawSeed::Integer(12)
        );
        assert_eq!(
            SeedOptions::from_json(r#"{"seed": "brian"}"#).unwrap().seed().unwrap().get(),
            1579
        );
        assert_eq!(
            SeedOptions::from_json(r#"{"seed": 9223372036854775809}"#).unwrap().seed().unwrap().get(),
            9_223_372_036_854_775_809
        );
        assert!(matches!(
            SeedOptions::from_json(r#"{"seed": {"a": 1}}"#),
            Err(SeedError::TypeMismatch { found: "object" })
        ));
        assert!(matches!(
            SeedOptions::from_json("{not json"),
            Err(SeedError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip_shapes() {
        let opts: SeedOptions = serde_json::from_str(r#"{"seed": 4.5}"#).unwrap();
        assert_eq!(opts.seed, RawSeed::Float(4.5));
        let opts: SeedOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.seed, RawSeed::Absent);
        assert_eq!(
            serde_json::to_string(&SeedOptions::default().with_seed(7)).unwrap(),
            r#"{"seed":7}"#
        );
    }
}
