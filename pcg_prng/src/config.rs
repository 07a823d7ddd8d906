// JSON-described engine configuration.
//
// `Pcg64Config` and `Pcg128Config` capture everything needed to rebuild an
// engine: the raw multiplier/increment/state, plus an optional seed and
// stream selector to apply after construction. Every field defaults to the
// reference constants, so `{}` describes the default engine and a file only
// needs to mention what it changes.
//
// Loading follows the `from_json` pattern used elsewhere for typed config
// (JSON string in, typed struct out). Loading is the only fallible operation
// in the crate; building an engine from a loaded config cannot fail.
//
// Application order in `build()`:
// 1. Construct with the raw multiplier, increment, and state.
// 2. If `seed` and `stream` are both set, `seed_with_stream`.
// 3. Else if only `seed` is set, `seed`.
// A `stream` without a `seed` is rejected at load time.

use crate::pcg128::{self, Pcg128};
use crate::pcg64::{self, Pcg64};
use serde::{Deserialize, Serialize};

/// Errors from loading an engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("stream selector given without a seed")]
    StreamWithoutSeed,
}

/// A 128-bit config value as explicit halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighLow {
    pub high: u64,
    pub low: u64,
}

impl HighLow {
    /// Build from explicit high and low words.
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }
}

/// Configuration for a `Pcg64` engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pcg64Config {
    pub multiplier: u64,
    pub increment: u64,
    /// Raw initial state, used as-is when no `seed` is given.
    pub state: u64,
    pub seed: Option<u64>,
    /// Stream selector. Replaces the increment with `(stream << 1) | 1`.
    pub stream: Option<u64>,
}

impl Default for Pcg64Config {
    fn default() -> Self {
        Self {
            multiplier: pcg64::DEFAULT_MULTIPLIER,
            increment: pcg64::DEFAULT_INCREMENT,
            state: pcg64::DEFAULT_STATE,
            seed: None,
            stream: None,
        }
    }
}

impl Pcg64Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!("loaded pcg64 config: {config:?}");
        Ok(config)
    }

    /// Serialize this config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.stream.is_some() && self.seed.is_none() {
            return Err(ConfigError::StreamWithoutSeed);
        }
        Ok(())
    }

    /// Construct the described engine.
    pub fn build(&self) -> Pcg64 {
        let mut rng = Pcg64::new(self.multiplier, self.increment, self.state);
        match (self.seed, self.stream) {
            (Some(seed), Some(stream)) => rng.seed_with_stream(seed, stream),
            (Some(seed), None) => rng.seed(seed),
            (None, _) => {}
        }
        rng
    }
}

/// Configuration for a `Pcg128` engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pcg128Config {
    pub multiplier: HighLow,
    pub increment: HighLow,
    /// Raw initial state, used as-is when no `seed` is given.
    pub state: HighLow,
    pub seed: Option<HighLow>,
    /// Stream selector. Replaces the increment with
    /// `(stream.high, (stream.low << 1) | 1)`.
    pub stream: Option<HighLow>,
}

impl Default for Pcg128Config {
    fn default() -> Self {
        Self {
            multiplier: HighLow::new(
                pcg128::DEFAULT_MULTIPLIER_HIGH,
                pcg128::DEFAULT_MULTIPLIER_LOW,
            ),
            increment: HighLow::new(
                pcg128::DEFAULT_INCREMENT_HIGH,
                pcg128::DEFAULT_INCREMENT_LOW,
            ),
            state: HighLow::new(pcg128::DEFAULT_STATE_HIGH, pcg128::DEFAULT_STATE_LOW),
            seed: None,
            stream: None,
        }
    }
}

impl Pcg128Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!("loaded pcg128 config: {config:?}");
        Ok(config)
    }

    /// Serialize this config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.stream.is_some() && self.seed.is_none() {
            return Err(ConfigError::StreamWithoutSeed);
        }
        Ok(())
    }

    /// Construct the described engine.
    pub fn build(&self) -> Pcg128 {
        let mut rng = Pcg128::new(
            self.multiplier.high,
            self.multiplier.low,
            self.increment.high,
            self.increment.low,
            self.state.high,
            self.state.low,
        );
        match (self.seed, self.stream) {
            (Some(seed), Some(stream)) => {
                rng.seed_with_stream(seed.high, seed.low, stream.high, stream.low)
            }
            (Some(seed), None) => rng.seed(seed.high, seed.low),
            (None, _) => {}
        }
        rng
    }
}
