//! Mask configuration.
//!
//! A [`Config`] is either assembled through [`ConfigBuilder`] or deserialized from
//! host options. Both paths validate decimal places and bound finiteness; the
//! `min < max` relationship is checked later by the resolver, because an invalid
//! relationship is reported to the host rather than refused.

use serde::{Deserialize, Serialize};

use crate::error::MaskError;

/// Largest integer an `f64` represents exactly (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
/// Smallest integer an `f64` represents exactly.
pub const MIN_SAFE_INTEGER: f64 = -MAX_SAFE_INTEGER;

/// The separator displayed between integer and fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum DecimalSign {
    #[default]
    Point,
    Comma,
}

impl DecimalSign {
    pub fn as_char(self) -> char {
        match self {
            DecimalSign::Point => '.',
            DecimalSign::Comma => ',',
        }
    }
}

impl TryFrom<char> for DecimalSign {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DecimalSign::Point),
            ',' => Ok(DecimalSign::Comma),
            other => Err(format!("decimal sign must be '.' or ',', got {other:?}")),
        }
    }
}

impl From<DecimalSign> for char {
    fn from(sign: DecimalSign) -> char {
        sign.as_char()
    }
}

/// Number of fractional digits, within `1..=15`.
///
/// Fifteen is the most decimal digits an `f64` carries reliably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DecimalPlaces(u8);

impl DecimalPlaces {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 15;

    pub fn new(places: u8) -> Result<Self, MaskError> {
        if (Self::MIN..=Self::MAX).contains(&places) {
            Ok(Self(places))
        } else {
            Err(MaskError::InvalidDecimalPlaces(places))
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for DecimalPlaces {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for DecimalPlaces {
    type Error = MaskError;

    fn try_from(places: u8) -> Result<Self, Self::Error> {
        Self::new(places)
    }
}

impl From<DecimalPlaces> for u8 {
    fn from(places: DecimalPlaces) -> u8 {
        places.0
    }
}

/// The seven options controlling what a masked field accepts.
///
/// Keys use the camelCase names hosts pass as options (`allowEmpty`,
/// `decimalSign`, ...). Missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawConfig")]
pub struct Config {
    allow_empty: bool,
    allow_negative: bool,
    allow_decimals: bool,
    decimal_sign: DecimalSign,
    decimal_places: DecimalPlaces,
    min: f64,
    max: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_empty: true,
            allow_negative: true,
            allow_decimals: true,
            decimal_sign: DecimalSign::Point,
            decimal_places: DecimalPlaces::default(),
            min: MIN_SAFE_INTEGER,
            max: MAX_SAFE_INTEGER,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Starts a builder pre-filled with this configuration.
    pub fn to_builder(self) -> ConfigBuilder {
        ConfigBuilder { config: self }
    }

    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    pub fn allow_negative(&self) -> bool {
        self.allow_negative
    }

    pub fn allow_decimals(&self) -> bool {
        self.allow_decimals
    }

    pub fn decimal_sign(&self) -> DecimalSign {
        self.decimal_sign
    }

    pub fn decimal_places(&self) -> DecimalPlaces {
        self.decimal_places
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Raises negative bounds to zero when negatives are disallowed.
    ///
    /// This is a host-side policy: the resolver itself never corrects bounds.
    pub fn with_non_negative_bounds(mut self) -> Self {
        if !self.allow_negative {
            self.min = self.min.max(0.0);
            self.max = self.max.max(0.0);
        }
        self
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.config.allow_empty = allow;
        self
    }

    pub fn allow_negative(mut self, allow: bool) -> Self {
        self.config.allow_negative = allow;
        self
    }

    pub fn allow_decimals(mut self, allow: bool) -> Self {
        self.config.allow_decimals = allow;
        self
    }

    pub fn decimal_sign(mut self, sign: DecimalSign) -> Self {
        self.config.decimal_sign = sign;
        self
    }

    pub fn decimal_places(mut self, places: DecimalPlaces) -> Self {
        self.config.decimal_places = places;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.config.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.config.max = max;
        self
    }

    pub fn bounds(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Finishes the configuration.
    ///
    /// Fails on non-finite bounds. `min >= max` is accepted here and surfaced by
    /// the resolver as [`MaskError::InvalidBounds`].
    pub fn build(self) -> Result<Config, MaskError> {
        if !self.config.min.is_finite() || !self.config.max.is_finite() {
            return Err(MaskError::NonFiniteBound);
        }
        Ok(self.config)
    }
}

/// Unvalidated mirror of [`Config`] used during deserialization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawConfig {
    allow_empty: bool,
    allow_negative: bool,
    allow_decimals: bool,
    decimal_sign: DecimalSign,
    decimal_places: DecimalPlaces,
    min: f64,
    max: f64,
}

impl Default for RawConfig {
    fn default() -> Self {
        let d = Config::default();
        Self {
            allow_empty: d.allow_empty,
            allow_negative: d.allow_negative,
            allow_decimals: d.allow_decimals,
            decimal_sign: d.decimal_sign,
            decimal_places: d.decimal_places,
            min: d.min,
            max: d.max,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = MaskError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Config::builder()
            .allow_empty(raw.allow_empty)
            .allow_negative(raw.allow_negative)
            .allow_decimals(raw.allow_decimals)
            .decimal_sign(raw.decimal_sign)
            .decimal_places(raw.decimal_places)
            .bounds(raw.min, raw.max)
            .build()
    }
}
