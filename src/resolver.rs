//! Turns a [`Config`] into the effective settings the filter and normalizer use.

use crate::config::Config;
use crate::error::MaskError;
use crate::pattern::{PatternKind, PatternSet};

/// Outcome of a configuration or host check, as reported to the host.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Validation {
    #[default]
    Ok,
    Invalid(MaskError),
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Ok)
    }

    /// The host-facing message: empty when valid.
    pub fn message(&self) -> String {
        match self {
            Validation::Ok => String::new(),
            Validation::Invalid(err) => err.host_message(),
        }
    }
}

/// A configuration together with its compiled patterns and active pattern kind.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    config: Config,
    patterns: PatternSet,
    active: PatternKind,
}

impl ResolvedConfig {
    pub fn resolve(config: Config) -> Result<Self, MaskError> {
        Ok(Self {
            patterns: PatternSet::new(config.decimal_places())?,
            active: PatternKind::select(config.allow_decimals(), config.allow_negative()),
            config,
        })
    }

    /// Swaps in a new configuration, recompiling patterns only when the
    /// decimal places changed.
    pub fn update(&mut self, config: Config) -> Result<(), MaskError> {
        if config.decimal_places() != self.patterns.places() {
            self.patterns = PatternSet::new(config.decimal_places())?;
        }
        self.active = PatternKind::select(config.allow_decimals(), config.allow_negative());
        self.config = config;
        Ok(())
    }

    /// Checks `min < max`. The configuration stays in effect either way.
    pub fn validation(&self) -> Validation {
        let (min, max) = (self.config.min(), self.config.max());
        if min >= max {
            log::warn!("invalid bounds: min {min} is not below max {max}");
            Validation::Invalid(MaskError::InvalidBounds { min, max })
        } else {
            Validation::Ok
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn active(&self) -> PatternKind {
        self.active
    }

    /// Tests `text` against the active pattern.
    pub fn matches_active(&self, text: &str) -> bool {
        self.patterns.is_match(self.active, text)
    }
}
