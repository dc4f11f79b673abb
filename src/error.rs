use thiserror::Error;

/// Message emitted when the mask is attached to a host that cannot hold free text.
pub const INVALID_HOST_KIND_MESSAGE: &str =
    "numeric mask must be attached to a single-line text input";

/// Message emitted when `min >= max`.
pub const INVALID_BOUNDS_MESSAGE: &str = "Either of min or max values is invalid";

/// Errors produced by the numeric mask.
///
/// Only [`MaskError::InvalidHostKind`] is fatal. [`MaskError::InvalidBounds`] is
/// reported to the host while the mask keeps running, and
/// [`MaskError::UnparsableValue`] never leaves the normalizer: it is replaced by the
/// configured fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaskError {
    /// The host control cannot hold free-text numeric input.
    #[error("{}", INVALID_HOST_KIND_MESSAGE)]
    InvalidHostKind,
    /// `min` is not strictly below `max`.
    #[error("{} (min = {min}, max = {max})", INVALID_BOUNDS_MESSAGE)]
    InvalidBounds { min: f64, max: f64 },
    /// Decimal places outside `1..=15`.
    #[error("decimal places must be within 1..=15, got {0}")]
    InvalidDecimalPlaces(u8),
    /// `min` or `max` is NaN or infinite.
    #[error("min and max must be finite numbers")]
    NonFiniteBound,
    /// A raw value that does not normalize to the active pattern.
    #[error("value {0:?} is not a valid number")]
    UnparsableValue(String),
    /// A value pattern failed to compile.
    #[error("invalid value pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl MaskError {
    /// The fixed diagnostic text sent over the validation channel.
    pub fn host_message(&self) -> String {
        match self {
            MaskError::InvalidHostKind => INVALID_HOST_KIND_MESSAGE.to_string(),
            MaskError::InvalidBounds { .. } => INVALID_BOUNDS_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
