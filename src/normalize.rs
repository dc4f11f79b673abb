//! Commit-time normalization: raw field text in, canonical number text out.

use crate::config::Config;
use crate::error::MaskError;
use crate::resolver::ResolvedConfig;

/// Rewrites `raw` into the canonical form for `resolved`.
///
/// The separator typed by the user is standardized to '.', the number is parsed
/// and re-rendered (fixed-point with the configured places, or an integer),
/// checked against the active pattern and clamped into `[min, max]`. The display
/// separator is put back last. Text that does not survive the pattern check is
/// replaced by the empty string or zero, depending on `allow_empty`. Zero is left
/// out of range only when no value in range can be rendered.
pub fn normalize(raw: &str, resolved: &ResolvedConfig) -> String {
    let config = resolved.config();
    let canonical = match canonicalize(raw, resolved) {
        Ok((number, text)) => clamp(number, text, resolved),
        Err(err) => {
            log::debug!("{err}; falling back");
            fallback(resolved)
        }
    };
    display(canonical, config)
}

/// Steps 1–4: implicit zeros, parse, re-render, pattern check.
///
/// Returns the rendered text with the value it stands for, which is what gets
/// compared against the bounds.
fn canonicalize(raw: &str, resolved: &ResolvedConfig) -> Result<(f64, String), MaskError> {
    let config = resolved.config();
    let unparsable = || MaskError::UnparsableValue(raw.to_string());

    let mut value = raw.to_string();
    if config.allow_decimals() {
        let sign = config.decimal_sign().as_char();
        if value.starts_with(sign) {
            value.insert(0, '0');
        }
        if value.ends_with(sign) {
            value.push('0');
        }
    }
    let value = value.replacen(',', ".", 1);

    let number = parse_number(&value).ok_or_else(unparsable)?;
    let text = format_number(number, config);
    log::trace!("normalize {raw:?}: parsed {number}, rendered {text:?}");
    if resolved.matches_active(&text) {
        let rendered = parse_number(&text).unwrap_or(number);
        Ok((rendered, text))
    } else {
        Err(unparsable())
    }
}

/// Parses a '.'-separated number, ignoring surrounding whitespace.
///
/// Blank text and non-finite results are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Renders `number` with '.' as separator: `decimal_places` fractional digits
/// when decimals are allowed, an integer otherwise.
///
/// A value exactly halfway between two renderings takes the one farther from
/// zero ("0.125" at two places is "0.13"). In integer mode a number with a
/// fractional part is rendered in full, so it fails the integer pattern instead
/// of being rounded silently.
pub fn format_number(number: f64, config: &Config) -> String {
    let text = if config.allow_decimals() {
        let places = config.decimal_places().get();
        let number = if is_halfway(number, places) {
            away_from_zero(number)
        } else {
            number
        };
        format!("{number:.places$}")
    } else if number.fract() == 0.0 {
        format!("{number:.0}")
    } else {
        format!("{number}")
    };
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Whether `number` lies exactly halfway between two values with `places`
/// fractional digits.
///
/// A finite `f64` is `odd * 2^p`. Scaled by `10^places = 5^places * 2^places`
/// it keeps an odd factor, so its fractional part is exactly one half iff
/// `p + places == -1`.
fn is_halfway(number: f64, places: usize) -> bool {
    if number == 0.0 || !number.is_finite() {
        return false;
    }
    let bits = number.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    exponent + mantissa.trailing_zeros() as i32 == -(places as i32 + 1)
}

/// The next representable value with a larger magnitude.
fn away_from_zero(number: f64) -> f64 {
    f64::from_bits(number.to_bits() + 1)
}

/// Step 5: out-of-range values become the nearest bound that survives rendering.
///
/// When no value in range renders, or the clamped text fails the active
/// pattern, the unclamped fallback is used instead.
fn clamp(number: f64, text: String, resolved: &ResolvedConfig) -> String {
    let config = resolved.config();
    let above = number > config.max();
    if !above && number >= config.min() {
        return text;
    }
    let Some((lower, upper)) = clamp_targets(config) else {
        log::debug!("no renderable value within [{}, {}]", config.min(), config.max());
        return unclamped_fallback(config);
    };
    let clamped = if above {
        log::debug!("{number} above max {}, clamping", config.max());
        format_number(upper, config)
    } else {
        log::debug!("{number} below min {}, clamping", config.min());
        format_number(lower, config)
    };
    if resolved.matches_active(&clamped) {
        clamped
    } else {
        log::debug!("clamped value {clamped:?} does not fit the active pattern");
        unclamped_fallback(config)
    }
}

/// The bounds as they render, stepped one display unit inward when rendering
/// moved them out of range.
///
/// `None` when the range holds no renderable value. Inverted bounds are
/// returned as they render: the host has already been told they are invalid.
fn clamp_targets(config: &Config) -> Option<(f64, f64)> {
    let step = display_unit(config);
    let mut lower = rendered(config.min(), config);
    if lower < config.min() {
        lower = rendered(lower + step, config);
    }
    let mut upper = rendered(config.max(), config);
    if upper > config.max() {
        upper = rendered(upper - step, config);
    }
    if lower > upper && config.min() < config.max() {
        None
    } else {
        Some((lower, upper))
    }
}

/// The value `number` stands for once rendered.
fn rendered(number: f64, config: &Config) -> f64 {
    if config.allow_decimals() {
        parse_number(&format_number(number, config)).unwrap_or(number)
    } else {
        number.round()
    }
}

/// Distance between two adjacent renderings.
fn display_unit(config: &Config) -> f64 {
    if config.allow_decimals() {
        10f64.powi(-(config.decimal_places().get() as i32))
    } else {
        1.0
    }
}

/// Empty when allowed, otherwise zero brought into range.
fn fallback(resolved: &ResolvedConfig) -> String {
    let config = resolved.config();
    if config.allow_empty() {
        String::new()
    } else {
        clamp(0.0, format_number(0.0, config), resolved)
    }
}

/// Empty when allowed, otherwise zero as it is.
fn unclamped_fallback(config: &Config) -> String {
    if config.allow_empty() {
        String::new()
    } else {
        format_number(0.0, config)
    }
}

/// Step 6: the configured display separator.
fn display(text: String, config: &Config) -> String {
    let sign = config.decimal_sign().as_char();
    if sign == '.' {
        text
    } else {
        text.replace('.', &sign.to_string())
    }
}
