use regex::Regex;

use crate::config::DecimalPlaces;
use crate::error::MaskError;

/// The four shapes a masked value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    UnsignedInteger,
    SignedInteger,
    UnsignedDecimal,
    SignedDecimal,
}

impl PatternKind {
    /// Picks the pattern for a decimals × sign combination.
    pub fn select(allow_decimals: bool, allow_negative: bool) -> Self {
        match (allow_decimals, allow_negative) {
            (false, false) => PatternKind::UnsignedInteger,
            (false, true) => PatternKind::SignedInteger,
            (true, false) => PatternKind::UnsignedDecimal,
            (true, true) => PatternKind::SignedDecimal,
        }
    }

    /// Regular expression source for this shape.
    ///
    /// The separator class accepts both '.' and ','; the normalizer settles on one.
    pub fn template(self, places: DecimalPlaces) -> String {
        let places = places.get();
        match self {
            PatternKind::UnsignedInteger => "^[0-9]*$".to_string(),
            PatternKind::SignedInteger => "^-?[0-9]+$".to_string(),
            PatternKind::UnsignedDecimal => format!("^[0-9]+([.,][0-9]{{1,{places}}})?$"),
            PatternKind::SignedDecimal => format!("^-?[0-9]+([.,][0-9]{{1,{places}}})?$"),
        }
    }

    pub fn is_decimal(self) -> bool {
        matches!(self, PatternKind::UnsignedDecimal | PatternKind::SignedDecimal)
    }

    pub fn is_signed(self) -> bool {
        matches!(self, PatternKind::SignedInteger | PatternKind::SignedDecimal)
    }
}

/// All four templates compiled for one decimal-places setting.
#[derive(Debug, Clone)]
pub struct PatternSet {
    places: DecimalPlaces,
    unsigned_integer: Regex,
    signed_integer: Regex,
    unsigned_decimal: Regex,
    signed_decimal: Regex,
}

impl PatternSet {
    pub fn new(places: DecimalPlaces) -> Result<Self, MaskError> {
        let compile = |kind: PatternKind| Regex::new(&kind.template(places));
        Ok(Self {
            places,
            unsigned_integer: compile(PatternKind::UnsignedInteger)?,
            signed_integer: compile(PatternKind::SignedInteger)?,
            unsigned_decimal: compile(PatternKind::UnsignedDecimal)?,
            signed_decimal: compile(PatternKind::SignedDecimal)?,
        })
    }

    pub fn places(&self) -> DecimalPlaces {
        self.places
    }

    pub fn get(&self, kind: PatternKind) -> &Regex {
        match kind {
            PatternKind::UnsignedInteger => &self.unsigned_integer,
            PatternKind::SignedInteger => &self.signed_integer,
            PatternKind::UnsignedDecimal => &self.unsigned_decimal,
            PatternKind::SignedDecimal => &self.signed_decimal,
        }
    }

    pub fn is_match(&self, kind: PatternKind, text: &str) -> bool {
        self.get(kind).is_match(text)
    }
}
