use std::str::FromStr;
use thiserror::Error;

/// Failure to parse a distance string of the form `-?\d+(\.\d+)?[pwh]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("distance value '{0}' is too short; expected a number followed by 'p', 'w' or 'h'")]
    TooShort(String),
    #[error("distance value '{0}' must end with a unit: 'p', 'w' or 'h'")]
    MissingUnit(String),
    #[error("distance value '{0}' contains more than one decimal point")]
    DoubleDecimal(String),
    #[error("unexpected character '{1}' in distance value '{0}'")]
    InvalidCharacter(String, char),
    #[error("distance value '{0}' has no numeric amount")]
    MissingAmount(String),
    #[error("distance value '{0}' amount is out of range")]
    AmountOutOfRange(String),
}

/// Unit of a length value, selected by the trailing character of the
/// distance string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceUnit {
    /// Absolute pixels (`p`).
    Absolute,
    /// Percent of canvas width (`w`).
    PercentWidth,
    /// Percent of canvas height (`h`).
    PercentHeight,
}

/// A parsed length value, resolvable against canvas dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceValue {
    pub unit: DistanceUnit,
    pub amount: f32,
}

impl DistanceValue {
    pub const fn new(unit: DistanceUnit, amount: f32) -> Self {
        Self { unit, amount }
    }

    /// Resolves to canvas pixels. Linear in the relevant dimension for the
    /// percentage units; absolute values pass through unchanged.
    pub fn resolve(&self, canvas_w: f32, canvas_h: f32) -> f32 {
        match self.unit {
            DistanceUnit::PercentWidth => self.amount / 100.0 * canvas_w,
            DistanceUnit::PercentHeight => self.amount / 100.0 * canvas_h,
            DistanceUnit::Absolute => self.amount,
        }
    }
}

impl FromStr for DistanceValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 2 {
            return Err(ParseError::TooShort(s.to_string()));
        }

        let unit = match s.as_bytes()[s.len() - 1] {
            b'p' => DistanceUnit::Absolute,
            b'w' => DistanceUnit::PercentWidth,
            b'h' => DistanceUnit::PercentHeight,
            _ => return Err(ParseError::MissingUnit(s.to_string())),
        };

        let number = &s[..s.len() - 1];
        let mut seen_decimal = false;
        for (i, ch) in number.char_indices() {
            match ch {
                '-' if i == 0 => {}
                '.' if seen_decimal => return Err(ParseError::DoubleDecimal(s.to_string())),
                '.' => seen_decimal = true,
                '0'..='9' => {}
                _ => return Err(ParseError::InvalidCharacter(s.to_string(), ch)),
            }
        }

        // Only digit-free prefixes like "-" or "." survive the loop and
        // still fail to parse.
        let amount: f32 = number
            .parse()
            .map_err(|_| ParseError::MissingAmount(s.to_string()))?;

        // A long enough digit run overflows f32 to infinity; amounts must
        // stay finite.
        if !amount.is_finite() {
            return Err(ParseError::AmountOutOfRange(s.to_string()));
        }

        Ok(DistanceValue { unit, amount })
    }
}
