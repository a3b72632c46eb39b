//! Amounts typed into the allowance/expenses fields, and money formatting.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Leading numeric prefix, the way a browser's `parseFloat` reads it.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("numeric prefix regex")
});

/// A value captured from one of the numeric input fields.
///
/// Input is not validated: text that doesn't start with a number becomes
/// `NotANumber`, and budget computations treat it as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amount {
    Value(Decimal),
    NotANumber,
}

impl Amount {
    /// Parse a field the lenient way: leading whitespace is skipped and any
    /// trailing garbage after the numeric prefix is ignored.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let Some(m) = NUMERIC_PREFIX.find(trimmed) else {
            return Self::NotANumber;
        };
        let text = m.as_str().trim_start_matches('+');
        let parsed = match text.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => Decimal::from_scientific(&format!(
                "{}e{}",
                mantissa.trim_end_matches('.'),
                exponent.trim_start_matches('+')
            )),
            None => Decimal::from_str(text.trim_end_matches('.')),
        };
        match parsed {
            Ok(value) => Self::Value(value),
            Err(_) => Self::NotANumber,
        }
    }

    /// The numeric value, with `NotANumber` coerced to zero.
    pub fn or_zero(self) -> Decimal {
        match self {
            Self::Value(v) => v,
            Self::NotANumber => Decimal::ZERO,
        }
    }
}

impl fmt::Display for Amount {
    /// The raw value, unrounded, or "NaN".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(&format_raw(*v)),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}

/// Strict parse used by the chat server: the whole (trimmed) string must be
/// a number.
pub fn parse_strict(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let m = NUMERIC_PREFIX.find(trimmed)?;
    if m.end() != trimmed.len() {
        return None;
    }
    match Amount::parse(trimmed) {
        Amount::Value(v) => Some(v),
        Amount::NotANumber => None,
    }
}

/// Format a money value with exactly two decimal places, rounding half away
/// from zero.
pub fn format_money(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

/// Format a value the way it was typed, without padding or rounding.
pub fn format_raw(value: Decimal) -> String {
    value.normalize().to_string()
}
