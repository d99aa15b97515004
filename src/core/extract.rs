use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value returned by [`parse_value`] when the input holds no digits.
pub const DEFAULT_VALUE: u64 = 0;

/// Value returned by [`extract_score`] when the input holds no digits.
pub const DEFAULT_SCORE: u8 = 50;

/// Number of leading digits kept when extracting a score.
const SCORE_DIGITS: usize = 2;

/// A loosely typed value as it arrives from a report payload: either display
/// text such as `"€ 1.200"` or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// The ASCII digits of the value's string form, in order.
    pub fn digits(&self) -> String {
        self.to_string().chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Integer(n) => write!(f, "{n}"),
            RawValue::Float(n) => write!(f, "{n}"),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<&RawValue> for RawValue {
    fn from(v: &RawValue) -> Self {
        v.clone()
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Integer(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Integer(n.into())
    }
}

impl From<u64> for RawValue {
    fn from(n: u64) -> Self {
        // Values beyond i64 keep their digits as text.
        match i64::try_from(n) {
            Ok(n) => RawValue::Integer(n),
            Err(_) => RawValue::Text(n.to_string()),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Float(n)
    }
}

/// Extract a non-negative integer from a currency-like value.
///
/// Every character that is not a decimal digit is dropped and the remaining
/// digits are read as a base-10 integer, so `"€ 1.200"` yields `1200` and
/// `"abc"` yields [`DEFAULT_VALUE`]. Digit runs too long for `u64` saturate
/// at `u64::MAX`.
pub fn parse_value(input: impl Into<RawValue>) -> u64 {
    let digits = input.into().digits();
    if digits.is_empty() {
        log::trace!("no digits in value, using default {DEFAULT_VALUE}");
        return DEFAULT_VALUE;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Extract a two-digit score from free text.
///
/// Only the first two digits are considered: `"87 points"` yields `87` and
/// `"123456"` yields `12`. Input with no digits at all yields
/// [`DEFAULT_SCORE`]; an explicit zero such as `"0"` stays `0`.
pub fn extract_score(input: impl Into<RawValue>) -> u8 {
    let digits = input.into().digits();
    if digits.is_empty() {
        log::trace!("no digits in score, using default {DEFAULT_SCORE}");
        return DEFAULT_SCORE;
    }
    // At most two ASCII digits, so this always fits a u8.
    digits[..digits.len().min(SCORE_DIGITS)]
        .parse()
        .unwrap_or(DEFAULT_SCORE)
}
