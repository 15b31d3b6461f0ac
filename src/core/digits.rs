use std::fmt;

use super::Precision;

/// A timestamp rendered as exactly `precision.length()` decimal digits.
///
/// Values that need fewer digits are zero padded on the left.
/// Values that need more keep only their lowest order digits,
/// i.e. `value % 10^length`, so rendering is always deterministic.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct Digits {
    precision: Precision,
    text: String,
}

impl Digits {
    /// Render a timestamp value for a precision.
    ///
    /// ```
    /// use unique_slug::core::{Digits, Precision};
    ///
    /// let d = Digits::render(42, Precision::Seconds);
    /// assert_eq!("0000000042", d.as_str());
    ///
    /// // Too wide for 10 digits, the leading 1 is dropped.
    /// let d = Digits::render(12_345_678_901, Precision::Seconds);
    /// assert_eq!("2345678901", d.as_str());
    /// ```
    pub fn render(value: u128, precision: Precision) -> Self {
        let width = precision.length();
        let modulus = 10u128.pow(width as u32);
        let text = format!("{:0width$}", value % modulus, width = width);
        Self { precision, text }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Digit values, most significant first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.text.bytes().map(|b| b - b'0')
    }

    /// The integer these digits spell.
    pub fn value(&self) -> u128 {
        self.iter().fold(0u128, |acc, d| acc * 10 + d as u128)
    }

    /// Build from digit values that are already validated.
    pub(crate) fn from_digit_values(precision: Precision, values: &[u8]) -> Self {
        let text = values.iter().map(|d| (b'0' + d) as char).collect();
        Self { precision, text }
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
