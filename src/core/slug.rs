use std::fmt;
use std::str::FromStr;

use rand::TryCryptoRng;

use super::{BucketEncoder, DigitBucket, Digits, Precision, SlugError};

/// Character placed between the two halves of a slug.
pub const SEPARATOR: char = '-';

/// A generated slug such as `TLsqe-WtYqR`.
///
/// A slug holds one letter per timestamp digit plus a single
/// separator at index `precision.length() / 2`. Since the buckets don't
/// share letters the digits can always be recovered.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Hash)]
pub struct Slug {
    precision: Precision,
    text: String,
}

impl Slug {
    /// Encode every digit with the encoder, adding the separator
    /// in front of the digit at the midpoint.
    ///
    /// Either every digit is encoded or an error is returned, there
    /// are no partial slugs.
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use unique_slug::core::{BucketEncoder, Digits, Precision, Slug};
    ///
    /// let digits = Digits::render(1_700_000_000, Precision::Seconds);
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let slug = Slug::assemble(&digits, &mut BucketEncoder::new(&mut rng)).unwrap();
    ///
    /// assert_eq!(11, slug.len());
    /// assert_eq!(Some('-'), slug.as_str().chars().nth(5));
    /// assert_eq!(digits, slug.digits());
    /// ```
    pub fn assemble<R: TryCryptoRng + ?Sized>(
        digits: &Digits,
        encoder: &mut BucketEncoder<'_, R>,
    ) -> Result<Self, SlugError> {
        let precision = digits.precision();
        let half = precision.separator_index();
        let mut text = String::with_capacity(precision.slug_length());

        for (i, digit) in digits.iter().enumerate() {
            if i == half {
                text.push(SEPARATOR);
            }
            // Rendered digits are always 0-9.
            let bucket = DigitBucket::for_digit(digit)
                .ok_or_else(|| SlugError::malformed(digits.as_str(), "non decimal digit"))?;
            text.push(encoder.encode(i, bucket)?);
        }

        Ok(Self { precision, text })
    }

    /// Check that a string is a well formed slug.
    ///
    /// ```
    /// use unique_slug::core::{Precision, Slug};
    ///
    /// let slug = Slug::parse("rJqWe-tYqRq").unwrap();
    /// assert_eq!(Precision::Seconds, slug.precision());
    /// assert_eq!("1700000000", slug.digits().as_str());
    ///
    /// assert!(Slug::parse("rJqWet-YqRq").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        let precision = Precision::from_slug_length(s.len())
            .ok_or_else(|| SlugError::malformed(s, "length must be 11, 14, 17 or 20"))?;

        for (i, c) in s.chars().enumerate() {
            if i == precision.separator_index() {
                if c != SEPARATOR {
                    return Err(SlugError::malformed(s, "separator missing from midpoint"));
                }
            } else if DigitBucket::digit_of(c).is_none() {
                return Err(SlugError::malformed(s, "character outside the bucket alphabet"));
            }
        }

        Ok(Self {
            precision,
            text: s.to_string(),
        })
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters, separator included.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The letters on either side of the separator.
    pub fn halves(&self) -> (&str, &str) {
        let half = self.precision.separator_index();
        (&self.text[..half], &self.text[half + 1..])
    }

    /// Recover the zero padded digits this slug encodes.
    pub fn digits(&self) -> Digits {
        let values: Vec<u8> = self
            .text
            .chars()
            .filter_map(DigitBucket::digit_of)
            .collect();
        Digits::from_digit_values(self.precision, &values)
    }

    /// Recover the timestamp value, in units of `precision()`.
    pub fn timestamp_value(&self) -> u128 {
        self.digits().value()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slug::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Slug::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.text
    }
}
