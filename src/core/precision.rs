use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::{LENGTH_HINT, SlugError};

/// Time unit a slug encodes. The discriminant is the
/// number of digits the timestamp is rendered with.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "i64")
)]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash, Default)]
pub enum Precision {
    /// 10 digits
    Seconds = 10,
    /// 13 digits
    Milliseconds = 13,
    /// 16 digits
    #[default]
    Microseconds = 16,
    /// 19 digits
    Nanoseconds = 19,
}

/// Constant of all the precisions.
/// This is what `Precision::all()` returns
const PRECISIONS: [Precision; 4] = [
    Precision::Seconds,
    Precision::Milliseconds,
    Precision::Microseconds,
    Precision::Nanoseconds,
];

impl Precision {
    /// Get every supported precision, coarsest first.
    pub fn all() -> [Precision; 4] {
        PRECISIONS
    }

    /// Map a requested slug length to its precision.
    ///
    /// ```
    /// use unique_slug::core::Precision;
    ///
    /// assert_eq!(Precision::Milliseconds, Precision::from_length(13).unwrap());
    /// assert!(Precision::from_length(12).is_err());
    /// ```
    pub fn from_length(length: i64) -> Result<Self, SlugError> {
        match length {
            10 => Ok(Precision::Seconds),
            13 => Ok(Precision::Milliseconds),
            16 => Ok(Precision::Microseconds),
            19 => Ok(Precision::Nanoseconds),
            _ => Err(SlugError::invalid_length(length)),
        }
    }

    /// Resolve an optional length, where absent means the default of 16.
    pub fn from_optional_length(length: Option<i64>) -> Result<Self, SlugError> {
        length.map_or(Ok(Precision::default()), Self::from_length)
    }

    /// Number of timestamp digits, which is also the
    /// number of letters in a slug of this precision.
    pub fn length(&self) -> usize {
        *self as usize
    }

    /// Length of a slug of this precision, separator included.
    pub fn slug_length(&self) -> usize {
        self.length() + 1
    }

    /// Index of the separator in a slug of this precision.
    pub fn separator_index(&self) -> usize {
        self.length() / 2
    }

    pub fn unit_name(&self) -> &'static str {
        match self {
            Precision::Seconds => "seconds",
            Precision::Milliseconds => "milliseconds",
            Precision::Microseconds => "microseconds",
            Precision::Nanoseconds => "nanoseconds",
        }
    }

    /// Count of whole units in a duration since the epoch.
    ///
    /// Computed in 128 bits, so the nanosecond count can't wrap.
    ///
    /// ```
    /// use std::time::Duration;
    /// use unique_slug::core::Precision;
    ///
    /// let since_epoch = Duration::new(1_700_000_000, 123_456_789);
    /// assert_eq!(1_700_000_000, Precision::Seconds.timestamp_value(since_epoch));
    /// assert_eq!(1_700_000_000_123, Precision::Milliseconds.timestamp_value(since_epoch));
    /// ```
    pub fn timestamp_value(&self, since_epoch: Duration) -> u128 {
        match self {
            Precision::Seconds => since_epoch.as_secs() as u128,
            Precision::Milliseconds => since_epoch.as_millis(),
            Precision::Microseconds => since_epoch.as_micros(),
            Precision::Nanoseconds => since_epoch.as_nanos(),
        }
    }

    /// Precision of a slug with `len` characters, separator included.
    pub(crate) fn from_slug_length(len: usize) -> Option<Self> {
        PRECISIONS.into_iter().find(|p| p.slug_length() == len)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.length(), self.unit_name())
    }
}

impl TryFrom<i64> for Precision {
    type Error = SlugError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Precision::from_length(value)
    }
}

impl From<Precision> for i64 {
    fn from(value: Precision) -> Self {
        value as i64
    }
}

/// Accepts either the digit count or a unit name.
///
/// A number outside {10, 13, 16, 19} is an `InvalidParameter`, anything
/// else that isn't a unit name is an `UnknownPrecision` holding the input.
///
/// ```
/// use unique_slug::core::Precision;
///
/// assert_eq!(Precision::Nanoseconds, "19".parse().unwrap());
/// assert_eq!(Precision::Nanoseconds, "ns".parse().unwrap());
/// assert_eq!(Precision::Seconds, "seconds".parse().unwrap());
/// ```
impl FromStr for Precision {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "s" | "sec" | "seconds" => Ok(Precision::Seconds),
            "ms" | "millis" | "milliseconds" => Ok(Precision::Milliseconds),
            "us" | "micros" | "microseconds" => Ok(Precision::Microseconds),
            "ns" | "nanos" | "nanoseconds" => Ok(Precision::Nanoseconds),
            other => match other.parse::<i64>() {
                Ok(length) => Precision::from_length(length),
                Err(_) => Err(SlugError::UnknownPrecision {
                    input: s.to_string(),
                    hint: LENGTH_HINT,
                }),
            },
        }
    }
}
