//! This is the core module. It holds the encoding pipeline:
//! clock, precision, digits, buckets, and slug assembly.

/// The ten digit buckets.
mod bucket;
/// Export `DigitBucket`
pub use self::bucket::DigitBucket;

/// Supported timestamp precisions.
mod precision;
/// Export `Precision`
pub use self::precision::Precision;

/// Wall-clock sources.
mod clock;
/// Export the trait and the implementations.
pub use self::clock::{Clock, FixedClock, SystemClock};

/// Fixed width decimal rendering.
mod digits;
pub use self::digits::Digits;

/// Random letter selection.
pub(crate) mod encoder;
pub use self::encoder::BucketEncoder;

/// The slug type and its assembly.
mod slug;
pub use self::slug::{SEPARATOR, Slug};

/// Errors for the whole crate.
mod error;
pub use self::error::{ConfigError, LENGTH_HINT, SlugError};
