//! unique_slug builds short, human friendly identifiers out of the
//! current time.
//!
//! The timestamp is rendered as 10, 13, 16 or 19 decimal digits
//! (seconds, milliseconds, microseconds or nanoseconds). Each digit is
//! then replaced by a letter picked at random, using a secure random
//! source, from a bucket of 5 or 6 letters reserved for that digit.
//! A `-` splits the result in two halves.
//!
//! ```
//! let slug = unique_slug::generate_slug(Some(10)).unwrap();
//! assert_eq!(11, slug.len());
//! ```
//!
//! Two slugs are only guaranteed different when they come from
//! different time units. Within one unit the letters still differ with
//! high probability.

/// The encoding pipeline. Everything in core is independent of
/// where the time and randomness come from.
pub mod core;

/// Generator and the `generate_slug` entry point.
mod generator;
pub use self::generator::{DefaultSlugGenerator, SlugGenerator, SlugGeneratorBuilder, generate_slug};

/// JSON configuration.
#[cfg(feature = "serde")]
pub mod config;
#[cfg(feature = "serde")]
pub use self::config::SlugConfig;

pub use self::core::{Precision, Slug, SlugError};
