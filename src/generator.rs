use std::time::Duration;

use rand::{TryCryptoRng, rngs::OsRng};
use tracing::event;

use crate::core::{BucketEncoder, Clock, Digits, Precision, Slug, SlugError, SystemClock};

/// Reads the clock and turns the reading into a `Slug`.
///
/// A generator keeps no state between calls besides its clock and
/// rng, so two slugs generated within the same time unit share digits
/// (but almost certainly not letters).
#[derive(Debug)]
pub struct SlugGenerator<C: Clock = SystemClock, R: TryCryptoRng = OsRng> {
    precision: Precision,
    clock: C,
    rng: R,
}

/// The generator used by `generate_slug`: realtime clock
/// and the operating system's random source.
pub type DefaultSlugGenerator = SlugGenerator<SystemClock, OsRng>;

impl DefaultSlugGenerator {
    /// Start building a generator.
    pub fn builder() -> SlugGeneratorBuilder {
        SlugGeneratorBuilder::default()
    }
}

impl<C: Clock, R: TryCryptoRng> SlugGenerator<C, R> {
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Generate a slug for the current time.
    pub fn generate(&mut self) -> Result<Slug, SlugError> {
        let since_epoch = self.clock.now()?;
        self.generate_at(since_epoch)
    }

    /// Generate a slug for an explicit time since the Unix epoch.
    pub fn generate_at(&mut self, since_epoch: Duration) -> Result<Slug, SlugError> {
        let value = self.precision.timestamp_value(since_epoch);
        let digits = Digits::render(value, self.precision);
        let slug = Slug::assemble(&digits, &mut BucketEncoder::new(&mut self.rng))?;

        event!(
            tracing::Level::TRACE,
            precision = self.precision.length(),
            %slug,
            "Generated slug"
        );
        Ok(slug)
    }
}

/// # SlugGeneratorBuilder
///
/// Builder for a `SlugGenerator`. Every field is optional: the length
/// defaults to 16 (microseconds), the clock to `SystemClock` and the
/// rng to `OsRng`.
///
/// The length is only validated by `build`, before anything reads the
/// clock or the rng.
///
/// ## Examples
///
/// ```
/// use unique_slug::SlugGenerator;
///
/// let mut generator = SlugGenerator::builder().length(13).build().unwrap();
/// let slug = generator.generate().unwrap();
/// assert_eq!(14, slug.len());
/// ```
///
/// Swapping the clock and rng makes the output reproducible:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use unique_slug::SlugGenerator;
/// use unique_slug::core::FixedClock;
///
/// let build = || {
///     SlugGenerator::builder()
///         .length(10)
///         .clock(FixedClock::from_secs(1_700_000_000))
///         .rng(StdRng::seed_from_u64(420))
///         .build()
///         .unwrap()
/// };
/// assert_eq!(build().generate().unwrap(), build().generate().unwrap());
/// ```
#[derive(Debug)]
pub struct SlugGeneratorBuilder<C: Clock = SystemClock, R: TryCryptoRng = OsRng> {
    length: Option<i64>,
    clock: C,
    rng: R,
}

impl Default for SlugGeneratorBuilder {
    fn default() -> Self {
        Self {
            length: None,
            clock: SystemClock,
            rng: OsRng,
        }
    }
}

impl<C: Clock, R: TryCryptoRng> SlugGeneratorBuilder<C, R> {
    /// Requested slug length in digits. One of 10, 13, 16 or 19.
    pub fn length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    /// Same as `length` but already validated.
    pub fn precision(mut self, precision: Precision) -> Self {
        self.length = Some(i64::from(precision));
        self
    }

    pub fn clock<C2: Clock>(self, clock: C2) -> SlugGeneratorBuilder<C2, R> {
        SlugGeneratorBuilder {
            length: self.length,
            clock,
            rng: self.rng,
        }
    }

    pub fn rng<R2: TryCryptoRng>(self, rng: R2) -> SlugGeneratorBuilder<C, R2> {
        SlugGeneratorBuilder {
            length: self.length,
            clock: self.clock,
            rng,
        }
    }

    /// Validate the length and create the generator.
    ///
    /// @returns SlugError::InvalidParameter if the length isn't supported.
    pub fn build(self) -> Result<SlugGenerator<C, R>, SlugError> {
        let precision = Precision::from_optional_length(self.length).inspect_err(|e| {
            event!(tracing::Level::DEBUG, error = %e, "Rejected slug length");
        })?;

        Ok(SlugGenerator {
            precision,
            clock: self.clock,
            rng: self.rng,
        })
    }
}

/// Generate a slug for the current time.
///
/// `length` picks the precision and must be 10 (seconds),
/// 13 (milliseconds), 16 (microseconds) or 19 (nanoseconds). `None`
/// means 16. The result has `length + 1` characters, the extra one
/// being the `-` in the middle.
///
/// ```
/// let slug = unique_slug::generate_slug(None).unwrap();
/// assert_eq!(17, slug.len());
/// assert_eq!(Some('-'), slug.chars().nth(8));
///
/// assert!(unique_slug::generate_slug(Some(12)).is_err());
/// ```
pub fn generate_slug(length: Option<i64>) -> Result<String, SlugError> {
    let builder = SlugGenerator::builder();
    let builder = match length {
        Some(length) => builder.length(length),
        None => builder,
    };
    builder.build()?.generate().map(Slug::into_string)
}
