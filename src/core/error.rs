use thiserror::Error;

/// Hint attached to every rejected slug length.
pub const LENGTH_HINT: &str = "10=seconds, 13=milliseconds, 16=microseconds, 19=nanoseconds";

/// This is the core error type for the unique_slug
/// library. It uses `thiserror` to provide
/// readable error messages.
///
/// Every variant is terminal for the call that produced it.
/// No partial slug is ever returned alongside an error.
#[derive(Error, Debug)]
pub enum SlugError {
    #[error("slug_length must be 10, 13, 16, or 19 (got {value}); {hint}")]
    InvalidParameter { value: i64, hint: &'static str },
    #[error("secure random source failed while encoding digit {position}: {reason}")]
    RandomSourceUnavailable { position: usize, reason: String },
    #[error("unknown precision {input:?}; use a length or a unit name ({hint})")]
    UnknownPrecision { input: String, hint: &'static str },
    #[error("unable to read the system clock: {0}")]
    ClockUnavailable(String),
    #[error("malformed slug {slug:?}: {reason}")]
    MalformedSlug { slug: String, reason: &'static str },
    #[error("unable to load slug configuration: {0}")]
    Config(#[from] ConfigError),
}

impl SlugError {
    /// Build the error returned for any length outside {10, 13, 16, 19}.
    pub fn invalid_length(value: i64) -> Self {
        SlugError::InvalidParameter {
            value,
            hint: LENGTH_HINT,
        }
    }

    pub(crate) fn malformed(slug: &str, reason: &'static str) -> Self {
        SlugError::MalformedSlug {
            slug: slug.to_string(),
            reason,
        }
    }
}

/// Failures reading or parsing a `SlugConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
