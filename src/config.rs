use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Precision, SlugError};

/// Persisted generator settings.
///
/// ```json
/// { "length": 13 }
/// ```
///
/// A missing `length` means the default of 16. The value is kept as
/// written and validated by `precision()`, so an unsupported length
/// reports the same `InvalidParameter` as any other caller would get.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlugConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
}

impl SlugConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SlugError> {
        serde_json::from_str(json).map_err(|e| ConfigError::from(e).into())
    }

    /// Read a JSON config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SlugError> {
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_json_str(&contents)
    }

    /// The configured precision.
    pub fn precision(&self) -> Result<Precision, SlugError> {
        Precision::from_optional_length(self.length)
    }
}
