use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::SlugError;

/// Source of the current wall-clock time.
///
/// Implementations return the time elapsed since the Unix epoch
/// and are read once per generated slug.
pub trait Clock {
    fn now(&self) -> Result<Duration, SlugError>;
}

/// The system realtime clock. No caching, every call re-reads it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<Duration, SlugError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| SlugError::ClockUnavailable(e.to_string()))
    }
}

/// A clock that is stopped at one instant.
///
/// ```
/// use std::time::Duration;
/// use unique_slug::core::{Clock, FixedClock};
///
/// let clock = FixedClock::from_secs(1_700_000_000);
/// assert_eq!(Duration::from_secs(1_700_000_000), clock.now().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Duration);

impl FixedClock {
    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<Duration, SlugError> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Result<Duration, SlugError> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2023() {
        let now = SystemClock.now().unwrap();
        assert!(now.as_secs() > 1_700_000_000);
    }

    #[test]
    fn test_system_clock_rereads() {
        let a = SystemClock.now().unwrap();
        std::thread::sleep(Duration::from_millis(2));
        let b = SystemClock.now().unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_fixed_clock_by_reference() {
        let clock = FixedClock(Duration::new(5, 6));
        let by_ref = &clock;
        assert_eq!(Duration::new(5, 6), by_ref.now().unwrap());
    }
}
