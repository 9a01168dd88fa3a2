//! Run-wide deadline
//!
//! A cooperative wall-clock bound, checked at file boundaries.

use std::time::{Duration, Instant};

use crate::core::model::CharfreqError;

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Duration,
}

impl Deadline {
    /// Start the clock now
    pub fn start(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    /// A zero limit is always exceeded.
    pub fn is_exceeded(&self) -> bool {
        self.started.elapsed() >= self.limit
    }

    pub fn check(&self) -> Result<(), CharfreqError> {
        if self.is_exceeded() {
            return Err(CharfreqError::Timeout { limit: self.limit });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_is_exceeded() {
        let deadline = Deadline::start(Duration::ZERO);
        assert!(deadline.is_exceeded());
        assert!(matches!(
            deadline.check(),
            Err(CharfreqError::Timeout { limit }) if limit == Duration::ZERO
        ));
    }

    #[test]
    fn test_generous_limit_passes() {
        let deadline = Deadline::start(Duration::from_secs(3600));
        assert!(deadline.check().is_ok());
        assert_eq!(deadline.limit, Duration::from_secs(3600));
    }

    #[test]
    fn test_exceeded_after_delay() {
        let deadline = Deadline::start(Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(20));
        assert!(deadline.check().is_err());
    }
}
