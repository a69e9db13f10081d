//! Protocol driver options.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use remote_element::DriverOptions;
//!
//! let options = DriverOptions::new().with_command_timeout(Duration::from_secs(5));
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for one element command.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// DriverOptions
// ============================================================================

/// Configuration for [`ProtocolDriver`](super::ProtocolDriver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// Deadline for one command round trip.
    pub command_timeout: Duration,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }
}

impl DriverOptions {
    /// Creates options with default values.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command timeout.
    #[inline]
    #[must_use]
    pub fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Returns the command timeout in whole milliseconds.
    #[inline]
    #[must_use]
    pub fn command_timeout_ms(&self) -> u64 {
        u64::try_from(self.command_timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the command timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.command_timeout.is_zero() {
            return Err(Error::config("command timeout must be greater than zero"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DriverOptions::default();
        assert_eq!(options.command_timeout, DEFAULT_COMMAND_TIMEOUT);
        assert_eq!(options.command_timeout_ms(), 30_000);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let options = DriverOptions::new().with_command_timeout(Duration::ZERO);
        let err = options.validate().expect_err("zero timeout");
        assert!(matches!(err, Error::Config { .. }));
    }
}
