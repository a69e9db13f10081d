//! Error types for remote element interaction.
//!
//! Two layers of failure exist:
//!
//! - [`DriverError`] is the closed set of failure tags a backend reports
//!   through [`DriverResult`]. It is the only information a backend passes
//!   back to the element layer.
//! - [`enum@Error`] is what [`Element`](crate::Element) operations surface
//!   to callers after translating the driver's tag.
//!
//! # Usage
//!
//! ```ignore
//! use remote_element::{Error, Result};
//!
//! async fn submit(button: &Element) -> Result<()> {
//!     match button.click().await {
//!         Ok(_) => Ok(()),
//!         Err(Error::StaleReference { .. }) => {
//!             // re-run the lookup and try again at the page layer
//!             Ok(())
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Element | [`Error::StaleReference`], [`Error::InvalidSelector`] |
//! | Driver | [`Error::Driver`], [`Error::UnexpectedFailure`] |
//! | External | [`Error::Io`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;

use crate::identifiers::ElementId;

// ============================================================================
// Result Aliases
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

/// Capability result returned by every [`Driver`](crate::Driver) operation.
pub type DriverResult<T> = StdResult<T, DriverError>;

// ============================================================================
// DriverError
// ============================================================================

/// Failure tag reported by a backend for a single capability call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// The addressed element no longer exists in the DOM.
    #[error("stale element reference")]
    StaleReference,

    /// The element's addressing is structurally invalid for this backend.
    #[error("invalid selector")]
    InvalidSelector,

    /// Any other backend failure, kept verbatim.
    #[error("{code}: {message}")]
    Other {
        /// Backend error code.
        code: String,
        /// Backend error message.
        message: String,
    },
}

impl DriverError {
    /// Creates a backend-specific failure.
    #[inline]
    pub fn other(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Other {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates the failure reported for capabilities a backend lacks.
    #[inline]
    pub fn unsupported(operation: &str) -> Self {
        Self::other(
            "unsupported operation",
            format!("{operation} is not supported by this driver"),
        )
    }

    /// Creates the failure reported when a command exceeds its deadline.
    #[inline]
    pub fn timeout(operation: &str, timeout_ms: u64) -> Self {
        Self::other(
            "timeout",
            format!("{operation} timed out after {timeout_ms}ms"),
        )
    }

    /// Returns `true` for [`DriverError::StaleReference`].
    #[inline]
    #[must_use]
    pub fn is_stale_reference(&self) -> bool {
        matches!(self, Self::StaleReference)
    }

    /// Returns the backend error code, if this is [`DriverError::Other`].
    #[inline]
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Other { code, .. } => Some(code),
            _ => None,
        }
    }
}

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type surfaced by element operations.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when an element handle or driver is built with missing or
    /// invalid settings.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Element Errors
    // ========================================================================
    /// The element is no longer attached to the page.
    ///
    /// The handle is dead: every further operation fails the same way until
    /// the caller looks the element up again.
    #[error("Stale element reference: {element_id}")]
    StaleReference {
        /// ID of the stale element.
        element_id: ElementId,
    },

    /// The element's addressing cannot be used by the backend.
    ///
    /// Only surfaced by `clear`.
    #[error("Invalid selector for element: {element_id}")]
    InvalidSelector {
        /// ID of the element.
        element_id: ElementId,
    },

    // ========================================================================
    // Driver Errors
    // ========================================================================
    /// Untranslated driver failure.
    ///
    /// Returned by `set_value` and `send_keys` for every failure other than
    /// a stale reference.
    #[error("Driver error: {0}")]
    Driver(DriverError),

    /// Driver reported a failure an operation does not expect.
    #[error("Unexpected driver failure during {operation} on {element_id}: {failure}")]
    UnexpectedFailure {
        /// Element operation that was running.
        operation: &'static str,
        /// Element that was addressed.
        element_id: ElementId,
        /// Failure reported by the driver.
        failure: DriverError,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a stale reference error.
    #[inline]
    pub fn stale_reference(element_id: ElementId) -> Self {
        Self::StaleReference { element_id }
    }

    /// Creates an invalid selector error.
    #[inline]
    pub fn invalid_selector(element_id: ElementId) -> Self {
        Self::InvalidSelector { element_id }
    }

    /// Wraps a driver failure without translating it.
    #[inline]
    pub fn driver(failure: DriverError) -> Self {
        Self::Driver(failure)
    }

    /// Creates an unexpected failure error.
    #[inline]
    pub fn unexpected_failure(
        operation: &'static str,
        element_id: ElementId,
        failure: DriverError,
    ) -> Self {
        Self::UnexpectedFailure {
            operation,
            element_id,
            failure,
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a stale reference error.
    #[inline]
    #[must_use]
    pub fn is_stale_reference(&self) -> bool {
        matches!(self, Self::StaleReference { .. })
    }

    /// Returns `true` if this is an invalid selector error.
    #[inline]
    #[must_use]
    pub fn is_invalid_selector(&self) -> bool {
        matches!(self, Self::InvalidSelector { .. })
    }

    /// Returns `true` if this is an element error.
    #[inline]
    #[must_use]
    pub fn is_element_error(&self) -> bool {
        matches!(
            self,
            Self::StaleReference { .. } | Self::InvalidSelector { .. }
        )
    }

    /// Returns `true` if a fresh lookup of the element may succeed.
    ///
    /// Retrying on the same handle never helps.
    #[inline]
    #[must_use]
    pub fn requires_reacquire(&self) -> bool {
        self.is_stale_reference()
    }

    /// Returns the raw driver failure carried by this error, if any.
    #[must_use]
    pub fn driver_failure(&self) -> Option<&DriverError> {
        match self {
            Self::Driver(failure) | Self::UnexpectedFailure { failure, .. } => Some(failure),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::ErrorKind;

    #[test]
    fn test_error_display() {
        let err = Error::stale_reference(ElementId::new("e-1"));
        assert_eq!(err.to_string(), "Stale element reference: e-1");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("driver is required");
        assert_eq!(err.to_string(), "Configuration error: driver is required");
    }

    #[test]
    fn test_element_kinds_are_distinct() {
        let stale = Error::stale_reference(ElementId::new("e-1"));
        let invalid = Error::invalid_selector(ElementId::new("e-1"));

        assert!(stale.is_stale_reference());
        assert!(!stale.is_invalid_selector());
        assert!(invalid.is_invalid_selector());
        assert!(!invalid.is_stale_reference());
        assert!(stale.is_element_error());
        assert!(invalid.is_element_error());
    }

    #[test]
    fn test_requires_reacquire() {
        assert!(Error::stale_reference(ElementId::new("e")).requires_reacquire());
        assert!(!Error::invalid_selector(ElementId::new("e")).requires_reacquire());
        assert!(!Error::config("x").requires_reacquire());
    }

    #[test]
    fn test_driver_failure_accessor() {
        let failure = DriverError::other("element not interactable", "hidden");
        let err = Error::driver(failure.clone());
        assert_eq!(err.driver_failure(), Some(&failure));
        assert!(!err.is_element_error());

        let err = Error::unexpected_failure("click", ElementId::new("e"), failure.clone());
        assert_eq!(err.driver_failure(), Some(&failure));
        assert!(Error::config("x").driver_failure().is_none());
    }

    #[test]
    fn test_driver_error_display_and_code() {
        let failure = DriverError::other("timeout", "took too long");
        assert_eq!(failure.to_string(), "timeout: took too long");
        assert_eq!(failure.code(), Some("timeout"));
        assert_eq!(DriverError::StaleReference.code(), None);
        assert!(DriverError::StaleReference.is_stale_reference());
    }

    #[test]
    fn test_unsupported_and_timeout() {
        assert_eq!(
            DriverError::unsupported("screenshot").code(),
            Some("unsupported operation")
        );
        assert_eq!(
            DriverError::timeout("element.click", 500).to_string(),
            "timeout: element.click timed out after 500ms"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = IoError::new(ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
