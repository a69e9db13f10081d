//! Element command protocol message types.
//!
//! Defines what [`ProtocolDriver`](crate::driver::ProtocolDriver) hands to
//! its [`Transport`](crate::transport::Transport).
//!
//! | Message Type | Direction | Purpose |
//! |--------------|-----------|---------|
//! | `Request` | Local → Remote | One element command |
//! | `Response` | Remote → Local | Result or error code |

// ============================================================================
// Submodules
// ============================================================================

/// Element command definitions.
pub mod command;

/// Request and Response message types.
pub mod request;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::ElementCommand;
pub use request::{
    INVALID_SELECTOR, Request, Response, ResponseType, STALE_ELEMENT_REFERENCE, translate_error,
};
