//! Transport seam for the protocol driver.
//!
//! The element layer does not own a wire. [`ProtocolDriver`] encodes each
//! capability as a [`Request`] and hands it to a [`Transport`], which is
//! responsible for delivering it and returning the matching [`Response`].
//!
//! | Implementation | Description |
//! |----------------|-------------|
//! | [`ChannelTransport`] | In-process mpsc/oneshot pair, for embedded engines and tests |
//!
//! [`ProtocolDriver`]: crate::driver::ProtocolDriver

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::error::DriverResult;
use crate::protocol::{Request, Response};

// ============================================================================
// Submodules
// ============================================================================

/// Channel-backed transport.
pub mod channel;

// ============================================================================
// Re-exports
// ============================================================================

pub use channel::{ChannelTransport, PendingRequest};

// ============================================================================
// Transport
// ============================================================================

/// Delivers one request and returns its response.
///
/// Connection failures are reported as
/// [`DriverError::Other`](crate::DriverError::Other).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and waits for its response.
    async fn send(&self, request: Request) -> DriverResult<Response>;
}
