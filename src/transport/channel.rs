//! Channel-backed transport.
//!
//! Requests are pushed onto an unbounded mpsc channel together with a
//! oneshot sender for the reply. Whatever owns the receiving half (an
//! embedded engine, a bridge task, a test) answers each
//! [`PendingRequest`] exactly once.
//!
//! A request stays queued after its caller gives up (timeout, dropped
//! future). Answering loops should skip requests whose
//! [`is_abandoned`](PendingRequest::is_abandoned) is `true` rather than
//! perform the action.
//!
//! # Example
//!
//! ```ignore
//! let (transport, mut requests) = ChannelTransport::new();
//!
//! tokio::spawn(async move {
//!     while let Some(pending) = requests.recv().await {
//!         if pending.is_abandoned() {
//!             continue;
//!         }
//!         let id = pending.request.id;
//!         pending.respond(Response::success(id, json!({ "value": null })));
//!     }
//! });
//!
//! let driver = ProtocolDriver::new(transport);
//! ```

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::trace;

use crate::error::{DriverError, DriverResult};
use crate::protocol::{Request, Response};

use super::Transport;

// ============================================================================
// PendingRequest
// ============================================================================

/// A request waiting for its reply.
#[derive(Debug)]
pub struct PendingRequest {
    /// The request to answer.
    pub request: Request,
    /// Reply channel.
    reply_tx: oneshot::Sender<Response>,
}

impl PendingRequest {
    /// Returns `true` if the caller is no longer waiting for the reply.
    #[inline]
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.reply_tx.is_closed()
    }

    /// Sends the reply.
    ///
    /// The reply is dropped silently if the caller stopped waiting.
    pub fn respond(self, response: Response) {
        let _ = self.reply_tx.send(response);
    }
}

// ============================================================================
// ChannelTransport
// ============================================================================

/// In-process [`Transport`] over tokio channels.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    request_tx: mpsc::UnboundedSender<PendingRequest>,
}

impl ChannelTransport {
    /// Creates a transport and the receiver the remote end reads from.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingRequest>) {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        (Self { request_tx }, request_rx)
    }
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, request: Request) -> DriverResult<Response> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let request_id = request.id;

        trace!(request_id = %request_id, method = request.method(), "Queueing request");

        self.request_tx
            .send(PendingRequest { request, reply_tx })
            .map_err(|_| DriverError::other("connection closed", "request channel closed"))?;

        reply_rx.await.map_err(|_| {
            DriverError::other(
                "connection closed",
                format!("request {request_id} dropped without a response"),
            )
        })
    }
}
