//! Remote Element - backend-agnostic element handles for browser automation.
//!
//! This library gives page-object and test code one small vocabulary for
//! acting on a located UI element, whatever automation backend performs the
//! actions.
//!
//! # Architecture
//!
//! Two pieces collaborate:
//!
//! - **Driver** ([`Driver`]): a backend performs one physical action per
//!   call and reports a payload or a [`DriverError`] tag
//! - **Element** ([`Element`]): an immutable handle that dispatches to its
//!   bound driver, translates the result and returns itself for chaining
//!
//! Key design principles:
//!
//! - One driver call per operation; `fill_in` composes `clear` + `set_value`
//! - A stale element is reported as [`Error::StaleReference`], never retried
//! - `is_selected` / `is_visible` read any failure as `false`
//! - `set_value` / `send_keys` pass non-stale failures through untranslated
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use remote_element::{ChannelTransport, Element, Key, ProtocolDriver, Result};
//!
//! # async fn example() -> Result<()> {
//! let (transport, _requests) = ChannelTransport::new();
//! let driver = Arc::new(ProtocolDriver::new(transport));
//!
//! let input = Element::builder()
//!     .driver(driver)
//!     .session_url("http://localhost:4444/session/abc")
//!     .url("http://localhost:4444/session/abc/element/e1")
//!     .id("e1")
//!     .build()?;
//!
//! input.fill_in("ada@example.com").await?.send_keys(Key::Enter).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`browser`] | [`Element`] and its input types |
//! | [`driver`] | [`Driver`] contract and backends |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | Element command messages |
//! | [`transport`] | Delivery seam for the protocol driver |

// ============================================================================
// Modules
// ============================================================================

/// Element handle and input types.
pub mod browser;

/// Driver capability contract and backends.
pub mod driver;

/// Error types and result aliases.
pub mod error;

/// Type-safe identifiers.
pub mod identifiers;

/// Element command protocol messages.
pub mod protocol;

/// Transport seam for the protocol driver.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Browser types
pub use browser::{
    Element, ElementBuilder, ImageFormat, InputValue, Key, KeyInput, Keys, Parent, Screenshot,
};

// Driver types
pub use driver::{
    Call, CallArgument, Driver, DriverOptions, Operation, ProtocolDriver, Reply, ScriptedDriver,
};

// Error types
pub use error::{DriverError, DriverResult, Error, Result};

// Identifier types
pub use identifiers::{ElementId, RequestId};

// Transport types
pub use transport::{ChannelTransport, PendingRequest, Transport};
