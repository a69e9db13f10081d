//! Driver capability contract.
//!
//! A backend becomes usable by [`Element`] by implementing [`Driver`]: one
//! physical action per element operation, each reporting either a payload or
//! a [`DriverError`] tag. Calls are independent; whatever network I/O,
//! retries or timeouts a backend performs stay inside it.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Driver`] | The capability trait |
//! | [`Operation`] | Catalogue of capabilities |
//! | [`ProtocolDriver`] | Backend encoding capabilities as protocol commands |
//! | [`ScriptedDriver`] | Test double with queued replies and a call log |
//! | [`DriverOptions`] | Protocol driver configuration |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use async_trait::async_trait;

use crate::browser::{Element, KeyInput};
use crate::error::{DriverError, DriverResult};

// ============================================================================
// Submodules
// ============================================================================

/// Protocol driver configuration.
pub mod options;

/// Backend that speaks the element command protocol.
pub mod protocol;

/// Scripted test double.
pub mod scripted;

// ============================================================================
// Re-exports
// ============================================================================

pub use options::DriverOptions;
pub use protocol::ProtocolDriver;
pub use scripted::{Call, CallArgument, Reply, ScriptedDriver};

// ============================================================================
// Operation
// ============================================================================

/// The capabilities a driver provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Clear the element's value.
    Clear,
    /// Click the element.
    Click,
    /// Read the element's visible text.
    Text,
    /// Read one attribute.
    Attribute,
    /// Read the selected state.
    IsSelected,
    /// Read the displayed state.
    IsDisplayed,
    /// Write a raw value.
    SetValue,
    /// Type a key sequence.
    SendKeys,
    /// Capture an image of the element.
    Screenshot,
}

impl Operation {
    /// All operations, in contract order.
    pub const ALL: [Operation; 9] = [
        Operation::Clear,
        Operation::Click,
        Operation::Text,
        Operation::Attribute,
        Operation::IsSelected,
        Operation::IsDisplayed,
        Operation::SetValue,
        Operation::SendKeys,
        Operation::Screenshot,
    ];

    /// Returns the operation name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Clear => "clear",
            Operation::Click => "click",
            Operation::Text => "text",
            Operation::Attribute => "attribute",
            Operation::IsSelected => "is_selected",
            Operation::IsDisplayed => "is_displayed",
            Operation::SetValue => "set_value",
            Operation::SendKeys => "send_keys",
            Operation::Screenshot => "screenshot",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Backend implementation behind an [`Element`].
///
/// Each method addresses the element passed in and performs exactly one
/// physical action.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Short backend name, used in debug output.
    fn name(&self) -> &str {
        "driver"
    }

    /// Clears the element's value.
    ///
    /// May report [`DriverError::StaleReference`] or
    /// [`DriverError::InvalidSelector`].
    async fn clear(&self, element: &Element) -> DriverResult<()>;

    /// Clicks the element.
    async fn click(&self, element: &Element) -> DriverResult<()>;

    /// Reads the element's visible text.
    async fn text(&self, element: &Element) -> DriverResult<String>;

    /// Reads an attribute; `None` when the attribute is absent.
    async fn attribute(&self, element: &Element, name: &str) -> DriverResult<Option<String>>;

    /// Reads whether the element is selected.
    async fn is_selected(&self, element: &Element) -> DriverResult<bool>;

    /// Reads whether the element is displayed.
    async fn is_displayed(&self, element: &Element) -> DriverResult<bool>;

    /// Writes a raw value into the element.
    async fn set_value(&self, element: &Element, value: &str) -> DriverResult<()>;

    /// Types a key sequence into the element.
    async fn send_keys(&self, element: &Element, keys: &[KeyInput]) -> DriverResult<()>;

    /// Captures a PNG image of the element.
    async fn screenshot(&self, _element: &Element) -> DriverResult<Vec<u8>> {
        Err(DriverError::unsupported(Operation::Screenshot.as_str()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_are_unique() {
        let mut names: Vec<_> = Operation::ALL.iter().map(|op| op.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn test_driver_is_object_safe() {
        fn assert_object_safe(_: Option<&dyn Driver>) {}
        assert_object_safe(None);
    }
}
