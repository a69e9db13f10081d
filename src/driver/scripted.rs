//! Scripted test double.
//!
//! [`ScriptedDriver`] answers each capability from a per-operation queue of
//! replies and records every call it receives. When a queue is empty the
//! operation's sticky reply is used, and failing that a neutral success
//! (empty text, absent attribute, `false`, no bytes).
//!
//! # Example
//!
//! ```ignore
//! let driver = Arc::new(ScriptedDriver::new());
//! driver.push(Operation::Text, Ok(Reply::text("Hello")));
//! driver.fail_always(Operation::Click, DriverError::StaleReference);
//!
//! let element = Element::builder()
//!     .driver(driver.clone())
//!     .session_url("session-1")
//!     .url("session-1/element/e1")
//!     .id("e1")
//!     .build()?;
//!
//! assert_eq!(element.text().await?, "Hello");
//! assert!(element.click().await.is_err());
//! assert_eq!(driver.call_count(Operation::Click), 1);
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::browser::{Element, KeyInput};
use crate::error::{DriverError, DriverResult};
use crate::identifiers::ElementId;

use super::{Driver, Operation};

// ============================================================================
// Constants
// ============================================================================

/// Error code reported when a scripted reply has the wrong payload kind.
const REPLY_MISMATCH: &str = "scripted reply mismatch";

// ============================================================================
// Reply
// ============================================================================

/// Success payload of a scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// No payload.
    Unit,
    /// Text payload.
    Text(String),
    /// Attribute payload.
    Attribute(Option<String>),
    /// Boolean payload.
    Bool(bool),
    /// Binary payload.
    Bytes(Vec<u8>),
}

impl Reply {
    /// Creates a text reply.
    #[inline]
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates an attribute reply with a present value.
    #[inline]
    #[must_use]
    pub fn attribute(value: impl Into<String>) -> Self {
        Self::Attribute(Some(value.into()))
    }

    /// Creates an attribute reply for an absent attribute.
    #[inline]
    #[must_use]
    pub fn absent() -> Self {
        Self::Attribute(None)
    }

    /// Returns the neutral success payload for an operation.
    #[must_use]
    pub fn neutral(operation: Operation) -> Self {
        match operation {
            Operation::Clear | Operation::Click | Operation::SetValue | Operation::SendKeys => {
                Self::Unit
            }
            Operation::Text => Self::Text(String::new()),
            Operation::Attribute => Self::Attribute(None),
            Operation::IsSelected | Operation::IsDisplayed => Self::Bool(false),
            Operation::Screenshot => Self::Bytes(Vec::new()),
        }
    }

    fn mismatch(self, operation: Operation) -> DriverError {
        DriverError::other(
            REPLY_MISMATCH,
            format!("{operation} cannot answer with {self:?}"),
        )
    }
}

// ============================================================================
// Call
// ============================================================================

/// Operation-specific input recorded with a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArgument {
    /// Attribute name.
    Name(String),
    /// Raw value.
    Value(String),
    /// Key sequence.
    Keys(Vec<KeyInput>),
}

/// One call received by a [`ScriptedDriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Capability invoked.
    pub operation: Operation,
    /// Element addressed.
    pub element_id: ElementId,
    /// Operation input, if any.
    pub argument: Option<CallArgument>,
}

// ============================================================================
// ScriptedDriver
// ============================================================================

/// Script state shared by all calls.
#[derive(Debug, Default)]
struct Script {
    queued: FxHashMap<Operation, VecDeque<DriverResult<Reply>>>,
    sticky: FxHashMap<Operation, DriverResult<Reply>>,
    calls: Vec<Call>,
}

/// [`Driver`] answering from scripted replies.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    script: Mutex<Script>,
}

impl ScriptedDriver {
    /// Creates a driver with no scripted replies.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply for the next call to `operation`.
    pub fn push(&self, operation: Operation, reply: DriverResult<Reply>) -> &Self {
        self.script
            .lock()
            .queued
            .entry(operation)
            .or_default()
            .push_back(reply);
        self
    }

    /// Sets the reply used whenever the queue for `operation` is empty.
    pub fn always(&self, operation: Operation, reply: DriverResult<Reply>) -> &Self {
        self.script.lock().sticky.insert(operation, reply);
        self
    }

    /// Queues one failure for the next call to `operation`.
    pub fn fail(&self, operation: Operation, failure: DriverError) -> &Self {
        self.push(operation, Err(failure))
    }

    /// Makes every call to `operation` fail.
    pub fn fail_always(&self, operation: Operation, failure: DriverError) -> &Self {
        self.always(operation, Err(failure))
    }

    /// Makes every operation fail with the same failure.
    pub fn fail_everything(&self, failure: DriverError) -> &Self {
        for operation in Operation::ALL {
            self.fail_always(operation, failure.clone());
        }
        self
    }

    /// Returns every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().calls.clone()
    }

    /// Returns the calls made to one operation, in order.
    #[must_use]
    pub fn calls_to(&self, operation: Operation) -> Vec<Call> {
        self.script
            .lock()
            .calls
            .iter()
            .filter(|call| call.operation == operation)
            .cloned()
            .collect()
    }

    /// Returns how many times `operation` was invoked.
    #[must_use]
    pub fn call_count(&self, operation: Operation) -> usize {
        self.script
            .lock()
            .calls
            .iter()
            .filter(|call| call.operation == operation)
            .count()
    }

    /// Forgets recorded calls, keeping the script.
    pub fn reset_calls(&self) {
        self.script.lock().calls.clear();
    }

    /// Records a call and pops its reply.
    fn answer(
        &self,
        operation: Operation,
        element: &Element,
        argument: Option<CallArgument>,
    ) -> DriverResult<Reply> {
        let mut script = self.script.lock();
        script.calls.push(Call {
            operation,
            element_id: element.id().clone(),
            argument,
        });

        if let Some(reply) = script
            .queued
            .get_mut(&operation)
            .and_then(VecDeque::pop_front)
        {
            return reply;
        }

        script
            .sticky
            .get(&operation)
            .cloned()
            .unwrap_or_else(|| Ok(Reply::neutral(operation)))
    }
}

// ============================================================================
// Driver Implementation
// ============================================================================

#[async_trait]
impl Driver for ScriptedDriver {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn clear(&self, element: &Element) -> DriverResult<()> {
        match self.answer(Operation::Clear, element, None)? {
            Reply::Unit => Ok(()),
            other => Err(other.mismatch(Operation::Clear)),
        }
    }

    async fn click(&self, element: &Element) -> DriverResult<()> {
        match self.answer(Operation::Click, element, None)? {
            Reply::Unit => Ok(()),
            other => Err(other.mismatch(Operation::Click)),
        }
    }

    async fn text(&self, element: &Element) -> DriverResult<String> {
        match self.answer(Operation::Text, element, None)? {
            Reply::Text(text) => Ok(text),
            other => Err(other.mismatch(Operation::Text)),
        }
    }

    async fn attribute(&self, element: &Element, name: &str) -> DriverResult<Option<String>> {
        let argument = Some(CallArgument::Name(name.to_string()));
        match self.answer(Operation::Attribute, element, argument)? {
            Reply::Attribute(value) => Ok(value),
            other => Err(other.mismatch(Operation::Attribute)),
        }
    }

    async fn is_selected(&self, element: &Element) -> DriverResult<bool> {
        match self.answer(Operation::IsSelected, element, None)? {
            Reply::Bool(selected) => Ok(selected),
            other => Err(other.mismatch(Operation::IsSelected)),
        }
    }

    async fn is_displayed(&self, element: &Element) -> DriverResult<bool> {
        match self.answer(Operation::IsDisplayed, element, None)? {
            Reply::Bool(displayed) => Ok(displayed),
            other => Err(other.mismatch(Operation::IsDisplayed)),
        }
    }

    async fn set_value(&self, element: &Element, value: &str) -> DriverResult<()> {
        let argument = Some(CallArgument::Value(value.to_string()));
        match self.answer(Operation::SetValue, element, argument)? {
            Reply::Unit => Ok(()),
            other => Err(other.mismatch(Operation::SetValue)),
        }
    }

    async fn send_keys(&self, element: &Element, keys: &[KeyInput]) -> DriverResult<()> {
        let argument = Some(CallArgument::Keys(keys.to_vec()));
        match self.answer(Operation::SendKeys, element, argument)? {
            Reply::Unit => Ok(()),
            other => Err(other.mismatch(Operation::SendKeys)),
        }
    }

    async fn screenshot(&self, element: &Element) -> DriverResult<Vec<u8>> {
        match self.answer(Operation::Screenshot, element, None)? {
            Reply::Bytes(bytes) => Ok(bytes),
            other => Err(other.mismatch(Operation::Screenshot)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_replies() {
        assert_eq!(Reply::neutral(Operation::Click), Reply::Unit);
        assert_eq!(Reply::neutral(Operation::Attribute), Reply::Attribute(None));
        assert_eq!(Reply::neutral(Operation::IsDisplayed), Reply::Bool(false));
    }

    #[test]
    fn test_mismatch_is_other_failure() {
        let failure = Reply::Bool(true).mismatch(Operation::Text);
        assert_eq!(failure.code(), Some(REPLY_MISMATCH));
    }

    #[test]
    fn test_script_starts_empty() {
        let driver = ScriptedDriver::new();
        assert!(driver.calls().is_empty());
        assert_eq!(driver.call_count(Operation::Clear), 0);
    }
}
