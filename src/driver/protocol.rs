//! Protocol-backed driver.
//!
//! Encodes every capability as an [`ElementCommand`], sends it through a
//! [`Transport`] under the configured deadline and decodes the result
//! payload. Error codes are translated by
//! [`Response::into_capability`](crate::protocol::Response::into_capability).

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as Base64Standard;
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, trace};

use crate::browser::{Element, KeyInput};
use crate::error::{DriverError, DriverResult, Result};
use crate::protocol::{ElementCommand, Request};
use crate::transport::Transport;

use super::{Driver, DriverOptions};

// ============================================================================
// Constants
// ============================================================================

/// Error code used when a payload does not have the expected shape.
const INVALID_RESPONSE: &str = "invalid response";

// ============================================================================
// ProtocolDriver
// ============================================================================

/// [`Driver`] that speaks the element command protocol over a transport.
#[derive(Debug)]
pub struct ProtocolDriver<T> {
    transport: T,
    options: DriverOptions,
}

impl<T: Transport> ProtocolDriver<T> {
    /// Creates a driver with default options.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            options: DriverOptions::default(),
        }
    }

    /// Creates a driver with custom options.
    ///
    /// # Errors
    ///
    /// [`Error::Config`](crate::Error::Config) if the options are invalid.
    pub fn with_options(transport: T, options: DriverOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { transport, options })
    }

    /// Returns the driver options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// Sends one command for `element` and returns the result payload.
    async fn execute(&self, element: &Element, command: ElementCommand) -> DriverResult<Value> {
        let request = Request::new(element, command);
        let request_id = request.id;
        let method = request.method();

        trace!(request_id = %request_id, element_id = %element.id(), method, "Sending element command");

        let response = match timeout(self.options.command_timeout, self.transport.send(request)).await
        {
            Ok(response) => response?,
            Err(_) => {
                return Err(DriverError::timeout(
                    method,
                    self.options.command_timeout_ms(),
                ));
            }
        };

        if response.id != request_id {
            return Err(DriverError::other(
                "protocol error",
                format!("expected response {request_id}, got {}", response.id),
            ));
        }

        response.into_capability().inspect_err(|failure| {
            debug!(request_id = %request_id, method, failure = %failure, "Element command failed");
        })
    }

    /// Sends a command whose result carries no payload.
    async fn execute_unit(&self, element: &Element, command: ElementCommand) -> DriverResult<()> {
        self.execute(element, command).await.map(|_| ())
    }
}

// ============================================================================
// Payload Decoding
// ============================================================================

/// Returns the `value` field of a result, or the result itself.
fn value_of(result: Value) -> Value {
    match result {
        Value::Object(mut map) if map.contains_key("value") => {
            map.remove("value").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn invalid_response(method: &str, expected: &str, got: &Value) -> DriverError {
    DriverError::other(
        INVALID_RESPONSE,
        format!("{method} expected {expected}, got {got}"),
    )
}

// ============================================================================
// Driver Implementation
// ============================================================================

#[async_trait]
impl<T: Transport> Driver for ProtocolDriver<T> {
    fn name(&self) -> &str {
        "protocol"
    }

    async fn clear(&self, element: &Element) -> DriverResult<()> {
        self.execute_unit(element, ElementCommand::Clear).await
    }

    async fn click(&self, element: &Element) -> DriverResult<()> {
        self.execute_unit(element, ElementCommand::Click).await
    }

    async fn text(&self, element: &Element) -> DriverResult<String> {
        let command = ElementCommand::GetText;
        let method = command.method();
        match value_of(self.execute(element, command).await?) {
            Value::String(text) => Ok(text),
            other => Err(invalid_response(method, "a string", &other)),
        }
    }

    async fn attribute(&self, element: &Element, name: &str) -> DriverResult<Option<String>> {
        let command = ElementCommand::GetAttribute {
            name: name.to_string(),
        };
        let method = command.method();
        match value_of(self.execute(element, command).await?) {
            Value::String(value) => Ok(Some(value)),
            Value::Null => Ok(None),
            other => Err(invalid_response(method, "a string or null", &other)),
        }
    }

    async fn is_selected(&self, element: &Element) -> DriverResult<bool> {
        let command = ElementCommand::IsSelected;
        let method = command.method();
        match value_of(self.execute(element, command).await?) {
            Value::Bool(selected) => Ok(selected),
            other => Err(invalid_response(method, "a boolean", &other)),
        }
    }

    async fn is_displayed(&self, element: &Element) -> DriverResult<bool> {
        let command = ElementCommand::IsDisplayed;
        let method = command.method();
        match value_of(self.execute(element, command).await?) {
            Value::Bool(displayed) => Ok(displayed),
            other => Err(invalid_response(method, "a boolean", &other)),
        }
    }

    async fn set_value(&self, element: &Element, value: &str) -> DriverResult<()> {
        let command = ElementCommand::SetValue {
            value: value.to_string(),
        };
        self.execute_unit(element, command).await
    }

    async fn send_keys(&self, element: &Element, keys: &[KeyInput]) -> DriverResult<()> {
        self.execute_unit(element, ElementCommand::send_keys(keys))
            .await
    }

    async fn screenshot(&self, element: &Element) -> DriverResult<Vec<u8>> {
        let command = ElementCommand::Screenshot;
        let method = command.method();
        let result = self.execute(element, command).await?;

        let data = result
            .get("data")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid_response(method, "a data field", &result))?;

        Base64Standard.decode(data).map_err(|e| {
            DriverError::other(INVALID_RESPONSE, format!("failed to decode base64: {e}"))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
