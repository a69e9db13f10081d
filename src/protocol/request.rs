//! Request and Response message types.
//!
//! A request addresses one element inside one session and carries one
//! [`ElementCommand`]. The response either carries a result or an error
//! code; error codes are translated into [`DriverError`] tags here and
//! nowhere else.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::browser::Element;
use crate::error::{DriverError, DriverResult};
use crate::identifiers::{ElementId, RequestId};

use super::ElementCommand;

// ============================================================================
// Constants
// ============================================================================

/// Error code reported when the element is no longer attached.
pub const STALE_ELEMENT_REFERENCE: &str = "stale element reference";

/// Error code reported when the element's addressing is invalid.
pub const INVALID_SELECTOR: &str = "invalid selector";

// ============================================================================
// Request
// ============================================================================

/// A command request addressed to one element.
///
/// # Format
///
/// ```json
/// {
///   "id": "uuid",
///   "sessionUrl": "http://localhost:4444/session/abc",
///   "elementUrl": "http://localhost:4444/session/abc/element/e1",
///   "elementId": "e1",
///   "method": "element.click",
///   "params": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// Unique identifier for request/response correlation.
    pub id: RequestId,

    /// Session owning the element.
    #[serde(rename = "sessionUrl")]
    pub session_url: String,

    /// Element address within the session.
    #[serde(rename = "elementUrl")]
    pub element_url: String,

    /// Backend element identifier.
    #[serde(rename = "elementId")]
    pub element_id: ElementId,

    /// Command with method and params.
    #[serde(flatten)]
    pub command: ElementCommand,
}

impl Request {
    /// Creates a request for `element` with an auto-generated ID.
    #[must_use]
    pub fn new(element: &Element, command: ElementCommand) -> Self {
        Self {
            id: RequestId::generate(),
            session_url: element.session_url().to_string(),
            element_url: element.url().to_string(),
            element_id: element.id().clone(),
            command,
        }
    }

    /// Returns the protocol method name.
    #[inline]
    #[must_use]
    pub fn method(&self) -> &'static str {
        self.command.method()
    }
}

// ============================================================================
// Response
// ============================================================================

/// A response to a [`Request`].
///
/// # Format
///
/// Success:
/// ```json
/// { "id": "uuid", "type": "success", "result": { "value": ... } }
/// ```
///
/// Error:
/// ```json
/// { "id": "uuid", "type": "error", "error": "stale element reference", "message": "..." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Matches the request `id`.
    pub id: RequestId,

    /// Response type.
    #[serde(rename = "type")]
    pub response_type: ResponseType,

    /// Result data (if success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error code (if error).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Error message (if error).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Response {
    /// Creates a success response.
    #[must_use]
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            id,
            response_type: ResponseType::Success,
            result: Some(result),
            error: None,
            message: None,
        }
    }

    /// Creates an error response.
    #[must_use]
    pub fn error(id: RequestId, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            response_type: ResponseType::Error,
            result: None,
            error: Some(code.into()),
            message: Some(message.into()),
        }
    }

    /// Returns `true` if this is a success response.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response_type == ResponseType::Success
    }

    /// Returns `true` if this is an error response.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.response_type == ResponseType::Error
    }

    /// Extracts the result value, translating an error response.
    ///
    /// # Errors
    ///
    /// The [`DriverError`] tag matching the response's error code.
    pub fn into_capability(self) -> DriverResult<Value> {
        match self.response_type {
            ResponseType::Success => Ok(self.result.unwrap_or(Value::Null)),
            ResponseType::Error => {
                let code = self.error.unwrap_or_else(|| "unknown error".to_string());
                Err(translate_error(&code, self.message))
            }
        }
    }
}

// ============================================================================
// ResponseType
// ============================================================================

/// Response type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Successful response.
    Success,
    /// Error response.
    Error,
}

// ============================================================================
// Error Translation
// ============================================================================

/// Maps a protocol error code to a capability failure tag.
#[must_use]
pub fn translate_error(code: &str, message: Option<String>) -> DriverError {
    match code {
        STALE_ELEMENT_REFERENCE => DriverError::StaleReference,
        INVALID_SELECTOR => DriverError::InvalidSelector,
        _ => {
            let message = message.unwrap_or_else(|| code.to_string());
            DriverError::other(code, message)
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
    fn test_success_response() {
        let json_str = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "type": "success",
            "result": {"value": "Hello"}
        }"#;

        let response: Response = serde_json::from_str(json_str).expect("parse");
        assert!(response.is_success());
        assert!(!response.is_error());

        let result = response.into_capability().expect("should succeed");
        assert_eq!(result["value"], "Hello");
    }

    #[test]
    fn test_stale_error_response() {
        let json_str = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "type": "error",
            "error": "stale element reference",
            "message": "element is not attached to the page document"
        }"#;

        let response: Response = serde_json::from_str(json_str).expect("parse");
        assert!(response.is_error());
        assert_eq!(
            response.into_capability(),
            Err(DriverError::StaleReference)
        );
    }

    #[test]
    fn test_invalid_selector_translation() {
        assert_eq!(
            translate_error(INVALID_SELECTOR, None),
            DriverError::InvalidSelector
        );
    }

    #[test]
    fn test_other_error_keeps_code_and_message() {
        let failure = translate_error(
            "element not interactable",
            Some("element is hidden".to_string()),
        );
        assert_eq!(
            failure,
            DriverError::other("element not interactable", "element is hidden")
        );

        let failure = translate_error("unknown error", None);
        assert_eq!(failure, DriverError::other("unknown error", "unknown error"));
    }

    #[test]
    fn test_success_without_result_is_null() {
        let response = Response {
            id: RequestId::generate(),
            response_type: ResponseType::Success,
            result: None,
            error: None,
            message: None,
        };
        assert_eq!(response.into_capability(), Ok(Value::Null));
    }

    #[test]
    fn test_error_constructor_round_trips() {
        let id = RequestId::generate();
        let response = Response::error(id, "timeout", "slow");
        let json = serde_json::to_string(&response).expect("serialize");
        let parsed: Response = serde_json::from_str(&json).expect("parse");

        assert_eq!(parsed.id, id);
        assert!(parsed.is_error());
        assert!(parsed.result.is_none());
    }
}
