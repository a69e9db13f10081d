//! Element command catalogue.
//!
//! Commands follow the `module.methodName` format, one per driver
//! capability.
//!
//! | Method | Capability |
//! |--------|------------|
//! | `element.clear` | clear |
//! | `element.click` | click |
//! | `element.getText` | read text |
//! | `element.getAttribute` | read attribute |
//! | `element.isSelected` | selected state |
//! | `element.isDisplayed` | displayed state |
//! | `element.setValue` | write raw value |
//! | `element.sendKeys` | type key sequence |
//! | `element.screenshot` | capture image |

// ============================================================================
// Imports
// ============================================================================

use serde::Serialize;

use crate::browser::KeyInput;

// ============================================================================
// Element Commands
// ============================================================================

/// Element module commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", content = "params")]
pub enum ElementCommand {
    /// Clear the element's value.
    #[serde(rename = "element.clear")]
    Clear,

    /// Click the element.
    #[serde(rename = "element.click")]
    Click,

    /// Get visible text.
    #[serde(rename = "element.getText")]
    GetText,

    /// Get an attribute value.
    #[serde(rename = "element.getAttribute")]
    GetAttribute {
        /// Attribute name.
        name: String,
    },

    /// Get selected state.
    #[serde(rename = "element.isSelected")]
    IsSelected,

    /// Get displayed state.
    #[serde(rename = "element.isDisplayed")]
    IsDisplayed,

    /// Set the raw value.
    #[serde(rename = "element.setValue")]
    SetValue {
        /// Value to write.
        value: String,
    },

    /// Type a key sequence.
    #[serde(rename = "element.sendKeys")]
    SendKeys {
        /// Concatenated text form of the sequence.
        text: String,
        /// Sequence entries in order.
        value: Vec<KeyInput>,
    },

    /// Capture a PNG of the element.
    #[serde(rename = "element.screenshot")]
    Screenshot,
}

impl ElementCommand {
    /// Creates a `sendKeys` command from a key sequence.
    #[must_use]
    pub fn send_keys(keys: &[KeyInput]) -> Self {
        Self::SendKeys {
            text: keys.iter().map(KeyInput::to_wire_text).collect(),
            value: keys.to_vec(),
        }
    }

    /// Returns the protocol method name.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::Clear => "element.clear",
            Self::Click => "element.click",
            Self::GetText => "element.getText",
            Self::GetAttribute { .. } => "element.getAttribute",
            Self::IsSelected => "element.isSelected",
            Self::IsDisplayed => "element.isDisplayed",
            Self::SetValue { .. } => "element.setValue",
            Self::SendKeys { .. } => "element.sendKeys",
            Self::Screenshot => "element.screenshot",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::Key;

    #[test]
    fn test_method_matches_serialized_tag() {
        let commands = [
            ElementCommand::Clear,
            ElementCommand::Click,
            ElementCommand::GetText,
            ElementCommand::GetAttribute {
                name: "href".into(),
            },
            ElementCommand::IsSelected,
            ElementCommand::IsDisplayed,
            ElementCommand::SetValue {
                value: "x".into(),
            },
            ElementCommand::send_keys(&[KeyInput::from("x")]),
            ElementCommand::Screenshot,
        ];

        for command in commands {
            let json = serde_json::to_value(&command).expect("serialize");
            assert_eq!(json["method"], command.method());
        }
    }

    #[test]
    fn test_send_keys_params() {
        let command =
            ElementCommand::send_keys(&[KeyInput::from("hi"), KeyInput::from(Key::Enter)]);
        let json = serde_json::to_value(&command).expect("serialize");

        assert_eq!(json["params"]["text"], "hi\u{E007}");
        assert_eq!(json["params"]["value"][0], "hi");
        assert_eq!(json["params"]["value"][1], "\u{E007}");
    }

    #[test]
    fn test_get_attribute_params() {
        let command = ElementCommand::GetAttribute {
            name: "placeholder".into(),
        };
        let json = serde_json::to_value(&command).expect("serialize");
        assert_eq!(json["params"]["name"], "placeholder");
    }
}
