//! Keyboard input for `send_keys`.
//!
//! A key sequence mixes literal text with named non-printable keys.
//!
//! # Example
//!
//! ```ignore
//! use remote_element::{Key, KeyInput};
//!
//! // Single text value, wrapped into a one-element sequence
//! element.send_keys("hello").await?;
//!
//! // Mixed sequence
//! element.send_keys(vec![KeyInput::from("hello"), KeyInput::from(Key::Enter)]).await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Serialize, Serializer};

// ============================================================================
// Key Enum
// ============================================================================

/// Named keys that have no printable text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // ========================================================================
    // Navigation & Control
    // ========================================================================
    /// Enter/Return key
    Enter,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Space bar
    Space,

    // ========================================================================
    // Arrow Keys
    // ========================================================================
    /// Arrow Up
    ArrowUp,
    /// Arrow Down
    ArrowDown,
    /// Arrow Left
    ArrowLeft,
    /// Arrow Right
    ArrowRight,

    // ========================================================================
    // Page Navigation
    // ========================================================================
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,

    // ========================================================================
    // Modifiers
    // ========================================================================
    /// Shift modifier
    Shift,
    /// Control modifier
    Control,
    /// Alt modifier
    Alt,
    /// Meta (Command/Windows) modifier
    Meta,
}

impl Key {
    /// Returns the key properties: (DOM key name, WebDriver code point).
    #[must_use]
    pub fn properties(self) -> (&'static str, char) {
        match self {
            Key::Enter => ("Enter", '\u{E007}'),
            Key::Tab => ("Tab", '\u{E004}'),
            Key::Escape => ("Escape", '\u{E00C}'),
            Key::Backspace => ("Backspace", '\u{E003}'),
            Key::Delete => ("Delete", '\u{E017}'),
            Key::Space => (" ", '\u{E00D}'),
            Key::ArrowUp => ("ArrowUp", '\u{E013}'),
            Key::ArrowDown => ("ArrowDown", '\u{E015}'),
            Key::ArrowLeft => ("ArrowLeft", '\u{E012}'),
            Key::ArrowRight => ("ArrowRight", '\u{E014}'),
            Key::Home => ("Home", '\u{E011}'),
            Key::End => ("End", '\u{E010}'),
            Key::PageUp => ("PageUp", '\u{E00E}'),
            Key::PageDown => ("PageDown", '\u{E00F}'),
            Key::Shift => ("Shift", '\u{E008}'),
            Key::Control => ("Control", '\u{E009}'),
            Key::Alt => ("Alt", '\u{E00A}'),
            Key::Meta => ("Meta", '\u{E03D}'),
        }
    }

    /// Returns the DOM key value string.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        self.properties().0
    }

    /// Returns the code point WebDriver uses for this key.
    #[inline]
    #[must_use]
    pub fn code_point(self) -> char {
        self.properties().1
    }

    /// Returns whether this key is a modifier.
    #[inline]
    #[must_use]
    pub fn is_modifier(self) -> bool {
        matches!(self, Key::Shift | Key::Control | Key::Alt | Key::Meta)
    }
}

// ============================================================================
// KeyInput
// ============================================================================

/// One entry of a key sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// Literal text, typed character by character.
    Text(String),
    /// A named key.
    Key(Key),
}

impl KeyInput {
    /// Returns the entry in WebDriver text form.
    ///
    /// Named keys become their private-use code point.
    #[must_use]
    pub fn to_wire_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Key(key) => key.code_point().to_string(),
        }
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Key(key) => write!(f, "<{}>", key.name()),
        }
    }
}

impl Serialize for KeyInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire_text())
    }
}

impl From<&str> for KeyInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for KeyInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<Key> for KeyInput {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

// ============================================================================
// Keys
// ============================================================================

/// An ordered key sequence passed to `send_keys`.
///
/// A lone text value or key converts into a one-element sequence, so
/// `send_keys("a")` and `send_keys(vec!["a"])` reach the driver identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Keys(Vec<KeyInput>);

impl Keys {
    /// Creates a sequence from its entries.
    #[inline]
    #[must_use]
    pub fn new(inputs: Vec<KeyInput>) -> Self {
        Self(inputs)
    }

    /// Returns the entries in order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[KeyInput] {
        &self.0
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenates the sequence into WebDriver text form.
    #[must_use]
    pub fn to_wire_text(&self) -> String {
        self.0.iter().map(KeyInput::to_wire_text).collect()
    }
}

impl From<&str> for Keys {
    fn from(text: &str) -> Self {
        Self(vec![KeyInput::from(text)])
    }
}

impl From<String> for Keys {
    fn from(text: String) -> Self {
        Self(vec![KeyInput::from(text)])
    }
}

impl From<Key> for Keys {
    fn from(key: Key) -> Self {
        Self(vec![KeyInput::Key(key)])
    }
}

impl From<KeyInput> for Keys {
    fn from(input: KeyInput) -> Self {
        Self(vec![input])
    }
}

impl<T: Into<KeyInput>> From<Vec<T>> for Keys {
    fn from(inputs: Vec<T>) -> Self {
        Self(inputs.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<KeyInput>, const N: usize> From<[T; N]> for Keys {
    fn from(inputs: [T; N]) -> Self {
        Self(inputs.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<KeyInput>> FromIterator<T> for Keys {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_properties() {
        let (name, code_point) = Key::Enter.properties();
        assert_eq!(name, "Enter");
        assert_eq!(code_point, '\u{E007}');
    }

    #[test]
    fn test_modifiers() {
        assert!(Key::Shift.is_modifier());
        assert!(Key::Meta.is_modifier());
        assert!(!Key::Enter.is_modifier());
    }

    #[test]
    fn test_single_text_is_wrapped() {
        let single = Keys::from("a");
        let list = Keys::from(vec!["a"]);
        assert_eq!(single, list);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_mixed_sequence_wire_text() {
        let keys = Keys::from(vec![KeyInput::from("ab"), KeyInput::from(Key::Tab)]);
        assert_eq!(keys.to_wire_text(), "ab\u{E004}");
    }

    #[test]
    fn test_key_input_serializes_as_string() {
        let json = serde_json::to_string(&KeyInput::from(Key::Enter)).expect("serialize");
        assert_eq!(json, "\"\u{E007}\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyInput::from(Key::Escape).to_string(), "<Escape>");
        assert_eq!(KeyInput::from("x").to_string(), "x");
    }
}
