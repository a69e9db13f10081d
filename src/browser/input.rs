//! Values accepted by `fill_in`.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

// ============================================================================
// InputValue
// ============================================================================

/// Text written into a form field.
///
/// Numbers convert to their canonical `Display` form, so filling in `42`
/// writes exactly the same text as filling in `"42"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputValue(String);

impl InputValue {
    /// Returns the text form.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the text form.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InputValue {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for InputValue {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&String> for InputValue {
    fn from(text: &String) -> Self {
        Self(text.clone())
    }
}

macro_rules! numeric_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for InputValue {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

numeric_input!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// ============================================================================
// Tests
// ============================================================================
