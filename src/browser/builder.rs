//! Builder for element handles.
//!
//! Lookup layers use this once a remote element is known to exist.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use remote_element::{Element, ScriptedDriver};
//!
//! let element = Element::builder()
//!     .driver(Arc::new(ScriptedDriver::new()))
//!     .session_url("http://localhost:4444/session/abc")
//!     .url("http://localhost:4444/session/abc/element/e1")
//!     .id("e1")
//!     .build()?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::identifiers::ElementId;

use super::element::{Element, Parent};

// ============================================================================
// ElementBuilder
// ============================================================================

/// Builder for an [`Element`].
///
/// Use [`Element::builder()`] to create a new builder.
#[derive(Default, Clone)]
pub struct ElementBuilder {
    /// Bound backend.
    driver: Option<Arc<dyn Driver>>,
    /// Session URL.
    session_url: Option<String>,
    /// Element URL.
    url: Option<String>,
    /// Backend element ID.
    id: Option<ElementId>,
    /// Enclosing element, if nested.
    parent: Option<Element>,
}

impl fmt::Debug for ElementBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementBuilder")
            .field("driver", &self.driver.as_ref().map(|d| d.name().to_string()))
            .field("session_url", &self.session_url)
            .field("url", &self.url)
            .field("id", &self.id)
            .field("parent", &self.parent.as_ref().map(Element::id))
            .finish()
    }
}

// ============================================================================
// ElementBuilder Implementation
// ============================================================================

impl ElementBuilder {
    /// Creates a new builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend that will perform every action.
    #[inline]
    #[must_use]
    pub fn driver(mut self, driver: Arc<dyn Driver>) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Sets the URL of the session owning the element.
    #[inline]
    #[must_use]
    pub fn session_url(mut self, session_url: impl Into<String>) -> Self {
        self.session_url = Some(session_url.into());
        self
    }

    /// Sets the element's address within its session.
    #[inline]
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the backend-assigned element ID.
    #[inline]
    #[must_use]
    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Marks the element as found inside `parent`.
    ///
    /// Without a parent the element's scope is its session.
    #[inline]
    #[must_use]
    pub fn parent(mut self, parent: Element) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Builds the element with validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if driver, session URL, URL or ID is missing or
    ///   empty
    /// - [`Error::Config`] if the parent belongs to another session
    pub fn build(self) -> Result<Element> {
        let driver = self
            .driver
            .ok_or_else(|| Error::config("driver is required. Use .driver() to set it."))?;
        let session_url = required(self.session_url, "session_url")?;
        let url = required(self.url, "url")?;
        let id = self
            .id
            .filter(|id| !id.as_str().is_empty())
            .ok_or_else(|| Error::config("id is required. Use .id() to set it."))?;

        let parent = match self.parent {
            Some(parent) if parent.session_url() != session_url => {
                return Err(Error::config(format!(
                    "parent element belongs to session {}, not {}",
                    parent.session_url(),
                    session_url
                )));
            }
            Some(parent) => Parent::Element(parent),
            None => Parent::Session {
                url: session_url.clone(),
            },
        };

        Ok(Element::new(id, session_url, url, parent, driver))
    }
}

// ============================================================================
// Validation
// ============================================================================

fn required(value: Option<String>, field: &str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::config(format!("{field} is required. Use .{field}() to set it.")))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::driver::ScriptedDriver;

    fn complete() -> ElementBuilder {
        ElementBuilder::new()
            .driver(Arc::new(ScriptedDriver::new()))
            .session_url("s1")
            .url("s1/element/e1")
            .id("e1")
    }

    #[test]
    fn test_build_sets_fields() {
        let element = complete().build().expect("valid");
        assert_eq!(element.id().as_str(), "e1");
        assert_eq!(element.session_url(), "s1");
        assert_eq!(element.url(), "s1/element/e1");
        assert!(matches!(element.parent(), Parent::Session { url } if url == "s1"));
    }

    #[test]
    fn test_missing_driver() {
        let err = ElementBuilder::new()
            .session_url("s1")
            .url("u")
            .id("e1")
            .build()
            .expect_err("no driver");
        assert!(err.to_string().contains("driver is required"));
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        assert!(complete().session_url("").build().is_err());
        assert!(complete().url("").build().is_err());
        assert!(complete().id("").build().is_err());
    }

    #[test]
    fn test_nested_parent() {
        let parent = complete().build().expect("parent");
        let child = complete()
            .url("s1/element/e2")
            .id("e2")
            .parent(parent.clone())
            .build()
            .expect("child");

        match child.parent() {
            Parent::Element(p) => assert!(p.same_handle(&parent)),
            other => panic!("unexpected parent: {other:?}"),
        }
    }

    #[test]
    fn test_parent_from_other_session_is_rejected() {
        let parent = complete().session_url("s2").build().expect("parent");
        let err = complete().parent(parent).build().expect_err("mismatch");
        assert!(matches!(err, Error::Config { .. }));
    }
}
