//! Element handle and its interaction API.
//!
//! An [`Element`] names one remote element and the [`Driver`] that acts on
//! it. Every operation performs one driver call, translates the driver's
//! result and hands back the same handle, so calls chain:
//!
//! ```ignore
//! let greeting = form
//!     .find_input() // lookup layer, not part of this crate
//!     .fill_in("Ada").await?
//!     .send_keys(Key::Enter).await?
//!     .text().await?;
//! ```
//!
//! Nothing here retries. Once the driver reports a stale reference the
//! handle keeps failing with [`Error::StaleReference`] until the caller
//! looks the element up again.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use crate::driver::{Driver, Operation};
use crate::error::{DriverError, Error, Result};
use crate::identifiers::ElementId;

use super::builder::ElementBuilder;
use super::input::InputValue;
use super::keyboard::Keys;
use super::screenshot::Screenshot;

// ============================================================================
// Types
// ============================================================================

/// Scope an element was found within.
#[derive(Clone)]
pub enum Parent {
    /// Found directly in a session.
    Session {
        /// Session URL.
        url: String,
    },
    /// Found inside another element.
    ///
    /// Holds a strong handle: a child keeps its parent handle alive.
    Element(Element),
}

impl fmt::Debug for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session { url } => f.debug_struct("Session").field("url", url).finish(),
            Self::Element(element) => f.debug_tuple("Element").field(element.id()).finish(),
        }
    }
}

/// Internal shared state for an element.
pub(crate) struct ElementInner {
    /// Backend element identifier.
    pub id: ElementId,

    /// Session owning the element.
    pub session_url: String,

    /// Element address within the session.
    pub url: String,

    /// Scope the element was found within.
    pub parent: Parent,

    /// Bound backend.
    pub driver: Arc<dyn Driver>,

    /// Artifacts recorded during the handle's lifetime. Append-only.
    pub screenshots: Mutex<Vec<Screenshot>>,
}

// ============================================================================
// Element
// ============================================================================

/// A handle to one located remote element.
///
/// Cloning is cheap and keeps the identity: clones share state, and
/// [`same_handle`](Self::same_handle) reports `true` for them.
#[derive(Clone)]
pub struct Element {
    /// Shared inner state.
    pub(crate) inner: Arc<ElementInner>,
}

// ============================================================================
// Element - Display
// ============================================================================

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id)
            .field("url", &self.inner.url)
            .field("driver", &self.inner.driver.name())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Element - Constructor
// ============================================================================

impl Element {
    /// Creates a builder for an element handle.
    ///
    /// Intended for lookup layers that have just confirmed the element
    /// exists.
    #[inline]
    #[must_use]
    pub fn builder() -> ElementBuilder {
        ElementBuilder::new()
    }

    /// Creates a new element handle.
    pub(crate) fn new(
        id: ElementId,
        session_url: String,
        url: String,
        parent: Parent,
        driver: Arc<dyn Driver>,
    ) -> Self {
        Self {
            inner: Arc::new(ElementInner {
                id,
                session_url,
                url,
                parent,
                driver,
                screenshots: Mutex::new(Vec::new()),
            }),
        }
    }
}

// ============================================================================
// Element - Accessors
// ============================================================================

impl Element {
    /// Returns this element's ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ElementId {
        &self.inner.id
    }

    /// Returns the URL of the session owning this element.
    #[inline]
    #[must_use]
    pub fn session_url(&self) -> &str {
        &self.inner.session_url
    }

    /// Returns this element's address within its session.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Returns the scope this element was found within.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> &Parent {
        &self.inner.parent
    }

    /// Returns the bound driver.
    #[inline]
    #[must_use]
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.inner.driver
    }

    /// Returns `true` if both values are the same handle.
    #[inline]
    #[must_use]
    pub fn same_handle(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// ============================================================================
// Element - Actions
// ============================================================================

impl Element {
    /// Clears the element's value.
    ///
    /// # Errors
    ///
    /// - [`Error::StaleReference`] if the element is gone
    /// - [`Error::InvalidSelector`] if the backend cannot address it
    pub async fn clear(&self) -> Result<Element> {
        debug!(element_id = %self.inner.id, "Clearing element");

        match self.inner.driver.clear(self).await {
            Ok(()) => Ok(self.clone()),
            Err(DriverError::StaleReference) => Err(self.stale()),
            Err(DriverError::InvalidSelector) => Err(Error::invalid_selector(self.id().clone())),
            Err(failure) => Err(self.unexpected(Operation::Clear, failure)),
        }
    }

    /// Clicks the element.
    ///
    /// # Errors
    ///
    /// [`Error::StaleReference`] if the element is gone.
    pub async fn click(&self) -> Result<Element> {
        debug!(element_id = %self.inner.id, "Clicking element");

        match self.inner.driver.click(self).await {
            Ok(()) => Ok(self.clone()),
            Err(DriverError::StaleReference) => Err(self.stale()),
            Err(failure) => Err(self.unexpected(Operation::Click, failure)),
        }
    }

    /// Replaces the element's value: clears it, then sets `value`.
    ///
    /// Numbers are written in their canonical text form. If clearing fails
    /// nothing is written.
    ///
    /// # Errors
    ///
    /// Whatever [`clear`](Self::clear) or [`set_value`](Self::set_value)
    /// reports.
    pub async fn fill_in(&self, value: impl Into<InputValue>) -> Result<Element> {
        let value = value.into();
        debug!(element_id = %self.inner.id, value_len = value.as_str().len(), "Filling in element");

        self.clear().await?;
        self.set_value(value.as_str()).await
    }

    /// Writes a raw value into the element.
    ///
    /// Failures other than a stale reference are passed through untranslated.
    ///
    /// # Errors
    ///
    /// - [`Error::StaleReference`] if the element is gone
    /// - [`Error::Driver`] carrying any other driver failure as reported
    pub async fn set_value(&self, value: &str) -> Result<Element> {
        debug!(element_id = %self.inner.id, value_len = value.len(), "Setting element value");

        match self.inner.driver.set_value(self, value).await {
            Ok(()) => Ok(self.clone()),
            Err(DriverError::StaleReference) => Err(self.stale()),
            Err(failure) => Err(Error::driver(failure)),
        }
    }

    /// Types a key sequence into the element.
    ///
    /// A single text value or key is sent as a one-element sequence.
    /// Failures other than a stale reference are passed through untranslated.
    ///
    /// # Errors
    ///
    /// - [`Error::StaleReference`] if the element is gone
    /// - [`Error::Driver`] carrying any other driver failure as reported
    pub async fn send_keys(&self, keys: impl Into<Keys>) -> Result<Element> {
        let keys = keys.into();
        debug!(element_id = %self.inner.id, key_count = keys.len(), "Sending keys to element");

        match self.inner.driver.send_keys(self, keys.as_slice()).await {
            Ok(()) => Ok(self.clone()),
            Err(DriverError::StaleReference) => Err(self.stale()),
            Err(failure) => Err(Error::driver(failure)),
        }
    }
}

// ============================================================================
// Element - Properties
// ============================================================================

impl Element {
    /// Gets the element's visible text.
    ///
    /// # Errors
    ///
    /// [`Error::StaleReference`] if the element is gone.
    pub async fn text(&self) -> Result<String> {
        match self.inner.driver.text(self).await {
            Ok(text) => Ok(text),
            Err(DriverError::StaleReference) => Err(self.stale()),
            Err(failure) => Err(self.unexpected(Operation::Text, failure)),
        }
    }

    /// Gets an attribute value.
    ///
    /// Returns `None` if the attribute doesn't exist.
    ///
    /// # Errors
    ///
    /// [`Error::StaleReference`] if the element is gone.
    pub async fn attr(&self, name: &str) -> Result<Option<String>> {
        match self.inner.driver.attribute(self, name).await {
            Ok(value) => Ok(value),
            Err(DriverError::StaleReference) => Err(self.stale()),
            Err(failure) => Err(self.unexpected(Operation::Attribute, failure)),
        }
    }

    /// Gets the `value` attribute. Same as `attr("value")`.
    ///
    /// # Errors
    ///
    /// [`Error::StaleReference`] if the element is gone.
    pub async fn value(&self) -> Result<Option<String>> {
        self.attr("value").await
    }

    /// Checks if the element is selected.
    ///
    /// Any driver failure reads as `false`: most elements cannot be
    /// selected at all.
    pub async fn is_selected(&self) -> bool {
        self.inner.driver.is_selected(self).await.unwrap_or(false)
    }

    /// Checks if the element is visible.
    ///
    /// Any driver failure reads as `false`.
    pub async fn is_visible(&self) -> bool {
        self.inner.driver.is_displayed(self).await.unwrap_or(false)
    }
}

// ============================================================================
// Element - Screenshots
// ============================================================================

impl Element {
    /// Captures a PNG of this element into `dir` and records it.
    ///
    /// Files are named `<element-id>-<n>-<uuid>.png`, where `n` numbers the
    /// captures of this handle. Existing files are never overwritten, so
    /// handles re-acquired for the same element and concurrent clones can
    /// share `dir`.
    ///
    /// # Errors
    ///
    /// - [`Error::StaleReference`] if the element is gone
    /// - [`Error::Driver`] if the driver cannot capture
    /// - [`Error::Io`] if the file cannot be written
    pub async fn take_screenshot(&self, dir: impl AsRef<Path>) -> Result<Element> {
        debug!(element_id = %self.inner.id, "Capturing element screenshot");

        let bytes = match self.inner.driver.screenshot(self).await {
            Ok(bytes) => bytes,
            Err(DriverError::StaleReference) => return Err(self.stale()),
            Err(failure) => return Err(Error::driver(failure)),
        };

        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        let path = self.next_screenshot_path(dir);
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(&bytes).await?;
        file.flush().await?;

        debug!(element_id = %self.inner.id, path = %path.display(), "Saved element screenshot");
        Ok(self.record_screenshot(path))
    }

    /// Appends an artifact captured elsewhere to this handle's log.
    pub fn record_screenshot(&self, path: impl Into<PathBuf>) -> Element {
        self.inner.screenshots.lock().push(Screenshot::new(path));
        self.clone()
    }

    /// Returns the recorded screenshots, oldest first.
    #[must_use]
    pub fn screenshots(&self) -> Vec<Screenshot> {
        self.inner.screenshots.lock().clone()
    }

    fn next_screenshot_path(&self, dir: &Path) -> PathBuf {
        let index = self.inner.screenshots.lock().len() + 1;
        let stem: String = self
            .inner
            .id
            .as_str()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        dir.join(format!("{stem}-{index}-{}.png", Uuid::new_v4().simple()))
    }
}

// ============================================================================
// Element - Internal
// ============================================================================

impl Element {
    fn stale(&self) -> Error {
        Error::stale_reference(self.inner.id.clone())
    }

    fn unexpected(&self, operation: Operation, failure: DriverError) -> Error {
        Error::unexpected_failure(operation.as_str(), self.inner.id.clone(), failure)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::driver::ScriptedDriver;

    fn element(id: &str) -> Element {
        Element::builder()
            .driver(Arc::new(ScriptedDriver::new()))
            .session_url("session-1")
            .url(format!("session-1/element/{id}"))
            .id(id)
            .build()
            .expect("valid element")
    }

    #[test]
    fn test_element_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<Element>();
    }

    #[test]
    fn test_element_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Element>();
    }

    #[test]
    fn test_clones_are_the_same_handle() {
        let a = element("e1");
        let b = a.clone();
        let c = element("e1");

        assert!(a.same_handle(&b));
        assert!(!a.same_handle(&c));
    }

    #[test]
    fn test_debug_names_driver() {
        let debug = format!("{:?}", element("e1"));
        assert!(debug.contains("e1"));
        assert!(debug.contains("scripted"));
    }

    #[test]
    fn test_record_screenshot_appends_in_order() {
        let el = element("e1");
        let returned = el.record_screenshot("/tmp/a.png");
        el.record_screenshot("/tmp/b.png");

        assert!(returned.same_handle(&el));
        let paths: Vec<_> = el.screenshots().into_iter().map(|s| s.path).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("/tmp/a.png"), PathBuf::from("/tmp/b.png")]
        );
    }

    #[test]
    fn test_screenshot_path_sanitizes_id() {
        let el = element("f.1/e:2");
        let path = el.next_screenshot_path(Path::new("/shots"));
        assert_eq!(path.parent(), Some(Path::new("/shots")));

        let name = path.file_name().and_then(|n| n.to_str()).expect("file name");
        assert!(name.starts_with("f_1_e_2-1-"), "{name}");
        assert!(name.ends_with(".png"), "{name}");
    }

    #[test]
    fn test_child_keeps_parent_handle_alive() {
        let form = element("form");
        let weak = Arc::downgrade(&form.inner);
        let input = Element::builder()
            .driver(Arc::new(ScriptedDriver::new()))
            .session_url("session-1")
            .url("session-1/element/input")
            .id("input")
            .parent(form)
            .build()
            .expect("valid element");

        assert!(weak.upgrade().is_some());
        match input.parent() {
            Parent::Element(parent) => assert_eq!(parent.id().as_str(), "form"),
            other => panic!("expected element parent, got {other:?}"),
        }
    }

    #[test]
    fn test_screenshot_paths_are_unique_per_capture() {
        let a = element("e1");
        let b = element("e1");
        let dir = Path::new("/shots");

        assert_ne!(a.next_screenshot_path(dir), a.next_screenshot_path(dir));
        assert_ne!(a.next_screenshot_path(dir), b.next_screenshot_path(dir));
    }
}
