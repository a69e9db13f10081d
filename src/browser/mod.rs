//! Element handle module.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Element`] | Handle to one remote element |
//! | [`ElementBuilder`] | Validated construction for lookup layers |
//! | [`Keys`] / [`Key`] | Key sequences for `send_keys` |
//! | [`InputValue`] | Text or numbers for `fill_in` |
//! | [`Screenshot`] | Artifact recorded on a handle |
//!
//! # Example
//!
//! ```ignore
//! use remote_element::{Element, Key, Result};
//!
//! # async fn example(input: Element) -> Result<()> {
//! input.fill_in(42).await?.send_keys(Key::Enter).await?;
//! assert_eq!(input.value().await?, Some("42".to_string()));
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Element handle construction.
pub mod builder;

/// Element interaction.
pub mod element;

/// `fill_in` values.
pub mod input;

/// Key sequences.
pub mod keyboard;

/// Screenshot records.
pub mod screenshot;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::ElementBuilder;
pub use element::{Element, Parent};
pub use input::InputValue;
pub use keyboard::{Key, KeyInput, Keys};
pub use screenshot::{ImageFormat, Screenshot};
