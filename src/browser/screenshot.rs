//! Screenshot artifacts attached to an element handle.

// ============================================================================
// Imports
// ============================================================================

use std::path::{Path, PathBuf};
use std::time::SystemTime;

// ============================================================================
// Types
// ============================================================================

/// Image format of a captured screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// PNG format (lossless).
    #[default]
    Png,
    /// JPEG format.
    Jpeg,
}

impl ImageFormat {
    /// Returns the MIME type for this format.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Guesses the format from a file path's extension.
    ///
    /// Anything that is not `.jpg`/`.jpeg` is treated as PNG.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("png")
            .to_lowercase();

        match ext.as_str() {
            "jpg" | "jpeg" => Self::Jpeg,
            _ => Self::Png,
        }
    }
}

// ============================================================================
// Screenshot
// ============================================================================

/// Reference to a screenshot file recorded on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenshot {
    /// Where the image was written.
    pub path: PathBuf,
    /// Image format.
    pub format: ImageFormat,
    /// When the artifact was recorded.
    pub recorded_at: SystemTime,
}

impl Screenshot {
    /// Creates a record for an image at `path`, timestamped now.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            format: ImageFormat::from_path(&path),
            path,
            recorded_at: SystemTime::now(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
