//! Spreadsheet color references.

use serde::{Deserialize, Serialize};

/// A color reference as spreadsheet formats spell them.
///
/// One color object may carry several spellings at once (an explicit ARGB
/// code alongside a theme reference, for instance); signature extraction
/// treats each spelling independently, so this is a struct of options
/// rather than an enum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Explicit ARGB hex code (e.g. "FFFF0000")
    pub argb: Option<String>,
    /// Theme palette index
    pub theme: Option<u32>,
    /// Tint adjustment applied to the theme color, in -1.0..=1.0
    pub tint: Option<f64>,
    /// Legacy indexed-palette entry
    pub indexed: Option<u32>,
}

impl Color {
    /// Create a color from an explicit ARGB hex code.
    #[inline]
    pub fn from_argb(code: impl Into<String>) -> Self {
        Self {
            argb: Some(code.into()),
            ..Self::default()
        }
    }

    /// Create a color from a theme palette index.
    #[inline]
    pub fn from_theme(index: u32) -> Self {
        Self {
            theme: Some(index),
            ..Self::default()
        }
    }

    /// Create a color from a legacy indexed-palette entry.
    #[inline]
    pub fn from_indexed(index: u32) -> Self {
        Self {
            indexed: Some(index),
            ..Self::default()
        }
    }

    /// Attach a tint adjustment.
    #[inline]
    pub fn with_tint(mut self, tint: f64) -> Self {
        self.tint = Some(tint);
        self
    }
}
