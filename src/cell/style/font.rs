//! Font information and definitions.

use serde::{Deserialize, Serialize};

use super::Color;

/// Font information.
///
/// Defines the visual appearance of text in a cell including typeface,
/// size, color, and text decoration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font name/family (e.g., "Calibri", "Arial")
    pub name: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold flag
    pub bold: bool,
    /// Italic flag
    pub italic: bool,
    /// Underline flag
    pub underline: bool,
    /// Strike-through flag
    pub strike: bool,
    /// Font color
    pub color: Option<Color>,
}

impl Font {
    /// Create a new default font.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the font has any decoration flags set.
    #[inline]
    pub fn has_formatting(&self) -> bool {
        self.bold || self.italic || self.underline || self.strike
    }
}
