//! Fill patterns and colors.

use serde::{Deserialize, Serialize};

use super::Color;

/// Fill information.
///
/// A truly unfilled cell has no pattern fill record at all, which is why
/// `None` is its own variant rather than an empty pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    /// No fill
    #[default]
    None,
    /// Pattern fill with colors
    Pattern {
        /// Pattern type (e.g., "solid", "gray125", "lightGray")
        pattern_type: Option<String>,
        /// Foreground color
        fg_color: Option<Color>,
        /// Background color
        bg_color: Option<Color>,
    },
    /// Gradient fill (simplified representation)
    Gradient,
}

impl Fill {
    /// Create a new solid fill with the given foreground color.
    #[inline]
    pub fn solid(color: Color) -> Self {
        Fill::Pattern {
            pattern_type: Some("solid".to_string()),
            fg_color: Some(color),
            bg_color: None,
        }
    }

    /// Check if this is a pattern fill.
    #[inline]
    pub fn is_pattern(&self) -> bool {
        matches!(self, Fill::Pattern { .. })
    }

    /// Check if this is a solid fill.
    pub fn is_solid(&self) -> bool {
        matches!(self, Fill::Pattern { pattern_type: Some(kind), .. } if kind == "solid")
    }
}
