//! Border information.

use serde::{Deserialize, Serialize};

use super::Color;

/// Border information, one optional entry per edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Top border
    pub top: Option<BorderEdge>,
    /// Bottom border
    pub bottom: Option<BorderEdge>,
    /// Left border
    pub left: Option<BorderEdge>,
    /// Right border
    pub right: Option<BorderEdge>,
}

impl Border {
    /// Check if no edge has a border.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// Style and color of one border edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderEdge {
    /// Style name (e.g., "thin", "medium", "thick")
    pub style: String,
    /// Edge color
    pub color: Option<Color>,
}

impl BorderEdge {
    /// Create an edge with the given style and no explicit color.
    #[inline]
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            color: None,
        }
    }
}
