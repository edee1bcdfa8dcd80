//! Visual style attributes of a cell.
//!
//! The fields mirror what spreadsheet formats actually record: an optional
//! font block, a fill, and per-edge borders. Every field is optional or has
//! an empty default, because readers only report what the file explicitly
//! sets - an unstyled cell carries no attributes at all.

// Submodule declarations
pub mod border;
pub mod color;
pub mod fill;
pub mod font;

// Re-exports
pub use border::{Border, BorderEdge};
pub use color::Color;
pub use fill::Fill;
pub use font::Font;

use serde::{Deserialize, Serialize};

/// Observable style facts of one cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellStyle {
    /// Font block, absent when the cell uses the sheet default font
    pub font: Option<Font>,
    /// Cell fill; `Fill::None` when the cell has no fill record
    pub fill: Fill,
    /// Border block, absent when no edge is drawn
    pub border: Option<Border>,
}

impl CellStyle {
    /// Create a new style with no attributes set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}
