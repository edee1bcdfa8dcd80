//! Cell model supplied by spreadsheet readers.
//!
//! This crate never opens workbooks itself. An external reader walks the
//! sheet and hands over one [`Cell`] per grid position: the extracted value,
//! an optional pre-rendered display string, and the observable style
//! attributes. Everything downstream (text extraction, signatures, outlier
//! detection) works from these records alone.

// Submodule declarations
pub mod style;
pub mod value;

// Re-exports
pub use style::{Border, BorderEdge, CellStyle, Color, Fill, Font};
pub use value::{CellValue, TextRun};

use serde::{Deserialize, Serialize};

/// A single cell as handed over by a spreadsheet reader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Extracted cell value
    pub value: CellValue,
    /// Pre-rendered display string, if the reader produced one
    pub rendered: Option<String>,
    /// Observable style attributes
    pub style: CellStyle,
}

impl Cell {
    /// Create a cell with the given value and default styling.
    #[inline]
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            rendered: None,
            style: CellStyle::default(),
        }
    }

    /// Create a cell with the given value and style.
    #[inline]
    pub fn with_style(value: CellValue, style: CellStyle) -> Self {
        Self {
            value,
            rendered: None,
            style,
        }
    }

    /// Check if the cell is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.value, CellValue::Empty)
    }
}
