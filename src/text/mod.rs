//! Plain-text extraction from cell values.
//!
//! Question and option texts arrive in whatever shape the reader found
//! them: plain strings, numbers, rich-text runs, formulas with cached
//! results. [`cell_text`] reduces all of them to trimmed plain text and
//! never fails - unknown shapes fall back to the reader's rendered string
//! or the raw stringification.

use crate::cell::{Cell, CellValue};

/// Extract trimmed plain text from a cell.
///
/// - empty → `""`
/// - string → trimmed as-is
/// - number or boolean → canonical decimal/boolean form
/// - rich text → run texts concatenated in order, then trimmed
/// - formula → its cached string (trimmed) or numeric result; anything
///   else falls through to the fallback
/// - fallback → the reader's pre-rendered display string if present,
///   otherwise the raw stringification of the value
///
/// # Examples
///
/// ```rust
/// use keycell::{Cell, CellValue, cell_text};
///
/// let cell = Cell::new(CellValue::String("  Paris  ".into()));
/// assert_eq!(cell_text(&cell), "Paris");
/// ```
pub fn cell_text(cell: &Cell) -> String {
    match &cell.value {
        CellValue::Empty => String::new(),
        CellValue::String(s) => s.trim().to_string(),
        CellValue::Bool(_) | CellValue::Int(_) | CellValue::Float(_) => cell.value.to_string(),
        CellValue::RichText(runs) => {
            let mut text = String::new();
            for run in runs {
                text.push_str(&run.text);
            }
            text.trim().to_string()
        },
        CellValue::Formula { result: Some(result), .. } => match result.as_ref() {
            CellValue::String(s) => s.trim().to_string(),
            CellValue::Int(_) | CellValue::Float(_) => result.to_string(),
            _ => fallback_text(cell),
        },
        _ => fallback_text(cell),
    }
}

/// Last-resort extraction: prefer the reader's rendered string.
fn fallback_text(cell: &Cell) -> String {
    match &cell.rendered {
        Some(text) if !text.is_empty() => text.trim().to_string(),
        _ => cell.value.to_string(),
    }
}
