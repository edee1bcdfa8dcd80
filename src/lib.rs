//! Keycell - infer the correct answer in quiz spreadsheets from cell styling
//!
//! Quiz spreadsheets commonly mark the correct option of each row through
//! formatting alone: a different font color, a highlight, bold text. Nothing
//! in the data itself says which option is right. This library takes the
//! per-cell values and style attributes an external spreadsheet reader has
//! already extracted and infers the answer by finding the *style outlier* of
//! the row.
//!
//! # Pipeline
//!
//! - **Text extraction** (`text`): reduce any cell value shape (scalar, rich
//!   text, formula result) to trimmed plain text.
//! - **Style signatures** (`signature`): reduce a cell's style attributes to
//!   a canonical, comparable string; cells with equal signatures look the
//!   same.
//! - **Outlier detection** (`detect`): given the ordered signatures of a
//!   row's option cells, pick the minority-styled one.
//! - **Row parsing** (`row`): tie the three together, turning one sheet row
//!   into a [`Question`] with its inferred answer index.
//!
//! # Example
//!
//! ```rust
//! use keycell::{Cell, CellStyle, CellValue, Color, Font, parse_row};
//!
//! let plain = CellStyle::default();
//! let red = CellStyle {
//!     font: Some(Font {
//!         color: Some(Color::from_argb("FFFF0000")),
//!         ..Font::default()
//!     }),
//!     ..CellStyle::default()
//! };
//!
//! let cells = vec![
//!     Cell::new(CellValue::String("Capital of France?".into())),
//!     Cell::with_style(CellValue::String("London".into()), plain.clone()),
//!     Cell::with_style(CellValue::String("Paris".into()), red),
//!     Cell::with_style(CellValue::String("Berlin".into()), plain),
//! ];
//!
//! let question = parse_row(1, &cells).unwrap();
//! assert_eq!(question.correct_answer, 1); // "Paris", the red one
//! assert!(!question.undetected);
//! ```
//!
//! # Scope
//!
//! The library never touches files: workbook loading, worksheet iteration
//! and all UI concerns belong to the surrounding application. Every function
//! here is pure and total over its documented inputs - malformed or partial
//! style data degrades to the `"default"` signature instead of failing.

/// Cell value and style model supplied by spreadsheet readers
pub mod cell;

/// Shared error types
pub mod common;

/// Outlier detection strategies over signature lists
pub mod detect;

/// Row parsing: from extracted cells to quiz questions
pub mod row;

/// Canonical style signatures
pub mod signature;

/// Plain-text extraction from cell values
pub mod text;

// Re-exports for convenience
pub use cell::{Border, BorderEdge, Cell, CellStyle, CellValue, Color, Fill, Font, TextRun};
pub use common::{Error, Result};
pub use detect::{DetectionStrategy, Strategy, find_outlier, find_outlier_with};
pub use row::{ParseOutcome, Question, parse_row, parse_rows};
pub use signature::{Signature, signature_of};
pub use text::cell_text;
