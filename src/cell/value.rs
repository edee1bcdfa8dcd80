//! Cell values as extracted by spreadsheet readers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Types of data that can be stored in a cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Empty cell
    #[default]
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
    /// Rich text as a sequence of styled runs, in run order
    RichText(Vec<TextRun>),
    /// Formula with the cached result the reader found, if any
    Formula {
        /// Formula source text, without the leading `=`
        formula: String,
        /// Cached evaluation result
        result: Option<Box<CellValue>>,
    },
    /// Date/time value (stored as serial number)
    DateTime(f64),
    /// Error value
    Error(String),
}

/// One run of a rich-text value.
///
/// Readers may attach per-run formatting; only the raw text matters here,
/// since answer inference compares whole-cell styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Raw text of the run
    pub text: String,
}

impl TextRun {
    /// Create a new text run.
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for CellValue {
    /// Raw stringification of the value, used as the last-resort fallback
    /// when no better text extraction applies.
    ///
    /// Numbers use their canonical decimal form: integers without a
    /// fractional part, floats through ryu otherwise. A formula with no
    /// cached result prints as its source text with a leading `=`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => f.write_str(itoa::Buffer::new().format(*i)),
            CellValue::Float(x) | CellValue::DateTime(x) => f.write_str(&format_number(*x)),
            CellValue::String(s) => f.write_str(s),
            CellValue::RichText(runs) => {
                for run in runs {
                    f.write_str(&run.text)?;
                }
                Ok(())
            },
            CellValue::Formula { formula, result } => match result {
                Some(value) => value.fmt(f),
                None => write!(f, "={formula}"),
            },
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

/// Canonical decimal form of a float.
///
/// Spreadsheet readers report integral numbers as floats; printing `42.0`
/// as `42` keeps option texts in the form quiz authors typed them.
pub(crate) fn format_number(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < i64::MAX as f64 {
        itoa::Buffer::new().format(x as i64).to_string()
    } else {
        ryu::Buffer::new().format(x).to_string()
    }
}
