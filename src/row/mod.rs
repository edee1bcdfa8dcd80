//! Row parsing: from extracted cells to quiz questions.
//!
//! One sheet row is one question followed by its option cells. The parser
//! pulls the texts through [`cell_text`], drops the cells that are not
//! real options (empties, and merged-cell artifacts repeating the question
//! text), derives one signature per remaining option, and asks the outlier
//! detector which option the styling singles out.
//!
//! Rows whose options all share one signature carry no style signal; they
//! still parse (the answer defaults to the first option) but are flagged
//! so the application can warn the user.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::common::{Error, Result};
use crate::detect::find_outlier;
use crate::signature::{Signature, signature_of};
use crate::text::cell_text;

/// Minimum cells a question row needs: question plus two options.
const MIN_ROW_CELLS: usize = 3;

/// Minimum options left after filtering for the row to count.
const MIN_OPTIONS: usize = 2;

/// One parsed quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Source row number, as the reader reports it (1-based)
    pub id: u32,
    /// Question text from the first column
    pub text: String,
    /// Option texts, in sheet order
    pub options: Vec<String>,
    /// Index into `options` of the inferred correct answer
    pub correct_answer: usize,
    /// True when every option shared one signature and no style-based
    /// inference was possible
    pub undetected: bool,
}

/// Outcome of parsing a sheet's rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Questions in row order
    pub questions: Vec<Question>,
    /// Row numbers whose options were styled identically
    pub undetected_rows: Vec<u32>,
}

impl ParseOutcome {
    /// Fail with [`Error::NoQuestions`] when nothing parsed.
    pub fn require_questions(self) -> Result<Self> {
        if self.questions.is_empty() {
            Err(Error::NoQuestions)
        } else {
            Ok(self)
        }
    }
}

/// Parse a single row into a [`Question`].
///
/// Returns `None` when the row does not have valid question shape: fewer
/// than three cells, an empty question cell, or fewer than two usable
/// options once empties and question-text duplicates are dropped.
pub fn parse_row(row_number: u32, cells: &[Cell]) -> Option<Question> {
    if cells.len() < MIN_ROW_CELLS {
        return None;
    }

    let question_text = cell_text(&cells[0]);
    if question_text.is_empty() {
        return None;
    }

    // Merged question cells bleed the question text into option columns;
    // those and empty cells are not options.
    let mut options = Vec::new();
    let mut signatures: Vec<Signature> = Vec::new();
    for cell in &cells[1..] {
        let text = cell_text(cell);
        if !text.is_empty() && text != question_text {
            signatures.push(signature_of(&cell.style));
            options.push(text);
        }
    }
    if options.len() < MIN_OPTIONS {
        return None;
    }

    let undetected = signatures.iter().all(|s| s == &signatures[0]);
    let correct_answer = find_outlier(&signatures);

    Some(Question {
        id: row_number,
        text: question_text,
        options,
        correct_answer,
        undetected,
    })
}

/// Parse a whole sheet's rows.
///
/// Takes `(row_number, cells)` pairs in sheet order; rows that do not
/// parse are skipped silently, matching how quiz sheets mix headers and
/// blank separators between question rows.
pub fn parse_rows<'a, I>(rows: I) -> ParseOutcome
where
    I: IntoIterator<Item = (u32, &'a [Cell])>,
{
    let mut outcome = ParseOutcome::default();
    for (row_number, cells) in rows {
        if let Some(question) = parse_row(row_number, cells) {
            if question.undetected {
                outcome.undetected_rows.push(row_number);
            }
            outcome.questions.push(question);
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellStyle, CellValue, Color, Font};

    fn text_cell(text: &str) -> Cell {
        Cell::new(CellValue::String(text.to_string()))
    }

    fn bold_cell(text: &str) -> Cell {
        let style = CellStyle {
            font: Some(Font {
                bold: true,
                ..Font::default()
            }),
            ..CellStyle::default()
        };
        Cell::with_style(CellValue::String(text.to_string()), style)
    }

    fn colored_cell(text: &str, argb: &str) -> Cell {
        let style = CellStyle {
            font: Some(Font {
                color: Some(Color::from_argb(argb)),
                ..Font::default()
            }),
            ..CellStyle::default()
        };
        Cell::with_style(CellValue::String(text.to_string()), style)
    }

    #[test]
    fn test_basic_row() {
        let cells = vec![
            text_cell("2 + 2 = ?"),
            text_cell("3"),
            bold_cell("4"),
            text_cell("5"),
        ];
        let question = parse_row(7, &cells).unwrap();
        assert_eq!(question.id, 7);
        assert_eq!(question.text, "2 + 2 = ?");
        assert_eq!(question.options, vec!["3", "4", "5"]);
        assert_eq!(question.correct_answer, 1);
        assert!(!question.undetected);
    }

    #[test]
    fn test_too_few_cells_rejected() {
        assert!(parse_row(1, &[]).is_none());
        assert!(parse_row(1, &[text_cell("Q"), text_cell("A")]).is_none());
    }

    #[test]
    fn test_empty_question_rejected() {
        let cells = vec![
            Cell::new(CellValue::Empty),
            text_cell("A"),
            text_cell("B"),
        ];
        assert!(parse_row(1, &cells).is_none());
    }

    #[test]
    fn test_merged_cell_artifacts_excluded() {
        // The question text bleeding into option columns is not an option,
        // and its cell contributes no signature either.
        let cells = vec![
            text_cell("Pick one"),
            bold_cell("Pick one"),
            colored_cell("left", "FFFF0000"),
            text_cell("right"),
            text_cell("middle"),
        ];
        let question = parse_row(3, &cells).unwrap();
        assert_eq!(question.options, vec!["left", "right", "middle"]);
        assert_eq!(question.correct_answer, 0);
    }

    #[test]
    fn test_empty_option_cells_skipped() {
        let cells = vec![
            text_cell("Q"),
            text_cell("A"),
            Cell::new(CellValue::Empty),
            bold_cell("B"),
        ];
        let question = parse_row(1, &cells).unwrap();
        assert_eq!(question.options, vec!["A", "B"]);
        assert_eq!(question.correct_answer, 1);
    }

    #[test]
    fn test_single_surviving_option_rejected() {
        let cells = vec![
            text_cell("Q"),
            text_cell("A"),
            Cell::new(CellValue::Empty),
        ];
        assert!(parse_row(1, &cells).is_none());
    }

    #[test]
    fn test_uniform_styling_flagged_undetected() {
        let cells = vec![
            text_cell("Q"),
            text_cell("A"),
            text_cell("B"),
            text_cell("C"),
        ];
        let question = parse_row(1, &cells).unwrap();
        assert!(question.undetected);
        assert_eq!(question.correct_answer, 0);
    }

    #[test]
    fn test_parse_rows_aggregates_and_skips() {
        let detectable = vec![
            text_cell("Q1"),
            text_cell("A"),
            colored_cell("B", "FFFF0000"),
        ];
        let header = vec![text_cell("Questions"), text_cell("Answers")];
        let uniform = vec![text_cell("Q2"), text_cell("A"), text_cell("B")];

        let rows: Vec<(u32, &[Cell])> = vec![
            (1, header.as_slice()),
            (2, detectable.as_slice()),
            (3, uniform.as_slice()),
        ];
        let outcome = parse_rows(rows);

        assert_eq!(outcome.questions.len(), 2);
        assert_eq!(outcome.questions[0].id, 2);
        assert_eq!(outcome.questions[0].correct_answer, 1);
        assert_eq!(outcome.undetected_rows, vec![3]);
    }

    #[test]
    fn test_require_questions() {
        let empty = ParseOutcome::default();
        assert!(matches!(
            empty.require_questions(),
            Err(Error::NoQuestions)
        ));

        let cells = vec![text_cell("Q"), text_cell("A"), bold_cell("B")];
        let rows: Vec<(u32, &[Cell])> = vec![(1, cells.as_slice())];
        let outcome = parse_rows(rows).require_questions().unwrap();
        assert_eq!(outcome.questions.len(), 1);
    }

    #[test]
    fn test_question_serializes() {
        let cells = vec![text_cell("Q"), text_cell("A"), bold_cell("B")];
        let question = parse_row(1, &cells).unwrap();
        let json = serde_json::to_string(&question).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, question);
    }
}
