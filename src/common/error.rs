//! Error types for quiz sheet processing.
//!
//! The inference core itself is total: signature extraction and outlier
//! detection always return a best-effort answer. Errors only appear at the
//! edges, where callers select strategies by name or require a sheet to have
//! produced usable content.

use thiserror::Error;

/// Main error type for keycell operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No row of the sheet parsed into a question
    #[error("no questions could be parsed from the sheet")]
    NoQuestions,

    /// Unrecognized detection strategy name
    #[error("unknown detection strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type for keycell operations.
pub type Result<T> = std::result::Result<T, Error>;
