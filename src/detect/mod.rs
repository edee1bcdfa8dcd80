//! Outlier detection over signature lists.
//!
//! Answer-highlighting conventions almost always style exactly one option
//! differently and leave the rest at a shared baseline, so the minority
//! signature of a row marks the correct option. The detectors here are
//! total: any input length is accepted, fewer than two signatures (or a
//! row with no signal at all) deterministically yields index `0`, and the
//! result is always in bounds for non-empty input.
//!
//! Detection is pluggable through [`DetectionStrategy`]; the built-in
//! algorithms are selectable by name through [`Strategy`].
//!
//! # Examples
//!
//! ```rust
//! use keycell::{Signature, find_outlier};
//!
//! let signatures: Vec<Signature> = ["default", "default", "bold", "default"]
//!     .into_iter()
//!     .map(Signature::from)
//!     .collect();
//! assert_eq!(find_outlier(&signatures), 2);
//! ```

// Submodule declarations
pub mod strategies;

// Re-exports
pub use strategies::{FirstDifferent, MinFrequency, MinFrequencyPlain};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::Error;
use crate::signature::Signature;

/// A swappable outlier-detection algorithm.
///
/// Implementations must be total over any signature list: never panic,
/// return `0` for fewer than two elements, and return an index within
/// bounds for non-empty input.
pub trait DetectionStrategy {
    /// Index of the signature judged to be the row's outlier.
    fn detect(&self, signatures: &[Signature]) -> usize;
}

/// Named selector over the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// Least frequent signature wins; ties broken by content priority
    #[default]
    MinFrequency,
    /// Least frequent signature wins; ties broken by input order alone
    MinFrequencyPlain,
    /// First element differing from the majority signature
    FirstDifferent,
}

impl Strategy {
    /// Run this strategy.
    pub fn detect(&self, signatures: &[Signature]) -> usize {
        match self {
            Strategy::MinFrequency => MinFrequency.detect(signatures),
            Strategy::MinFrequencyPlain => MinFrequencyPlain.detect(signatures),
            Strategy::FirstDifferent => FirstDifferent.detect(signatures),
        }
    }

    /// Canonical name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::MinFrequency => "minFrequency",
            Strategy::MinFrequencyPlain => "minFrequencyPlain",
            Strategy::FirstDifferent => "firstDifferent",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minFrequency" => Ok(Strategy::MinFrequency),
            "minFrequencyPlain" => Ok(Strategy::MinFrequencyPlain),
            "firstDifferent" => Ok(Strategy::FirstDifferent),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// Find the outlier index with the default strategy.
pub fn find_outlier(signatures: &[Signature]) -> usize {
    Strategy::default().detect(signatures)
}

/// Find the outlier index with a named strategy.
pub fn find_outlier_with(signatures: &[Signature], strategy: Strategy) -> usize {
    strategy.detect(signatures)
}
