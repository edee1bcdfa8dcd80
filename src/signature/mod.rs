//! Canonical style signatures.
//!
//! A [`Signature`] is a string that summarizes everything visually
//! distinguishing a cell. Two cells look the same iff their signatures are
//! byte-for-byte equal, which is what outlier detection counts on.
//!
//! Extraction runs a fixed, ordered list of independent part extractors
//! (font color, fill, font flags, borders); each contributes a fragment or
//! nothing, the non-empty fragments are joined with `|`, and a cell with no
//! distinguishing style at all gets the sentinel `"default"`.
//!
//! # Examples
//!
//! ```rust
//! use keycell::{CellStyle, Color, Font, signature_of};
//!
//! assert_eq!(signature_of(&CellStyle::default()).as_str(), "default");
//!
//! let style = CellStyle {
//!     font: Some(Font {
//!         bold: true,
//!         color: Some(Color::from_argb("FFFF0000")),
//!         ..Font::default()
//!     }),
//!     ..CellStyle::default()
//! };
//! assert_eq!(signature_of(&style).as_str(), "fc-argb:FFFF0000|bold");
//! ```

// Submodule declarations
pub mod parts;

// Re-exports
pub use parts::{
    DEFAULT_EXTRACTORS, DEFAULT_FONT_ARGB, DEFAULT_FONT_THEME, StylePartExtractor, border_part,
    fill_part, font_color_part, font_flags_part,
};

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cell::CellStyle;

/// Canonical string encoding of a cell's visual style.
///
/// Pure value: equality, ordering, and hashing all go through the string
/// form, and deriving it from the same attributes always yields the same
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature(String);

impl Signature {
    /// Sentinel text for a cell with no distinguishing style.
    pub const DEFAULT: &'static str = "default";

    /// The sentinel signature.
    #[inline]
    pub fn default_sentinel() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    /// View the signature as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether this is the `"default"` sentinel.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }

    /// Iterate over the `|`-separated fragments of the signature.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.0.split('|')
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Signature {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Signature {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Derive the canonical signature of a style using the default extractors.
pub fn signature_of(style: &CellStyle) -> Signature {
    signature_with(style, DEFAULT_EXTRACTORS)
}

/// Derive a signature using a custom extractor list.
///
/// Extractors run in slice order; fragment order is therefore part of the
/// canonical form, so callers composing their own list must keep it fixed
/// if they want comparable signatures.
pub fn signature_with(style: &CellStyle, extractors: &[StylePartExtractor]) -> Signature {
    let mut fragments: SmallVec<[String; 4]> = SmallVec::new();
    for extract in extractors {
        if let Some(fragment) = extract(style) {
            fragments.push(fragment);
        }
    }

    if fragments.is_empty() {
        Signature::default_sentinel()
    } else {
        Signature(fragments.join("|"))
    }
}
