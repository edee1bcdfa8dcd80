//! Style part extractors.
//!
//! Each extractor inspects one aspect of a [`CellStyle`] and returns a
//! signature fragment, or `None` when that aspect carries no signal. They
//! are plain function pointers so callers can compose custom lists for
//! testing or for sheets with unusual conventions.

use smallvec::SmallVec;

use crate::cell::style::{CellStyle, Color, Fill};
use crate::cell::value::format_number;

/// One part extractor: a fragment of the signature, or nothing.
pub type StylePartExtractor = fn(&CellStyle) -> Option<String>;

/// ARGB code spreadsheet apps write when they serialize an explicit
/// default black font. Suppressed so that cells with and without the
/// explicit record compare equal.
///
/// Empirical authoring-default heuristic, not color theory; revisit here
/// without touching the extraction structure.
pub const DEFAULT_FONT_ARGB: &str = "FF000000";

/// Theme palette index of the default body text color (black). Suppressed
/// unless a tint makes it visually distinct. Same caveat as
/// [`DEFAULT_FONT_ARGB`].
pub const DEFAULT_FONT_THEME: u32 = 1;

/// Default extractors in execution order.
///
/// The order is part of the canonical signature form and must not change
/// between comparisons.
pub const DEFAULT_EXTRACTORS: &[StylePartExtractor] =
    &[font_color_part, fill_part, font_flags_part, border_part];

type Fragments = SmallVec<[String; 4]>;

fn join(fragments: Fragments) -> Option<String> {
    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join("|"))
    }
}

/// Font color fragment.
///
/// Emits `fc-argb:`, `fc-theme:` (+`fc-tint:`), and `fc-indexed:` tags for
/// whichever spellings the color carries, normalizing away the default
/// black spellings: an explicit [`DEFAULT_FONT_ARGB`] code and a bare
/// theme [`DEFAULT_FONT_THEME`] read the same as no font color at all.
pub fn font_color_part(style: &CellStyle) -> Option<String> {
    let color = style.font.as_ref()?.color.as_ref()?;
    let mut fragments = Fragments::new();

    if let Some(code) = &color.argb
        && code != DEFAULT_FONT_ARGB
    {
        fragments.push(format!("fc-argb:{code}"));
    }

    if let Some(theme) = color.theme
        && (theme != DEFAULT_FONT_THEME || color.tint.is_some())
    {
        fragments.push(format!("fc-theme:{theme}"));
        if let Some(tint) = color.tint {
            fragments.push(format!("fc-tint:{}", format_number(tint)));
        }
    }

    if let Some(indexed) = color.indexed {
        fragments.push(format!("fc-indexed:{indexed}"));
    }

    join(fragments)
}

/// Fill fragment, pattern fills only.
///
/// Unlike font colors, fill colors get no default suppression: a truly
/// unfilled cell has no pattern record at all, so any color present is a
/// real signal. Foreground tags are `bg-*`, background tags `bg2-*`, and
/// the pattern kind is emitted unless it is `"none"`.
pub fn fill_part(style: &CellStyle) -> Option<String> {
    let Fill::Pattern { pattern_type, fg_color, bg_color } = &style.fill else {
        return None;
    };
    let mut fragments = Fragments::new();

    if let Some(fg) = fg_color {
        push_color_tags(&mut fragments, fg, "bg", true);
    }
    if let Some(bg) = bg_color {
        push_color_tags(&mut fragments, bg, "bg2", false);
    }
    if let Some(kind) = pattern_type
        && kind != "none"
    {
        fragments.push(format!("pattern:{kind}"));
    }

    join(fragments)
}

fn push_color_tags(fragments: &mut Fragments, color: &Color, tag: &str, with_indexed: bool) {
    if let Some(code) = &color.argb {
        fragments.push(format!("{tag}-argb:{code}"));
    }
    if let Some(theme) = color.theme {
        fragments.push(format!("{tag}-theme:{theme}"));
    }
    if with_indexed && let Some(indexed) = color.indexed {
        fragments.push(format!("{tag}-indexed:{indexed}"));
    }
}

/// Font flag fragment: decoration flags, family name, and size.
pub fn font_flags_part(style: &CellStyle) -> Option<String> {
    let font = style.font.as_ref()?;
    let mut fragments = Fragments::new();

    if font.bold {
        fragments.push("bold".to_string());
    }
    if font.italic {
        fragments.push("italic".to_string());
    }
    if font.underline {
        fragments.push("underline".to_string());
    }
    if font.strike {
        fragments.push("strike".to_string());
    }
    if let Some(name) = &font.name {
        fragments.push(format!("fn:{name}"));
    }
    if let Some(size) = font.size {
        fragments.push(format!("fs:{}", format_number(size)));
    }

    join(fragments)
}

/// Border fragment.
///
/// Walks the edges in top/bottom/left/right order, emitting `<e>:<style>`
/// per drawn edge and `<e>c:<argb>` when the edge has an explicit color
/// code. The parts are comma-joined and wrapped in a single `border:`
/// fragment so border detail never collides with the other extractors'
/// tags.
pub fn border_part(style: &CellStyle) -> Option<String> {
    let border = style.border.as_ref()?;
    let mut parts: SmallVec<[String; 8]> = SmallVec::new();

    let edges = [
        ("t", &border.top),
        ("b", &border.bottom),
        ("l", &border.left),
        ("r", &border.right),
    ];
    for (letter, edge) in edges {
        let Some(edge) = edge else { continue };
        parts.push(format!("{letter}:{}", edge.style));
        if let Some(code) = edge.color.as_ref().and_then(|c| c.argb.as_ref()) {
            parts.push(format!("{letter}c:{code}"));
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(format!("border:{}", parts.join(",")))
    }
}
