//! Built-in outlier detection strategies.

use std::collections::HashMap;

use super::DetectionStrategy;
use crate::signature::Signature;

/// Minimum-frequency detection with a content-priority tie-break.
///
/// The least frequent signature is the outlier. When several signatures
/// tie at the minimum count - incidental background banding is the usual
/// culprit - the tie is broken by how intentional the styling looks: an
/// explicit font color outranks a theme font color, which outranks bold,
/// which outranks a fill color. The priority only ranks signatures already
/// in the minimum-frequency set; it never overrides frequency itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinFrequency;

impl DetectionStrategy for MinFrequency {
    fn detect(&self, signatures: &[Signature]) -> usize {
        detect_min_frequency(signatures, true)
    }
}

/// Minimum-frequency detection with no content weighting.
///
/// Ties at the minimum count go to the signature whose first occurrence
/// comes earliest in the row.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinFrequencyPlain;

impl DetectionStrategy for MinFrequencyPlain {
    fn detect(&self, signatures: &[Signature]) -> usize {
        detect_min_frequency(signatures, false)
    }
}

/// First element whose signature differs from the majority.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstDifferent;

impl DetectionStrategy for FirstDifferent {
    fn detect(&self, signatures: &[Signature]) -> usize {
        if signatures.len() < 2 {
            return 0;
        }

        let counts = count_signatures(signatures);

        // Majority signature; on count ties the first encountered wins.
        let mut majority = signatures[0].as_str();
        let mut max_count = 0;
        for signature in signatures {
            let count = counts[signature.as_str()];
            if count > max_count {
                max_count = count;
                majority = signature.as_str();
            }
        }

        signatures
            .iter()
            .position(|s| s.as_str() != majority)
            .unwrap_or(0)
    }
}

fn count_signatures(signatures: &[Signature]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for signature in signatures {
        *counts.entry(signature.as_str()).or_insert(0) += 1;
    }
    counts
}

fn detect_min_frequency(signatures: &[Signature], weighted: bool) -> usize {
    if signatures.len() < 2 {
        return 0;
    }

    let counts = count_signatures(signatures);

    // One distinct signature means no signal at all.
    if counts.len() == 1 {
        return 0;
    }

    let min_count = counts.values().copied().min().unwrap_or(0);

    // Distinct signatures at the minimum count, in first-occurrence order.
    let mut tied: Vec<&str> = Vec::new();
    for signature in signatures {
        let text = signature.as_str();
        if counts[text] == min_count && !tied.contains(&text) {
            tied.push(text);
        }
    }

    let chosen = if weighted && tied.len() > 1 {
        let mut best = tied[0];
        let mut best_priority = tie_break_priority(best);
        for &candidate in &tied[1..] {
            let priority = tie_break_priority(candidate);
            if priority > best_priority {
                best = candidate;
                best_priority = priority;
            }
        }
        best
    } else {
        tied[0]
    };

    signatures
        .iter()
        .position(|s| s.as_str() == chosen)
        .unwrap_or(0)
}

/// Content priority used to break minimum-frequency ties.
///
/// Font-color changes are a stronger intentional signal than fills, which
/// spreadsheets also use for row banding. Matching is fragment-aware:
/// `bold` must be a whole fragment and the color tags are fragment
/// prefixes, so `fn:Bolder` or a `border:` blob never scores.
fn tie_break_priority(signature: &str) -> u8 {
    let mut priority = 0;
    for fragment in signature.split('|') {
        let score = if fragment.starts_with("fc-argb:") {
            4
        } else if fragment.starts_with("fc-theme:") {
            3
        } else if fragment == "bold" {
            2
        } else if fragment.starts_with("bg-argb:") || fragment.starts_with("bg-theme:") {
            1
        } else {
            0
        };
        priority = priority.max(score);
    }
    priority
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sigs(values: &[&str]) -> Vec<Signature> {
        values.iter().copied().map(Signature::from).collect()
    }

    #[test]
    fn test_degenerate_inputs_return_zero() {
        for strategy in [
            &MinFrequency as &dyn DetectionStrategy,
            &MinFrequencyPlain,
            &FirstDifferent,
        ] {
            assert_eq!(strategy.detect(&[]), 0);
            assert_eq!(strategy.detect(&sigs(&["x"])), 0);
        }
    }

    #[test]
    fn test_all_identical_returns_zero() {
        let signatures = sigs(&["default", "default", "default"]);
        assert_eq!(MinFrequency.detect(&signatures), 0);
        assert_eq!(MinFrequencyPlain.detect(&signatures), 0);
        assert_eq!(FirstDifferent.detect(&signatures), 0);
    }

    #[test]
    fn test_unique_minority_wins() {
        let signatures = sigs(&["default", "default", "bold", "default"]);
        assert_eq!(MinFrequency.detect(&signatures), 2);
        assert_eq!(MinFrequencyPlain.detect(&signatures), 2);
    }

    #[test]
    fn test_minority_first_occurrence_returned() {
        // The rare signature appears twice; its first position is reported.
        let signatures = sigs(&["a", "a", "a", "b", "a", "b"]);
        assert_eq!(MinFrequency.detect(&signatures), 3);
    }

    #[test]
    fn test_tie_prefers_font_color_over_fill() {
        let signatures = sigs(&["fc-argb:FFFF0000", "bg-argb:FFFFFF00"]);
        assert_eq!(MinFrequency.detect(&signatures), 0);

        // Order independence: the font-colored one wins from either slot.
        let signatures = sigs(&["bg-argb:FFFFFF00", "fc-argb:FFFF0000"]);
        assert_eq!(MinFrequency.detect(&signatures), 1);
    }

    #[test]
    fn test_tie_priority_ladder() {
        let signatures = sigs(&["bold", "fc-theme:5"]);
        assert_eq!(MinFrequency.detect(&signatures), 1);

        let signatures = sigs(&["bg-theme:9", "bold"]);
        assert_eq!(MinFrequency.detect(&signatures), 1);

        // Equal priority falls back to first encountered.
        let signatures = sigs(&["fc-argb:FF00FF00", "fc-argb:FFFF0000"]);
        assert_eq!(MinFrequency.detect(&signatures), 0);
    }

    #[test]
    fn test_priority_never_overrides_frequency() {
        // The font-colored signature is *not* in the minimum set; the
        // lone fill signature stays the outlier.
        let signatures = sigs(&[
            "fc-argb:FFFF0000",
            "fc-argb:FFFF0000",
            "bg-argb:FFFFFF00",
            "fc-argb:FFFF0000",
        ]);
        assert_eq!(MinFrequency.detect(&signatures), 2);
    }

    #[test]
    fn test_priority_matching_is_fragment_aware() {
        // "fn:Bolder" contains the letters "bold" but is not the bold flag.
        let signatures = sigs(&["fn:Bolder", "bg-argb:FFFFFF00"]);
        assert_eq!(MinFrequency.detect(&signatures), 1);
    }

    #[test]
    fn test_plain_variant_ignores_priority() {
        let signatures = sigs(&["bg-argb:FFFFFF00", "fc-argb:FFFF0000"]);
        assert_eq!(MinFrequencyPlain.detect(&signatures), 0);
        assert_eq!(MinFrequency.detect(&signatures), 1);
    }

    #[test]
    fn test_first_different_finds_leading_outlier() {
        let signatures = sigs(&["bold", "default", "default", "default"]);
        assert_eq!(FirstDifferent.detect(&signatures), 0);

        let signatures = sigs(&["default", "default", "bold", "default"]);
        assert_eq!(FirstDifferent.detect(&signatures), 2);
    }

    #[test]
    fn test_first_different_majority_tie_uses_first_encountered() {
        // Two-way split: "a" is encountered first, so it is the majority
        // and the first "b" is the outlier.
        let signatures = sigs(&["a", "a", "b", "b"]);
        assert_eq!(FirstDifferent.detect(&signatures), 2);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn signature_strategy() -> impl Strategy<Value = Signature> {
            prop_oneof![
                Just(Signature::from("default")),
                Just(Signature::from("bold")),
                Just(Signature::from("fc-argb:FFFF0000")),
                Just(Signature::from("fc-theme:4")),
                Just(Signature::from("bg-argb:FFFFFF00|pattern:solid")),
            ]
        }

        fn all_strategies() -> [&'static dyn DetectionStrategy; 3] {
            [&MinFrequency, &MinFrequencyPlain, &FirstDifferent]
        }

        proptest! {
            #[test]
            fn prop_result_always_in_bounds(
                signatures in prop::collection::vec(signature_strategy(), 0..12)
            ) {
                for strategy in all_strategies() {
                    let index = strategy.detect(&signatures);
                    if signatures.is_empty() {
                        prop_assert_eq!(index, 0);
                    } else {
                        prop_assert!(index < signatures.len());
                    }
                }
            }

            #[test]
            fn prop_detection_is_idempotent(
                signatures in prop::collection::vec(signature_strategy(), 0..12)
            ) {
                for strategy in all_strategies() {
                    prop_assert_eq!(strategy.detect(&signatures), strategy.detect(&signatures));
                }
            }
        }
    }
}
