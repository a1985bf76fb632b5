// SPDX-License-Identifier: MPL-2.0
//! Color keyword table for overlay commands.

/// Recognized color keywords and their hex tokens.
///
/// Declaration order is the tie-break: when a command mentions several
/// colors, the first keyword in this table that appears anywhere in the
/// text wins, regardless of where it occurs. Kept as an ordered slice
/// rather than a map so that rule stays deterministic.
pub(crate) const COLOR_KEYWORDS: [(&str, &str); 6] = [
    ("red", "#eb5757"),
    ("blue", "#2f80ed"),
    ("green", "#27ae60"),
    ("yellow", "#f2c94c"),
    ("white", "#ffffff"),
    ("black", "#000000"),
];

/// Scans normalized command text for a color keyword.
pub(crate) fn detect_color(normalized: &str) -> Option<&'static str> {
    COLOR_KEYWORDS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_keyword_anywhere_in_text() {
        assert_eq!(detect_color("a lovely green grid"), Some("#27ae60"));
    }

    #[test]
    fn returns_none_without_keyword() {
        assert_eq!(detect_color("plain grid"), None);
    }

    #[test]
    fn declaration_order_breaks_ties() {
        // "blue" occurs first in the text, but "red" is declared first.
        assert_eq!(detect_color("blue and red crosshair"), Some("#eb5757"));
    }
}
