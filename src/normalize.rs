//! Member string canonicalization.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Canonicalize a raw member identifier.
///
/// Drops every non-printable character, then collapses runs of ASCII spaces
/// to one and trims both ends. Non-printable means control, format,
/// private-use and unassigned code points, plus every separator except the
/// ASCII space: NBSP, U+3000 and tabs vanish without leaving a gap, so
/// `"广\u{00A0}州"` reads as `"广州"`. Everything else, including `-`
/// separators and CJK text, is kept as-is.
pub fn normalize(raw: &str) -> String {
    let printable: String = raw.chars().filter(|&c| is_printable(c)).collect();
    printable.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}
