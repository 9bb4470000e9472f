//! String helpers used by the validation rules and for display purposes.
//!
//! These helpers are intentionally small; they treat an absent value the same
//! way the rules do so callers don't have to special-case `None`.

/// `true` when the value is absent, empty, or made only of characters at or
/// below U+0020 (space and the ASCII control characters).
///
/// Unicode spaces such as U+00A0 or U+2003 are content, not blank.
///
/// Example: `None`, `Some("")`, `Some(" \t")`, `Some("\u{7}")` -> `true`
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim_matches(|c: char| c <= ' ').is_empty())
}

/// Mask all but the last four characters of a card number.
///
/// Example: `"42345678912345"` -> `"**********2345"`. Values of four
/// characters or fewer are returned as-is; absent values render as `"-"`.
pub fn mask_card_number(value: Option<&str>) -> String {
    let Some(s) = value else {
        return "-".to_string();
    };
    let count = s.chars().count();
    if count <= 4 {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if i < count - 4 {
            out.push('*');
        } else {
            out.push(c);
        }
    }
    out
}
