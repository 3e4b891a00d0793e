//! Folder template grammar: `(segment/)*{title}`.
//!
//! A folder template is zero or more path segments, each followed by a `/`,
//! with the literal `{title}` placeholder as the final component. Segments
//! are drawn from an identifier-safe character set (letters and digits of any
//! script, emoji, whitespace, and a small punctuation set) so that every
//! accepted template is a well-formed relative path inside a vault.
//!
//! Validation walks the template character by character instead of matching a
//! dense Unicode regex, which keeps the accepted set auditable.

use crate::error::ValidationError;

/// The placeholder a folder template must end with.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Punctuation allowed anywhere in a path segment.
const SEGMENT_PUNCTUATION: &str = "()-_!@#$%^&+={}[];',~";

/// Validates `template` against the folder grammar.
///
/// The template is matched in its entirety after trimming. `{title}` must
/// occur exactly once, as the last path component; every preceding segment
/// must be non-empty and identifier-safe. The bare template `{title}` (zero
/// segments) is valid.
pub fn validate(template: &str) -> Result<(), ValidationError> {
    let template = template.trim();

    if !template.ends_with(TITLE_PLACEHOLDER)
        || template.matches(TITLE_PLACEHOLDER).count() != 1
    {
        return Err(ValidationError::InvalidFolderFormat);
    }

    let prefix = &template[..template.len() - TITLE_PLACEHOLDER.len()];
    if prefix.is_empty() {
        return Ok(());
    }
    if !prefix.ends_with('/') {
        return Err(ValidationError::InvalidFolderFormat);
    }

    prefix[..prefix.len() - 1]
        .split('/')
        .try_for_each(validate_segment)
}

fn validate_segment(segment: &str) -> Result<(), ValidationError> {
    let mut chars = segment.chars();
    match chars.next() {
        // Empty segment: "a//{title}" or a template starting with "/".
        None => return Err(ValidationError::InvalidFolderFormat),
        Some(first) if !is_segment_start(first) => {
            return Err(ValidationError::InvalidFolderFormat)
        }
        Some(_) => {}
    }
    if chars.all(is_segment_char) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFolderFormat)
    }
}

/// A segment may contain dots but not start with one, so relative-path
/// tokens like "." and ".." never validate.
fn is_segment_start(ch: char) -> bool {
    ch != '.' && is_segment_char(ch)
}

fn is_segment_char(ch: char) -> bool {
    ch.is_alphanumeric()
        || ch.is_whitespace()
        || ch == '.'
        || SEGMENT_PUNCTUATION.contains(ch)
        || is_emoji(ch)
}

/// Emoji and emoji-modifier code points, by explicit range. Covers the
/// pictographic blocks, regional indicators, keycap/variation machinery, and
/// the joiners that stitch multi-codepoint emoji together.
fn is_emoji(ch: char) -> bool {
    matches!(
        u32::from(ch),
        0x1F000..=0x1FAFF // pictographs, symbols, regional indicators, modifiers
            | 0x2600..=0x27BF // miscellaneous symbols and dingbats
            | 0x2B00..=0x2BFF // arrows and stars (⭐, ⬆)
            | 0xFE0E..=0xFE0F // variation selectors
            | 0x200D // zero width joiner
            | 0x20E3 // combining enclosing keycap
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(template: &str) -> bool {
        validate(template).is_ok()
    }

    #[test]
    fn accepts_bare_title() {
        assert!(is_valid("{title}"));
    }

    #[test]
    fn accepts_single_and_nested_folders() {
        assert!(is_valid("Clips/{title}"));
        assert!(is_valid("Browser Clippings/{title}"));
        assert!(is_valid("Clips/Sub/{title}"));
        assert!(is_valid("a/b/c/d/{title}"));
    }

    #[test]
    fn accepts_unicode_and_emoji_segments() {
        assert!(is_valid("笔记/{title}"));
        assert!(is_valid("Заметки/Веб/{title}"));
        assert!(is_valid("📚 Books/{title}"));
        assert!(is_valid("🧑‍💻 Dev/{title}"));
    }

    #[test]
    fn accepts_segment_punctuation() {
        assert!(is_valid("Inbox (web)/{title}"));
        assert!(is_valid("it's-a_note!/{title}"));
        assert!(is_valid("v1.2 notes/{title}"));
    }

    #[test]
    fn trims_before_matching() {
        assert!(is_valid("  Clips/{title}  "));
        assert!(is_valid("\tClips/{title}\n"));
    }

    #[test]
    fn rejects_missing_or_misplaced_title() {
        assert!(!is_valid(""));
        assert!(!is_valid("Clips"));
        assert!(!is_valid("Clips/"));
        assert!(!is_valid("{title}/Clips"));
        assert!(!is_valid("Clips/{title}/more"));
    }

    #[test]
    fn rejects_repeated_title_placeholder() {
        assert!(!is_valid("{title}/{title}"));
        assert!(!is_valid("Clips/{title}/{title}"));
    }

    #[test]
    fn rejects_title_not_separated_from_segment() {
        assert!(!is_valid("Clips{title}"));
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(!is_valid("/{title}"));
        assert!(!is_valid("Clips//{title}"));
    }

    #[test]
    fn rejects_dot_leading_segments() {
        assert!(!is_valid("./{title}"));
        assert!(!is_valid("../{title}"));
        assert!(!is_valid(".hidden/{title}"));
        // An interior dot is fine.
        assert!(is_valid("notes.archive/{title}"));
    }

    #[test]
    fn rejects_characters_outside_the_safe_set() {
        assert!(!is_valid("Clips\u{0007}/{title}"));
        assert!(!is_valid("Clips\u{0000}/{title}"));
        assert!(!is_valid("a:b/{title}"));
        assert!(!is_valid("a*b/{title}"));
        assert!(!is_valid("a\"b/{title}"));
    }
}
