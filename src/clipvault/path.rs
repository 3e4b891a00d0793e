//! Folder template → concrete relative note path.

use crate::grammar::TITLE_PLACEHOLDER;

/// Resolves a folder template and a note title into the relative path the
/// note is stored under.
///
/// The `{title}` placeholder is removed from the trimmed template, the
/// remaining folder prefix is normalized to end in exactly one `/`, and the
/// title is appended. No file extension is added; serialization format is the
/// vault application's concern.
///
/// For any template accepted by [`crate::grammar::validate`] this yields a
/// well-formed relative path with a single separator before the title.
pub fn resolve(folder_template: &str, title: &str) -> String {
    let mut prefix = folder_template.trim().replacen(TITLE_PLACEHOLDER, "", 1);
    if !prefix.is_empty() && !prefix.ends_with('/') {
        prefix.push('/');
    }
    prefix + title
}
