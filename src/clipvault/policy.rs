//! Filesystem character policy for vault names and folder templates.

use crate::error::ValidationError;

/// Characters that are unsafe in host filesystem names.
///
/// The forward slash is deliberately absent: it is structurally meaningful in
/// folder templates and is checked by the grammar, not here.
pub const FORBIDDEN_CHARS: &[char] = &['\\', ':', '*', '?', '"', '<', '>', '|'];

/// Rejects the first filesystem-unsafe character found in `s`.
pub fn validate(s: &str) -> Result<(), ValidationError> {
    match s.chars().find(|ch| FORBIDDEN_CHARS.contains(ch)) {
        Some(ch) => Err(ValidationError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}
