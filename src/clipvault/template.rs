//! Note content templating.
//!
//! Substitution policy: only the **first** occurrence of each placeholder is
//! replaced. The browser extension this engine descends from has always
//! behaved this way, and saved user templates rely on it; repeated
//! placeholders stay literal rather than silently multiplying content.

use crate::model::ClipContext;

/// The canonical content template used whenever advanced formatting is off.
pub const DEFAULT_CONTENT_TEMPLATE: &str = "{url}\n\n{content}";

/// Expands the recognized placeholders in `template` against `ctx`.
///
/// Placeholders are substituted literally, with no escaping and no recursive
/// expansion, in the fixed order `{url}`, `{title}`, `{content}`, `{date}`.
/// A placeholder absent from the template is simply not substituted.
pub fn expand(template: &str, ctx: &ClipContext) -> String {
    template
        .replacen("{url}", &ctx.url, 1)
        .replacen("{title}", &ctx.title, 1)
        .replacen("{content}", &ctx.content, 1)
        .replacen("{date}", &ctx.date, 1)
}
