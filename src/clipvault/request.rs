//! Final clip request assembly and its URI surface.

use crate::error::ValidationError;
use crate::model::{ClipContext, ClipRequest};
use crate::path;
use crate::settings::Settings;
use crate::template;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Query-value encoding with the same unreserved set as JavaScript's
/// `encodeURIComponent`: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is
/// escaped, so the three URI fields carry no raw `&`, `=`, or whitespace.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the note-creation request for one clip, short-circuiting on the
/// first validation failure.
///
/// Check order is fixed: empty required fields, character policy on the vault
/// name and folder template, folder grammar, then advanced-template
/// emptiness. When advanced formatting is off the body bypasses the expander
/// entirely and is the literal `url`, blank line, `content`.
pub fn build(settings: &Settings, ctx: &ClipContext) -> Result<ClipRequest, ValidationError> {
    settings.validate()?;

    let body = if settings.advanced_formatting {
        template::expand(&settings.content_template, ctx)
    } else {
        format!("{}\n\n{}", ctx.url, ctx.content)
    };

    Ok(ClipRequest {
        vault: settings.vault_name.clone(),
        file_path: path::resolve(&settings.folder_template, &ctx.title),
        body,
    })
}

impl ClipRequest {
    /// The `obsidian://new` URI consumed by the host action, each field
    /// percent-encoded independently.
    pub fn to_uri(&self) -> String {
        format!(
            "obsidian://new?vault={}&file={}&content={}",
            utf8_percent_encode(&self.vault, URI_COMPONENT),
            utf8_percent_encode(&self.file_path, URI_COMPONENT),
            utf8_percent_encode(&self.body, URI_COMPONENT),
        )
    }
}
