use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One clip captured from a web page, ephemeral input to template expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipContext {
    pub title: String,
    pub url: String,
    pub content: String,
    /// ISO calendar date (YYYY-MM-DD), no time component.
    pub date: String,
}

impl ClipContext {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::with_date(title, url, content, Utc::now().format("%Y-%m-%d").to_string())
    }

    pub fn with_date(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
            date: date.into(),
        }
    }

    /// The fixed clip used by the "test settings" action.
    pub fn sample() -> Self {
        Self::new(
            "Clipvault Test Note",
            "https://example.com",
            "This is a test note generated by clipvault.",
        )
    }
}

/// The resolved output of the engine: one addressable note-creation request,
/// consumed exactly once by the host action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRequest {
    pub vault: String,
    pub file_path: String,
    pub body: String,
}
