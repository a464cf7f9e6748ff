use serde::{Deserialize, Serialize};

/// File extensions the form's picker accepts. A UI hint only:
/// nothing rechecks this at submit time and nothing is ever uploaded.
pub const ALLOWED_EXTENSIONS: [&str; 8] =
    ["pdf", "doc", "docx", "png", "jpg", "jpeg", "xlsx", "csv"];

/// Reference to a file the user attached to the form.
/// Held only in transient client memory; the content itself is never
/// transmitted, so all that survives serialization is name and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    pub size_bytes: u64,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
        }
    }

    /// Lowercased extension after the final dot, if any
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Whether the extension matches the picker's accept list
    pub fn has_allowed_extension(&self) -> bool {
        match self.extension() {
            Some(ext) => ALLOWED_EXTENSIONS.contains(&ext.as_str()),
            None => false,
        }
    }
}
