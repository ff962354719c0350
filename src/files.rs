//! Local file classification and preview data.
//!
//! The category here is derived once from the filename extension and drives
//! only the optimistic preview layout. It is independent of the `file_type`
//! the server reports in the upload response, which drives the reply text.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::message::FilePreview;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Image,
    Pdf,
    Doc,
    Text,
    Other,
}

/// A file the user picked, read into memory and classified.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub category: FileCategory,
}

impl SelectedFile {
    pub fn new(name: String, bytes: Vec<u8>) -> Self {
        let category = FileCategory::from_name(&name);
        Self {
            name,
            bytes,
            category,
        }
    }

    /// Builds the preview message shown before the upload round trip.
    pub fn preview(&self) -> FilePreview {
        let data_url = match self.category {
            FileCategory::Image => Some(image_data_url(&self.name, &self.bytes)),
            _ => None,
        };
        FilePreview {
            name: self.name.clone(),
            category: self.category,
            data_url,
        }
    }
}

impl FileCategory {
    /// Classifies a filename by extension, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, e)| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" => FileCategory::Image,
            "pdf" => FileCategory::Pdf,
            "doc" | "docx" => FileCategory::Doc,
            "txt" => FileCategory::Text,
            _ => FileCategory::Other,
        }
    }
}

/// Inline `data:` URL for an image thumbnail, built from the local bytes so
/// the preview never waits on the network.
fn image_data_url(name: &str, bytes: &[u8]) -> String {
    let mime = match name
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default()
        .as_str()
    {
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "image/jpeg",
    };
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}
