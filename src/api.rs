//! HTTP client for the chatbot backend.
//!
//! Two operations: `POST /api/chat` with a JSON body and `POST /api/upload`
//! with a multipart form. Both return JSON that either carries the payload or
//! an `error` field; the backend reports application errors in the body (with
//! a 4xx/5xx status for uploads), so responses are parsed regardless of
//! status and only request/decode failures surface as `Err`.

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;

/// Fixed reply when the chat request itself fails (network unreachable,
/// malformed response).
pub const CHAT_TRANSPORT_ERROR: &str = "Sorry, there was a problem connecting to the server.";

/// Fixed reply when the upload request itself fails.
pub const UPLOAD_TRANSPORT_ERROR: &str = "Sorry, there was a problem uploading your file.";

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub page_count: Option<u64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub analysis: Analysis,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn send_message(&self, message: &str) -> anyhow::Result<ChatResponse> {
        let res = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&json!({ "message": message }))
            .send()
            .await?
            .json::<ChatResponse>()
            .await?;
        Ok(res)
    }

    pub async fn upload_file(&self, name: &str, bytes: Vec<u8>) -> anyhow::Result<UploadResponse> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(name.to_string()));
        let res = self
            .http
            .post(format!("{}/api/upload", self.base_url))
            .multipart(form)
            .send()
            .await?
            .json::<UploadResponse>()
            .await?;
        Ok(res)
    }
}

/// Maps a chat response to the bot message text.
pub fn chat_reply(res: &ChatResponse) -> String {
    match &res.error {
        Some(e) => format!("Sorry, I encountered an error: {e}"),
        None => res.response.clone().unwrap_or_default(),
    }
}

/// Maps an upload response to the bot message text.
///
/// The branch is picked from the server-reported `file_type`, never from the
/// locally inferred category.
pub fn upload_reply(res: &UploadResponse) -> String {
    if let Some(e) = &res.error {
        return format!("I couldn't process that file properly: {e}");
    }

    match res.file_type.as_str() {
        "pdf" => {
            let mut reply = format!(
                "I've analyzed your PDF ({}):\n• {} pages\n",
                res.filename,
                res.analysis.page_count.unwrap_or_default()
            );
            if let Some(summary) = &res.analysis.summary {
                reply.push_str(&format!("• Summary: {summary}"));
            }
            reply
        }
        "png" | "jpg" | "jpeg" => match &res.analysis.caption {
            Some(caption) => format!("I see an image that appears to show: {caption}"),
            None => format!(
                "I've received your image ({}). What would you like to know about it?",
                res.filename
            ),
        },
        "txt" => {
            let mut reply = format!("I've analyzed your text file ({}).\n", res.filename);
            if let Some(summary) = &res.analysis.summary {
                reply.push_str(&format!("Summary: {summary}"));
            }
            reply
        }
        other => format!(
            "I've received your {} file ({}). What would you like me to help you with?",
            other.to_uppercase(),
            res.filename
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload_res(file_type: &str, filename: &str, analysis: Analysis) -> UploadResponse {
        UploadResponse {
            file_type: file_type.into(),
            filename: filename.into(),
            analysis,
            error: None,
        }
    }

    #[test]
    fn chat_reply_prefers_error_field() {
        let res = ChatResponse {
            response: Some("ignored".into()),
            error: Some("X".into()),
        };
        assert_eq!(chat_reply(&res), "Sorry, I encountered an error: X");
    }

    #[test]
    fn chat_reply_passes_response_through() {
        let res = ChatResponse {
            response: Some("hello there".into()),
            error: None,
        };
        assert_eq!(chat_reply(&res), "hello there");
    }

    #[test]
    fn upload_reply_error_field() {
        let mut res = upload_res("pdf", "r.pdf", Analysis::default());
        res.error = Some("File type not allowed".into());
        assert_eq!(
            upload_reply(&res),
            "I couldn't process that file properly: File type not allowed"
        );
    }

    #[test]
    fn upload_reply_pdf_without_summary() {
        let reply = upload_reply(&upload_res(
            "pdf",
            "r.pdf",
            Analysis {
                page_count: Some(3),
                ..Default::default()
            },
        ));
        assert!(reply.starts_with("I've analyzed your PDF (r.pdf):\n"));
        assert!(reply.contains("• 3 pages\n"));
        assert!(!reply.contains("Summary"));
    }

    #[test]
    fn upload_reply_pdf_with_summary() {
        let reply = upload_reply(&upload_res(
            "pdf",
            "r.pdf",
            Analysis {
                page_count: Some(10),
                summary: Some("a contract".into()),
                ..Default::default()
            },
        ));
        assert!(reply.ends_with("• Summary: a contract"));
    }

    #[test]
    fn upload_reply_image_caption() {
        let reply = upload_reply(&upload_res(
            "jpeg",
            "photo.jpeg",
            Analysis {
                caption: Some("a cat on a sofa".into()),
                ..Default::default()
            },
        ));
        assert_eq!(reply, "I see an image that appears to show: a cat on a sofa");
    }

    #[test]
    fn upload_reply_image_without_caption() {
        let reply = upload_reply(&upload_res("png", "photo.png", Analysis::default()));
        assert_eq!(
            reply,
            "I've received your image (photo.png). What would you like to know about it?"
        );
    }

    #[test]
    fn upload_reply_text_with_summary() {
        let reply = upload_reply(&upload_res(
            "txt",
            "notes.txt",
            Analysis {
                summary: Some("meeting notes".into()),
                ..Default::default()
            },
        ));
        assert_eq!(
            reply,
            "I've analyzed your text file (notes.txt).\nSummary: meeting notes"
        );
    }

    #[test]
    fn upload_reply_other_type_uses_server_type_uppercased() {
        let reply = upload_reply(&upload_res("csv", "data.csv", Analysis::default()));
        assert_eq!(
            reply,
            "I've received your CSV file (data.csv). What would you like me to help you with?"
        );
    }
}
