use crate::files::FileCategory;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Label shown on the message element (`data-sender`).
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Chatbot",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "message user-message",
            Sender::Bot => "message bot-message",
        }
    }
}

/// A locally rendered preview for a file the user picked.
///
/// `data_url` is only set for images; the other categories render as
/// icon/filename blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePreview {
    pub name: String,
    pub category: FileCategory,
    pub data_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Text(String),
    Preview(FilePreview),
}

/// One entry in the chat log. Messages are append-only: once pushed they are
/// never edited or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub body: MessageBody,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            body: MessageBody::Text(text.into()),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            body: MessageBody::Text(text.into()),
        }
    }

    pub fn preview(preview: FilePreview) -> Self {
        Self {
            sender: Sender::User,
            body: MessageBody::Preview(preview),
        }
    }
}
