use dioxus::prelude::*;

use crate::files::FileCategory;
use crate::linkify::linkify;
use crate::message::{FilePreview, Message, MessageBody};

#[component]
pub fn MessageEl(msg: Message) -> Element {
    let class = msg.sender.css_class();
    let label = msg.sender.label();
    match msg.body {
        MessageBody::Text(content) => rsx! {
            div { class, "data-sender": label, {linkify(&content)} }
        },
        MessageBody::Preview(preview) => rsx! {
            div { class, "data-sender": label,
                FilePreviewEl { preview }
            }
        },
    }
}

/// Local preview layouts: image thumbnail, pdf/doc icon blocks, or the bare
/// filename for everything else.
#[component]
fn FilePreviewEl(preview: FilePreview) -> Element {
    match preview.category {
        FileCategory::Image => {
            let src = preview.data_url.clone().unwrap_or_default();
            rsx! {
                img { class: "file-preview", src, alt: "{preview.name}" }
            }
        }
        FileCategory::Pdf => rsx! {
            div { class: "pdf-preview",
                div { class: "pdf-icon", "PDF" }
                div { class: "pdf-name", "{preview.name}" }
            }
        },
        FileCategory::Doc => rsx! {
            div { class: "doc-preview",
                div { class: "doc-icon", "DOC" }
                div { class: "doc-name", "{preview.name}" }
            }
        },
        FileCategory::Text | FileCategory::Other => rsx! {
            "File: {preview.name}"
        },
    }
}
