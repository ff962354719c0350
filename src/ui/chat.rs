//! Main chat page.
//!
//! Holds the message list and the typing flag, and orchestrates the two
//! backend calls. Every submit and every selected file becomes its own
//! spawned task: nothing serializes outstanding calls, replies append in
//! completion order, and navigating away simply abandons them.

use dioxus::document;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::api::{self, BackendClient};
use crate::app_settings::{AppSettings, DEFAULT_BACKEND_URL};
use crate::files::SelectedFile;
use crate::message::Message;
use crate::ui::chat_input::ChatInput;
use crate::ui::message::MessageEl;
use crate::ui::typing::TypingIndicator;

const GREETING: &str = "Welcome to Terminal Chatbot. I can process text, images, PDFs, and more. How can I assist you today?";

const CLOSE_NOTICE: &str = "This would close the chat in a real application.";
const MINIMIZE_NOTICE: &str = "This would minimize the chat in a real application.";

// Keeps the newest message in view after every append.
const SCROLL_TO_BOTTOM: &str =
    "const c = document.querySelector('.chat-container'); if (c) { c.scrollTop = c.scrollHeight; }";

#[component]
pub fn Chat() -> Element {
    let mut messages = use_signal(|| vec![Message::bot(GREETING)]);
    let mut typing = use_signal(|| false);
    let mut notice: Signal<Option<&'static str>> = use_signal(|| None);

    // usable immediately; saved settings replace the default once loaded
    let mut client = use_signal(|| BackendClient::new(DEFAULT_BACKEND_URL));
    let _ = use_resource(move || async move {
        let settings = AppSettings::load().await;
        client.set(BackendClient::new(settings.backend_url));
    });

    use_effect(move || {
        let _ = messages.read().len();
        let _ = document::eval(SCROLL_TO_BOTTOM);
    });

    let send_message = move |text: String| {
        let client = client.cloned();
        messages.write().push(Message::user(text.clone()));
        typing.set(true);
        spawn(async move {
            let reply = match client.send_message(&text).await {
                Ok(res) => api::chat_reply(&res),
                Err(err) => {
                    warn!("chat request failed: {err:?}");
                    api::CHAT_TRANSPORT_ERROR.to_string()
                }
            };
            // hidden on every outcome; concurrent calls race this flag and
            // the last writer wins
            typing.set(false);
            messages.write().push(Message::bot(reply));
        });
    };

    let send_files = move |files: Vec<SelectedFile>| {
        for file in files {
            // optimistic local preview, before any network round trip
            messages.write().push(Message::preview(file.preview()));
            typing.set(true);
            let client = client.cloned();
            spawn(async move {
                let SelectedFile { name, bytes, .. } = file;
                let reply = match client.upload_file(&name, bytes).await {
                    Ok(res) => api::upload_reply(&res),
                    Err(err) => {
                        warn!("upload failed for {name}: {err:?}");
                        api::UPLOAD_TRANSPORT_ERROR.to_string()
                    }
                };
                typing.set(false);
                messages.write().push(Message::bot(reply));
            });
        }
    };

    rsx! {
        div { class: "terminal-window",
            header { class: "terminal-header",
                div { class: "terminal-controls",
                    button {
                        class: "control control-close",
                        onclick: move |_| notice.set(Some(CLOSE_NOTICE)),
                    }
                    button {
                        class: "control control-minimize",
                        onclick: move |_| notice.set(Some(MINIMIZE_NOTICE)),
                    }
                    button { class: "control control-expand" }
                }
                div { class: "terminal-title", "terminal-chatbot" }
            }
            if let Some(text) = notice() {
                div { class: "notice",
                    span { "{text}" }
                    button {
                        class: "notice-dismiss",
                        onclick: move |_| notice.set(None),
                        "×"
                    }
                }
            }
            div { class: "chat-container",
                for msg in messages.read().iter() {
                    MessageEl { msg: msg.clone() }
                }
            }
            TypingIndicator { visible: typing() }
            div { class: "input-area",
                ChatInput {
                    on_send: Callback::new(send_message),
                    on_files: Callback::new(send_files),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The page must be able to send from the first frame, before any saved
    // settings have been read.
    #[test]
    fn startup_client_targets_the_default_backend() {
        let client = BackendClient::new(AppSettings::default().backend_url);
        assert_eq!(client.base_url(), DEFAULT_BACKEND_URL);
    }
}
