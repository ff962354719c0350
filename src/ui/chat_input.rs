use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::files::SelectedFile;

const SEND_ICON: Asset = asset!("/assets/send.svg");
const ATTACH_ICON: Asset = asset!("/assets/attach.svg");

/// Baseline input height in px; restored whenever the field empties.
const BASE_HEIGHT: u32 = 40;
const LINE_HEIGHT: u32 = 20;
/// Nominal characters per visual line, standing in for real layout metrics.
const WRAP_COLUMNS: usize = 60;

/// Height for the input box: the baseline plus one line step per extra
/// visual line, with no upper cap. The DOM scroll height is not available
/// here, so soft wrapping is approximated from line length.
fn input_height(text: &str) -> u32 {
    let lines: usize = text
        .split('\n')
        .map(|line| line.chars().count().div_ceil(WRAP_COLUMNS).max(1))
        .sum();
    BASE_HEIGHT + (lines.max(1) as u32 - 1) * LINE_HEIGHT
}

/// Trimmed text to send, or `None` when the submission should be silently
/// ignored.
fn submit_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn ChatInput(
    on_send: Callback<String, ()>,
    on_files: Callback<Vec<SelectedFile>, ()>,
) -> Element {
    let mut text = use_signal(|| "".to_string());
    let mut submit = move || {
        let Some(message) = submit_text(&text.cloned()) else {
            return;
        };
        on_send(message);
        text.set("".to_string());
    };
    let height = input_height(&text.read());

    rsx! {
        form {
            class: "input-form",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                submit();
            },
            textarea {
                class: "message-input",
                style: "height: {height}px;",
                placeholder: "Type a message...",
                value: text,
                oninput: move |e: Event<FormData>| {
                    text.set(e.value());
                },
                onkeydown: move |e: Event<KeyboardData>| {
                    if e.code() == Code::Enter && !e.modifiers().shift() {
                        e.prevent_default();
                        submit();
                    }
                },
            }
            label { class: "file-upload",
                img { src: ATTACH_ICON, alt: "Attach a file" }
                input {
                    r#type: "file",
                    multiple: true,
                    accept: ".txt,.pdf,.png,.jpg,.jpeg,.gif,.doc,.docx",
                    onchange: move |e: Event<FormData>| async move {
                        let mut picked = Vec::new();
                        for file in e.files() {
                            let name = file.name();
                            match file.read_bytes().await {
                                Ok(bytes) => picked.push(SelectedFile::new(name, bytes.to_vec())),
                                Err(err) => warn!("could not read {name}: {err:?}"),
                            }
                        }
                        if !picked.is_empty() {
                            on_files(picked);
                        }
                    },
                }
            }
            button { class: "send-icon", r#type: "submit",
                img { src: SEND_ICON, alt: "Send" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_sits_at_baseline() {
        assert_eq!(input_height(""), BASE_HEIGHT);
        assert_eq!(input_height("one line"), BASE_HEIGHT);
    }

    #[test]
    fn height_grows_per_line() {
        assert_eq!(input_height("a\nb"), BASE_HEIGHT + LINE_HEIGHT);
        assert_eq!(input_height("a\nb\nc\nd"), BASE_HEIGHT + 3 * LINE_HEIGHT);
    }

    #[test]
    fn long_lines_grow_via_wrap_estimate() {
        let exactly_one_row = "x".repeat(WRAP_COLUMNS);
        assert_eq!(input_height(&exactly_one_row), BASE_HEIGHT);
        let wrapped = "x".repeat(WRAP_COLUMNS + 1);
        assert_eq!(input_height(&wrapped), BASE_HEIGHT + LINE_HEIGHT);
    }

    #[test]
    fn submit_text_trims_input() {
        assert_eq!(submit_text("  hi there \n"), Some("hi there".to_string()));
    }

    #[test]
    fn submit_text_ignores_empty_and_whitespace() {
        assert_eq!(submit_text(""), None);
        assert_eq!(submit_text("   \n\t "), None);
    }
}
