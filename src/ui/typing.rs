use dioxus::prelude::*;

/// "Bot is typing" affordance. One shared element; visibility follows the
/// last toggle, there is no per-call counting.
#[component]
pub fn TypingIndicator(visible: bool) -> Element {
    let style = if visible {
        "display: flex;"
    } else {
        "display: none;"
    };
    rsx! {
        div { class: "typing-indicator", style,
            span {}
            span {}
            span {}
        }
    }
}
