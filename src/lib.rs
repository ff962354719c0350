use dioxus::prelude::*;

pub mod api;
pub mod app_settings;
pub mod files;
pub mod linkify;
pub mod message;
mod ui;

use ui::chat::Chat;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Chat {}
    }
}
