use dioxus::logger::tracing::Level;

use termchat::App;

fn main() {
    dioxus::logger::init(Level::INFO).unwrap();
    dioxus::launch(App);
}
