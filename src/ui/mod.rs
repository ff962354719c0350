//! User interface components for the chat widget.

pub mod chat; // Main chat page (window chrome, log, input)
mod chat_input; // Message input + file picker
mod message; // Message display component
mod typing; // Typing indicator
