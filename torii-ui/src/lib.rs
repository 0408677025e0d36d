//! Torii UI - Suggestion widget state machine and input debouncing
//!
//! Sits between raw input events and the search index: keystrokes are
//! debounced, debounced queries drive the [`SuggestionController`] state
//! machine, and collaborators observe state changes and navigation
//! commits through the [`SuggestionSink`] trait. Nothing in this crate
//! touches presentation or performs routing itself.

pub mod controller;
pub mod debounce;

// Re-export main types
pub use controller::{InputEvent, SuggestionController, SuggestionSink, SuggestionState};
pub use debounce::QueryDebouncer;
