//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s for the engine,
//! plus the two session-level keys (quit and restart) that never reach it.
//! There is no repeat handling here: each key press is one command.

pub mod map;

pub use swiftris_types as types;

pub use map::{handle_key_event, is_restart, should_quit};
