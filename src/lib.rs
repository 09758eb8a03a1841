//! Swiftris (workspace facade crate).
//!
//! Re-exports the workspace crates as `swiftris::{core,input,term,types}` and adds
//! [`session`], the presentation-side controller that reacts to engine events.

pub mod session;

pub use swiftris_core as core;
pub use swiftris_input as input;
pub use swiftris_term as term;
pub use swiftris_types as types;
