//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a [`GameView`] draws a
//! [`core::GameSnapshot`](crate::core::GameSnapshot) into a plain framebuffer and
//! [`TerminalRenderer`] flushes that framebuffer to the terminal with `crossterm`.
//! Board cells are drawn two characters wide by default to offset the usual
//! glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use swiftris_core as core;
pub use swiftris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_rgb, GameView, Viewport};
pub use renderer::{changed_rows, encode_diff_into, encode_full_into, TerminalRenderer};
