//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the game: the block grid, the seven shape kinds
//! and their rotation tables, legality checks, landing, line clearing, scoring and
//! levels. It performs no I/O and never sleeps; the caller drives gravity by calling
//! [`Swiftris::tick`] on its own timer and renders from [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size 2-D container of optional items
//! - [`block`]: a single colored cell
//! - [`geometry`]: per-kind, per-orientation block offsets and bottom blocks
//! - [`shape`]: a live piece and its transforms
//! - [`engine`]: the game state machine
//! - [`event`]: notifications queued by the engine
//! - [`rng`]: seedable randomness for shape generation
//! - [`scoring`]: line points, level thresholds and fall speed
//! - [`config`]: board size, anchors and pacing, loadable from JSON
//!
//! # Game Flow
//!
//! 1. [`Swiftris::begin_game`] resets score and level and prepares a preview shape.
//! 2. [`Swiftris::spawn_next`] promotes the preview to the falling shape.
//! 3. Moves, rotations, ticks and drops act on the falling shape.
//! 4. A landed shape joins the grid; the caller then runs
//!    [`Swiftris::remove_completed_lines`] and spawns again.
//! 5. A spawn that does not fit ends the game.
//!
//! # Example
//!
//! ```
//! use swiftris_core::{GameEvent, Swiftris};
//!
//! let mut game = Swiftris::new(12345);
//! game.begin_game();
//! game.spawn_next().unwrap();
//!
//! game.move_left();
//! game.rotate_clockwise();
//! assert!(game.drop_shape());
//!
//! let events = game.take_events();
//! assert!(matches!(events.last(), Some(GameEvent::ShapeDidLand { .. })));
//! assert_eq!(game.grid().len(), 4);
//! ```

pub mod block;
pub mod config;
pub mod engine;
pub mod event;
pub mod geometry;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use swiftris_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use config::{ConfigError, EngineConfig};
pub use engine::Swiftris;
pub use event::{FallOutcome, GameEvent, LineClear};
pub use geometry::{bottom_block_indices, offsets};
pub use grid::Grid;
pub use rng::{Randomizer, SimpleRng};
pub use scoring::{calculate_line_score, levels_gained, tick_interval_ms};
pub use shape::{ColorPolicy, Shape};
pub use snapshot::GameSnapshot;
