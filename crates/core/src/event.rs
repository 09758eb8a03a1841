//! Notifications the engine queues for the presentation layer.
//!
//! Every command appends its events in the order they happen; the caller drains
//! them with [`Swiftris::take_events`](crate::Swiftris::take_events) after the
//! command returns, so no callback ever re-enters the engine.

use crate::block::Block;
use crate::shape::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A game started (`begin_game`)
    GameDidBegin { level: u32, score: u32 },
    /// Spawn collision or an explicit `end_game`
    GameDidEnd { level: u32, score: u32 },
    /// The falling shape moved or rotated legally
    ShapeDidMove(Shape),
    /// A hard drop reached its resting row; landing follows
    ShapeDidDrop(Shape),
    /// The falling shape's blocks were committed to the grid
    ShapeDidLand { level: u32, score: u32 },
    /// The score crossed a level threshold
    GameDidLevelUp { level: u32 },
}

/// What a gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// No falling shape
    Idle,
    /// Lowered by one row
    Moved,
    /// Could not lower; the shape is now part of the grid
    Landed,
    /// The shape could not be placed at all and the game ended
    Ended,
}

/// Result of [`Swiftris::remove_completed_lines`](crate::Swiftris::remove_completed_lines)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Removed rows bottom to top, each row's blocks left to right
    pub lines_removed: Vec<Vec<Block>>,
    /// Blocks that fell, grouped per column and listed bottom to top, at their new rows
    pub fallen_blocks: Vec<Vec<Block>>,
}

impl LineClear {
    pub fn lines(&self) -> usize {
        self.lines_removed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines_removed.is_empty()
    }
}
