use crate::shape::Shape;
use crate::types::{BlockColor, GamePhase};

/// Render-ready copy of the engine state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub columns: i32,
    pub rows: i32,
    /// Row-major cell colors, `rows * columns` long
    pub cells: Vec<Option<BlockColor>>,
    pub falling: Option<Shape>,
    pub next: Option<Shape>,
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub tick_interval_ms: u32,
}

impl GameSnapshot {
    /// Color at (column, row), or `None` when empty or outside the board
    pub fn cell(&self, column: i32, row: i32) -> Option<BlockColor> {
        if column < 0 || column >= self.columns || row < 0 || row >= self.rows {
            return None;
        }
        self.cells[(row * self.columns + column) as usize]
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }
}
