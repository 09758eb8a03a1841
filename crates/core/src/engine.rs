//! Engine module - the game state machine
//!
//! This module ties together the grid, shapes, randomness and scoring. It owns the
//! falling shape and the next (preview) shape, validates every transform against the
//! grid, commits landed shapes, clears completed lines and tracks score and level.
//!
//! Movement works by trial and revert: the transform is applied to the falling shape,
//! [`Swiftris::detect_illegal_placement`] is consulted, and an illegal result is undone
//! with the inverse transform. Walls, floor and stacked blocks are all covered by that
//! single check.
//!
//! The engine never calls back into its owner. Each command queues [`GameEvent`]s,
//! and landing, line clearing and spawning are separate commands so the presentation
//! layer can animate between them.

use crate::block::Block;
use crate::config::{ConfigError, EngineConfig};
use crate::event::{FallOutcome, GameEvent, LineClear};
use crate::grid::Grid;
use crate::rng::{Randomizer, SimpleRng};
use crate::scoring::{calculate_line_score, levels_gained, tick_interval_ms};
use crate::shape::Shape;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, GamePhase, FIRST_LEVEL};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Swiftris<R = SimpleRng> {
    config: EngineConfig,
    grid: Grid<Block>,
    falling: Option<Shape>,
    next: Option<Shape>,
    phase: GamePhase,
    score: u32,
    level: u32,
    rng: R,
    events: Vec<GameEvent>,
}

impl Swiftris<SimpleRng> {
    /// Create an engine with the default configuration and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::assemble(EngineConfig::default(), SimpleRng::new(seed))
    }

    /// Create an engine with a custom configuration and the given RNG seed
    pub fn with_config(config: EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: Randomizer> Swiftris<R> {
    /// Create an engine drawing shapes from `rng`
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, rng))
    }

    fn assemble(config: EngineConfig, rng: R) -> Self {
        Self {
            grid: Grid::new(config.columns, config.rows),
            config,
            falling: None,
            next: None,
            phase: GamePhase::NotStarted,
            score: 0,
            level: FIRST_LEVEL,
            rng,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid<Block> {
        &self.grid
    }

    /// Mutable grid access for scripted setups
    pub fn grid_mut(&mut self) -> &mut Grid<Block> {
        &mut self.grid
    }

    pub fn falling_shape(&self) -> Option<&Shape> {
        self.falling.as_ref()
    }

    pub fn next_shape(&self) -> Option<&Shape> {
        self.next.as_ref()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// How often the caller should run [`Swiftris::tick`] at the current level
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.level, self.config.base_tick_ms)
    }

    /// Events queued since the last drain, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take and clear the queued events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replace the preview shape, re-anchoring it at the preview position
    pub fn set_next_shape(&mut self, mut shape: Shape) {
        shape.move_to(self.config.preview_column, self.config.preview_row);
        self.next = Some(shape);
    }

    /// Start a session: fresh score and level, a preview shape, no falling shape
    ///
    /// The grid is left as it is; clear it with [`Swiftris::remove_all_blocks`]
    /// before starting over.
    pub fn begin_game(&mut self) {
        self.score = 0;
        self.level = FIRST_LEVEL;
        self.falling = None;
        if self.next.is_none() {
            self.next = Some(self.preview_shape());
        }
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::GameDidBegin {
            level: self.level,
            score: self.score,
        });
    }

    /// Promote the next shape to falling and generate a new next shape
    ///
    /// Returns `(falling, next)`. If the promoted shape does not fit at the
    /// starting anchor the game ends, the shape goes back to the preview slot and
    /// `None` is returned. Also `None` while not playing or while a shape is
    /// already falling.
    pub fn spawn_next(&mut self) -> Option<(Shape, Shape)> {
        if self.phase != GamePhase::Playing || self.falling.is_some() {
            return None;
        }

        let mut falling = match self.next.take() {
            Some(shape) => shape,
            None => self.preview_shape(),
        };
        falling.move_to(self.config.start_column, self.config.start_row);
        let next = self.preview_shape();

        self.falling = Some(falling);
        self.next = Some(next);

        if self.detect_illegal_placement() {
            self.falling = None;
            falling.move_to(self.config.preview_column, self.config.preview_row);
            self.next = Some(falling);
            self.end_game();
            return None;
        }

        Some((falling, next))
    }

    /// Whether the falling shape overlaps a wall, the floor or a placed block
    ///
    /// `false` when nothing is falling.
    pub fn detect_illegal_placement(&self) -> bool {
        self.falling
            .as_ref()
            .is_some_and(|shape| !self.fits(shape))
    }

    fn fits(&self, shape: &Shape) -> bool {
        shape.blocks().iter().all(|block| {
            self.grid.contains(block.column, block.row)
                && self.grid.get(block.column, block.row).is_none()
        })
    }

    /// Whether the falling shape is resting on the floor or on placed blocks
    pub fn is_shape_resting(&self) -> bool {
        let Some(shape) = self.falling.as_ref() else {
            return false;
        };
        let floor = self.grid.rows() - 1;
        shape
            .bottom_blocks()
            .iter()
            .any(|block| block.row >= floor || self.grid.is_occupied(block.column, block.row + 1))
    }

    /// Apply `forward` to the falling shape, undoing it with `inverse` if the result is illegal
    fn attempt(&mut self, forward: fn(&mut Shape), inverse: fn(&mut Shape)) -> bool {
        let Some(shape) = self.falling.as_mut() else {
            return false;
        };
        forward(shape);

        if self.detect_illegal_placement() {
            if let Some(shape) = self.falling.as_mut() {
                inverse(shape);
            }
            return false;
        }

        if let Some(shape) = self.falling {
            self.events.push(GameEvent::ShapeDidMove(shape));
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.attempt(Shape::shift_left_by_one_column, Shape::shift_right_by_one_column)
    }

    pub fn move_right(&mut self) -> bool {
        self.attempt(Shape::shift_right_by_one_column, Shape::shift_left_by_one_column)
    }

    pub fn rotate_clockwise(&mut self) -> bool {
        self.attempt(Shape::rotate_clockwise, Shape::rotate_counter_clockwise)
    }

    pub fn rotate_counter_clockwise(&mut self) -> bool {
        self.attempt(Shape::rotate_counter_clockwise, Shape::rotate_clockwise)
    }

    /// Soft drop: lower one row if legal, never landing
    pub fn lower_shape(&mut self) -> bool {
        self.attempt(Shape::lower_shape_by_one_row, Shape::raise_shape_by_one_row)
    }

    /// Gravity step: lower one row, or land when the row below is blocked
    pub fn let_shape_fall(&mut self) -> FallOutcome {
        let Some(shape) = self.falling.as_mut() else {
            return FallOutcome::Idle;
        };
        shape.lower_shape_by_one_row();

        if !self.detect_illegal_placement() {
            if let Some(shape) = self.falling {
                self.events.push(GameEvent::ShapeDidMove(shape));
            }
            return FallOutcome::Moved;
        }

        if let Some(shape) = self.falling.as_mut() {
            shape.raise_shape_by_one_row();
        }
        if self.detect_illegal_placement() {
            self.end_game();
            return FallOutcome::Ended;
        }
        self.settle_shape();
        FallOutcome::Landed
    }

    /// Alias for [`Swiftris::let_shape_fall`], driven by the caller's timer
    pub fn tick(&mut self) -> FallOutcome {
        self.let_shape_fall()
    }

    /// Hard drop: lower as far as legal, then land
    pub fn drop_shape(&mut self) -> bool {
        let Some(mut shape) = self.falling else {
            return false;
        };
        if !self.fits(&shape) {
            self.end_game();
            return false;
        }

        loop {
            shape.lower_shape_by_one_row();
            if !self.fits(&shape) {
                shape.raise_shape_by_one_row();
                break;
            }
        }

        self.falling = Some(shape);
        self.events.push(GameEvent::ShapeDidDrop(shape));
        self.settle_shape();
        true
    }

    /// Commit the falling shape's blocks into the grid
    fn settle_shape(&mut self) {
        let Some(shape) = self.falling.take() else {
            return;
        };
        for block in shape.blocks() {
            self.grid.set(block.column, block.row, Some(*block));
        }
        self.events.push(GameEvent::ShapeDidLand {
            level: self.level,
            score: self.score,
        });
    }

    /// Remove every completed row and drop the blocks above into the gaps
    ///
    /// Each remaining block falls by the number of removed rows below it, so
    /// non-adjacent clears keep the spacing of what is left. Awards points and
    /// level-ups for the batch.
    pub fn remove_completed_lines(&mut self) -> LineClear {
        let columns = self.grid.columns();
        let rows = self.grid.rows();

        let mut removed_rows: Vec<i32> = Vec::new();
        let mut lines_removed = Vec::new();
        for row in (0..rows).rev() {
            if !self.grid.is_row_complete(row) {
                continue;
            }
            let line: Vec<Block> = (0..columns)
                .filter_map(|column| self.grid.take(column, row))
                .collect();
            removed_rows.push(row);
            lines_removed.push(line);
        }

        if lines_removed.is_empty() {
            return LineClear::default();
        }

        let mut fallen_blocks = Vec::new();
        for column in 0..columns {
            let mut fallen = Vec::new();
            // Bottom-up, so every destination is already vacated.
            for row in (0..rows).rev() {
                let distance = removed_rows.iter().filter(|&&removed| removed > row).count() as i32;
                if distance == 0 {
                    continue;
                }
                let Some(mut block) = self.grid.take(column, row) else {
                    continue;
                };
                block.row = row + distance;
                self.grid.set(column, block.row, Some(block));
                fallen.push(block);
            }
            if !fallen.is_empty() {
                fallen_blocks.push(fallen);
            }
        }

        self.award_lines(lines_removed.len());

        LineClear {
            lines_removed,
            fallen_blocks,
        }
    }

    fn award_lines(&mut self, lines: usize) {
        self.score = self
            .score
            .saturating_add(calculate_line_score(lines, self.level));

        let gained = levels_gained(self.score, self.level, self.config.level_threshold);
        for _ in 0..gained {
            self.level += 1;
            self.events.push(GameEvent::GameDidLevelUp { level: self.level });
        }
    }

    /// Empty the grid, returning what it held grouped by row (top to bottom)
    pub fn remove_all_blocks(&mut self) -> Vec<Vec<Block>> {
        let removed = (0..self.grid.rows())
            .map(|row| self.grid.row_items(row).collect::<Vec<_>>())
            .filter(|line| !line.is_empty())
            .collect();
        self.grid.clear();
        removed
    }

    /// End the session
    pub fn end_game(&mut self) {
        self.falling = None;
        self.phase = GamePhase::Ended;
        self.events.push(GameEvent::GameDidEnd {
            level: self.level,
            score: self.score,
        });
    }

    /// Apply a presentation-layer command
    ///
    /// Returns whether the falling shape changed (moved, rotated or landed).
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::RotateCw => self.rotate_clockwise(),
            Command::RotateCcw => self.rotate_counter_clockwise(),
            Command::SoftDrop => self.lower_shape(),
            Command::Drop => self.drop_shape(),
            Command::Tick => matches!(
                self.tick(),
                FallOutcome::Moved | FallOutcome::Landed
            ),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.columns = self.grid.columns();
        out.rows = self.grid.rows();
        out.cells.clear();
        for row in 0..self.grid.rows() {
            for column in 0..self.grid.columns() {
                out.cells.push(self.grid.get(column, row).map(|block| block.color));
            }
        }
        out.falling = self.falling;
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.tick_interval_ms = self.tick_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn preview_shape(&mut self) -> Shape {
        Shape::random(
            &mut self.rng,
            self.config.preview_column,
            self.config.preview_row,
            self.config.color_policy,
        )
    }
}

impl Default for Swiftris<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
