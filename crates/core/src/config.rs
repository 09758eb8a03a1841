//! Engine configuration
//!
//! Every field has a default, so a JSON document only needs the keys it
//! overrides:
//!
//! ```
//! use swiftris_core::{ColorPolicy, EngineConfig};
//!
//! let config = EngineConfig::from_json_str(r#"{ "rows": 24, "color_policy": "by_kind" }"#).unwrap();
//! assert_eq!(config.rows, 24);
//! assert_eq!(config.columns, 10);
//! assert_eq!(config.color_policy, ColorPolicy::ByKind);
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::shape::ColorPolicy;
use crate::types::{
    LEVEL_THRESHOLD, NUM_COLUMNS, NUM_ROWS, PREVIEW_COLUMN, PREVIEW_ROW, STARTING_COLUMN,
    STARTING_ROW, TICK_LENGTH_LEVEL_ONE_MS,
};

/// Smallest board edge that still fits every shape in every orientation
pub const MIN_BOARD_EDGE: i32 = 4;

/// Largest accepted board edge
pub const MAX_BOARD_EDGE: i32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("board must be at least {min}x{min}, got {columns}x{rows}", min = MIN_BOARD_EDGE)]
    BoardTooSmall { columns: i32, rows: i32 },
    #[error("board must be at most {max}x{max}, got {columns}x{rows}", max = MAX_BOARD_EDGE)]
    BoardTooLarge { columns: i32, rows: i32 },
    #[error("starting anchor ({column}, {row}) is outside the board")]
    StartOutsideBoard { column: i32, row: i32 },
    #[error("base tick interval must be positive")]
    ZeroTickInterval,
    #[error("level threshold must be positive")]
    ZeroLevelThreshold,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub columns: i32,
    pub rows: i32,
    pub start_column: i32,
    pub start_row: i32,
    /// The preview anchor may sit outside the board; preview shapes are never checked.
    pub preview_column: i32,
    pub preview_row: i32,
    pub base_tick_ms: u32,
    pub level_threshold: u32,
    pub color_policy: ColorPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            columns: NUM_COLUMNS,
            rows: NUM_ROWS,
            start_column: STARTING_COLUMN,
            start_row: STARTING_ROW,
            preview_column: PREVIEW_COLUMN,
            preview_row: PREVIEW_ROW,
            base_tick_ms: TICK_LENGTH_LEVEL_ONE_MS,
            level_threshold: LEVEL_THRESHOLD,
            color_policy: ColorPolicy::Random,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config document
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < MIN_BOARD_EDGE || self.rows < MIN_BOARD_EDGE {
            return Err(ConfigError::BoardTooSmall {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.columns > MAX_BOARD_EDGE || self.rows > MAX_BOARD_EDGE {
            return Err(ConfigError::BoardTooLarge {
                columns: self.columns,
                rows: self.rows,
            });
        }
        let start_inside = (0..self.columns).contains(&self.start_column)
            && (0..self.rows).contains(&self.start_row);
        if !start_inside {
            return Err(ConfigError::StartOutsideBoard {
                column: self.start_column,
                row: self.start_row,
            });
        }
        if self.base_tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.level_threshold == 0 {
            return Err(ConfigError::ZeroLevelThreshold);
        }
        Ok(())
    }
}
