//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the engine, the terminal front end and
//! the input mapping. Everything here is plain data with no external dependencies.
//!
//! # Board Geometry
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom; row 19 is the floor)
//! - **Starting anchor**: (4, 0), where a promoted shape enters the board
//! - **Preview anchor**: (12, 1), to the right of the board
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_LENGTH_LEVEL_ONE_MS` | 600 | Fall interval at level 1 |
//! | `MIN_TICK_LENGTH_MS` | 50 | Fastest fall interval |
//!
//! # Examples
//!
//! ```
//! use swiftris_types::{Command, Orientation, ShapeKind, NUM_COLUMNS, NUM_ROWS};
//!
//! let kind = ShapeKind::from_str("line").unwrap();
//! assert_eq!(kind, ShapeKind::Line);
//!
//! assert_eq!(Orientation::TwoSeventy.rotate_cw(), Orientation::Zero);
//! assert_eq!(Orientation::Zero.rotate_ccw(), Orientation::TwoSeventy);
//!
//! assert_eq!(Command::from_str("rotateCw"), Some(Command::RotateCw));
//!
//! assert_eq!(NUM_COLUMNS, 10);
//! assert_eq!(NUM_ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const NUM_COLUMNS: i32 = 10;

/// Board height in cells (20 rows)
pub const NUM_ROWS: i32 = 20;

/// Column a promoted shape is anchored at
pub const STARTING_COLUMN: i32 = 4;

/// Row a promoted shape is anchored at
pub const STARTING_ROW: i32 = 0;

/// Column the next-shape preview is anchored at
pub const PREVIEW_COLUMN: i32 = 12;

/// Row the next-shape preview is anchored at
pub const PREVIEW_ROW: i32 = 1;

/// Fall interval at level 1 (600ms per row)
pub const TICK_LENGTH_LEVEL_ONE_MS: u32 = 600;

/// Fall interval never drops below this (50ms per row)
pub const MIN_TICK_LENGTH_MS: u32 = 50;

/// Number of shape kinds
pub const NUM_SHAPE_TYPES: u32 = 7;

/// Number of rotational states per shape
pub const NUM_ORIENTATIONS: u32 = 4;

/// Number of block colors
pub const NUM_COLORS: u32 = 6;

/// Level a fresh game starts at
pub const FIRST_LEVEL: u32 = 1;

/// Points needed per level before the next level-up (`level * LEVEL_THRESHOLD`)
pub const LEVEL_THRESHOLD: u32 = 500;

/// Line clear scoring table
///
/// Base points for clearing N lines at once at level 1:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by the current level. Batches wider than four rows
/// score as four.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The six block colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl BlockColor {
    pub const ALL: [BlockColor; NUM_COLORS as usize] = [
        BlockColor::Blue,
        BlockColor::Orange,
        BlockColor::Purple,
        BlockColor::Red,
        BlockColor::Teal,
        BlockColor::Yellow,
    ];

    /// Color for a zero-based index, wrapping past the last color
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::from_str("Teal"), Some(BlockColor::Teal));
    /// assert_eq!(BlockColor::from_str("green"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(BlockColor::Blue),
            "orange" => Some(BlockColor::Orange),
            "purple" => Some(BlockColor::Purple),
            "red" => Some(BlockColor::Red),
            "teal" => Some(BlockColor::Teal),
            "yellow" => Some(BlockColor::Yellow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Red => "red",
            BlockColor::Teal => "teal",
            BlockColor::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for BlockColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven shape kinds
///
/// - **Square**: 2x2 block
/// - **Line**: four in a row
/// - **T**, **L**, **J**, **S**, **Z**: the three-wide tetrominoes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Line,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; NUM_SHAPE_TYPES as usize] = [
        ShapeKind::Square,
        ShapeKind::Line,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Row index into the geometry tables
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::Square => 0,
            ShapeKind::Line => 1,
            ShapeKind::T => 2,
            ShapeKind::L => 3,
            ShapeKind::J => 4,
            ShapeKind::S => 5,
            ShapeKind::Z => 6,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Fixed palette entry used when colors follow the shape kind
    pub fn default_color(&self) -> BlockColor {
        match self {
            ShapeKind::Square => BlockColor::Yellow,
            ShapeKind::Line => BlockColor::Teal,
            ShapeKind::T => BlockColor::Purple,
            ShapeKind::L => BlockColor::Orange,
            ShapeKind::J => BlockColor::Blue,
            ShapeKind::S => BlockColor::Red,
            ShapeKind::Z => BlockColor::Red,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// Accepts the kind names plus the usual tetromino letters for square (`o`)
    /// and line (`i`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" | "o" => Some(ShapeKind::Square),
            "line" | "i" => Some(ShapeKind::Line),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Line => "line",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// Rotational state of a shape
///
/// The cycle goes Zero → Ninety → OneEighty → TwoSeventy → Zero when rotating
/// clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Orientation {
    pub const ALL: [Orientation; NUM_ORIENTATIONS as usize] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Column index into the geometry tables
    pub fn index(&self) -> usize {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 1,
            Orientation::OneEighty => 2,
            Orientation::TwoSeventy => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate_cw(), Orientation::Ninety);
    /// assert_eq!(Orientation::TwoSeventy.rotate_cw(), Orientation::Zero);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::Ninety,
            Orientation::Ninety => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::Zero,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate_ccw(), Orientation::TwoSeventy);
    /// assert_eq!(Orientation::Ninety.rotate_ccw(), Orientation::Zero);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::Ninety,
            Orientation::Ninety => Orientation::Zero,
        }
    }

    pub fn rotate(&self, clockwise: bool) -> Self {
        if clockwise {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 90,
            Orientation::OneEighty => 180,
            Orientation::TwoSeventy => 270,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Commands the presentation layer issues against the falling shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift one column left
    MoveLeft,
    /// Shift one column right
    MoveRight,
    /// Rotate 90° clockwise
    RotateCw,
    /// Rotate 90° counter-clockwise
    RotateCcw,
    /// Lower one row without landing
    SoftDrop,
    /// Drop to the lowest legal row and land
    Drop,
    /// Gravity step: lower one row, landing if blocked
    Tick,
}

impl Command {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("drop"), Some(Command::Drop));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "softdrop" => Some(Command::SoftDrop),
            "drop" => Some(Command::Drop),
            "tick" => Some(Command::Tick),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::SoftDrop => "softDrop",
            Command::Drop => "drop",
            Command::Tick => "tick",
        }
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Playing,
    Ended,
}
