//! Geometry module - static orientation tables for every shape kind
//!
//! Each (kind, orientation) pair maps to four block offsets from the shape's
//! anchor, and to the subset of those slots that are "bottom blocks" (no block
//! of the same shape directly beneath them).
//!
//! Slot order is significant. Going from one orientation to the next clockwise
//! one is always a quarter turn of all four slots followed by a single shared
//! translation, so slot `i` is the same physical block in every orientation.
//! The square piece therefore permutes its slots even though its footprint
//! never changes.
//!
//! Rotation is a table lookup. Nothing here computes a rotation at runtime.

use crate::types::{Orientation, ShapeKind};

/// Offset of a single block relative to the shape anchor (column, row)
pub type BlockOffset = (i8, i8);

/// Four block offsets, one per slot
pub type ShapeOffsets = [BlockOffset; 4];

/// Offsets indexed by `[ShapeKind::index()][Orientation::index()]`
const OFFSETS: [[ShapeOffsets; 4]; 7] = [
    // Square
    [
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(2, 0), (2, 1), (1, 0), (1, 1)],
        [(2, 1), (1, 1), (2, 0), (1, 0)],
        [(1, 1), (1, 0), (2, 1), (2, 0)],
    ],
    // Line
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(3, 2), (2, 2), (1, 2), (0, 2)],
        [(1, 3), (1, 2), (1, 1), (1, 0)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(2, 1), (1, 0), (1, 1), (1, 2)],
        [(1, 2), (2, 1), (1, 1), (0, 1)],
        [(0, 1), (1, 2), (1, 1), (1, 0)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(2, 2), (1, 0), (1, 1), (1, 2)],
        [(0, 2), (2, 1), (1, 1), (0, 1)],
        [(0, 0), (1, 2), (1, 1), (1, 0)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(2, 0), (1, 0), (1, 1), (1, 2)],
        [(2, 2), (2, 1), (1, 1), (0, 1)],
        [(0, 2), (1, 2), (1, 1), (1, 0)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(2, 1), (2, 2), (1, 0), (1, 1)],
        [(1, 2), (0, 2), (2, 1), (1, 1)],
        [(0, 1), (0, 0), (1, 2), (1, 1)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (2, 1), (1, 1), (1, 2)],
        [(2, 2), (1, 2), (1, 1), (0, 1)],
        [(0, 2), (0, 1), (1, 1), (1, 0)],
    ],
];

/// Bottom-block slots indexed like [`OFFSETS`]
const BOTTOM_BLOCKS: [[&[usize]; 4]; 7] = [
    // Square
    [&[2, 3], &[1, 3], &[0, 1], &[0, 2]],
    // Line
    [&[0, 1, 2, 3], &[3], &[0, 1, 2, 3], &[0]],
    // T
    [&[1, 2, 3], &[0, 3], &[0, 1, 3], &[0, 1]],
    // L
    [&[1, 2, 3], &[0, 3], &[0, 1, 2], &[0, 1]],
    // J
    [&[1, 2, 3], &[0, 3], &[0, 2, 3], &[0, 1]],
    // S
    [&[1, 2, 3], &[1, 3], &[0, 1, 2], &[0, 2]],
    // Z
    [&[0, 2, 3], &[1, 3], &[0, 1, 3], &[0, 2]],
];

/// Get the four block offsets for a kind in an orientation
pub fn offsets(kind: ShapeKind, orientation: Orientation) -> &'static ShapeOffsets {
    &OFFSETS[kind.index()][orientation.index()]
}

/// Get the bottom-block slots for a kind in an orientation
pub fn bottom_block_indices(kind: ShapeKind, orientation: Orientation) -> &'static [usize] {
    BOTTOM_BLOCKS[kind.index()][orientation.index()]
}
