//! Shape module - a live piece: kind, color, anchor, orientation and its four blocks
//!
//! Block positions are always `anchor + offsets(kind, orientation)[slot]`. Rotation
//! and absolute moves recompute them from the geometry table; relative shifts add
//! the delta to every block. A shape never checks legality itself; the engine
//! tries a transform and reverts it when the result does not fit.

use arrayvec::ArrayVec;

use crate::block::Block;
use crate::geometry::{bottom_block_indices, offsets};
use crate::rng::Randomizer;
use crate::types::{
    BlockColor, Orientation, ShapeKind, NUM_COLORS, NUM_ORIENTATIONS, NUM_SHAPE_TYPES,
};

/// How a freshly generated shape picks its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPolicy {
    /// Uniform over all block colors, independent of the kind
    #[default]
    Random,
    /// [`ShapeKind::default_color`]
    ByKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    color: BlockColor,
    orientation: Orientation,
    column: i32,
    row: i32,
    blocks: [Block; 4],
}

impl Shape {
    /// Create a shape anchored at (column, row)
    pub fn new(
        kind: ShapeKind,
        orientation: Orientation,
        color: BlockColor,
        column: i32,
        row: i32,
    ) -> Self {
        let mut shape = Self {
            kind,
            color,
            orientation,
            column,
            row,
            blocks: [Block::new(column, row, color); 4],
        };
        shape.initialize_blocks();
        shape
    }

    /// Create a shape of uniformly random kind and orientation
    ///
    /// The color follows `policy`; under [`ColorPolicy::Random`] it is drawn
    /// independently of the kind.
    pub fn random<R: Randomizer + ?Sized>(
        rng: &mut R,
        column: i32,
        row: i32,
        policy: ColorPolicy,
    ) -> Self {
        let kind = ShapeKind::from_index(rng.next_range(NUM_SHAPE_TYPES) as usize);
        let orientation = Orientation::from_index(rng.next_range(NUM_ORIENTATIONS) as usize);
        let color = match policy {
            ColorPolicy::Random => BlockColor::from_index(rng.next_range(NUM_COLORS) as usize),
            ColorPolicy::ByKind => kind.default_color(),
        };
        Self::new(kind, orientation, color, column, row)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor column
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Anchor row
    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    /// Blocks with nothing of this shape directly beneath them
    pub fn bottom_blocks(&self) -> ArrayVec<Block, 4> {
        bottom_block_indices(self.kind, self.orientation)
            .iter()
            .map(|&slot| self.blocks[slot])
            .collect()
    }

    /// Place every block at `anchor + offset` for the current orientation
    pub fn initialize_blocks(&mut self) {
        let table = offsets(self.kind, self.orientation);
        for (block, &(dc, dr)) in self.blocks.iter_mut().zip(table.iter()) {
            block.column = self.column + i32::from(dc);
            block.row = self.row + i32::from(dr);
        }
    }

    pub fn rotate(&mut self, clockwise: bool) {
        self.orientation = self.orientation.rotate(clockwise);
        self.initialize_blocks();
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotate(true);
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.rotate(false);
    }

    /// Translate the anchor and every block by the same delta
    pub fn shift_by(&mut self, columns: i32, rows: i32) {
        self.column += columns;
        self.row += rows;
        for block in &mut self.blocks {
            block.column += columns;
            block.row += rows;
        }
    }

    /// Re-anchor at an absolute position, keeping the orientation
    pub fn move_to(&mut self, column: i32, row: i32) {
        self.column = column;
        self.row = row;
        self.initialize_blocks();
    }

    pub fn lower_shape_by_one_row(&mut self) {
        self.shift_by(0, 1);
    }

    pub fn raise_shape_by_one_row(&mut self) {
        self.shift_by(0, -1);
    }

    pub fn shift_left_by_one_column(&mut self) {
        self.shift_by(-1, 0);
    }

    pub fn shift_right_by_one_column(&mut self) {
        self.shift_by(1, 0);
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = &self.blocks;
        write!(
            f,
            "{} {} facing {}: {}, {}, {}, {}",
            self.color,
            self.kind.as_str(),
            self.orientation,
            a,
            b,
            c,
            d
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_follow_anchor_and_table() {
        let shape = Shape::new(ShapeKind::T, Orientation::Zero, BlockColor::Purple, 4, 0);
        let cells: Vec<(i32, i32)> = shape.blocks().iter().map(|b| (b.column, b.row)).collect();
        assert_eq!(cells, vec![(5, 0), (4, 1), (5, 1), (6, 1)]);
        assert!(shape.blocks().iter().all(|b| b.color == BlockColor::Purple));
    }

    #[test]
    fn shift_is_incremental_and_move_to_is_absolute() {
        let mut shape = Shape::new(ShapeKind::L, Orientation::Ninety, BlockColor::Orange, 0, 0);
        let before = *shape.blocks();
        shape.shift_by(3, 2);
        for (a, b) in before.iter().zip(shape.blocks()) {
            assert_eq!((a.column + 3, a.row + 2), (b.column, b.row));
        }

        shape.move_to(0, 0);
        assert_eq!(*shape.blocks(), before);
        assert_eq!((shape.column(), shape.row()), (0, 0));
    }

    #[test]
    fn bottom_blocks_of_flat_line() {
        let shape = Shape::new(ShapeKind::Line, Orientation::Zero, BlockColor::Teal, 0, 0);
        assert_eq!(shape.bottom_blocks().len(), 4);

        let upright = Shape::new(ShapeKind::Line, Orientation::Ninety, BlockColor::Teal, 0, 0);
        let bottom = upright.bottom_blocks();
        assert_eq!(bottom.len(), 1);
        assert_eq!(bottom[0].row, 3);
    }

    #[test]
    fn by_kind_policy_uses_palette() {
        let mut rng = crate::rng::SimpleRng::new(99);
        for _ in 0..20 {
            let shape = Shape::random(&mut rng, 0, 0, ColorPolicy::ByKind);
            assert_eq!(shape.color(), shape.kind().default_color());
        }
    }
}
