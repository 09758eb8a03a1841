use crate::types::BlockColor;

/// A single colored cell
///
/// Equality and hashing cover color, column and row together. A block lives in
/// a [`Shape`](crate::Shape) while falling or previewing and is copied into the
/// [`Grid`](crate::Grid) when that shape lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub column: i32,
    pub row: i32,
    pub color: BlockColor,
}

impl Block {
    pub fn new(column: i32, row: i32, color: BlockColor) -> Self {
        Self { column, row, color }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [{}, {}]", self.color, self.column, self.row)
    }
}
