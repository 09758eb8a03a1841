//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board coordinates map to screen cells one to one, scaled by the cell size and
//! offset by the frame border. The next shape is drawn at its own anchor in the
//! same coordinate space, so the default preview anchor lands just right of the
//! board. The score panel sits below the preview.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BlockColor;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen position of the board frame's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Origin {
    x: u16,
    y: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_w = screen_span(snap.columns, self.cell_w);
        let board_h = screen_span(snap.rows, self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        fb.fill_rect(
            origin.x + 1,
            origin.y + 1,
            board_w,
            board_h,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        fb.draw_box(
            origin.x,
            origin.y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG),
        );

        let empty = CellStyle::new(Rgb::new(70, 70, 80), BOARD_BG);
        for row in 0..snap.rows {
            for column in 0..snap.columns {
                match snap.cell(column, row) {
                    Some(color) => self.draw_block(fb, origin, column, row, color),
                    None => self.fill_cell(fb, origin, column, row, '·', empty),
                }
            }
        }

        if let Some(shape) = &snap.falling {
            for block in shape.blocks() {
                let inside = (0..snap.columns).contains(&block.column)
                    && (0..snap.rows).contains(&block.row);
                if inside {
                    self.draw_block(fb, origin, block.column, block.row, block.color);
                }
            }
        }

        let panel_y = match &snap.next {
            Some(next) => self.draw_preview(fb, origin, next),
            None => origin.y,
        };
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(3);
        self.draw_panel(fb, snap, panel_x, panel_y);

        if snap.game_over() {
            let text = "GAME OVER";
            let text_w = text.chars().count() as u16;
            let x = origin.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
            fb.put_str(x, origin.y.saturating_add(frame_h / 2), text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw the next shape at its anchor with a label above; returns the first free row below it.
    fn draw_preview(&self, fb: &mut FrameBuffer, origin: Origin, next: &Shape) -> u16 {
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let (label_x, label_y) = self.cell_origin(origin, next.column(), next.row());
        fb.put_str(label_x, label_y.saturating_sub(1), "NEXT", label);

        let mut bottom = label_y;
        for block in next.blocks() {
            self.draw_block(fb, origin, block.column, block.row, block.color);
            let (_, y) = self.cell_origin(origin, block.column, block.row);
            bottom = bottom.max(y.saturating_add(self.cell_h));
        }
        bottom.saturating_add(1)
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y.saturating_add(1), snap.score, value);
        fb.put_str(x, y.saturating_add(3), "LEVEL", label);
        fb.put_u32(x, y.saturating_add(4), snap.level, value);
    }

    fn cell_origin(&self, origin: Origin, column: i32, row: i32) -> (u16, u16) {
        let x = i32::from(origin.x) + 1 + column.saturating_mul(i32::from(self.cell_w));
        let y = i32::from(origin.y) + 1 + row.saturating_mul(i32::from(self.cell_h));
        (x.clamp(0, i32::from(u16::MAX)) as u16, y.clamp(0, i32::from(u16::MAX)) as u16)
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        column: i32,
        row: i32,
        color: BlockColor,
    ) {
        if column < 0 || row < 0 {
            return;
        }
        let style = CellStyle::new(block_rgb(color), BOARD_BG).bold();
        self.fill_cell(fb, origin, column, row, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        column: i32,
        row: i32,
        ch: char,
        style: CellStyle,
    ) {
        let (x, y) = self.cell_origin(origin, column, row);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }
}

/// Screen cells covered by `count` board cells of `cell` width, clamped to the u16 range.
fn screen_span(count: i32, cell: u16) -> u16 {
    u16::try_from(count.max(0))
        .unwrap_or(u16::MAX)
        .saturating_mul(cell)
}

/// Terminal color for a block color.
pub fn block_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Blue => Rgb::new(80, 120, 220),
        BlockColor::Orange => Rgb::new(255, 165, 0),
        BlockColor::Purple => Rgb::new(200, 120, 220),
        BlockColor::Red => Rgb::new(220, 80, 80),
        BlockColor::Teal => Rgb::new(80, 220, 220),
        BlockColor::Yellow => Rgb::new(240, 220, 80),
    }
}
