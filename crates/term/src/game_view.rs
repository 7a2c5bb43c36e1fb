//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
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

/// Renders the well, the settled cells, the falling piece and the score.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 makes cells look roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Screen rectangle occupied by the bordered well.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    /// Size of the bordered well for a `width x height` board.
    pub fn frame_size(&self, width: u16, height: u16) -> (u16, u16) {
        (
            width.saturating_mul(self.cell_w).saturating_add(2),
            height.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (w, h) = self.frame_size(snap.width, snap.height);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            w.saturating_sub(2),
            h.saturating_sub(2),
            ' ',
            CellStyle::plain(WELL_BG, WELL_BG),
        );
        draw_border(fb, frame, CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG));

        let empty = CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG).dim();
        for row in 0..snap.height {
            for col in 0..snap.width {
                match snap.cell(col, row).flatten() {
                    Some(color) => self.draw_block(fb, frame, col, row, color),
                    None => self.fill_cell(fb, frame, col, row, '·', empty),
                }
            }
        }

        if let Some(active) = &snap.active {
            for p in &active.cells {
                if p.col < 0 || p.row < 0 {
                    continue;
                }
                let (col, row) = (p.col as u16, p.row as u16);
                if col < snap.width && row < snap.height {
                    self.draw_block(fb, frame, col, row, active.color);
                }
            }
        }

        draw_score_banner(fb, frame, snap.score);
        draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, col: u16, row: u16, color: Rgb) {
        let style = CellStyle::plain(color, WELL_BG).bold();
        self.fill_cell(fb, frame, col, row, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
    if f.w < 2 || f.h < 2 {
        return;
    }
    let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

    fb.put_char(f.x, f.y, '┌', style);
    fb.put_char(right, f.y, '┐', style);
    fb.put_char(f.x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for x in f.x + 1..right {
        fb.put_char(x, f.y, '─', style);
        fb.put_char(x, bottom, '─', style);
    }
    for y in f.y + 1..bottom {
        fb.put_char(f.x, y, '│', style);
        fb.put_char(right, y, '│', style);
    }
}

/// Score centered in the top border, always visible even without a side panel.
fn draw_score_banner(fb: &mut FrameBuffer, f: Frame, score: u32) {
    let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
    let text_w = digits + 2;
    if text_w + 2 > f.w {
        return;
    }
    let x = f.x + (f.w - text_w) / 2;
    let style = CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_char(x, f.y, ' ', style);
    fb.put_u32(x + 1, f.y, score, style);
    fb.put_char(x + 1 + digits, f.y, ' ', style);
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
    let panel_x = f.x.saturating_add(f.w).saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 10 {
        return;
    }

    let label = CellStyle::plain(Rgb::new(220, 220, 220), SCREEN_BG).bold();
    let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
    let hint = value.dim();

    let mut y = f.y;
    fb.put_str(panel_x, y, "SCORE", label);
    fb.put_u32(panel_x, y + 1, snap.score, value);
    y += 3;

    fb.put_str(panel_x, y, "PIECES", label);
    fb.put_u32(panel_x, y + 1, snap.pieces_spawned, value);
    y += 3;

    if let Some(active) = &snap.active {
        fb.put_str(panel_x, y, "PIECE", label);
        fb.put_str(panel_x, y + 1, active.kind.as_str(), value);
    }
    y += 3;

    for line in ["←→ move", "↑ rotate", "↓ drop", "q quit"] {
        fb.put_str(panel_x, y, line, hint);
        y += 1;
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, f: Frame, text: &str) {
    let mid_y = f.y.saturating_add(f.h / 2);
    let text_w = text.chars().count() as u16;
    let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
    let style = CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str(x, mid_y, text, style);
}
