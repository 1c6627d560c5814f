//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Terminal};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const SCREEN_BG: Rgb = Rgb::hex(0x000000);
const BOARD_BG: Rgb = Rgb::hex(0x92877d);
const EMPTY_BG: Rgb = Rgb::hex(0x9e948a);
const DARK_TEXT: Rgb = Rgb::hex(0x776e65);
const LIGHT_TEXT: Rgb = Rgb::hex(0xf9f6f2);
const BEYOND_BG: Rgb = Rgb::hex(0x3c3a32);

/// Tile background per value, 2 through 2048.
const TILE_BG: [(Cell, Rgb); 11] = [
    (2, Rgb::hex(0xeee4da)),
    (4, Rgb::hex(0xede0c8)),
    (8, Rgb::hex(0xf2b179)),
    (16, Rgb::hex(0xf59563)),
    (32, Rgb::hex(0xf67c5f)),
    (64, Rgb::hex(0xf65e3b)),
    (128, Rgb::hex(0xedcf72)),
    (256, Rgb::hex(0xedcc61)),
    (512, Rgb::hex(0xedc850)),
    (1024, Rgb::hex(0xedc53f)),
    (2048, Rgb::hex(0xedc22e)),
];

/// Style for a tile; 0 is the empty slot.
pub fn tile_style(value: Cell) -> CellStyle {
    if value == 0 {
        return CellStyle::new(EMPTY_BG, EMPTY_BG);
    }
    let bg = TILE_BG
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, bg)| *bg)
        .unwrap_or(BEYOND_BG);
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::new(fg, bg).bold()
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Columns between tiles.
    gap_x: u16,
    /// Rows between tiles.
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns of gap per row of gap keeps the spacing square on most fonts.
        Self {
            cell_w: 7,
            cell_h: 3,
            gap_x: 2,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board footprint (width, height) in terminal cells for a given side length.
    ///
    /// Saturates at `u16::MAX`, which no viewport can hold.
    pub fn board_extent(&self, size: usize) -> (u16, u16) {
        let n = u16::try_from(size).unwrap_or(u16::MAX);
        (
            span(n, self.cell_w, self.gap_x),
            span(n, self.cell_h, self.gap_y),
        )
    }

    /// Top-left terminal position of tile (row, col), relative to the board origin.
    pub fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        (
            self.gap_x
                .saturating_add(col.saturating_mul(self.cell_w.saturating_add(self.gap_x))),
            self.gap_y
                .saturating_add(row.saturating_mul(self.cell_h.saturating_add(self.gap_y))),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized only when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(LIGHT_TEXT, SCREEN_BG));

        let (board_w, board_h) = self.board_extent(snap.size);
        if board_w > viewport.width || board_h > viewport.height {
            let style = CellStyle::default();
            fb.put_str(0, 0, "Terminal too small for the board.", style);
            fb.put_str(0, 1, "Enlarge the window or press q to quit.", style);
            return;
        }

        let start_x = viewport.width.saturating_sub(board_w + PANEL_W + 2) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(board_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(start_x, start_y, board_w, board_h, ' ', CellStyle::new(BOARD_BG, BOARD_BG));

        for row in 0..snap.size {
            for col in 0..snap.size {
                let value = snap.cell(row, col).unwrap_or(0);
                let (dx, dy) = self.tile_origin(row, col);
                self.draw_tile(fb, start_x + dx, start_y + dy, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + board_w + 2, start_y);

        match snap.terminal {
            Terminal::Won => self.draw_banner(fb, start_x, start_y, board_w, board_h, "YOU WIN!"),
            Terminal::Lost => self.draw_banner(fb, start_x, start_y, board_w, board_h, "GAME OVER"),
            Terminal::None => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: Cell) {
        let style = tile_style(value);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
        if value != 0 {
            let mut digits = [0u8; 10];
            let label = format_value(value, &mut digits);
            fb.put_str_centered(x, y + self.cell_h / 2, self.cell_w, label, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_W {
            return;
        }

        let title = CellStyle::new(Rgb::hex(0xedc22e), SCREEN_BG).bold();
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = CellStyle::new(Rgb::new(130, 130, 130), SCREEN_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "2048", title);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.moves as u64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.max_tile as u64, value);
        y = y.saturating_add(2);

        for line in ["arrows/wasd move", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        board_w: u16,
        board_h: u16,
        text: &str,
    ) {
        let style = CellStyle::new(LIGHT_TEXT, BEYOND_BG).bold();
        let mid_y = start_y.saturating_add(board_h / 2);
        fb.fill_rect(start_x, mid_y.saturating_sub(1), board_w, 3, ' ', style);
        fb.put_str_centered(start_x, mid_y, board_w, text, style);
    }
}

/// Width reserved for the side panel.
const PANEL_W: u16 = 16;

/// Length of `n` tiles of `tile` cells with a gap before, between and after them.
fn span(n: u16, tile: u16, gap: u16) -> u16 {
    n.saturating_mul(tile)
        .saturating_add(n.saturating_add(1).saturating_mul(gap))
}

fn format_value(value: Cell, buf: &mut [u8; 10]) -> &str {
    let mut n = value;
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[start..]).unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_classic_colors() {
        assert_eq!(tile_style(2).bg, Rgb::hex(0xeee4da));
        assert_eq!(tile_style(2).fg, DARK_TEXT);
        assert_eq!(tile_style(8).fg, LIGHT_TEXT);
        assert_eq!(tile_style(2048).bg, Rgb::hex(0xedc22e));
        assert_eq!(tile_style(4096).bg, BEYOND_BG);
        assert_eq!(tile_style(0).bg, EMPTY_BG);
    }

    #[test]
    fn format_value_digits() {
        let mut buf = [0u8; 10];
        assert_eq!(format_value(2, &mut buf), "2");
        assert_eq!(format_value(131072, &mut buf), "131072");
    }

    #[test]
    fn board_extent_and_tile_origin() {
        let view = GameView::default();
        assert_eq!(view.board_extent(4), (38, 17));
        assert_eq!(view.tile_origin(0, 0), (2, 1));
        assert_eq!(view.tile_origin(1, 2), (2 + 2 * 9, 1 + 4));
    }

    #[test]
    fn huge_boards_saturate_instead_of_overflowing() {
        let view = GameView::default();
        assert_eq!(view.board_extent(10_000), (u16::MAX, u16::MAX));
        assert_eq!(view.board_extent(usize::MAX), (u16::MAX, u16::MAX));
        assert_eq!(view.tile_origin(70_000, 70_000), (u16::MAX, u16::MAX));
    }

    #[test]
    fn huge_board_reports_too_small() {
        let snap = GameSnapshot {
            size: 10_000,
            ..GameSnapshot::default()
        };
        let fb = GameView::default().render(&snap, Viewport::new(200, 4));
        assert!(fb.row_text(0).starts_with("Terminal too small for the board."));
    }
}
