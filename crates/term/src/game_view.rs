//! GameView: paints a [`BoardCanvas`] into a terminal framebuffer.
//!
//! Pure, no I/O.

use tetrino_types::{COLUMNS, ROWS};

use crate::canvas::BoardCanvas;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};

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

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_WIDTH: u16 = 12;

const KEY_HINTS: [&str; 5] = [
    "<- ->  move",
    "up     rotate",
    "down   drop",
    "r      restart",
    "q      quit",
];

pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps squares square on most fonts.
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

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            COLUMNS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render into a reused framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, canvas: &BoardCanvas, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..ROWS as i8 {
            for col in 0..COLUMNS as i8 {
                let (ch, style) = match canvas.square(row, col) {
                    Some(color) => ('█', CellStyle::new(color.into(), BOARD_BG).bold()),
                    None => ('·', CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim()),
                };
                let px = start_x + 1 + col as u16 * self.cell_w;
                let py = start_y + 1 + row as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, canvas, viewport, start_x + frame_w, start_y);

        if canvas.game_over() {
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            let mid_y = start_y.saturating_add(frame_h / 2);
            put_centered(fb, start_x, frame_w, mid_y, "GAME OVER", style);
            put_centered(
                fb,
                start_x,
                frame_w,
                mid_y.saturating_add(1),
                "r to restart",
                style,
            );
        }
    }

    pub fn render(&self, canvas: &BoardCanvas, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        canvas: &BoardCanvas,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_str(panel_x, start_y, "SCORE", label);
        fb.put_u32(panel_x, start_y.saturating_add(1), canvas.score(), value);

        let mut y = start_y.saturating_add(3);
        for hint in KEY_HINTS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, hint, value.dim());
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x.saturating_add(w.saturating_sub(text_w) / 2), y, text, style);
}
