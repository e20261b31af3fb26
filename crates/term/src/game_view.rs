//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: the title, the bordered playfield, then a footer with
//! either the controls, the pause notice or the game-over prompt. Score, level
//! and lines sit in a side panel when the viewport is wide enough and fall back
//! to the footer otherwise.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Digits shown for score, level and lines
const COUNTER_DIGITS: usize = 8;

/// Width of the side panel including its label column
const PANEL_MIN_W: u16 = 16;

const TITLE: &str = "TETRIS";

const HELP: [&str; 5] = [
    "Arrows / WASD : Move/Rotate",
    "Shift+Up / Z  : Rotate CCW",
    "Space         : Hard Drop",
    "P             : Pause",
    "Q             : Quit",
];

const CYAN: Rgb = Rgb::new(80, 220, 220);
const YELLOW: Rgb = Rgb::new(240, 220, 80);
const RED: Rgb = Rgb::new(220, 80, 80);
const GREEN: Rgb = Rgb::new(100, 220, 120);
const BLUE: Rgb = Rgb::new(80, 120, 220);
const MAGENTA: Rgb = Rgb::new(200, 120, 220);
const WHITE: Rgb = Rgb::new(220, 220, 220);
const GRAY: Rgb = Rgb::new(90, 90, 100);
const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

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

/// A lightweight terminal renderer for the Tetris game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the pieces of the layout landed for one frame
struct Layout {
    start_x: u16,
    title_y: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    footer_y: u16,
    panel_x: Option<u16>,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let layout = self.layout(viewport);

        self.draw_title(fb, &layout);
        self.draw_board(fb, snap, &layout);

        let mut footer_y = layout.footer_y;
        match layout.panel_x {
            Some(panel_x) => {
                self.draw_counters(fb, snap, panel_x, layout.frame_y, 2);
                self.draw_state(fb, snap, panel_x, layout.frame_y.saturating_add(6));
            }
            None => {
                self.draw_counters(fb, snap, layout.start_x, footer_y, 1);
                footer_y = footer_y.saturating_add(4);
            }
        }

        self.draw_footer(fb, snap, layout.start_x, footer_y);

        if snap.game_over {
            self.draw_overlay_text(fb, &layout, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay_text(fb, &layout, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        // Title, frame, blank line, help block.
        let total_h = 1 + frame_h + 1 + HELP.len() as u16;

        let panel_space = PANEL_MIN_W + 2;
        let wide = viewport.width >= frame_w + panel_space;
        let block_w = if wide { frame_w + panel_space } else { frame_w };

        let start_x = viewport.width.saturating_sub(block_w) / 2;
        let title_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let frame_y = title_y.saturating_add(1);

        Layout {
            start_x,
            title_y,
            frame_y,
            frame_w,
            frame_h,
            footer_y: frame_y.saturating_add(frame_h).saturating_add(1),
            panel_x: wide.then(|| start_x + frame_w + 2),
        }
    }

    fn draw_title(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let w = TITLE.chars().count() as u16;
        let x = layout.start_x + layout.frame_w.saturating_sub(w) / 2;
        fb.put_str(x, layout.title_y, TITLE, CellStyle::fg(YELLOW).bold());
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let border = CellStyle::fg(CYAN);
        self.draw_border(
            fb,
            layout.start_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        let filled = CellStyle {
            fg: RED,
            bg: PLAYFIELD_BG,
            bold: true,
            dim: false,
        };
        let empty = CellStyle {
            fg: GRAY,
            bg: PLAYFIELD_BG,
            bold: false,
            dim: true,
        };

        for (y, row) in snap.display.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = if cell.is_filled() {
                    ('█', filled)
                } else {
                    ('·', empty)
                };
                let px = layout.start_x + 1 + (x as u16) * self.cell_w;
                let py = layout.frame_y + 1 + (y as u16) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    /// Score, level and lines; `gap` is the row step between entries.
    fn draw_counters(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16, gap: u16) {
        let counters = [
            ("Score: ", snap.score, GREEN),
            ("Level: ", snap.level, BLUE),
            ("Lines: ", snap.lines, MAGENTA),
        ];
        let mut y = y;
        for (label, value, color) in counters {
            let style = CellStyle::fg(color);
            let cx = fb.put_str(x, y, label, style.bold());
            fb.put_u32_padded(cx, y, value, COUNTER_DIGITS, style);
            y = y.saturating_add(gap);
        }
    }

    fn draw_state(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let state = if snap.paused && !snap.game_over {
            "paused"
        } else {
            snap.phase.as_str()
        };
        let cx = fb.put_str(x, y, "State: ", CellStyle::fg(WHITE).bold());
        fb.put_str(cx, y, state, CellStyle::fg(WHITE));
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let text = CellStyle::fg(WHITE);
        if snap.game_over {
            fb.put_str(x, y, "GAME OVER!", CellStyle::fg(RED).bold());
            fb.put_str(
                x,
                y.saturating_add(1),
                "Press R to restart or Q to quit",
                CellStyle::fg(YELLOW),
            );
        } else if snap.paused {
            fb.put_str(x, y, "PAUSED", CellStyle::fg(YELLOW).bold());
            fb.put_str(x, y.saturating_add(1), "Press P to resume", text);
        } else {
            for (i, line) in HELP.iter().enumerate() {
                fb.put_str(x, y.saturating_add(i as u16), line, text);
            }
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .start_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
