//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Difficulty, Position, RoundStatus, TileFace};

/// Rules and controls shown by the help overlay.
pub const HELP_LINES: &[&str] = &[
    "HOW TO PLAY",
    "",
    "Flip two tiles per turn. Equal values stay",
    "face up (+10). Different values flip back",
    "after a second (-5).",
    "",
    "A hint costs 5 points and shows two random",
    "hidden tiles for two seconds.",
    "",
    "Match every pair before the clock runs out.",
    "",
    "arrows/hjkl/wasd move   enter/space flip",
    "i hint   p pause   r restart   1/2/3 level",
    "? close help            q quit",
];

const KEY_LEGEND: &[&str] = &["i hint", "p pause", "r restart", "1-3 level", "? help", "q quit"];

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

/// Presentation-only state that does not live in the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HudState<'a> {
    pub cursor: Option<Position>,
    /// Latest message intent from the game, if any.
    pub message: Option<&'a str>,
    pub show_help: bool,
}

/// Where the board frame lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the memory board.
pub struct GameView {
    /// Tile width in terminal columns, including cursor brackets.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Blank columns between tiles.
    gap_x: u16,
    /// Blank rows between tiles.
    gap_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 5,
            cell_h: 1,
            gap_x: 1,
            gap_y: 1,
        }
    }
}

const BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_gaps(mut self, gap_x: u16, gap_y: u16) -> Self {
        self.gap_x = gap_x;
        self.gap_y = gap_y;
        self
    }

    /// Board frame placement for a `rows x cols` grid, centered in the viewport.
    pub fn layout(&self, rows: usize, cols: usize, viewport: Viewport) -> BoardLayout {
        let inner_w = span(cols, self.cell_w, self.gap_x);
        let inner_h = span(rows, self.cell_h, self.gap_y);
        let frame_w = inner_w.saturating_add(4);
        let frame_h = inner_h.saturating_add(2);
        BoardLayout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Map a terminal coordinate to the tile under it. Gaps and the border miss.
    pub fn tile_at(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<Position> {
        let layout = self.layout(snap.rows, snap.cols, viewport);
        let origin_x = layout.start_x + 2;
        let origin_y = layout.start_y + 1;
        if x < origin_x || y < origin_y {
            return None;
        }

        let pitch_x = self.cell_w + self.gap_x;
        let pitch_y = self.cell_h + self.gap_y;
        let (dx, dy) = (x - origin_x, y - origin_y);
        if dx % pitch_x >= self.cell_w || dy % pitch_y >= self.cell_h {
            return None;
        }

        let pos = Position::new((dy / pitch_y) as usize, (dx / pitch_x) as usize);
        (pos.row < snap.rows && pos.col < snap.cols).then_some(pos)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: HudState<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.rows, snap.cols, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), BG);

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, layout.start_x, layout.start_y, layout.frame_w, layout.frame_h, border);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let pos = Position::new(row, col);
                if let Some(tile) = snap.tile(pos) {
                    let focused = hud.cursor == Some(pos);
                    let pending = snap.pending == Some(pos);
                    self.draw_tile(fb, &layout, pos, tile, focused, pending);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if let Some(text) = hud.message {
            let y = layout.start_y.saturating_add(layout.frame_h);
            if y < viewport.height {
                let style = CellStyle::new(Rgb::new(240, 220, 120), BG);
                put_centered(fb, 0, viewport.width, y, text, style);
            }
        }

        if hud.show_help {
            draw_text_box(fb, viewport, HELP_LINES);
        } else if snap.status == RoundStatus::Won {
            self.draw_banner(fb, &layout, "YOU WIN!", snap.score);
        } else if snap.status == RoundStatus::Lost {
            self.draw_banner(fb, &layout, "TIME'S UP", snap.score);
        } else if snap.paused {
            draw_overlay_text(fb, &layout, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: HudState<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Startup difficulty picker.
    pub fn render_menu_into(&self, selected: Difficulty, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let title = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        let normal = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let active = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(230, 200, 60)).bold();
        let hint = CellStyle::new(Rgb::new(140, 140, 140), BG).dim();

        let rows = 3 + Difficulty::ALL.len() as u16 + 2;
        let mut y = viewport.height.saturating_sub(rows) / 2;
        put_centered(fb, 0, viewport.width, y, "MEMORY", title);
        y = y.saturating_add(2);

        const ENTRY_W: u16 = 28;
        let x = viewport.width.saturating_sub(ENTRY_W) / 2;
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            let style = if *difficulty == selected { active } else { normal };
            fb.fill_rect(x, y, ENTRY_W, 1, ' ', style);
            fb.put_str(x, y, &format_menu_entry(i + 1, *difficulty), style);
            y = y.saturating_add(1);
        }

        y = y.saturating_add(1);
        put_centered(fb, 0, viewport.width, y, "up/down + enter, or 1/2/3   q quit", hint);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        pos: Position,
        tile: &TileSnapshot,
        focused: bool,
        pending: bool,
    ) {
        let x = offset(layout.start_x + 2, pos.col, self.cell_w + self.gap_x);
        let y = offset(layout.start_y + 1, pos.row, self.cell_h + self.gap_y);
        if x >= fb.width() || y >= fb.height() {
            return;
        }

        let style = match tile.face {
            TileFace::Hidden => CellStyle::new(Rgb::new(170, 170, 190), Rgb::new(60, 60, 80)),
            TileFace::Revealed => {
                let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 90, 160));
                if pending {
                    style.bold()
                } else {
                    style
                }
            }
            TileFace::Matched => CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(90, 200, 110)),
        };
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

        let mid_y = y + self.cell_h / 2;
        let inner_w = self.cell_w - 2;
        match (tile.face, tile.value) {
            (TileFace::Hidden, _) | (_, None) => {
                fb.put_char(x + 1 + inner_w / 2, mid_y, '?', style);
            }
            (_, Some(value)) => {
                let digits = digit_count(value as u64);
                let vx = x + 1 + inner_w.saturating_sub(digits) / 2;
                fb.put_i64(vx, mid_y, value as i64, style);
            }
        }

        if focused {
            let bracket = CellStyle::new(Rgb::new(250, 220, 60), style.bg).bold();
            fb.put_char(x, mid_y, '[', bracket);
            fb.put_char(x + self.cell_w - 1, mid_y, ']', bracket);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.start_x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let urgent = CellStyle::new(Rgb::new(240, 90, 80), BG).bold();

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let clock_style = if snap.seconds_remaining <= 10 { urgent } else { value };
        let end = fb.put_i64(panel_x, y, snap.seconds_remaining as i64, clock_style);
        fb.put_char(end, y, 's', clock_style);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_i64(panel_x, y, snap.score as i64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        let end = fb.put_i64(panel_x, y, snap.matched_pairs as i64, value);
        fb.put_char(end, y, '/', value);
        fb.put_i64(end.saturating_add(1), y, snap.total_pairs as i64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(
            panel_x,
            y,
            snap.difficulty.map(|d| d.label()).unwrap_or("Custom"),
            value,
        );
        y = y.saturating_add(2);

        let dim = CellStyle { dim: true, ..value };
        for line in KEY_LEGEND {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, layout: &BoardLayout, title: &str, score: i32) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let y = mid_y.saturating_sub(1);
        let w = 20.min(layout.frame_w);
        let x = layout.start_x.saturating_add(layout.frame_w.saturating_sub(w) / 2);
        fb.fill_rect(x, y, w, 3, ' ', style);
        put_centered(fb, layout.start_x, layout.frame_w, y, title, style);

        put_centered(fb, layout.start_x, layout.frame_w, y + 1, &format!("Score: {score}"), style);
        put_centered(fb, layout.start_x, layout.frame_w, y + 2, "r to play again", style.dim());
    }
}

fn span(count: usize, cell: u16, gap: u16) -> u16 {
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    if count == 0 {
        return 0;
    }
    count
        .saturating_mul(cell)
        .saturating_add((count - 1).saturating_mul(gap))
}

fn offset(origin: u16, index: usize, pitch: u16) -> u16 {
    let index = u16::try_from(index).unwrap_or(u16::MAX);
    origin.saturating_add(index.saturating_mul(pitch))
}

fn digit_count(mut n: u64) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn format_menu_entry(index: usize, difficulty: Difficulty) -> String {
    format!(
        " {index}  {:<6}  {:>2} tiles  {:>2}s",
        difficulty.label(),
        difficulty.grid_size(),
        difficulty.time_limit_secs()
    )
}

fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x.saturating_add(w.saturating_sub(text_w) / 2), y, text, style);
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

fn draw_overlay_text(fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
    let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
    put_centered(fb, layout.start_x, layout.frame_w, mid_y, text, style);
}

fn draw_text_box(fb: &mut FrameBuffer, viewport: Viewport, lines: &[&str]) {
    let text_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let w = text_w.saturating_add(4).min(viewport.width);
    let h = (lines.len() as u16).saturating_add(2).min(viewport.height);
    let x = viewport.width.saturating_sub(w) / 2;
    let y = viewport.height.saturating_sub(h) / 2;

    let style = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(20, 20, 30));
    fb.fill_rect(x, y, w, h, ' ', style);
    draw_border(fb, x, y, w, h, style);
    for (i, line) in lines.iter().enumerate() {
        let ly = y + 1 + i as u16;
        if ly + 1 >= y + h {
            break;
        }
        let line_style = if i == 0 { style.bold() } else { style };
        fb.put_str(x + 2, ly, line, line_style);
    }
}
