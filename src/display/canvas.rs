//! Half-block canvas.
//!
//! Each terminal cell shows two stacked "pixels" via `▀` (top = fg,
//! bottom = bg), so a `cols × rows` terminal is a `cols × 2·rows` canvas.
//! Shapes are drawn in logical 1000×600 coordinates and scaled down.
//! Text is overlaid per cell on top of the pixels.

use std::io::Write;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::entities::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sprite::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Glyph {
    ch: char,
    fg: Rgb,
}

pub struct Canvas {
    cols: u16,
    rows: u16,
    /// `cols × 2·rows`, row-major.
    pixels: Vec<Rgb>,
    text: Vec<Option<Glyph>>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let cells = cols as usize * rows as usize;
        Canvas {
            cols,
            rows,
            pixels: vec![(0, 0, 0); cells * 2],
            text: vec![None; cells],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    fn px_height(&self) -> i32 {
        self.rows as i32 * 2
    }

    /// Logical x → canvas column.
    pub fn col_of(&self, x: i32) -> i32 {
        x * self.cols as i32 / SCREEN_WIDTH
    }

    /// Logical y → canvas pixel row.
    pub fn prow_of(&self, y: i32) -> i32 {
        y * self.px_height() / SCREEN_HEIGHT
    }

    /// Logical y → terminal row.
    pub fn row_of(&self, y: i32) -> i32 {
        self.prow_of(y) / 2
    }

    /// Colour of one canvas pixel, `None` when out of range.
    pub fn pixel(&self, col: i32, prow: i32) -> Option<Rgb> {
        if col < 0 || prow < 0 || col >= self.cols as i32 || prow >= self.px_height() {
            return None;
        }
        Some(self.pixels[prow as usize * self.cols as usize + col as usize])
    }

    /// Character overlaid on a terminal cell, if any.
    pub fn glyph(&self, col: i32, row: i32) -> Option<char> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        self.text[row as usize * self.cols as usize + col as usize].map(|g| g.ch)
    }

    fn set_px(&mut self, col: i32, prow: i32, color: Rgb) {
        if col < 0 || prow < 0 || col >= self.cols as i32 || prow >= self.px_height() {
            return;
        }
        let i = prow as usize * self.cols as usize + col as usize;
        self.pixels[i] = color;
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.text.fill(None);
    }

    /// Fill a logical rectangle. Anything non-empty covers at least one pixel.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        if w <= 0 || h <= 0 {
            return;
        }
        let c0 = self.col_of(x);
        let c1 = self.col_of(x + w).max(c0 + 1);
        let r0 = self.prow_of(y);
        let r1 = self.prow_of(y + h).max(r0 + 1);
        for prow in r0..r1 {
            for col in c0..c1 {
                self.set_px(col, prow, color);
            }
        }
    }

    /// Paint a logical box by asking `shade` for the colour at each pixel
    /// centre, relative to the box origin. `None` leaves the pixel alone.
    pub fn blit(&mut self, x: i32, y: i32, w: i32, h: i32, shade: impl Fn(i32, i32) -> Option<Rgb>) {
        let c0 = self.col_of(x);
        let c1 = self.col_of(x + w).max(c0 + 1);
        let r0 = self.prow_of(y);
        let r1 = self.prow_of(y + h).max(r0 + 1);
        let (cw, ch) = (c1 - c0, r1 - r0);
        for prow in r0..r1 {
            for col in c0..c1 {
                let dx = ((col - c0) * 2 + 1) * w / (cw * 2);
                let dy = ((prow - r0) * 2 + 1) * h / (ch * 2);
                if let Some(color) = shade(dx, dy) {
                    self.set_px(col, prow, color);
                }
            }
        }
    }

    /// Overlay text at a terminal cell. Clipped at the right edge.
    pub fn text(&mut self, col: i32, row: i32, s: &str, fg: Rgb) {
        if row < 0 || row >= self.rows as i32 {
            return;
        }
        for (i, ch) in s.chars().enumerate() {
            let c = col + i as i32;
            if c < 0 {
                continue;
            }
            if c >= self.cols as i32 {
                break;
            }
            self.text[row as usize * self.cols as usize + c as usize] = Some(Glyph { ch, fg });
        }
    }

    /// Overlay text centred on a terminal row.
    pub fn text_centered(&mut self, row: i32, s: &str, fg: Rgb) {
        let col = (self.cols as i32 - s.chars().count() as i32) / 2;
        self.text(col, row, s, fg);
    }

    pub fn flush<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let cols = self.cols as usize;
        for row in 0..self.rows as usize {
            out.queue(cursor::MoveTo(0, row as u16))?;
            let mut last: Option<(Rgb, Rgb)> = None;
            for col in 0..cols {
                let top = self.pixels[row * 2 * cols + col];
                let bottom = self.pixels[(row * 2 + 1) * cols + col];
                let (ch, fg, bg) = match self.text[row * cols + col] {
                    Some(g) => (g.ch, g.fg, blend(top, bottom)),
                    None => ('▀', top, bottom),
                };
                if last != Some((fg, bg)) {
                    out.queue(SetForegroundColor(rgb(fg)))?;
                    out.queue(SetBackgroundColor(rgb(bg)))?;
                    last = Some((fg, bg));
                }
                out.queue(Print(ch))?;
            }
        }
        out.queue(ResetColor)?;
        Ok(())
    }
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

fn blend(a: Rgb, b: Rgb) -> Rgb {
    (
        ((a.0 as u16 + b.0 as u16) / 2) as u8,
        ((a.1 as u16 + b.1 as u16) / 2) as u8,
        ((a.2 as u16 + b.2 as u16) / 2) as u8,
    )
}
