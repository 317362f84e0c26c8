//! Animated net background drawn on a braille canvas.
//!
//! Each terminal character cell represents a 2x4 grid of braille dots, so
//! points and links of the [`NetField`] get sub-character resolution.

use gatehouse_app::background::NetField;
use gatehouse_app::config::BackgroundSettings;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

/// Braille dot bit positions indexed by [y % 4][x % 2].
///
/// ```text
/// Dot 1 (0x01) | Dot 4 (0x08)
/// Dot 2 (0x02) | Dot 5 (0x10)
/// Dot 3 (0x04) | Dot 6 (0x20)
/// Dot 7 (0x40) | Dot 8 (0x80)
/// ```
const BRAILLE_BIT_MAP: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Dot-space canvas: x in 0..width*2, y in 0..height*4
pub(crate) struct BrailleCanvas {
    cells: Vec<Vec<u8>>,
    width: usize,
    height: usize,
}

impl BrailleCanvas {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![0u8; width]; height],
            width,
            height,
        }
    }

    pub(crate) fn dot_width(&self) -> usize {
        self.width * 2
    }

    pub(crate) fn dot_height(&self) -> usize {
        self.height * 4
    }

    /// Set a dot; out-of-bounds coordinates are ignored
    pub(crate) fn set(&mut self, x: usize, y: usize) {
        let col = x / 2;
        let row = y / 4;
        if col >= self.width || row >= self.height {
            return;
        }
        self.cells[row][col] |= BRAILLE_BIT_MAP[y % 4][x % 2];
    }

    /// Straight line between two dots
    pub(crate) fn line(&mut self, from: (f64, f64), to: (f64, f64)) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let x = from.0 + dx * t;
            let y = from.1 + dy * t;
            if x >= 0.0 && y >= 0.0 {
                self.set(x.round() as usize, y.round() as usize);
            }
        }
    }

    pub(crate) fn is_set(&self, x: usize, y: usize) -> bool {
        let (col, row) = (x / 2, y / 4);
        col < self.width
            && row < self.height
            && self.cells[row][col] & BRAILLE_BIT_MAP[y % 4][x % 2] != 0
    }

    pub(crate) fn render_to_buffer(&self, buf: &mut Buffer, area: Rect, style: Style) {
        for (row, cells) in self.cells.iter().enumerate() {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            for (col, bits) in cells.iter().enumerate() {
                let x = area.x + col as u16;
                if x >= area.right() {
                    break;
                }
                if *bits != 0 {
                    let ch = char::from_u32(0x2800 + u32::from(*bits)).unwrap_or('\u{2800}');
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }
        }
    }
}

/// The net behind the dashboard
pub struct NetBackground<'a> {
    field: &'a NetField,
    settings: &'a BackgroundSettings,
}

impl<'a> NetBackground<'a> {
    pub fn new(field: &'a NetField, settings: &'a BackgroundSettings) -> Self {
        Self { field, settings }
    }

    fn project(&self, canvas: &BrailleCanvas, x: f64, y: f64) -> (f64, f64) {
        let sx = (canvas.dot_width().saturating_sub(1)) as f64 / self.field.width().max(1.0);
        let sy = (canvas.dot_height().saturating_sub(1)) as f64 / self.field.height().max(1.0);
        (x * sx, y * sy)
    }
}

impl Widget for NetBackground<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::from_u32(self.settings.background_color)));

        if area.width < self.settings.min_width || area.height < self.settings.min_height {
            return;
        }

        let mut canvas = BrailleCanvas::new(usize::from(area.width), usize::from(area.height));
        let points = self.field.points();

        for (a, b) in self.field.links() {
            let from = self.project(&canvas, points[a].x, points[a].y);
            let to = self.project(&canvas, points[b].x, points[b].y);
            canvas.line(from, to);
        }
        if let Some((px, py)) = self.field.pointer() {
            let pointer = self.project(&canvas, px, py);
            for i in self.field.pointer_links() {
                let to = self.project(&canvas, points[i].x, points[i].y);
                canvas.line(pointer, to);
            }
        }
        for p in points {
            let (x, y) = self.project(&canvas, p.x, p.y);
            canvas.set(x.round() as usize, y.round() as usize);
        }

        let style = Style::default()
            .fg(Color::from_u32(self.settings.color))
            .bg(Color::from_u32(self.settings.background_color));
        canvas.render_to_buffer(buf, area, style);
    }
}
