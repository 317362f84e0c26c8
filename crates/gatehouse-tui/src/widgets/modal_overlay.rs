//! Modal overlay helpers for the add-device dialog.
//!
//! Centering, the scale-in/scale-out transition, backdrop dimming and the
//! drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use gatehouse_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Shrink `rect` around its center for a transition frame.
///
/// `progress` 1.0 keeps the full rect; smaller values start from 90% size,
/// the terminal version of a CSS `scale(0.9)` → `scale(1)` transition.
pub fn scaled_rect(rect: Rect, progress: f64) -> Rect {
    let factor = 0.9 + 0.1 * progress.clamp(0.0, 1.0);
    let width = ((f64::from(rect.width) * factor).round() as u16).max(1);
    let height = ((f64::from(rect.height) * factor).round() as u16).max(1);
    centered_rect(width, height, rect)
}

/// Dim all cells in the given area.
///
/// `progress` follows the dialog transition so the backdrop fades with it.
pub fn dim_background(buf: &mut Buffer, area: Rect, progress: f64) {
    let dim_style = if progress >= 0.5 {
        Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::DEEPEST_BG)
    } else {
        Style::default().fg(palette::BACKDROP_DIM)
    };

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right_x = modal_rect.right();
    let bottom_y = modal_rect.bottom();

    let right_edge = (modal_rect.y.saturating_add(1)..=bottom_y).map(|y| (right_x, y));
    let bottom_edge = (modal_rect.x.saturating_add(1)..=right_x).map(|x| (x, bottom_y));

    for pos in right_edge.chain(bottom_edge) {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Reset the cells under the modal before drawing it
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
