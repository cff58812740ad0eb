//! Header bar with view tabs.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

use super::{ECO_COLOR, ECO_DIM_COLOR, MUTED_COLOR};
use crate::tui::state::ViewState;

/// Rows taken by the header, including its bottom border.
pub const HEADER_HEIGHT: u16 = 3;

const BRAND: &str = "▲ ECO";
const ACTIVE_TEXT: Color = Color::Rgb(20, 30, 28);

/// Render the header and return the clickable area of each visible tab.
///
/// Tabs that do not fit are skipped; `current` is `None` on the fallback route,
/// in which case no tab is highlighted.
#[allow(clippy::cast_possible_truncation)]
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    current: Option<ViewState>,
) -> Vec<(Rect, ViewState)> {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(ECO_DIM_COLOR));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width < 2 {
        return Vec::new();
    }

    let y = inner.y + inner.height.saturating_sub(1) / 2;
    let right = inner.x + inner.width;
    let buf = frame.buffer_mut();

    let mut x = inner.x + 1;
    buf.set_stringn(
        x,
        y,
        BRAND,
        usize::from(right - x),
        Style::default().fg(ECO_COLOR).add_modifier(Modifier::BOLD),
    );
    x = x.saturating_add(BRAND.chars().count() as u16 + 3);

    let mut regions = Vec::with_capacity(ViewState::ALL.len());
    for (i, view) in ViewState::ALL.into_iter().enumerate() {
        let label = format!(" {} {} ", i + 1, view.label());
        let width = label.chars().count() as u16;
        if x.saturating_add(width) > right {
            break;
        }

        let style = if current == Some(view) {
            Style::default()
                .fg(ACTIVE_TEXT)
                .bg(ECO_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_COLOR)
        };
        buf.set_string(x, y, &label, style);
        regions.push((Rect::new(x, y, width, 1), view));
        x += width + 1;
    }

    regions
}
