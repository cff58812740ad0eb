//! Vertical navigation on the right edge.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

use super::{ECO_COLOR, ECO_DIM_COLOR, MUTED_COLOR, TEXT_COLOR};
use crate::tui::state::ViewState;

/// Columns taken by the side navigation.
pub const SIDE_NAV_WIDTH: u16 = 22;

/// Render the side navigation and return the clickable row of each entry.
pub fn render_side_nav(
    frame: &mut Frame,
    area: Rect,
    current: Option<ViewState>,
) -> Vec<(Rect, ViewState)> {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(ECO_DIM_COLOR))
        .title(" NAVIGATE ")
        .title_style(Style::default().fg(MUTED_COLOR));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buf = frame.buffer_mut();
    let mut regions = Vec::new();

    for (row, view) in (inner.y + 1..inner.bottom()).step_by(2).zip(ViewState::ALL) {
        let (marker, style) = if current == Some(view) {
            (
                "● ",
                Style::default().fg(ECO_COLOR).add_modifier(Modifier::BOLD),
            )
        } else {
            ("○ ", Style::default().fg(TEXT_COLOR))
        };
        let entry = format!(" {marker}{}", view.label());
        buf.set_stringn(inner.x, row, &entry, usize::from(inner.width), style);
        regions.push((Rect::new(inner.x, row, inner.width, 1), view));
    }

    regions
}
