//! Footer line.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use super::MUTED_COLOR;
use crate::build_info;

const TAGLINE: &str = "eco · sustainability in your terminal";
const KEY_HINTS: &str = "1-6 views · tab next · x dismiss tip · q quit";

/// Minimum width to show key hints alongside the version.
const MIN_WIDTH_FOR_HINTS: u16 = 100;

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(MUTED_COLOR);

    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {TAGLINE}"), style)),
        area,
    );
    if area.width >= MIN_WIDTH_FOR_HINTS {
        frame.render_widget(
            Paragraph::new(Line::styled(KEY_HINTS, style)).alignment(Alignment::Center),
            area,
        );
    }
    frame.render_widget(
        Paragraph::new(Line::styled(format!("{} ", build_info::footer_label()), style))
            .alignment(Alignment::Right),
        area,
    );
}
