//! Resources placeholder: a title and a description, no live content.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{MUTED_COLOR, TEXT_COLOR};

pub const TITLE: &str = "Encrypted Archives";
pub const DESCRIPTION: &str = "Accessing secure library... Content loading shortly.";

pub fn lines() -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::default(),
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(TEXT_COLOR).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(DESCRIPTION, Style::default().fg(MUTED_COLOR)))
            .alignment(Alignment::Center),
    ]
}
