//! Eco tip toast overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

use super::{ECO_COLOR, MUTED_COLOR, TEXT_COLOR, TIP_COLOR};
use crate::tui::toast::TipToast;

const MAX_WIDTH: u16 = 48;
const CLOSE_MARKER: &str = "[x]";

/// Greedy word wrap. Words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.len();
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw the toast in the bottom-left corner of `area` if it is visible.
///
/// Returns the clickable close marker.
#[allow(clippy::cast_possible_truncation)]
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &TipToast) -> Option<Rect> {
    if !toast.is_visible() || area.width < 12 || area.height < 4 {
        return None;
    }

    let width = MAX_WIDTH.min(area.width.saturating_sub(2));
    // Borders plus one column of padding on each side
    let text_width = usize::from(width.saturating_sub(4));
    let body = wrap(toast.display_text(), text_width);
    let height = (body.len() as u16 + 2).min(area.height);

    let rect = Rect::new(
        area.x + 1,
        area.bottom().saturating_sub(height + 1).max(area.y),
        width,
        height,
    );

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ECO_COLOR))
        .title(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(TIP_COLOR)),
            Span::styled(
                "DAILY_INTEL ",
                Style::default().fg(TEXT_COLOR).add_modifier(Modifier::BOLD),
            ),
        ]));

    let lines: Vec<Line> = body
        .into_iter()
        .map(|l| Line::styled(format!(" {l}"), Style::default().fg(MUTED_COLOR)))
        .collect();

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);

    let close = Rect::new(rect.right().saturating_sub(5), rect.y, 3, 1);
    frame
        .buffer_mut()
        .set_string(close.x, close.y, CLOSE_MARKER, Style::default().fg(MUTED_COLOR));
    Some(close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Turn off the lights when you leave", 12),
            vec!["Turn off the", "lights when", "you leave"]
        );
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_of_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
