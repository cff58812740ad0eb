//! AI consultant panel.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{ECO_COLOR, MUTED_COLOR, TEXT_COLOR, body, eyebrow, heading};

const TRANSCRIPT: &[(bool, &str)] = &[
    (false, "Hi! I'm your sustainability consultant. Ask me anything about"),
    (false, "reducing your footprint at home, at work or on the road."),
    (true, "How can I cut my heating bill without a new boiler?"),
    (false, "Start with draught-proofing doors and windows, then bleed your"),
    (false, "radiators and drop the thermostat by one degree."),
];

const SUGGESTIONS: &[&str] = &[
    "Is an induction hob worth it?",
    "What can I compost in a flat?",
    "How green is my commute?",
];

pub fn lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        eyebrow("// AI CONSULTANT"),
        heading("Sustainability chat"),
        Line::default(),
    ];

    lines.extend(TRANSCRIPT.iter().map(|(from_user, text)| {
        let (who, color) = if *from_user {
            ("you ", TEXT_COLOR)
        } else {
            ("eco ", ECO_COLOR)
        };
        Line::from(vec![
            Span::styled(
                format!("  {who}│ "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*text, Style::default().fg(color)),
        ])
    }));

    lines.extend([Line::default(), body("  Try asking:")]);
    lines.extend(SUGGESTIONS.iter().map(|s| {
        Line::from(Span::styled(
            format!("    › {s}"),
            Style::default().fg(MUTED_COLOR),
        ))
    }));
    lines.push(Line::default());
    lines
}
