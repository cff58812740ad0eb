//! Landing hero.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::{ECO_COLOR, ECO_DIM_COLOR, MUTED_COLOR, body, eyebrow};

const LOGO_LINES: &[&str] = &[
    "  █▀▀ █▀▀ █▀█",
    "  ██▄ █▄▄ █▄█",
];

const KEY_COLOR: Color = Color::Rgb(20, 30, 28);

fn call_to_action(key: &'static str, label: &'static str, filled: bool) -> [Span<'static>; 3] {
    let style = if filled {
        Style::default()
            .fg(KEY_COLOR)
            .bg(ECO_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ECO_COLOR)
    };
    [
        Span::styled(format!(" {key} "), style.add_modifier(Modifier::REVERSED)),
        Span::styled(format!(" {label} "), style),
        Span::raw("   "),
    ]
}

/// Hero with the two calls to action (`c` consult, `d` view data).
pub fn lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];

    lines.extend(LOGO_LINES.iter().map(|l| {
        Line::from(Span::styled(
            *l,
            Style::default().fg(ECO_COLOR).add_modifier(Modifier::BOLD),
        ))
    }));

    lines.extend([
        Line::default(),
        eyebrow("SYSTEM ONLINE // PLANETARY MONITORING"),
        Line::from(Span::styled(
            "Sustainability, measured.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        body("Track your footprint, scan what you throw away and ask an AI"),
        body("consultant how to do better. All from your terminal."),
        Line::default(),
    ]);

    let mut actions = Vec::new();
    actions.extend(call_to_action("c", "Consult the AI", true));
    actions.extend(call_to_action("d", "View data", false));
    lines.push(Line::from(actions));

    lines.extend([
        Line::default(),
        Line::from(Span::styled(
            "─".repeat(48),
            Style::default().fg(ECO_DIM_COLOR),
        )),
        Line::from(Span::styled(
            "  12.4k households · 3.1 kt CO₂ avoided · 98% uptime",
            Style::default().fg(MUTED_COLOR),
        )),
        Line::default(),
    ]);

    lines
}
