//! Recycle scanner panel.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use super::{MUTED_COLOR, TEXT_COLOR, body, eyebrow, heading};

const BINS: &[(&str, Color, &str)] = &[
    ("Paper", Color::Rgb(90, 140, 220), "cardboard, newspaper, clean paper bags"),
    ("Plastic", Color::Rgb(230, 200, 80), "bottles, tubs, rinsed food trays"),
    ("Glass", Color::Rgb(120, 200, 120), "jars and bottles, lids removed"),
    ("Organic", Color::Rgb(160, 110, 70), "food scraps, coffee grounds, tea bags"),
    ("Residual", Color::Rgb(150, 150, 150), "nappies, ceramics, greasy packaging"),
];

pub fn lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        eyebrow("// RECYCLE SCANNER"),
        heading("Which bin does it go in?"),
        body("Point your camera at an item in the mobile app to classify it."),
        Line::default(),
        Line::from(Span::styled(
            "  ┌──────────────────────────┐",
            Style::default().fg(MUTED_COLOR),
        )),
        Line::from(Span::styled(
            "  │      [ no camera feed ]  │",
            Style::default().fg(MUTED_COLOR),
        )),
        Line::from(Span::styled(
            "  └──────────────────────────┘",
            Style::default().fg(MUTED_COLOR),
        )),
        Line::default(),
    ];

    lines.extend(BINS.iter().map(|(name, color, examples)| {
        Line::from(vec![
            Span::styled("  ■ ", Style::default().fg(*color)),
            Span::styled(format!("{name:<9}"), Style::default().fg(TEXT_COLOR)),
            Span::styled(*examples, Style::default().fg(MUTED_COLOR)),
        ])
    }));
    lines.push(Line::default());
    lines
}
