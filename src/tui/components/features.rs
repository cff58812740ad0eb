//! Feature overview shown on the home view.

use ratatui::text::Line;

use super::{body, bullet, eyebrow, heading};

const FEATURES: &[(&str, &str)] = &[
    ("Footprint dashboard", "energy, water and waste at a glance"),
    ("AI consultant", "ask for practical, personal advice"),
    ("Recycle scanner", "find out which bin an item belongs in"),
    ("Daily intel", "one short eco tip every session"),
];

pub fn lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow("// CAPABILITIES"),
        heading("What eco does"),
        body("Small habits, tracked consistently, add up."),
        Line::default(),
    ];
    lines.extend(FEATURES.iter().map(|(title, detail)| bullet(title, detail)));
    lines.push(Line::default());
    lines
}
