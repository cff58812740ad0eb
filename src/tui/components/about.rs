//! About section.

use ratatui::text::Line;

use super::{body, eyebrow, heading};

pub fn lines() -> Vec<Line<'static>> {
    vec![
        eyebrow("// MISSION"),
        heading("About eco"),
        body("eco started as a weekend experiment: could sustainability data"),
        body("feel as immediate as a system monitor? We think it can."),
        Line::default(),
        body("Everything runs locally except the daily tip, which comes from"),
        body("the language model you configure. No account, no tracking."),
        Line::default(),
    ]
}
