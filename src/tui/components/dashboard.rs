//! Footprint dashboard. Figures are sample data.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::{ECO_COLOR, ECO_DIM_COLOR, MUTED_COLOR, TEXT_COLOR, body, eyebrow, heading};

const GAUGE_WIDTH: usize = 24;

struct Metric {
    label: &'static str,
    value: &'static str,
    percent: u8,
}

const METRICS: &[Metric] = &[
    Metric {
        label: "Energy",
        value: "312 kWh",
        percent: 64,
    },
    Metric {
        label: "Water",
        value: "4.2 m³",
        percent: 48,
    },
    Metric {
        label: "Waste",
        value: "18 kg",
        percent: 31,
    },
    Metric {
        label: "Recycled",
        value: "11 kg",
        percent: 72,
    },
];

const WEEKLY_CO2: &[(&str, u8)] = &[
    ("Mon", 5),
    ("Tue", 7),
    ("Wed", 4),
    ("Thu", 6),
    ("Fri", 8),
    ("Sat", 3),
    ("Sun", 2),
];

/// Filled and empty cell counts for a percentage.
fn gauge_cells(percent: u8) -> (usize, usize) {
    let filled = usize::from(percent.min(100)) * GAUGE_WIDTH / 100;
    (filled, GAUGE_WIDTH - filled)
}

fn gauge(metric: &Metric) -> Line<'static> {
    let (filled, empty) = gauge_cells(metric.percent);
    Line::from(vec![
        Span::styled(
            format!("  {:<10}", metric.label),
            Style::default().fg(TEXT_COLOR),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(ECO_COLOR)),
        Span::styled("░".repeat(empty), Style::default().fg(ECO_DIM_COLOR)),
        Span::styled(
            format!(" {:>3}%  {}", metric.percent, metric.value),
            Style::default().fg(MUTED_COLOR),
        ),
    ])
}

pub fn lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        eyebrow("// TELEMETRY"),
        heading("Monthly footprint"),
        body("Share of your monthly budget used so far."),
        Line::default(),
    ];
    lines.extend(METRICS.iter().map(gauge));

    lines.extend([
        Line::default(),
        heading("CO₂ this week (kg)"),
        Line::default(),
    ]);
    lines.extend(WEEKLY_CO2.iter().map(|(day, kg)| {
        Line::from(vec![
            Span::styled(format!("  {day} "), Style::default().fg(MUTED_COLOR)),
            Span::styled("▇".repeat(usize::from(*kg) * 2), Style::default().fg(ECO_COLOR)),
            Span::styled(format!(" {kg}"), Style::default().fg(MUTED_COLOR)),
        ])
    }));
    lines.push(Line::default());
    lines
}
