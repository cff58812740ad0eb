//! TUI components for rendering different views.
//!
//! Content sections are pure functions returning styled lines; chrome
//! components draw into a frame and report their clickable regions.

mod about;
mod chat;
mod dashboard;
mod features;
mod footer;
mod header;
mod landing;
mod nav_action;
mod resources;
mod scanner;
mod side_nav;
mod toast;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub use footer::render_footer;
pub use header::{HEADER_HEIGHT, render_header};
pub use nav_action::{NavAction, build_keybinding_map, default_keybindings};
pub use side_nav::{SIDE_NAV_WIDTH, render_side_nav};
pub use toast::render_toast;

pub mod sections {
    //! Line producers for each content section.
    pub use super::about::lines as about;
    pub use super::chat::lines as chat;
    pub use super::dashboard::lines as dashboard;
    pub use super::features::lines as features;
    pub use super::landing::lines as landing;
    pub use super::resources::lines as resources;
    pub use super::scanner::lines as scanner;
}

/// Brand colors
pub const ECO_COLOR: Color = Color::Rgb(77, 201, 176);
pub const ECO_DIM_COLOR: Color = Color::Rgb(30, 80, 70);
pub const TEXT_COLOR: Color = Color::Rgb(220, 224, 230);
pub const MUTED_COLOR: Color = Color::Rgb(140, 140, 150);
pub const TIP_COLOR: Color = Color::Rgb(180, 160, 100);

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(TEXT_COLOR).add_modifier(Modifier::BOLD),
    ))
}

fn eyebrow(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(ECO_COLOR)))
}

fn body(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(MUTED_COLOR)))
}

fn bullet(title: &'static str, detail: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ▸ ", Style::default().fg(ECO_COLOR)),
        Span::styled(title, Style::default().fg(TEXT_COLOR)),
        Span::styled(" · ", Style::default().fg(MUTED_COLOR)),
        Span::styled(detail, Style::default().fg(MUTED_COLOR)),
    ])
}

#[cfg(test)]
pub(crate) fn plain(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
