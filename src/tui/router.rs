//! Maps the current route to the content sections to render.

use ratatui::text::Line;

use super::components::sections;
use super::state::{Route, ViewState};

/// A content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Landing,
    Features,
    About,
    Dashboard,
    Chat,
    Scanner,
    Resources,
}

impl Section {
    fn lines(self) -> Vec<Line<'static>> {
        match self {
            Self::Landing => sections::landing(),
            Self::Features => sections::features(),
            Self::About => sections::about(),
            Self::Dashboard => sections::dashboard(),
            Self::Chat => sections::chat(),
            Self::Scanner => sections::scanner(),
            Self::Resources => sections::resources(),
        }
    }
}

/// One rendered block of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub section: Section,
    /// Blank rows above the section.
    pub top_padding: u16,
}

impl Slot {
    const fn new(section: Section) -> Self {
        Self {
            section,
            top_padding: 0,
        }
    }

    const fn padded(section: Section, top_padding: u16) -> Self {
        Self {
            section,
            top_padding,
        }
    }
}

/// Content for every view, in render order.
pub const ROUTES: &[(ViewState, &[Slot])] = &[
    (
        ViewState::Home,
        &[
            Slot::new(Section::Landing),
            Slot::new(Section::Features),
            Slot::new(Section::About),
        ],
    ),
    (ViewState::Dashboard, &[Slot::new(Section::Dashboard)]),
    (ViewState::AiConsultant, &[Slot::new(Section::Chat)]),
    (ViewState::Scanner, &[Slot::new(Section::Scanner)]),
    (ViewState::About, &[Slot::padded(Section::About, 3)]),
    (ViewState::Resources, &[Slot::new(Section::Resources)]),
];

/// Content for routes that name no view: the landing hero alone.
pub const FALLBACK: &[Slot] = &[Slot::new(Section::Landing)];

/// Slots for a route.
#[must_use]
pub fn content_for(route: &Route) -> &'static [Slot] {
    route
        .view()
        .and_then(|view| ROUTES.iter().find(|(v, _)| *v == view))
        .map_or(FALLBACK, |(_, slots)| *slots)
}

/// Whether the landing hero (and its calls to action) is on screen.
#[must_use]
pub fn shows_landing(route: &Route) -> bool {
    content_for(route)
        .iter()
        .any(|slot| slot.section == Section::Landing)
}

/// Render slots into lines, top to bottom.
#[must_use]
pub fn render(slots: &[Slot]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for slot in slots {
        lines.extend((0..slot.top_padding).map(|_| Line::default()));
        lines.extend(slot.section.lines());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(route: &Route) -> Vec<Section> {
        content_for(route).iter().map(|s| s.section).collect()
    }

    #[test]
    fn every_view_has_exactly_one_entry() {
        for view in ViewState::ALL {
            let count = ROUTES.iter().filter(|(v, _)| *v == view).count();
            assert_eq!(count, 1, "{view} should appear once");
        }
    }

    #[test]
    fn home_renders_landing_features_about() {
        assert_eq!(
            sections(&ViewState::Home.into()),
            vec![Section::Landing, Section::Features, Section::About]
        );
    }

    #[test]
    fn single_section_views() {
        let cases = [
            (ViewState::Dashboard, Section::Dashboard),
            (ViewState::AiConsultant, Section::Chat),
            (ViewState::Scanner, Section::Scanner),
            (ViewState::Resources, Section::Resources),
        ];
        for (view, section) in cases {
            assert_eq!(sections(&view.into()), vec![section], "{view}");
            assert_eq!(content_for(&view.into())[0].top_padding, 0);
        }
    }

    #[test]
    fn about_view_has_extra_top_padding() {
        let slots = content_for(&ViewState::About.into());
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].section, Section::About);
        assert!(slots[0].top_padding > 0);
    }

    #[test]
    fn unrecognized_route_renders_landing_only() {
        let route = Route::Unrecognized("legacy".to_string());
        assert_eq!(sections(&route), vec![Section::Landing]);
        assert_eq!(content_for(&route), FALLBACK);
    }

    #[test]
    fn landing_is_shown_on_home_and_fallback_only() {
        assert!(shows_landing(&ViewState::Home.into()));
        assert!(shows_landing(&Route::Unrecognized(String::new())));
        assert!(!shows_landing(&ViewState::Dashboard.into()));
        assert!(!shows_landing(&ViewState::About.into()));
    }

    #[test]
    fn render_inserts_padding_rows() {
        let unpadded = render(&[Slot::new(Section::About)]);
        let padded = render(&[Slot::padded(Section::About, 3)]);
        assert_eq!(padded.len(), unpadded.len() + 3);
        assert!(padded[..3].iter().all(|l| l.spans.is_empty()));
    }
}
