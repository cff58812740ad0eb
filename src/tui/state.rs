//! TUI view state.

use std::fmt;
use std::str::FromStr;

/// The top-level screens. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    /// Landing page with features and about sections.
    #[default]
    Home,
    Dashboard,
    AiConsultant,
    Scanner,
    About,
    /// Static placeholder.
    Resources,
}

impl ViewState {
    /// All views in header order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Dashboard,
        Self::AiConsultant,
        Self::Scanner,
        Self::About,
        Self::Resources,
    ];

    /// Stable identifier used by `--view` and the config file.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::AiConsultant => "ai-consultant",
            Self::Scanner => "scanner",
            Self::About => "about",
            Self::Resources => "resources",
        }
    }

    /// Label shown in the navigation chrome.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Dashboard => "Dashboard",
            Self::AiConsultant => "AI Consultant",
            Self::Scanner => "Scanner",
            Self::About => "About",
            Self::Resources => "Resources",
        }
    }

    /// Position in header order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// Next view in header order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous view in header order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Identifier that names no view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view '{0}'")]
pub struct UnknownView(pub String);

impl FromStr for ViewState {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|v| v.id() == normalized)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// What the router currently holds.
///
/// Identifiers outside [`ViewState`] are kept as-is and render the fallback
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    View(ViewState),
    Unrecognized(String),
}

impl Default for Route {
    fn default() -> Self {
        Self::View(ViewState::default())
    }
}

impl Route {
    /// Resolve an identifier, keeping unknown ones as [`Route::Unrecognized`].
    #[must_use]
    pub fn parse(id: &str) -> Self {
        match id.parse::<ViewState>() {
            Ok(view) => Self::View(view),
            Err(e) => {
                tracing::warn!("{e}, showing fallback content");
                Self::Unrecognized(id.to_string())
            }
        }
    }

    /// The active view, if the route names one.
    #[must_use]
    pub const fn view(&self) -> Option<ViewState> {
        match self {
            Self::View(view) => Some(*view),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<ViewState> for Route {
    fn from(view: ViewState) -> Self {
        Self::View(view)
    }
}
