//! Terminal user interface for eco.

mod app;
mod components;
mod router;
mod state;
mod toast;
mod viewport;

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    widgets::Paragraph,
};

use crate::config::Config;
use crate::core::tip::spawn_fetch;

pub use app::{App, HitTarget};
use components::{
    HEADER_HEIGHT, NavAction, SIDE_NAV_WIDTH, build_keybinding_map, default_keybindings,
    render_footer, render_header, render_side_nav, render_toast,
};
pub use state::{Route, UnknownView, ViewState};
pub use toast::{PLACEHOLDER, TipToast};

/// Event loop period.
const TICK: Duration = Duration::from_millis(10);

/// Lines scrolled per mouse wheel step.
const WHEEL_LINES: u16 = 3;

/// Minimum body width to show the side navigation.
const MIN_WIDTH_FOR_SIDE_NAV: u16 = 80;

/// Horizontal padding of the content pane.
const CONTENT_PADDING_X: u16 = 2;

fn keybinding_map() -> &'static HashMap<(KeyCode, KeyModifiers), NavAction> {
    static MAP: OnceLock<HashMap<(KeyCode, KeyModifiers), NavAction>> = OnceLock::new();
    MAP.get_or_init(|| build_keybinding_map(&default_keybindings()))
}

/// Run the TUI application starting on `route`.
///
/// # Errors
///
/// Returns an error if terminal initialization fails or the event loop encounters an error.
pub async fn run(config: &Config, route: Route) -> anyhow::Result<()> {
    let mouse = config.tui.mouse;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    // Lets Esc arrive immediately instead of waiting for an escape sequence
    let supports_keyboard_enhancement =
        crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false);
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(route, config.tui.reveal_delay());

    // The only tip fetch of the session
    if config.tui.tips {
        match config.tips.create_tip_provider() {
            Ok(provider) => app.set_tip_receiver(spawn_fetch(Arc::from(provider))),
            Err(e) => tracing::warn!("eco tips disabled: {e}"),
        }
    }

    let result = run_app(&mut terminal, &mut app, mouse).await;

    // Restore terminal
    if supports_keyboard_enhancement {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mouse: bool,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        tokio::time::sleep(TICK).await;

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                // Accept Press and Repeat, but not Release
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if handle_key(app, key.code, key.modifiers) {
                        return Ok(());
                    }
                }
                Event::Mouse(event) if mouse => handle_mouse(app, event),
                _ => {}
            }
        }

        let now = Instant::now();
        app.poll_tip(now);
        app.tick(now);
    }
}

/// Render one frame: header, content, side navigation, footer and the tip toast.
///
/// Records the clickable regions of the frame on `app`.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let current = app.current_view();
    let mut regions: Vec<(Rect, HitTarget)> = render_header(frame, header_area, current)
        .into_iter()
        .map(|(rect, view)| (rect, HitTarget::View(view)))
        .collect();

    let content_area = if body_area.width >= MIN_WIDTH_FOR_SIDE_NAV {
        let [content, nav] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(SIDE_NAV_WIDTH)])
                .areas(body_area);
        regions.extend(
            render_side_nav(frame, nav, current)
                .into_iter()
                .map(|(rect, view)| (rect, HitTarget::View(view))),
        );
        content
    } else {
        body_area
    };

    let content_area = Rect::new(
        content_area.x + CONTENT_PADDING_X.min(content_area.width / 2),
        content_area.y,
        content_area.width.saturating_sub(CONTENT_PADDING_X * 2),
        content_area.height,
    );
    let lines = router::render(router::content_for(app.route()));
    let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    app.viewport
        .update_dimensions(content_height, content_area.height);
    frame.render_widget(
        Paragraph::new(lines).scroll((app.viewport.offset(), 0)),
        content_area,
    );

    render_footer(frame, footer_area);

    if let Some(close) = render_toast(frame, body_area, app.toast()) {
        regions.push((close, HitTarget::CloseTip));
    }

    app.set_hit_regions(regions);
}

/// Handle a key press. Returns true if the app should quit.
fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    let Some(action) = keybinding_map().get(&(code, modifiers)).copied() else {
        return false;
    };

    match action {
        NavAction::SelectView(view) => app.change_view(view),
        NavAction::NextView => app.next_view(),
        NavAction::PrevView => app.prev_view(),
        NavAction::Consult => {
            if app.shows_landing() {
                app.change_view(ViewState::AiConsultant);
            }
        }
        NavAction::ViewData => {
            if app.shows_landing() {
                app.change_view(ViewState::Dashboard);
            }
        }
        NavAction::DismissTip => app.dismiss_tip(),
        NavAction::ScrollUp => app.viewport.scroll_up(1),
        NavAction::ScrollDown => app.viewport.scroll_down(1),
        NavAction::PageUp => app.viewport.page_up(),
        NavAction::PageDown => app.viewport.page_down(),
        NavAction::ScrollTop => app.viewport.scroll_to_top(),
        NavAction::Quit => return true,
    }

    false
}

fn handle_mouse(app: &mut App, event: MouseEvent) {
    match event.kind {
        MouseEventKind::ScrollUp => app.viewport.scroll_up(WHEEL_LINES),
        MouseEventKind::ScrollDown => app.viewport.scroll_down(WHEEL_LINES),
        MouseEventKind::Down(MouseButton::Left) => match app.hit_test(event.column, event.row) {
            Some(HitTarget::View(view)) => app.change_view(view),
            Some(HitTarget::CloseTip) => app.dismiss_tip(),
            None => {}
        },
        _ => {}
    }
}
