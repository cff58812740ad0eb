//! TUI application state.

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

use super::router;
use super::state::{Route, ViewState};
use super::toast::TipToast;
use super::viewport::Viewport;
use crate::core::tip::TipEvent;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    View(ViewState),
    CloseTip,
}

/// Root router state: the current route, the tip toast and the content scroll.
///
/// All mutation goes through the methods below; the event loop owns the only
/// instance.
pub struct App {
    route: Route,
    toast: TipToast,
    reveal_delay: Duration,
    tip_rx: Option<mpsc::UnboundedReceiver<TipEvent>>,

    /// Content pane scroll state.
    pub viewport: Viewport,
    /// Clickable regions from the last frame.
    hit_regions: Vec<(Rect, HitTarget)>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Route::default(), Duration::from_millis(2000))
    }
}

impl App {
    /// Create app state starting on `route`.
    #[must_use]
    pub fn new(route: Route, reveal_delay: Duration) -> Self {
        Self {
            route,
            toast: TipToast::new(),
            reveal_delay,
            tip_rx: None,
            viewport: Viewport::default(),
            hit_regions: Vec::new(),
        }
    }

    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// The active view, or `None` on the fallback route.
    #[must_use]
    pub const fn current_view(&self) -> Option<ViewState> {
        self.route.view()
    }

    #[must_use]
    pub const fn toast(&self) -> &TipToast {
        &self.toast
    }

    /// Switch to `target` and scroll the content back to the top.
    ///
    /// Selecting the current view again still scrolls.
    pub fn change_view(&mut self, target: ViewState) {
        tracing::debug!(view = %target, "change view");
        self.route = Route::View(target);
        self.viewport.scroll_to_top();
    }

    /// Route by identifier. Unknown identifiers render the fallback content.
    pub fn open(&mut self, id: &str) {
        match Route::parse(id) {
            Route::View(view) => self.change_view(view),
            route @ Route::Unrecognized(_) => {
                self.route = route;
                self.viewport.scroll_to_top();
            }
        }
    }

    /// Next view in header order. From the fallback route this is the first view.
    pub fn next_view(&mut self) {
        let target = self.current_view().map_or(ViewState::ALL[0], ViewState::next);
        self.change_view(target);
    }

    /// Previous view in header order. From the fallback route this is the last view.
    pub fn prev_view(&mut self) {
        let target = self
            .current_view()
            .map_or(ViewState::ALL[ViewState::ALL.len() - 1], ViewState::prev);
        self.change_view(target);
    }

    /// Whether the landing calls to action are on screen.
    #[must_use]
    pub fn shows_landing(&self) -> bool {
        router::shows_landing(&self.route)
    }

    /// Hide the tip for the rest of the session.
    pub fn dismiss_tip(&mut self) {
        self.toast.dismiss();
    }

    /// Attach the receiver of the startup tip fetch.
    pub fn set_tip_receiver(&mut self, rx: mpsc::UnboundedReceiver<TipEvent>) {
        self.tip_rx = Some(rx);
    }

    /// Apply the outcome of the tip fetch received at `now`.
    pub fn on_tip_event(&mut self, event: TipEvent, now: Instant) {
        match event {
            TipEvent::Resolved(text) => {
                tracing::debug!(delay = ?self.reveal_delay, "tip received, scheduling reveal");
                self.toast.resolve(text, now, self.reveal_delay);
            }
            TipEvent::Failed(reason) => {
                tracing::debug!("no tip this session: {reason}");
                self.toast.fail();
            }
        }
    }

    /// Drain the tip channel without blocking.
    pub fn poll_tip(&mut self, now: Instant) {
        let Some(rx) = self.tip_rx.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(event) => {
                // One fetch per session
                self.tip_rx = None;
                self.on_tip_event(event, now);
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.tip_rx = None;
                self.toast.fail();
            }
        }
    }

    /// Advance timers: the tip reveal and the smooth scroll.
    pub fn tick(&mut self, now: Instant) {
        if self.toast.tick(now) {
            tracing::debug!("tip revealed");
        }
        self.viewport.tick();
    }

    /// Replace the clickable regions recorded for the current frame.
    pub fn set_hit_regions(&mut self, regions: Vec<(Rect, HitTarget)>) {
        self.hit_regions = regions;
    }

    /// Find what was drawn at a screen cell. Later regions are on top.
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.hit_regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::toast::PLACEHOLDER;

    const DELAY: Duration = Duration::from_millis(2000);

    fn app() -> App {
        App::new(Route::default(), DELAY)
    }

    #[test]
    fn starts_on_home_with_hidden_toast() {
        let app = app();
        assert_eq!(app.route(), &Route::View(ViewState::Home));
        assert!(!app.toast().is_visible());
        assert_eq!(app.toast().display_text(), PLACEHOLDER);
    }

    #[test]
    fn change_view_sets_exactly_the_target() {
        let mut app = app();
        for target in ViewState::ALL {
            for prior in ViewState::ALL {
                app.change_view(prior);
                app.change_view(target);
                assert_eq!(app.current_view(), Some(target));
            }
        }
    }

    #[test]
    fn change_view_to_same_view_still_scrolls_to_top() {
        let mut app = app();
        app.viewport.update_dimensions(100, 10);
        app.viewport.scroll_down(40);

        app.change_view(ViewState::Home);
        assert_eq!(app.current_view(), Some(ViewState::Home));
        assert!(app.viewport.is_animating());
    }

    #[test]
    fn open_unknown_id_keeps_fallback_route() {
        let mut app = app();
        app.viewport.update_dimensions(100, 10);
        app.viewport.scroll_down(40);

        app.open("marketplace");
        assert!(app.viewport.is_animating());
        assert_eq!(app.route(), &Route::Unrecognized("marketplace".to_string()));
        assert_eq!(app.current_view(), None);
        assert!(app.shows_landing());

        app.open("scanner");
        assert_eq!(app.current_view(), Some(ViewState::Scanner));
        assert!(!app.shows_landing());
    }

    #[test]
    fn next_and_prev_from_fallback() {
        let mut app = App::new(Route::Unrecognized("x".to_string()), DELAY);
        app.next_view();
        assert_eq!(app.current_view(), Some(ViewState::Home));

        let mut app = App::new(Route::Unrecognized("x".to_string()), DELAY);
        app.prev_view();
        assert_eq!(app.current_view(), Some(ViewState::Resources));
    }

    #[test]
    fn placeholder_until_tip_resolves() {
        let t0 = Instant::now();
        let mut app = app();
        app.tick(t0 + Duration::from_secs(30));

        assert!(!app.toast().is_visible());
        assert_eq!(app.toast().display_text(), PLACEHOLDER);
    }

    #[test]
    fn reveal_happens_exactly_after_delay() {
        let t0 = Instant::now();
        let mut app = app();
        app.on_tip_event(TipEvent::Resolved("Turn off lights".to_string()), t0);

        app.tick(t0 + Duration::from_millis(1999));
        assert!(!app.toast().is_visible());

        app.tick(t0 + Duration::from_millis(2000));
        assert!(app.toast().is_visible());
        assert_eq!(app.toast().display_text(), "Turn off lights");

        app.dismiss_tip();
        assert!(!app.toast().is_visible());
        for ms in [2001, 5000, 60_000] {
            app.tick(t0 + Duration::from_millis(ms));
            assert!(!app.toast().is_visible());
        }
    }

    #[test]
    fn dismissal_before_reveal_wins() {
        let t0 = Instant::now();
        let mut app = app();
        app.on_tip_event(TipEvent::Resolved("Walk".to_string()), t0);
        app.dismiss_tip();

        app.tick(t0 + DELAY);
        assert!(!app.toast().is_visible());
    }

    #[test]
    fn dismissal_before_fetch_wins() {
        let t0 = Instant::now();
        let mut app = app();
        app.dismiss_tip();
        app.on_tip_event(TipEvent::Resolved("Walk".to_string()), t0);

        app.tick(t0 + DELAY);
        assert!(!app.toast().is_visible());
    }

    #[test]
    fn view_changes_do_not_touch_the_toast() {
        let t0 = Instant::now();
        let mut app = app();
        app.on_tip_event(TipEvent::Resolved("Walk".to_string()), t0);
        app.change_view(ViewState::Dashboard);
        app.change_view(ViewState::Home);

        app.tick(t0 + DELAY);
        assert!(app.toast().is_visible());
    }

    #[test]
    fn failed_fetch_keeps_placeholder_hidden() {
        let t0 = Instant::now();
        let mut app = app();
        app.on_tip_event(TipEvent::Failed("offline".to_string()), t0);

        app.tick(t0 + DELAY);
        assert!(!app.toast().is_visible());
        assert_eq!(app.toast().display_text(), PLACEHOLDER);
    }

    #[test]
    fn poll_tip_consumes_one_event() {
        let t0 = Instant::now();
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = app();
        app.set_tip_receiver(rx);

        app.poll_tip(t0);
        assert!(!app.toast().reveal_pending());

        tx.send(TipEvent::Resolved("Bike".to_string())).unwrap();
        app.poll_tip(t0);
        assert!(app.toast().reveal_pending());
        assert_eq!(app.toast().text(), "Bike");
    }

    #[test]
    fn poll_tip_treats_dropped_sender_as_failure() {
        let (tx, rx) = mpsc::unbounded_channel::<TipEvent>();
        let mut app = app();
        app.set_tip_receiver(rx);
        drop(tx);

        app.poll_tip(Instant::now());
        assert!(!app.toast().reveal_pending());
        assert!(!app.toast().is_visible());
    }

    #[test]
    fn hit_test_prefers_topmost_region() {
        let mut app = app();
        app.set_hit_regions(vec![
            (Rect::new(0, 0, 10, 10), HitTarget::View(ViewState::Scanner)),
            (Rect::new(2, 2, 3, 1), HitTarget::CloseTip),
        ]);

        assert_eq!(app.hit_test(3, 2), Some(HitTarget::CloseTip));
        assert_eq!(
            app.hit_test(0, 0),
            Some(HitTarget::View(ViewState::Scanner))
        );
        assert_eq!(app.hit_test(20, 20), None);
    }
}
