//! The eco tip toast.

use std::time::{Duration, Instant};

/// Text shown while no tip has arrived.
pub const PLACEHOLDER: &str = "Decrypting tip...";

/// Tip text plus its reveal schedule.
///
/// The reveal is a deadline rather than a timer task: [`TipToast::tick`] shows
/// the toast once the deadline passes, unless it was dismissed. Dismissal is
/// permanent for the session.
#[derive(Debug, Clone, Default)]
pub struct TipToast {
    text: String,
    visible: bool,
    dismissed: bool,
    reveal_at: Option<Instant>,
}

impl TipToast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the fetched tip and schedule the reveal `delay` after `now`.
    pub fn resolve(&mut self, text: impl Into<String>, now: Instant, delay: Duration) {
        self.text = text.into();
        self.reveal_at = Some(now + delay);
    }

    /// The fetch failed: keep the placeholder and never reveal.
    pub fn fail(&mut self) {
        self.reveal_at = None;
    }

    /// Fire the reveal if its deadline has passed. Returns true if the toast appeared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reveal_at {
            Some(at) if now >= at => {
                self.reveal_at = None;
                if self.dismissed {
                    false
                } else {
                    self.visible = true;
                    true
                }
            }
            _ => false,
        }
    }

    /// Hide the toast for the rest of the session.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.dismissed = true;
    }

    /// Text to display: the tip, or the placeholder while it is empty.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            PLACEHOLDER
        } else {
            &self.text
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Whether a reveal is scheduled but has not fired yet.
    #[must_use]
    pub const fn reveal_pending(&self) -> bool {
        self.reveal_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn starts_hidden_with_placeholder() {
        let toast = TipToast::new();
        assert!(!toast.is_visible());
        assert_eq!(toast.display_text(), PLACEHOLDER);
        assert_eq!(toast.text(), "");
    }

    #[test]
    fn reveal_fires_at_deadline() {
        let t0 = Instant::now();
        let mut toast = TipToast::new();
        toast.resolve("Compost scraps", t0, DELAY);

        assert!(!toast.tick(t0 + Duration::from_millis(1999)));
        assert!(!toast.is_visible());
        assert!(toast.tick(t0 + DELAY));
        assert!(toast.is_visible());
        assert_eq!(toast.display_text(), "Compost scraps");
        assert!(!toast.reveal_pending());
    }

    #[test]
    fn dismissal_before_reveal_is_sticky() {
        let t0 = Instant::now();
        let mut toast = TipToast::new();
        toast.resolve("Walk", t0, DELAY);
        toast.dismiss();

        assert!(!toast.tick(t0 + DELAY));
        assert!(!toast.is_visible());
        assert!(!toast.tick(t0 + DELAY * 10));
        assert!(!toast.is_visible());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut toast = TipToast::new();
        toast.dismiss();
        toast.dismiss();
        assert!(!toast.is_visible());
        assert!(toast.is_dismissed());
    }

    #[test]
    fn failure_keeps_placeholder_and_never_reveals() {
        let t0 = Instant::now();
        let mut toast = TipToast::new();
        toast.fail();

        assert!(!toast.tick(t0 + DELAY));
        assert!(!toast.is_visible());
        assert_eq!(toast.display_text(), PLACEHOLDER);
    }

    #[test]
    fn empty_tip_reveals_placeholder() {
        let t0 = Instant::now();
        let mut toast = TipToast::new();
        toast.resolve("", t0, DELAY);

        assert!(toast.tick(t0 + DELAY));
        assert_eq!(toast.display_text(), PLACEHOLDER);
    }
}
