//! Scroll state of the content pane.

/// Vertical scroll position with an optional smooth-scroll target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: u16,
    max: u16,
    height: u16,
    target: Option<u16>,
}

impl Viewport {
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Update the content and visible heights, clamping the offset.
    pub fn update_dimensions(&mut self, content_height: u16, visible_height: u16) {
        self.height = visible_height;
        self.max = content_height.saturating_sub(visible_height);
        self.offset = self.offset.min(self.max);
    }

    /// Start a smooth scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.target = Some(0);
    }

    /// Scroll up immediately, cancelling any smooth scroll.
    pub const fn scroll_up(&mut self, lines: u16) {
        self.target = None;
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll down immediately, cancelling any smooth scroll.
    pub fn scroll_down(&mut self, lines: u16) {
        self.target = None;
        self.offset = self.offset.saturating_add(lines).min(self.max);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height.saturating_sub(1).max(1));
    }

    /// Advance the smooth scroll by one step.
    pub fn tick(&mut self) {
        let Some(target) = self.target else {
            return;
        };

        if self.offset > target {
            let step = ((self.offset - target) / 3).max(1);
            self.offset -= step;
        } else if self.offset < target {
            let step = ((target - self.offset) / 3).max(1);
            self.offset = (self.offset + step).min(self.max);
        }

        if self.offset == target || (self.offset == self.max && target > self.max) {
            self.target = None;
        }
    }
}
