//! Vertical scrolling of the page body.

/// Scroll offset of the page body plus the sizes it is clamped against.
///
/// The presentation layer reports the body height and the content height
/// on every frame through [`Viewport::resize`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    body_height: usize,
    content_height: usize,
    /// Whether a smooth scroll to the top is in flight.
    animating: bool,
}

impl Viewport {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn body_height(&self) -> usize {
        self.body_height
    }

    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.body_height)
    }

    pub fn resize(&mut self, body_height: usize, content_height: usize) {
        self.body_height = body_height;
        self.content_height = content_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.animating = false;
        self.offset = (self.offset + lines).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.animating = false;
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.body_height.saturating_sub(1).max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.body_height.saturating_sub(1).max(1));
    }

    pub fn jump_to_top(&mut self) {
        self.animating = false;
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.animating = false;
        self.offset = self.max_offset();
    }

    /// Starts a smooth scroll to the top, replacing any in flight.
    pub fn scroll_to_top_smooth(&mut self) {
        self.animating = self.offset > 0;
    }

    /// Scrolls just enough for content rows `top..=bottom` to be on screen.
    ///
    /// When the range is taller than the body, its top row wins.
    pub fn ensure_visible(&mut self, top: usize, bottom: usize) {
        if self.body_height == 0 {
            return;
        }
        let before = self.offset;
        if top < self.offset {
            self.offset = top;
        } else if bottom >= self.offset + self.body_height {
            self.offset = (bottom + 1 - self.body_height).min(top);
        }
        self.offset = self.offset.min(self.max_offset());
        if self.offset != before {
            self.animating = false;
        }
    }

    /// Advances the smooth scroll by one frame.
    ///
    /// Each step covers a third of the remaining distance, at least one line.
    pub fn tick(&mut self) {
        if !self.animating {
            return;
        }
        let step = self.offset.div_ceil(3).max(1);
        self.offset = self.offset.saturating_sub(step);
        if self.offset == 0 {
            self.animating = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(offset: usize) -> Viewport {
        let mut viewport = Viewport::default();
        viewport.resize(10, 100);
        viewport.scroll_down(offset);
        viewport
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut viewport = viewport(0);
        viewport.scroll_down(500);
        assert_eq!(viewport.offset(), 90);
        viewport.scroll_up(500);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_resize_clamps_offset() {
        let mut viewport = viewport(80);
        viewport.resize(10, 40);
        assert_eq!(viewport.offset(), 30);
    }

    #[test]
    fn test_smooth_scroll_reaches_top() {
        let mut viewport = viewport(60);
        viewport.scroll_to_top_smooth();
        assert!(viewport.is_animating());

        let mut previous = viewport.offset();
        let mut frames = 0;
        while viewport.is_animating() {
            viewport.tick();
            assert!(viewport.offset() < previous);
            previous = viewport.offset();
            frames += 1;
        }
        assert_eq!(viewport.offset(), 0);
        assert!(frames > 1);
    }

    #[test]
    fn test_smooth_scroll_at_top_is_noop() {
        let mut viewport = viewport(0);
        viewport.scroll_to_top_smooth();
        assert!(!viewport.is_animating());
        viewport.tick();
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut viewport = viewport(50);
        viewport.scroll_to_top_smooth();
        viewport.tick();
        viewport.scroll_down(1);
        assert!(!viewport.is_animating());
        let offset = viewport.offset();
        viewport.tick();
        assert_eq!(viewport.offset(), offset);
    }

    #[test]
    fn test_ensure_visible() {
        let mut viewport = viewport(0);
        viewport.ensure_visible(3, 5);
        assert_eq!(viewport.offset(), 0);

        viewport.ensure_visible(13, 18);
        assert_eq!(viewport.offset(), 9);

        viewport.ensure_visible(4, 4);
        assert_eq!(viewport.offset(), 4);

        viewport.ensure_visible(20, 60);
        assert_eq!(viewport.offset(), 20);

        viewport.ensure_visible(98, 99);
        assert_eq!(viewport.offset(), 90);
    }

    #[test]
    fn test_ensure_visible_cancels_animation_when_it_moves() {
        let mut viewport = viewport(50);
        viewport.scroll_to_top_smooth();
        viewport.ensure_visible(50, 52);
        assert!(viewport.is_animating());
        viewport.ensure_visible(70, 70);
        assert!(!viewport.is_animating());
        assert_eq!(viewport.offset(), 61);
    }

    #[test]
    fn test_paging() {
        let mut viewport = viewport(0);
        viewport.page_down();
        assert_eq!(viewport.offset(), 9);
        viewport.jump_to_bottom();
        assert_eq!(viewport.offset(), 90);
        viewport.page_up();
        assert_eq!(viewport.offset(), 81);
        viewport.jump_to_top();
        assert_eq!(viewport.offset(), 0);
    }
}
