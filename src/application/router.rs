//! Path commits, navigation effects and session history.

use std::collections::VecDeque;

const MAX_HISTORY: usize = 100;

/// Deferred work the shell runs after a frame has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Smoothly scroll the page body back to the top.
    ScrollToTop,
}

/// Tracks the last path drawn to screen and the back/forward stacks.
///
/// # Examples
///
/// ```
/// use ehighway::application::{Effect, Router};
///
/// let mut router = Router::default();
/// assert_eq!(router.commit("/"), Some(Effect::ScrollToTop));
/// assert_eq!(router.commit("/"), None);
/// assert_eq!(router.commit("/about"), Some(Effect::ScrollToTop));
/// ```
#[derive(Debug, Default)]
pub struct Router {
    committed: Option<String>,
    back: VecDeque<String>,
    forward: VecDeque<String>,
}

impl Router {
    /// Records that `path` has been drawn.
    ///
    /// Fires [`Effect::ScrollToTop`] exactly once per change of committed
    /// path; the first commit counts as a change.
    pub fn commit(&mut self, path: &str) -> Option<Effect> {
        if self.committed.as_deref() == Some(path) {
            return None;
        }
        tracing::debug!(path, "committed path");
        self.committed = Some(path.to_string());
        Some(Effect::ScrollToTop)
    }

    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// Records a forward navigation away from `from`.
    ///
    /// Clears the forward stack, like a browser does when a new page is
    /// visited.
    pub fn record_visit(&mut self, from: &str) {
        self.back.push_back(from.to_string());
        if self.back.len() > MAX_HISTORY {
            self.back.pop_front();
        }
        self.forward.clear();
    }

    /// Pops the previous path, pushing `current` on the forward stack.
    pub fn back(&mut self, current: &str) -> Option<String> {
        let previous = self.back.pop_back()?;
        self.forward.push_back(current.to_string());
        Some(previous)
    }

    /// Pops the next path, pushing `current` on the back stack.
    pub fn forward(&mut self, current: &str) -> Option<String> {
        let next = self.forward.pop_back()?;
        self.back.push_back(current.to_string());
        Some(next)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }
}
