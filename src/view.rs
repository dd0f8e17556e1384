//! Selection view: projects the store's count onto submit state.
//!
//! The view owns no DOM. It remembers the last count it rendered so it can
//! detect the moment the selection reaches capacity; that transition is the
//! user's implicit confirmation and triggers a native form submit.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// What the host must reflect after a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewUpdate {
    /// Whether the submit button must be disabled.
    pub submit_disabled: bool,
    /// Whether the owning form must be submitted now.
    pub auto_submit: bool,
}

#[derive(Debug, Clone)]
pub struct SelectionView {
    capacity: usize,
    last_count: Option<usize>,
}

impl SelectionView {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity, last_count: None }
    }

    /// Render the initial state. Never submits, even when seeded at capacity.
    pub fn mount(&mut self, count: usize) -> ViewUpdate {
        self.last_count = Some(count);
        ViewUpdate { submit_disabled: count == 0, auto_submit: false }
    }

    /// Render `count` after a mutation.
    ///
    /// Auto-submit fires only on the transition into capacity, so re-rendering
    /// an unchanged full selection does not submit twice.
    pub fn render(&mut self, count: usize) -> ViewUpdate {
        let reached = count == self.capacity && self.last_count != Some(count);
        self.last_count = Some(count);
        if reached {
            log::info!("selection reached capacity {}; submitting", self.capacity);
        }
        ViewUpdate { submit_disabled: count == 0, auto_submit: reached }
    }
}
