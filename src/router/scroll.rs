//! Scroll handling applied after each navigation.

use std::sync::Mutex;

/// Target scroll offsets; `None` leaves that axis where it is
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    pub top: Option<f64>,
    pub left: Option<f64>,
}

impl ScrollPosition {
    /// Top of the page, horizontal offset unchanged
    pub fn top() -> Self {
        Self {
            top: Some(0.0),
            left: None,
        }
    }
}

/// Position to restore after every completed navigation
pub fn scroll_behavior() -> ScrollPosition {
    ScrollPosition::top()
}

/// Something that can be scrolled
pub trait Viewport: Send + Sync {
    fn scroll_to(&self, position: ScrollPosition);
}

/// Viewport used before the router is mounted anywhere
#[derive(Debug, Default)]
pub struct DetachedViewport;

impl Viewport for DetachedViewport {
    fn scroll_to(&self, position: ScrollPosition) {
        tracing::trace!(?position, "Scroll requested on detached viewport");
    }
}

/// Viewport that remembers every scroll request
#[derive(Debug, Default)]
pub struct RecordingViewport {
    scrolls: Mutex<Vec<ScrollPosition>>,
}

impl RecordingViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrolls(&self) -> Vec<ScrollPosition> {
        self.scrolls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<ScrollPosition> {
        self.scrolls().last().copied()
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to(&self, position: ScrollPosition) {
        self.scrolls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(position);
    }
}
