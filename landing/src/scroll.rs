//! Viewport scroll tracking for the back-to-top button.
//!
//! The window `scroll` listener is a process-wide resource: whoever acquires
//! a [`ScrollObserver`] must release it when its component is torn down,
//! otherwise the callback keeps writing into a disposed signal.

use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::state::UiFlags;

/// Registration of the window scroll listener.
pub struct ScrollObserver {
    handle: Option<WindowListenerHandle>,
}

impl ScrollObserver {
    /// Register the listener and sample the current offset once, so a page
    /// restored mid-scroll starts with the right button state.
    pub fn acquire(threshold: f64, flags: RwSignal<UiFlags>) -> Self {
        sync_flags(threshold, flags);
        let handle = window_event_listener(ev::scroll, move |_| sync_flags(threshold, flags));
        tracing::debug!(threshold, "scroll observer registered");
        Self {
            handle: Some(handle),
        }
    }

    /// Deregister the listener.
    pub fn release(mut self) {
        self.detach();
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
            tracing::debug!("scroll observer released");
        }
    }
}

impl Drop for ScrollObserver {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Current vertical scroll offset; 0 outside a browser.
pub fn current_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn sync_flags(threshold: f64, flags: RwSignal<UiFlags>) {
    let offset = current_offset();
    flags.maybe_update(|f| f.observe_scroll(offset, threshold));
}

/// Ask the viewport for a smooth scroll to the top. Fire-and-forget.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
