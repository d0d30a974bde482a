//! Toast context for the Warm Agent site.
//!
//! The page has a single toast slot. `App` creates the slot with
//! [`use_toast_provider`]; any component can grab the [`Toasts`] handle via
//! [`use_toasts`] and show a banner.

use dioxus::prelude::*;
use warmsite_core::{Toast, TOAST_DURATION};

/// Handle to the page's toast slot.
///
/// Copyable, so event handlers can capture it by value.
#[derive(Clone, Copy)]
pub struct Toasts {
    current: Signal<Option<Toast>>,
    active: Signal<bool>,
}

impl Toasts {
    /// Show `toast`, replacing whatever is currently displayed, and schedule
    /// a hide after [`TOAST_DURATION`].
    ///
    /// Hide timers are deliberately not cancelled on replacement: a timer
    /// from an earlier toast may hide a newer one early. The slot content is
    /// still whatever was shown last.
    pub fn show(mut self, toast: Toast) {
        self.current.set(Some(toast));
        self.active.set(true);

        let mut active = self.active;
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            active.set(false);
        });
    }

    /// The most recently shown toast, if any.
    pub fn current(&self) -> Option<Toast> {
        (self.current)()
    }

    /// Whether the toast is currently visible.
    pub fn is_active(&self) -> bool {
        (self.active)()
    }
}

/// Create the toast slot and provide it to the component tree.
///
/// Call once, from `App`.
pub fn use_toast_provider() -> Toasts {
    let current = use_signal(|| Option::<Toast>::None);
    let active = use_signal(|| false);
    use_context_provider(|| Toasts { current, active })
}

/// Grab the toast handle from context.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}
