use dioxus::prelude::*;

use crate::components::ToastHost;
use crate::context::use_toast_provider;
use crate::motion;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Injects global styles, provides the toast slot, installs the scroll and
/// reveal listeners once on mount, and renders the single page.
#[component]
pub fn App() -> Element {
    use_toast_provider();

    // One-shot motion wiring; there is no re-initialization hook.
    use_effect(|| {
        let _ = dioxus::document::eval(motion::MOTION_SCRIPT);
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
        ToastHost {}
    }
}
