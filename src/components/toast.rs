//! Toast Component
//!
//! Fixed-position status banner in the lower-right corner. One slot:
//! whatever was shown last is what is displayed. Severity picks the
//! background class and icon.

use dioxus::prelude::*;
use warmsite_core::ToastLevel;

use crate::context::use_toasts;

/// Toast host, rendered once at the root of the page.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    let Some(toast) = toasts.current() else {
        return rsx! {};
    };

    let class = if toasts.is_active() {
        format!("toast {} active", toast.level.class())
    } else {
        format!("toast {}", toast.level.class())
    };

    rsx! {
        div { class: "{class}",
            {render_level_icon(toast.level)}
            span { class: "toast-message", "{toast.message}" }
        }
    }
}

/// Render the Lucide icon for a toast severity
fn render_level_icon(level: ToastLevel) -> Element {
    match level {
        ToastLevel::Success => rsx! {
            // Lucide circle-check icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "m9 12 2 2 4-4" }
            }
        },
        ToastLevel::Error => rsx! {
            // Lucide circle-alert icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "10" }
                line { x1: "12", y1: "8", x2: "12", y2: "12" }
                line { x1: "12", y1: "16", x2: "12.01", y2: "16" }
            }
        },
    }
}
