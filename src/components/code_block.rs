//! Code Block Component
//!
//! Dark code panel with a header row: snippet title on the left, copy button
//! on the right. A successful press swaps the copy icon for a checkmark in
//! the success color, then reverts after two seconds. Presses are not
//! debounced; each one just restarts the feedback.

use std::time::Duration;

use dioxus::prelude::*;

use crate::clipboard;

/// How long the checkmark feedback stays before the icon reverts
const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

#[derive(Props, Clone, PartialEq)]
pub struct CodeBlockProps {
    /// Label in the header row (e.g. "terminal", "python")
    pub title: String,
    /// Verbatim snippet text; also what the copy button writes
    pub code: String,
}

/// Code block with copy-to-clipboard button
#[component]
pub fn CodeBlock(props: CodeBlockProps) -> Element {
    let mut copied = use_signal(|| false);

    let code = props.code.clone();
    let on_copy = move |_| {
        clipboard::copy_text(&code);
        copied.set(true);

        spawn(async move {
            tokio::time::sleep(COPY_FEEDBACK).await;
            copied.set(false);
        });
    };

    rsx! {
        div { class: "code-block",
            div { class: "code-header",
                span { class: "code-title", "{props.title}" }
                button {
                    class: if copied() { "copy-btn copied" } else { "copy-btn" },
                    "aria-label": "Copy to clipboard",
                    onclick: on_copy,

                    if copied() {
                        // Lucide check icon
                        svg {
                            xmlns: "http://www.w3.org/2000/svg",
                            width: "16",
                            height: "16",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            path { d: "M20 6 9 17l-5-5" }
                        }
                    } else {
                        // Lucide copy icon
                        svg {
                            xmlns: "http://www.w3.org/2000/svg",
                            width: "16",
                            height: "16",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            rect { x: "8", y: "8", width: "14", height: "14", rx: "2", ry: "2" }
                            path { d: "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" }
                        }
                    }
                }
            }
            pre {
                code { "{props.code}" }
            }
        }
    }
}
