//! Clipboard access.
//!
//! Native clipboard first (arboard); when that is unavailable — headless
//! session, missing display protocol — fall back to the legacy copy command
//! inside the webview. Copy failures are logged and otherwise ignored: the
//! page never surfaces them.

use dioxus::document;
use warmsite_core::clipboard::fallback_copy_script;

/// Copy `text` to the system clipboard.
pub fn copy_text(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                tracing::warn!("Clipboard write failed: {}", e);
            }
        }
        Err(e) => {
            tracing::warn!("Clipboard not available, using webview fallback: {}", e);
            let _ = document::eval(&fallback_copy_script(text));
        }
    }
}
