//! Scroll and reveal wiring.
//!
//! Two pieces, both installed in the webview:
//! - [`scroll_to`] smooth-scrolls a section into view when a nav link or CTA
//!   is clicked. A missing element is a no-op.
//! - [`MOTION_SCRIPT`] runs once at app mount and installs the persistent
//!   listeners: the navbar shadow toggle and the card reveal observer.

use dioxus::document;

/// Smooth-scroll the element with `anchor` id into view.
///
/// The lookup is null-safe inside the webview, so a link to a section that
/// does not exist swallows the click silently.
pub fn scroll_to(anchor: &str) {
    let _ = document::eval(&format!(
        "document.getElementById('{anchor}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    ));
}

/// One-shot setup script for the scroll listener and the reveal observer.
///
/// The observer keeps watching elements after they become visible; re-entry
/// just re-adds the class, which is idempotent.
pub const MOTION_SCRIPT: &str = r#"
(function() {
    function init() {
        var navbar = document.querySelector('.navbar');
        window.addEventListener('scroll', function() {
            if (!navbar) return;
            if (window.scrollY > 100) {
                navbar.classList.add('scrolled');
            } else {
                navbar.classList.remove('scrolled');
            }
        });

        var observer = new IntersectionObserver(function(entries) {
            entries.forEach(function(entry) {
                if (entry.isIntersecting) {
                    entry.target.classList.add('visible');
                }
            });
        }, {
            threshold: 0.1,
            rootMargin: '0px 0px -50px 0px'
        });

        document.querySelectorAll('.feature-card, .pricing-card').forEach(function(el) {
            observer.observe(el);
        });
    }

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', init);
    } else {
        init();
    }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_navbar_threshold() {
        assert!(MOTION_SCRIPT.contains("window.scrollY > 100"));
        assert!(MOTION_SCRIPT.contains("classList.add('scrolled')"));
        assert!(MOTION_SCRIPT.contains("classList.remove('scrolled')"));
    }

    #[test]
    fn test_script_observer_parameters() {
        assert!(MOTION_SCRIPT.contains("threshold: 0.1"));
        assert!(MOTION_SCRIPT.contains("rootMargin: '0px 0px -50px 0px'"));
        assert!(MOTION_SCRIPT.contains(".feature-card, .pricing-card"));
    }
}
