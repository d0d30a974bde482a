//! Navigation Bar Component
//!
//! Fixed header with brand, section links, and the "Get API Key" call to
//! action. The `scrolled` shadow class is toggled by the motion script once
//! the page scrolls past the threshold.

use dioxus::prelude::*;

use crate::motion;

/// Logical page sections, bound explicitly to their anchor ids.
///
/// Components never look elements up by ad-hoc strings; every in-page
/// navigation goes through this mapping.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Section {
    Home,
    Features,
    Quickstart,
    Pricing,
    Signup,
}

impl Section {
    /// Anchor id of the section element
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::Quickstart => "quickstart",
            Section::Pricing => "pricing",
            Section::Signup => "signup",
        }
    }

    /// Display name for nav links
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Features => "Features",
            Section::Quickstart => "Quickstart",
            Section::Pricing => "Pricing",
            Section::Signup => "Get API Key",
        }
    }

    /// Sections shown as plain links in the navbar
    pub fn nav_links() -> &'static [Section] {
        &[Section::Features, Section::Quickstart, Section::Pricing]
    }

    /// Smooth-scroll this section into view.
    pub fn scroll_into_view(&self) {
        motion::scroll_to(self.anchor());
    }
}

/// Navigation bar component
#[component]
pub fn NavBar() -> Element {
    rsx! {
        header { class: "navbar",
            div { class: "navbar-inner",
                div {
                    class: "nav-brand",
                    onclick: move |_| Section::Home.scroll_into_view(),
                    span { class: "nav-brand-mark", "🤖" }
                    "Warm Agent"
                }

                nav { class: "nav-links",
                    for section in Section::nav_links() {
                        button {
                            key: "{section.anchor()}",
                            class: "nav-link",
                            onclick: move |_| section.scroll_into_view(),
                            "{section.label()}"
                        }
                    }
                    button {
                        class: "nav-cta",
                        onclick: move |_| Section::Signup.scroll_into_view(),
                        "{Section::Signup.label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_ids_are_distinct() {
        let all = [
            Section::Home,
            Section::Features,
            Section::Quickstart,
            Section::Pricing,
            Section::Signup,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.anchor(), b.anchor());
            }
        }
    }

    #[test]
    fn test_nav_links_exclude_home_and_cta() {
        assert!(!Section::nav_links().contains(&Section::Home));
        assert!(!Section::nav_links().contains(&Section::Signup));
    }
}
