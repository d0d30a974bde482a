//! Feature and Pricing Cards
//!
//! Static content tables plus the card components that render them. Both
//! card kinds carry the reveal classes (`feature-card` / `pricing-card`)
//! that the motion script's observer watches; they start transparent and
//! slide up the first time they enter the viewport.

use dioxus::prelude::*;

use crate::components::navbar::Section;

/// One feature tile
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Feature grid content
pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "💗",
        title: "Empathy detection",
        blurb: "Reads the emotional temperature of every exchange and flags cold, dismissive replies before they reach your users.",
    },
    Feature {
        icon: "✍️",
        title: "Tone rewriting",
        blurb: "Rewrites robotic answers into warm, human phrasing while leaving the facts untouched.",
    },
    Feature {
        icon: "🧠",
        title: "Mood memory",
        blurb: "Tracks the conversation's emotional context so follow-ups stay consistent and considerate.",
    },
    Feature {
        icon: "🌍",
        title: "Warm in 40+ languages",
        blurb: "Empathy that survives translation, with native-sounding warmth in every supported locale.",
    },
    Feature {
        icon: "⚡",
        title: "One-line integration",
        blurb: "Wrap any model's output with a single call. No retraining, no prompt surgery, no migration.",
    },
    Feature {
        icon: "🔒",
        title: "Privacy first",
        blurb: "Conversations are processed in memory and never stored. Your users' feelings stay theirs.",
    },
];

/// One pricing tier
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub featured: bool,
}

/// Pricing grid content
pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$0",
        period: "free forever",
        features: &[
            "1,000 warm replies / month",
            "Community support",
            "Single project",
            "Standard warmth models",
        ],
        cta: "Start for free",
        featured: false,
    },
    Plan {
        name: "Pro",
        price: "$19",
        period: "per month",
        features: &[
            "100,000 warm replies / month",
            "Priority support",
            "Unlimited projects",
            "Custom tone profiles",
            "Usage analytics",
        ],
        cta: "Get started",
        featured: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "let's talk",
        features: &[
            "Unlimited volume",
            "Dedicated support engineer",
            "On-prem deployment",
            "Custom SLAs",
        ],
        cta: "Contact us",
        featured: false,
    },
];

/// Feature tile component
#[component]
pub fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        div { class: "feature-card",
            div { class: "feature-icon", "{feature.icon}" }
            h3 { class: "feature-title", "{feature.title}" }
            p { class: "feature-blurb", "{feature.blurb}" }
        }
    }
}

/// Pricing tier component; every CTA leads to the signup section.
#[component]
pub fn PricingCard(plan: Plan) -> Element {
    let card_class = if plan.featured {
        "pricing-card pricing-card--featured"
    } else {
        "pricing-card"
    };

    rsx! {
        div { class: "{card_class}",
            if plan.featured {
                span { class: "plan-badge", "Most popular" }
            }
            h3 { class: "plan-name", "{plan.name}" }
            div { class: "plan-price", "{plan.price}" }
            div { class: "plan-period", "{plan.period}" }
            ul { class: "plan-features",
                for line in plan.features {
                    li { key: "{line}", "{line}" }
                }
            }
            button {
                class: "plan-cta",
                onclick: move |_| Section::Signup.scroll_into_view(),
                "{plan.cta}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_featured_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn test_content_tables_are_filled() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(PLANS.len(), 3);
        for plan in PLANS {
            assert!(!plan.features.is_empty());
        }
    }
}
