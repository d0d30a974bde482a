//! The single page.
//!
//! Hero, features, quickstart, pricing, signup, footer — in scroll order.
//! Section elements carry the anchor ids that `Section` binds to.

use dioxus::prelude::*;

use crate::components::{
    CodeBlock, FeatureCard, NavBar, PricingCard, Section, SignupPanel, FEATURES, PLANS,
};

const INSTALL_SNIPPET: &str = "pip install warm-agent";

const USAGE_SNIPPET: &str = r#"from warm_agent import Warmth

client = Warmth(api_key="wa_sk_...")

reply = client.warm("Request denied. Insufficient permissions.")
print(reply.text)
# "It looks like you don't have access to this yet -
#  let's get that sorted for you."
"#;

/// The whole marketing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        NavBar {}

        main {
            // Hero
            section { id: Section::Home.anchor(), class: "hero",
                h1 { class: "hero-title",
                    "Give your AI a "
                    em { "warmer" }
                    " voice."
                }
                p { class: "hero-tagline",
                    "Warm Agent turns cold, mechanical model output into replies with "
                    "genuine empathy. Put it in front of any LLM and ship conversations "
                    "people actually enjoy."
                }
                div { class: "hero-actions",
                    button {
                        class: "btn-primary",
                        onclick: move |_| Section::Signup.scroll_into_view(),
                        "Get your API key"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| Section::Quickstart.scroll_into_view(),
                        "View quickstart"
                    }
                }
            }

            // Features
            section { id: Section::Features.anchor(), class: "section",
                h2 { class: "section-title", "Why teams pick Warm Agent" }
                p { class: "section-subtitle",
                    "Everything between your model and your users, tuned for how the "
                    "reply feels — not just what it says."
                }
                div { class: "features-grid",
                    for feature in FEATURES {
                        FeatureCard { key: "{feature.title}", feature: *feature }
                    }
                }
            }

            // Quickstart
            section { id: Section::Quickstart.anchor(), class: "section section--tinted",
                div { class: "section-inner",
                    h2 { class: "section-title", "Warm in two minutes" }
                    p { class: "section-subtitle",
                        "Install the SDK, paste your key, wrap your first reply."
                    }
                    div { class: "quickstart-blocks",
                        CodeBlock {
                            title: "terminal".to_string(),
                            code: INSTALL_SNIPPET.to_string(),
                        }
                        CodeBlock {
                            title: "python".to_string(),
                            code: USAGE_SNIPPET.to_string(),
                        }
                    }
                }
            }

            // Pricing
            section { id: Section::Pricing.anchor(), class: "section",
                h2 { class: "section-title", "Simple pricing" }
                p { class: "section-subtitle",
                    "Start free, upgrade when your users notice the difference."
                }
                div { class: "pricing-grid",
                    for plan in PLANS {
                        PricingCard { key: "{plan.name}", plan: *plan }
                    }
                }
            }

            // Signup
            section { id: Section::Signup.anchor(), class: "section section--tinted",
                div { class: "section-inner",
                    h2 { class: "section-title", "Get your API key" }
                    p { class: "section-subtitle",
                        "No credit card. Your first thousand warm replies are on us."
                    }
                    SignupPanel {}
                }
            }
        }

        footer { class: "footer",
            div { class: "footer-brand", "🤖 Warm Agent" }
            p { class: "footer-note",
                "Give your AI a warmer voice · warm-agent.com"
            }
        }
    }
}
