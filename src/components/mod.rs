//! UI components for the Warm Agent site.

mod cards;
mod code_block;
mod navbar;
mod signup;
mod toast;

pub use cards::{Feature, FeatureCard, Plan, PricingCard, FEATURES, PLANS};
pub use code_block::CodeBlock;
pub use navbar::{NavBar, Section};
pub use signup::SignupPanel;
pub use toast::ToastHost;
