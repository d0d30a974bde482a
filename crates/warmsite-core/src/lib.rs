//! Warm Agent Site Core Library
//!
//! Headless logic behind the Warm Agent marketing page: signup form
//! validation, mock API-key fabrication, the toast model, and the legacy
//! clipboard fallback script. Everything here is plain Rust with no UI
//! dependency, so the whole surface is unit-testable.
//!
//! The desktop binary (`warmsite`) renders the page and wires these pieces
//! to Dioxus components.
//!
//! ## Quick Start
//!
//! ```ignore
//! use warmsite_core::{SignupForm, signup};
//!
//! #[tokio::main]
//! async fn main() {
//!     let form = SignupForm {
//!         email: "ada@example.com".into(),
//!         password: "correcthorse".into(),
//!         accepted_terms: true,
//!     };
//!
//!     if form.validate().is_ok() {
//!         let key = signup::issue_api_key(signup::KEY_ISSUE_DELAY).await;
//!         println!("issued {key}");
//!     }
//! }
//! ```

pub mod clipboard;
pub mod error;
pub mod signup;
pub mod toast;
pub mod token;

// Re-exports
pub use error::SignupError;
pub use signup::{SignupForm, KEY_ISSUE_DELAY, MIN_PASSWORD_LEN};
pub use toast::{Toast, ToastLevel, TOAST_DURATION};
pub use token::ApiKey;
