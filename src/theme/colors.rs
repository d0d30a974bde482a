//! Color constants for the Warm Agent palette.
//!
//! Warm coral against calm teal; the same values the CSS custom properties
//! use, exposed to Rust for the odd inline style.

#![allow(dead_code)]

// === BRAND ===
pub const CORAL: &str = "#FF6B6B";
pub const TEAL: &str = "#4ECDC4";

// === FEEDBACK ===
pub const SUCCESS: &str = "#06D6A0";
pub const ERROR: &str = "#EF476F";

// === TEXT ===
pub const INK: &str = "#2B2B38";
pub const INK_SOFT: &str = "#5D5D6B";
pub const INK_FAINT: &str = "#9a9aa8";

// === SURFACES ===
pub const PAPER: &str = "#ffffff";
pub const PAPER_WARM: &str = "#fff7f4";
pub const PAPER_COOL: &str = "#f4fbfa";
