//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **appearance**: class-name and glyph derivation for theme and visibility state

pub mod appearance;
pub mod console_macros;

pub use appearance::*;
