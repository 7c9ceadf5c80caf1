//! User Interface Components
//!
//! Reusable Dioxus components for the registration form:
//!
//! - **inputs**: validated input fields and inline error messages
//! - **controls**: visibility and theme toggle buttons
//! - **display**: submitted-values echo

pub mod controls;
pub mod display;
pub mod inputs;
