//! This crate contains all shared UI components for the registration form.

pub mod app;
pub use app::RegistrationForm;

pub mod components;
pub mod features;
pub mod utils;

// Shorthand path used throughout the components
pub use features::registration;
