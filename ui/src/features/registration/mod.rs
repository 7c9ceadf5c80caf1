pub mod form_validation;
pub mod rules;
pub mod types;

pub use form_validation::*;
pub use rules::{first_error, Rule, RULE_SET};
pub use types::*;
