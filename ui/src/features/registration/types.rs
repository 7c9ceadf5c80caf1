// Core types for the registration form - no dioxus imports needed here
use serde::{Deserialize, Serialize};

use crate::features::registration::form_validation::validate_form_complete;

/// The five entered values. Created empty at mount, mutated field-by-field as
/// the user types, superseded wholesale on each successful submit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormModel {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormModel {
    pub fn value_of(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name:",
            Field::LastName => "Last name:",
            Field::Email => "Email:",
            Field::Password => "Password:",
            Field::ConfirmPassword => "Confirm password:",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::FirstName => "Firstname",
            Field::LastName => "Lastname",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }
}

/// Which fields the user has interacted with. Error messages only render for
/// touched fields; a failed submit touches everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchedFields {
    pub first_name: bool,
    pub last_name: bool,
    pub email: bool,
    pub password: bool,
    pub confirm_password: bool,
}

impl TouchedFields {
    pub fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }

    pub fn touch(&mut self, field: Field) {
        match field {
            Field::FirstName => self.first_name = true,
            Field::LastName => self.last_name = true,
            Field::Email => self.email = true,
            Field::Password => self.password = true,
            Field::ConfirmPassword => self.confirm_password = true,
        }
    }

    pub fn touch_all(&mut self) {
        for field in Field::ALL {
            self.touch(field);
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    // Field edits
    SetFirstName(String),
    SetLastName(String),
    SetEmail(String),
    SetPassword(String),
    SetConfirmPassword(String),

    // Appearance toggles
    TogglePasswordVisibility,
    ToggleConfirmVisibility,
    ToggleTheme,

    // Submit attempt
    Submit,
}

#[derive(Clone, Default)]
pub struct RegistrationState {
    pub form: FormModel,
    pub touched: TouchedFields,
    pub password_visible: bool,
    pub confirm_visible: bool,
    pub dark_theme: bool,
    pub last_submitted: Option<FormModel>,
}

impl RegistrationState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal
    /// reactivity).
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            // Field edits mark the field touched so its inline error can show
            RegistrationAction::SetFirstName(value) => {
                self.form.first_name = value;
                self.touched.touch(Field::FirstName);
            }
            RegistrationAction::SetLastName(value) => {
                self.form.last_name = value;
                self.touched.touch(Field::LastName);
            }
            RegistrationAction::SetEmail(value) => {
                self.form.email = value;
                self.touched.touch(Field::Email);
            }
            RegistrationAction::SetPassword(value) => {
                self.form.password = value;
                self.touched.touch(Field::Password);
            }
            RegistrationAction::SetConfirmPassword(value) => {
                self.form.confirm_password = value;
                self.touched.touch(Field::ConfirmPassword);
            }

            // Appearance toggles never touch the form values
            RegistrationAction::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible;
            }
            RegistrationAction::ToggleConfirmVisibility => {
                self.confirm_visible = !self.confirm_visible;
            }
            RegistrationAction::ToggleTheme => {
                self.dark_theme = !self.dark_theme;
            }

            RegistrationAction::Submit => {
                if validate_form_complete(&self.form) {
                    self.last_submitted = Some(self.form.clone());
                    if let Ok(json) = serde_json::to_string(&self.form) {
                        crate::console_debug!("[FORM] Submitted values: {}", json);
                    }
                } else {
                    // Surface every first-failing message, including fields
                    // the user never visited
                    self.touched.touch_all();
                    crate::console_info!("[FORM] Submit rejected by field validation");
                }
            }
        }
    }

    /// Helper methods for common state queries
    pub fn has_submitted(&self) -> bool {
        self.last_submitted.is_some()
    }

    pub fn is_visible(&self, field: Field) -> bool {
        match field {
            Field::Password => self.password_visible,
            Field::ConfirmPassword => self.confirm_visible,
            _ => true,
        }
    }
}

// Type alias for dispatch function
pub type DispatchFn = Box<dyn Fn(RegistrationAction) + 'static>;

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> RegistrationState {
        let mut state = RegistrationState::default();
        state.form.first_name = "Jane".to_string();
        state.form.last_name = "Doe".to_string();
        state.form.email = "jane@doe.com".to_string();
        state.form.password = "Abcde1@x".to_string();
        state.form.confirm_password = "Abcde1@x".to_string();
        state
    }

    #[test]
    fn test_field_edits_mark_touched() {
        let mut state = RegistrationState::default();
        assert!(!state.touched.is_touched(Field::Email));

        state.reduce_in_place(RegistrationAction::SetEmail("jane".to_string()));
        assert_eq!(state.form.email, "jane");
        assert!(state.touched.is_touched(Field::Email));
        assert!(!state.touched.is_touched(Field::Password));
    }

    #[test]
    fn test_visibility_toggles_leave_values_alone() {
        let mut state = filled_state();
        let before = state.form.clone();

        state.reduce_in_place(RegistrationAction::TogglePasswordVisibility);
        assert!(state.password_visible);
        assert!(!state.confirm_visible);
        assert_eq!(state.form, before);

        state.reduce_in_place(RegistrationAction::ToggleConfirmVisibility);
        assert!(state.confirm_visible);
        assert_eq!(state.form, before);

        state.reduce_in_place(RegistrationAction::TogglePasswordVisibility);
        assert!(!state.password_visible);
        assert_eq!(state.form, before);
    }

    #[test]
    fn test_theme_toggle_is_presentation_only() {
        let mut state = filled_state();
        let before = state.form.clone();

        state.reduce_in_place(RegistrationAction::ToggleTheme);
        assert!(state.dark_theme);
        assert_eq!(state.form, before);
        assert!(state.last_submitted.is_none());

        state.reduce_in_place(RegistrationAction::ToggleTheme);
        assert!(!state.dark_theme);
    }

    #[test]
    fn test_submit_stores_exact_values() {
        let mut state = filled_state();
        state.reduce_in_place(RegistrationAction::Submit);

        let submitted = state.last_submitted.as_ref().unwrap();
        assert_eq!(submitted.first_name, "Jane");
        assert_eq!(submitted.last_name, "Doe");
        assert_eq!(submitted.email, "jane@doe.com");
        assert_eq!(submitted.password, "Abcde1@x");
        assert_eq!(submitted.confirm_password, "Abcde1@x");
    }

    #[test]
    fn test_rejected_submit_touches_everything() {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::Submit);

        assert!(state.last_submitted.is_none());
        for field in Field::ALL {
            assert!(state.touched.is_touched(field));
        }
    }

    #[test]
    fn test_submit_supersedes_previous_values() {
        let mut state = filled_state();
        state.reduce_in_place(RegistrationAction::Submit);

        state.reduce_in_place(RegistrationAction::SetFirstName("Janet".to_string()));
        state.reduce_in_place(RegistrationAction::Submit);

        assert_eq!(state.last_submitted.as_ref().unwrap().first_name, "Janet");
    }

    #[test]
    fn test_submitted_model_serializes_with_original_keys() {
        let state = filled_state();
        let json = serde_json::to_string(&state.form).unwrap();
        assert!(json.contains("\"firstName\":\"Jane\""));
        assert!(json.contains("\"confirmPassword\":\"Abcde1@x\""));
    }
}
