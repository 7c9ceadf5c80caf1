use crate::features::registration::rules::first_error;
use crate::features::registration::types::*;

/// Validates that every field passes its rule list
pub fn validate_form_complete(form: &FormModel) -> bool {
    Field::ALL.iter().all(|field| first_error(*field, form).is_none())
}

/// Gets the inline message for a field, gated on whether the user has touched
/// it yet. Untouched fields stay silent even when invalid.
pub fn visible_error(state: &RegistrationState, field: Field) -> Option<&'static str> {
    if state.touched.is_touched(field) {
        first_error(field, &state.form)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormModel {
        FormModel {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@doe.com".to_string(),
            password: "Abcde1@x".to_string(),
            confirm_password: "Abcde1@x".to_string(),
        }
    }

    #[test]
    fn test_validate_form_complete() {
        // Should be false with empty fields
        assert!(!validate_form_complete(&FormModel::default()));

        // Should be true with all fields filled and valid
        let mut form = valid_form();
        assert!(validate_form_complete(&form));

        // Should be false with mismatched passwords
        form.confirm_password = "Abcde1@y".to_string();
        assert!(!validate_form_complete(&form));

        // Should be false with a single bad field
        form = valid_form();
        form.email = "jane.doe.com".to_string();
        assert!(!validate_form_complete(&form));
    }

    #[test]
    fn test_visible_error_respects_touched_gating() {
        let mut state = RegistrationState::default();

        // Invalid but untouched: silent
        assert_eq!(visible_error(&state, Field::FirstName), None);

        state.touched.touch(Field::FirstName);
        assert_eq!(visible_error(&state, Field::FirstName), Some("Required"));

        state.form.first_name = "Jane".to_string();
        assert_eq!(visible_error(&state, Field::FirstName), None);
    }

    #[test]
    fn test_failed_submit_reveals_all_errors() {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::Submit);

        assert_eq!(visible_error(&state, Field::FirstName), Some("Required"));
        assert_eq!(visible_error(&state, Field::LastName), Some("Required"));
        assert_eq!(visible_error(&state, Field::Email), Some("Required"));
        assert_eq!(visible_error(&state, Field::Password), Some("Required"));
        // Empty confirm equals empty password, so it alone stays quiet
        assert_eq!(visible_error(&state, Field::ConfirmPassword), None);
    }

    #[test]
    fn test_valid_submit_passes_end_to_end() {
        let mut state = RegistrationState {
            form: valid_form(),
            ..RegistrationState::default()
        };
        state.reduce_in_place(RegistrationAction::Submit);

        assert_eq!(state.last_submitted, Some(valid_form()));
        for field in Field::ALL {
            assert_eq!(visible_error(&state, field), None);
        }
    }
}
