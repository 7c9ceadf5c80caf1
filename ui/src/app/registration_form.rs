use dioxus::prelude::*;

use crate::components::controls::{ThemeToggle, VisibilityToggle};
use crate::components::display::SubmittedValues;
use crate::components::inputs::{FieldErrorMessage, InputType, ValidatedInput};
use crate::registration::{visible_error, Field, RegistrationAction, RegistrationState};
use crate::utils::appearance::{header_class, input_class, page_class};

/// The registration form view: five validated fields, visibility toggles for
/// the two secret fields, a theme bulb, and the submitted-values echo.
#[component]
pub fn RegistrationForm() -> Element {
    // Consolidated state management
    let mut state = use_signal(RegistrationState::default);

    // Dispatch function for actions - using in-place reduction to preserve
    // Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let dark = state().dark_theme;

    rsx! {
        div {
            class: "{page_class(dark)}",

            div {
                class: "title-container",
                h2 {
                    class: "{header_class(dark)}",
                    "Registration Form"
                }
                ThemeToggle {
                    dark: dark,
                    on_toggle: move |_| dispatch.call(RegistrationAction::ToggleTheme)
                }
            }

            div {
                class: "form-container",

                div {
                    class: "input-section",
                    ValidatedInput {
                        value: state().form.first_name,
                        label: Field::FirstName.label().to_string(),
                        placeholder: Field::FirstName.placeholder().to_string(),
                        input_type: InputType::Text,
                        input_class: input_class(dark).to_string(),
                        on_change: move |data: String| {
                            dispatch.call(RegistrationAction::SetFirstName(data));
                        }
                    }
                    FieldErrorMessage {
                        message: visible_error(&state(), Field::FirstName).map(str::to_string)
                    }
                }

                div {
                    class: "input-section",
                    ValidatedInput {
                        value: state().form.last_name,
                        label: Field::LastName.label().to_string(),
                        placeholder: Field::LastName.placeholder().to_string(),
                        input_type: InputType::Text,
                        input_class: input_class(dark).to_string(),
                        on_change: move |data: String| {
                            dispatch.call(RegistrationAction::SetLastName(data));
                        }
                    }
                    FieldErrorMessage {
                        message: visible_error(&state(), Field::LastName).map(str::to_string)
                    }
                }

                div {
                    class: "input-section",
                    ValidatedInput {
                        value: state().form.email,
                        label: Field::Email.label().to_string(),
                        placeholder: Field::Email.placeholder().to_string(),
                        input_type: InputType::Email,
                        input_class: input_class(dark).to_string(),
                        on_change: move |data: String| {
                            dispatch.call(RegistrationAction::SetEmail(data));
                        }
                    }
                    FieldErrorMessage {
                        message: visible_error(&state(), Field::Email).map(str::to_string)
                    }
                }

                div {
                    class: "input-section",
                    ValidatedInput {
                        value: state().form.password,
                        label: Field::Password.label().to_string(),
                        placeholder: Field::Password.placeholder().to_string(),
                        input_type: InputType::for_secret(state().password_visible),
                        input_class: input_class(dark).to_string(),
                        on_change: move |data: String| {
                            dispatch.call(RegistrationAction::SetPassword(data));
                        }
                    }
                    VisibilityToggle {
                        visible: state().password_visible,
                        dark: dark,
                        on_toggle: move |_| {
                            dispatch.call(RegistrationAction::TogglePasswordVisibility);
                        }
                    }
                    FieldErrorMessage {
                        message: visible_error(&state(), Field::Password).map(str::to_string)
                    }
                }

                div {
                    class: "input-section",
                    ValidatedInput {
                        value: state().form.confirm_password,
                        label: Field::ConfirmPassword.label().to_string(),
                        placeholder: Field::ConfirmPassword.placeholder().to_string(),
                        input_type: InputType::for_secret(state().confirm_visible),
                        input_class: input_class(dark).to_string(),
                        on_change: move |data: String| {
                            dispatch.call(RegistrationAction::SetConfirmPassword(data));
                        }
                    }
                    VisibilityToggle {
                        visible: state().confirm_visible,
                        dark: dark,
                        on_toggle: move |_| {
                            dispatch.call(RegistrationAction::ToggleConfirmVisibility);
                        }
                    }
                    FieldErrorMessage {
                        message: visible_error(&state(), Field::ConfirmPassword).map(str::to_string)
                    }
                }

                div {
                    class: "button-section",
                    button {
                        class: "submit-button",
                        onclick: move |_| {
                            dispatch.call(RegistrationAction::Submit);
                        },
                        "Submit Form"
                    }
                }
            }

            SubmittedValues {
                submitted: state().last_submitted
            }
        }
    }
}
