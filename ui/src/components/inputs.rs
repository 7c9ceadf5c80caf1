//! Input components for the registration form

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }

    /// Display mode for a secret field: plain text while revealed, masked
    /// otherwise. Only the rendered `type` changes, never the stored value.
    pub fn for_secret(visible: bool) -> Self {
        if visible {
            InputType::Text
        } else {
            InputType::Password
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub label: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        label {
            class: "input-label",
            "{props.label}"
        }
        input {
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorMessageProps {
    #[props(!optional)]
    pub message: Option<String>,
}

/// Renders the first failing validation message beneath a field, or nothing.
#[component]
pub fn FieldErrorMessage(props: FieldErrorMessageProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "error-message",
                "{message}"
            }
        },
        None => rsx! { div {} },
    }
}
