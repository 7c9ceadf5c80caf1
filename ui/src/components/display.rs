//! Display components

use dioxus::prelude::*;

use crate::features::registration::FormModel;

#[derive(Props, PartialEq, Clone)]
pub struct SubmittedValuesProps {
    #[props(!optional)]
    pub submitted: Option<FormModel>,
}

/// Echoes the last successfully submitted values as JSON text. Hidden until
/// the first successful submit.
#[component]
pub fn SubmittedValues(props: SubmittedValuesProps) -> Element {
    match props.submitted.as_ref().map(serde_json::to_string) {
        Some(Ok(json)) => rsx! {
            div {
                class: "submitted-values",
                "{json}"
            }
        },
        _ => rsx! { div {} },
    }
}
