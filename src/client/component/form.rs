use dioxus::prelude::*;
use league_api::validation::{form::field_message, FieldError};

/// Labelled input with its validation message underneath.
#[component]
pub fn Field(label: String, error: Option<String>, children: Element) -> Element {
    rsx! {
        fieldset {
            class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            {children}
            if let Some(error) = error {
                p { class: "label text-error", "{error}" }
            }
        }
    }
}

/// Message for `field` among the current form errors.
pub fn error_for(errors: &Signal<Vec<FieldError>>, field: &str) -> Option<String> {
    field_message(&errors.read(), field).map(str::to_string)
}

/// Submit button that shows a spinner while the request is in flight.
#[component]
pub fn SubmitButton(label: String, busy_label: String, is_busy: bool) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: "btn btn-primary",
            disabled: is_busy,
            if is_busy {
                span { class: "loading loading-spinner loading-sm mr-2" }
                "{busy_label}"
            } else {
                "{label}"
            }
        }
    }
}
