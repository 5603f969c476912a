use dioxus::prelude::*;

use super::Modal;

/// Collects the reason the backend requires for withdrawals, rejections and status changes.
#[component]
pub fn ReasonModal(
    show: Signal<bool>,
    title: String,
    confirm_text: String,
    #[props(default = "btn-primary".to_string())] confirm_class: String,
    #[props(default)] required: bool,
    is_processing: bool,
    on_confirm: EventHandler<String>,
) -> Element {
    let mut reason = use_signal(String::new);

    use_effect(move || {
        if show() {
            reason.set(String::new());
        }
    });

    let missing = required && reason().trim().is_empty();

    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if !missing {
                        on_confirm.call(reason().trim().to_string());
                    }
                },
                fieldset {
                    class: "fieldset",
                    legend { class: "fieldset-legend", "Reason" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 3,
                        value: "{reason}",
                        oninput: move |evt| reason.set(evt.value()),
                    }
                    if required {
                        p { class: "label", "A reason is required" }
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_processing,
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn {confirm_class}",
                        disabled: is_processing || missing,
                        if is_processing {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "{confirm_text}"
                    }
                }
            }
        }
    )
}
