use dioxus::prelude::*;

use super::Modal;

/// Asks before a destructive action such as deleting a team or removing a player.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: String,
    confirm_text: String,
    #[props(default = "btn-error".to_string())] confirm_class: String,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            p { class: "py-4", "{message}" }
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
                    r#type: "button",
                    class: "btn {confirm_class}",
                    disabled: is_processing,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{confirm_text}"
                }
            }
        }
    )
}
