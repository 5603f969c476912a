pub mod confirmation_modal;
pub mod reason_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;
pub use reason_modal::ReasonModal;

#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    #[props(default)] prevent_close: bool,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or("max-w-lg");

    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && !prevent_close {
                    show.set(false);
                }
            },
            div {
                class: "modal-box border border-base-300 w-11/12 {class}",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 { class: "font-bold text-lg", "{title}" }
                    if !prevent_close {
                        button {
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: move |_| show.set(false),
                            "✕"
                        }
                    }
                }
                div { {children} }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !prevent_close {
                        show.set(false);
                    }
                },
            }
        }
    )
}
