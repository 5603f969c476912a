use dioxus::prelude::*;
use league_api::listing::Pagination;

use super::Modal;
use crate::client::constant::PER_PAGE_OPTIONS;

/// Page size selector, summary line and page buttons over a client-side list.
#[component]
pub fn PaginationControls(mut pagination: Signal<Pagination>) -> Element {
    let mut show_page_jump = use_signal(|| false);
    let mut jump_page_input = use_signal(String::new);

    let state = pagination();
    let total_pages = state.total_pages();

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm w-20",
                    value: "{state.per_page()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            pagination.write().change_items_per_page(value);
                        }
                    },
                    for option in PER_PAGE_OPTIONS {
                        option {
                            value: "{option}",
                            selected: option == state.per_page(),
                            "{option}"
                        }
                    }
                }
                span { "entries" }
            }

            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "{state.summary()}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !state.has_previous(),
                        onclick: move |_| pagination.write().first(),
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !state.has_previous(),
                        onclick: move |_| pagination.write().previous(),
                        "‹"
                    }
                    for button in state.page_window() {
                        button {
                            key: "{button.page}",
                            class: if button.is_current { "join-item btn btn-xs sm:btn-sm btn-active" } else { "join-item btn btn-xs sm:btn-sm" },
                            onclick: move |_| pagination.write().go_to(button.page),
                            "{button.page}"
                        }
                    }
                    if total_pages > 5 {
                        button {
                            class: "join-item btn btn-xs sm:btn-sm",
                            onclick: move |_| {
                                jump_page_input.set(pagination.peek().page().to_string());
                                show_page_jump.set(true);
                            },
                            "…"
                        }
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !state.has_next(),
                        onclick: move |_| pagination.write().next(),
                        "›"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: !state.has_next(),
                        onclick: move |_| pagination.write().last(),
                        "»"
                    }
                }
            }
        }

        Modal {
            show: show_page_jump,
            title: "Jump to Page".to_string(),
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Ok(target) = jump_page_input().parse::<u64>() {
                        if (1..=total_pages).contains(&target) {
                            pagination.write().go_to(target);
                            show_page_jump.set(false);
                        }
                    }
                },
                fieldset {
                    class: "fieldset w-full",
                    legend { class: "fieldset-legend", "Page number (1-{total_pages})" }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        min: "1",
                        max: "{total_pages}",
                        value: "{jump_page_input}",
                        oninput: move |evt| jump_page_input.set(evt.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_page_jump.set(false),
                        "Cancel"
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Jump" }
                }
            }
        }
    )
}

/// Keeps the pagination total in step with the list it pages over.
pub fn use_paged<T: Clone + PartialEq + 'static>(
    items: Memo<Vec<T>>,
    pagination: Signal<Pagination>,
) -> Memo<Vec<T>> {
    let mut pagination = pagination;
    use_effect(move || {
        let total = items.read().len() as u64;
        if pagination.peek().total() != total {
            pagination.write().set_total(total);
        }
    });

    use_memo(move || pagination.read().paginate(&items.read()).to_vec())
}
