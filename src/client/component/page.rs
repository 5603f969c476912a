use dioxus::prelude::*;
use league_api::ApiError;

use crate::client::router::Route;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u16, message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col gap-4 items-center justify-center",
            p { class: "text-6xl font-bold opacity-50", "{status}" }
            p { class: "text-lg", "{message}" }
            Link {
                to: Route::Home {},
                class: "btn btn-outline",
                "Back to home"
            }
        }
    )
}

/// Full page for a failed fetch.
#[component]
pub fn ApiErrorPage(error: ApiError) -> Element {
    rsx!(ErrorPage {
        status: error.status().unwrap_or(500),
        message: error.user_message()
    })
}

/// Inline `alert-error` banner.
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx!(
        div {
            role: "alert",
            class: "alert alert-error",
            span { "{message}" }
        }
    )
}

#[component]
pub fn SuccessAlert(message: String) -> Element {
    rsx!(
        div {
            role: "alert",
            class: "alert alert-success",
            span { "{message}" }
        }
    )
}

/// Card shown in place of an empty table.
#[component]
pub fn EmptyState(title: String, hint: Option<String>) -> Element {
    rsx!(
        div {
            class: "flex items-center justify-center min-h-[200px]",
            div {
                class: "text-center",
                p { class: "text-lg opacity-50", "{title}" }
                if let Some(hint) = hint {
                    p { class: "text-sm opacity-30 mt-2", "{hint}" }
                }
            }
        }
    )
}

/// Dashboard tile linking to a section.
#[component]
pub fn ShortcutCard(title: String, text: String, to: Route) -> Element {
    rsx!(
        Link {
            to,
            class: "card bg-base-200 hover:bg-base-300 transition-colors",
            div {
                class: "card-body",
                h2 { class: "card-title", "{title}" }
                p { class: "opacity-70", "{text}" }
            }
        }
    )
}
