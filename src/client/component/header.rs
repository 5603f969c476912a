use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBars, FaFutbol},
    Icon,
};
use dioxus_logger::tracing;

use crate::client::{
    api::use_client,
    component::notification_bell::NotificationBell,
    constant::SITE_NAME,
    model::{
        auth::{AuthContext, AuthState},
        notification::NotificationContext,
    },
    router::Route,
};

#[component]
pub fn Header() -> Element {
    let auth = use_context::<AuthContext>();
    let notifications = use_context::<NotificationContext>();
    let client = use_client();
    let nav = navigator();

    let state = auth.read().clone();
    let logout = move |_| {
        let client = client.clone();
        spawn(async move {
            if let Err(err) = client.auth().logout().await {
                tracing::error!("Failed to log out: {}", err);
            }
            auth.set(AuthState::NotLoggedIn);
            notifications.clear();
            nav.push(Route::Home {});
        });
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon { width: 32, height: 32, icon: FaFutbol }
                    p { class: "md:text-xl text-wrap", {SITE_NAME} }
                }
            }
            nav {
                class: "hidden lg:flex gap-1",
                NavLinks {}
            }
            div {
                class: "dropdown lg:hidden",
                div {
                    tabindex: 0,
                    role: "button",
                    class: "btn btn-ghost",
                    Icon { width: 20, height: 20, icon: FaBars }
                }
                ul {
                    tabindex: 0,
                    class: "menu dropdown-content bg-base-100 rounded-box z-30 w-52 p-2 shadow",
                    NavLinks {}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            match state {
                AuthState::Authenticated(user) => rsx! {
                    NotificationBell {}
                    div {
                        class: "dropdown dropdown-end",
                        div {
                            tabindex: 0,
                            role: "button",
                            class: "btn btn-outline",
                            "{user.display_name()}"
                            if let Some(role) = &user.role {
                                span { class: "badge badge-sm {role.badge_color()}", "{role}" }
                            }
                        }
                        ul {
                            tabindex: 0,
                            class: "menu dropdown-content bg-base-100 rounded-box z-30 w-52 p-2 shadow",
                            li { Link { to: Route::Dashboard {}, "Dashboard" } }
                            li { Link { to: Route::Profile {}, "Profile" } }
                            li { Link { to: Route::Messages {}, "Messages" } }
                            li { button { onclick: logout, "Logout" } }
                        }
                    }
                },
                AuthState::Initializing => rsx! {},
                AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                    Link { to: Route::Login {}, class: "btn btn-outline", "Login" }
                    Link { to: Route::Register {}, class: "btn btn-primary", "Register" }
                },
            }
        }
    })
}

#[component]
fn NavLinks() -> Element {
    rsx! {
        li { class: "list-none", Link { to: Route::Competitions {}, class: "btn btn-ghost btn-sm", "Competitions" } }
        li { class: "list-none", Link { to: Route::Teams {}, class: "btn btn-ghost btn-sm", "Teams" } }
        li { class: "list-none", Link { to: Route::Players {}, class: "btn btn-ghost btn-sm", "Players" } }
        li { class: "list-none", Link { to: Route::Matches {}, class: "btn btn-ghost btn-sm", "Matches" } }
        li { class: "list-none", Link { to: Route::Media {}, class: "btn btn-ghost btn-sm", "Media" } }
    }
}
