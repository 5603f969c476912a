use dioxus::prelude::*;
use league_api::{
    model::user::Role,
    storage::{TokenStore, REDIRECT_AFTER_LOGIN_KEY},
};

use crate::client::{
    api::use_client,
    component::page::{ApiErrorPage, ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx!(ProtectedLayout { roles: vec![] })
}

#[component]
pub fn RequiresCoach() -> Element {
    rsx!(ProtectedLayout { roles: vec![Role::Coach] })
}

#[component]
pub fn RequiresOrganizer() -> Element {
    rsx!(ProtectedLayout { roles: vec![Role::Organizer] })
}

/// Renders the nested route only for a logged-in user holding one of `roles`.
///
/// Anonymous visitors are sent to the login page, which brings them back here
/// afterwards.
#[component]
pub fn ProtectedLayout(roles: Vec<Role>) -> Element {
    let auth = use_context::<AuthContext>();
    let client = use_client();
    let router = router();
    let nav = navigator();

    let state = auth.read().clone();
    let logged_out = matches!(state, AuthState::NotLoggedIn);

    use_effect(use_reactive!(|logged_out| {
        if logged_out {
            client
                .store()
                .set(REDIRECT_AFTER_LOGIN_KEY, &router.full_route_string());
            nav.replace(Route::Login {});
        }
    }));

    match &state {
        AuthState::Initializing | AuthState::NotLoggedIn => rsx!(LoadingPage {}),
        AuthState::Error(err) => rsx!(ApiErrorPage { error: err.clone() }),
        AuthState::Authenticated(_) if state.has_any_role(&roles) => rsx!(Outlet::<Route> {}),
        AuthState::Authenticated(_) => rsx!(ErrorPage {
            status: 403,
            message: "You do not have permission to view this page".to_string()
        }),
    }
}
