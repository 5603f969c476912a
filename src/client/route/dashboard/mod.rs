pub mod message;
mod notifications;
mod profile;

pub use notifications::Notifications;
pub use profile::Profile;

use std::str::FromStr;

use dioxus::prelude::*;

use crate::client::{component::page::LoadingPage, model::auth::AuthContext, router::Route};

/// Sends the user on to their role's dashboard.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        let target = auth
            .read()
            .role()
            .and_then(|role| Route::from_str(role.dashboard_path()).ok())
            .unwrap_or(Route::Profile {});
        nav.replace(target);
    });

    rsx!(LoadingPage {})
}
