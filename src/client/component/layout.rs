use dioxus::prelude::*;

use crate::client::{
    api::{use_client, RouterSession},
    component::Header,
    model::auth::AuthContext,
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    let client = use_client();
    let auth = use_context::<AuthContext>();
    let router = router();
    let navigator = navigator();

    // The client lives above the router, so it learns how to navigate from here
    use_hook(move || {
        client.set_session_handler(RouterSession {
            router,
            navigator,
            auth,
        })
    });

    rsx!(div {
        Header {}
        Outlet::<Route> {}
    })
}
