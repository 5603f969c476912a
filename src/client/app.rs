use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::ClientConfig;

use crate::client::{
    api::{self, Client},
    component::page::ErrorPage,
    constant::SITE_NAME,
    model::{
        auth::{AuthContext, AuthState},
        notification::{self, NotificationContext},
    },
    router::Route,
};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(api::load_config);
    let connection = use_hook(|| {
        api::connect(&config)
            .inspect_err(|err| tracing::error!("Failed to create API client: {}", err))
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: "Competitions, teams, matches and match sheets of the league"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        match connection {
            Ok(client) => rsx! {
                Session { client, config }
            },
            Err(err) => rsx! {
                ErrorPage { status: 500, message: err.user_message() }
            },
        }
    }
}

/// Provides the client, the auth state and the notification bell, then routes.
#[component]
fn Session(client: Client, config: ClientConfig) -> Element {
    use_context_provider(|| client.clone());
    let auth = use_context_provider(AuthContext::new);
    let notifications = use_context_provider(NotificationContext::new);

    // Restore the session from stored tokens on first load
    {
        let client = client.clone();
        use_future(move || {
            let client = client.clone();
            async move {
                if !client.auth().is_authenticated() {
                    auth.set(AuthState::NotLoggedIn);
                    return;
                }
                let result = client.auth().current_user().await;
                if let Err(err) = &result {
                    tracing::error!("Failed to restore session: {}", err);
                }
                auth.set(AuthState::from(result));
            }
        });
    }

    // Fetch notifications as soon as a user is logged in, then poll
    let user_id = use_memo(move || auth.read().user_id());
    {
        let client = client.clone();
        use_effect(move || {
            if user_id().is_none() {
                return;
            }
            let client = client.clone();
            spawn(async move {
                notifications.refresh(&client).await;
            });
        });
    }
    {
        let client = client.clone();
        let interval = config.notification_poll_interval;
        use_future(move || {
            let client = client.clone();
            async move {
                loop {
                    notification::sleep(interval).await;
                    if user_id.peek().is_some() {
                        notifications.refresh(&client).await;
                    }
                }
            }
        });
    }

    rsx! {
        Router::<Route> {}
    }
}
