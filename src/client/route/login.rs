use std::str::FromStr;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::{auth::LoginRequest, user::UserDto},
    storage::TokenStore,
    validation::{form::validate_login, FieldError},
};

use crate::client::{
    api::{use_client, Client},
    component::{
        form::{error_for, Field, SubmitButton},
        page::{ErrorAlert, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Where to go after logging in: the page the session expired on, else the role dashboard.
fn landing_route(client: &Client, user: &UserDto) -> Route {
    client
        .store()
        .take_redirect_after_login()
        .and_then(|path| Route::from_str(&path).ok())
        .or_else(|| {
            user.role
                .as_ref()
                .and_then(|role| Route::from_str(role.dashboard_path()).ok())
        })
        .unwrap_or(Route::Dashboard {})
}

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthContext>();
    let client = use_client();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut failure = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let already_logged_in = auth.read().is_authenticated();
    use_effect(use_reactive!(|already_logged_in| {
        if already_logged_in && !*submitting.peek() {
            nav.replace(Route::Dashboard {});
        }
    }));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        let validation = validate_login(&request);
        let valid = validation.is_empty();
        errors.set(validation);
        if !valid {
            return;
        }

        let client = client.clone();
        submitting.set(true);
        failure.set(None);
        spawn(async move {
            match client.auth().login(&request).await {
                Ok(response) => {
                    let target = landing_route(&client, &response.user);
                    auth.set(AuthState::Authenticated(response.user));
                    nav.replace(target);
                }
                Err(err) => {
                    tracing::error!("Login failed: {}", err);
                    failure.set(Some(err.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    if !auth.read().is_resolved() {
        return rsx!(LoadingPage {});
    }

    rsx! {
        Title { "Login | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center",
            div {
                class: "card bg-base-200 w-full max-w-md",
                form {
                    class: "card-body",
                    onsubmit: on_submit,
                    h1 { class: "card-title text-2xl", "Login" }
                    if let Some(message) = failure() {
                        ErrorAlert { message }
                    }
                    Field {
                        label: "Email",
                        error: error_for(&errors, "email"),
                        input {
                            r#type: "email",
                            class: "input input-bordered w-full",
                            autocomplete: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    Field {
                        label: "Password",
                        error: error_for(&errors, "password"),
                        input {
                            r#type: "password",
                            class: "input input-bordered w-full",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    div {
                        class: "card-actions justify-between items-center mt-4",
                        Link { to: Route::Register {}, class: "link text-sm", "No account yet? Register" }
                        SubmitButton { label: "Login", busy_label: "Logging in...", is_busy: submitting() }
                    }
                }
            }
        }
    }
}
