use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::{auth::RegisterRequest, player::PlayerPosition, user::Role},
    validation::{form::validate_registration, FieldError},
};

use crate::client::{
    api::use_client,
    component::{
        form::{error_for, Field, SubmitButton},
        page::{ErrorAlert, SuccessAlert},
        Page,
    },
    constant::SITE_NAME,
    format,
    router::Route,
};

/// Roles a visitor may sign up for.
const SELF_SERVICE_ROLES: [Role; 3] = [Role::Player, Role::Coach, Role::Organizer];

#[component]
pub fn Register() -> Element {
    let client = use_client();
    let nav = navigator();

    let mut form = use_signal(|| RegisterRequest {
        role: Some(Role::Player),
        ..Default::default()
    });
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut failure = use_signal(|| None::<String>);
    let mut registered = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = form();
        let validation = validate_registration(&request, &confirm_password());
        let valid = validation.is_empty();
        errors.set(validation);
        if !valid {
            return;
        }

        let client = client.clone();
        submitting.set(true);
        failure.set(None);
        spawn(async move {
            match client.auth().register(&request).await {
                Ok(_) => {
                    registered.set(true);
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("Registration failed: {}", err);
                    failure.set(Some(err.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    let role = form.read().role.clone();

    rsx! {
        Title { "Register | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "card bg-base-200 w-full max-w-2xl",
                form {
                    class: "card-body",
                    onsubmit: on_submit,
                    h1 { class: "card-title text-2xl", "Create an account" }
                    if let Some(message) = failure() {
                        ErrorAlert { message }
                    }
                    if registered() {
                        SuccessAlert { message: "Account created, you can now log in" }
                    }
                    Field {
                        label: "Account type",
                        error: error_for(&errors, "role"),
                        select {
                            class: "select select-bordered w-full",
                            onchange: move |evt| form.write().role = Some(Role::from_wire(&evt.value())),
                            for option in SELF_SERVICE_ROLES {
                                option {
                                    value: "{option.as_str()}",
                                    selected: role.as_ref() == Some(&option),
                                    "{option}"
                                }
                            }
                        }
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                        Field {
                            label: "First name",
                            error: error_for(&errors, "firstName"),
                            input {
                                class: "input input-bordered w-full",
                                value: "{form.read().first_name}",
                                oninput: move |evt| form.write().first_name = evt.value(),
                            }
                        }
                        Field {
                            label: "Last name",
                            error: error_for(&errors, "lastName"),
                            input {
                                class: "input input-bordered w-full",
                                value: "{form.read().last_name}",
                                oninput: move |evt| form.write().last_name = evt.value(),
                            }
                        }
                        Field {
                            label: "User name",
                            error: error_for(&errors, "userName"),
                            input {
                                class: "input input-bordered w-full",
                                value: "{form.read().user_name}",
                                oninput: move |evt| form.write().user_name = evt.value(),
                            }
                        }
                        Field {
                            label: "Email",
                            error: error_for(&errors, "email"),
                            input {
                                r#type: "email",
                                class: "input input-bordered w-full",
                                value: "{form.read().email}",
                                oninput: move |evt| form.write().email = evt.value(),
                            }
                        }
                        Field {
                            label: "Password",
                            error: error_for(&errors, "password"),
                            input {
                                r#type: "password",
                                class: "input input-bordered w-full",
                                autocomplete: "new-password",
                                value: "{form.read().password}",
                                oninput: move |evt| form.write().password = evt.value(),
                            }
                        }
                        Field {
                            label: "Confirm password",
                            error: error_for(&errors, "confirmPassword"),
                            input {
                                r#type: "password",
                                class: "input input-bordered w-full",
                                autocomplete: "new-password",
                                value: "{confirm_password}",
                                oninput: move |evt| confirm_password.set(evt.value()),
                            }
                        }
                        Field {
                            label: "Phone (optional)",
                            error: error_for(&errors, "phone"),
                            input {
                                r#type: "tel",
                                class: "input input-bordered w-full",
                                value: "{form.read().phone.clone().unwrap_or_default()}",
                                oninput: move |evt| form.write().phone = format::optional(evt.value()),
                            }
                        }
                        match role {
                            Some(Role::Player) => rsx! {
                                Field {
                                    label: "Position",
                                    error: error_for(&errors, "position"),
                                    select {
                                        class: "select select-bordered w-full",
                                        onchange: move |evt| {
                                            let value = evt.value();
                                            form.write().position = (!value.is_empty()).then(|| PlayerPosition::from_wire(&value));
                                        },
                                        option { value: "", "Choose a position" }
                                        for position in PlayerPosition::variants() {
                                            option { value: "{position.as_str()}", "{position}" }
                                        }
                                    }
                                }
                            },
                            Some(Role::Coach) => rsx! {
                                Field {
                                    label: "License number",
                                    input {
                                        class: "input input-bordered w-full",
                                        oninput: move |evt| form.write().license_number = format::optional(evt.value()),
                                    }
                                }
                                Field {
                                    label: "Years of experience",
                                    error: error_for(&errors, "yearsOfExperience"),
                                    input {
                                        r#type: "number",
                                        class: "input input-bordered w-full",
                                        oninput: move |evt| form.write().years_of_experience = evt.value().parse().ok(),
                                    }
                                }
                            },
                            Some(Role::Organizer) => rsx! {
                                Field {
                                    label: "Organization",
                                    error: error_for(&errors, "organization"),
                                    input {
                                        class: "input input-bordered w-full",
                                        oninput: move |evt| form.write().organization = format::optional(evt.value()),
                                    }
                                }
                            },
                            _ => rsx! {},
                        }
                    }
                    div {
                        class: "card-actions justify-between items-center mt-4",
                        Link { to: Route::Login {}, class: "link text-sm", "Already registered? Login" }
                        SubmitButton { label: "Register", busy_label: "Creating account...", is_busy: submitting() }
                    }
                }
            }
        }
    }
}
