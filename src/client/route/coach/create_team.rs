use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::team::CreateTeamDto,
    validation::{form::validate_team, FieldError},
};

use crate::client::{
    api::use_client,
    component::{
        form::{error_for, Field, SubmitButton},
        page::ErrorAlert,
        Page,
    },
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

#[component]
pub fn CoachCreateTeam() -> Element {
    let client = use_client();
    let coach_id = use_user_id();
    let nav = navigator();

    let mut form = use_signal(CreateTeamDto::default);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut failure = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let team = form();
        let validation = validate_team(&team);
        let valid = validation.is_empty();
        errors.set(validation);
        if !valid {
            return;
        }

        let client = client.clone();
        saving.set(true);
        failure.set(None);
        spawn(async move {
            match client.teams().create(coach_id, &team).await {
                Ok(created) => match created.id {
                    Some(id) => {
                        nav.push(Route::CoachTeamDetail { id });
                    }
                    None => {
                        nav.push(Route::CoachTeams {});
                    }
                },
                Err(err) => {
                    tracing::error!("Failed to create team: {}", err);
                    failure.set(Some(err.user_message()));
                }
            }
            saving.set(false);
        });
    };

    let current = form();

    rsx! {
        Title { "Create a team | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            form {
                class: "card bg-base-200 w-full max-w-2xl",
                onsubmit: on_submit,
                div {
                    class: "card-body",
                    h1 { class: "card-title text-2xl", "Create a team" }
                    if let Some(message) = failure() {
                        ErrorAlert { message }
                    }
                    Field {
                        label: "Name",
                        error: error_for(&errors, "name"),
                        input {
                            class: "input input-bordered w-full",
                            value: "{current.name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    Field {
                        label: "Category",
                        error: error_for(&errors, "category"),
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "U17, Senior...",
                            value: "{current.category.clone().unwrap_or_default()}",
                            oninput: move |evt| form.write().category = format::optional(evt.value()),
                        }
                    }
                    Field {
                        label: "Logo URL",
                        error: error_for(&errors, "logo"),
                        input {
                            class: "input input-bordered w-full",
                            value: "{current.logo.clone().unwrap_or_default()}",
                            oninput: move |evt| form.write().logo = format::optional(evt.value()),
                        }
                    }
                    Field {
                        label: "Description",
                        error: error_for(&errors, "description"),
                        textarea {
                            class: "textarea textarea-bordered w-full",
                            rows: 4,
                            value: "{current.description.clone().unwrap_or_default()}",
                            oninput: move |evt| form.write().description = format::optional(evt.value()),
                        }
                    }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::CoachTeams {}, class: "btn", "Cancel" }
                        SubmitButton { label: "Create", busy_label: "Creating...", is_busy: saving() }
                    }
                }
            }
        }
    }
}
