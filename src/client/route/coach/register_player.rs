use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::player::{PlayerPosition, PlayerStatus, RegisterPlayerDto},
    validation::{form::validate_player_registration, FieldError},
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

use super::{use_coach_teams, TeamSelect};

#[component]
pub fn CoachRegisterPlayer() -> Element {
    let client = use_client();
    let coach_id = use_user_id();
    let nav = navigator();
    let teams = use_coach_teams();

    let team_id = use_signal(|| None::<i64>);
    let mut form = use_signal(|| RegisterPlayerDto {
        status: Some(PlayerStatus::Starter),
        ..Default::default()
    });
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut failure = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let player = form();
        let mut validation = validate_player_registration(&player);
        if team_id().is_none() {
            validation.insert(0, FieldError::new("teamId", "Please choose a team"));
        }
        let valid = validation.is_empty();
        errors.set(validation);
        let (true, Some(team)) = (valid, team_id()) else {
            return;
        };

        let client = client.clone();
        saving.set(true);
        failure.set(None);
        spawn(async move {
            match client.players().register(coach_id, team, &player).await {
                Ok(_) => {
                    nav.push(Route::CoachTeamDetail { id: team });
                }
                Err(err) => {
                    tracing::error!("Failed to register player: {}", err);
                    failure.set(Some(err.user_message()));
                }
            }
            saving.set(false);
        });
    };

    let team_options = match &*teams.read_unchecked() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let current = form();

    rsx! {
        Title { "Register a player | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            form {
                class: "card bg-base-200 w-full max-w-3xl",
                onsubmit: on_submit,
                div {
                    class: "card-body",
                    h1 { class: "card-title text-2xl", "Register a player" }
                    if let Some(message) = failure() {
                        ErrorAlert { message }
                    }
                    TeamSelect {
                        label: "Team",
                        teams: team_options,
                        selected: team_id,
                        error: error_for(&errors, "teamId"),
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                        Field {
                            label: "First name",
                            error: error_for(&errors, "firstName"),
                            input {
                                class: "input input-bordered w-full",
                                value: "{current.first_name}",
                                oninput: move |evt| form.write().first_name = evt.value(),
                            }
                        }
                        Field {
                            label: "Last name",
                            error: error_for(&errors, "lastName"),
                            input {
                                class: "input input-bordered w-full",
                                value: "{current.last_name}",
                                oninput: move |evt| form.write().last_name = evt.value(),
                            }
                        }
                        Field {
                            label: "User name",
                            error: error_for(&errors, "userName"),
                            input {
                                class: "input input-bordered w-full",
                                value: "{current.user_name}",
                                oninput: move |evt| form.write().user_name = evt.value(),
                            }
                        }
                        Field {
                            label: "Email",
                            error: error_for(&errors, "email"),
                            input {
                                r#type: "email",
                                class: "input input-bordered w-full",
                                value: "{current.email}",
                                oninput: move |evt| form.write().email = evt.value(),
                            }
                        }
                        Field {
                            label: "Temporary password",
                            error: error_for(&errors, "password"),
                            input {
                                r#type: "password",
                                class: "input input-bordered w-full",
                                value: "{current.password.clone().unwrap_or_default()}",
                                oninput: move |evt| form.write().password = format::optional(evt.value()),
                            }
                        }
                        Field {
                            label: "Phone",
                            error: error_for(&errors, "phone"),
                            input {
                                class: "input input-bordered w-full",
                                value: "{current.phone.clone().unwrap_or_default()}",
                                oninput: move |evt| form.write().phone = format::optional(evt.value()),
                            }
                        }
                        Field {
                            label: "Date of birth",
                            input {
                                r#type: "date",
                                class: "input input-bordered w-full",
                                value: "{current.date_of_birth.map(|d| d.to_string()).unwrap_or_default()}",
                                oninput: move |evt| form.write().date_of_birth = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok(),
                            }
                        }
                        Field {
                            label: "License number",
                            input {
                                class: "input input-bordered w-full",
                                value: "{current.license_number.clone().unwrap_or_default()}",
                                oninput: move |evt| form.write().license_number = format::optional(evt.value()),
                            }
                        }
                        Field {
                            label: "Position",
                            error: error_for(&errors, "position"),
                            select {
                                class: "select select-bordered w-full",
                                onchange: move |evt| {
                                    let value = evt.value();
                                    form.write().position = (!value.is_empty()).then(|| PlayerPosition::from_wire(&value));
                                },
                                option { value: "", selected: current.position.is_none(), "Choose a position" }
                                for position in PlayerPosition::variants() {
                                    option {
                                        value: "{position.as_str()}",
                                        selected: current.position.as_ref() == Some(&position),
                                        "{position}"
                                    }
                                }
                            }
                        }
                        Field {
                            label: "Status",
                            select {
                                class: "select select-bordered w-full",
                                onchange: move |evt| form.write().status = Some(PlayerStatus::from_wire(&evt.value())),
                                for status in PlayerStatus::selectable() {
                                    option {
                                        value: "{status.as_str()}",
                                        selected: current.status.as_ref() == Some(&status),
                                        "{status}"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::CoachPlayers {}, class: "btn", "Cancel" }
                        SubmitButton { label: "Register", busy_label: "Registering...", is_busy: saving() }
                    }
                }
            }
        }
    }
}
