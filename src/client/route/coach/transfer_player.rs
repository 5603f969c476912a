use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::validation::FieldError;

use crate::client::{
    api::use_client,
    component::{
        form::{error_for, Field, SubmitButton},
        page::{ErrorAlert, SuccessAlert},
        Page,
    },
    constant::SITE_NAME,
    model::auth::use_user_id,
    router::Route,
};

use super::{use_coach_teams, TeamSelect};

#[component]
pub fn CoachTransferPlayer() -> Element {
    let client = use_client();
    let coach_id = use_user_id();
    let teams = use_coach_teams();

    let source = use_signal(|| None::<i64>);
    let target = use_signal(|| None::<i64>);
    let mut player_id = use_signal(|| None::<i64>);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut outcome = use_signal(|| None::<Result<(), String>>);
    let mut saving = use_signal(|| false);

    let mut roster = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let team = source();
            async move {
                let Some(team) = team else {
                    return Ok(Vec::new());
                };
                client
                    .players()
                    .get_by_team(team, coach_id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch roster: {}", err))
            }
        }
    });

    use_effect(move || {
        source();
        player_id.set(None);
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut validation = Vec::new();
        if source().is_none() {
            validation.push(FieldError::new("sourceTeamId", "Please choose the current team"));
        }
        if player_id().is_none() {
            validation.push(FieldError::new("playerId", "Please choose a player"));
        }
        match target() {
            None => validation.push(FieldError::new("targetTeamId", "Please choose the new team")),
            Some(t) if Some(t) == source() => {
                validation.push(FieldError::new("targetTeamId", "The new team must be different"))
            }
            _ => {}
        }
        errors.set(validation);
        let (Some(from), Some(to), Some(player)) = (source(), target(), player_id()) else {
            return;
        };
        if from == to {
            return;
        }

        let client = client.clone();
        saving.set(true);
        outcome.set(None);
        spawn(async move {
            match client.teams().transfer_player(coach_id, from, to, player).await {
                Ok(()) => {
                    outcome.set(Some(Ok(())));
                    player_id.set(None);
                    roster.restart();
                }
                Err(err) => {
                    tracing::error!("Failed to transfer player {}: {}", player, err);
                    outcome.set(Some(Err(err.user_message())));
                }
            }
            saving.set(false);
        });
    };

    let team_options = match &*teams.read_unchecked() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let players = match &*roster.read_unchecked() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let selected_player = player_id();

    rsx! {
        Title { "Transfer a player | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            form {
                class: "card bg-base-200 w-full max-w-2xl",
                onsubmit: on_submit,
                div {
                    class: "card-body",
                    h1 { class: "card-title text-2xl", "Transfer a player" }
                    match outcome() {
                        Some(Ok(())) => rsx! { SuccessAlert { message: "Player transferred" } },
                        Some(Err(message)) => rsx! { ErrorAlert { message } },
                        None => rsx! {},
                    }
                    TeamSelect {
                        label: "Current team",
                        teams: team_options.clone(),
                        selected: source,
                        error: error_for(&errors, "sourceTeamId"),
                    }
                    Field {
                        label: "Player",
                        error: error_for(&errors, "playerId"),
                        select {
                            class: "select select-bordered w-full",
                            disabled: source().is_none(),
                            onchange: move |evt| player_id.set(evt.value().parse().ok()),
                            option { value: "", selected: selected_player.is_none(), "Choose a player" }
                            for player in players {
                                if let Some(id) = player.id {
                                    option {
                                        value: "{id}",
                                        selected: selected_player == Some(id),
                                        "{player.display_name()}"
                                    }
                                }
                            }
                        }
                    }
                    TeamSelect {
                        label: "New team",
                        teams: team_options,
                        selected: target,
                        error: error_for(&errors, "targetTeamId"),
                    }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::CoachPlayers {}, class: "btn", "Cancel" }
                        SubmitButton { label: "Transfer", busy_label: "Transferring...", is_busy: saving() }
                    }
                }
            }
        }
    }
}
