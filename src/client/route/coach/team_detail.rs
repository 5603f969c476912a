use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    validation::{form::validate_team, FieldError},
};

use crate::client::{
    api::use_client,
    component::{
        form::{error_for, Field, SubmitButton},
        page::{ApiErrorPage, EmptyState, ErrorAlert, LoadingPage, SuccessAlert},
        ConfirmationModal, Page, ReasonModal,
    },
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

#[component]
pub fn CoachTeamDetail(id: i64) -> Element {
    let client = use_client();
    let coach_id = use_user_id();
    let nav = navigator();

    let mut show_delete = use_signal(|| false);
    let mut show_withdraw = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut notice = use_signal(|| None::<Result<String, String>>);

    let mut team = use_resource({
        let client = client.clone();
        use_reactive!(|id| {
            let client = client.clone();
            async move {
                client
                    .teams()
                    .get_by_id(id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch team {}: {}", id, err))
            }
        })
    });

    let on_delete = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            processing.set(true);
            spawn(async move {
                match client.teams().delete(coach_id, id).await {
                    Ok(()) => {
                        show_delete.set(false);
                        nav.push(Route::CoachTeams {});
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete team {}: {}", id, err);
                        notice.set(Some(Err(err.user_message())));
                        show_delete.set(false);
                    }
                }
                processing.set(false);
            });
        }
    };

    let on_withdraw = move |reason: String| {
        let client = client.clone();
        processing.set(true);
        spawn(async move {
            match client.competitions().withdraw_team_from_all(coach_id, id, &reason).await {
                Ok(()) => notice.set(Some(Ok("Withdrawal requests sent for every competition".to_string()))),
                Err(err) => {
                    tracing::error!("Failed to withdraw team {}: {}", id, err);
                    notice.set(Some(Err(err.user_message())));
                }
            }
            processing.set(false);
            show_withdraw.set(false);
        });
    };

    let current = match &*team.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(current)) => current.clone(),
    };

    rsx! {
        Title { "{format::text(current.name.as_deref())} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-5xl flex flex-col gap-6",
                div {
                    class: "flex flex-wrap justify-between items-center gap-2",
                    h1 { class: "text-lg sm:text-2xl", "{format::text(current.name.as_deref())}" }
                    div {
                        class: "flex gap-2",
                        Link { to: Route::TeamDetail { id }, class: "btn btn-sm btn-ghost", "Public page" }
                        button {
                            class: "btn btn-sm btn-warning btn-outline",
                            onclick: move |_| show_withdraw.set(true),
                            "Withdraw from all competitions"
                        }
                        button {
                            class: "btn btn-sm btn-error btn-outline",
                            onclick: move |_| show_delete.set(true),
                            "Delete team"
                        }
                    }
                }
                match notice() {
                    Some(Ok(message)) => rsx! { SuccessAlert { message } },
                    Some(Err(message)) => rsx! { ErrorAlert { message } },
                    None => rsx! {},
                }
                TeamForm { team: current.clone(), on_saved: move |_| team.restart() }
                TeamRoster { team_id: id }
            }
            ConfirmationModal {
                show: show_delete,
                title: "Delete team",
                message: "The team and its roster will be deleted. This cannot be undone.",
                confirm_text: "Delete",
                is_processing: processing(),
                on_confirm: on_delete,
            }
            ReasonModal {
                show: show_withdraw,
                title: "Withdraw from all competitions",
                confirm_text: "Withdraw",
                confirm_class: "btn-warning",
                required: true,
                is_processing: processing(),
                on_confirm: on_withdraw,
            }
        }
    }
}

#[component]
fn TeamForm(team: TeamDto, on_saved: EventHandler<()>) -> Element {
    let client = use_client();
    let coach_id = use_user_id();

    let team_id = team.id.unwrap_or_default();
    let mut form = use_signal(|| CreateTeamDto {
        name: team.name.clone().unwrap_or_default(),
        description: team.description.clone(),
        logo: team.logo.clone(),
        category: team.category.clone(),
        players: Vec::new(),
    });
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut outcome = use_signal(|| None::<Result<(), String>>);
    let mut saving = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let values = form();
        let validation = validate_team(&values);
        let valid = validation.is_empty();
        errors.set(validation);
        if !valid {
            return;
        }

        let update = UpdateTeamDto {
            team_id,
            name: Some(values.name),
            description: values.description,
            logo: values.logo,
            category: values.category,
        };
        let client = client.clone();
        saving.set(true);
        outcome.set(None);
        spawn(async move {
            match client.teams().update(coach_id, &update).await {
                Ok(_) => {
                    outcome.set(Some(Ok(())));
                    on_saved.call(());
                }
                Err(err) => {
                    tracing::error!("Failed to update team {}: {}", team_id, err);
                    outcome.set(Some(Err(err.user_message())));
                }
            }
            saving.set(false);
        });
    };

    let current = form();

    rsx! {
        form {
            class: "card bg-base-200",
            onsubmit: on_submit,
            div {
                class: "card-body",
                h2 { class: "card-title", "Team details" }
                match outcome() {
                    Some(Ok(())) => rsx! { SuccessAlert { message: "Team updated" } },
                    Some(Err(message)) => rsx! { ErrorAlert { message } },
                    None => rsx! {},
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
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
                        input {
                            class: "input input-bordered w-full",
                            value: "{current.category.clone().unwrap_or_default()}",
                            oninput: move |evt| form.write().category = format::optional(evt.value()),
                        }
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
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 3,
                        value: "{current.description.clone().unwrap_or_default()}",
                        oninput: move |evt| form.write().description = format::optional(evt.value()),
                    }
                }
                div {
                    class: "card-actions justify-end",
                    SubmitButton { label: "Save", busy_label: "Saving...", is_busy: saving() }
                }
            }
        }
    }
}

#[component]
fn TeamRoster(team_id: i64) -> Element {
    let client = use_client();
    let coach_id = use_user_id();

    let mut removing = use_signal(|| None::<i64>);
    let mut show_remove = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);

    let mut players = use_resource({
        let client = client.clone();
        use_reactive!(|team_id, coach_id| {
            let client = client.clone();
            async move {
                client
                    .players()
                    .get_by_team(team_id, coach_id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch roster: {}", err))
            }
        })
    });

    let on_remove = move |_| {
        let Some(player_id) = removing() else {
            return;
        };
        let client = client.clone();
        processing.set(true);
        spawn(async move {
            match client.teams().remove_player(coach_id, team_id, player_id).await {
                Ok(()) => players.restart(),
                Err(err) => {
                    tracing::error!("Failed to remove player {}: {}", player_id, err);
                    failure.set(Some(err.user_message()));
                }
            }
            processing.set(false);
            show_remove.set(false);
        });
    };

    rsx! {
        div {
            class: "flex justify-between items-center",
            h2 { class: "text-lg", "Roster" }
            div {
                class: "flex gap-2",
                Link { to: Route::CoachTransferPlayer {}, class: "btn btn-sm", "Transfer a player" }
                Link { to: Route::CoachRegisterPlayer {}, class: "btn btn-sm btn-primary", "Register a player" }
            }
        }
        if let Some(message) = failure() {
            ErrorAlert { message }
        }
        match &*players.read_unchecked() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
            Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { title: "No players in this team" } },
            Some(Ok(list)) => rsx! {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Position" }
                                th { "Status" }
                                th { "License" }
                                th {}
                            }
                        }
                        tbody {
                            for player in list.clone() {
                                tr {
                                    td { class: "font-semibold", "{player.display_name()}" }
                                    td { "{format::label(player.position.as_ref())}" }
                                    td {
                                        if let Some(status) = &player.status {
                                            span { class: "badge {status.badge_color()}", "{status}" }
                                        }
                                    }
                                    td { "{format::text(player.license_number.as_deref())}" }
                                    td {
                                        class: "text-right",
                                        if let Some(player_id) = player.id {
                                            button {
                                                class: "btn btn-xs btn-error btn-outline",
                                                onclick: move |_| {
                                                    removing.set(Some(player_id));
                                                    show_remove.set(true);
                                                },
                                                "Remove"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
        ConfirmationModal {
            show: show_remove,
            title: "Remove player",
            message: "The player will leave this team.",
            confirm_text: "Remove",
            is_processing: processing(),
            on_confirm: on_remove,
        }
    }
}
