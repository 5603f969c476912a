use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::model::competition::{
    CompetitionFilter, CompetitionStatus, CompetitionStatusUpdateDto, CompetitionTeamStatus,
    OrganizerCompetitionDto, TeamCompetitionStatusUpdateDto,
};

use crate::client::{
    api::use_client,
    component::{
        page::{ApiErrorPage, EmptyState, ErrorAlert, ErrorPage, LoadingPage, SuccessAlert},
        ConfirmationModal, Page, ReasonModal,
    },
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

use super::competition_form::CompetitionForm;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Overview,
    Teams,
    Requests,
}

#[component]
pub fn OrganizerCompetitionDetail(id: i64) -> Element {
    let client = use_client();
    let organizer_id = use_user_id();
    let nav = navigator();

    let mut tab = use_signal(|| Tab::Overview);
    let mut editing = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<Result<String, String>>);
    let mut show_delete = use_signal(|| false);
    let mut show_status = use_signal(|| false);
    let mut next_status = use_signal(|| None::<CompetitionStatus>);

    // Organizer endpoints have no single-competition read; pick it from the list.
    let mut competition = use_resource({
        let client = client.clone();
        use_reactive!(|id, organizer_id| {
            let client = client.clone();
            async move {
                client
                    .competitions()
                    .get_organizer_competitions(organizer_id, &CompetitionFilter::default())
                    .await
                    .map(|summary| summary.competitions.into_iter().find(|c| c.id == Some(id)))
                    .inspect_err(|err| tracing::error!("Failed to fetch competition {}: {}", id, err))
            }
        })
    });

    let on_save = {
        let client = client.clone();
        move |updated: OrganizerCompetitionDto| {
            let client = client.clone();
            saving.set(true);
            failure.set(None);
            spawn(async move {
                match client.competitions().update(organizer_id, id, &updated).await {
                    Ok(_) => {
                        editing.set(false);
                        notice.set(Some(Ok("Competition updated".to_string())));
                        competition.restart();
                    }
                    Err(err) => {
                        tracing::error!("Failed to update competition {}: {}", id, err);
                        failure.set(Some(err.user_message()));
                    }
                }
                saving.set(false);
            });
        }
    };

    let on_delete = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            saving.set(true);
            spawn(async move {
                match client.competitions().delete(organizer_id, id).await {
                    Ok(()) => {
                        nav.push(Route::OrganizerCompetitions {});
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete competition {}: {}", id, err);
                        notice.set(Some(Err(err.user_message())));
                    }
                }
                saving.set(false);
                show_delete.set(false);
            });
        }
    };

    let on_status = move |reason: String| {
        let Some(new_status) = next_status() else {
            return;
        };
        let client = client.clone();
        saving.set(true);
        spawn(async move {
            let update = CompetitionStatusUpdateDto {
                competition_id: id,
                new_status,
            };
            match client
                .competitions()
                .update_status(organizer_id, &update, &reason)
                .await
            {
                Ok(_) => {
                    notice.set(Some(Ok("Status updated".to_string())));
                    competition.restart();
                }
                Err(err) => {
                    tracing::error!("Failed to update status of competition {}: {}", id, err);
                    notice.set(Some(Err(err.user_message())));
                }
            }
            saving.set(false);
            show_status.set(false);
            next_status.set(None);
        });
    };

    let current = match &*competition.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(None)) => {
            return rsx!(ErrorPage {
                status: 404,
                message: "Competition not found"
            })
        }
        Some(Ok(Some(competition))) => competition.clone(),
    };

    let tab_class = move |t: Tab| if tab() == t { "tab tab-active" } else { "tab" };
    let status_title = format!(
        "Change status to {}",
        format::label(next_status().as_ref())
    );

    rsx! {
        Title { "{format::text(current.name.as_deref())} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                div {
                    class: "flex flex-wrap justify-between items-start gap-2",
                    div {
                        h1 { class: "text-lg sm:text-2xl", "{format::text(current.name.as_deref())}" }
                        p {
                            class: "text-sm opacity-70",
                            "{format::label(current.competition_type.as_ref())} · {format::date(current.start_date)} - {format::date(current.end_date)}"
                        }
                    }
                    div {
                        class: "flex flex-wrap items-center gap-2",
                        if let Some(status) = &current.status {
                            span { class: "badge {status.badge_color()}", "{status}" }
                        }
                        select {
                            class: "select select-bordered select-sm",
                            onchange: move |evt| {
                                let value = evt.value();
                                if !value.is_empty() {
                                    next_status.set(Some(CompetitionStatus::from_wire(&value)));
                                    show_status.set(true);
                                }
                            },
                            option { value: "", selected: true, "Change status" }
                            for status in CompetitionStatus::variants() {
                                if current.status.as_ref() != Some(&status) {
                                    option { value: "{status.as_str()}", "{status}" }
                                }
                            }
                        }
                        Link { to: Route::CompetitionDetail { id }, class: "btn btn-sm btn-ghost", "Public page" }
                    }
                }
                match notice() {
                    Some(Ok(message)) => rsx! { SuccessAlert { message } },
                    Some(Err(message)) => rsx! { ErrorAlert { message } },
                    None => rsx! {},
                }
                div {
                    role: "tablist",
                    class: "tabs tabs-border",
                    button { role: "tab", class: tab_class(Tab::Overview), onclick: move |_| tab.set(Tab::Overview), "Overview" }
                    button { role: "tab", class: tab_class(Tab::Teams), onclick: move |_| tab.set(Tab::Teams), "Teams" }
                    button { role: "tab", class: tab_class(Tab::Requests), onclick: move |_| tab.set(Tab::Requests), "Requests" }
                }
                match tab() {
                    Tab::Overview if editing() => rsx! {
                        CompetitionForm {
                            initial: current.clone(),
                            title: "Edit competition",
                            submit_label: "Save",
                            busy_label: "Saving...",
                            saving: saving(),
                            failure: failure(),
                            on_submit: on_save,
                            on_cancel: move |_| editing.set(false),
                        }
                    },
                    Tab::Overview => rsx! {
                        CompetitionSummary { competition: current.clone() }
                        div {
                            class: "flex justify-end gap-2",
                            button { class: "btn btn-sm", onclick: move |_| editing.set(true), "Edit" }
                            button { class: "btn btn-sm btn-error btn-outline", onclick: move |_| show_delete.set(true), "Delete" }
                        }
                    },
                    Tab::Teams => rsx! { CompetitionTeamsPanel { competition_id: id } },
                    Tab::Requests => rsx! {
                        CompetitionRequestsPanel { competition_id: id, on_processed: move |_| competition.restart() }
                    },
                }
            }
            ConfirmationModal {
                show: show_delete,
                title: "Delete competition",
                message: "The competition, its matches and its standings will be deleted.",
                confirm_text: "Delete",
                is_processing: saving(),
                on_confirm: on_delete,
            }
            ReasonModal {
                show: show_status,
                title: status_title,
                confirm_text: "Update",
                is_processing: saving(),
                on_confirm: on_status,
            }
        }
    }
}

#[component]
fn CompetitionSummary(competition: OrganizerCompetitionDto) -> Element {
    let description = format::markdown(competition.description.as_deref().unwrap_or_default());

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-3 gap-4",
            div {
                class: "card bg-base-200 md:col-span-2",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Description" }
                    div { class: "prose max-w-none", dangerous_inner_html: "{description}" }
                }
            }
            div {
                class: "stats stats-vertical bg-base-200",
                div {
                    class: "stat",
                    div { class: "stat-title", "Teams" }
                    div { class: "stat-value text-2xl", "{format::number(competition.registered_teams)} / {format::number(competition.max_teams)}" }
                }
                div {
                    class: "stat",
                    div { class: "stat-title", "Matches played" }
                    div { class: "stat-value text-2xl", "{format::number(competition.completed_matches)} / {format::number(competition.total_matches)}" }
                }
                div {
                    class: "stat",
                    div { class: "stat-title", "Location" }
                    div { class: "stat-value text-lg", "{format::text(competition.location.as_deref())}" }
                }
            }
        }
    }
}

#[component]
fn CompetitionTeamsPanel(competition_id: i64) -> Element {
    let client = use_client();
    let organizer_id = use_user_id();

    let mut pending = use_signal(|| None::<(i64, CompetitionTeamStatus)>);
    let mut show_reason = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);

    let mut teams = use_resource({
        let client = client.clone();
        use_reactive!(|competition_id, organizer_id| {
            let client = client.clone();
            async move {
                client
                    .teams()
                    .get_organizer_competition_teams(organizer_id, competition_id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch competition teams: {}", err))
            }
        })
    });

    let on_confirm = move |reason: String| {
        let Some((team_id, new_status)) = pending() else {
            return;
        };
        let client = client.clone();
        processing.set(true);
        spawn(async move {
            let update = TeamCompetitionStatusUpdateDto {
                competition_id,
                team_id,
                new_status,
            };
            match client
                .competitions()
                .update_team_status(organizer_id, &update, &reason)
                .await
            {
                Ok(()) => {
                    failure.set(None);
                    teams.restart();
                }
                Err(err) => {
                    tracing::error!("Failed to update status of team {}: {}", team_id, err);
                    failure.set(Some(err.user_message()));
                }
            }
            processing.set(false);
            show_reason.set(false);
            pending.set(None);
        });
    };

    let list = match &*teams.read_unchecked() {
        None => return rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => return rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) => list.clone(),
    };

    rsx! {
        if let Some(message) = failure() {
            ErrorAlert { message }
        }
        if list.is_empty() {
            EmptyState { title: "No teams registered yet" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Team" }
                            th { "Category" }
                            th { "Coach" }
                            th { "Players" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for team in list {
                            if let Some(team_id) = team.id {
                                tr {
                                    key: "{team_id}",
                                    td {
                                        Link { to: Route::TeamDetail { id: team_id }, class: "font-semibold link link-hover", "{format::text(team.name.as_deref())}" }
                                    }
                                    td { "{format::text(team.category.as_deref())}" }
                                    td { "{format::text(team.coach_name.as_deref())}" }
                                    td { "{format::number(team.player_count)}" }
                                    td {
                                        select {
                                            class: "select select-bordered select-xs",
                                            onchange: move |evt| {
                                                let value = evt.value();
                                                if value.is_empty() {
                                                    return;
                                                }
                                                pending.set(Some((team_id, CompetitionTeamStatus::from_wire(&value))));
                                                show_reason.set(true);
                                            },
                                            if team.status.is_none() {
                                                option { value: "", selected: true, "-" }
                                            }
                                            for status in CompetitionTeamStatus::variants() {
                                                option {
                                                    value: "{status.as_str()}",
                                                    selected: team.status.as_ref() == Some(&status),
                                                    "{status}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        ReasonModal {
            show: show_reason,
            title: "Change team status",
            confirm_text: "Update",
            required: true,
            is_processing: processing(),
            on_confirm,
        }
    }
}

#[component]
fn CompetitionRequestsPanel(competition_id: i64, on_processed: EventHandler<()>) -> Element {
    let client = use_client();
    let organizer_id = use_user_id();

    let mut pending = use_signal(|| None::<(i64, bool)>);
    let mut show_reason = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);

    let mut requests = use_resource({
        let client = client.clone();
        use_reactive!(|competition_id, organizer_id| {
            let client = client.clone();
            async move {
                client
                    .competitions()
                    .get_requests(organizer_id, competition_id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch competition requests: {}", err))
            }
        })
    });

    let on_confirm = move |reason: String| {
        let Some((request_id, approved)) = pending() else {
            return;
        };
        let client = client.clone();
        processing.set(true);
        spawn(async move {
            match client
                .competitions()
                .process_request(organizer_id, request_id, approved, &reason)
                .await
            {
                Ok(()) => {
                    failure.set(None);
                    requests.restart();
                    on_processed.call(());
                }
                Err(err) => {
                    tracing::error!("Failed to process request {}: {}", request_id, err);
                    failure.set(Some(err.user_message()));
                }
            }
            processing.set(false);
            show_reason.set(false);
            pending.set(None);
        });
    };

    let list = match &*requests.read_unchecked() {
        None => return rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => return rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) => list.clone(),
    };
    let (title, confirm_text, confirm_class) = match pending() {
        Some((_, false)) => ("Reject request", "Reject", "btn-error"),
        _ => ("Approve request", "Approve", "btn-success"),
    };

    rsx! {
        if let Some(message) = failure() {
            ErrorAlert { message }
        }
        if list.is_empty() {
            EmptyState { title: "No requests for this competition" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Team" }
                            th { "Type" }
                            th { "Reason" }
                            th { "Status" }
                            th {}
                        }
                    }
                    tbody {
                        for request in list {
                            tr {
                                td { "{format::text(request.created_at.as_deref())}" }
                                td { "{format::text(request.team_name.as_deref())}" }
                                td { "{format::label(request.request_type.as_ref())}" }
                                td { class: "max-w-xs truncate", "{format::text(request.reason.as_deref())}" }
                                td { "{format::label(request.request_status.as_ref())}" }
                                td {
                                    class: "text-right",
                                    if let (true, Some(request_id)) = (request.is_pending(), request.id) {
                                        div {
                                            class: "flex justify-end gap-1",
                                            button {
                                                class: "btn btn-xs btn-success",
                                                onclick: move |_| {
                                                    pending.set(Some((request_id, true)));
                                                    show_reason.set(true);
                                                },
                                                "Approve"
                                            }
                                            button {
                                                class: "btn btn-xs btn-error btn-outline",
                                                onclick: move |_| {
                                                    pending.set(Some((request_id, false)));
                                                    show_reason.set(true);
                                                },
                                                "Reject"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        ReasonModal {
            show: show_reason,
            title,
            confirm_text,
            confirm_class,
            is_processing: processing(),
            on_confirm,
        }
    }
}
