use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::model::competition::{CompetitionDto, CompetitionFilter, CompetitionStatus};

use crate::client::{
    api::use_client,
    component::{
        page::{EmptyState, ErrorAlert, SuccessAlert},
        Page, ReasonModal,
    },
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

use super::{use_coach_teams, TeamSelect};

#[derive(Clone, Copy, PartialEq)]
enum Action {
    Register(i64),
    Withdraw(i64),
}

#[component]
pub fn CoachCompetitions() -> Element {
    let client = use_client();
    let coach_id = use_user_id();
    let teams = use_coach_teams();

    let mut team_id = use_signal(|| None::<i64>);
    let mut action = use_signal(|| None::<Action>);
    let mut show_reason = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut notice = use_signal(|| None::<Result<String, String>>);

    // Default to the first team once they are loaded.
    use_effect(move || {
        if let Some(Ok(list)) = &*teams.read() {
            if team_id.peek().is_none() {
                team_id.set(list.iter().find_map(|t| t.id));
            }
        }
    });

    let mut registered = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let team = team_id();
            async move {
                let Some(team) = team else {
                    return Ok(Vec::new());
                };
                client
                    .competitions()
                    .get_by_team(team, &CompetitionFilter::default())
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch team competitions: {}", err))
            }
        }
    });

    let open = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let filter = CompetitionFilter {
                    status: Some(CompetitionStatus::Registration),
                    ..Default::default()
                };
                client
                    .competitions()
                    .get_all(&filter)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch open competitions: {}", err))
            }
        }
    });

    let mut requests = use_resource({
        let client = client.clone();
        use_reactive!(|coach_id| {
            let client = client.clone();
            async move {
                client
                    .competitions()
                    .get_coach_requests(coach_id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch competition requests: {}", err))
            }
        })
    });

    let on_confirm = move |reason: String| {
        let (Some(team), Some(pending)) = (team_id(), action()) else {
            return;
        };
        let client = client.clone();
        processing.set(true);
        spawn(async move {
            let competitions = client.competitions();
            let result = match pending {
                Action::Register(competition) => competitions
                    .register_team(coach_id, team, competition, &reason)
                    .await
                    .map(|_| "Registration request sent"),
                Action::Withdraw(competition) => competitions
                    .withdraw_team(coach_id, team, competition, &reason)
                    .await
                    .map(|_| "Withdrawal request sent"),
            };
            match result {
                Ok(message) => {
                    notice.set(Some(Ok(message.to_string())));
                    registered.restart();
                    requests.restart();
                }
                Err(err) => {
                    tracing::error!("Competition request failed: {}", err);
                    notice.set(Some(Err(err.user_message())));
                }
            }
            processing.set(false);
            show_reason.set(false);
        });
    };

    let mut ask = move |next: Action| {
        action.set(Some(next));
        show_reason.set(true);
    };

    let team_options = match &*teams.read_unchecked() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let joined: Vec<CompetitionDto> = match &*registered.read_unchecked() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let available: Vec<CompetitionDto> = match &*open.read_unchecked() {
        Some(Ok(list)) => list
            .iter()
            .filter(|c| !joined.iter().any(|j| j.id == c.id))
            .cloned()
            .collect(),
        _ => Vec::new(),
    };
    let (modal_title, modal_confirm, reason_required) = match action() {
        Some(Action::Withdraw(_)) => ("Withdraw from competition", "Withdraw", true),
        _ => ("Register for competition", "Send request", false),
    };

    rsx! {
        Title { "Competitions | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                h1 { class: "text-lg sm:text-2xl", "Competitions" }
                match notice() {
                    Some(Ok(message)) => rsx! { SuccessAlert { message } },
                    Some(Err(message)) => rsx! { ErrorAlert { message } },
                    None => rsx! {},
                }
                div {
                    class: "max-w-sm",
                    TeamSelect { label: "Team", teams: team_options, selected: team_id }
                }
                section {
                    h2 { class: "text-lg mb-2", "Registered" }
                    if joined.is_empty() {
                        EmptyState { title: "This team is not registered in any competition" }
                    } else {
                        CompetitionList {
                            competitions: joined,
                            action_label: "Withdraw",
                            action_class: "btn-warning",
                            on_action: move |id| ask(Action::Withdraw(id)),
                        }
                    }
                }
                section {
                    h2 { class: "text-lg mb-2", "Open for registration" }
                    if available.is_empty() {
                        EmptyState { title: "No competition is open for registration" }
                    } else {
                        CompetitionList {
                            competitions: available,
                            action_label: "Register",
                            action_class: "btn-primary",
                            on_action: move |id| ask(Action::Register(id)),
                        }
                    }
                }
                section {
                    h2 { class: "text-lg mb-2", "My requests" }
                    match &*requests.read_unchecked() {
                        None => rsx! { span { class: "loading loading-spinner" } },
                        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
                        Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { title: "No requests yet" } },
                        Some(Ok(list)) => rsx! {
                            div {
                                class: "overflow-x-auto",
                                table {
                                    class: "table table-zebra w-full",
                                    thead {
                                        tr {
                                            th { "Date" }
                                            th { "Team" }
                                            th { "Competition" }
                                            th { "Type" }
                                            th { "Status" }
                                            th { "Response" }
                                        }
                                    }
                                    tbody {
                                        for request in list.clone() {
                                            tr {
                                                td { "{format::text(request.created_at.as_deref())}" }
                                                td { "{format::text(request.team_name.as_deref())}" }
                                                td { "{format::text(request.competition_name.as_deref())}" }
                                                td { "{format::label(request.request_type.as_ref())}" }
                                                td {
                                                    span {
                                                        class: if request.is_pending() { "badge badge-warning" } else { "badge" },
                                                        "{format::label(request.request_status.as_ref())}"
                                                    }
                                                }
                                                td { "{format::text(request.response_message.as_deref())}" }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }
            ReasonModal {
                show: show_reason,
                title: modal_title,
                confirm_text: modal_confirm,
                required: reason_required,
                is_processing: processing(),
                on_confirm,
            }
        }
    }
}

#[component]
fn CompetitionList(
    competitions: Vec<CompetitionDto>,
    action_label: String,
    action_class: String,
    on_action: EventHandler<i64>,
) -> Element {
    rsx! {
        ul {
            class: "list bg-base-200 rounded-box",
            for competition in competitions {
                li {
                    class: "list-row items-center",
                    div {
                        class: "list-col-grow",
                        match competition.id {
                            Some(id) => rsx! {
                                Link { to: Route::CompetitionDetail { id }, class: "font-semibold link link-hover", "{format::text(competition.name.as_deref())}" }
                            },
                            None => rsx! { span { class: "font-semibold", "{format::text(competition.name.as_deref())}" } },
                        }
                        p {
                            class: "text-xs opacity-60",
                            "{format::date(competition.start_date)} - {format::date(competition.end_date)} · {format::number(competition.registered_teams)} / {format::number(competition.max_teams)} teams"
                        }
                    }
                    if let Some(status) = &competition.status {
                        span { class: "badge {status.badge_color()}", "{status}" }
                    }
                    if let Some(id) = competition.id {
                        button {
                            class: "btn btn-sm {action_class}",
                            onclick: move |_| on_action.call(id),
                            "{action_label}"
                        }
                    }
                }
            }
        }
    }
}
