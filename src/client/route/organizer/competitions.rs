use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::model::competition::{CompetitionFilter, CompetitionStatus, OrganizerCompetitionDto};

use crate::client::{
    api::use_client,
    component::{
        page::{ApiErrorPage, EmptyState, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

#[component]
pub fn OrganizerCompetitions() -> Element {
    let client = use_client();
    let organizer_id = use_user_id();

    let mut status = use_signal(|| None::<CompetitionStatus>);

    let competitions = use_resource(move || {
        let client = client.clone();
        let filter = CompetitionFilter {
            status: status(),
            ..Default::default()
        };
        async move {
            client
                .competitions()
                .get_organizer_competitions(organizer_id, &filter)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch organizer competitions: {}", err))
        }
    });

    let summary = match &*competitions.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(summary)) => summary.clone(),
    };
    let selected = status();

    rsx! {
        Title { "My competitions | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-4",
                div {
                    class: "flex flex-wrap justify-between items-center gap-2",
                    h1 { class: "text-lg sm:text-2xl", "My competitions" }
                    div {
                        class: "flex gap-2",
                        select {
                            class: "select select-bordered select-sm",
                            onchange: move |evt| {
                                let value = evt.value();
                                status.set((!value.is_empty()).then(|| CompetitionStatus::from_wire(&value)));
                            },
                            option { value: "", selected: selected.is_none(), "All statuses" }
                            for option_status in CompetitionStatus::variants() {
                                option {
                                    value: "{option_status.as_str()}",
                                    selected: selected.as_ref() == Some(&option_status),
                                    "{option_status}"
                                }
                            }
                        }
                        Link { to: Route::OrganizerCreateCompetition {}, class: "btn btn-sm btn-primary", "New competition" }
                    }
                }
                if summary.competitions.is_empty() {
                    EmptyState {
                        title: "No competitions",
                        hint: "Create your first competition to get started",
                    }
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        for competition in summary.competitions {
                            CompetitionCard { competition }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CompetitionCard(competition: OrganizerCompetitionDto) -> Element {
    let played = competition.completed_matches.unwrap_or_default();
    let total = competition.total_matches.unwrap_or_default();
    let progress = if total > 0 { played * 100 / total } else { 0 };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-start gap-2",
                    h2 { class: "card-title", "{format::text(competition.name.as_deref())}" }
                    if let Some(status) = &competition.status {
                        span { class: "badge {status.badge_color()}", "{status}" }
                    }
                }
                p {
                    class: "text-sm opacity-70",
                    "{format::label(competition.competition_type.as_ref())} · {format::text(competition.category.as_deref())} · {format::text(competition.location.as_deref())}"
                }
                p {
                    class: "text-sm",
                    "{format::date(competition.start_date)} - {format::date(competition.end_date)}"
                }
                p {
                    class: "text-sm",
                    "Teams: {format::number(competition.registered_teams)} / {format::number(competition.max_teams)}"
                }
                div {
                    class: "flex items-center gap-2 text-sm",
                    span { "Matches played: {played} / {total}" }
                    progress { class: "progress progress-primary w-32", value: "{progress}", max: "100" }
                }
                if let Some(id) = competition.id {
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::OrganizerCompetitionDetail { id }, class: "btn btn-sm", "Manage" }
                    }
                }
            }
        }
    }
}
