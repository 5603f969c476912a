use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::model::{
    competition::{CompetitionDto, CompetitionFilter},
    matches::{MatchDto, MatchFilter, MatchStatus},
};

use crate::client::{
    api::use_client,
    component::{
        page::{EmptyState, ErrorAlert},
        Page,
    },
    constant::{SITE_NAME, UPCOMING_LIMIT},
    format,
    model::auth::AuthContext,
    router::Route,
};

#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let client = use_client();

    let matches = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let filter = MatchFilter {
                    status: Some(MatchStatus::Scheduled),
                    limit: Some(UPCOMING_LIMIT),
                    ..Default::default()
                };
                client
                    .matches()
                    .get_all(&filter)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch upcoming matches: {}", err))
            }
        }
    });

    let competitions = use_resource(move || {
        let client = client.clone();
        async move {
            let filter = CompetitionFilter {
                limit: Some(UPCOMING_LIMIT),
                ..Default::default()
            };
            client
                .competitions()
                .get_all(&filter)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch competitions: {}", err))
        }
    });

    let logged_in = auth.read().is_authenticated();

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-8",
                div {
                    class: "hero bg-base-200 rounded-box py-10",
                    div {
                        class: "hero-content text-center flex-col",
                        h1 { class: "text-3xl font-bold", {SITE_NAME} }
                        p { class: "opacity-70", "Competitions, teams, fixtures and results in one place." }
                        if !logged_in {
                            div {
                                class: "flex gap-2",
                                Link { to: Route::Login {}, class: "btn btn-outline", "Login" }
                                Link { to: Route::Register {}, class: "btn btn-primary", "Create an account" }
                            }
                        }
                    }
                }
                div {
                    class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                    section {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            div {
                                class: "flex justify-between items-center",
                                h2 { class: "card-title", "Upcoming matches" }
                                Link { to: Route::Matches {}, class: "btn btn-sm btn-ghost", "All matches" }
                            }
                            match &*matches.read_unchecked() {
                                Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { title: "No upcoming matches" } },
                                Some(Ok(list)) => rsx! { UpcomingMatches { matches: list.clone() } },
                                Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
                                None => rsx! { span { class: "loading loading-spinner" } },
                            }
                        }
                    }
                    section {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            div {
                                class: "flex justify-between items-center",
                                h2 { class: "card-title", "Competitions" }
                                Link { to: Route::Competitions {}, class: "btn btn-sm btn-ghost", "All competitions" }
                            }
                            match &*competitions.read_unchecked() {
                                Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { title: "No competitions yet" } },
                                Some(Ok(list)) => rsx! { CompetitionCards { competitions: list.clone() } },
                                Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
                                None => rsx! { span { class: "loading loading-spinner" } },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UpcomingMatches(matches: Vec<MatchDto>) -> Element {
    rsx! {
        ul {
            class: "flex flex-col gap-2",
            for game in matches {
                li {
                    class: "flex justify-between items-center p-2 rounded-box bg-base-100",
                    div {
                        p { class: "font-semibold", "{game.fixture()}" }
                        p { class: "text-xs opacity-60", "{format::text(game.competition_name.as_deref())}" }
                    }
                    div {
                        class: "flex items-center gap-2",
                        span { class: "font-mono text-sm", "{format::date_time(game.scheduled_date_time)}" }
                        if let Some(id) = game.id {
                            Link { to: Route::MatchDetail { id }, class: "btn btn-xs", "Details" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CompetitionCards(competitions: Vec<CompetitionDto>) -> Element {
    rsx! {
        ul {
            class: "flex flex-col gap-2",
            for competition in competitions {
                li {
                    class: "flex justify-between items-center p-2 rounded-box bg-base-100",
                    div {
                        p { class: "font-semibold", "{format::text(competition.name.as_deref())}" }
                        p {
                            class: "text-xs opacity-60",
                            "{format::date(competition.start_date)} - {format::date(competition.end_date)}"
                        }
                    }
                    div {
                        class: "flex items-center gap-2",
                        if let Some(status) = &competition.status {
                            span { class: "badge {status.badge_color()}", "{status}" }
                        }
                        if let Some(id) = competition.id {
                            Link { to: Route::CompetitionDetail { id }, class: "btn btn-xs", "Details" }
                        }
                    }
                }
            }
        }
    }
}
