use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::model::{
    competition::CompetitionFilter, matches::MatchFilter, player::PlayerFilter, team::TeamDto,
};

use crate::client::{
    api::use_client,
    component::{
        page::{ApiErrorPage, EmptyState, ErrorAlert, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    format,
    route::{competition::StandingsTable, matches::MatchTable, ProfileLink},
    router::Route,
};

#[component]
pub fn TeamDetail(id: i64) -> Element {
    let client = use_client();

    let team = use_resource(use_reactive!(|id| {
        let client = client.clone();
        async move {
            client
                .teams()
                .get_by_id(id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch team {}: {}", id, err))
        }
    }));

    let team = match &*team.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(team)) => team.clone(),
    };

    rsx! {
        Title { "{format::text(team.name.as_deref())} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-8",
                TeamHeader { team }
                section {
                    h2 { class: "text-lg mb-2", "Squad" }
                    TeamSquad { team_id: id }
                }
                section {
                    h2 { class: "text-lg mb-2", "Standings" }
                    TeamStandings { team_id: id }
                }
                section {
                    h2 { class: "text-lg mb-2", "Competitions" }
                    TeamCompetitions { team_id: id }
                }
                section {
                    h2 { class: "text-lg mb-2", "Matches" }
                    TeamMatches { team_id: id }
                }
            }
        }
    }
}

#[component]
fn TeamHeader(team: TeamDto) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-4",
            if let Some(logo) = &team.logo {
                img { class: "w-16 h-16 rounded-full object-cover", src: "{logo}", alt: "" }
            }
            div {
                h1 { class: "text-lg sm:text-2xl", "{format::text(team.name.as_deref())}" }
                p {
                    class: "opacity-60",
                    "{format::text(team.category.as_deref())} · Coach: "
                    ProfileLink { user_id: team.coach_id, name: team.coach_name.clone() }
                }
                if let Some(description) = &team.description {
                    p { class: "mt-2", "{description}" }
                }
            }
        }
    }
}

#[component]
fn TeamSquad(team_id: i64) -> Element {
    let client = use_client();
    let players = use_resource(use_reactive!(|team_id| {
        let client = client.clone();
        async move {
            let filter = PlayerFilter {
                team_id: Some(team_id),
                ..Default::default()
            };
            client
                .players()
                .get_all(&filter)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch squad: {}", err))
        }
    }));

    match &*players.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { title: "No players registered" } },
        Some(Ok(list)) => rsx! {
            div {
                class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-3",
                for player in list.clone() {
                    div {
                        class: "card card-sm bg-base-200",
                        div {
                            class: "card-body",
                            match player.id {
                                Some(id) => rsx! {
                                    Link { to: Route::PlayerDetail { id }, class: "font-semibold link link-hover", "{player.display_name()}" }
                                },
                                None => rsx! { span { class: "font-semibold", "{player.display_name()}" } },
                            }
                            div {
                                class: "flex gap-2 text-xs",
                                span { class: "opacity-60", "{format::label(player.position.as_ref())}" }
                                if let Some(status) = &player.status {
                                    span { class: "badge badge-xs {status.badge_color()}", "{status}" }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn TeamStandings(team_id: i64) -> Element {
    let client = use_client();
    let standings = use_resource(use_reactive!(|team_id| {
        let client = client.clone();
        async move {
            client
                .teams()
                .get_standings(team_id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch team standings: {}", err))
        }
    }));

    match &*standings.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) => rsx! { StandingsTable { standings: list.clone() } },
    }
}

#[component]
fn TeamCompetitions(team_id: i64) -> Element {
    let client = use_client();
    let competitions = use_resource(use_reactive!(|team_id| {
        let client = client.clone();
        async move {
            client
                .competitions()
                .get_by_team(team_id, &CompetitionFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch team competitions: {}", err))
        }
    }));

    match &*competitions.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { title: "Not registered in any competition" } },
        Some(Ok(list)) => rsx! {
            ul {
                class: "list bg-base-200 rounded-box",
                for competition in list.clone() {
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
                            p { class: "text-xs opacity-60", "{format::date(competition.start_date)} - {format::date(competition.end_date)}" }
                        }
                        if let Some(status) = &competition.status {
                            span { class: "badge {status.badge_color()}", "{status}" }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn TeamMatches(team_id: i64) -> Element {
    let client = use_client();
    let matches = use_resource(use_reactive!(|team_id| {
        let client = client.clone();
        async move {
            client
                .matches()
                .get_by_team(team_id, &MatchFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch team matches: {}", err))
        }
    }));

    match &*matches.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) => rsx! { MatchTable { matches: list.clone() } },
    }
}
