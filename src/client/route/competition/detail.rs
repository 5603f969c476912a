use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    listing::{SortConfig, SortDirection},
    model::{
        competition::CompetitionDto,
        matches::MatchFilter,
        team::{StandingDto, TeamFilter},
    },
};

use crate::client::{
    api::use_client,
    component::{
        listing::SortableHeader,
        page::{ApiErrorPage, EmptyState, ErrorAlert, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    format,
    route::{matches::MatchTable, ProfileLink},
    router::Route,
};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Overview,
    Standings,
    Teams,
    Matches,
}

#[component]
pub fn CompetitionDetail(id: i64) -> Element {
    let client = use_client();
    let mut tab = use_signal(|| Tab::Overview);

    let competition = use_resource(use_reactive!(|id| {
        let client = client.clone();
        async move {
            client
                .competitions()
                .get_by_id(id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch competition {}: {}", id, err))
        }
    }));

    let competition = match &*competition.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(competition)) => competition.clone(),
    };

    let tab_class = move |t: Tab| if tab() == t { "tab tab-active" } else { "tab" };

    rsx! {
        Title { "{format::text(competition.name.as_deref())} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                CompetitionHeader { competition: competition.clone() }
                div {
                    role: "tablist",
                    class: "tabs tabs-border",
                    button { role: "tab", class: tab_class(Tab::Overview), onclick: move |_| tab.set(Tab::Overview), "Overview" }
                    button { role: "tab", class: tab_class(Tab::Standings), onclick: move |_| tab.set(Tab::Standings), "Standings" }
                    button { role: "tab", class: tab_class(Tab::Teams), onclick: move |_| tab.set(Tab::Teams), "Teams" }
                    button { role: "tab", class: tab_class(Tab::Matches), onclick: move |_| tab.set(Tab::Matches), "Matches" }
                }
                match tab() {
                    Tab::Overview => rsx! { CompetitionOverview { competition: competition.clone() } },
                    Tab::Standings => rsx! { CompetitionStandings { competition_id: id } },
                    Tab::Teams => rsx! { CompetitionTeams { competition_id: id } },
                    Tab::Matches => rsx! { CompetitionMatches { competition_id: id } },
                }
            }
        }
    }
}

#[component]
fn CompetitionHeader(competition: CompetitionDto) -> Element {
    rsx! {
        div {
            class: "flex flex-wrap justify-between items-center gap-4",
            div {
                h1 { class: "text-lg sm:text-2xl", "{format::text(competition.name.as_deref())}" }
                p {
                    class: "opacity-60",
                    "{format::label(competition.competition_type.as_ref())} · {format::text(competition.category.as_deref())}"
                }
            }
            if let Some(status) = &competition.status {
                span { class: "badge badge-lg {status.badge_color()}", "{status}" }
            }
        }
    }
}

#[component]
fn CompetitionOverview(competition: CompetitionDto) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-3 gap-6",
            div {
                class: "card bg-base-200 md:col-span-2",
                div {
                    class: "card-body prose max-w-none",
                    match competition.description.as_deref().filter(|d| !d.trim().is_empty()) {
                        Some(description) => rsx! { div { dangerous_inner_html: "{format::markdown(description)}" } },
                        None => rsx! { span { class: "opacity-50 italic", "No description provided" } },
                    }
                }
            }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    dl {
                        class: "grid grid-cols-2 gap-2 text-sm",
                        dt { class: "opacity-60", "Start" }
                        dd { "{format::date(competition.start_date)}" }
                        dt { class: "opacity-60", "End" }
                        dd { "{format::date(competition.end_date)}" }
                        dt { class: "opacity-60", "Location" }
                        dd { "{format::text(competition.location.as_deref())}" }
                        dt { class: "opacity-60", "Teams" }
                        dd { "{format::number(competition.registered_teams)} / {format::number(competition.max_teams)}" }
                        dt { class: "opacity-60", "Organizer" }
                        dd {
                            ProfileLink { user_id: competition.organizer_id, name: competition.organizer_name.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// League table; also used on the team page.
#[component]
pub fn StandingsTable(standings: Vec<StandingDto>) -> Element {
    let sort = use_signal(|| SortConfig::new("position", SortDirection::Asc));
    let rows = sort.read().sorted(standings);

    rsx! {
        if rows.is_empty() {
            EmptyState { title: "No standings yet" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            SortableHeader { label: "#", field: "position", sort }
                            SortableHeader { label: "Team", field: "teamName", sort }
                            SortableHeader { label: "P", field: "matchesPlayed", sort }
                            SortableHeader { label: "W", field: "wins", sort }
                            SortableHeader { label: "D", field: "draws", sort }
                            SortableHeader { label: "L", field: "losses", sort }
                            SortableHeader { label: "GF", field: "goalsFor", sort }
                            SortableHeader { label: "GA", field: "goalsAgainst", sort }
                            SortableHeader { label: "GD", field: "goalDifference", sort }
                            SortableHeader { label: "Pts", field: "points", sort }
                            th { "Form" }
                        }
                    }
                    tbody {
                        for standing in rows {
                            tr {
                                td { "{format::number(standing.position)}" }
                                td {
                                    class: "font-semibold",
                                    match standing.team_id {
                                        Some(id) => rsx! { Link { to: Route::TeamDetail { id }, "{format::text(standing.team_name.as_deref())}" } },
                                        None => rsx! { "{format::text(standing.team_name.as_deref())}" },
                                    }
                                }
                                td { "{format::number(standing.matches_played)}" }
                                td { "{format::number(standing.wins)}" }
                                td { "{format::number(standing.draws)}" }
                                td { "{format::number(standing.losses)}" }
                                td { "{format::number(standing.goals_for)}" }
                                td { "{format::number(standing.goals_against)}" }
                                td { "{format::number(standing.goal_difference)}" }
                                td { class: "font-bold", "{format::number(standing.points)}" }
                                td {
                                    div {
                                        class: "flex gap-1",
                                        for result in standing.form_results() {
                                            span {
                                                class: match result {
                                                    'W' => "badge badge-xs badge-success",
                                                    'D' => "badge badge-xs badge-warning",
                                                    _ => "badge badge-xs badge-error",
                                                },
                                                "{result}"
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
}

#[component]
fn CompetitionStandings(competition_id: i64) -> Element {
    let client = use_client();
    let standings = use_resource(use_reactive!(|competition_id| {
        let client = client.clone();
        async move {
            client
                .teams()
                .get_competition_standings(competition_id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch standings: {}", err))
        }
    }));

    match &*standings.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) => rsx! { StandingsTable { standings: list.clone() } },
    }
}

#[component]
fn CompetitionTeams(competition_id: i64) -> Element {
    let client = use_client();
    let teams = use_resource(use_reactive!(|competition_id| {
        let client = client.clone();
        async move {
            client
                .teams()
                .get_by_competition(competition_id, &TeamFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch competition teams: {}", err))
        }
    }));

    match &*teams.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { title: "No teams registered yet" } },
        Some(Ok(list)) => rsx! {
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                for team in list.clone() {
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            h3 { class: "card-title", "{format::text(team.name.as_deref())}" }
                            p {
                                class: "text-sm opacity-60",
                                "Coach: "
                                ProfileLink { user_id: team.coach_id, name: team.coach_name.clone() }
                            }
                            if let Some(id) = team.id {
                                div {
                                    class: "card-actions justify-end",
                                    Link { to: Route::TeamDetail { id }, class: "btn btn-sm", "View team" }
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
fn CompetitionMatches(competition_id: i64) -> Element {
    let client = use_client();
    let matches = use_resource(use_reactive!(|competition_id| {
        let client = client.clone();
        async move {
            client
                .matches()
                .get_by_competition(competition_id, &MatchFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch competition matches: {}", err))
        }
    }));

    match &*matches.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) => rsx! { MatchTable { matches: list.clone() } },
    }
}
