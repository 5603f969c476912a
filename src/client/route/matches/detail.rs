use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::{match_sheet::{MatchSheetDto, PlayerParticipationDto}, matches::MatchDto},
    validation::match_sheet::MatchSheetSummary,
};

use crate::client::{
    api::use_client,
    component::{
        page::{ApiErrorPage, EmptyState, ErrorAlert, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    format,
    router::Route,
};

#[component]
pub fn MatchDetail(id: i64) -> Element {
    let client = use_client();

    let game = use_resource(use_reactive!(|id| {
        let client = client.clone();
        async move {
            client
                .matches()
                .get_by_id(id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch match {}: {}", id, err))
        }
    }));

    let game = match &*game.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(game)) => game.clone(),
    };

    rsx! {
        Title { "{game.fixture()} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-5xl flex flex-col gap-6",
                Scoreboard { game: game.clone() }
                MatchSheets { match_id: id }
            }
        }
    }
}

#[component]
fn Scoreboard(game: MatchDto) -> Element {
    let home = game.home_team().cloned().unwrap_or_default();
    let away = game.away_team().cloned().unwrap_or_default();
    let score = game.score().unwrap_or_else(|| "vs".to_string());

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body items-center text-center gap-4",
                p {
                    class: "text-sm opacity-60",
                    if let Some(competition_id) = game.competition_id {
                        Link {
                            to: Route::CompetitionDetail { id: competition_id },
                            class: "link",
                            "{format::text(game.competition_name.as_deref())}"
                        }
                    }
                    if let Some(round) = game.round {
                        " · Round {round}"
                    }
                }
                div {
                    class: "grid grid-cols-3 items-center w-full",
                    TeamName { team_id: home.team_id, name: format::text(home.team_name.as_deref()) }
                    p {
                        class: "text-4xl font-bold font-mono",
                        "{score}"
                    }
                    TeamName { team_id: away.team_id, name: format::text(away.team_name.as_deref()) }
                }
                div {
                    class: "flex gap-2 items-center",
                    span { "{format::date_time(game.scheduled_date_time)}" }
                    if let Some(status) = &game.status {
                        span { class: "badge {status.badge_color()}", "{status}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamName(team_id: Option<i64>, name: String) -> Element {
    rsx! {
        h2 {
            class: "text-xl font-semibold",
            match team_id {
                Some(id) => rsx! { Link { to: Route::TeamDetail { id }, class: "link link-hover", "{name}" } },
                None => rsx! { "{name}" },
            }
        }
    }
}

#[component]
fn MatchSheets(match_id: i64) -> Element {
    let client = use_client();

    let sheets = use_resource(use_reactive!(|match_id| {
        let client = client.clone();
        async move {
            client
                .matches()
                .get_sheets_by_match(match_id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch match sheets: {}", err))
        }
    }));

    rsx! {
        h2 { class: "text-lg", "Line-ups" }
        match &*sheets.read_unchecked() {
            None => rsx! { span { class: "loading loading-spinner" } },
            Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                EmptyState { title: "No line-ups published yet" }
            },
            Some(Ok(list)) => rsx! {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    for sheet in list.clone() {
                        SheetCard { sheet }
                    }
                }
            },
        }
    }
}

#[component]
fn SheetCard(sheet: MatchSheetDto) -> Element {
    let MatchSheetSummary {
        starters,
        substitutes,
        injured,
        suspended,
        expelled,
        reserves,
        ..
    } = MatchSheetSummary::new(&sheet.player_participations);
    let unavailable = [injured, suspended, expelled].concat();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-3",
                div {
                    class: "flex justify-between items-center",
                    h3 { class: "card-title", "{format::text(sheet.team_name.as_deref())}" }
                    if let Some(status) = &sheet.status {
                        span { class: "badge {status.badge_color()}", "{status}" }
                    }
                }
                LineupGroup { title: "Starters", players: starters }
                LineupGroup { title: "Substitutes", players: substitutes }
                LineupGroup { title: "Reserves", players: reserves }
                LineupGroup { title: "Unavailable", players: unavailable }
                if let Some(strategy) = sheet.strategy.as_deref().filter(|s| !s.trim().is_empty()) {
                    div {
                        class: "text-sm",
                        span { class: "font-semibold", "Strategy: " }
                        "{strategy}"
                    }
                }
            }
        }
    }
}

#[component]
fn LineupGroup(title: String, players: Vec<PlayerParticipationDto>) -> Element {
    if players.is_empty() {
        return rsx!();
    }

    rsx! {
        div {
            p { class: "text-xs uppercase opacity-60 mb-1", "{title} ({players.len()})" }
            ul {
                class: "text-sm",
                for player in players {
                    li {
                        class: "flex gap-2",
                        span { class: "font-mono w-6 text-right", "{format::number(player.shirt_number)}" }
                        span { "{format::text(player.player_name.as_deref())}" }
                        span { class: "opacity-60", "{format::label(player.position.as_ref())}" }
                    }
                }
            }
        }
    }
}
