use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::model::player::{PlayerDto, PlayerPerformanceDto};

use crate::client::{
    api::use_client,
    component::{
        page::{ApiErrorPage, EmptyState, ErrorAlert, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    format,
    route::matches::MatchTable,
    router::Route,
};

#[component]
pub fn PlayerDetail(id: i64) -> Element {
    let client = use_client();

    let player = use_resource(use_reactive!(|id| {
        let client = client.clone();
        async move {
            client
                .players()
                .get_by_id(id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch player {}: {}", id, err))
        }
    }));

    let player = match &*player.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(player)) => player.clone(),
    };

    rsx! {
        Title { "{player.display_name()} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-5xl flex flex-col gap-8",
                PlayerHeader { player }
                section {
                    h2 { class: "text-lg mb-2", "Performance" }
                    PlayerPerformance { player_id: id }
                }
                section {
                    h2 { class: "text-lg mb-2", "Matches" }
                    PlayerMatches { player_id: id }
                }
            }
        }
    }
}

#[component]
fn PlayerHeader(player: PlayerDto) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-4",
            if let Some(picture) = &player.profile_picture {
                img { class: "w-20 h-20 rounded-full object-cover", src: "{picture}", alt: "" }
            }
            div {
                class: "flex flex-col gap-1",
                h1 { class: "text-lg sm:text-2xl", "{player.display_name()}" }
                div {
                    class: "flex gap-2 items-center",
                    span { class: "opacity-60", "{format::label(player.position.as_ref())}" }
                    if let Some(status) = &player.status {
                        span { class: "badge {status.badge_color()}", "{status}" }
                    }
                }
                match player.team_id {
                    Some(id) => rsx! {
                        Link { to: Route::TeamDetail { id }, class: "link link-hover", "{format::text(player.team_name.as_deref())}" }
                    },
                    None => rsx! { span { class: "opacity-60", "No team" } },
                }
            }
        }
    }
}

#[component]
fn PlayerPerformance(player_id: i64) -> Element {
    let client = use_client();
    let performance = use_resource(use_reactive!(|player_id| {
        let client = client.clone();
        async move {
            client
                .players()
                .get_performance(player_id, None)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch player performance: {}", err))
        }
    }));

    match &*performance.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { title: "No statistics recorded yet" } },
        Some(Ok(list)) => rsx! {
            div {
                class: "flex flex-col gap-4",
                for entry in list.clone() {
                    PerformanceCard { entry }
                }
            }
        },
    }
}

#[component]
fn PerformanceCard(entry: PlayerPerformanceDto) -> Element {
    let stats = [
        ("Matches", format::number(entry.total_matches)),
        ("Minutes", format::number(entry.total_minutes_played)),
        ("Goals", format::number(entry.total_goals)),
        ("Assists", format::number(entry.total_assists)),
        ("Yellow cards", format::number(entry.total_yellow_cards)),
        ("Red cards", format::number(entry.total_red_cards)),
        ("Pass accuracy", entry.pass_accuracy.map(|p| format!("{:.0}%", p)).unwrap_or_else(|| format::PLACEHOLDER.to_string())),
        ("Rating", entry.rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| format::PLACEHOLDER.to_string())),
    ];

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h3 { class: "card-title text-base", "{format::text(entry.competition_name.as_deref())}" }
                div {
                    class: "stats stats-vertical sm:stats-horizontal flex-wrap",
                    for (title, value) in stats {
                        div {
                            class: "stat",
                            div { class: "stat-title", "{title}" }
                            div { class: "stat-value text-2xl", "{value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlayerMatches(player_id: i64) -> Element {
    let client = use_client();
    let matches = use_resource(use_reactive!(|player_id| {
        let client = client.clone();
        async move {
            client
                .matches()
                .get_by_player(player_id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch player matches: {}", err))
        }
    }));

    match &*matches.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) => rsx! { MatchTable { matches: list.clone() } },
    }
}
