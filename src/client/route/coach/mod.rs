//! Pages of the coach dashboard: teams, players, competition registrations and
//! match sheets.

mod competitions;
mod create_team;
mod match_sheet_editor;
mod match_sheets;
mod players;
mod register_player;
mod team_detail;
mod teams;
mod transfer_player;

pub use competitions::CoachCompetitions;
pub use create_team::CoachCreateTeam;
pub use match_sheet_editor::CoachMatchSheetEditor;
pub use match_sheets::CoachMatchSheets;
pub use players::CoachPlayers;
pub use register_player::CoachRegisterPlayer;
pub use team_detail::CoachTeamDetail;
pub use teams::CoachTeams;
pub use transfer_player::CoachTransferPlayer;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{model::team::TeamDto, ApiError};

use crate::client::{
    api::use_client,
    component::{form::Field, page::ShortcutCard, Page},
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

/// Teams managed by the signed-in coach.
fn use_coach_teams() -> Resource<Result<Vec<TeamDto>, ApiError>> {
    let client = use_client();
    let coach_id = use_user_id();

    use_resource(use_reactive!(|coach_id| {
        let client = client.clone();
        async move {
            client
                .teams()
                .get_coach_teams(coach_id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch coach teams: {}", err))
        }
    }))
}

/// Select bound to a team id, among the coach's teams.
#[component]
fn TeamSelect(
    label: String,
    teams: Vec<TeamDto>,
    mut selected: Signal<Option<i64>>,
    error: Option<String>,
) -> Element {
    let current = selected();

    rsx! {
        Field {
            label,
            error,
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| selected.set(evt.value().parse().ok()),
                option { value: "", selected: current.is_none(), "Choose a team" }
                for team in teams {
                    if let Some(id) = team.id {
                        option {
                            value: "{id}",
                            selected: current == Some(id),
                            "{format::text(team.name.as_deref())}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CoachDashboard() -> Element {
    let client = use_client();
    let coach_id = use_user_id();
    let teams = use_coach_teams();

    let players = use_resource({
        let client = client.clone();
        use_reactive!(|coach_id| {
            let client = client.clone();
            async move {
                client
                    .players()
                    .get_coach_players(coach_id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch coach players: {}", err))
            }
        })
    });

    let sheets = use_resource({
        let client = client.clone();
        use_reactive!(|coach_id| {
            let client = client.clone();
            async move {
                client
                    .matches()
                    .get_coach_sheets(coach_id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch coach match sheets: {}", err))
            }
        })
    });

    let requests = use_resource(use_reactive!(|coach_id| {
        let client = client.clone();
        async move {
            client
                .competitions()
                .get_coach_requests(coach_id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch competition requests: {}", err))
        }
    }));

    let count = |value: Option<usize>| value.map(|v| v.to_string()).unwrap_or_else(|| format::PLACEHOLDER.to_string());
    let team_count = count(teams.read().as_ref().and_then(|r| r.as_ref().ok()).map(Vec::len));
    let player_count = count(players.read().as_ref().and_then(|r| r.as_ref().ok()).map(Vec::len));
    let pending_requests = count(
        requests
            .read()
            .as_ref()
            .and_then(|r| r.as_ref().ok())
            .map(|list| list.iter().filter(|r| r.is_pending()).count()),
    );
    let (pending_sheets, validated_sheets) = match &*sheets.read_unchecked() {
        Some(Ok(summary)) => (
            summary.pending_match_sheets.to_string(),
            summary.validated_match_sheets.to_string(),
        ),
        _ => (format::PLACEHOLDER.to_string(), format::PLACEHOLDER.to_string()),
    };

    rsx! {
        Title { "Coach dashboard | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                h1 { class: "text-lg sm:text-2xl", "Coach dashboard" }
                div {
                    class: "stats stats-vertical md:stats-horizontal bg-base-200 w-full",
                    div {
                        class: "stat",
                        div { class: "stat-title", "Teams" }
                        div { class: "stat-value", "{team_count}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Players" }
                        div { class: "stat-value", "{player_count}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Sheets to complete" }
                        div { class: "stat-value text-warning", "{pending_sheets}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Validated sheets" }
                        div { class: "stat-value text-success", "{validated_sheets}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Pending requests" }
                        div { class: "stat-value", "{pending_requests}" }
                    }
                }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                    ShortcutCard { title: "My teams", text: "Create and manage your teams", to: Route::CoachTeams {} }
                    ShortcutCard { title: "Players", text: "Register, update and transfer players", to: Route::CoachPlayers {} }
                    ShortcutCard { title: "Competitions", text: "Register or withdraw your teams", to: Route::CoachCompetitions {} }
                    ShortcutCard { title: "Match sheets", text: "Prepare line-ups before each match", to: Route::CoachMatchSheets {} }
                    ShortcutCard { title: "Messages", text: "Talk to your players and organizers", to: Route::Messages {} }
                }
            }
        }
    }
}
