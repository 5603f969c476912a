//! Pages of the organizer dashboard.
//!
//! Organizers run competitions: they create them, decide on registration and
//! withdrawal requests, schedule matches and validate the sheets coaches submit.

mod competition_detail;
mod competition_form;
mod competitions;
mod create_competition;
mod match_validation;
mod matches;

pub use competition_detail::OrganizerCompetitionDetail;
pub use competitions::OrganizerCompetitions;
pub use create_competition::OrganizerCreateCompetition;
pub use match_validation::OrganizerMatchValidation;
pub use matches::OrganizerMatches;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::competition::{CompetitionFilter, OrganizerCompetitionsResponseDto},
    ApiError,
};

use crate::client::{
    api::use_client,
    component::{
        page::{ApiErrorPage, LoadingPage, ShortcutCard},
        Page,
    },
    constant::SITE_NAME,
    model::auth::use_user_id,
    router::Route,
};

/// Every competition run by the signed-in organizer.
fn use_organizer_competitions() -> Resource<Result<OrganizerCompetitionsResponseDto, ApiError>> {
    let client = use_client();
    let organizer_id = use_user_id();

    use_resource(use_reactive!(|organizer_id| {
        let client = client.clone();
        async move {
            client
                .competitions()
                .get_organizer_competitions(organizer_id, &CompetitionFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch organizer competitions: {}", err))
        }
    }))
}

#[component]
pub fn OrganizerDashboard() -> Element {
    let competitions = use_organizer_competitions();

    let summary = match &*competitions.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(summary)) => summary.clone(),
    };
    let stat = |value: Option<i32>| value.unwrap_or_default();
    let total = stat(summary.total_competitions);
    let upcoming = stat(summary.upcoming_competitions);
    let active = stat(summary.active_competitions);
    let completed = stat(summary.completed_competitions);
    let matches_to_play: i32 = summary
        .competitions
        .iter()
        .filter_map(|c| c.upcoming_matches)
        .sum();

    rsx! {
        Title { "Organizer dashboard | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                h1 { class: "text-lg sm:text-2xl", "Organizer dashboard" }
                div {
                    class: "stats stats-vertical md:stats-horizontal bg-base-200 w-full",
                    div {
                        class: "stat",
                        div { class: "stat-title", "Competitions" }
                        div { class: "stat-value", "{total}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Upcoming" }
                        div { class: "stat-value text-info", "{upcoming}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "In progress" }
                        div { class: "stat-value text-success", "{active}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Completed" }
                        div { class: "stat-value", "{completed}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Matches to play" }
                        div { class: "stat-value text-warning", "{matches_to_play}" }
                    }
                }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                    ShortcutCard { title: "My competitions", text: "Follow and manage your competitions", to: Route::OrganizerCompetitions {} }
                    ShortcutCard { title: "New competition", text: "Open a league, a cup or a tournament", to: Route::OrganizerCreateCompetition {} }
                    ShortcutCard { title: "Matches", text: "Schedule matches and record scores", to: Route::OrganizerMatches {} }
                    ShortcutCard { title: "Match sheets", text: "Validate the line-ups sent by coaches", to: Route::OrganizerMatchValidation {} }
                    ShortcutCard { title: "Messages", text: "Reach the coaches of your competitions", to: Route::Messages {} }
                }
            }
        }
    }
}
