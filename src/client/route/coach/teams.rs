use dioxus::prelude::*;

use crate::client::{
    component::{
        page::{ApiErrorPage, EmptyState, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    format,
    router::Route,
};

use super::use_coach_teams;

#[component]
pub fn CoachTeams() -> Element {
    let teams = use_coach_teams();

    let teams = match &*teams.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(teams)) => teams.clone(),
    };

    rsx! {
        Title { "My teams | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-lg sm:text-2xl", "My teams" }
                    Link { to: Route::CoachCreateTeam {}, class: "btn btn-primary btn-sm", "Create a team" }
                }
                if teams.is_empty() {
                    EmptyState { title: "You have no team yet", hint: "Create one to start registering players" }
                } else {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                        for team in teams {
                            div {
                                class: "card bg-base-200",
                                div {
                                    class: "card-body",
                                    div {
                                        class: "flex items-center gap-3",
                                        if let Some(logo) = &team.logo {
                                            img { class: "w-10 h-10 rounded-full object-cover", src: "{logo}", alt: "" }
                                        }
                                        h2 { class: "card-title", "{format::text(team.name.as_deref())}" }
                                    }
                                    p { class: "text-sm opacity-60", "{format::text(team.category.as_deref())}" }
                                    p {
                                        class: "text-sm",
                                        "{format::number(team.player_count)} players · {format::number(team.competition_count)} competitions"
                                    }
                                    if let Some(id) = team.id {
                                        div {
                                            class: "card-actions justify-end",
                                            Link { to: Route::CoachTeamDetail { id }, class: "btn btn-sm", "Manage" }
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
