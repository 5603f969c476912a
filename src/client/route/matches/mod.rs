mod detail;

pub use detail::MatchDetail;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    listing::SortDirection,
    model::matches::{MatchDto, MatchFilter, MatchParticipantDto, MatchStatus},
};

use crate::client::{
    api::use_client,
    component::{
        listing::{
            enum_options, use_listing, use_rows, ChoiceFilter, DateRangeFilter, FilterPanel,
            SortableHeader, TextFilter,
        },
        page::{ApiErrorPage, EmptyState, LoadingPage},
        Page, PaginationControls,
    },
    constant::SITE_NAME,
    format,
    router::Route,
};

#[component]
pub fn Matches() -> Element {
    let client = use_client();

    let matches = use_resource(move || {
        let client = client.clone();
        async move {
            client
                .matches()
                .get_all(&MatchFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch matches: {}", err))
        }
    });
    let listing = use_listing(use_rows(matches), "scheduledDateTime", SortDirection::Desc);

    let body = match &*matches.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(_)) => listing.page.read().clone(),
    };

    rsx! {
        Title { "Matches | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl",
                h1 { class: "text-lg sm:text-2xl mb-6", "Matches" }
                FilterPanel {
                    on_apply: move |_| listing.apply_filters(),
                    on_reset: move |_| listing.reset_filters(),
                    TextFilter { label: "Title", field: "title", filters: listing.filters }
                    TextFilter { label: "Competition", field: "competitionName", filters: listing.filters }
                    TextFilter { label: "Team", field: "teamName", filters: listing.filters }
                    ChoiceFilter {
                        label: "Status",
                        field: "status",
                        options: enum_options!(MatchStatus),
                        filters: listing.filters
                    }
                    DateRangeFilter { label: "Played between", field: "scheduledDateTime", filters: listing.filters }
                }
                if listing.rows.read().is_empty() {
                    EmptyState { title: "No matches found" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    SortableHeader { label: "Date", field: "scheduledDateTime", sort: listing.sort }
                                    SortableHeader { label: "Competition", field: "competitionName", sort: listing.sort }
                                    SortableHeader { label: "Round", field: "round", sort: listing.sort }
                                    SortableHeader { label: "Home", field: "homeTeam", sort: listing.sort }
                                    th { "Score" }
                                    SortableHeader { label: "Away", field: "awayTeam", sort: listing.sort }
                                    SortableHeader { label: "Status", field: "status", sort: listing.sort }
                                    th {}
                                }
                            }
                            tbody {
                                for game in body {
                                    MatchRow { game, show_competition: true }
                                }
                            }
                        }
                    }
                    PaginationControls { pagination: listing.pagination }
                }
            }
        }
    }
}

#[component]
fn MatchRow(game: MatchDto, show_competition: bool) -> Element {
    let team = |p: Option<&MatchParticipantDto>| format::text(p.and_then(|p| p.team_name.as_deref()));
    let home = team(game.home_team());
    let away = team(game.away_team());
    let score = game.score().unwrap_or_else(|| format::PLACEHOLDER.to_string());

    rsx! {
        tr {
            td { class: "whitespace-nowrap", "{format::date_time(game.scheduled_date_time)}" }
            if show_competition {
                td { "{format::text(game.competition_name.as_deref())}" }
            }
            td { "{format::number(game.round)}" }
            td { class: "font-semibold", "{home}" }
            td { class: "font-mono", "{score}" }
            td { class: "font-semibold", "{away}" }
            td {
                if let Some(status) = &game.status {
                    span { class: "badge {status.badge_color()}", "{status}" }
                }
            }
            td {
                class: "text-right",
                if let Some(id) = game.id {
                    Link { to: Route::MatchDetail { id }, class: "btn btn-sm btn-ghost", "View" }
                }
            }
        }
    }
}

/// Compact fixture list used inside competition, team and player pages.
#[component]
pub fn MatchTable(matches: Vec<MatchDto>) -> Element {
    let mut matches = matches;
    matches.sort_by_key(|m| m.scheduled_date_time);

    rsx! {
        if matches.is_empty() {
            EmptyState { title: "No matches scheduled" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Round" }
                            th { "Home" }
                            th { "Score" }
                            th { "Away" }
                            th { "Status" }
                            th {}
                        }
                    }
                    tbody {
                        for game in matches {
                            MatchRow { game, show_competition: false }
                        }
                    }
                }
            }
        }
    }
}
