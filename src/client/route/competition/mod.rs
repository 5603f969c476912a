mod detail;

pub use detail::{CompetitionDetail, StandingsTable};

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    listing::SortDirection,
    model::competition::{CompetitionFilter, CompetitionStatus, CompetitionType},
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
pub fn Competitions() -> Element {
    let client = use_client();

    let competitions = use_resource(move || {
        let client = client.clone();
        async move {
            client
                .competitions()
                .get_all(&CompetitionFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch competitions: {}", err))
        }
    });
    let listing = use_listing(use_rows(competitions), "startDate", SortDirection::Desc);

    let body = match &*competitions.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(_)) => listing.page.read().clone(),
    };

    rsx! {
        Title { "Competitions | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl",
                h1 { class: "text-lg sm:text-2xl mb-6", "Competitions" }
                FilterPanel {
                    on_apply: move |_| listing.apply_filters(),
                    on_reset: move |_| listing.reset_filters(),
                    TextFilter { label: "Name", field: "name", filters: listing.filters }
                    TextFilter { label: "Category", field: "category", filters: listing.filters }
                    TextFilter { label: "Location", field: "location", filters: listing.filters }
                    ChoiceFilter {
                        label: "Status",
                        field: "status",
                        options: enum_options!(CompetitionStatus),
                        filters: listing.filters
                    }
                    ChoiceFilter {
                        label: "Type",
                        field: "type",
                        options: enum_options!(CompetitionType),
                        filters: listing.filters
                    }
                    DateRangeFilter { label: "Starts between", field: "startDate", filters: listing.filters }
                }
                if listing.rows.read().is_empty() {
                    EmptyState { title: "No competitions found" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    SortableHeader { label: "Name", field: "name", sort: listing.sort }
                                    SortableHeader { label: "Category", field: "category", sort: listing.sort }
                                    SortableHeader { label: "Type", field: "type", sort: listing.sort }
                                    SortableHeader { label: "Status", field: "status", sort: listing.sort }
                                    SortableHeader { label: "Start", field: "startDate", sort: listing.sort }
                                    SortableHeader { label: "End", field: "endDate", sort: listing.sort }
                                    SortableHeader { label: "Teams", field: "registeredTeams", sort: listing.sort }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for competition in body {
                                    tr {
                                        td { class: "font-semibold", "{format::text(competition.name.as_deref())}" }
                                        td { "{format::text(competition.category.as_deref())}" }
                                        td { "{format::label(competition.competition_type.as_ref())}" }
                                        td {
                                            if let Some(status) = &competition.status {
                                                span { class: "badge {status.badge_color()}", "{status}" }
                                            }
                                        }
                                        td { "{format::date(competition.start_date)}" }
                                        td { "{format::date(competition.end_date)}" }
                                        td { "{format::number(competition.registered_teams)} / {format::number(competition.max_teams)}" }
                                        td {
                                            class: "text-right",
                                            if let Some(id) = competition.id {
                                                Link { to: Route::CompetitionDetail { id }, class: "btn btn-sm btn-ghost", "View" }
                                            }
                                        }
                                    }
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
