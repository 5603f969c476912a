mod detail;

pub use detail::TeamDetail;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{listing::SortDirection, model::team::TeamFilter};

use crate::client::{
    api::use_client,
    component::{
        listing::{use_listing, use_rows, FilterPanel, SortableHeader, TextFilter},
        page::{ApiErrorPage, EmptyState, LoadingPage},
        Page, PaginationControls,
    },
    constant::SITE_NAME,
    format,
    route::ProfileLink,
    router::Route,
};

#[component]
pub fn Teams() -> Element {
    let client = use_client();

    let teams = use_resource(move || {
        let client = client.clone();
        async move {
            client
                .teams()
                .get_all(&TeamFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch teams: {}", err))
        }
    });
    let listing = use_listing(use_rows(teams), "name", SortDirection::Asc);

    let body = match &*teams.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(_)) => listing.page.read().clone(),
    };

    rsx! {
        Title { "Teams | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl",
                h1 { class: "text-lg sm:text-2xl mb-6", "Teams" }
                FilterPanel {
                    on_apply: move |_| listing.apply_filters(),
                    on_reset: move |_| listing.reset_filters(),
                    TextFilter { label: "Name", field: "name", filters: listing.filters }
                    TextFilter { label: "Category", field: "category", filters: listing.filters }
                    TextFilter { label: "Coach", field: "coachName", filters: listing.filters }
                }
                if listing.rows.read().is_empty() {
                    EmptyState { title: "No teams found" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    SortableHeader { label: "Name", field: "name", sort: listing.sort }
                                    SortableHeader { label: "Category", field: "category", sort: listing.sort }
                                    SortableHeader { label: "Coach", field: "coachName", sort: listing.sort }
                                    SortableHeader { label: "Players", field: "playerCount", sort: listing.sort }
                                    SortableHeader { label: "Competitions", field: "competitionCount", sort: listing.sort }
                                    th {}
                                }
                            }
                            tbody {
                                for team in body {
                                    tr {
                                        td {
                                            div {
                                                class: "flex items-center gap-3",
                                                if let Some(logo) = &team.logo {
                                                    img { class: "w-8 h-8 rounded-full object-cover", src: "{logo}", alt: "" }
                                                }
                                                span { class: "font-semibold", "{format::text(team.name.as_deref())}" }
                                            }
                                        }
                                        td { "{format::text(team.category.as_deref())}" }
                                        td {
                                            ProfileLink { user_id: team.coach_id, name: team.coach_name.clone() }
                                        }
                                        td { "{format::number(team.player_count)}" }
                                        td { "{format::number(team.competition_count)}" }
                                        td {
                                            class: "text-right",
                                            if let Some(id) = team.id {
                                                Link { to: Route::TeamDetail { id }, class: "btn btn-sm btn-ghost", "View" }
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
