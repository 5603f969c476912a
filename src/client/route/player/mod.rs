mod detail;

pub use detail::PlayerDetail;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    listing::SortDirection,
    model::player::{PlayerFilter, PlayerPosition, PlayerStatus},
};

use crate::client::{
    api::use_client,
    component::{
        listing::{
            enum_options, use_listing, use_rows, ChoiceFilter, FilterPanel, SortableHeader,
            TextFilter,
        },
        page::{ApiErrorPage, EmptyState, LoadingPage},
        Page, PaginationControls,
    },
    constant::SITE_NAME,
    format,
    router::Route,
};

#[component]
pub fn Players() -> Element {
    let client = use_client();

    let players = use_resource(move || {
        let client = client.clone();
        async move {
            client
                .players()
                .get_all(&PlayerFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch players: {}", err))
        }
    });
    let listing = use_listing(use_rows(players), "lastName", SortDirection::Asc);

    let body = match &*players.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(_)) => listing.page.read().clone(),
    };

    rsx! {
        Title { "Players | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl",
                h1 { class: "text-lg sm:text-2xl mb-6", "Players" }
                FilterPanel {
                    on_apply: move |_| listing.apply_filters(),
                    on_reset: move |_| listing.reset_filters(),
                    TextFilter { label: "Name", field: "name", filters: listing.filters }
                    TextFilter { label: "Team", field: "teamName", filters: listing.filters }
                    ChoiceFilter {
                        label: "Position",
                        field: "position",
                        options: enum_options!(PlayerPosition),
                        filters: listing.filters
                    }
                    ChoiceFilter {
                        label: "Status",
                        field: "status",
                        options: enum_options!(PlayerStatus),
                        filters: listing.filters
                    }
                }
                if listing.rows.read().is_empty() {
                    EmptyState { title: "No players found" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    SortableHeader { label: "Last name", field: "lastName", sort: listing.sort }
                                    SortableHeader { label: "First name", field: "firstName", sort: listing.sort }
                                    SortableHeader { label: "Position", field: "position", sort: listing.sort }
                                    SortableHeader { label: "Team", field: "teamName", sort: listing.sort }
                                    SortableHeader { label: "Status", field: "status", sort: listing.sort }
                                    SortableHeader { label: "Born", field: "dateOfBirth", sort: listing.sort }
                                    th {}
                                }
                            }
                            tbody {
                                for player in body {
                                    tr {
                                        td { class: "font-semibold", "{format::text(player.last_name.as_deref())}" }
                                        td { "{format::text(player.first_name.as_deref())}" }
                                        td { "{format::label(player.position.as_ref())}" }
                                        td { "{format::text(player.team_name.as_deref())}" }
                                        td {
                                            if let Some(status) = &player.status {
                                                span { class: "badge {status.badge_color()}", "{status}" }
                                            }
                                        }
                                        td { "{format::date(player.date_of_birth)}" }
                                        td {
                                            class: "text-right",
                                            if let Some(id) = player.id {
                                                Link { to: Route::PlayerDetail { id }, class: "btn btn-sm btn-ghost", "View" }
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
