use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    listing::SortDirection,
    model::player::{PlayerDto, PlayerPosition, PlayerStatus, UpdatePlayerDto},
};

use crate::client::{
    api::use_client,
    component::{
        listing::{
            enum_options, use_listing, use_rows, ChoiceFilter, FilterPanel, SortableHeader,
            TextFilter,
        },
        page::{ApiErrorPage, EmptyState, ErrorAlert, LoadingPage},
        ConfirmationModal, Page, PaginationControls,
    },
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

#[component]
pub fn CoachPlayers() -> Element {
    let client = use_client();
    let coach_id = use_user_id();

    let mut removing = use_signal(|| None::<i64>);
    let mut show_remove = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);

    let mut players = use_resource({
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
    let listing = use_listing(use_rows(players), "lastName", SortDirection::Asc);

    let on_remove = {
        let client = client.clone();
        move |_| {
            let Some(player_id) = removing() else {
                return;
            };
            let client = client.clone();
            processing.set(true);
            spawn(async move {
                match client.players().remove(coach_id, player_id).await {
                    Ok(()) => players.restart(),
                    Err(err) => {
                        tracing::error!("Failed to remove player {}: {}", player_id, err);
                        failure.set(Some(err.user_message()));
                    }
                }
                processing.set(false);
                show_remove.set(false);
            });
        }
    };

    let on_status = use_callback(move |(player_id, status): (i64, PlayerStatus)| {
        let client = client.clone();
        let update = UpdatePlayerDto {
            id: player_id,
            status: Some(status),
            ..Default::default()
        };
        spawn(async move {
            match client.players().update(coach_id, &update).await {
                Ok(_) => players.restart(),
                Err(err) => {
                    tracing::error!("Failed to update player {}: {}", player_id, err);
                    failure.set(Some(err.user_message()));
                }
            }
        });
    });

    let body = match &*players.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(_)) => listing.page.read().clone(),
    };

    rsx! {
        Title { "My players | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-4",
                div {
                    class: "flex flex-wrap justify-between items-center gap-2",
                    h1 { class: "text-lg sm:text-2xl", "My players" }
                    div {
                        class: "flex gap-2",
                        Link { to: Route::CoachTransferPlayer {}, class: "btn btn-sm", "Transfer" }
                        Link { to: Route::CoachRegisterPlayer {}, class: "btn btn-sm btn-primary", "Register a player" }
                    }
                }
                if let Some(message) = failure() {
                    ErrorAlert { message }
                }
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
                                    SortableHeader { label: "Team", field: "teamName", sort: listing.sort }
                                    SortableHeader { label: "Position", field: "position", sort: listing.sort }
                                    SortableHeader { label: "Status", field: "status", sort: listing.sort }
                                    th {}
                                }
                            }
                            tbody {
                                for player in body {
                                    PlayerRow {
                                        on_status,
                                        on_remove: move |id| {
                                            removing.set(Some(id));
                                            show_remove.set(true);
                                        },
                                        player,
                                    }
                                }
                            }
                        }
                    }
                    PaginationControls { pagination: listing.pagination }
                }
            }
            ConfirmationModal {
                show: show_remove,
                title: "Remove player",
                message: "The player will be removed from your roster.",
                confirm_text: "Remove",
                is_processing: processing(),
                on_confirm: on_remove,
            }
        }
    }
}

#[component]
fn PlayerRow(
    player: PlayerDto,
    on_status: EventHandler<(i64, PlayerStatus)>,
    on_remove: EventHandler<i64>,
) -> Element {
    let Some(id) = player.id else {
        return rsx!();
    };

    rsx! {
        tr {
            td {
                Link { to: Route::PlayerDetail { id }, class: "font-semibold link link-hover", "{format::text(player.last_name.as_deref())}" }
            }
            td { "{format::text(player.first_name.as_deref())}" }
            td { "{format::text(player.team_name.as_deref())}" }
            td { "{format::label(player.position.as_ref())}" }
            td {
                select {
                    class: "select select-bordered select-xs",
                    onchange: move |evt| on_status.call((id, PlayerStatus::from_wire(&evt.value()))),
                    if player.status.is_none() {
                        option { value: "", selected: true, "-" }
                    }
                    for status in PlayerStatus::variants() {
                        option {
                            value: "{status.as_str()}",
                            selected: player.status.as_ref() == Some(&status),
                            "{status}"
                        }
                    }
                }
            }
            td {
                class: "text-right",
                button {
                    class: "btn btn-xs btn-error btn-outline",
                    onclick: move |_| on_remove.call(id),
                    "Remove"
                }
            }
        }
    }
}
