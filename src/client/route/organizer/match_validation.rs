use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    listing::SortDirection,
    model::{
        competition::CompetitionFilter,
        match_sheet::{
            MatchSheetDto, MatchSheetStatus, MatchSheetValidationDto, PlayerParticipationDto,
        },
        matches::MatchFilter,
    },
    validation::match_sheet::MatchSheetSummary,
    ApiError,
};

use crate::client::{
    api::{use_client, Client},
    component::{
        form::Field,
        listing::{use_listing, use_rows, DateRangeFilter, FilterPanel, SortableHeader, TextFilter},
        page::{ApiErrorPage, EmptyState, ErrorAlert, LoadingPage, SuccessAlert},
        Modal, Page, PaginationControls,
    },
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

/// Sheets awaiting a decision, across every match of the organizer's competitions.
///
/// There is no organizer-wide endpoint for them, so competitions and matches are
/// walked one request at a time.
async fn load_submitted_sheets(client: Client, organizer_id: i64) -> Result<Vec<MatchSheetDto>, ApiError> {
    let summary = client
        .competitions()
        .get_organizer_competitions(organizer_id, &CompetitionFilter::default())
        .await?;

    let mut submitted = Vec::new();
    for competition_id in summary.competitions.iter().filter_map(|c| c.id) {
        let games = client
            .matches()
            .get_by_competition(competition_id, &MatchFilter::default())
            .await?;
        for match_id in games.iter().filter_map(|g| g.id) {
            let sheets = client.matches().get_sheets_by_match(match_id).await?;
            submitted.extend(
                sheets
                    .into_iter()
                    .filter(|s| s.status == Some(MatchSheetStatus::Submitted)),
            );
        }
    }

    Ok(submitted)
}

#[component]
pub fn OrganizerMatchValidation() -> Element {
    let client = use_client();
    let organizer_id = use_user_id();

    let mut reviewing = use_signal(|| None::<MatchSheetDto>);
    let mut show_review = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut notice = use_signal(|| None::<Result<String, String>>);

    let mut sheets = use_resource({
        let client = client.clone();
        use_reactive!(|organizer_id| {
            let client = client.clone();
            async move {
                load_submitted_sheets(client, organizer_id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch submitted match sheets: {}", err))
            }
        })
    });
    let listing = use_listing(use_rows(sheets), "matchDateTime", SortDirection::Asc);

    let on_decide = move |(validation, comments): (MatchSheetValidationDto, Option<String>)| {
        let client = client.clone();
        processing.set(true);
        spawn(async move {
            match client
                .matches()
                .validate_sheet(organizer_id, &validation, comments.as_deref())
                .await
            {
                Ok(_) => {
                    let message = if validation.is_approved {
                        "Match sheet validated"
                    } else {
                        "Match sheet rejected"
                    };
                    notice.set(Some(Ok(message.to_string())));
                    sheets.restart();
                }
                Err(err) => {
                    tracing::error!("Failed to validate match sheet {}: {}", validation.match_sheet_id, err);
                    notice.set(Some(Err(err.user_message())));
                }
            }
            processing.set(false);
            show_review.set(false);
        });
    };

    let page = match &*sheets.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(_)) => listing.page.read().clone(),
    };
    let no_rows = listing.rows.read().is_empty();

    rsx! {
        Title { "Match sheet validation | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-4",
                h1 { class: "text-lg sm:text-2xl", "Match sheet validation" }
                match notice() {
                    Some(Ok(message)) => rsx! { SuccessAlert { message } },
                    Some(Err(message)) => rsx! { ErrorAlert { message } },
                    None => rsx! {},
                }
                FilterPanel {
                    on_apply: move |_| listing.apply_filters(),
                    on_reset: move |_| listing.reset_filters(),
                    TextFilter { label: "Competition", field: "competitionName", filters: listing.filters }
                    TextFilter { label: "Team", field: "teamName", filters: listing.filters }
                    DateRangeFilter { label: "Match date", field: "matchDateTime", filters: listing.filters }
                }
                if no_rows {
                    EmptyState {
                        title: "No match sheets awaiting validation",
                        hint: "Sheets appear here once coaches submit them",
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    SortableHeader { label: "Match date", field: "matchDateTime", sort: listing.sort }
                                    SortableHeader { label: "Match", field: "matchTitle", sort: listing.sort }
                                    SortableHeader { label: "Competition", field: "competitionName", sort: listing.sort }
                                    SortableHeader { label: "Team", field: "teamName", sort: listing.sort }
                                    SortableHeader { label: "Submitted", field: "submittedAt", sort: listing.sort }
                                    th {}
                                }
                            }
                            tbody {
                                for sheet in page {
                                    tr {
                                        td { "{format::date_time(sheet.match_date_time)}" }
                                        td {
                                            match sheet.match_id {
                                                Some(id) => rsx! {
                                                    Link { to: Route::MatchDetail { id }, class: "link link-hover", "{format::text(sheet.match_title.as_deref())}" }
                                                },
                                                None => rsx! { "{format::text(sheet.match_title.as_deref())}" },
                                            }
                                        }
                                        td { "{format::text(sheet.competition_name.as_deref())}" }
                                        td { "{format::text(sheet.team_name.as_deref())}" }
                                        td { "{format::date_time(sheet.submitted_at)}" }
                                        td {
                                            class: "text-right",
                                            button {
                                                class: "btn btn-xs btn-primary",
                                                onclick: {
                                                    let sheet = sheet.clone();
                                                    move |_| {
                                                        reviewing.set(Some(sheet.clone()));
                                                        show_review.set(true);
                                                    }
                                                },
                                                "Review"
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
            if let Some(sheet) = reviewing() {
                ReviewModal {
                    key: "{format::number(sheet.id)}",
                    show: show_review,
                    sheet,
                    is_processing: processing(),
                    on_decide,
                }
            }
        }
    }
}

/// Line-up of a submitted sheet with the approve and reject actions.
#[component]
fn ReviewModal(
    show: Signal<bool>,
    sheet: MatchSheetDto,
    is_processing: bool,
    on_decide: EventHandler<(MatchSheetValidationDto, Option<String>)>,
) -> Element {
    let sheet_id = sheet.id.unwrap_or_default();
    let mut comments = use_signal(String::new);

    let summary = MatchSheetSummary::new(&sheet.player_participations);
    let lineup = |players: &[PlayerParticipationDto]| {
        players
            .iter()
            .map(|p| match p.assigned_number() {
                Some(number) => format!("{} {}", number, format::text(p.player_name.as_deref())),
                None => format::text(p.player_name.as_deref()),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };
    let starters = lineup(&summary.starters);
    let substitutes = lineup(&summary.substitutes);
    let unassigned = summary.unassigned.len();
    let missing_comments = comments().trim().is_empty();

    rsx! {
        Modal {
            show,
            title: "Review match sheet",
            class: "max-w-2xl",
            prevent_close: is_processing,
            div {
                class: "flex flex-col gap-3",
                p {
                    class: "font-semibold",
                    "{format::text(sheet.team_name.as_deref())} · {format::text(sheet.match_title.as_deref())}"
                }
                p { class: "text-sm", span { class: "opacity-60", "Starters: " } "{format::text(Some(starters.as_str()))}" }
                p { class: "text-sm", span { class: "opacity-60", "Substitutes: " } "{format::text(Some(substitutes.as_str()))}" }
                if unassigned > 0 {
                    p { class: "text-sm text-warning", "{unassigned} player(s) without a status" }
                }
                if let Some(strategy) = sheet.strategy.as_deref().filter(|s| !s.trim().is_empty()) {
                    p { class: "text-sm whitespace-pre-line", span { class: "opacity-60", "Strategy: " } "{strategy}" }
                }
                if let Some(coach) = sheet.coach_comments.as_deref().filter(|c| !c.trim().is_empty()) {
                    p { class: "text-sm whitespace-pre-line", span { class: "opacity-60", "Coach comments: " } "{coach}" }
                }
                Field {
                    label: "Comments",
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 3,
                        placeholder: "Required when rejecting",
                        value: "{comments}",
                        oninput: move |evt| comments.set(evt.value()),
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_processing,
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        disabled: is_processing || missing_comments,
                        onclick: move |_| {
                            let text = comments().trim().to_string();
                            on_decide.call((MatchSheetValidationDto::reject(sheet_id, text.clone()), Some(text)));
                        },
                        "Reject"
                    }
                    button {
                        class: "btn btn-success",
                        disabled: is_processing,
                        onclick: move |_| on_decide.call((MatchSheetValidationDto::approve(sheet_id), format::optional(comments()))),
                        if is_processing {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Approve"
                    }
                }
            }
        }
    }
}
