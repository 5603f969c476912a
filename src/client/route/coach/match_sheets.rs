use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::use_client,
    component::{
        page::{ApiErrorPage, EmptyState, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

#[component]
pub fn CoachMatchSheets() -> Element {
    let client = use_client();
    let coach_id = use_user_id();

    let sheets = use_resource(use_reactive!(|coach_id| {
        let client = client.clone();
        async move {
            client
                .matches()
                .get_coach_sheets(coach_id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch coach match sheets: {}", err))
        }
    }));

    let mut summary = match &*sheets.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(summary)) => summary.clone(),
    };
    // Most recent matches first.
    summary
        .match_sheets
        .sort_by(|a, b| b.match_date.cmp(&a.match_date));

    rsx! {
        Title { "Match sheets | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                h1 { class: "text-lg sm:text-2xl", "Match sheets" }
                div {
                    class: "stats stats-vertical md:stats-horizontal bg-base-200 w-full",
                    div {
                        class: "stat",
                        div { class: "stat-title", "Total" }
                        div { class: "stat-value", "{summary.total_match_sheets}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "To complete" }
                        div { class: "stat-value text-warning", "{summary.pending_match_sheets}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Validated" }
                        div { class: "stat-value text-success", "{summary.validated_match_sheets}" }
                    }
                }
                if summary.match_sheets.is_empty() {
                    EmptyState {
                        title: "No match sheets yet",
                        hint: "Sheets appear once a match involving your team is scheduled",
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "Match" }
                                    th { "Date" }
                                    th { "Team" }
                                    th { "Competition" }
                                    th { "Deadline" }
                                    th { "Status" }
                                    th {}
                                }
                            }
                            tbody {
                                for sheet in summary.match_sheets {
                                    tr {
                                        td { class: "font-semibold", "{format::text(sheet.match_title.as_deref())}" }
                                        td { "{format::date_time(sheet.match_date)}" }
                                        td { "{format::text(sheet.team_name.as_deref())}" }
                                        td { "{format::text(sheet.competition_name.as_deref())}" }
                                        td { "{format::date(sheet.submission_deadline)}" }
                                        td {
                                            if let Some(status) = &sheet.status {
                                                span { class: "badge {status.badge_color()}", "{status}" }
                                            }
                                        }
                                        td {
                                            class: "text-right",
                                            if let Some(sheet_id) = sheet.id {
                                                Link {
                                                    to: Route::CoachMatchSheetEditor { sheet_id },
                                                    class: "btn btn-xs",
                                                    if sheet.is_editable() { "Edit" } else { "View" }
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
    }
}
