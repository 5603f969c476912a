use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::{
        match_sheet::PlayerParticipationDto,
        player::{PlayerPosition, PlayerStatus},
    },
    validation::match_sheet::{parse_shirt_number, MatchSheetDraft},
    ApiError,
};

use crate::client::{
    api::{use_client, Client},
    component::{
        form::Field,
        page::{ApiErrorPage, EmptyState, ErrorAlert, LoadingPage, SuccessAlert},
        Page,
    },
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

/// Fetches the sheet, then the roster of its team to seed an empty sheet.
async fn load_draft(client: Client, coach_id: i64, sheet_id: i64) -> Result<MatchSheetDraft, ApiError> {
    let sheet = client.matches().get_coach_sheet(coach_id, sheet_id).await?;
    let roster = match sheet.team_id {
        Some(team_id) => client.players().get_by_team(team_id, coach_id).await?,
        None => Vec::new(),
    };
    Ok(MatchSheetDraft::from_sheet(sheet, &roster))
}

#[component]
pub fn CoachMatchSheetEditor(sheet_id: i64) -> Element {
    let client = use_client();
    let coach_id = use_user_id();

    let draft = use_resource(use_reactive!(|sheet_id, coach_id| {
        let client = client.clone();
        async move {
            load_draft(client, coach_id, sheet_id)
                .await
                .inspect_err(|err| tracing::error!("Failed to load match sheet {}: {}", sheet_id, err))
        }
    }));

    let draft = match &*draft.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(draft)) => draft.clone(),
    };

    rsx! {
        Title { "Match sheet | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            SheetEditor { key: "{sheet_id}", sheet_id, initial: draft }
        }
    }
}

#[component]
fn SheetEditor(sheet_id: i64, initial: MatchSheetDraft) -> Element {
    let client = use_client();
    let coach_id = use_user_id();

    let mut draft = use_signal(|| initial);
    let mut processing = use_signal(|| false);
    let mut notice = use_signal(|| None::<Result<String, String>>);
    // Rejected shirt-number entries, by player id
    let mut number_errors = use_signal(HashMap::<i64, String>::new);

    let save = use_callback(move |submit: bool| {
        if !number_errors.read().is_empty() {
            notice.set(Some(Err("Fix the invalid shirt numbers first.".to_string())));
            return;
        }
        let payload = {
            let current = draft.read();
            if submit {
                current.to_submit_payload()
            } else {
                current.to_save_payload()
            }
        };
        let payload = match payload {
            Ok(payload) => payload,
            Err(err) => {
                notice.set(Some(Err(err.to_string())));
                return;
            }
        };

        let client = client.clone();
        processing.set(true);
        notice.set(None);
        spawn(async move {
            match client
                .matches()
                .update_coach_sheet(coach_id, sheet_id, &payload)
                .await
            {
                Ok(updated) => {
                    draft.with_mut(|d| d.sheet = updated);
                    let message = if submit {
                        "Match sheet submitted for validation"
                    } else {
                        "Match sheet saved"
                    };
                    notice.set(Some(Ok(message.to_string())));
                }
                Err(err) => {
                    tracing::error!("Failed to save match sheet {}: {}", sheet_id, err);
                    notice.set(Some(Err(err.user_message())));
                }
            }
            processing.set(false);
        });
    });

    let current = draft.read().clone();
    let editable = current.is_editable();
    let duplicates = current.duplicate_message();
    let rows: Vec<(PlayerParticipationDto, bool, String, Option<String>)> = {
        let errors = number_errors.read();
        current
            .players
            .iter()
            .map(|p| {
                let number = p.assigned_number().map(|n| n.to_string()).unwrap_or_default();
                let error = p.player_id.and_then(|id| errors.get(&id).cloned());
                (p.clone(), current.is_duplicated(p.shirt_number), number, error)
            })
            .collect()
    };
    let sheet = current.sheet;

    rsx! {
        div {
            class: "w-full max-w-5xl flex flex-col gap-4",
            div {
                class: "flex flex-wrap justify-between items-start gap-2",
                div {
                    h1 { class: "text-lg sm:text-2xl", "{format::text(sheet.match_title.as_deref())}" }
                    p {
                        class: "text-sm opacity-70",
                        "{format::text(sheet.team_name.as_deref())} · {format::text(sheet.competition_name.as_deref())}"
                    }
                    p {
                        class: "text-sm opacity-70",
                        "{format::date_time(sheet.match_date)} · {format::text(sheet.match_location.as_deref())}"
                    }
                    if sheet.submission_deadline.is_some() {
                        p { class: "text-sm", "Deadline: {format::date(sheet.submission_deadline)}" }
                    }
                }
                div {
                    class: "flex items-center gap-2",
                    if let Some(status) = &sheet.status {
                        span { class: "badge {status.badge_color()}", "{status}" }
                    }
                    Link { to: Route::CoachMatchSheets {}, class: "btn btn-sm btn-ghost", "Back" }
                }
            }
            match notice() {
                Some(Ok(message)) => rsx! { SuccessAlert { message } },
                Some(Err(message)) => rsx! { ErrorAlert { message } },
                None => rsx! {},
            }
            if !editable {
                div {
                    role: "alert",
                    class: "alert alert-info",
                    span { "This match sheet can no longer be modified." }
                }
            }
            if let Some(message) = duplicates {
                div {
                    role: "alert",
                    class: "alert alert-warning",
                    span { "{message}" }
                }
            }
            if rows.is_empty() {
                EmptyState { title: "No players on this team" }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table w-full",
                        thead {
                            tr {
                                th { "Player" }
                                th { "Status" }
                                th { "Position" }
                                th { "Number" }
                            }
                        }
                        tbody {
                            for (row, duplicated, number, number_error) in rows {
                                if let Some(player_id) = row.player_id {
                                    tr {
                                        key: "{player_id}",
                                        class: if duplicated { "bg-warning/20" } else { "" },
                                        td { "{format::text(row.player_name.as_deref())}" }
                                        td {
                                            select {
                                                class: "select select-bordered select-sm",
                                                disabled: !editable,
                                                onchange: move |evt| {
                                                    let value = evt.value();
                                                    let status = (!value.is_empty()).then(|| PlayerStatus::from_wire(&value));
                                                    draft.with_mut(|d| d.set_status(player_id, status));
                                                },
                                                option { value: "", selected: row.player_status.is_none(), "-" }
                                                for status in PlayerStatus::selectable() {
                                                    option {
                                                        value: "{status.as_str()}",
                                                        selected: row.player_status.as_ref() == Some(&status),
                                                        "{status}"
                                                    }
                                                }
                                            }
                                        }
                                        td {
                                            select {
                                                class: "select select-bordered select-sm",
                                                disabled: !editable,
                                                onchange: move |evt| {
                                                    let value = evt.value();
                                                    let position = (!value.is_empty()).then(|| PlayerPosition::from_wire(&value));
                                                    draft.with_mut(|d| d.set_position(player_id, position));
                                                },
                                                option { value: "", selected: row.position.is_none(), "-" }
                                                for position in PlayerPosition::variants() {
                                                    option {
                                                        value: "{position.as_str()}",
                                                        selected: row.position.as_ref() == Some(&position),
                                                        "{position}"
                                                    }
                                                }
                                            }
                                        }
                                        td {
                                            input {
                                                r#type: "number",
                                                min: "0",
                                                max: "99",
                                                class: if duplicated || number_error.is_some() { "input input-bordered input-sm input-error w-20" } else { "input input-bordered input-sm w-20" },
                                                disabled: !editable,
                                                value: "{number}",
                                                onchange: move |evt| match parse_shirt_number(&evt.value()) {
                                                    Ok(number) => {
                                                        number_errors.write().remove(&player_id);
                                                        draft.with_mut(|d| d.set_shirt_number(player_id, number));
                                                    }
                                                    Err(err) => {
                                                        number_errors.write().insert(player_id, err.to_string());
                                                    }
                                                },
                                            }
                                            if let Some(message) = &number_error {
                                                p { class: "text-error text-xs mt-1", "{message}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Field {
                label: "Strategy",
                textarea {
                    class: "textarea textarea-bordered w-full",
                    rows: 5,
                    disabled: !editable,
                    value: "{current.strategy}",
                    oninput: move |evt| draft.write().strategy = evt.value(),
                }
            }
            if editable {
                div {
                    class: "flex justify-end gap-2",
                    button {
                        class: "btn",
                        disabled: processing(),
                        onclick: move |_| save.call(false),
                        "Save draft"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: processing(),
                        onclick: move |_| save.call(true),
                        if processing() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Submit for validation"
                    }
                }
            }
        }
    }
}
