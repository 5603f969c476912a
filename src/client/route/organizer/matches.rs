use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::{
        competition::OrganizerTeamSummaryDto,
        matches::{
            MatchDto, MatchFilter, MatchParticipantDto, MatchRole, MatchScoreUpdateDto,
            MatchStatus, MatchStatusUpdateDto,
        },
    },
    validation::{form::validate_match_schedule, FieldError},
};

use crate::client::{
    api::use_client,
    component::{
        form::{error_for, Field, SubmitButton},
        page::{EmptyState, ErrorAlert, SuccessAlert},
        Modal, Page,
    },
    constant::SITE_NAME,
    format,
    model::auth::use_user_id,
    router::Route,
};

use super::use_organizer_competitions;

#[derive(Clone, PartialEq)]
enum Edit {
    Status(MatchDto),
    Score(MatchDto),
}

#[component]
pub fn OrganizerMatches() -> Element {
    let client = use_client();
    let organizer_id = use_user_id();
    let competitions = use_organizer_competitions();

    let mut competition_id = use_signal(|| None::<i64>);
    let mut scheduling = use_signal(|| false);
    let mut edit = use_signal(|| None::<Edit>);
    let mut show_edit = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut notice = use_signal(|| None::<Result<String, String>>);

    use_effect(move || {
        if let Some(Ok(summary)) = &*competitions.read() {
            if competition_id.peek().is_none() {
                competition_id.set(summary.competitions.iter().find_map(|c| c.id));
            }
        }
    });

    let mut matches = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let competition = competition_id();
            async move {
                let Some(competition) = competition else {
                    return Ok(Vec::new());
                };
                client
                    .matches()
                    .get_by_competition(competition, &MatchFilter::default())
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch competition matches: {}", err))
            }
        }
    });

    let on_status = {
        let client = client.clone();
        move |update: MatchStatusUpdateDto| {
            let client = client.clone();
            let reason = update.reason.clone().unwrap_or_default();
            processing.set(true);
            spawn(async move {
                match client
                    .matches()
                    .update_status(organizer_id, &update, &reason)
                    .await
                {
                    Ok(_) => {
                        notice.set(Some(Ok("Match status updated".to_string())));
                        matches.restart();
                    }
                    Err(err) => {
                        tracing::error!("Failed to update match {}: {}", update.match_id, err);
                        notice.set(Some(Err(err.user_message())));
                    }
                }
                processing.set(false);
                show_edit.set(false);
            });
        }
    };

    let on_score = move |score: MatchScoreUpdateDto| {
        let client = client.clone();
        processing.set(true);
        spawn(async move {
            match client.matches().update_score(organizer_id, &score).await {
                Ok(_) => {
                    notice.set(Some(Ok("Score recorded".to_string())));
                    matches.restart();
                }
                Err(err) => {
                    tracing::error!("Failed to record score of match {}: {}", score.match_id, err);
                    notice.set(Some(Err(err.user_message())));
                }
            }
            processing.set(false);
            show_edit.set(false);
        });
    };

    let options: Vec<(i64, String)> = match &*competitions.read_unchecked() {
        Some(Ok(summary)) => summary
            .competitions
            .iter()
            .filter_map(|c| c.id.map(|id| (id, format::text(c.name.as_deref()))))
            .collect(),
        _ => Vec::new(),
    };
    let selected = competition_id();

    rsx! {
        Title { "Matches | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-4",
                div {
                    class: "flex flex-wrap justify-between items-center gap-2",
                    h1 { class: "text-lg sm:text-2xl", "Matches" }
                    div {
                        class: "flex gap-2",
                        select {
                            class: "select select-bordered select-sm",
                            onchange: move |evt| {
                                competition_id.set(evt.value().parse().ok());
                                scheduling.set(false);
                            },
                            option { value: "", selected: selected.is_none(), "Choose a competition" }
                            for (id, name) in options {
                                option { value: "{id}", selected: selected == Some(id), "{name}" }
                            }
                        }
                        if selected.is_some() {
                            button {
                                class: "btn btn-sm btn-primary",
                                onclick: move |_| {
                                    let open = scheduling();
                                    scheduling.set(!open);
                                },
                                if scheduling() { "Close" } else { "Schedule a match" }
                            }
                        }
                    }
                }
                match notice() {
                    Some(Ok(message)) => rsx! { SuccessAlert { message } },
                    Some(Err(message)) => rsx! { ErrorAlert { message } },
                    None => rsx! {},
                }
                if let (true, Some(competition)) = (scheduling(), selected) {
                    ScheduleMatchForm {
                        key: "{competition}",
                        competition_id: competition,
                        on_scheduled: move |_| {
                            scheduling.set(false);
                            notice.set(Some(Ok("Match scheduled".to_string())));
                            matches.restart();
                        },
                    }
                }
                match &*matches.read_unchecked() {
                    None => rsx! { span { class: "loading loading-spinner" } },
                    Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        EmptyState { title: "No matches scheduled", hint: "Pick a competition and schedule its first match" }
                    },
                    Some(Ok(list)) => rsx! {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Date" }
                                        th { "Match" }
                                        th { "Round" }
                                        th { "Score" }
                                        th { "Status" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for game in list.clone() {
                                        OrganizerMatchRow {
                                            game,
                                            on_edit: move |next: Edit| {
                                                edit.set(Some(next));
                                                show_edit.set(true);
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
            match edit() {
                Some(Edit::Status(game)) => rsx! {
                    StatusModal {
                        key: "status-{format::number(game.id)}",
                        show: show_edit,
                        game,
                        is_processing: processing(),
                        on_confirm: on_status,
                    }
                },
                Some(Edit::Score(game)) => rsx! {
                    ScoreModal {
                        key: "score-{format::number(game.id)}",
                        show: show_edit,
                        game,
                        is_processing: processing(),
                        on_confirm: on_score,
                    }
                },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn OrganizerMatchRow(game: MatchDto, on_edit: EventHandler<Edit>) -> Element {
    let Some(id) = game.id else {
        return rsx!();
    };
    let fixture = game.fixture();
    let score = game.score().unwrap_or_else(|| format::PLACEHOLDER.to_string());
    let status_game = game.clone();
    let score_game = game.clone();

    rsx! {
        tr {
            td { "{format::date_time(game.scheduled_date_time)}" }
            td {
                Link { to: Route::MatchDetail { id }, class: "font-semibold link link-hover", "{fixture}" }
                p { class: "text-xs opacity-60", "{format::text(game.title.as_deref())}" }
            }
            td { "{format::number(game.round)}" }
            td { class: "font-mono", "{score}" }
            td {
                if let Some(status) = &game.status {
                    span { class: "badge {status.badge_color()}", "{status}" }
                }
            }
            td {
                class: "text-right",
                div {
                    class: "flex justify-end gap-1",
                    button {
                        class: "btn btn-xs",
                        onclick: move |_| on_edit.call(Edit::Status(status_game.clone())),
                        "Status"
                    }
                    button {
                        class: "btn btn-xs btn-primary",
                        onclick: move |_| on_edit.call(Edit::Score(score_game.clone())),
                        "Score"
                    }
                }
            }
        }
    }
}

/// Collects a new status, an optional new date and the mandatory reason.
#[component]
fn StatusModal(
    show: Signal<bool>,
    game: MatchDto,
    is_processing: bool,
    on_confirm: EventHandler<MatchStatusUpdateDto>,
) -> Element {
    let match_id = game.id.unwrap_or_default();
    let mut status = use_signal(|| game.status.clone().unwrap_or(MatchStatus::Scheduled));
    let mut date_time = use_signal(|| game.scheduled_date_time);
    let mut reason = use_signal(String::new);

    let current = status();
    let reschedules = matches!(current, MatchStatus::Scheduled | MatchStatus::Postponed);
    let missing = reason().trim().is_empty();

    rsx! {
        Modal {
            show,
            title: "Change match status",
            prevent_close: is_processing,
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if missing {
                        return;
                    }
                    let new_status = status();
                    let keeps_date = matches!(new_status, MatchStatus::Scheduled | MatchStatus::Postponed);
                    on_confirm.call(MatchStatusUpdateDto {
                        match_id,
                        new_status,
                        date_time: if keeps_date { date_time() } else { None },
                        reason: Some(reason().trim().to_string()),
                    });
                },
                Field {
                    label: "Status",
                    select {
                        class: "select select-bordered w-full",
                        onchange: move |evt| status.set(MatchStatus::from_wire(&evt.value())),
                        for option_status in MatchStatus::variants() {
                            option {
                                value: "{option_status.as_str()}",
                                selected: current == option_status,
                                "{option_status}"
                            }
                        }
                    }
                }
                if reschedules {
                    Field {
                        label: "Date and time",
                        input {
                            r#type: "datetime-local",
                            class: "input input-bordered w-full",
                            value: "{format::input_date_time(date_time())}",
                            onchange: move |evt| date_time.set(format::parse_input_date_time(&evt.value())),
                        }
                    }
                }
                Field {
                    label: "Reason",
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 3,
                        value: "{reason}",
                        oninput: move |evt| reason.set(evt.value()),
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
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_processing || missing,
                        "Update"
                    }
                }
            }
        }
    }
}

#[component]
fn ScoreModal(
    show: Signal<bool>,
    game: MatchDto,
    is_processing: bool,
    on_confirm: EventHandler<MatchScoreUpdateDto>,
) -> Element {
    let match_id = game.id.unwrap_or_default();
    let mut home = use_signal(|| game.home_team_score.map(|s| s.to_string()).unwrap_or_default());
    let mut away = use_signal(|| game.away_team_score.map(|s| s.to_string()).unwrap_or_default());

    let parse = |value: &str| value.trim().parse::<i32>().ok().filter(|s| *s >= 0);
    let scores = parse(&home()).zip(parse(&away()));
    let home_name = game
        .home_team()
        .and_then(|p| p.team_name.clone())
        .unwrap_or_else(|| "Home".to_string());
    let away_name = game
        .away_team()
        .and_then(|p| p.team_name.clone())
        .unwrap_or_else(|| "Away".to_string());

    rsx! {
        Modal {
            show,
            title: "Record score",
            prevent_close: is_processing,
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Some((home_score, away_score)) = scores {
                        on_confirm.call(MatchScoreUpdateDto { match_id, home_score, away_score });
                    }
                },
                div {
                    class: "grid grid-cols-2 gap-4",
                    Field {
                        label: home_name,
                        input {
                            r#type: "number",
                            min: "0",
                            class: "input input-bordered w-full",
                            value: "{home}",
                            oninput: move |evt| home.set(evt.value()),
                        }
                    }
                    Field {
                        label: away_name,
                        input {
                            r#type: "number",
                            min: "0",
                            class: "input input-bordered w-full",
                            value: "{away}",
                            oninput: move |evt| away.set(evt.value()),
                        }
                    }
                }
                if scores.is_none() {
                    p { class: "label", "Both scores must be whole numbers, zero or more" }
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
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_processing || scores.is_none(),
                        "Save"
                    }
                }
            }
        }
    }
}

fn participant(teams: &[OrganizerTeamSummaryDto], team_id: Option<i64>, role: MatchRole) -> Option<MatchParticipantDto> {
    let team_id = team_id?;
    let team_name = teams
        .iter()
        .find(|t| t.id == Some(team_id))
        .and_then(|t| t.name.clone());
    Some(MatchParticipantDto {
        team_id: Some(team_id),
        team_name,
        role: Some(role),
        ..Default::default()
    })
}

#[component]
fn ScheduleMatchForm(competition_id: i64, on_scheduled: EventHandler<()>) -> Element {
    let client = use_client();
    let organizer_id = use_user_id();

    let mut form = use_signal(|| MatchDto {
        competition_id: Some(competition_id),
        status: Some(MatchStatus::Scheduled),
        ..Default::default()
    });
    let home = use_signal(|| None::<i64>);
    let away = use_signal(|| None::<i64>);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut failure = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let teams = use_resource({
        let client = client.clone();
        use_reactive!(|competition_id, organizer_id| {
            let client = client.clone();
            async move {
                client
                    .teams()
                    .get_organizer_competition_teams(organizer_id, competition_id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch competition teams: {}", err))
            }
        })
    });
    let team_list = match &*teams.read_unchecked() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    let on_submit = {
        let team_list = team_list.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let game = MatchDto {
                participants: [
                    participant(&team_list, home(), MatchRole::Home),
                    participant(&team_list, away(), MatchRole::Away),
                ]
                .into_iter()
                .flatten()
                .collect(),
                ..form()
            };
            let validation = validate_match_schedule(&game);
            let valid = validation.is_empty();
            errors.set(validation);
            if !valid {
                return;
            }

            let client = client.clone();
            saving.set(true);
            failure.set(None);
            spawn(async move {
                match client.matches().schedule(organizer_id, &game).await {
                    Ok(_) => on_scheduled.call(()),
                    Err(err) => {
                        tracing::error!("Failed to schedule match: {}", err);
                        failure.set(Some(err.user_message()));
                    }
                }
                saving.set(false);
            });
        }
    };

    let current = form();
    let round = current.round.map(|r| r.to_string()).unwrap_or_default();
    let team_select = move |mut selected: Signal<Option<i64>>, teams: Vec<OrganizerTeamSummaryDto>| {
        let chosen = selected();
        rsx! {
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| selected.set(evt.value().parse().ok()),
                option { value: "", selected: chosen.is_none(), "Choose a team" }
                for team in teams {
                    if let Some(id) = team.id {
                        option { value: "{id}", selected: chosen == Some(id), "{format::text(team.name.as_deref())}" }
                    }
                }
            }
        }
    };

    rsx! {
        form {
            class: "card bg-base-200 w-full",
            onsubmit: on_submit,
            div {
                class: "card-body",
                h2 { class: "card-title", "Schedule a match" }
                if let Some(message) = failure() {
                    ErrorAlert { message }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                    Field {
                        label: "Title",
                        error: error_for(&errors, "title"),
                        input {
                            class: "input input-bordered w-full",
                            value: "{current.title.clone().unwrap_or_default()}",
                            oninput: move |evt| form.write().title = format::optional(evt.value()),
                        }
                    }
                    Field {
                        label: "Date and time",
                        error: error_for(&errors, "scheduledDateTime"),
                        input {
                            r#type: "datetime-local",
                            class: "input input-bordered w-full",
                            value: "{format::input_date_time(current.scheduled_date_time)}",
                            onchange: move |evt| form.write().scheduled_date_time = format::parse_input_date_time(&evt.value()),
                        }
                    }
                    Field {
                        label: "Home team",
                        error: error_for(&errors, "participants"),
                        {team_select(home, team_list.clone())}
                    }
                    Field {
                        label: "Away team",
                        {team_select(away, team_list.clone())}
                    }
                    Field {
                        label: "Round",
                        input {
                            r#type: "number",
                            min: "1",
                            class: "input input-bordered w-full",
                            value: "{round}",
                            oninput: move |evt| form.write().round = evt.value().trim().parse().ok(),
                        }
                    }
                }
                if let Some(message) = error_for(&errors, "competitionId") {
                    ErrorAlert { message }
                }
                div {
                    class: "card-actions justify-end",
                    SubmitButton { label: "Schedule", busy_label: "Scheduling...", is_busy: saving() }
                }
            }
        }
    }
}
