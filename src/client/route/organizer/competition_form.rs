use dioxus::prelude::*;
use league_api::{
    model::competition::{CompetitionType, OrganizerCompetitionDto},
    validation::{form::validate_competition, FieldError},
};

use crate::client::{
    component::{
        form::{error_for, Field, SubmitButton},
        page::ErrorAlert,
    },
    format,
};

/// Create and edit form of a competition.
///
/// `on_submit` only fires once the form passes validation.
#[component]
pub fn CompetitionForm(
    initial: OrganizerCompetitionDto,
    title: String,
    submit_label: String,
    busy_label: String,
    saving: bool,
    failure: Option<String>,
    on_submit: EventHandler<OrganizerCompetitionDto>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| initial);
    let mut errors = use_signal(Vec::<FieldError>::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let competition = form();
        let validation = validate_competition(&competition);
        let valid = validation.is_empty();
        errors.set(validation);
        if valid {
            on_submit.call(competition);
        }
    };

    let current = form();
    let max_teams = current.max_teams.map(|n| n.to_string()).unwrap_or_default();

    rsx! {
        form {
            class: "card bg-base-200 w-full max-w-3xl",
            onsubmit: submit,
            div {
                class: "card-body",
                h1 { class: "card-title text-2xl", "{title}" }
                if let Some(message) = failure {
                    ErrorAlert { message }
                }
                Field {
                    label: "Name",
                    error: error_for(&errors, "name"),
                    input {
                        class: "input input-bordered w-full",
                        value: "{current.name.clone().unwrap_or_default()}",
                        oninput: move |evt| form.write().name = format::optional(evt.value()),
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                    Field {
                        label: "Type",
                        error: error_for(&errors, "competitionType"),
                        select {
                            class: "select select-bordered w-full",
                            onchange: move |evt| {
                                let value = evt.value();
                                form.write().competition_type = (!value.is_empty()).then(|| CompetitionType::from_wire(&value));
                            },
                            option { value: "", selected: current.competition_type.is_none(), "Choose a type" }
                            for kind in CompetitionType::variants() {
                                option {
                                    value: "{kind.as_str()}",
                                    selected: current.competition_type.as_ref() == Some(&kind),
                                    "{kind}"
                                }
                            }
                        }
                    }
                    Field {
                        label: "Category",
                        error: error_for(&errors, "category"),
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "U17, Senior...",
                            value: "{current.category.clone().unwrap_or_default()}",
                            oninput: move |evt| form.write().category = format::optional(evt.value()),
                        }
                    }
                    Field {
                        label: "Start date",
                        error: error_for(&errors, "startDate"),
                        input {
                            r#type: "date",
                            class: "input input-bordered w-full",
                            value: "{format::input_date(current.start_date)}",
                            onchange: move |evt| form.write().start_date = format::parse_input_date(&evt.value()),
                        }
                    }
                    Field {
                        label: "End date",
                        error: error_for(&errors, "endDate"),
                        input {
                            r#type: "date",
                            class: "input input-bordered w-full",
                            value: "{format::input_date(current.end_date)}",
                            onchange: move |evt| form.write().end_date = format::parse_input_date(&evt.value()),
                        }
                    }
                    Field {
                        label: "Location",
                        error: error_for(&errors, "location"),
                        input {
                            class: "input input-bordered w-full",
                            value: "{current.location.clone().unwrap_or_default()}",
                            oninput: move |evt| form.write().location = format::optional(evt.value()),
                        }
                    }
                    Field {
                        label: "Maximum teams",
                        error: error_for(&errors, "maxTeams"),
                        input {
                            r#type: "number",
                            min: "2",
                            class: "input input-bordered w-full",
                            value: "{max_teams}",
                            oninput: move |evt| form.write().max_teams = evt.value().trim().parse().ok(),
                        }
                    }
                }
                Field {
                    label: "Description",
                    error: error_for(&errors, "description"),
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 5,
                        placeholder: "Markdown is supported",
                        value: "{current.description.clone().unwrap_or_default()}",
                        oninput: move |evt| form.write().description = format::optional(evt.value()),
                    }
                }
                div {
                    class: "card-actions justify-end",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    SubmitButton { label: submit_label, busy_label, is_busy: saving }
                }
            }
        }
    }
}
