use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::{
        competition::CompetitionFilter,
        message::{MessageDto, RecipientCategory, RecipientFilter},
        user::{Role, UserDto},
    },
    validation::{form::validate_message, FieldError},
    ApiError,
};

use crate::client::{
    api::{use_client, Client},
    component::{
        form::{error_for, Field, SubmitButton},
        page::{ErrorAlert, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    model::auth::AuthContext,
    router::Route,
};

/// Team or competition a group message is addressed to.
#[derive(Clone, PartialEq)]
struct RelatedEntity {
    id: i64,
    name: String,
    kind: &'static str,
}

/// Teams a coach manages, or competitions an organizer runs.
async fn related_entities(client: &Client, user: &UserDto) -> Result<Vec<RelatedEntity>, ApiError> {
    let Some(user_id) = user.id else {
        return Ok(Vec::new());
    };

    let entities = match user.role {
        Some(Role::Coach) => client
            .teams()
            .get_coach_teams(user_id)
            .await?
            .into_iter()
            .filter_map(|team| {
                Some(RelatedEntity {
                    id: team.id?,
                    name: team.name.unwrap_or_default(),
                    kind: "TEAM",
                })
            })
            .collect(),
        Some(Role::Organizer) => client
            .competitions()
            .get_organizer_competitions(user_id, &CompetitionFilter::default())
            .await?
            .competitions
            .into_iter()
            .filter_map(|competition| {
                Some(RelatedEntity {
                    id: competition.id?,
                    name: competition.name.unwrap_or_default(),
                    kind: "COMPETITION",
                })
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(entities)
}

#[component]
pub fn ComposeMessage() -> Element {
    let auth = use_context::<AuthContext>();

    let user = auth.read().user().cloned();
    match user {
        Some(user) => rsx!(ComposeForm { user }),
        None => rsx!(LoadingPage {}),
    }
}

#[component]
fn ComposeForm(user: UserDto) -> Element {
    let client = use_client();
    let nav = navigator();

    let mut form = use_signal(MessageDto::default);
    let mut search = use_signal(String::new);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut failure = use_signal(|| None::<String>);
    let mut sending = use_signal(|| false);

    let categories = use_resource({
        let client = client.clone();
        let role = user.role.clone();
        move || {
            let client = client.clone();
            let role = role.clone();
            async move {
                match role {
                    Some(role) => client
                        .messages()
                        .get_recipient_categories(&role)
                        .await
                        .inspect_err(|err| tracing::error!("Failed to fetch recipient categories: {}", err)),
                    None => Ok(Vec::new()),
                }
            }
        }
    });

    let entities = use_resource({
        let client = client.clone();
        let user = user.clone();
        move || {
            let client = client.clone();
            let user = user.clone();
            async move {
                related_entities(&client, &user)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch message targets: {}", err))
            }
        }
    });

    let wants_recipients = use_memo(move || {
        form.read()
            .recipient_category
            .as_ref()
            .is_some_and(|c| c.needs_recipients())
    });

    let recipients = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let wanted = wants_recipients();
            let filter = RecipientFilter {
                search: Some(search()).filter(|s| !s.trim().is_empty()),
                ..Default::default()
            };
            async move {
                if !wanted {
                    return Ok(Vec::new());
                }
                client
                    .messages()
                    .get_recipients(&filter)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch recipients: {}", err))
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let message = form();
        let validation = validate_message(&message);
        let valid = validation.is_empty();
        errors.set(validation);
        if !valid {
            return;
        }

        let client = client.clone();
        sending.set(true);
        failure.set(None);
        spawn(async move {
            match client.messages().send(&message).await {
                Ok(_) => {
                    nav.push(Route::Messages {});
                }
                Err(err) => {
                    tracing::error!("Failed to send message: {}", err);
                    failure.set(Some(err.user_message()));
                }
            }
            sending.set(false);
        });
    };

    let select_category = move |evt: FormEvent| {
        let value = evt.value();
        let mut message = form.write();
        message.recipient_category = (!value.is_empty()).then(|| RecipientCategory::from_wire(&value));
        message.recipient_ids.clear();
        message.related_entity_id = None;
        message.related_entity_type = None;
    };

    let current = form();
    let category = current.recipient_category.clone();
    let category_options = match &*categories.read_unchecked() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let entity_options = match &*entities.read_unchecked() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        Title { "New message | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            form {
                class: "card bg-base-200 w-full max-w-3xl",
                onsubmit: on_submit,
                div {
                    class: "card-body",
                    h1 { class: "card-title text-2xl", "New message" }
                    if let Some(message) = failure() {
                        ErrorAlert { message }
                    }
                    if let Some(Err(err)) = &*categories.read_unchecked() {
                        ErrorAlert { message: err.user_message() }
                    }
                    Field {
                        label: "Send to",
                        error: error_for(&errors, "recipientCategory"),
                        select {
                            class: "select select-bordered w-full",
                            onchange: select_category,
                            option { value: "", selected: category.is_none(), "Choose an audience" }
                            for option in category_options {
                                option {
                                    value: "{option.as_str()}",
                                    selected: category.as_ref() == Some(&option),
                                    "{option}"
                                }
                            }
                        }
                    }
                    if category.as_ref().is_some_and(|c| c.needs_related_entity()) {
                        Field {
                            label: "Team or competition",
                            error: error_for(&errors, "relatedEntityId"),
                            select {
                                class: "select select-bordered w-full",
                                onchange: move |evt| {
                                    let id = evt.value().parse::<i64>().ok();
                                    let kind = entity_kind(&entities, id);
                                    let mut message = form.write();
                                    message.related_entity_id = id;
                                    message.related_entity_type = kind;
                                },
                                option { value: "", selected: current.related_entity_id.is_none(), "Choose..." }
                                for entity in entity_options {
                                    option {
                                        value: "{entity.id}",
                                        selected: current.related_entity_id == Some(entity.id),
                                        "{entity.name}"
                                    }
                                }
                            }
                        }
                    }
                    if category.as_ref().is_some_and(|c| c.needs_recipients()) {
                        Field {
                            label: "Recipients",
                            error: error_for(&errors, "recipientIds"),
                            input {
                                class: "input input-bordered input-sm w-full mb-2",
                                placeholder: "Search by name",
                                value: "{search}",
                                oninput: move |evt| search.set(evt.value()),
                            }
                            match &*recipients.read_unchecked() {
                                None => rsx! { span { class: "loading loading-spinner loading-sm" } },
                                Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
                                Some(Ok(list)) => rsx! {
                                    div {
                                        class: "max-h-60 overflow-y-auto flex flex-col gap-1",
                                        for recipient in list.clone() {
                                            if let Some(id) = recipient.id {
                                                label {
                                                    class: "label cursor-pointer justify-start gap-2",
                                                    input {
                                                        r#type: "checkbox",
                                                        class: "checkbox checkbox-sm",
                                                        checked: current.recipient_ids.contains(&id),
                                                        onchange: move |evt| {
                                                            let mut message = form.write();
                                                            message.recipient_ids.retain(|r| *r != id);
                                                            if evt.checked() {
                                                                message.recipient_ids.push(id);
                                                            }
                                                        },
                                                    }
                                                    span { "{recipient.name()}" }
                                                    if let Some(role) = &recipient.role {
                                                        span { class: "badge badge-xs {role.badge_color()}", "{role}" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                },
                            }
                        }
                    }
                    Field {
                        label: "Message",
                        error: error_for(&errors, "content"),
                        textarea {
                            class: "textarea textarea-bordered w-full",
                            rows: 8,
                            value: "{current.content}",
                            oninput: move |evt| form.write().content = evt.value(),
                        }
                    }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::Messages {}, class: "btn", "Cancel" }
                        SubmitButton { label: "Send", busy_label: "Sending...", is_busy: sending() }
                    }
                }
            }
        }
    }
}

fn entity_kind(
    entities: &Resource<Result<Vec<RelatedEntity>, ApiError>>,
    id: Option<i64>,
) -> Option<String> {
    let id = id?;
    match &*entities.read_unchecked() {
        Some(Ok(list)) => list
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.kind.to_string()),
        _ => None,
    }
}
