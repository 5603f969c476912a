use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    model::user::{ChangePasswordRequest, ProfileUpdate, Role, UserDto},
    validation::{
        form::{is_valid_email, is_valid_phone, validate_change_password},
        FieldError,
    },
    ApiError,
};

use crate::client::{
    api::{use_client, Client},
    component::{
        form::{error_for, Field, SubmitButton},
        page::{ErrorAlert, LoadingPage, SuccessAlert},
        Page,
    },
    constant::SITE_NAME,
    format,
    model::auth::{AuthContext, AuthState},
};

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthContext>();
    let mut editing = use_signal(|| false);

    let Some(user) = auth.read().user().cloned() else {
        return rsx!(LoadingPage {});
    };

    rsx! {
        Title { "Profile | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-3xl flex flex-col gap-6",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-lg sm:text-2xl", "My profile" }
                    if !editing() {
                        button { class: "btn btn-sm", onclick: move |_| editing.set(true), "Edit" }
                    }
                }
                if editing() {
                    ProfileForm { user: user.clone(), on_done: move |_| editing.set(false) }
                } else {
                    ProfileView { user }
                }
                ChangePasswordForm {}
            }
        }
    }
}

#[component]
fn ProfileView(user: UserDto) -> Element {
    let mut rows = vec![
        ("User name", format::text(user.user_name.as_deref())),
        ("Email", format::text(user.email.as_deref())),
        ("Phone", format::text(user.phone.as_deref())),
        ("Address", format::text(user.address.as_deref())),
    ];
    match user.role {
        Some(Role::Coach) => rows.extend([
            ("License", format::text(user.license_number.as_deref())),
            ("Experience", format::number(user.years_of_experience)),
            ("Specialization", format::text(user.specialization.as_deref())),
        ]),
        Some(Role::Organizer) => rows.extend([
            ("Organization", format::text(user.organization.as_deref())),
            ("Contact", format::text(user.contact_details.as_deref())),
        ]),
        Some(Role::Player) => rows.extend([
            ("Position", format::label(user.position.as_ref())),
            ("Team", format::text(user.team_name.as_deref())),
            ("Born", format::date(user.date_of_birth)),
        ]),
        _ => {}
    }

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex items-center gap-4 mb-2",
                    if let Some(picture) = &user.profile_picture {
                        img { class: "w-16 h-16 rounded-full object-cover", src: "{picture}", alt: "" }
                    }
                    div {
                        h2 { class: "text-xl font-semibold", "{user.display_name()}" }
                        if let Some(role) = &user.role {
                            span { class: "badge {role.badge_color()}", "{role}" }
                        }
                    }
                }
                dl {
                    class: "grid grid-cols-[auto_1fr] gap-x-6 gap-y-2 text-sm",
                    for (label, value) in rows {
                        dt { class: "opacity-60", "{label}" }
                        dd { "{value}" }
                    }
                }
                if let Some(biography) = &user.biography {
                    p { class: "mt-4 whitespace-pre-line", "{biography}" }
                }
            }
        }
    }
}

fn validate_profile(profile: &ProfileUpdate) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(email) = &profile.email {
        if !is_valid_email(email) {
            errors.push(FieldError::new("email", "Invalid email address"));
        }
    }
    if let Some(phone) = &profile.phone {
        if !is_valid_phone(phone) {
            errors.push(FieldError::new("phone", "Invalid phone number"));
        }
    }
    errors
}

/// Role-specific endpoint for coaches and organizers, the generic one otherwise.
async fn save_profile(client: &Client, role: Option<&Role>, profile: &ProfileUpdate) -> Result<UserDto, ApiError> {
    let users = client.users();
    match role {
        Some(Role::Coach) => users.update_coach_profile(profile).await,
        Some(Role::Organizer) => users.update_organizer_profile(profile).await,
        _ => users.update_profile(profile).await,
    }
}

#[component]
fn ProfileForm(user: UserDto, on_done: EventHandler<()>) -> Element {
    let client = use_client();
    let auth = use_context::<AuthContext>();

    let mut form = use_signal(|| ProfileUpdate::from_user(&user));
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut failure = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);
    let role = user.role.clone();

    let on_submit = {
        let role = role.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let profile = form();
            let validation = validate_profile(&profile);
            let valid = validation.is_empty();
            errors.set(validation);
            if !valid {
                return;
            }

            let client = client.clone();
            let role = role.clone();
            saving.set(true);
            failure.set(None);
            spawn(async move {
                match save_profile(&client, role.as_ref(), &profile).await {
                    Ok(updated) => {
                        let user = client.auth().fetch_current_user().await.unwrap_or(updated);
                        auth.set(AuthState::Authenticated(user));
                        on_done.call(());
                    }
                    Err(err) => {
                        tracing::error!("Failed to update profile: {}", err);
                        failure.set(Some(err.user_message()));
                    }
                }
                saving.set(false);
            });
        }
    };

    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let current = form();

    rsx! {
        form {
            class: "card bg-base-200",
            onsubmit: on_submit,
            div {
                class: "card-body",
                if let Some(message) = failure() {
                    ErrorAlert { message }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                    Field {
                        label: "First name",
                        input {
                            class: "input input-bordered w-full",
                            value: "{text(&current.first_name)}",
                            oninput: move |evt| form.write().first_name = format::optional(evt.value()),
                        }
                    }
                    Field {
                        label: "Last name",
                        input {
                            class: "input input-bordered w-full",
                            value: "{text(&current.last_name)}",
                            oninput: move |evt| form.write().last_name = format::optional(evt.value()),
                        }
                    }
                    Field {
                        label: "Email",
                        error: error_for(&errors, "email"),
                        input {
                            r#type: "email",
                            class: "input input-bordered w-full",
                            value: "{text(&current.email)}",
                            oninput: move |evt| form.write().email = format::optional(evt.value()),
                        }
                    }
                    Field {
                        label: "Phone",
                        error: error_for(&errors, "phone"),
                        input {
                            class: "input input-bordered w-full",
                            value: "{text(&current.phone)}",
                            oninput: move |evt| form.write().phone = format::optional(evt.value()),
                        }
                    }
                    Field {
                        label: "Address",
                        input {
                            class: "input input-bordered w-full",
                            value: "{text(&current.address)}",
                            oninput: move |evt| form.write().address = format::optional(evt.value()),
                        }
                    }
                    Field {
                        label: "Profile picture URL",
                        input {
                            class: "input input-bordered w-full",
                            value: "{text(&current.profile_picture)}",
                            oninput: move |evt| form.write().profile_picture = format::optional(evt.value()),
                        }
                    }
                    if role == Some(Role::Coach) {
                        Field {
                            label: "License number",
                            input {
                                class: "input input-bordered w-full",
                                value: "{text(&current.license_number)}",
                                oninput: move |evt| form.write().license_number = format::optional(evt.value()),
                            }
                        }
                        Field {
                            label: "Years of experience",
                            input {
                                r#type: "number",
                                min: "0",
                                class: "input input-bordered w-full",
                                value: "{format::number(current.years_of_experience)}",
                                oninput: move |evt| form.write().years_of_experience = evt.value().trim().parse().ok(),
                            }
                        }
                        Field {
                            label: "Specialization",
                            input {
                                class: "input input-bordered w-full",
                                value: "{text(&current.specialization)}",
                                oninput: move |evt| form.write().specialization = format::optional(evt.value()),
                            }
                        }
                    }
                    if role == Some(Role::Organizer) {
                        Field {
                            label: "Organization",
                            input {
                                class: "input input-bordered w-full",
                                value: "{text(&current.organization)}",
                                oninput: move |evt| form.write().organization = format::optional(evt.value()),
                            }
                        }
                        Field {
                            label: "Contact details",
                            input {
                                class: "input input-bordered w-full",
                                value: "{text(&current.contact_details)}",
                                oninput: move |evt| form.write().contact_details = format::optional(evt.value()),
                            }
                        }
                    }
                }
                Field {
                    label: "Biography",
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 4,
                        value: "{text(&current.biography)}",
                        oninput: move |evt| form.write().biography = format::optional(evt.value()),
                    }
                }
                div {
                    class: "card-actions justify-end",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: saving(),
                        onclick: move |_| on_done.call(()),
                        "Cancel"
                    }
                    SubmitButton { label: "Save", busy_label: "Saving...", is_busy: saving() }
                }
            }
        }
    }
}

#[component]
fn ChangePasswordForm() -> Element {
    let client = use_client();

    let mut form = use_signal(ChangePasswordRequest::default);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut outcome = use_signal(|| None::<Result<(), String>>);
    let mut saving = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = form();
        let validation = validate_change_password(&request);
        let valid = validation.is_empty();
        errors.set(validation);
        if !valid {
            return;
        }

        let client = client.clone();
        saving.set(true);
        outcome.set(None);
        spawn(async move {
            match client.users().change_password(&request).await {
                Ok(()) => {
                    form.set(ChangePasswordRequest::default());
                    outcome.set(Some(Ok(())));
                }
                Err(err) => {
                    tracing::error!("Failed to change password: {}", err);
                    outcome.set(Some(Err(err.user_message())));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "card bg-base-200",
            onsubmit: on_submit,
            div {
                class: "card-body",
                h2 { class: "card-title", "Change password" }
                match outcome() {
                    Some(Ok(())) => rsx! { SuccessAlert { message: "Password changed" } },
                    Some(Err(message)) => rsx! { ErrorAlert { message } },
                    None => rsx! {},
                }
                Field {
                    label: "Current password",
                    error: error_for(&errors, "currentPassword"),
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        value: "{form.read().current_password}",
                        oninput: move |evt| form.write().current_password = evt.value(),
                    }
                }
                Field {
                    label: "New password",
                    error: error_for(&errors, "newPassword"),
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        value: "{form.read().new_password}",
                        oninput: move |evt| form.write().new_password = evt.value(),
                    }
                }
                Field {
                    label: "Confirm new password",
                    error: error_for(&errors, "confirmPassword"),
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        value: "{form.read().confirm_password}",
                        oninput: move |evt| form.write().confirm_password = evt.value(),
                    }
                }
                div {
                    class: "card-actions justify-end",
                    SubmitButton { label: "Change password", busy_label: "Saving...", is_busy: saving() }
                }
            }
        }
    }
}
