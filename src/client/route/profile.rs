use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::model::{
    competition::CompetitionDto,
    team::{TeamDto, TeamFilter},
    user::{Role, UserDto},
};

use crate::client::{
    api::use_client,
    component::{
        page::{ApiErrorPage, ErrorAlert, ErrorPage, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    format,
    router::Route,
};

/// Public profile of a coach or an organizer.
#[component]
pub fn PublicProfile(id: i64) -> Element {
    let client = use_client();

    let user = use_resource(use_reactive!(|id| {
        let client = client.clone();
        async move {
            client
                .users()
                .get_user(id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch user {}: {}", id, err))
        }
    }));

    let user = match &*user.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(user)) => user.clone(),
    };

    let role = match &user.role {
        Some(role @ (Role::Coach | Role::Organizer)) => role.clone(),
        _ => {
            return rsx!(ErrorPage {
                status: 404,
                message: "This profile is not public".to_string()
            })
        }
    };

    rsx! {
        Title { "{user.display_name()} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-5xl flex flex-col gap-8",
                ProfileCard { user: user.clone(), role: role.clone() }
                if role == Role::Coach {
                    section {
                        h2 { class: "text-lg mb-2", "Teams" }
                        CoachTeamList { coach_id: id }
                    }
                } else {
                    section {
                        h2 { class: "text-lg mb-2", "Competitions" }
                        OrganizerCompetitionList { organizer_id: id }
                    }
                }
                div {
                    class: "flex justify-center",
                    Link { to: Route::Home {}, class: "btn btn-outline", "Back to home" }
                }
            }
        }
    }
}

#[component]
fn ProfileCard(user: UserDto, role: Role) -> Element {
    let initial = user
        .display_name()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string());

    let details: Vec<(&str, String)> = match &role {
        Role::Coach => vec![
            ("License number", format::text(user.license_number.as_deref())),
            ("Years of experience", format::number(user.years_of_experience)),
            ("Specialization", format::text(user.specialization.as_deref())),
            ("Teams", format::number(user.number_of_teams)),
        ],
        _ => vec![
            ("Organization", format::text(user.organization.as_deref())),
            ("Active competitions", format::number(user.active_competitions_count)),
        ],
    };
    let biography = user
        .biography
        .clone()
        .unwrap_or_else(|| "No biography yet.".to_string());
    // createdAt is an ISO timestamp; the day is enough here
    let member_since = format::text(
        user.created_at
            .as_deref()
            .map(|created| created.get(..10).unwrap_or(created)),
    );
    let contact = [
        user.organization.clone(),
        user.address.clone(),
        user.contact_details.clone(),
        user.phone.clone(),
    ];

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-col md:flex-row gap-8",
                div {
                    class: "flex flex-col items-center gap-2 md:w-1/3",
                    match &user.profile_picture {
                        Some(picture) => rsx! {
                            img { class: "w-32 h-32 rounded-full object-cover", src: "{picture}", alt: "" }
                        },
                        None => rsx! {
                            div {
                                class: "avatar placeholder",
                                div {
                                    class: "bg-neutral text-neutral-content w-32 rounded-full",
                                    span { class: "text-4xl", "{initial}" }
                                }
                            }
                        },
                    }
                    span { class: "badge {role.badge_color()}", "{role}" }
                    h1 { class: "text-xl font-bold text-center", "{user.display_name()}" }
                    if let Some(user_name) = &user.user_name {
                        span { class: "text-sm opacity-60", "@{user_name}" }
                    }
                    for line in contact.into_iter().flatten() {
                        span { class: "text-sm", "{line}" }
                    }
                    span { class: "text-sm opacity-60 mt-2", "Member since {member_since}" }
                }
                div {
                    class: "flex flex-col gap-4 md:w-2/3",
                    h2 { class: "text-lg", "Biography" }
                    p { "{biography}" }
                    div { class: "divider my-0" }
                    dl {
                        class: "grid grid-cols-2 gap-2 text-sm",
                        for (title, value) in details {
                            dt { class: "opacity-60", "{title}" }
                            dd { "{value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CoachTeamList(coach_id: i64) -> Element {
    let client = use_client();
    let teams = use_resource(use_reactive!(|coach_id| {
        let client = client.clone();
        async move {
            client
                .teams()
                .get_by_coach(coach_id, &TeamFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch coach teams: {}", err))
        }
    }));

    match &*teams.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "opacity-60", "No teams yet" } },
        Some(Ok(list)) => rsx! {
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                for team in list.clone() {
                    TeamCard { team }
                }
            }
        },
    }
}

#[component]
fn TeamCard(team: TeamDto) -> Element {
    rsx! {
        div {
            class: "card bg-base-100 border border-base-300",
            div {
                class: "card-body",
                match team.id {
                    Some(id) => rsx! {
                        Link { to: Route::TeamDetail { id }, class: "card-title link link-hover", "{format::text(team.name.as_deref())}" }
                    },
                    None => rsx! { h3 { class: "card-title", "{format::text(team.name.as_deref())}" } },
                }
                p { class: "text-sm opacity-60", "{format::text(team.category.as_deref())}" }
                div {
                    class: "flex gap-2",
                    span { class: "badge badge-outline", "{format::number(team.player_count)} players" }
                    span { class: "badge badge-outline", "{format::number(team.competition_count)} competitions" }
                }
            }
        }
    }
}

#[component]
fn OrganizerCompetitionList(organizer_id: i64) -> Element {
    let client = use_client();
    let competitions = use_resource(use_reactive!(|organizer_id| {
        let client = client.clone();
        async move {
            client
                .competitions()
                .get_by_user(organizer_id)
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch organizer competitions: {}", err))
        }
    }));

    match &*competitions.read_unchecked() {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "opacity-60", "No competitions yet" } },
        Some(Ok(list)) => rsx! {
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                for competition in list.clone() {
                    CompetitionCard { competition }
                }
            }
        },
    }
}

#[component]
fn CompetitionCard(competition: CompetitionDto) -> Element {
    rsx! {
        div {
            class: "card bg-base-100 border border-base-300",
            div {
                class: "card-body",
                match competition.id {
                    Some(id) => rsx! {
                        Link { to: Route::CompetitionDetail { id }, class: "card-title link link-hover", "{format::text(competition.name.as_deref())}" }
                    },
                    None => rsx! { h3 { class: "card-title", "{format::text(competition.name.as_deref())}" } },
                }
                div {
                    class: "flex justify-between items-center text-sm",
                    span { class: "opacity-60", "{format::date(competition.start_date)} - {format::date(competition.end_date)}" }
                    if let Some(status) = &competition.status {
                        span { class: "badge {status.badge_color()}", "{status}" }
                    }
                }
                span { class: "badge badge-outline", "{format::number(competition.registered_teams)} teams" }
            }
        }
    }
}

/// Name linking to the public profile when the user id is known.
#[component]
pub fn ProfileLink(user_id: Option<i64>, name: Option<String>) -> Element {
    let name = format::text(name.as_deref());
    match user_id {
        Some(id) => rsx! {
            Link { to: Route::PublicProfile { id }, class: "link link-hover", "{name}" }
        },
        None => rsx! { span { "{name}" } },
    }
}
