use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::model::competition::{CompetitionStatus, OrganizerCompetitionDto};

use crate::client::{
    api::use_client, component::Page, constant::SITE_NAME, model::auth::use_user_id,
    router::Route,
};

use super::competition_form::CompetitionForm;

#[component]
pub fn OrganizerCreateCompetition() -> Element {
    let client = use_client();
    let organizer_id = use_user_id();
    let nav = navigator();

    let mut saving = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);

    let on_submit = move |competition: OrganizerCompetitionDto| {
        let client = client.clone();
        // New competitions open as upcoming unless the form said otherwise.
        let competition = OrganizerCompetitionDto {
            status: competition.status.clone().or(Some(CompetitionStatus::Upcoming)),
            ..competition
        };
        saving.set(true);
        failure.set(None);
        spawn(async move {
            match client.competitions().create(organizer_id, &competition).await {
                Ok(created) => match created.id {
                    Some(id) => {
                        nav.push(Route::OrganizerCompetitionDetail { id });
                    }
                    None => {
                        nav.push(Route::OrganizerCompetitions {});
                    }
                },
                Err(err) => {
                    tracing::error!("Failed to create competition: {}", err);
                    failure.set(Some(err.user_message()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        Title { "New competition | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            CompetitionForm {
                initial: OrganizerCompetitionDto::default(),
                title: "New competition",
                submit_label: "Create",
                busy_label: "Creating...",
                saving: saving(),
                failure: failure(),
                on_submit,
                on_cancel: move |_| {
                    nav.push(Route::OrganizerCompetitions {});
                },
            }
        }
    }
}
