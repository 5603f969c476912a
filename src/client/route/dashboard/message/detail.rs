use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::ApiError;

use crate::client::{
    api::use_client,
    component::{
        page::{ApiErrorPage, ErrorAlert, LoadingPage},
        ConfirmationModal, Page,
    },
    constant::SITE_NAME,
    format,
    model::auth::AuthContext,
    router::Route,
};

#[component]
pub fn MessageDetail(id: i64) -> Element {
    let client = use_client();
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);

    let message = use_resource({
        let client = client.clone();
        use_reactive!(|id| {
            let client = client.clone();
            async move {
                let message = client
                    .messages()
                    .get_by_id(id)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch message {}: {}", id, err))?;

                let user_id = auth.peek_user().and_then(|u| u.id);
                if !message.is_read && message.sender_id != user_id {
                    if let Err(err) = client.messages().mark_as_read(id).await {
                        tracing::warn!("Failed to mark message {} as read: {}", id, err);
                    }
                }
                Ok::<_, ApiError>(message)
            }
        })
    });

    let on_delete = move |_| {
        let Some(user_id) = auth.peek_user().and_then(|u| u.id) else {
            return;
        };
        let client = client.clone();
        deleting.set(true);
        spawn(async move {
            match client.messages().delete(id, user_id).await {
                Ok(()) => {
                    show_delete.set(false);
                    nav.push(Route::Messages {});
                }
                Err(err) => {
                    tracing::error!("Failed to delete message {}: {}", id, err);
                    failure.set(Some(err.user_message()));
                    show_delete.set(false);
                }
            }
            deleting.set(false);
        });
    };

    let message = match &*message.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(message)) => message.clone(),
    };

    rsx! {
        Title { "Message | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-3xl flex flex-col gap-4",
                Link { to: Route::Messages {}, class: "link link-hover text-sm", "Back to messages" }
                if let Some(message) = failure() {
                    ErrorAlert { message }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body gap-4",
                        div {
                            class: "flex flex-wrap gap-2 items-center text-sm",
                            if let Some(role) = &message.sender_role {
                                span { class: "badge {role.badge_color()}", "{role}" }
                            }
                            span { class: "badge badge-outline", "{format::label(message.recipient_category.as_ref())}" }
                            span { class: "opacity-60", "{format::date_time(message.sent_at)}" }
                        }
                        div {
                            class: "prose max-w-none",
                            dangerous_inner_html: "{format::markdown(&message.content)}",
                        }
                        div {
                            class: "card-actions justify-end",
                            button {
                                class: "btn btn-sm btn-error btn-outline",
                                onclick: move |_| show_delete.set(true),
                                "Delete"
                            }
                        }
                    }
                }
            }
            ConfirmationModal {
                show: show_delete,
                title: "Delete message",
                message: "This message will be removed from your mailbox.",
                confirm_text: "Delete",
                is_processing: deleting(),
                on_confirm: on_delete,
            }
        }
    }
}
