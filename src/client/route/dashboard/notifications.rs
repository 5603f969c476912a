use std::str::FromStr;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::model::notification::NotificationDto;

use crate::client::{
    api::use_client,
    component::{page::EmptyState, ConfirmationModal, Page},
    constant::SITE_NAME,
    format,
    model::notification::NotificationContext,
    router::Route,
};

#[component]
pub fn Notifications() -> Element {
    let notifications = use_context::<NotificationContext>();
    let client = use_client();
    let mut loading = use_signal(|| true);

    use_future({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                notifications.refresh(&client).await;
                loading.set(false);
            }
        }
    });

    let mark_all_read = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                match client.notifications().mark_all_as_read().await {
                    Ok(()) => notifications.update(|center| center.mark_all_read()),
                    Err(err) => tracing::error!("Failed to mark notifications as read: {}", err),
                }
            });
        }
    };

    let center = notifications.read().clone();

    rsx! {
        Title { "Notifications | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-3xl flex flex-col gap-4",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-lg sm:text-2xl", "Notifications" }
                    button {
                        class: "btn btn-sm",
                        disabled: !center.has_unread(),
                        onclick: mark_all_read,
                        "Mark all as read"
                    }
                }
                if loading() && center.notifications.is_empty() {
                    span { class: "loading loading-spinner" }
                } else if center.notifications.is_empty() {
                    EmptyState { title: "You have no notifications" }
                } else {
                    ul {
                        class: "list bg-base-200 rounded-box",
                        for notification in center.notifications.clone() {
                            NotificationRow { notification }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationRow(notification: NotificationDto) -> Element {
    let notifications = use_context::<NotificationContext>();
    let client = use_client();
    let nav = navigator();
    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let id = notification.id;
    let target = notification
        .target_path()
        .and_then(|path| Route::from_str(&path).ok());
    let is_read = notification.is_read;

    let open = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            let target = target.clone();
            spawn(async move {
                if let (Some(id), false) = (id, is_read) {
                    match client.notifications().mark_as_read(id).await {
                        Ok(()) => notifications.update(|center| {
                            center.mark_read(id);
                        }),
                        Err(err) => tracing::error!("Failed to mark notification {} as read: {}", id, err),
                    }
                }
                if let Some(target) = target {
                    nav.push(target);
                }
            });
        }
    };

    let delete = move |_| {
        let Some(id) = id else {
            return;
        };
        let client = client.clone();
        deleting.set(true);
        spawn(async move {
            match client.notifications().delete(id).await {
                Ok(()) => notifications.update(|center| center.remove(id)),
                Err(err) => tracing::error!("Failed to delete notification {}: {}", id, err),
            }
            deleting.set(false);
            show_delete.set(false);
        });
    };

    rsx! {
        li {
            class: if is_read { "list-row opacity-60" } else { "list-row" },
            div {
                class: "list-col-grow cursor-pointer",
                onclick: open,
                p { class: if is_read { "" } else { "font-semibold" }, "{notification.message}" }
                p {
                    class: "text-xs opacity-60",
                    "{format::text(notification.sender_name.as_deref())} · {format::date_time(notification.created_at)}"
                }
            }
            button {
                class: "btn btn-xs btn-ghost",
                onclick: move |_| show_delete.set(true),
                "Delete"
            }
            ConfirmationModal {
                show: show_delete,
                title: "Delete notification",
                message: "This notification will be removed.",
                confirm_text: "Delete",
                is_processing: deleting(),
                on_confirm: delete,
            }
        }
    }
}
