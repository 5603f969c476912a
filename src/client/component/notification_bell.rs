use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaBell, Icon};
use dioxus_logger::tracing;
use league_api::model::notification::NotificationDto;

use crate::client::{
    api::use_client,
    constant::NOTIFICATION_DROPDOWN_LIMIT,
    format,
    model::notification::NotificationContext,
    router::Route,
};

/// Header bell with the unread badge and the latest notifications.
#[component]
pub fn NotificationBell() -> Element {
    let notifications = use_context::<NotificationContext>();
    let client = use_client();

    let center = notifications.read().clone();
    let badge = center.badge();
    let recent: Vec<NotificationDto> = center
        .notifications
        .iter()
        .take(NOTIFICATION_DROPDOWN_LIMIT)
        .cloned()
        .collect();

    let mark_all_read = move |_| {
        let client = client.clone();
        spawn(async move {
            match client.notifications().mark_all_as_read().await {
                Ok(()) => notifications.update(|center| center.mark_all_read()),
                Err(err) => tracing::error!("Failed to mark notifications as read: {}", err),
            }
        });
    };

    rsx! {
        div {
            class: "dropdown dropdown-end",
            div {
                tabindex: 0,
                role: "button",
                class: "btn btn-ghost btn-circle",
                div {
                    class: "indicator",
                    Icon { width: 20, height: 20, icon: FaBell }
                    if let Some(badge) = badge {
                        span { class: "badge badge-xs badge-error indicator-item", "{badge}" }
                    }
                }
            }
            div {
                tabindex: 0,
                class: "dropdown-content card card-sm bg-base-100 z-30 w-80 shadow",
                div {
                    class: "card-body",
                    div {
                        class: "flex justify-between items-center",
                        h3 { class: "font-semibold", "Notifications" }
                        if center.has_unread() {
                            button { class: "btn btn-xs btn-ghost", onclick: mark_all_read, "Mark all as read" }
                        }
                    }
                    if recent.is_empty() {
                        p { class: "text-sm opacity-50 py-4 text-center", "No notifications" }
                    } else {
                        ul {
                            class: "menu w-full p-0",
                            for notification in recent {
                                NotificationItem { notification }
                            }
                        }
                    }
                    Link { to: Route::Notifications {}, class: "btn btn-sm btn-block", "View all" }
                }
            }
        }
    }
}

#[component]
pub fn NotificationItem(notification: NotificationDto) -> Element {
    let notifications = use_context::<NotificationContext>();
    let client = use_client();
    let nav = navigator();

    let is_read = notification.is_read;
    let target = notification.target_path();
    let id = notification.id;

    let open = move |_| {
        let client = client.clone();
        let target = target.clone();
        spawn(async move {
            if let (Some(id), false) = (id, is_read) {
                match client.notifications().mark_as_read(id).await {
                    Ok(()) => {
                        notifications.update(|center| {
                            center.mark_read(id);
                        });
                    }
                    Err(err) => tracing::error!("Failed to mark notification as read: {}", err),
                }
            }
            if let Some(route) = target.and_then(|path| path.parse::<Route>().ok()) {
                nav.push(route);
            }
        });
    };

    rsx! {
        li {
            button {
                class: if is_read { "flex flex-col items-start opacity-60" } else { "flex flex-col items-start font-semibold" },
                onclick: open,
                span { class: "text-sm", "{notification.message}" }
                span { class: "text-xs opacity-50", "{format::date_time(notification.created_at)}" }
            }
        }
    }
}
