mod compose;
mod detail;

pub use compose::ComposeMessage;
pub use detail::MessageDetail;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    listing::SortDirection,
    model::{
        message::{InboxFilter, MessageDto, RecipientCategory, SentFilter},
        user::Role,
    },
    ApiError,
};

use crate::client::{
    api::use_client,
    component::{
        listing::{
            enum_options, use_listing, use_rows, ChoiceFilter, DateRangeFilter, FilterPanel,
            SortableHeader, TextFilter,
        },
        page::{EmptyState, ErrorAlert},
        Page, PaginationControls,
    },
    constant::SITE_NAME,
    format,
    router::Route,
};

const PREVIEW_CHARS: usize = 80;

#[derive(Clone, Copy, PartialEq)]
enum Mailbox {
    Inbox,
    Sent,
}

#[component]
pub fn Messages() -> Element {
    let mut mailbox = use_signal(|| Mailbox::Inbox);
    let tab_class = move |m: Mailbox| if mailbox() == m { "tab tab-active" } else { "tab" };

    rsx! {
        Title { "Messages | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-4",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-lg sm:text-2xl", "Messages" }
                    Link { to: Route::ComposeMessage {}, class: "btn btn-primary btn-sm", "New message" }
                }
                div {
                    role: "tablist",
                    class: "tabs tabs-border",
                    button { role: "tab", class: tab_class(Mailbox::Inbox), onclick: move |_| mailbox.set(Mailbox::Inbox), "Inbox" }
                    button { role: "tab", class: tab_class(Mailbox::Sent), onclick: move |_| mailbox.set(Mailbox::Sent), "Sent" }
                }
                match mailbox() {
                    Mailbox::Inbox => rsx! { Inbox {} },
                    Mailbox::Sent => rsx! { SentBox {} },
                }
            }
        }
    }
}

#[component]
fn Inbox() -> Element {
    let client = use_client();
    let mut unread_only = use_signal(|| false);
    let mut notice = use_signal(|| None::<String>);

    let mut messages = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let filter = InboxFilter {
                is_read: unread_only().then_some(false),
                ..Default::default()
            };
            async move {
                client
                    .messages()
                    .get_inbox(&filter)
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch inbox: {}", err))
            }
        }
    });

    let mark_all_read = move |_| {
        let client = client.clone();
        spawn(async move {
            match client.messages().mark_all_as_read().await {
                Ok(_) => messages.restart(),
                Err(err) => {
                    tracing::error!("Failed to mark messages as read: {}", err);
                    notice.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx! {
        if let Some(message) = notice() {
            ErrorAlert { message }
        }
        div {
            class: "flex justify-between items-center",
            label {
                class: "label cursor-pointer gap-2",
                input {
                    r#type: "checkbox",
                    class: "toggle toggle-sm",
                    checked: unread_only(),
                    onchange: move |evt| unread_only.set(evt.checked()),
                }
                "Unread only"
            }
            button { class: "btn btn-sm", onclick: mark_all_read, "Mark all as read" }
        }
        MessageTable { messages, incoming: true }
    }
}

#[component]
fn SentBox() -> Element {
    let client = use_client();

    let messages = use_resource(move || {
        let client = client.clone();
        async move {
            client
                .messages()
                .get_sent(&SentFilter::default())
                .await
                .inspect_err(|err| tracing::error!("Failed to fetch sent messages: {}", err))
        }
    });

    rsx!(MessageTable { messages, incoming: false })
}

#[component]
fn MessageTable(messages: Resource<Result<Vec<MessageDto>, ApiError>>, incoming: bool) -> Element {
    let listing = use_listing(use_rows(messages), "sentAt", SortDirection::Desc);

    let body = match &*messages.read_unchecked() {
        None => return rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => return rsx! { ErrorAlert { message: err.user_message() } },
        Some(Ok(_)) => listing.page.read().clone(),
    };

    rsx! {
        FilterPanel {
            on_apply: move |_| listing.apply_filters(),
            on_reset: move |_| listing.reset_filters(),
            TextFilter { label: "Content", field: "content", filters: listing.filters }
            if incoming {
                ChoiceFilter {
                    label: "Sender role",
                    field: "senderRole",
                    options: enum_options!(Role),
                    filters: listing.filters
                }
            }
            ChoiceFilter {
                label: "Audience",
                field: "recipientCategory",
                options: enum_options!(RecipientCategory),
                filters: listing.filters
            }
            DateRangeFilter { label: "Sent between", field: "sentAt", filters: listing.filters }
        }
        if listing.rows.read().is_empty() {
            EmptyState { title: if incoming { "Your inbox is empty" } else { "No sent messages" } }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table w-full",
                    thead {
                        tr {
                            SortableHeader { label: "Sent", field: "sentAt", sort: listing.sort }
                            if incoming {
                                SortableHeader { label: "From", field: "senderRole", sort: listing.sort }
                            }
                            SortableHeader { label: "Audience", field: "recipientCategory", sort: listing.sort }
                            SortableHeader { label: "Message", field: "content", sort: listing.sort }
                        }
                    }
                    tbody {
                        for message in body {
                            tr {
                                class: if incoming && !message.is_read { "font-semibold" } else { "" },
                                td { class: "whitespace-nowrap", "{format::date_time(message.sent_at)}" }
                                if incoming {
                                    td {
                                        if let Some(role) = &message.sender_role {
                                            span { class: "badge badge-sm {role.badge_color()}", "{role}" }
                                        }
                                    }
                                }
                                td { "{format::label(message.recipient_category.as_ref())}" }
                                td {
                                    match message.id {
                                        Some(id) => rsx! {
                                            Link { to: Route::MessageDetail { id }, class: "link link-hover", "{message.preview(PREVIEW_CHARS)}" }
                                        },
                                        None => rsx! { "{message.preview(PREVIEW_CHARS)}" },
                                    }
                                }
                            }
                        }
                    }
                }
            }
            PaginationControls { pagination: listing.pagination }
        }
    }
}
