use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::{
    listing::SortDirection,
    model::media::{MediaDto, MediaFilter, MediaType},
};

use crate::client::{
    api::use_client,
    component::{
        listing::{
            enum_options, use_listing, use_rows, ChoiceFilter, DateRangeFilter, FilterPanel,
            TextFilter,
        },
        page::{ApiErrorPage, EmptyState, ErrorAlert, LoadingPage, SuccessAlert},
        ConfirmationModal, Page, PaginationControls, ReasonModal,
    },
    constant::SITE_NAME,
    format,
    model::auth::AuthContext,
};

/// Sort choices offered above the gallery, as (field, label).
const SORT_FIELDS: [(&str, &str); 4] = [
    ("uploadedAt", "Upload date"),
    ("title", "Title"),
    ("viewCount", "Views"),
    ("mediaType", "Type"),
];

#[component]
pub fn Media() -> Element {
    let client = use_client();
    let auth = use_context::<AuthContext>();

    let mut media = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                client
                    .media()
                    .get_all(&MediaFilter::default())
                    .await
                    .inspect_err(|err| tracing::error!("Failed to fetch media: {}", err))
            }
        }
    });
    let mut listing = use_listing(use_rows(media), "uploadedAt", SortDirection::Desc);

    let mut report_target = use_signal(|| None::<i64>);
    let mut delete_target = use_signal(|| None::<i64>);
    let mut show_report = use_signal(|| false);
    let mut show_delete = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut notice = use_signal(|| None::<Result<String, String>>);

    let user_id = auth.read().user_id();

    let on_report = {
        let client = client.clone();
        move |reason: String| {
            let (Some(user_id), Some(media_id)) = (user_id, report_target()) else {
                return;
            };
            let client = client.clone();
            processing.set(true);
            spawn(async move {
                let reason = format!("Media #{}: {}", media_id, reason);
                match client.media().report(user_id, &reason).await {
                    Ok(()) => notice.set(Some(Ok("Thanks, the report was sent to the moderators".to_string()))),
                    Err(err) => {
                        tracing::error!("Failed to report media {}: {}", media_id, err);
                        notice.set(Some(Err(err.user_message())));
                    }
                }
                processing.set(false);
                show_report.set(false);
            });
        }
    };

    let on_delete = move |_| {
        let (Some(user_id), Some(media_id)) = (user_id, delete_target()) else {
            return;
        };
        let client = client.clone();
        processing.set(true);
        spawn(async move {
            match client.media().delete(user_id, media_id).await {
                Ok(()) => {
                    notice.set(Some(Ok("Media deleted".to_string())));
                    media.restart();
                }
                Err(err) => {
                    tracing::error!("Failed to delete media {}: {}", media_id, err);
                    notice.set(Some(Err(err.user_message())));
                }
            }
            processing.set(false);
            show_delete.set(false);
        });
    };

    let body = match &*media.read_unchecked() {
        None => return rsx!(LoadingPage {}),
        Some(Err(err)) => return rsx!(ApiErrorPage { error: err.clone() }),
        Some(Ok(_)) => listing.page.read().clone(),
    };
    let sort = listing.sort.read().clone();
    let direction_label = match sort.direction {
        SortDirection::Asc => "Ascending",
        SortDirection::Desc => "Descending",
    };

    rsx! {
        Title { "Media | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-4",
                h1 { class: "text-lg sm:text-2xl", "Media" }
                match notice() {
                    Some(Ok(message)) => rsx! { SuccessAlert { message } },
                    Some(Err(message)) => rsx! { ErrorAlert { message } },
                    None => rsx! {},
                }
                FilterPanel {
                    on_apply: move |_| listing.apply_filters(),
                    on_reset: move |_| listing.reset_filters(),
                    TextFilter { label: "Title", field: "title", filters: listing.filters }
                    ChoiceFilter {
                        label: "Type",
                        field: "mediaType",
                        options: enum_options!(MediaType),
                        filters: listing.filters
                    }
                    TextFilter { label: "Competition", field: "competitionName", filters: listing.filters }
                    TextFilter { label: "Team", field: "teamName", filters: listing.filters }
                    TextFilter { label: "Match", field: "matchTitle", filters: listing.filters }
                    TextFilter { label: "Uploaded by", field: "uploaderName", filters: listing.filters }
                    DateRangeFilter { label: "Uploaded between", field: "uploadedAt", filters: listing.filters }
                }
                div {
                    class: "flex gap-2 items-center justify-end",
                    span { class: "text-sm opacity-60", "Sort by" }
                    select {
                        class: "select select-bordered select-sm w-auto",
                        onchange: move |evt| {
                            let field = evt.value();
                            listing.sort.write().field = Some(field);
                        },
                        for (field, label) in SORT_FIELDS {
                            option {
                                value: field,
                                selected: sort.is_sorted(field),
                                "{label}"
                            }
                        }
                    }
                    button {
                        class: "btn btn-sm btn-ghost",
                        onclick: move |_| {
                            let direction = listing.sort.read().direction.toggled();
                            listing.sort.write().set_direction(direction);
                        },
                        "{direction_label}"
                    }
                }
                if listing.rows.read().is_empty() {
                    EmptyState { title: "No media found" }
                } else {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                        for item in body {
                            MediaCard {
                                can_delete: user_id.is_some() && item.uploader_id == user_id,
                                can_report: user_id.is_some(),
                                on_report: move |id| {
                                    report_target.set(Some(id));
                                    show_report.set(true);
                                },
                                on_delete: move |id| {
                                    delete_target.set(Some(id));
                                    show_delete.set(true);
                                },
                                item,
                            }
                        }
                    }
                    PaginationControls { pagination: listing.pagination }
                }
            }
            ReasonModal {
                show: show_report,
                title: "Report media",
                confirm_text: "Send report",
                confirm_class: "btn-warning",
                required: true,
                is_processing: processing(),
                on_confirm: on_report,
            }
            ConfirmationModal {
                show: show_delete,
                title: "Delete media",
                message: "This media will be permanently removed.",
                confirm_text: "Delete",
                is_processing: processing(),
                on_confirm: on_delete,
            }
        }
    }
}

#[component]
fn MediaCard(
    item: MediaDto,
    can_delete: bool,
    can_report: bool,
    on_report: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let url = item.url.clone().unwrap_or_default();

    rsx! {
        div {
            class: "card bg-base-200",
            figure {
                class: "h-48 bg-base-300",
                match item.media_type {
                    Some(MediaType::Image) => rsx! {
                        img { class: "object-cover w-full h-full", src: "{url}", alt: "{format::text(item.title.as_deref())}" }
                    },
                    Some(MediaType::Video) => rsx! {
                        video { class: "w-full h-full", src: "{url}", controls: true }
                    },
                    _ => rsx! {
                        a { class: "btn btn-outline", href: "{url}", target: "_blank", "Open document" }
                    },
                }
            }
            div {
                class: "card-body gap-1",
                h3 { class: "card-title text-base", "{format::text(item.title.as_deref())}" }
                if let Some(description) = &item.description {
                    p { class: "text-sm", "{description}" }
                }
                p {
                    class: "text-xs opacity-60",
                    "{format::text(item.uploader_name.as_deref())} · {format::date_time(item.uploaded_at)} · {format::number(item.view_count)} views"
                }
                div {
                    class: "flex flex-wrap gap-1",
                    if let Some(name) = &item.competition_name {
                        span { class: "badge badge-outline badge-sm", "{name}" }
                    }
                    if let Some(name) = &item.team_name {
                        span { class: "badge badge-outline badge-sm", "{name}" }
                    }
                    if let Some(name) = &item.match_title {
                        span { class: "badge badge-outline badge-sm", "{name}" }
                    }
                }
                if let Some(id) = item.id {
                    div {
                        class: "card-actions justify-end",
                        if can_report {
                            button { class: "btn btn-xs btn-ghost", onclick: move |_| on_report.call(id), "Report" }
                        }
                        if can_delete {
                            button { class: "btn btn-xs btn-error btn-outline", onclick: move |_| on_delete.call(id), "Delete" }
                        }
                    }
                }
            }
        }
    }
}
