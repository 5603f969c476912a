//! Table plumbing shared by the list pages: a hook that chains filtering, sorting and
//! paging over fetched rows, plus the header and filter inputs bound to it.

use chrono::NaiveDate;
use dioxus::prelude::*;
use league_api::{
    listing::{
        FilterSet, FilterValue, Filterable, Pagination, SortConfig, SortDirection, Sortable,
    },
    ApiError,
};

use super::pagination::use_paged;

/// (wire value, label) pairs of a backend enum, for [`ChoiceFilter`].
macro_rules! enum_options {
    ($enum:ty) => {
        <$enum>::variants()
            .iter()
            .map(|v| (v.as_str().to_string(), v.label().to_string()))
            .collect::<Vec<(String, String)>>()
    };
}

pub(crate) use enum_options;

pub struct Listing<T: 'static> {
    pub filters: Signal<FilterSet>,
    pub sort: Signal<SortConfig>,
    pub pagination: Signal<Pagination>,
    /// Rows matching the active filters, sorted.
    pub rows: Memo<Vec<T>>,
    /// Rows of the current page.
    pub page: Memo<Vec<T>>,
}

impl<T> Clone for Listing<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Listing<T> {}

impl<T: Clone + PartialEq + 'static> Listing<T> {
    pub fn apply_filters(&self) {
        let mut filters = self.filters;
        let mut pagination = self.pagination;
        filters.write().apply();
        pagination.write().first();
    }

    pub fn reset_filters(&self) {
        let mut filters = self.filters;
        let mut pagination = self.pagination;
        filters.write().reset();
        pagination.write().first();
    }
}

pub fn use_listing<T>(items: Memo<Vec<T>>, field: &'static str, direction: SortDirection) -> Listing<T>
where
    T: Filterable + Sortable + Clone + PartialEq + 'static,
{
    let filters = use_signal(FilterSet::new);
    let sort = use_signal(|| SortConfig::new(field, direction));
    let pagination = use_signal(Pagination::default);

    let rows = use_memo(move || {
        let matching = filters.read().apply_to(&items.read());
        sort.read().sorted(matching)
    });
    let page = use_paged(rows, pagination);

    Listing {
        filters,
        sort,
        pagination,
        rows,
        page,
    }
}

#[component]
pub fn SortableHeader(label: String, field: &'static str, mut sort: Signal<SortConfig>) -> Element {
    let config = sort();
    let is_active = config.is_sorted(field);

    rsx! {
        th {
            aria_sort: config.aria_sort(field),
            button {
                class: "flex items-center gap-2 hover:opacity-70 transition-opacity w-full justify-start",
                onclick: move |_| sort.write().sort_by(field),
                span { class: "whitespace-nowrap", "{label}" }
                span {
                    class: if is_active { "opacity-100" } else { "opacity-0" },
                    "{config.indicator(field)}"
                }
            }
        }
    }
}

#[component]
pub fn TextFilter(label: String, field: &'static str, mut filters: Signal<FilterSet>) -> Element {
    rsx! {
        fieldset {
            class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            input {
                r#type: "text",
                class: "input input-bordered input-sm w-full",
                value: "{filters.read().text(field)}",
                oninput: move |evt| filters.write().set_text(field, &evt.value()),
            }
        }
    }
}

/// Single-choice select; `options` are (wire value, label) pairs.
#[component]
pub fn ChoiceFilter(
    label: String,
    field: &'static str,
    options: Vec<(String, String)>,
    mut filters: Signal<FilterSet>,
) -> Element {
    let selected = filters.read().text(field);

    rsx! {
        fieldset {
            class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            select {
                class: "select select-bordered select-sm w-full",
                onchange: move |evt| filters.write().set_choice(field, &evt.value()),
                option { value: "", selected: selected.is_empty(), "All" }
                for (value, text) in options {
                    option {
                        selected: selected == value,
                        value: "{value}",
                        "{text}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn DateRangeFilter(label: String, field: &'static str, mut filters: Signal<FilterSet>) -> Element {
    let (from, to) = match filters.read().get(field) {
        Some(FilterValue::DateRange { from, to }) => (*from, *to),
        _ => (None, None),
    };
    let show = |date: Option<NaiveDate>| date.map(|d| d.to_string()).unwrap_or_default();

    rsx! {
        fieldset {
            class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            div {
                class: "flex gap-2",
                input {
                    r#type: "date",
                    class: "input input-bordered input-sm w-full",
                    value: "{show(from)}",
                    oninput: move |evt| {
                        let from = evt.value().parse().ok();
                        filters.write().set_date_range(field, from, to);
                    },
                }
                input {
                    r#type: "date",
                    class: "input input-bordered input-sm w-full",
                    value: "{show(to)}",
                    oninput: move |evt| {
                        let to = evt.value().parse().ok();
                        filters.write().set_date_range(field, from, to);
                    },
                }
            }
        }
    }
}

/// Collapsible filter form with Apply and Reset buttons.
#[component]
pub fn FilterPanel(on_apply: EventHandler<()>, on_reset: EventHandler<()>, children: Element) -> Element {
    rsx! {
        details {
            class: "collapse collapse-arrow bg-base-200 mb-4",
            summary { class: "collapse-title font-semibold", "Filters" }
            div {
                class: "collapse-content",
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_apply.call(());
                    },
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        {children}
                    }
                    div {
                        class: "flex justify-end gap-2 mt-4",
                        button {
                            r#type: "button",
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| on_reset.call(()),
                            "Reset"
                        }
                        button { r#type: "submit", class: "btn btn-sm btn-primary", "Apply" }
                    }
                }
            }
        }
    }
}

/// Rows of a fetched list, empty while loading or after an error.
pub fn use_rows<T: Clone + PartialEq + 'static>(
    resource: Resource<Result<Vec<T>, ApiError>>,
) -> Memo<Vec<T>> {
    use_memo(move || match &*resource.read() {
        Some(Ok(rows)) => rows.clone(),
        _ => Vec::new(),
    })
}
