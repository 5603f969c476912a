use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Criterion entered in a filter form.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Case-insensitive substring match.
    Text(String),
    /// The item value must be one of these.
    Choices(Vec<String>),
    /// Inclusive range; an open bound matches everything on that side.
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(text) => text.trim().is_empty(),
            FilterValue::Choices(choices) => choices.is_empty(),
            FilterValue::DateRange { from, to } => from.is_none() && to.is_none(),
        }
    }

    fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (FilterValue::Text(needle), FieldValue::Text(text)) => text
                .to_lowercase()
                .contains(&needle.trim().to_lowercase()),
            (FilterValue::Text(_), _) => false,
            (FilterValue::Choices(choices), FieldValue::Text(text)) => choices.contains(text),
            (FilterValue::Choices(choices), FieldValue::List(values)) => {
                values.iter().any(|v| choices.contains(v))
            }
            (FilterValue::Choices(_), FieldValue::Date(_)) => false,
            (FilterValue::DateRange { from, to }, FieldValue::Date(Some(date))) => {
                from.is_none_or(|from| *date >= from) && to.is_none_or(|to| *date <= to)
            }
            (FilterValue::DateRange { .. }, _) => false,
        }
    }
}

/// Value of a named field on a listed item.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Date(Option<NaiveDate>),
}

impl FieldValue {
    pub fn text(value: Option<&str>) -> Self {
        FieldValue::Text(value.unwrap_or_default().to_string())
    }
}

/// Exposes named fields of an item for filtering.
///
/// Returning `None` means the item has no such field, and the filter is ignored for it.
pub trait Filterable {
    fn filter_value(&self, key: &str) -> Option<FieldValue>;
}

/// Edited and applied filters of a list view.
///
/// Edits go to the draft set; [`FilterSet::apply`] copies the non-empty ones to the
/// active set used for matching.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSet {
    draft: BTreeMap<String, FilterValue>,
    active: BTreeMap<String, FilterValue>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: FilterValue) {
        self.draft.insert(key.to_string(), value);
    }

    pub fn set_text(&mut self, key: &str, value: &str) {
        self.set(key, FilterValue::Text(value.to_string()));
    }

    pub fn set_choice(&mut self, key: &str, value: &str) {
        let choices = if value.is_empty() {
            Vec::new()
        } else {
            vec![value.to_string()]
        };
        self.set(key, FilterValue::Choices(choices));
    }

    pub fn set_date_range(&mut self, key: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.set(key, FilterValue::DateRange { from, to });
    }

    pub fn remove(&mut self, key: &str) {
        self.draft.remove(key);
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.draft.get(key)
    }

    /// Text currently typed for `key`, for binding an input.
    pub fn text(&self, key: &str) -> String {
        match self.draft.get(key) {
            Some(FilterValue::Text(text)) => text.clone(),
            Some(FilterValue::Choices(choices)) => choices.first().cloned().unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Activates the non-empty draft filters and returns them.
    pub fn apply(&mut self) -> &BTreeMap<String, FilterValue> {
        self.active = self
            .draft
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        &self.active
    }

    pub fn reset(&mut self) {
        self.draft.clear();
        self.active.clear();
    }

    pub fn active(&self) -> &BTreeMap<String, FilterValue> {
        &self.active
    }

    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        self.active.iter().all(|(key, filter)| match item.filter_value(key) {
            Some(value) => filter.matches(&value),
            None => true,
        })
    }

    pub fn apply_to<T: Filterable + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod test;
