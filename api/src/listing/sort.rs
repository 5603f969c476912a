use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Value of one field, as compared by [`SortConfig::sort`].
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Missing,
}

impl SortValue {
    pub fn text(value: Option<&str>) -> Self {
        value.map_or(SortValue::Missing, |v| SortValue::Text(v.to_string()))
    }

    pub fn number<N: Into<f64>>(value: Option<N>) -> Self {
        value.map_or(SortValue::Missing, |v| SortValue::Number(v.into()))
    }

    pub fn date_time(value: Option<NaiveDateTime>) -> Self {
        value.map_or(SortValue::Missing, SortValue::Date)
    }

    pub fn date(value: Option<NaiveDate>) -> Self {
        Self::date_time(value.and_then(|d| d.and_hms_opt(0, 0, 0)))
    }

    /// Order between kinds: missing, numbers, dates, then text.
    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Number(_) => 1,
            SortValue::Date(_) => 2,
            SortValue::Text(_) => 3,
        }
    }

    /// Ascending order; missing values first, text compared case-insensitively.
    ///
    /// Values of different kinds compare by kind so the order stays total.
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Exposes named fields of an item for sorting.
pub trait Sortable {
    fn sort_value(&self, field: &str) -> SortValue;
}

/// Field and direction a table is sorted by.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortConfig {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(field: &str, direction: SortDirection) -> Self {
        Self {
            field: Some(field.to_string()),
            direction,
        }
    }

    /// Clicking the sorted column flips the direction; another column sorts ascending.
    pub fn sort_by(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.toggled();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    pub fn set_direction(&mut self, direction: SortDirection) {
        self.direction = direction;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_sorted(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
        self.is_sorted(field).then_some(self.direction)
    }

    /// Value of the `aria-sort` attribute for a column header.
    pub fn aria_sort(&self, field: &str) -> &'static str {
        match self.direction_for(field) {
            Some(SortDirection::Asc) => "ascending",
            Some(SortDirection::Desc) => "descending",
            None => "none",
        }
    }

    /// Arrow shown next to a column header.
    pub fn indicator(&self, field: &str) -> &'static str {
        match self.direction_for(field) {
            Some(SortDirection::Asc) => "▲",
            Some(SortDirection::Desc) => "▼",
            None => "",
        }
    }

    /// Stable sort of `items`; a config without a field leaves them untouched.
    pub fn sort<T: Sortable>(&self, items: &mut [T]) {
        let Some(field) = self.field.as_deref() else {
            return;
        };

        items.sort_by(|a, b| {
            let ordering = a.sort_value(field).compare(&b.sort_value(field));
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    pub fn sorted<T: Sortable>(&self, mut items: Vec<T>) -> Vec<T> {
        self.sort(&mut items);
        items
    }
}

#[cfg(test)]
mod test;
