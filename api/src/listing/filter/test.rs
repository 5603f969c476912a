use chrono::NaiveDate;

use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    name: &'static str,
    status: &'static str,
    tags: Vec<&'static str>,
    date: Option<NaiveDate>,
}

impl Filterable for Item {
    fn filter_value(&self, key: &str) -> Option<FieldValue> {
        match key {
            "name" => Some(FieldValue::Text(self.name.to_string())),
            "status" => Some(FieldValue::Text(self.status.to_string())),
            "tags" => Some(FieldValue::List(
                self.tags.iter().map(|t| t.to_string()).collect(),
            )),
            "date" => Some(FieldValue::Date(self.date)),
            _ => None,
        }
    }
}

fn day(d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 6, d)
}

fn items() -> Vec<Item> {
    vec![
        Item {
            name: "Spring Cup",
            status: "IN_PROGRESS",
            tags: vec!["U17", "CUP"],
            date: day(1),
        },
        Item {
            name: "Summer League",
            status: "PLANNED",
            tags: vec!["SENIOR"],
            date: day(15),
        },
        Item {
            name: "Autumn Cup",
            status: "COMPLETED",
            tags: vec![],
            date: None,
        },
    ]
}

fn names(items: &[Item]) -> Vec<&'static str> {
    items.iter().map(|i| i.name).collect()
}

/// Tests that draft edits only take effect once applied.
///
/// Expected: all items before apply, matching items after
#[test]
fn filters_apply_on_demand() {
    let mut filters = FilterSet::new();
    filters.set_text("name", "cup");

    assert!(!filters.has_active());
    assert_eq!(filters.apply_to(&items()).len(), 3);

    filters.apply();
    assert!(filters.has_active());
    assert_eq!(names(&filters.apply_to(&items())), vec!["Spring Cup", "Autumn Cup"]);
}

/// Tests that empty values are dropped when applying.
///
/// Expected: blank text, empty choices and open ranges are not active
#[test]
fn apply_drops_empty_values() {
    let mut filters = FilterSet::new();
    filters.set_text("name", "  ");
    filters.set_choice("status", "");
    filters.set_date_range("date", None, None);

    assert!(filters.apply().is_empty());
    assert!(!filters.has_active());
}

#[test]
fn choices_match_scalars_and_lists() {
    let mut filters = FilterSet::new();
    filters.set_choice("status", "PLANNED");
    filters.apply();
    assert_eq!(names(&filters.apply_to(&items())), vec!["Summer League"]);

    filters.reset();
    filters.set(
        "tags",
        FilterValue::Choices(vec!["CUP".to_string(), "SENIOR".to_string()]),
    );
    filters.apply();
    assert_eq!(
        names(&filters.apply_to(&items())),
        vec!["Spring Cup", "Summer League"]
    );
}

/// Tests inclusive date ranges.
///
/// Expected: bounds included, items without a date excluded
#[test]
fn date_range_is_inclusive() {
    let mut filters = FilterSet::new();
    filters.set_date_range("date", day(1), day(14));
    filters.apply();
    assert_eq!(names(&filters.apply_to(&items())), vec!["Spring Cup"]);

    filters.set_date_range("date", day(15), None);
    filters.apply();
    assert_eq!(names(&filters.apply_to(&items())), vec!["Summer League"]);
}

/// Tests that a filter on a field the item does not expose is ignored.
///
/// Expected: every item passes
#[test]
fn unknown_fields_pass() {
    let mut filters = FilterSet::new();
    filters.set_text("coachName", "zidane");
    filters.apply();

    assert_eq!(filters.apply_to(&items()).len(), 3);
}

#[test]
fn text_filter_does_not_match_dates() {
    let mut filters = FilterSet::new();
    filters.set_text("date", "2025");
    filters.apply();

    assert!(filters.apply_to(&items()).is_empty());
}

#[test]
fn removing_and_resetting() {
    let mut filters = FilterSet::new();
    filters.set_text("name", "league");
    assert_eq!(filters.text("name"), "league");

    filters.remove("name");
    assert_eq!(filters.get("name"), None);
    assert_eq!(filters.text("name"), "");

    filters.set_choice("status", "PLANNED");
    filters.apply();
    filters.reset();
    assert!(!filters.has_active());
    assert_eq!(filters.get("status"), None);
}
