use chrono::NaiveDate;

use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    name: Option<&'static str>,
    goals: Option<u32>,
    played: Option<NaiveDate>,
}

impl Sortable for Row {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::text(self.name),
            "goals" => SortValue::number(self.goals),
            "played" => SortValue::date(self.played),
            _ => SortValue::Missing,
        }
    }
}

fn row(name: Option<&'static str>, goals: Option<u32>, day: Option<u32>) -> Row {
    Row {
        name,
        goals,
        played: day.and_then(|d| NaiveDate::from_ymd_opt(2025, 3, d)),
    }
}

fn names(rows: &[Row]) -> Vec<Option<&'static str>> {
    rows.iter().map(|r| r.name).collect()
}

/// Tests toggling the direction by clicking the same column twice.
///
/// Expected: asc, then desc, then asc again on a new column
#[test]
fn sort_by_toggles_direction() {
    let mut config = SortConfig::default();
    assert!(!config.is_sorted("name"));

    config.sort_by("name");
    assert_eq!(config.direction_for("name"), Some(SortDirection::Asc));

    config.sort_by("name");
    assert_eq!(config.direction_for("name"), Some(SortDirection::Desc));
    assert_eq!(config.aria_sort("name"), "descending");
    assert_eq!(config.aria_sort("goals"), "none");

    config.sort_by("goals");
    assert_eq!(config.direction_for("goals"), Some(SortDirection::Asc));
    assert_eq!(config.direction_for("name"), None);

    config.reset();
    assert_eq!(config, SortConfig::default());
}

/// Tests text ordering.
///
/// Expected: case-insensitive, missing values first when ascending
#[test]
fn sorts_text_case_insensitively() {
    let rows = vec![
        row(Some("charlie"), None, None),
        row(None, None, None),
        row(Some("Bravo"), None, None),
        row(Some("alpha"), None, None),
    ];

    let ascending = SortConfig::new("name", SortDirection::Asc).sorted(rows.clone());
    assert_eq!(
        names(&ascending),
        vec![None, Some("alpha"), Some("Bravo"), Some("charlie")]
    );

    let descending = SortConfig::new("name", SortDirection::Desc).sorted(rows);
    assert_eq!(
        names(&descending),
        vec![Some("charlie"), Some("Bravo"), Some("alpha"), None]
    );
}

#[test]
fn sorts_numbers_and_dates() {
    let rows = vec![
        row(Some("a"), Some(10), Some(20)),
        row(Some("b"), Some(2), Some(5)),
        row(Some("c"), Some(7), Some(12)),
    ];

    let by_goals = SortConfig::new("goals", SortDirection::Asc).sorted(rows.clone());
    assert_eq!(names(&by_goals), vec![Some("b"), Some("c"), Some("a")]);

    let by_date = SortConfig::new("played", SortDirection::Desc).sorted(rows);
    assert_eq!(names(&by_date), vec![Some("a"), Some("c"), Some("b")]);
}

/// Tests that equal values and unsorted configs keep the input order.
///
/// Expected: original order
#[test]
fn sorting_is_stable() {
    let rows = vec![
        row(Some("first"), Some(1), None),
        row(Some("second"), Some(1), None),
        row(Some("third"), None, None),
        row(Some("fourth"), None, None),
    ];

    let unsorted = SortConfig::default().sorted(rows.clone());
    assert_eq!(unsorted, rows);

    let by_goals = SortConfig::new("goals", SortDirection::Asc).sorted(rows);
    assert_eq!(
        names(&by_goals),
        vec![Some("third"), Some("fourth"), Some("first"), Some("second")]
    );
}

#[derive(Debug, Clone, PartialEq)]
struct Cell(SortValue);

impl Sortable for Cell {
    fn sort_value(&self, _field: &str) -> SortValue {
        self.0.clone()
    }
}

/// Tests a column holding values of different kinds.
///
/// Expected: grouped by kind (missing, numbers, dates, text), each group in order
#[test]
fn mixed_kinds_sort_consistently() {
    let day = |d| {
        NaiveDate::from_ymd_opt(2025, 3, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(SortValue::Date)
            .unwrap_or(SortValue::Missing)
    };
    let cells = vec![
        Cell(SortValue::Text("beta".to_string())),
        Cell(SortValue::Number(2.0)),
        Cell(day(9)),
        Cell(SortValue::Missing),
        Cell(SortValue::Text("Alpha".to_string())),
        Cell(SortValue::Number(-1.0)),
        Cell(day(2)),
    ];

    let sorted = SortConfig::new("value", SortDirection::Asc).sorted(cells.clone());
    assert_eq!(
        sorted,
        vec![
            Cell(SortValue::Missing),
            Cell(SortValue::Number(-1.0)),
            Cell(SortValue::Number(2.0)),
            Cell(day(2)),
            Cell(day(9)),
            Cell(SortValue::Text("Alpha".to_string())),
            Cell(SortValue::Text("beta".to_string())),
        ]
    );

    let mut reversed = SortConfig::new("value", SortDirection::Desc).sorted(cells);
    reversed.reverse();
    assert_eq!(reversed, sorted);
}
