use chrono::NaiveDate;

use crate::{
    listing::{FilterSet, SortConfig, SortDirection},
    model::{
        competition::{CompetitionDto, CompetitionStatus},
        match_sheet::MatchSheetDto,
        matches::{MatchDto, MatchParticipantDto, MatchRole},
        team::StandingDto,
        user::UserDto,
    },
};

fn competition(name: &str, status: CompetitionStatus, start_day: u32) -> CompetitionDto {
    CompetitionDto {
        name: Some(name.to_string()),
        status: Some(status),
        start_date: NaiveDate::from_ymd_opt(2025, 9, start_day),
        ..Default::default()
    }
}

/// Tests filtering competitions by status and start date.
///
/// Expected: status compared on the wire value, dates inclusive
#[test]
fn competitions_filter_by_status_and_date() {
    let competitions = vec![
        competition("Cup A", CompetitionStatus::Upcoming, 1),
        competition("Cup B", CompetitionStatus::InProgress, 10),
        competition("Cup C", CompetitionStatus::Upcoming, 20),
    ];

    let mut filters = FilterSet::new();
    filters.set_choice("status", CompetitionStatus::Upcoming.as_str());
    filters.set_date_range("startDate", NaiveDate::from_ymd_opt(2025, 9, 2), None);
    filters.apply();

    let found = filters.apply_to(&competitions);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name.as_deref(), Some("Cup C"));
}

#[test]
fn standings_sort_by_points() {
    let standing = |team: &str, points: i32| StandingDto {
        team_name: Some(team.to_string()),
        points: Some(points),
        ..Default::default()
    };
    let table = vec![standing("A", 4), standing("B", 9), standing("C", 6)];

    let sorted = SortConfig::new("points", SortDirection::Desc).sorted(table);
    let teams: Vec<_> = sorted.iter().filter_map(|s| s.team_name.as_deref()).collect();
    assert_eq!(teams, vec!["B", "C", "A"]);
}

/// Tests that a match matches a team filter through either participant.
///
/// Expected: both the home and the away team select the match
#[test]
fn matches_filter_on_any_participant() {
    let side = |name: &str, role: MatchRole| MatchParticipantDto {
        team_name: Some(name.to_string()),
        role: Some(role),
        ..Default::default()
    };
    let game = MatchDto {
        participants: vec![side("Lions", MatchRole::Home), side("Tigers", MatchRole::Away)],
        ..Default::default()
    };

    for team in ["Lions", "Tigers"] {
        let mut filters = FilterSet::new();
        filters.set_choice("teamName", team);
        filters.apply();
        assert!(filters.matches(&game), "{}", team);
    }

    let mut filters = FilterSet::new();
    filters.set_choice("teamName", "Bears");
    filters.apply();
    assert!(!filters.matches(&game));
}

#[test]
fn users_sort_by_display_name() {
    let user = |first: &str, last: &str| UserDto {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        ..Default::default()
    };
    let users = vec![user("zoe", "Martin"), user("Adam", "Smith")];

    let sorted = SortConfig::new("name", SortDirection::Asc).sorted(users);
    assert_eq!(sorted[0].display_name(), "Adam Smith");
}

/// Tests the filters of the sheet validation queue.
///
/// Expected: team text matched case-insensitively, match day inside the range
#[test]
fn match_sheets_filter_by_team_and_day() {
    let sheet = |team: &str, day: u32| MatchSheetDto {
        team_name: Some(team.to_string()),
        match_date_time: NaiveDate::from_ymd_opt(2025, 10, day).and_then(|d| d.and_hms_opt(20, 30, 0)),
        ..Default::default()
    };
    let sheets = vec![sheet("Red Lions", 4), sheet("Blue Tigers", 4), sheet("Lions B", 18)];

    let mut filters = FilterSet::new();
    filters.set_text("teamName", "lions");
    filters.set_date_range("matchDateTime", None, NaiveDate::from_ymd_opt(2025, 10, 4));
    filters.apply();

    let found = filters.apply_to(&sheets);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].team_name.as_deref(), Some("Red Lions"));
}
