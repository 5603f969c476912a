use chrono::{NaiveDate, NaiveDateTime};
use league_api::model::matches::{MatchDto, MatchParticipantDto, MatchRole, MatchStatus};

pub const DEFAULT_ID: i64 = 40;
pub const DEFAULT_AWAY_TEAM_ID: i64 = 11;
pub const DEFAULT_AWAY_TEAM_NAME: &str = "Blue Sharks";

pub fn kick_off() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2025, 5, 10).and_then(|d| d.and_hms_opt(15, 0, 0))
}

pub fn participant(team_id: i64, team_name: &str, role: MatchRole) -> MatchParticipantDto {
    MatchParticipantDto {
        team_id: Some(team_id),
        team_name: Some(team_name.to_string()),
        role: Some(role),
        ..Default::default()
    }
}

/// Scheduled match between the default team at home and the away team.
pub fn dto() -> MatchDto {
    MatchDto {
        id: Some(DEFAULT_ID),
        title: Some("Round 1".to_string()),
        competition_id: Some(super::competition::DEFAULT_ID),
        competition_name: Some(super::competition::DEFAULT_NAME.to_string()),
        scheduled_date_time: kick_off(),
        participants: vec![
            participant(super::team::DEFAULT_ID, super::team::DEFAULT_NAME, MatchRole::Home),
            participant(DEFAULT_AWAY_TEAM_ID, DEFAULT_AWAY_TEAM_NAME, MatchRole::Away),
        ],
        status: Some(MatchStatus::Scheduled),
        round: Some(1),
        has_matchsheet: Some(true),
        ..Default::default()
    }
}
