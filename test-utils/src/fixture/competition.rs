use chrono::NaiveDate;
use league_api::model::competition::{
    CompetitionDto, CompetitionRequestDto, CompetitionStatus, CompetitionType, RequestStatus,
    RequestType,
};

pub const DEFAULT_ID: i64 = 20;
pub const DEFAULT_NAME: &str = "Spring Cup";

pub fn dto() -> CompetitionDto {
    CompetitionDto {
        id: Some(DEFAULT_ID),
        name: Some(DEFAULT_NAME.to_string()),
        category: Some(super::team::DEFAULT_CATEGORY.to_string()),
        competition_type: Some(CompetitionType::Cup),
        status: Some(CompetitionStatus::Registration),
        start_date: NaiveDate::from_ymd_opt(2025, 4, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 30),
        max_teams: Some(16),
        registered_teams: Some(4),
        organizer_id: Some(super::user::DEFAULT_ORGANIZER_ID),
        ..Default::default()
    }
}

/// Pending registration of the default team.
pub fn registration_request() -> CompetitionRequestDto {
    CompetitionRequestDto {
        id: Some(30),
        team_id: Some(super::team::DEFAULT_ID),
        competition_id: Some(DEFAULT_ID),
        team_name: Some(super::team::DEFAULT_NAME.to_string()),
        competition_name: Some(DEFAULT_NAME.to_string()),
        request_type: Some(RequestType::Registration),
        request_status: Some(RequestStatus::Pending),
        ..Default::default()
    }
}
