use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::http::{QueryParams, ToQuery};

backend_enum! {
    pub enum CompetitionStatus {
        Upcoming => ("UPCOMING", "Upcoming"),
        Registration => ("REGISTRATION", "Registration open"),
        InProgress => ("IN_PROGRESS", "In progress"),
        Completed => ("COMPLETED", "Completed"),
        Cancelled => ("CANCELLED", "Cancelled"),
    }
}

impl CompetitionStatus {
    pub fn badge_color(&self) -> &'static str {
        match self {
            CompetitionStatus::Upcoming => "badge-info",
            CompetitionStatus::Registration => "badge-primary",
            CompetitionStatus::InProgress => "badge-success",
            CompetitionStatus::Completed => "badge-neutral",
            CompetitionStatus::Cancelled => "badge-error",
            CompetitionStatus::Unknown(_) => "badge-ghost",
        }
    }
}

backend_enum! {
    pub enum CompetitionType {
        League => ("LEAGUE", "League"),
        Tournament => ("TOURNAMENT", "Tournament"),
        Cup => ("CUP", "Cup"),
    }
}

backend_enum! {
    /// Status of a team within one competition.
    pub enum CompetitionTeamStatus {
        Active => ("ACTIVE", "Active"),
        Inactive => ("INACTIVE", "Inactive"),
        Suspended => ("SUSPENDED", "Suspended"),
        InVerification => ("IN_VERIFICATION", "In verification"),
        Rejected => ("REJECTED", "Rejected"),
        Disqualified => ("DISQUALIFIED", "Disqualified"),
    }
}

backend_enum! {
    pub enum RequestType {
        Registration => ("REGISTRATION", "Registration"),
        Withdrawal => ("WITHDRAWAL", "Withdrawal"),
    }
}

backend_enum! {
    pub enum RequestStatus {
        Pending => ("PENDING", "Pending"),
        Approved => ("APPROVED", "Approved"),
        Rejected => ("REJECTED", "Rejected"),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetitionDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub competition_type: Option<CompetitionType>,
    pub status: Option<CompetitionStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub max_teams: Option<i32>,
    pub registered_teams: Option<i32>,
    pub organizer_id: Option<i64>,
    pub organizer_name: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Team as seen by the organizer of a competition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizerTeamSummaryDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub player_count: Option<i32>,
    pub coach_name: Option<String>,
    pub coach_id: Option<i64>,
    pub status: Option<CompetitionTeamStatus>,
}

/// Competition with organizer-only details; also the create/update payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizerCompetitionDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub competition_type: Option<CompetitionType>,
    pub status: Option<CompetitionStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub max_teams: Option<i32>,
    pub registered_teams: Option<i32>,
    pub teams: Vec<OrganizerTeamSummaryDto>,
    pub total_matches: Option<i32>,
    pub completed_matches: Option<i32>,
    pub upcoming_matches: Option<i32>,
    pub organizer_id: Option<i64>,
    pub organizer_name: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizerCompetitionsResponseDto {
    pub organizer_id: Option<i64>,
    pub organizer_name: Option<String>,
    pub total_competitions: Option<i32>,
    pub upcoming_competitions: Option<i32>,
    pub active_competitions: Option<i32>,
    pub completed_competitions: Option<i32>,
    pub cancelled_competitions: Option<i32>,
    pub competitions: Vec<OrganizerCompetitionDto>,
}

/// Registration or withdrawal request of a team.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetitionRequestDto {
    pub id: Option<i64>,
    pub team_id: Option<i64>,
    pub competition_id: Option<i64>,
    pub team_name: Option<String>,
    pub competition_name: Option<String>,
    pub reason: Option<String>,
    pub request_type: Option<RequestType>,
    pub request_status: Option<RequestStatus>,
    pub response_message: Option<String>,
    pub created_at: Option<String>,
    pub processed_at: Option<String>,
}

impl CompetitionRequestDto {
    pub fn is_pending(&self) -> bool {
        self.request_status == Some(RequestStatus::Pending)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionStatusUpdateDto {
    pub competition_id: i64,
    pub new_status: CompetitionStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamCompetitionStatusUpdateDto {
    pub competition_id: i64,
    pub team_id: i64,
    pub new_status: CompetitionTeamStatus,
}

/// Query of `GET /competitions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompetitionFilter {
    pub status: Option<CompetitionStatus>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub organizer_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl ToQuery for CompetitionFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("status", self.status.as_ref().map(|s| s.as_str().to_string()))
            .with_opt("name", self.name.as_ref())
            .with_opt("category", self.category.as_ref())
            .with_opt("organizerName", self.organizer_name.as_ref())
            .with_opt("startDate", self.start_date)
            .with_opt("endDate", self.end_date)
            .with_opt("limit", self.limit)
    }
}
