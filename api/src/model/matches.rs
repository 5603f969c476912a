use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::match_sheet::MatchSheetDto;
use crate::http::{QueryParams, ToQuery};

backend_enum! {
    pub enum MatchStatus {
        Scheduled => ("SCHEDULED", "Scheduled"),
        InProgress => ("IN_PROGRESS", "In progress"),
        Completed => ("COMPLETED", "Completed"),
        Postponed => ("POSTPONED", "Postponed"),
        Cancelled => ("CANCELLED", "Cancelled"),
    }
}

impl MatchStatus {
    pub fn badge_color(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "badge-info",
            MatchStatus::InProgress => "badge-success",
            MatchStatus::Completed => "badge-neutral",
            MatchStatus::Postponed => "badge-warning",
            MatchStatus::Cancelled => "badge-error",
            MatchStatus::Unknown(_) => "badge-ghost",
        }
    }
}

backend_enum! {
    pub enum MatchRole {
        Home => ("HOME", "Home"),
        Away => ("AWAY", "Away"),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchParticipantDto {
    pub id: Option<i64>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub role: Option<MatchRole>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchDto {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub competition_id: Option<i64>,
    pub competition_name: Option<String>,
    pub competition_type: Option<String>,
    pub scheduled_date_time: Option<NaiveDateTime>,
    pub participants: Vec<MatchParticipantDto>,
    pub status: Option<MatchStatus>,
    pub home_team_score: Option<i32>,
    pub away_team_score: Option<i32>,
    pub match_sheet_status: Option<String>,
    pub round: Option<i32>,
    pub has_matchsheet: Option<bool>,
}

impl MatchDto {
    fn participant(&self, role: MatchRole) -> Option<&MatchParticipantDto> {
        self.participants
            .iter()
            .find(|p| p.role.as_ref() == Some(&role))
    }

    pub fn home_team(&self) -> Option<&MatchParticipantDto> {
        self.participant(MatchRole::Home)
    }

    pub fn away_team(&self) -> Option<&MatchParticipantDto> {
        self.participant(MatchRole::Away)
    }

    /// "Home - Away", with a placeholder for a missing side.
    pub fn fixture(&self) -> String {
        let name = |p: Option<&MatchParticipantDto>| {
            p.and_then(|p| p.team_name.clone())
                .unwrap_or_else(|| "TBD".to_string())
        };
        format!("{} - {}", name(self.home_team()), name(self.away_team()))
    }

    /// Score as "2 - 1", or `None` until both scores are known.
    pub fn score(&self) -> Option<String> {
        match (self.home_team_score, self.away_team_score) {
            (Some(home), Some(away)) => Some(format!("{} - {}", home, away)),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchScoreUpdateDto {
    pub match_id: i64,
    pub home_score: i32,
    pub away_score: i32,
}

/// Status change of a match; `reason` travels in the same body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatusUpdateDto {
    pub match_id: i64,
    pub new_status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A match together with the sheets of both teams.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsolidatedMatchDto {
    pub match_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub match_date: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: Option<MatchStatus>,
    pub match_sheets: Vec<MatchSheetDto>,
}

/// Query of `GET /matches/all`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchFilter {
    pub status: Option<MatchStatus>,
    pub title: Option<String>,
    pub competition_name: Option<String>,
    pub team_name: Option<String>,
    pub team_id: Option<i64>,
    pub competition_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl ToQuery for MatchFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("status", self.status.as_ref().map(|s| s.as_str().to_string()))
            .with_opt("title", self.title.as_ref())
            .with_opt("competitionName", self.competition_name.as_ref())
            .with_opt("teamName", self.team_name.as_ref())
            .with_opt("teamId", self.team_id)
            .with_opt("competitionId", self.competition_id)
            .with_opt("startDate", self.start_date)
            .with_opt("endDate", self.end_date)
            .with_opt("limit", self.limit)
    }
}
