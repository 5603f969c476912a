use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{
    matches::MatchRole,
    player::{PlayerPosition, PlayerStatus},
};

backend_enum! {
    pub enum MatchSheetStatus {
        Draft => ("DRAFT", "Draft"),
        Ongoing => ("ONGOING", "Ongoing"),
        Submitted => ("SUBMITTED", "Submitted"),
        Validated => ("VALIDATED", "Validated"),
        Unvalidated => ("UNVALIDATED", "Not validated"),
        Rejected => ("REJECTED", "Rejected"),
    }
}

impl MatchSheetStatus {
    /// A coach may only edit a sheet that is a draft or was sent back.
    pub fn is_editable(&self) -> bool {
        matches!(self, MatchSheetStatus::Draft | MatchSheetStatus::Unvalidated)
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            MatchSheetStatus::Draft => "badge-ghost",
            MatchSheetStatus::Ongoing => "badge-info",
            MatchSheetStatus::Submitted => "badge-warning",
            MatchSheetStatus::Validated => "badge-success",
            MatchSheetStatus::Unvalidated | MatchSheetStatus::Rejected => "badge-error",
            MatchSheetStatus::Unknown(_) => "badge-ghost",
        }
    }
}

/// One player row of a match sheet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerParticipationDto {
    pub id: Option<i64>,
    pub goals_scored: Option<i32>,
    pub yellow_cards: Option<i32>,
    pub red_cards: Option<i32>,
    pub minutes_played: Option<i32>,
    pub substitution_in_time: Option<i32>,
    pub substitution_out_time: Option<i32>,
    pub shirt_number: Option<u32>,
    pub player_status: Option<PlayerStatus>,
    pub position: Option<PlayerPosition>,
    pub match_sheet_id: Option<i64>,
    pub player_id: Option<i64>,
    pub player_name: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl PlayerParticipationDto {
    /// Shirt number if set to a non-zero value.
    pub fn assigned_number(&self) -> Option<u32> {
        self.shirt_number.filter(|n| *n != 0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchSheetDto {
    pub id: Option<i64>,
    pub match_id: Option<i64>,
    pub match_title: Option<String>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub team_role: Option<MatchRole>,
    pub competition_id: Option<i64>,
    pub competition_name: Option<String>,
    pub match_date_time: Option<NaiveDateTime>,
    pub venue: Option<String>,
    pub team_score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub status: Option<MatchSheetStatus>,
    pub player_participations: Vec<PlayerParticipationDto>,
    pub coach_comments: Option<String>,
    pub organizer_comments: Option<String>,
    pub submitted_at: Option<NaiveDateTime>,
    pub validated_at: Option<NaiveDateTime>,
    pub strategy: Option<String>,
}

impl MatchSheetDto {
    pub fn is_editable(&self) -> bool {
        self.status.as_ref().is_some_and(MatchSheetStatus::is_editable)
    }
}

/// Match sheet as managed by a coach.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CoachMatchSheetDto {
    pub id: Option<i64>,
    pub match_id: Option<i64>,
    pub match_title: Option<String>,
    pub match_location: Option<String>,
    pub match_date: Option<NaiveDateTime>,
    pub competition_name: Option<String>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub status: Option<MatchSheetStatus>,
    pub validation_date: Option<NaiveDateTime>,
    pub submission_deadline: Option<NaiveDate>,
    pub strategy: Option<String>,
    pub player_participations: Vec<PlayerParticipationDto>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl CoachMatchSheetDto {
    pub fn is_editable(&self) -> bool {
        self.status.as_ref().is_some_and(MatchSheetStatus::is_editable)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CoachMatchSheetsResponseDto {
    pub coach_id: Option<i64>,
    pub coach_name: Option<String>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub total_match_sheets: i32,
    pub pending_match_sheets: i32,
    pub validated_match_sheets: i32,
    pub match_sheets: Vec<CoachMatchSheetDto>,
}

/// Organizer decision on a submitted sheet; `comments` travels in the same body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchSheetValidationDto {
    pub match_sheet_id: i64,
    pub is_approved: bool,
    pub new_status: MatchSheetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl MatchSheetValidationDto {
    pub fn approve(match_sheet_id: i64) -> Self {
        Self {
            match_sheet_id,
            is_approved: true,
            new_status: MatchSheetStatus::Validated,
            comments: None,
        }
    }

    pub fn reject(match_sheet_id: i64, comments: impl Into<String>) -> Self {
        Self {
            match_sheet_id,
            is_approved: false,
            new_status: MatchSheetStatus::Unvalidated,
            comments: Some(comments.into()),
        }
    }
}
