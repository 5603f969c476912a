use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::user::UserDto;
use crate::http::{QueryParams, ToQuery};

backend_enum! {
    pub enum PlayerPosition {
        Goalkeeper => ("GOALKEEPER", "Goalkeeper"),
        Defender => ("DEFENDER", "Defender"),
        Midfielder => ("MIDFIELDER", "Midfielder"),
        Forward => ("FORWARD", "Forward"),
    }
}

backend_enum! {
    /// Status of a player, on a match sheet or on the team roster.
    pub enum PlayerStatus {
        Starter => ("STARTER", "Starter"),
        Substitute => ("SUBSTITUTE", "Substitute"),
        NotPlayed => ("NOT_PLAYED", "Did not play"),
        Injured => ("INJURED", "Injured"),
        Suspended => ("SUSPENDED", "Suspended"),
        Expelled => ("EXPELLED", "Expelled"),
        Reserve => ("RESERVE", "Reserve"),
    }
}

impl PlayerStatus {
    /// Statuses a coach may pick when composing a match sheet.
    pub fn selectable() -> Vec<PlayerStatus> {
        vec![
            PlayerStatus::Starter,
            PlayerStatus::Substitute,
            PlayerStatus::Reserve,
            PlayerStatus::Injured,
            PlayerStatus::Suspended,
        ]
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            PlayerStatus::Starter => "badge-success",
            PlayerStatus::Substitute => "badge-info",
            PlayerStatus::Injured => "badge-warning",
            PlayerStatus::Suspended | PlayerStatus::Expelled => "badge-error",
            _ => "badge-ghost",
        }
    }
}

/// A player is a user with the player-specific fields filled in.
pub type PlayerDto = UserDto;

/// Payload of the coach player registration.
///
/// When `user_id` is set the existing user is attached to the team; otherwise a new
/// account is created from the remaining fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterPlayerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PlayerPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlayerStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePlayerDto {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PlayerPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlayerStatus>,
}

/// Aggregated statistics of a player over a competition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerPerformanceDto {
    pub id: Option<i64>,
    pub player_id: Option<i64>,
    pub player_name: Option<String>,
    pub competition_id: Option<i64>,
    pub competition_name: Option<String>,
    pub total_matches: Option<i32>,
    pub total_minutes_played: Option<i32>,
    pub total_fouls: Option<i32>,
    pub total_yellow_cards: Option<i32>,
    pub total_red_cards: Option<i32>,
    pub total_goals: Option<i32>,
    pub total_assists: Option<i32>,
    pub total_shots: Option<i32>,
    pub shots_on_target: Option<i32>,
    pub penalties_scored: Option<i32>,
    pub penalties_taken: Option<i32>,
    pub successful_dribbles: Option<i32>,
    pub pass_accuracy: Option<f64>,
    pub successful_passes: Option<i32>,
    pub balls_recovered: Option<i32>,
    pub successful_crosses: Option<i32>,
    pub interceptions: Option<i32>,
    pub balls_lost: Option<i32>,
    pub saves_made: Option<i32>,
    pub clean_sheets: Option<i32>,
    pub penalties_saved: Option<i32>,
    pub goals_conceded: Option<i32>,
    pub save_percentage: Option<f64>,
    pub rating: Option<f64>,
    pub notes: Option<String>,
}

/// Per-match statistics entered by an organizer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchPerformanceDto {
    pub id: Option<i64>,
    pub player_id: Option<i64>,
    pub player_name: Option<String>,
    pub match_id: Option<i64>,
    pub goals_scored: Option<i32>,
    pub assists: Option<i32>,
    pub yellow_cards: Option<i32>,
    pub red_cards: Option<i32>,
    pub minutes_played: Option<i32>,
    pub shots_on_target: Option<i32>,
    pub penalties_scored: Option<i32>,
    pub penalties_taken: Option<i32>,
    pub successful_dribbles: Option<i32>,
    pub pass_accuracy: Option<f64>,
    pub successful_passes: Option<i32>,
    pub balls_recovered: Option<i32>,
    pub successful_crosses: Option<i32>,
    pub interceptions: Option<i32>,
    pub balls_lost: Option<i32>,
    pub saves_made: Option<i32>,
    pub clean_sheets: Option<i32>,
    pub penalties_saved: Option<i32>,
    pub goals_conceded: Option<i32>,
    pub save_percentage: Option<f64>,
    pub rating: Option<f64>,
    pub notes: Option<String>,
}

/// Query of `GET /players`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<PlayerPosition>,
    pub status: Option<PlayerStatus>,
    pub team_name: Option<String>,
    pub competition_name: Option<String>,
    pub team_id: Option<i64>,
    pub competition_id: Option<i64>,
}

impl ToQuery for PlayerFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("userName", self.user_name.as_ref())
            .with_opt("firstName", self.first_name.as_ref())
            .with_opt("lastName", self.last_name.as_ref())
            .with_opt("position", self.position.as_ref().map(|p| p.as_str().to_string()))
            .with_opt("status", self.status.as_ref().map(|s| s.as_str().to_string()))
            .with_opt("teamName", self.team_name.as_ref())
            .with_opt("competitionName", self.competition_name.as_ref())
            .with_opt("teamId", self.team_id)
            .with_opt("competitionId", self.competition_id)
    }
}
