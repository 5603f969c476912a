use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::player::RegisterPlayerDto;
use crate::http::{QueryParams, ToQuery};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub category: Option<String>,
    pub coach_id: Option<i64>,
    pub coach_name: Option<String>,
    pub player_count: Option<i32>,
    pub competition_count: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTeamDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub players: Vec<RegisterPlayerDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTeamDto {
    pub team_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CoachTeamsDto {
    pub coach_id: Option<i64>,
    pub coach_name: Option<String>,
    pub teams: Vec<TeamDto>,
}

/// Row of a competition standings table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StandingDto {
    pub id: Option<i64>,
    pub competition_id: Option<i64>,
    pub competition_name: Option<String>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub position: Option<i32>,
    pub matches_played: Option<i32>,
    pub wins: Option<i32>,
    pub draws: Option<i32>,
    pub losses: Option<i32>,
    pub goals_for: Option<i32>,
    pub goals_against: Option<i32>,
    pub goal_difference: Option<i32>,
    pub points: Option<i32>,
    /// Last results, newest last, e.g. `W-L-D-W-W`.
    pub form: Option<String>,
}

impl StandingDto {
    /// Individual results of the form string.
    pub fn form_results(&self) -> Vec<char> {
        self.form
            .as_deref()
            .unwrap_or_default()
            .chars()
            .filter(|c| matches!(c, 'W' | 'D' | 'L'))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub coach_name: Option<String>,
}

impl ToQuery for TeamFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("name", self.name.as_ref())
            .with_opt("category", self.category.as_ref())
            .with_opt("coachName", self.coach_name.as_ref())
    }
}
