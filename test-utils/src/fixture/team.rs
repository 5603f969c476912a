use league_api::model::team::{StandingDto, TeamDto};

pub const DEFAULT_ID: i64 = 10;
pub const DEFAULT_NAME: &str = "Red Lions";
pub const DEFAULT_CATEGORY: &str = "U17";

pub fn dto() -> TeamDto {
    TeamDto {
        id: Some(DEFAULT_ID),
        name: Some(DEFAULT_NAME.to_string()),
        category: Some(DEFAULT_CATEGORY.to_string()),
        coach_id: Some(super::user::DEFAULT_COACH_ID),
        coach_name: Some("Carla Mendes".to_string()),
        player_count: Some(18),
        ..Default::default()
    }
}

pub fn standing(team_id: i64, team_name: &str, points: i32) -> StandingDto {
    StandingDto {
        competition_id: Some(super::competition::DEFAULT_ID),
        team_id: Some(team_id),
        team_name: Some(team_name.to_string()),
        points: Some(points),
        ..Default::default()
    }
}
