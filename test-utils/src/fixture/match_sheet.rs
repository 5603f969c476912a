use league_api::model::{
    match_sheet::{CoachMatchSheetDto, MatchSheetStatus, PlayerParticipationDto},
    player::PlayerStatus,
};

pub const DEFAULT_ID: i64 = 50;
pub const DEFAULT_STRATEGY: &str = "4-3-3 with a high press";

pub fn participation(player_id: i64, status: PlayerStatus, number: u32) -> PlayerParticipationDto {
    PlayerParticipationDto {
        player_id: Some(player_id),
        player_name: Some(format!("Player {}", player_id)),
        match_sheet_id: Some(DEFAULT_ID),
        player_status: Some(status),
        shirt_number: Some(number),
        ..Default::default()
    }
}

/// Draft sheet of the default team with a valid starting lineup.
pub fn coach_sheet() -> CoachMatchSheetDto {
    CoachMatchSheetDto {
        id: Some(DEFAULT_ID),
        match_id: Some(super::matches::DEFAULT_ID),
        match_title: Some("Round 1".to_string()),
        match_date: super::matches::kick_off(),
        team_id: Some(super::team::DEFAULT_ID),
        team_name: Some(super::team::DEFAULT_NAME.to_string()),
        status: Some(MatchSheetStatus::Draft),
        strategy: Some(DEFAULT_STRATEGY.to_string()),
        player_participations: vec![
            participation(3, PlayerStatus::Starter, 1),
            participation(4, PlayerStatus::Starter, 9),
            participation(5, PlayerStatus::Substitute, 14),
        ],
        ..Default::default()
    }
}
