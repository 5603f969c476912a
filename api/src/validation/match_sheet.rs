//! Composition and validation of a coach's match sheet.
//!
//! A coach assigns each player of the team a status, a position and a shirt number.
//! Saving only requires shirt numbers to be unique; submitting for validation also
//! requires every player to have a status, every starter to wear a number, and a
//! strategy to be written.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{
    match_sheet::{CoachMatchSheetDto, MatchSheetStatus, PlayerParticipationDto},
    player::{PlayerDto, PlayerPosition, PlayerStatus},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchSheetError {
    #[error("All players must have a status. Starters must have a shirt number.")]
    IncompleteLineup,

    #[error(
        "Duplicate shirt number(s): {}. Each player must have a unique number.",
        join_numbers(.0)
    )]
    DuplicateShirtNumbers(Vec<u32>),

    #[error("Please specify a strategy for the match.")]
    MissingStrategy,

    #[error("\"{0}\" is not a shirt number. Use a whole number from 1 to {max}.", max = SHIRT_NUMBER_MAX)]
    InvalidShirtNumber(String),

    #[error("This match sheet can no longer be modified ({}).", status_label(.0))]
    NotEditable(Option<MatchSheetStatus>),
}

pub const SHIRT_NUMBER_MAX: u32 = 99;

/// Reads a shirt-number input. Blank or `0` clears the number.
pub fn parse_shirt_number(input: &str) -> Result<Option<u32>, MatchSheetError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<u32>() {
        Ok(0) => Ok(None),
        Ok(number) if number <= SHIRT_NUMBER_MAX => Ok(Some(number)),
        _ => Err(MatchSheetError::InvalidShirtNumber(input.to_string())),
    }
}

fn status_label(status: &Option<MatchSheetStatus>) -> String {
    status
        .as_ref()
        .map_or_else(|| "no status".to_string(), MatchSheetStatus::to_string)
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Shirt numbers worn by more than one player, in order of first repetition.
///
/// Rows without a number, or with `0`, are ignored.
pub fn duplicate_shirt_numbers(players: &[PlayerParticipationDto]) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for number in players.iter().filter_map(PlayerParticipationDto::assigned_number) {
        if !seen.insert(number) && !duplicates.contains(&number) {
            duplicates.push(number);
        }
    }

    duplicates
}

/// Message describing the duplicated shirt numbers, if any.
pub fn check_duplicate_shirt_numbers(players: &[PlayerParticipationDto]) -> Option<String> {
    let duplicates = duplicate_shirt_numbers(players);
    if duplicates.is_empty() {
        None
    } else {
        Some(MatchSheetError::DuplicateShirtNumbers(duplicates).to_string())
    }
}

/// Whether `number` is worn by more than one player; used to highlight a row.
pub fn is_shirt_number_duplicated(players: &[PlayerParticipationDto], number: Option<u32>) -> bool {
    match number.filter(|n| *n != 0) {
        Some(number) => {
            players
                .iter()
                .filter(|p| p.assigned_number() == Some(number))
                .count()
                > 1
        }
        None => false,
    }
}

pub fn validate_for_save(players: &[PlayerParticipationDto]) -> Result<(), MatchSheetError> {
    let duplicates = duplicate_shirt_numbers(players);
    if !duplicates.is_empty() {
        return Err(MatchSheetError::DuplicateShirtNumbers(duplicates));
    }
    Ok(())
}

pub fn validate_for_submission(
    players: &[PlayerParticipationDto],
    strategy: &str,
) -> Result<(), MatchSheetError> {
    let incomplete = players.iter().any(|p| match &p.player_status {
        None => true,
        Some(PlayerStatus::Starter) => p.assigned_number().is_none(),
        Some(_) => false,
    });
    if incomplete {
        return Err(MatchSheetError::IncompleteLineup);
    }

    validate_for_save(players)?;

    if strategy.trim().is_empty() {
        return Err(MatchSheetError::MissingStrategy);
    }

    Ok(())
}

/// Row seeded from the team roster for a sheet that has no participations yet.
fn roster_row(player: &PlayerDto, match_sheet_id: Option<i64>) -> PlayerParticipationDto {
    PlayerParticipationDto {
        player_id: player.id,
        player_name: Some(player.display_name()),
        match_sheet_id,
        goals_scored: Some(0),
        yellow_cards: Some(0),
        red_cards: Some(0),
        minutes_played: Some(0),
        ..Default::default()
    }
}

/// In-form state of the match-sheet editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchSheetDraft {
    pub sheet: CoachMatchSheetDto,
    pub players: Vec<PlayerParticipationDto>,
    pub strategy: String,
}

impl MatchSheetDraft {
    /// Seeds the draft from the sheet, or from the roster if the sheet lists nobody.
    pub fn from_sheet(sheet: CoachMatchSheetDto, roster: &[PlayerDto]) -> Self {
        let players = if sheet.player_participations.is_empty() {
            roster.iter().map(|p| roster_row(p, sheet.id)).collect()
        } else {
            sheet.player_participations.clone()
        };

        Self {
            strategy: sheet.strategy.clone().unwrap_or_default(),
            players,
            sheet,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.sheet.is_editable()
    }

    fn row_mut(&mut self, player_id: i64) -> Option<&mut PlayerParticipationDto> {
        self.players
            .iter_mut()
            .find(|p| p.player_id == Some(player_id))
    }

    pub fn set_status(&mut self, player_id: i64, status: Option<PlayerStatus>) {
        if let Some(row) = self.row_mut(player_id) {
            row.player_status = status;
        }
    }

    pub fn set_position(&mut self, player_id: i64, position: Option<PlayerPosition>) {
        if let Some(row) = self.row_mut(player_id) {
            row.position = position;
        }
    }

    /// Sets the number; `0` clears it.
    pub fn set_shirt_number(&mut self, player_id: i64, number: Option<u32>) {
        if let Some(row) = self.row_mut(player_id) {
            row.shirt_number = number.filter(|n| *n != 0);
        }
    }

    pub fn duplicate_message(&self) -> Option<String> {
        check_duplicate_shirt_numbers(&self.players)
    }

    pub fn is_duplicated(&self, number: Option<u32>) -> bool {
        is_shirt_number_duplicated(&self.players, number)
    }

    fn ensure_editable(&self) -> Result<(), MatchSheetError> {
        if self.sheet.is_editable() {
            Ok(())
        } else {
            Err(MatchSheetError::NotEditable(self.sheet.status.clone()))
        }
    }

    fn payload(&self) -> CoachMatchSheetDto {
        CoachMatchSheetDto {
            player_participations: self.players.clone(),
            strategy: Some(self.strategy.clone()),
            ..self.sheet.clone()
        }
    }

    /// Sheet to save as a draft, keeping its current status.
    pub fn to_save_payload(&self) -> Result<CoachMatchSheetDto, MatchSheetError> {
        self.ensure_editable()?;
        validate_for_save(&self.players)?;
        Ok(self.payload())
    }

    /// Sheet to submit to the organizer for validation.
    pub fn to_submit_payload(&self) -> Result<CoachMatchSheetDto, MatchSheetError> {
        self.ensure_editable()?;
        validate_for_submission(&self.players, &self.strategy)?;
        Ok(CoachMatchSheetDto {
            status: Some(MatchSheetStatus::Submitted),
            ..self.payload()
        })
    }
}

/// Players of a sheet grouped by status for the read-only viewer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchSheetSummary {
    pub starters: Vec<PlayerParticipationDto>,
    pub substitutes: Vec<PlayerParticipationDto>,
    pub not_played: Vec<PlayerParticipationDto>,
    pub injured: Vec<PlayerParticipationDto>,
    pub suspended: Vec<PlayerParticipationDto>,
    pub expelled: Vec<PlayerParticipationDto>,
    pub reserves: Vec<PlayerParticipationDto>,
    /// Players without a status or with one the dashboard does not know.
    pub unassigned: Vec<PlayerParticipationDto>,
}

impl MatchSheetSummary {
    pub fn new(players: &[PlayerParticipationDto]) -> Self {
        let mut summary = Self::default();

        for player in players {
            let group = match &player.player_status {
                Some(PlayerStatus::Starter) => &mut summary.starters,
                Some(PlayerStatus::Substitute) => &mut summary.substitutes,
                Some(PlayerStatus::NotPlayed) => &mut summary.not_played,
                Some(PlayerStatus::Injured) => &mut summary.injured,
                Some(PlayerStatus::Suspended) => &mut summary.suspended,
                Some(PlayerStatus::Expelled) => &mut summary.expelled,
                Some(PlayerStatus::Reserve) => &mut summary.reserves,
                Some(PlayerStatus::Unknown(_)) | None => &mut summary.unassigned,
            };
            group.push(player.clone());
        }

        // Numbered players first, by number.
        let by_number = |p: &PlayerParticipationDto| p.assigned_number().unwrap_or(u32::MAX);
        summary.starters.sort_by_key(by_number);
        summary.substitutes.sort_by_key(by_number);

        summary
    }

    /// Number of players with a known status.
    pub fn assigned_count(&self) -> usize {
        self.starters.len()
            + self.substitutes.len()
            + self.not_played.len()
            + self.injured.len()
            + self.suspended.len()
            + self.expelled.len()
            + self.reserves.len()
    }
}

#[cfg(test)]
mod test;
