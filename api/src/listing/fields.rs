//! Sort and filter keys of the listed DTOs; keys use the backend's camelCase names.

use chrono::NaiveDateTime;

use super::{FieldValue, Filterable, SortValue, Sortable};
use crate::model::{
    competition::CompetitionDto,
    match_sheet::MatchSheetDto,
    matches::{MatchDto, MatchParticipantDto},
    media::MediaDto,
    message::MessageDto,
    team::{StandingDto, TeamDto},
    user::UserDto,
};

fn label<E: ToString>(value: Option<&E>) -> SortValue {
    SortValue::text(value.map(E::to_string).as_deref())
}

fn team_name(participant: Option<&MatchParticipantDto>) -> Option<&str> {
    participant.and_then(|p| p.team_name.as_deref())
}

fn day(value: Option<NaiveDateTime>) -> FieldValue {
    FieldValue::Date(value.map(|v| v.date()))
}

impl Sortable for CompetitionDto {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::text(self.name.as_deref()),
            "category" => SortValue::text(self.category.as_deref()),
            "type" => label(self.competition_type.as_ref()),
            "status" => label(self.status.as_ref()),
            "startDate" => SortValue::date(self.start_date),
            "endDate" => SortValue::date(self.end_date),
            "location" => SortValue::text(self.location.as_deref()),
            "maxTeams" => SortValue::number(self.max_teams),
            "registeredTeams" => SortValue::number(self.registered_teams),
            "organizerName" => SortValue::text(self.organizer_name.as_deref()),
            _ => SortValue::Missing,
        }
    }
}

impl Filterable for CompetitionDto {
    fn filter_value(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "name" => FieldValue::text(self.name.as_deref()),
            "category" => FieldValue::text(self.category.as_deref()),
            "type" => FieldValue::text(self.competition_type.as_ref().map(|t| t.as_str())),
            "status" => FieldValue::text(self.status.as_ref().map(|s| s.as_str())),
            "location" => FieldValue::text(self.location.as_deref()),
            "organizerName" => FieldValue::text(self.organizer_name.as_deref()),
            "startDate" => FieldValue::Date(self.start_date),
            "endDate" => FieldValue::Date(self.end_date),
            _ => return None,
        };
        Some(value)
    }
}

impl Sortable for TeamDto {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::text(self.name.as_deref()),
            "category" => SortValue::text(self.category.as_deref()),
            "coachName" => SortValue::text(self.coach_name.as_deref()),
            "playerCount" => SortValue::number(self.player_count),
            "competitionCount" => SortValue::number(self.competition_count),
            "createdAt" => SortValue::date_time(self.created_at),
            _ => SortValue::Missing,
        }
    }
}

impl Filterable for TeamDto {
    fn filter_value(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "name" => FieldValue::text(self.name.as_deref()),
            "category" => FieldValue::text(self.category.as_deref()),
            "coachName" => FieldValue::text(self.coach_name.as_deref()),
            _ => return None,
        };
        Some(value)
    }
}

/// Covers players too, which share the user DTO.
impl Sortable for UserDto {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::Text(self.display_name()),
            "userName" => SortValue::text(self.user_name.as_deref()),
            "firstName" => SortValue::text(self.first_name.as_deref()),
            "lastName" => SortValue::text(self.last_name.as_deref()),
            "email" => SortValue::text(self.email.as_deref()),
            "role" => label(self.role.as_ref()),
            "position" => label(self.position.as_ref()),
            "status" => label(self.status.as_ref()),
            "teamName" => SortValue::text(self.team_name.as_deref()),
            "dateOfBirth" => SortValue::date(self.date_of_birth),
            _ => SortValue::Missing,
        }
    }
}

impl Filterable for UserDto {
    fn filter_value(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "name" => FieldValue::Text(self.display_name()),
            "userName" => FieldValue::text(self.user_name.as_deref()),
            "firstName" => FieldValue::text(self.first_name.as_deref()),
            "lastName" => FieldValue::text(self.last_name.as_deref()),
            "email" => FieldValue::text(self.email.as_deref()),
            "role" => FieldValue::text(self.role.as_ref().map(|r| r.as_str())),
            "position" => FieldValue::text(self.position.as_ref().map(|p| p.as_str())),
            "status" => FieldValue::text(self.status.as_ref().map(|s| s.as_str())),
            "teamName" => FieldValue::text(self.team_name.as_deref()),
            _ => return None,
        };
        Some(value)
    }
}

impl Sortable for MatchDto {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "title" => SortValue::text(self.title.as_deref()),
            "competitionName" => SortValue::text(self.competition_name.as_deref()),
            "scheduledDateTime" => SortValue::date_time(self.scheduled_date_time),
            "status" => label(self.status.as_ref()),
            "round" => SortValue::number(self.round),
            "homeTeam" => SortValue::text(team_name(self.home_team())),
            "awayTeam" => SortValue::text(team_name(self.away_team())),
            _ => SortValue::Missing,
        }
    }
}

impl Filterable for MatchDto {
    fn filter_value(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "title" => FieldValue::text(self.title.as_deref()),
            "competitionName" => FieldValue::text(self.competition_name.as_deref()),
            "status" => FieldValue::text(self.status.as_ref().map(|s| s.as_str())),
            "teamName" => FieldValue::List(
                self.participants
                    .iter()
                    .filter_map(|p| p.team_name.clone())
                    .collect(),
            ),
            "scheduledDateTime" => day(self.scheduled_date_time),
            _ => return None,
        };
        Some(value)
    }
}

impl Sortable for MatchSheetDto {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "matchTitle" => SortValue::text(self.match_title.as_deref()),
            "teamName" => SortValue::text(self.team_name.as_deref()),
            "competitionName" => SortValue::text(self.competition_name.as_deref()),
            "matchDateTime" => SortValue::date_time(self.match_date_time),
            "submittedAt" => SortValue::date_time(self.submitted_at),
            "status" => label(self.status.as_ref()),
            _ => SortValue::Missing,
        }
    }
}

impl Filterable for MatchSheetDto {
    fn filter_value(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "matchTitle" => FieldValue::text(self.match_title.as_deref()),
            "teamName" => FieldValue::text(self.team_name.as_deref()),
            "competitionName" => FieldValue::text(self.competition_name.as_deref()),
            "matchDateTime" => day(self.match_date_time),
            _ => return None,
        };
        Some(value)
    }
}

impl Sortable for MediaDto {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "title" => SortValue::text(self.title.as_deref()),
            "mediaType" => label(self.media_type.as_ref()),
            "uploaderName" => SortValue::text(self.uploader_name.as_deref()),
            "competitionName" => SortValue::text(self.competition_name.as_deref()),
            "uploadedAt" => SortValue::date_time(self.uploaded_at),
            "viewCount" => SortValue::number(self.view_count),
            _ => SortValue::Missing,
        }
    }
}

impl Filterable for MediaDto {
    fn filter_value(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "title" => FieldValue::text(self.title.as_deref()),
            "mediaType" => FieldValue::text(self.media_type.as_ref().map(|t| t.as_str())),
            "competitionName" => FieldValue::text(self.competition_name.as_deref()),
            "teamName" => FieldValue::text(self.team_name.as_deref()),
            "matchTitle" => FieldValue::text(self.match_title.as_deref()),
            "uploaderName" => FieldValue::text(self.uploader_name.as_deref()),
            "uploadedAt" => day(self.uploaded_at),
            _ => return None,
        };
        Some(value)
    }
}

impl Sortable for StandingDto {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "position" => SortValue::number(self.position),
            "teamName" => SortValue::text(self.team_name.as_deref()),
            "matchesPlayed" => SortValue::number(self.matches_played),
            "wins" => SortValue::number(self.wins),
            "draws" => SortValue::number(self.draws),
            "losses" => SortValue::number(self.losses),
            "goalsFor" => SortValue::number(self.goals_for),
            "goalsAgainst" => SortValue::number(self.goals_against),
            "goalDifference" => SortValue::number(self.goal_difference),
            "points" => SortValue::number(self.points),
            _ => SortValue::Missing,
        }
    }
}

impl Sortable for MessageDto {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "sentAt" => SortValue::date_time(self.sent_at),
            "senderRole" => label(self.sender_role.as_ref()),
            "recipientCategory" => label(self.recipient_category.as_ref()),
            "content" => SortValue::Text(self.content.clone()),
            _ => SortValue::Missing,
        }
    }
}

impl Filterable for MessageDto {
    fn filter_value(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "content" => FieldValue::Text(self.content.clone()),
            "senderRole" => FieldValue::text(self.sender_role.as_ref().map(|r| r.as_str())),
            "recipientCategory" => {
                FieldValue::text(self.recipient_category.as_ref().map(|c| c.as_str()))
            }
            "sentAt" => day(self.sent_at),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod test;
