use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::user::Role;
use crate::http::{QueryParams, ToQuery};

backend_enum! {
    /// Audience of a message.
    pub enum RecipientCategory {
        Individual => ("INDIVIDUAL", "Individual"),
        Team => ("TEAM", "Team"),
        TeamWithCoach => ("TEAM_WITH_COACH", "Team and coach"),
        AllPlayers => ("ALL_PLAYERS", "All players"),
        AllCoaches => ("ALL_COACHES", "All coaches"),
        AllOrganizers => ("ALL_ORGANIZERS", "All organizers"),
        CompetitionCoaches => ("COMPETITION_COACHES", "Coaches of a competition"),
        Global => ("GLOBAL", "Everyone"),
    }
}

impl RecipientCategory {
    /// Categories addressed to hand-picked users rather than a group.
    pub fn needs_recipients(&self) -> bool {
        matches!(self, RecipientCategory::Individual)
    }

    /// Categories addressed to the members of a related team or competition.
    pub fn needs_related_entity(&self) -> bool {
        matches!(
            self,
            RecipientCategory::Team
                | RecipientCategory::TeamWithCoach
                | RecipientCategory::CompetitionCoaches
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageDto {
    pub id: Option<i64>,
    pub content: String,
    pub sender_id: Option<i64>,
    pub sender_role: Option<Role>,
    pub recipient_ids: Vec<i64>,
    pub recipient_category: Option<RecipientCategory>,
    pub related_entity_id: Option<i64>,
    pub related_entity_type: Option<String>,
    pub sent_at: Option<NaiveDateTime>,
    pub read_at: Option<NaiveDateTime>,
    #[serde(alias = "read")]
    pub is_read: bool,
}

impl MessageDto {
    /// First line of the content, shortened for list views.
    pub fn preview(&self, max_chars: usize) -> String {
        let line = self.content.lines().next().unwrap_or_default();
        if line.chars().count() > max_chars {
            let cut: String = line.chars().take(max_chars).collect();
            format!("{}...", cut.trim_end())
        } else {
            line.to_string()
        }
    }
}

/// Body of an inbox or sent-box reply.
///
/// Depending on the handler the backend returns a bare list, a `{ "data": [...] }`
/// wrapper, or a single message.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MessageList {
    List(Vec<MessageDto>),
    Wrapped { data: Vec<MessageDto> },
    Single(MessageDto),
}

impl MessageList {
    pub fn into_vec(self) -> Vec<MessageDto> {
        match self {
            MessageList::List(messages) | MessageList::Wrapped { data: messages } => messages,
            MessageList::Single(message) => vec![message],
        }
    }
}

impl Default for MessageList {
    fn default() -> Self {
        MessageList::List(Vec::new())
    }
}

/// Potential recipient of a message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipientDto {
    pub id: Option<i64>,
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub team_name: Option<String>,
}

impl RecipientDto {
    /// "First Last", then the user name, then a placeholder.
    pub fn name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let full = full.trim();

        if !full.is_empty() {
            full.to_string()
        } else {
            self.user_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Unknown user".to_string())
        }
    }
}

/// Query of `GET /messages/inbox`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboxFilter {
    pub is_read: Option<bool>,
    pub recipient_category: Option<RecipientCategory>,
    pub sender_id: Option<i64>,
    pub sender_role: Option<Role>,
    pub sender_roles: Vec<Role>,
    pub exclude_sender_roles: Vec<Role>,
    pub is_platform_message: Option<bool>,
    pub sender_name: Option<String>,
    pub related_entity_id: Option<i64>,
    pub related_entity_type: Option<String>,
}

impl ToQuery for InboxFilter {
    fn to_query(&self) -> QueryParams {
        let roles = |roles: &[Role]| roles.iter().map(|r| r.as_str().to_string()).collect::<Vec<_>>();

        QueryParams::new()
            .with_opt("isRead", self.is_read)
            .with_opt(
                "recipientCategory",
                self.recipient_category.as_ref().map(|c| c.as_str().to_string()),
            )
            .with_opt("senderId", self.sender_id)
            .with_opt(
                "senderRole",
                self.sender_role.as_ref().map(|r| r.as_str().to_string()),
            )
            .with_list("senderRoles", &roles(&self.sender_roles))
            .with_list("excludeSenderRoles", &roles(&self.exclude_sender_roles))
            .with_opt("isPlatformMessage", self.is_platform_message)
            .with_opt("senderName", self.sender_name.as_ref())
            .with_opt("relatedEntityId", self.related_entity_id)
            .with_opt("relatedEntityType", self.related_entity_type.as_ref())
    }
}

/// Query of `GET /messages/sent`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentFilter {
    pub recipient_category: Option<RecipientCategory>,
    pub recipient_id: Option<i64>,
    pub related_entity_id: Option<i64>,
    pub related_entity_type: Option<String>,
}

impl ToQuery for SentFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt(
                "recipientCategory",
                self.recipient_category.as_ref().map(|c| c.as_str().to_string()),
            )
            .with_opt("recipientId", self.recipient_id)
            .with_opt("relatedEntityId", self.related_entity_id)
            .with_opt("relatedEntityType", self.related_entity_type.as_ref())
    }
}

/// Query of `GET /messages/recipients`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipientFilter {
    pub team_name: Option<String>,
    pub competition_name: Option<String>,
    pub target_role: Option<Role>,
    pub search: Option<String>,
}

impl ToQuery for RecipientFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("teamName", self.team_name.as_ref())
            .with_opt("competitionName", self.competition_name.as_ref())
            .with_opt(
                "targetRole",
                self.target_role.as_ref().map(|r| r.as_str().to_string()),
            )
            .with_opt("search", self.search.as_ref())
    }
}
