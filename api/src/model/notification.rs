use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationDto {
    pub id: Option<i64>,
    pub message: String,
    pub sender_id: Option<i64>,
    pub sender_name: Option<String>,
    pub recipient_id: Option<i64>,
    #[serde(alias = "read")]
    pub is_read: bool,
    pub created_at: Option<NaiveDateTime>,
    pub read_at: Option<NaiveDateTime>,
    pub entity_type: Option<String>,
    pub entity_id: Option<i64>,
}

impl NotificationDto {
    /// Dashboard page showing the entity the notification is about.
    pub fn target_path(&self) -> Option<String> {
        let id = self.entity_id?;
        match self.entity_type.as_deref()? {
            "MATCH" => Some(format!("/matches/{}", id)),
            "COMPETITION" => Some(format!("/competitions/{}", id)),
            "TEAM" => Some(format!("/teams/{}", id)),
            "MESSAGE" => Some(format!("/dashboard/messages/{}", id)),
            "MATCH_SHEET" => Some(format!("/dashboard/coach/matches/{}", id)),
            _ => None,
        }
    }
}

/// Reply of `GET /notifications/count`, either a bare number or `{ "count": n }`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct UnreadCount {
    pub count: u32,
}

impl<'de> Deserialize<'de> for UnreadCount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Reply {
            Bare(u32),
            Object {
                #[serde(alias = "unreadCount")]
                count: u32,
            },
        }

        match Reply::deserialize(deserializer)? {
            Reply::Bare(count) | Reply::Object { count } => Ok(Self { count }),
        }
    }
}
