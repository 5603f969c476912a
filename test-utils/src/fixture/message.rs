use league_api::model::{
    message::{MessageDto, RecipientCategory, RecipientDto},
    user::Role,
};

pub fn dto(id: i64, content: &str) -> MessageDto {
    MessageDto {
        id: Some(id),
        content: content.to_string(),
        sender_id: Some(super::user::DEFAULT_ORGANIZER_ID),
        sender_role: Some(Role::Organizer),
        recipient_ids: vec![super::user::DEFAULT_COACH_ID],
        recipient_category: Some(RecipientCategory::Individual),
        ..Default::default()
    }
}

pub fn recipient(id: i64, first: &str, last: &str) -> RecipientDto {
    RecipientDto {
        id: Some(id),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        role: Some(Role::Player),
        ..Default::default()
    }
}
