use league_api::model::notification::NotificationDto;

pub fn dto(id: i64, is_read: bool) -> NotificationDto {
    NotificationDto {
        id: Some(id),
        message: format!("Match sheet {} was validated", id),
        recipient_id: Some(super::user::DEFAULT_COACH_ID),
        is_read,
        entity_type: Some("MATCH_SHEET".to_string()),
        entity_id: Some(id),
        ..Default::default()
    }
}
