use chrono::NaiveDate;

use super::{
    competition::{CompetitionDto, CompetitionFilter, CompetitionStatus, CompetitionType},
    match_sheet::MatchSheetStatus,
    matches::{MatchDto, MatchParticipantDto, MatchRole},
    message::{InboxFilter, MessageDto, MessageList, RecipientDto},
    notification::{NotificationDto, UnreadCount},
    team::StandingDto,
    user::{Role, UserDto},
};
use crate::http::ToQuery;

/// Tests that an enum value unknown to the dashboard still deserializes.
///
/// Expected: Unknown variant carrying the raw value, serialized back unchanged
#[test]
fn unknown_enum_values_are_kept() {
    let status: MatchSheetStatus = serde_json::from_str(r#""ARCHIVED""#).unwrap();
    assert_eq!(status, MatchSheetStatus::Unknown("ARCHIVED".to_string()));
    assert_eq!(serde_json::to_string(&status).unwrap(), r#""ARCHIVED""#);

    let role: Role = serde_json::from_str(r#""COACH""#).unwrap();
    assert_eq!(role, Role::Coach);
    assert_eq!(role.label(), "Coach");
}

#[test]
fn competition_type_field_is_renamed() {
    let competition: CompetitionDto = serde_json::from_str(
        r#"{"id": 1, "name": "Cup", "type": "LEAGUE", "status": "IN_PROGRESS", "startDate": "2025-04-01"}"#,
    )
    .unwrap();

    assert_eq!(competition.competition_type, Some(CompetitionType::League));
    assert_eq!(competition.status, Some(CompetitionStatus::InProgress));
    assert_eq!(competition.start_date, NaiveDate::from_ymd_opt(2025, 4, 1));
    assert_eq!(competition.end_date, None);
}

/// Tests that both spellings of the read flag are accepted.
///
/// Expected: `read` and `isRead` both set `is_read`
#[test]
fn read_flag_aliases() {
    let message: MessageDto = serde_json::from_str(r#"{"id": 1, "content": "hi", "read": true}"#).unwrap();
    assert!(message.is_read);

    let notification: NotificationDto =
        serde_json::from_str(r#"{"id": 2, "message": "hi", "isRead": true}"#).unwrap();
    assert!(notification.is_read);
}

/// Tests the three shapes of a message list reply.
///
/// Expected: each shape yields the same messages
#[test]
fn message_list_shapes() {
    let list: MessageList = serde_json::from_str(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
    assert_eq!(list.into_vec().len(), 2);

    let wrapped: MessageList = serde_json::from_str(r#"{"data": [{"id": 3}]}"#).unwrap();
    let messages = wrapped.into_vec();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, Some(3));

    let single: MessageList = serde_json::from_str(r#"{"id": 4, "content": "hello"}"#).unwrap();
    let messages = single.into_vec();
    assert_eq!(messages[0].content, "hello");
}

#[test]
fn unread_count_shapes() {
    let bare: UnreadCount = serde_json::from_str("5").unwrap();
    assert_eq!(bare.count, 5);

    let object: UnreadCount = serde_json::from_str(r#"{"count": 2}"#).unwrap();
    assert_eq!(object.count, 2);

    let aliased: UnreadCount = serde_json::from_str(r#"{"unreadCount": 7}"#).unwrap();
    assert_eq!(aliased.count, 7);
}

/// Tests list filters turned into query strings.
///
/// Expected: unset fields skipped, lists as repeated keys
#[test]
fn filters_to_query() {
    let filter = CompetitionFilter {
        status: Some(CompetitionStatus::Registration),
        name: Some("Spring Cup".to_string()),
        start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
        ..Default::default()
    };
    assert_eq!(
        filter.to_query().to_query_string(),
        "status=REGISTRATION&name=Spring+Cup&startDate=2025-03-01"
    );

    let inbox = InboxFilter {
        is_read: Some(false),
        sender_roles: vec![Role::Coach, Role::Organizer],
        sender_name: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(
        inbox.to_query().to_query_string(),
        "isRead=false&senderRoles=COACH&senderRoles=ORGANIZER"
    );

    assert!(CompetitionFilter::default().to_query().is_empty());
}

#[test]
fn display_names() {
    let recipient = RecipientDto {
        user_name: Some("kbenz".to_string()),
        ..Default::default()
    };
    assert_eq!(recipient.name(), "kbenz");
    assert_eq!(RecipientDto::default().name(), "Unknown user");

    let user = UserDto {
        first_name: Some("Ada".to_string()),
        ..Default::default()
    };
    assert_eq!(user.display_name(), "Ada");
}

#[test]
fn match_sides_and_score() {
    let side = |name: &str, role: MatchRole| MatchParticipantDto {
        team_name: Some(name.to_string()),
        role: Some(role),
        ..Default::default()
    };
    let game = MatchDto {
        participants: vec![side("Away FC", MatchRole::Away), side("Home FC", MatchRole::Home)],
        home_team_score: Some(2),
        ..Default::default()
    };

    assert_eq!(game.fixture(), "Home FC - Away FC");
    assert_eq!(game.score(), None);

    let finished = MatchDto {
        away_team_score: Some(1),
        ..game
    };
    assert_eq!(finished.score().as_deref(), Some("2 - 1"));
}

#[test]
fn standing_form() {
    let standing = StandingDto {
        form: Some("WDL".to_string()),
        ..Default::default()
    };
    assert_eq!(standing.form_results(), vec!['W', 'D', 'L']);
}

#[test]
fn notification_targets() {
    let notification = NotificationDto {
        entity_type: Some("MATCH".to_string()),
        entity_id: Some(9),
        ..Default::default()
    };
    assert_eq!(notification.target_path().as_deref(), Some("/matches/9"));
    assert_eq!(NotificationDto::default().target_path(), None);
}
