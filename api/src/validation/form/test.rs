use chrono::NaiveDate;

use super::*;
use crate::model::{
    competition::CompetitionType,
    matches::{MatchParticipantDto, MatchRole},
    message::RecipientCategory,
    player::PlayerPosition,
};

fn fields(errors: &[FieldError]) -> Vec<&'static str> {
    errors.iter().map(|e| e.field).collect()
}

#[test]
fn blank_values() {
    assert!(is_blank(""));
    assert!(is_blank("   \t"));
    assert!(!is_blank(" a "));
}

#[test]
fn email_addresses() {
    assert!(is_valid_email("coach@league.fr"));
    assert!(is_valid_email("first.last+tag@sub.domain.org"));
    assert!(!is_valid_email("coach@league"));
    assert!(!is_valid_email("coach league@x.fr"));
    assert!(!is_valid_email(""));
}

#[test]
fn length_bounds() {
    assert!(has_min_length("abcd", 4));
    assert!(!has_min_length("abc", 4));
    assert!(!has_min_length("   ", 0));
    assert!(has_max_length("", 3));
    assert!(has_max_length("abc", 3));
    assert!(!has_max_length("abcd", 3));
}

/// Tests the strong password rule.
///
/// Expected: every character class required, only allowed characters accepted
#[test]
fn strong_passwords() {
    assert!(is_strong_password("Secret1!"));
    assert!(is_strong_password("aB3$aB3$aB3$"));
    assert!(!is_strong_password("Secre1!"), "too short");
    assert!(!is_strong_password("secret1!"), "no upper-case");
    assert!(!is_strong_password("SECRET1!"), "no lower-case");
    assert!(!is_strong_password("Secrets!"), "no digit");
    assert!(!is_strong_password("Secret12"), "no special");
    assert!(!is_strong_password("Secret1!#"), "disallowed character");
    assert!(!is_strong_password("Secret 1!"), "space");
}

/// Tests digits from scripts other than ASCII.
///
/// Expected: rejected by the password, date and phone rules
#[test]
fn non_ascii_digits() {
    assert!(!is_strong_password("Abcdef1!\u{0663}"));
    assert!(!is_valid_date("\u{0662}\u{0660}\u{0662}\u{0665}-03-01"));
    let arabic_indic: String = ('\u{0661}'..='\u{0669}').collect();
    assert!(!is_valid_phone(&arabic_indic));
    assert!(is_valid_phone("123456789"));
}

#[test]
fn numbers() {
    assert!(is_number("42"));
    assert!(is_number(" 3.5 "));
    assert!(is_number("-1"));
    assert!(!is_number("abc"));
    assert!(!is_number("NaN"));
    assert!(!is_number(""));

    assert!(is_positive_integer("7"));
    assert!(is_positive_integer("7.0"));
    assert!(!is_positive_integer("0"));
    assert!(!is_positive_integer("-3"));
    assert!(!is_positive_integer("2.5"));
}

#[test]
fn dates() {
    assert!(is_valid_date("2025-03-01"));
    assert!(!is_valid_date("2025-02-30"));
    assert!(!is_valid_date("01/03/2025"));
    assert!(!is_valid_date("2025-3-1"));

    assert!(is_valid_date_range("2025-03-01", "2025-03-02"));
    assert!(!is_valid_date_range("2025-03-01", "2025-03-01"));
    assert!(!is_valid_date_range("2025-03-02", "2025-03-01"));
    assert!(!is_valid_date_range("2025-03-01", "soon"));
}

#[test]
fn phone_numbers() {
    assert!(is_valid_phone("0612345678"));
    assert!(is_valid_phone("06 12 34 56 78"));
    assert!(is_valid_phone("+33 612345678"));
    assert!(is_valid_phone("06.12.34.56.78"));
    assert!(!is_valid_phone("12345"));
    assert!(!is_valid_phone("phone"));
}

#[test]
fn urls() {
    assert!(is_valid_url("https://league.example/logo.png"));
    assert!(!is_valid_url("logo.png"));
    assert!(!is_valid_url(""));
}

/// Tests that login requires a valid email and a password.
///
/// Expected: one error per failing field
#[test]
fn login_form() {
    let errors = validate_login(&LoginRequest {
        email: "nope".to_string(),
        password: String::new(),
    });

    assert_eq!(fields(&errors), vec!["email", "password"]);
    assert_eq!(field_message(&errors, "email"), Some("Invalid email address"));
}

fn registration(role: Role) -> RegisterRequest {
    RegisterRequest {
        user_name: "jdoe".to_string(),
        email: "jdoe@league.fr".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        password: "Secret1!".to_string(),
        role: Some(role),
        ..Default::default()
    }
}

/// Tests registration, including the password confirmation.
///
/// Expected: Ok for a complete coach, confirmation mismatch reported otherwise
#[test]
fn registration_form() {
    assert!(validate_registration(&registration(Role::Coach), "Secret1!").is_empty());

    let errors = validate_registration(&registration(Role::Coach), "Secret2!");
    assert_eq!(fields(&errors), vec!["confirmPassword"]);
}

/// Tests the role-specific registration fields.
///
/// Expected: players need a position and organizers an organization
#[test]
fn registration_role_fields() {
    let errors = validate_registration(&registration(Role::Player), "Secret1!");
    assert_eq!(fields(&errors), vec!["position"]);

    let player = RegisterRequest {
        position: Some(PlayerPosition::Goalkeeper),
        ..registration(Role::Player)
    };
    assert!(validate_registration(&player, "Secret1!").is_empty());

    let errors = validate_registration(&registration(Role::Organizer), "Secret1!");
    assert_eq!(fields(&errors), vec!["organization"]);
}

#[test]
fn registration_rejects_weak_password() {
    let request = RegisterRequest {
        password: "password".to_string(),
        ..registration(Role::Coach)
    };

    let errors = validate_registration(&request, "password");
    assert_eq!(fields(&errors), vec!["password"]);
}

#[test]
fn change_password_form() {
    let valid = ChangePasswordRequest {
        current_password: "OldSecret1!".to_string(),
        new_password: "NewSecret1!".to_string(),
        confirm_password: "NewSecret1!".to_string(),
    };
    assert!(validate_change_password(&valid).is_empty());

    let same = ChangePasswordRequest {
        new_password: "OldSecret1!".to_string(),
        confirm_password: "OldSecret1!".to_string(),
        ..valid.clone()
    };
    assert_eq!(fields(&validate_change_password(&same)), vec!["newPassword"]);

    let mismatch = ChangePasswordRequest {
        confirm_password: "Other1!aa".to_string(),
        ..valid
    };
    assert_eq!(
        fields(&validate_change_password(&mismatch)),
        vec!["confirmPassword"]
    );
}

/// Tests the competition form.
///
/// Expected: end date after start date and at least two teams
#[test]
fn competition_form() {
    let mut competition = OrganizerCompetitionDto {
        name: Some("Spring Cup".to_string()),
        competition_type: Some(CompetitionType::Cup),
        start_date: NaiveDate::from_ymd_opt(2025, 4, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 1),
        max_teams: Some(8),
        ..Default::default()
    };
    assert!(validate_competition(&competition).is_empty());

    competition.end_date = NaiveDate::from_ymd_opt(2025, 3, 1);
    competition.max_teams = Some(1);
    assert_eq!(
        fields(&validate_competition(&competition)),
        vec!["endDate", "maxTeams"]
    );

    let empty = OrganizerCompetitionDto::default();
    assert_eq!(
        fields(&validate_competition(&empty)),
        vec!["name", "competitionType", "startDate", "maxTeams"]
    );
}

#[test]
fn team_form() {
    let mut team = CreateTeamDto {
        name: "Red Lions".to_string(),
        logo: Some("https://cdn.example/lions.png".to_string()),
        ..Default::default()
    };
    assert!(validate_team(&team).is_empty());

    team.name = " ".to_string();
    team.logo = Some("lions.png".to_string());
    assert_eq!(fields(&validate_team(&team)), vec!["name", "logo"]);
}

/// Tests player registration for new and existing users.
///
/// Expected: an existing user id skips the identity checks
#[test]
fn player_registration_form() {
    let existing = RegisterPlayerDto {
        user_id: Some(5),
        ..Default::default()
    };
    assert!(validate_player_registration(&existing).is_empty());

    let new_player = RegisterPlayerDto {
        email: "p@league.fr".to_string(),
        user_name: "p1".to_string(),
        first_name: "Paul".to_string(),
        last_name: "Pogba".to_string(),
        password: Some("short".to_string()),
        phone: Some("123".to_string()),
        ..Default::default()
    };
    assert_eq!(
        fields(&validate_player_registration(&new_player)),
        vec!["phone", "password", "position"]
    );
}

fn participant(team_id: i64, role: MatchRole) -> MatchParticipantDto {
    MatchParticipantDto {
        team_id: Some(team_id),
        role: Some(role),
        ..Default::default()
    }
}

#[test]
fn match_schedule_form() {
    let mut game = MatchDto {
        title: Some("Round 1".to_string()),
        competition_id: Some(1),
        scheduled_date_time: NaiveDate::from_ymd_opt(2025, 5, 10)
            .and_then(|d| d.and_hms_opt(15, 0, 0)),
        participants: vec![
            participant(1, MatchRole::Home),
            participant(2, MatchRole::Away),
        ],
        ..Default::default()
    };
    assert!(validate_match_schedule(&game).is_empty());

    game.participants[1].team_id = Some(1);
    assert_eq!(fields(&validate_match_schedule(&game)), vec!["participants"]);

    game.participants.pop();
    assert_eq!(
        field_message(&validate_match_schedule(&game), "participants"),
        Some("Both a home and an away team are required")
    );
}

/// Tests message composition per recipient category.
///
/// Expected: individual messages need recipients, team messages need a team
#[test]
fn message_form() {
    let mut message = MessageDto {
        content: "Training moved to 18:00".to_string(),
        recipient_category: Some(RecipientCategory::Individual),
        ..Default::default()
    };
    assert_eq!(fields(&validate_message(&message)), vec!["recipientIds"]);

    message.recipient_ids = vec![4, 5];
    assert!(validate_message(&message).is_empty());

    message.recipient_category = Some(RecipientCategory::Team);
    assert_eq!(fields(&validate_message(&message)), vec!["relatedEntityId"]);

    message.recipient_category = Some(RecipientCategory::AllCoaches);
    message.content = String::new();
    assert_eq!(fields(&validate_message(&message)), vec!["content"]);
}
