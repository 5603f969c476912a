//! Field validators shared by the dashboard forms.
//!
//! The predicates mirror what the backend accepts so most mistakes are caught before
//! a request is made. Form-level validators return every failing field at once.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::model::{
    auth::{LoginRequest, RegisterRequest},
    competition::OrganizerCompetitionDto,
    matches::MatchDto,
    message::MessageDto,
    player::RegisterPlayerDto,
    team::CreateTeamDto,
    user::{ChangePasswordRequest, Role},
};

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const NAME_MAX_LENGTH: usize = 100;
pub const MESSAGE_MAX_LENGTH: usize = 2000;

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());
static PASSWORD_CHARSET: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").ok());
static DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").ok());
static PHONE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\+[0-9]{1,3}[- ]?)?[0-9]{9,15}$").ok());
static PHONE_SEPARATORS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[\s.-]").ok());

const PASSWORD_SPECIALS: &str = "@$!%*?&";

fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

/// Error on a single form field.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Message for `field` among `errors`, for inline display under an input.
pub fn field_message<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    !is_blank(value) && matches(&EMAIL, value)
}

/// A blank value never has a minimum length.
pub fn has_min_length(value: &str, min: usize) -> bool {
    !is_blank(value) && value.chars().count() >= min
}

/// A blank value always fits.
pub fn has_max_length(value: &str, max: usize) -> bool {
    is_blank(value) || value.chars().count() <= max
}

/// At least 8 characters with a lower-case letter, an upper-case letter, a digit and
/// one of `@$!%*?&`, using only those characters.
pub fn is_strong_password(value: &str) -> bool {
    !is_blank(value)
        && matches(&PASSWORD_CHARSET, value)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

pub fn is_number(value: &str) -> bool {
    !is_blank(value) && value.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

pub fn is_positive_integer(value: &str) -> bool {
    is_number(value)
        && value
            .trim()
            .parse::<f64>()
            .is_ok_and(|n| n.fract() == 0.0 && n > 0.0)
}

/// `YYYY-MM-DD` naming a real calendar day.
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if !matches(&DATE, value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Both dates valid and `start` strictly before `end`.
pub fn is_valid_date_range(start: &str, end: &str) -> bool {
    match (parse_date(start), parse_date(end)) {
        (Some(start), Some(end)) => start < end,
        _ => false,
    }
}

/// International number; spaces, dots and dashes are ignored.
pub fn is_valid_phone(value: &str) -> bool {
    if is_blank(value) {
        return false;
    }
    let compact = match PHONE_SEPARATORS.as_ref() {
        Some(separators) => separators.replace_all(value, "").into_owned(),
        None => value.to_string(),
    };
    matches(&PHONE, &compact)
}

pub fn is_valid_url(value: &str) -> bool {
    !is_blank(value) && url::Url::parse(value).is_ok()
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str) -> bool {
    if is_blank(value) {
        errors.push(FieldError::new(field, format!("{} is required", label)));
        false
    } else {
        true
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    if require(errors, "email", value, "Email") && !is_valid_email(value) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
}

fn check_optional_phone(errors: &mut Vec<FieldError>, value: Option<&str>) {
    if let Some(phone) = value.filter(|p| !is_blank(p)) {
        if !is_valid_phone(phone) {
            errors.push(FieldError::new("phone", "Invalid phone number"));
        }
    }
}

fn check_name(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str) {
    if require(errors, field, value, label) && !has_max_length(value, NAME_MAX_LENGTH) {
        errors.push(FieldError::new(
            field,
            format!("{} must be at most {} characters", label, NAME_MAX_LENGTH),
        ));
    }
}

pub fn validate_login(request: &LoginRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_email(&mut errors, &request.email);
    require(&mut errors, "password", &request.password, "Password");
    errors
}

pub fn validate_registration(request: &RegisterRequest, confirm_password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_name(&mut errors, "userName", &request.user_name, "User name");
    check_email(&mut errors, &request.email);
    check_name(&mut errors, "firstName", &request.first_name, "First name");
    check_name(&mut errors, "lastName", &request.last_name, "Last name");
    check_optional_phone(&mut errors, request.phone.as_deref());

    if require(&mut errors, "password", &request.password, "Password")
        && !is_strong_password(&request.password)
    {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 8 characters with an upper-case letter, a lower-case letter, a digit and a special character",
        ));
    }
    if request.password != confirm_password {
        errors.push(FieldError::new("confirmPassword", "Passwords do not match"));
    }

    match &request.role {
        None => errors.push(FieldError::new("role", "Please choose an account type")),
        Some(Role::Player) if request.position.is_none() => {
            errors.push(FieldError::new("position", "Position is required"));
        }
        Some(Role::Organizer)
            if request.organization.as_deref().map_or(true, is_blank) =>
        {
            errors.push(FieldError::new("organization", "Organization is required"));
        }
        Some(Role::Coach) if request.years_of_experience.is_some_and(|y| y < 0) => {
            errors.push(FieldError::new(
                "yearsOfExperience",
                "Years of experience cannot be negative",
            ));
        }
        _ => {}
    }

    errors
}

pub fn validate_change_password(request: &ChangePasswordRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    require(
        &mut errors,
        "currentPassword",
        &request.current_password,
        "Current password",
    );
    if require(&mut errors, "newPassword", &request.new_password, "New password") {
        if !is_strong_password(&request.new_password) {
            errors.push(FieldError::new(
                "newPassword",
                "Password must be at least 8 characters with an upper-case letter, a lower-case letter, a digit and a special character",
            ));
        } else if request.new_password == request.current_password {
            errors.push(FieldError::new(
                "newPassword",
                "New password must differ from the current one",
            ));
        }
    }
    if request.new_password != request.confirm_password {
        errors.push(FieldError::new("confirmPassword", "Passwords do not match"));
    }

    errors
}

pub fn validate_competition(competition: &OrganizerCompetitionDto) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_name(
        &mut errors,
        "name",
        competition.name.as_deref().unwrap_or_default(),
        "Name",
    );
    if competition.competition_type.is_none() {
        errors.push(FieldError::new("competitionType", "Type is required"));
    }
    match (competition.start_date, competition.end_date) {
        (None, _) => errors.push(FieldError::new("startDate", "Start date is required")),
        (_, None) => errors.push(FieldError::new("endDate", "End date is required")),
        (Some(start), Some(end)) if start >= end => {
            errors.push(FieldError::new("endDate", "End date must be after the start date"));
        }
        _ => {}
    }
    match competition.max_teams {
        None => errors.push(FieldError::new("maxTeams", "Maximum number of teams is required")),
        Some(max) if max < 2 => {
            errors.push(FieldError::new("maxTeams", "At least 2 teams are required"));
        }
        _ => {}
    }

    errors
}

pub fn validate_team(team: &CreateTeamDto) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_name(&mut errors, "name", &team.name, "Team name");
    if let Some(logo) = team.logo.as_deref().filter(|l| !is_blank(l)) {
        if !is_valid_url(logo) {
            errors.push(FieldError::new("logo", "Logo must be a valid URL"));
        }
    }

    errors
}

/// A new account needs identity fields; attaching an existing user only needs its id.
pub fn validate_player_registration(player: &RegisterPlayerDto) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if player.user_id.is_some() {
        return errors;
    }

    check_name(&mut errors, "userName", &player.user_name, "User name");
    check_email(&mut errors, &player.email);
    check_name(&mut errors, "firstName", &player.first_name, "First name");
    check_name(&mut errors, "lastName", &player.last_name, "Last name");
    check_optional_phone(&mut errors, player.phone.as_deref());

    if let Some(password) = player.password.as_deref().filter(|p| !is_blank(p)) {
        if !has_min_length(password, PASSWORD_MIN_LENGTH) {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at least {} characters", PASSWORD_MIN_LENGTH),
            ));
        }
    }
    if player.position.is_none() {
        errors.push(FieldError::new("position", "Position is required"));
    }

    errors
}

/// Checks a match before scheduling it.
pub fn validate_match_schedule(game: &MatchDto) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_name(
        &mut errors,
        "title",
        game.title.as_deref().unwrap_or_default(),
        "Title",
    );
    if game.competition_id.is_none() {
        errors.push(FieldError::new("competitionId", "Competition is required"));
    }
    if game.scheduled_date_time.is_none() {
        errors.push(FieldError::new("scheduledDateTime", "Date and time are required"));
    }

    match (game.home_team(), game.away_team()) {
        (Some(home), Some(away)) => {
            if home.team_id.is_some() && home.team_id == away.team_id {
                errors.push(FieldError::new(
                    "participants",
                    "Home and away teams must be different",
                ));
            }
        }
        _ => errors.push(FieldError::new(
            "participants",
            "Both a home and an away team are required",
        )),
    }

    errors
}

pub fn validate_message(message: &MessageDto) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if require(&mut errors, "content", &message.content, "Message")
        && !has_max_length(&message.content, MESSAGE_MAX_LENGTH)
    {
        errors.push(FieldError::new(
            "content",
            format!("Message must be at most {} characters", MESSAGE_MAX_LENGTH),
        ));
    }

    match &message.recipient_category {
        None => errors.push(FieldError::new(
            "recipientCategory",
            "Please choose who receives the message",
        )),
        Some(category) if category.needs_recipients() && message.recipient_ids.is_empty() => {
            errors.push(FieldError::new(
                "recipientIds",
                "Please select at least one recipient",
            ));
        }
        Some(category) if category.needs_related_entity() && message.related_entity_id.is_none() => {
            errors.push(FieldError::new(
                "relatedEntityId",
                "Please select a team or competition",
            ));
        }
        _ => {}
    }

    errors
}

#[cfg(test)]
mod test;
