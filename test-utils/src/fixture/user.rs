//! Users of each role, plus a login reply.

use league_api::model::{
    auth::LoginResponse,
    player::{PlayerDto, PlayerPosition, PlayerStatus},
    user::{Role, UserDto},
};

pub const DEFAULT_COACH_ID: i64 = 1;
pub const DEFAULT_ORGANIZER_ID: i64 = 2;
pub const DEFAULT_PLAYER_ID: i64 = 3;

pub const DEFAULT_ACCESS_TOKEN: &str = "access-token";
pub const DEFAULT_REFRESH_TOKEN: &str = "refresh-token";

fn user(id: i64, role: Role, user_name: &str, first: &str, last: &str) -> UserDto {
    UserDto {
        id: Some(id),
        email: Some(format!("{}@league.test", user_name)),
        user_name: Some(user_name.to_string()),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        role: Some(role),
        ..Default::default()
    }
}

pub fn coach() -> UserDto {
    UserDto {
        license_number: Some("UEFA-B-1042".to_string()),
        years_of_experience: Some(8),
        ..user(DEFAULT_COACH_ID, Role::Coach, "coach", "Carla", "Mendes")
    }
}

pub fn organizer() -> UserDto {
    UserDto {
        organization: Some("District League".to_string()),
        ..user(DEFAULT_ORGANIZER_ID, Role::Organizer, "organizer", "Omar", "Haddad")
    }
}

pub fn player() -> PlayerDto {
    player_with(DEFAULT_PLAYER_ID, "Paul", "Ndiaye")
}

/// Midfielder of the default team with the given identity.
pub fn player_with(id: i64, first: &str, last: &str) -> PlayerDto {
    PlayerDto {
        position: Some(PlayerPosition::Midfielder),
        status: Some(PlayerStatus::Starter),
        team_id: Some(super::team::DEFAULT_ID),
        team_name: Some(super::team::DEFAULT_NAME.to_string()),
        ..user(
            id,
            Role::Player,
            &format!("{}.{}", first, last).to_lowercase(),
            first,
            last,
        )
    }
}

/// Successful login of `user` with the default tokens.
pub fn login_response(user: UserDto) -> LoginResponse {
    LoginResponse {
        token: DEFAULT_ACCESS_TOKEN.to_string(),
        refresh_token: Some(DEFAULT_REFRESH_TOKEN.to_string()),
        user,
    }
}
