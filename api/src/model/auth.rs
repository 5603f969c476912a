use serde::{Deserialize, Serialize};

use super::{
    player::PlayerPosition,
    user::{Role, UserDto},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Reply of `POST /auth/login`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResponse {
    pub token: String,
    pub refresh_token: Option<String>,
    pub user: UserDto,
}

/// Account creation payload; the role-specific fields are only sent for that role.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PlayerPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Reply of `POST /auth/refresh-token` when the backend returns a token pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RefreshTokenResponse {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
}
