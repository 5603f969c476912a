use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::player::{PlayerPosition, PlayerStatus};

backend_enum! {
    pub enum Role {
        User => ("USER", "User"),
        Player => ("PLAYER", "Player"),
        Coach => ("COACH", "Coach"),
        Organizer => ("ORGANIZER", "Organizer"),
        Admin => ("ADMIN", "Administrator"),
    }
}

impl Role {
    /// Landing page of the role's dashboard.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Coach => "/dashboard/coach",
            Role::Organizer => "/dashboard/organizer",
            _ => "/dashboard/profile",
        }
    }

    /// DaisyUI badge color used next to the role.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Role::Player => "badge-primary",
            Role::Coach => "badge-success",
            Role::Organizer => "badge-warning",
            Role::Admin => "badge-error",
            _ => "badge-ghost",
        }
    }
}

/// Any user as returned by `/users/{id}` or `/auth/me`.
///
/// The backend returns a role-specific shape; the coach, organizer and player fields
/// are flattened into this struct and stay `None` for the other roles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    // Coach
    pub license_number: Option<String>,
    pub years_of_experience: Option<i32>,
    pub number_of_teams: Option<i32>,
    pub specialization: Option<String>,
    pub organization: Option<String>,
    pub biography: Option<String>,
    pub contact_details: Option<String>,

    // Organizer
    pub active_competitions_count: Option<i32>,

    // Player
    pub date_of_birth: Option<NaiveDate>,
    pub position: Option<PlayerPosition>,
    pub status: Option<PlayerStatus>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

impl UserDto {
    /// "First Last", falling back to the user name.
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let full = full.trim();

        if !full.is_empty() {
            full.to_string()
        } else if let Some(user_name) = self.user_name.as_deref().filter(|n| !n.is_empty()) {
            user_name.to_string()
        } else {
            "Unknown user".to_string()
        }
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.role.as_ref() == Some(role)
    }
}

/// Payload of `PUT /users/change-password`.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Profile fields a user may edit.
///
/// Sent to `/users/profile`, `/users/coach/profile` and `/users/organizer/profile`;
/// fields left `None` are omitted so the backend keeps their current value.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<String>,
}

impl ProfileUpdate {
    /// Seeds the form with the user's current values.
    pub fn from_user(user: &UserDto) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            user_name: user.user_name.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            profile_picture: user.profile_picture.clone(),
            license_number: user.license_number.clone(),
            years_of_experience: user.years_of_experience,
            specialization: user.specialization.clone(),
            organization: user.organization.clone(),
            biography: user.biography.clone(),
            contact_details: user.contact_details.clone(),
        }
    }
}
