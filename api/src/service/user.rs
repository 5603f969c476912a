use crate::{
    client::ApiClient,
    endpoints,
    error::ApiError,
    http::Transport,
    model::user::{ChangePasswordRequest, ProfileUpdate, UserDto},
    storage::TokenStore,
};

pub struct UserService<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> UserService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub async fn get_user(&self, user_id: i64) -> Result<UserDto, ApiError> {
        self.client.get(&endpoints::users::by_id(user_id)).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, ApiError> {
        self.client.get(endpoints::users::BASE).await
    }

    pub async fn update_profile(&self, profile: &ProfileUpdate) -> Result<UserDto, ApiError> {
        self.client
            .put(endpoints::users::UPDATE_PROFILE, profile)
            .await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.client
            .put_for_text(endpoints::users::CHANGE_PASSWORD, Some(request))
            .await
            .map(|_| ())
    }

    pub async fn update_coach_profile(&self, profile: &ProfileUpdate) -> Result<UserDto, ApiError> {
        self.client
            .put(endpoints::users::UPDATE_COACH_PROFILE, profile)
            .await
    }

    pub async fn update_organizer_profile(
        &self,
        profile: &ProfileUpdate,
    ) -> Result<UserDto, ApiError> {
        self.client
            .put(endpoints::users::UPDATE_ORGANIZER_PROFILE, profile)
            .await
    }
}
