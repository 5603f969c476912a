use crate::{
    client::{decode, encode, ApiClient},
    endpoints,
    error::ApiError,
    http::Transport,
    model::{
        auth::{
            ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
            ResetPasswordRequest,
        },
        user::UserDto,
    },
    storage::{TokenStore, AUTH_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY},
};

pub struct AuthService<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> AuthService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    /// Logs in and persists the returned tokens and user.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .client
            .post(endpoints::auth::LOGIN, credentials)
            .await?;

        let store = self.client.store();
        store.set(AUTH_TOKEN_KEY, &response.token);
        match response.refresh_token.as_deref().filter(|t| !t.is_empty()) {
            Some(refresh_token) => store.set(REFRESH_TOKEN_KEY, refresh_token),
            None => store.remove(REFRESH_TOKEN_KEY),
        }
        self.cache_user(&response.user)?;

        tracing::info!(
            "Logged in as {}",
            response.user.email.as_deref().unwrap_or_default()
        );

        Ok(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserDto, ApiError> {
        self.client.post(endpoints::auth::REGISTER, request).await
    }

    /// Asks the backend to email a reset link; returns the backend's confirmation text.
    pub async fn forgot_password(&self, email: &str) -> Result<String, ApiError> {
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.client
            .post_for_text(endpoints::auth::FORGOT_PASSWORD, Some(&request))
            .await
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<String, ApiError> {
        let request = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        self.client
            .post_for_text(endpoints::auth::RESET_PASSWORD, Some(&request))
            .await
    }

    /// Ends the session on the backend, then clears local storage whatever the outcome.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self
            .client
            .post_for_text(endpoints::auth::LOGOUT, None::<&()>)
            .await;

        self.client.store().clear_session();

        result.map(|_| ())
    }

    /// Cached user, or `/auth/me` when nothing is cached yet.
    pub async fn current_user(&self) -> Result<UserDto, ApiError> {
        if let Some(user) = self.stored_user() {
            return Ok(user);
        }

        if !self.is_authenticated() {
            return Err(ApiError::SessionExpired);
        }

        self.fetch_current_user().await
    }

    /// Always asks `/auth/me` and refreshes the cached user.
    pub async fn fetch_current_user(&self) -> Result<UserDto, ApiError> {
        let user: UserDto = self.client.get(endpoints::auth::ME).await?;
        self.cache_user(&user)?;
        Ok(user)
    }

    pub fn stored_user(&self) -> Option<UserDto> {
        let json = self.client.store().get(USER_KEY)?;
        match decode(&json) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!("Ignoring malformed cached user: {}", err);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.store().auth_token().is_some()
    }

    fn cache_user(&self, user: &UserDto) -> Result<(), ApiError> {
        self.client.store().set(USER_KEY, &encode(user)?);
        Ok(())
    }
}
