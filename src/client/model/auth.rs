use dioxus::prelude::*;
use league_api::{
    access,
    model::user::{Role, UserDto},
    ApiError,
};

#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&self, state: AuthState) {
        let mut inner = self.inner;
        inner.set(state);
    }

    /// Current user without subscribing the caller to changes.
    pub fn peek_user(&self) -> Option<UserDto> {
        self.inner.peek().user().cloned()
    }
}

#[derive(Clone, PartialEq)]
pub enum AuthState {
    /// Session not restored yet
    Initializing,
    Authenticated(UserDto),
    NotLoggedIn,
    /// Restoring the session failed for a reason other than an expired token
    Error(ApiError),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user().and_then(|u| u.id)
    }

    pub fn role(&self) -> Option<&Role> {
        self.user().and_then(|u| u.role.as_ref())
    }

    /// Whether the user holds one of `roles`; an empty slice only requires a login.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        access::has_access(self.user(), roles)
    }

    pub fn can_access(&self, path: &str) -> bool {
        access::can_access_route(self.user(), path)
    }
}

impl From<Result<UserDto, ApiError>> for AuthState {
    fn from(result: Result<UserDto, ApiError>) -> Self {
        match result {
            Ok(user) => AuthState::Authenticated(user),
            Err(err) if err.is_unauthorized() => AuthState::NotLoggedIn,
            Err(err) => AuthState::Error(err),
        }
    }
}

/// Id of the signed-in user.
///
/// Only meaningful below `ProtectedLayout`, which renders its children once a user is
/// authenticated.
pub fn use_user_id() -> i64 {
    let auth = use_context::<AuthContext>();
    let id = auth.read().user_id();
    id.unwrap_or_default()
}
