//! Persisted client session state.
//!
//! Only four keys are ever written: the access token, the refresh token, the cached
//! user JSON, and the path to return to after a forced logout.

mod memory;

#[cfg(feature = "web")]
mod local;

pub use memory::MemoryStore;

#[cfg(feature = "web")]
pub use local::LocalStorageStore;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";
pub const REDIRECT_AFTER_LOGIN_KEY: &str = "redirectAfterLogin";

/// Key-value storage for tokens and the cached user.
pub trait TokenStore: 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    fn auth_token(&self) -> Option<String> {
        self.get(AUTH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn refresh_token(&self) -> Option<String> {
        self.get(REFRESH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// Removes the tokens and the cached user.
    fn clear_session(&self) {
        self.remove(AUTH_TOKEN_KEY);
        self.remove(REFRESH_TOKEN_KEY);
        self.remove(USER_KEY);
    }

    /// Returns and forgets the path saved when the session expired.
    fn take_redirect_after_login(&self) -> Option<String> {
        let path = self.get(REDIRECT_AFTER_LOGIN_KEY);
        self.remove(REDIRECT_AFTER_LOGIN_KEY);
        path
    }
}
