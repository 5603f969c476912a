use league_api::{
    http::Method,
    model::user::UserDto,
    storage::{MemoryStore, TokenStore, AUTH_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY},
    ApiClient, ClientConfig,
};
use serde::Serialize;

use crate::{
    context::{SessionRecorder, TestContext},
    error::TestError,
    transport::{MockTransport, BASE_URL},
};

/// Path reported to the client as the page the user was on.
pub const CURRENT_PATH: &str = "/dashboard/coach/teams";

/// Builder for a client wired to a scripted transport and in-memory storage.
///
/// Replies are scripted in call order. A reply that fails to serialize is reported
/// by `build()` as a [`TestError`] rather than a panic.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_tokens("access", "refresh")
///     .with_response(Method::Get, "/teams", 401, "")
///     .with_json(Method::Post, "/auth/refresh-token", &json!({"token": "renewed"}))
///     .build()?;
/// ```
pub struct TestBuilder {
    store: MemoryStore,
    transport: MockTransport,
    user: Option<UserDto>,
    /// First scripted reply that failed to serialize.
    error: Option<serde_json::Error>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            transport: MockTransport::new(),
            user: None,
            error: None,
        }
    }

    pub fn with_auth_token(self, token: &str) -> Self {
        Self {
            store: self.store.with_value(AUTH_TOKEN_KEY, token),
            ..self
        }
    }

    pub fn with_refresh_token(self, token: &str) -> Self {
        Self {
            store: self.store.with_value(REFRESH_TOKEN_KEY, token),
            ..self
        }
    }

    pub fn with_tokens(self, access: &str, refresh: &str) -> Self {
        self.with_auth_token(access).with_refresh_token(refresh)
    }

    /// Caches `user` as the logged-in user.
    pub fn with_user(mut self, user: UserDto) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_response(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.transport.respond(method, path, status, body);
        self
    }

    /// Scripts a 200 reply carrying `body` as JSON.
    pub fn with_json<B: Serialize + ?Sized>(mut self, method: Method, path: &str, body: &B) -> Self {
        if let Err(err) = self.transport.respond_json(method, path, body) {
            self.error.get_or_insert(err);
        }
        self
    }

    pub fn with_network_failure(self, method: Method, path: &str) -> Self {
        self.transport.fail(method, path, "connection refused");
        self
    }

    pub fn build(self) -> Result<TestContext, TestError> {
        if let Some(err) = self.error {
            return Err(err.into());
        }

        if let Some(user) = &self.user {
            let json = serde_json::to_string(user)?;
            self.store.set(USER_KEY, &json);
        }

        let config = ClientConfig {
            api_base_url: BASE_URL.to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config, self.transport.clone(), self.store.clone());

        let session = SessionRecorder::new(CURRENT_PATH);
        client.set_session_handler(session.clone());

        Ok(TestContext {
            client,
            transport: self.transport,
            store: self.store,
            session,
        })
    }
}
