use std::{cell::RefCell, rc::Rc};

use league_api::{
    storage::{MemoryStore, TokenStore},
    ApiClient, SessionHandler,
};

use crate::transport::MockTransport;

pub type TestClient = ApiClient<MockTransport, MemoryStore>;

/// Records session expiries instead of navigating.
#[derive(Clone, Default)]
pub struct SessionRecorder {
    path: String,
    expired: Rc<RefCell<u32>>,
}

impl SessionRecorder {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            expired: Rc::default(),
        }
    }

    pub fn expired_count(&self) -> u32 {
        *self.expired.borrow()
    }
}

impl SessionHandler for SessionRecorder {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn session_expired(&self) {
        *self.expired.borrow_mut() += 1;
    }
}

/// Client under test plus handles on its transport, store and session hooks.
pub struct TestContext {
    pub client: TestClient,
    pub transport: MockTransport,
    pub store: MemoryStore,
    pub session: SessionRecorder,
}

impl TestContext {
    pub fn auth_token(&self) -> Option<String> {
        self.store.auth_token()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.refresh_token()
    }

    pub fn session_expired(&self) -> bool {
        self.session.expired_count() > 0
    }
}
