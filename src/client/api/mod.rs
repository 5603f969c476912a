//! Backend access for the dashboard.
//!
//! One [`Client`] is built at startup and provided through context; pages fetch it
//! with [`use_client`] and call the `league-api` services on it.

use dioxus::prelude::*;
use dioxus::router::{Navigator, RouterContext};
use dioxus_logger::tracing;
use league_api::{ApiClient, ApiError, ClientConfig, SessionHandler};

#[cfg(feature = "web")]
use league_api::{http::ReqwasmTransport, storage::LocalStorageStore};
#[cfg(not(feature = "web"))]
use league_api::{http::ReqwestTransport, storage::MemoryStore};

use crate::client::{
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[cfg(feature = "web")]
pub type Client = ApiClient<ReqwasmTransport, LocalStorageStore>;

#[cfg(not(feature = "web"))]
pub type Client = ApiClient<ReqwestTransport, MemoryStore>;

/// Configuration for this build.
///
/// Browser bundles use the values baked in at compile time, desktop builds read the
/// process environment.
pub fn load_config() -> ClientConfig {
    #[cfg(feature = "desktop")]
    {
        match ClientConfig::from_env() {
            Ok(config) => return config,
            Err(err) => tracing::error!("Invalid configuration, using defaults: {}", err),
        }
    }

    ClientConfig::default()
}

#[cfg(feature = "web")]
pub fn connect(config: &ClientConfig) -> Result<Client, ApiError> {
    Ok(ApiClient::new(
        config,
        ReqwasmTransport::new(),
        LocalStorageStore::new(),
    ))
}

#[cfg(not(feature = "web"))]
pub fn connect(config: &ClientConfig) -> Result<Client, ApiError> {
    Ok(ApiClient::new(
        config,
        ReqwestTransport::new(config)?,
        MemoryStore::new(),
    ))
}

pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Sends the user to the login page once the session can no longer be renewed.
pub struct RouterSession {
    pub router: RouterContext,
    pub navigator: Navigator,
    pub auth: AuthContext,
}

impl SessionHandler for RouterSession {
    fn current_path(&self) -> String {
        self.router.full_route_string()
    }

    fn session_expired(&self) {
        tracing::info!("Session expired, redirecting to login");
        self.auth.set(AuthState::NotLoggedIn);
        self.navigator.replace(Route::Login {});
    }
}
