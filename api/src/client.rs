//! HTTP client shared by every service.
//!
//! [`ApiClient`] joins endpoint paths to the configured base URL, attaches the bearer
//! token, and renews the session once when the backend answers 401.

use std::{cell::RefCell, rc::Rc};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    config::ClientConfig,
    endpoints,
    error::ApiError,
    http::{HttpRequest, HttpResponse, Method, QueryParams, ToQuery, Transport},
    storage::{TokenStore, AUTH_TOKEN_KEY, REDIRECT_AFTER_LOGIN_KEY, REFRESH_TOKEN_KEY},
};

/// Hooks invoked when the session cannot be renewed.
pub trait SessionHandler {
    /// Path stored under `redirectAfterLogin` so the user lands back where they were.
    fn current_path(&self) -> String;

    /// Called after the redirect path is stored; the UI navigates to the login page.
    fn session_expired(&self);
}

struct DetachedSession;

impl SessionHandler for DetachedSession {
    fn current_path(&self) -> String {
        "/".to_string()
    }

    fn session_expired(&self) {}
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshTokenRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RefreshTokenReply {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[derive(Debug, PartialEq)]
enum RefreshOutcome {
    Renewed,
    /// The backend accepted the refresh token but sent no new access token.
    NoToken,
    NoRefreshToken,
    Failed,
}

struct ClientInner<T, S> {
    base_url: String,
    transport: T,
    store: S,
    session: RefCell<Rc<dyn SessionHandler>>,
}

/// Typed JSON client over a [`Transport`] and a [`TokenStore`].
///
/// Clones share the same transport, store and session handler.
pub struct ApiClient<T, S> {
    inner: Rc<ClientInner<T, S>>,
}

impl<T, S> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, S> PartialEq for ApiClient<T, S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(config: &ClientConfig, transport: T, store: S) -> Self {
        Self {
            inner: Rc::new(ClientInner {
                base_url: config.api_base_url.trim_end_matches('/').to_string(),
                transport,
                store,
                session: RefCell::new(Rc::new(DetachedSession)),
            }),
        }
    }

    /// Replaces the hooks fired when the session expires.
    pub fn set_session_handler(&self, handler: impl SessionHandler + 'static) {
        *self.inner.session.borrow_mut() = Rc::new(handler);
    }

    pub fn store(&self) -> &S {
        &self.inner.store
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Absolute URL for an endpoint path plus optional query parameters.
    pub fn url(&self, path: &str, query: &QueryParams) -> String {
        let mut url = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.inner.base_url, path)
        };

        if !query.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query.to_query_string());
        }

        url
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.get_with(path, &QueryParams::new()).await
    }

    pub async fn get_with<R, Q>(&self, path: &str, query: &Q) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        Q: ToQuery + ?Sized,
    {
        let url = self.url(path, &query.to_query());
        self.execute(Method::Get, url, None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute(Method::Post, self.url(path, &QueryParams::new()), Some(body))
            .await
    }

    /// POST without a request body.
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(Method::Post, self.url(path, &QueryParams::new()), None)
            .await
    }

    /// POST whose response is plain text rather than JSON.
    pub async fn post_for_text<B>(&self, path: &str, body: Option<&B>) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(encode).transpose()?;
        self.execute_text(Method::Post, self.url(path, &QueryParams::new()), body)
            .await
    }

    /// PUT whose response is plain text or empty.
    pub async fn put_for_text<B>(&self, path: &str, body: Option<&B>) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(encode).transpose()?;
        self.execute_text(Method::Put, self.url(path, &QueryParams::new()), body)
            .await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute(Method::Put, self.url(path, &QueryParams::new()), Some(body))
            .await
    }

    /// PUT without a request body.
    pub async fn put_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(Method::Put, self.url(path, &QueryParams::new()), None)
            .await
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute(Method::Patch, self.url(path, &QueryParams::new()), Some(body))
            .await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(Method::Delete, self.url(path, &QueryParams::new()), None)
            .await
    }

    /// DELETE whose response is plain text or empty.
    pub async fn delete_for_text(&self, path: &str) -> Result<String, ApiError> {
        self.execute_text(Method::Delete, self.url(path, &QueryParams::new()), None)
            .await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let log_url = url.clone();
        let text = self.execute_text(method, url, body).await?;

        decode(&text).map_err(|err| {
            tracing::error!("{}: {} {}: {}", err.log_prefix(), method, log_url, err);
            err
        })
    }

    async fn execute_text(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let mut request = HttpRequest::new(method, url);
        if let Some(body) = body {
            request = request.with_json_body(body);
        }

        tracing::debug!("{} {}", method, request.url);

        let result = match self.dispatch(request.clone()).await {
            Ok(response) if response.is_success() => Ok(response.body),
            Ok(response) => Err(ApiError::from_response(response.status, &response.body)),
            Err(err) => Err(err),
        };

        result.map_err(|err| {
            tracing::error!(
                "{}: {} {}: {}",
                err.log_prefix(),
                request.method,
                request.url,
                err
            );
            err
        })
    }

    /// Sends the request and, on 401, renews the session and retries exactly once.
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.send_authorized(request.clone()).await?;

        if response.status != 401 || is_refresh_call(&request) {
            return Ok(response);
        }

        match self.refresh_session().await {
            RefreshOutcome::Renewed => {
                tracing::info!("Retrying {} {} with renewed token", request.method, request.url);
                self.send_authorized(request).await
            }
            _ => Ok(response),
        }
    }

    async fn send_authorized(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = match self.inner.store.auth_token() {
            Some(token) => request.with_header("Authorization", format!("Bearer {}", token)),
            None => request,
        };

        self.inner.transport.send(request).await
    }

    async fn refresh_session(&self) -> RefreshOutcome {
        let store = &self.inner.store;

        let Some(refresh_token) = store.refresh_token() else {
            tracing::warn!("Received 401 without a refresh token, session expired");
            self.expire_session(false);
            return RefreshOutcome::NoRefreshToken;
        };

        tracing::info!("Access token rejected, refreshing session");

        let payload = match encode(&RefreshTokenRequest {
            refresh_token: &refresh_token,
        }) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("Token refresh failed: {}", err);
                self.expire_session(true);
                return RefreshOutcome::Failed;
            }
        };

        let request = HttpRequest::new(
            Method::Post,
            self.url(endpoints::auth::REFRESH_TOKEN, &QueryParams::new()),
        )
        .with_json_body(payload);

        let response = match self.inner.transport.send(request).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                let err = ApiError::from_response(response.status, &response.body);
                tracing::warn!("Token refresh failed: {}", err);
                self.expire_session(true);
                return RefreshOutcome::Failed;
            }
            Err(err) => {
                tracing::warn!("Token refresh failed: {}", err);
                self.expire_session(true);
                return RefreshOutcome::Failed;
            }
        };

        // A reply that is not a JSON object carries no token.
        let reply = serde_json::from_str::<RefreshTokenReply>(&response.body).unwrap_or_default();

        match reply.token.filter(|token| !token.is_empty()) {
            Some(token) => {
                store.set(AUTH_TOKEN_KEY, &token);
                if let Some(refresh_token) = reply.refresh_token.filter(|t| !t.is_empty()) {
                    store.set(REFRESH_TOKEN_KEY, &refresh_token);
                }
                tracing::info!("Session refreshed");
                RefreshOutcome::Renewed
            }
            None => {
                tracing::warn!("Token refresh succeeded without a new access token");
                RefreshOutcome::NoToken
            }
        }
    }

    fn expire_session(&self, clear_tokens: bool) {
        let store = &self.inner.store;
        if clear_tokens {
            store.clear_session();
        }

        let handler = Rc::clone(&self.inner.session.borrow());
        store.set(REDIRECT_AFTER_LOGIN_KEY, &handler.current_path());
        handler.session_expired();
    }
}

fn is_refresh_call(request: &HttpRequest) -> bool {
    let path = request.url.split('?').next().unwrap_or_default();
    path.ends_with(endpoints::auth::REFRESH_TOKEN)
}

/// Serializes a request payload.
pub fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Parses a response body; an empty body decodes as JSON `null`.
pub fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn empty_body_decodes_as_unit() {
        let result: Result<(), ApiError> = decode("");
        assert!(result.is_ok());
    }

    #[test]
    fn empty_body_decodes_as_none() {
        let value: Option<Item> = decode("  ").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let result: Result<Item, _> = decode("{\"id\": \"nope\"}");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn refresh_call_detection_ignores_query() {
        let request = HttpRequest::new(
            Method::Post,
            "http://localhost:8080/api/auth/refresh-token?x=1",
        );
        assert!(is_refresh_call(&request));

        let request = HttpRequest::new(Method::Get, "http://localhost:8080/api/teams");
        assert!(!is_refresh_call(&request));
    }
}
