//! Transport seam between [`ApiClient`](crate::client::ApiClient) and the network.
//!
//! The client builds plain [`HttpRequest`] values and hands them to a [`Transport`].
//! The browser build sends them through `reqwasm`, native builds through `reqwest`,
//! and tests through the scripted mock in `test-utils`.

mod query;

#[cfg(feature = "web")]
mod browser;
#[cfg(feature = "native")]
mod native;

use std::{fmt, future::Future};

use crate::error::ApiError;

pub use query::{encode_component, QueryParams, ToQuery};

#[cfg(feature = "web")]
pub use browser::ReqwasmTransport;
#[cfg(feature = "native")]
pub use native::ReqwestTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any previous value with the same name.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn with_json_body(self, body: String) -> Self {
        let mut request = self.with_header("Content-Type", "application/json");
        request.body = Some(body);
        request
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single HTTP request.
///
/// Implementations only report transport-level failures as [`ApiError::Network`];
/// any response, whatever its status, is returned as `Ok`.
pub trait Transport: 'static {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}
