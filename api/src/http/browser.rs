use reqwasm::http::Request;

use super::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::ApiError;

/// Browser transport backed by the Fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwasmTransport;

impl ReqwasmTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for ReqwasmTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
