use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use league_api::{
    http::{HttpRequest, HttpResponse, Method, Transport},
    ApiError,
};

/// Base URL every test client is configured with.
pub const BASE_URL: &str = "http://league.test/api";

type Reply = Result<HttpResponse, ApiError>;

#[derive(Default)]
struct State {
    routes: HashMap<(Method, String), VecDeque<Reply>>,
    requests: Vec<HttpRequest>,
}

/// Scripted transport recording every request.
///
/// Replies are keyed by method and path (without the base URL and query string).
/// Scripted replies for a route are returned in order and the last one repeats.
/// Unscripted routes answer 404. Clones share the same script and history.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.state
            .borrow_mut()
            .routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(method, path, Ok(HttpResponse::new(status, body)));
    }

    pub fn respond_json<B: serde::Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), serde_json::Error> {
        let body = serde_json::to_string(body)?;
        self.respond(method, path, 200, &body);
        Ok(())
    }

    /// Makes the route fail before any response arrives.
    pub fn fail(&self, method: Method, path: &str, reason: &str) {
        self.push(method, path, Err(ApiError::Network(reason.to_string())));
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    /// Requests as "METHOD /path?query", relative to [`BASE_URL`].
    pub fn calls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method, relative(&r.url)))
            .collect()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state.borrow().requests.last().cloned()
    }

    /// Number of requests sent to `path`, whatever the method or query.
    pub fn count(&self, path: &str) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|r| route_path(&r.url) == path)
            .count()
    }
}

fn relative(url: &str) -> &str {
    url.strip_prefix(BASE_URL).unwrap_or(url)
}

fn route_path(url: &str) -> &str {
    let relative = relative(url);
    relative.split('?').next().unwrap_or(relative)
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let key = (request.method, route_path(&request.url).to_string());
        let mut state = self.state.borrow_mut();
        state.requests.push(request);

        let Some(replies) = state.routes.get_mut(&key) else {
            let message = format!("{{\"message\":\"No mock for {} {}\"}}", key.0, key.1);
            return Ok(HttpResponse::new(404, message));
        };

        if replies.len() > 1 {
            replies
                .pop_front()
                .unwrap_or_else(|| Ok(HttpResponse::new(500, "")))
        } else {
            replies
                .front()
                .cloned()
                .unwrap_or_else(|| Ok(HttpResponse::new(500, "")))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn get(path: &str) -> HttpRequest {
        HttpRequest::new(Method::Get, format!("{}{}", BASE_URL, path))
    }

    #[tokio::test]
    async fn replies_in_order_then_repeats_last() {
        let transport = MockTransport::new();
        transport.respond(Method::Get, "/teams", 401, "");
        transport.respond(Method::Get, "/teams", 200, "[]");

        let statuses = [
            transport.send(get("/teams")).await.map(|r| r.status),
            transport.send(get("/teams?name=x")).await.map(|r| r.status),
            transport.send(get("/teams")).await.map(|r| r.status),
        ];

        assert_eq!(statuses, [Ok(401), Ok(200), Ok(200)]);
        assert_eq!(transport.count("/teams"), 3);
        assert_eq!(transport.calls()[1], "GET /teams?name=x");
    }

    #[tokio::test]
    async fn unscripted_routes_are_not_found() {
        let transport = MockTransport::new();

        let response = transport.send(get("/nowhere")).await;

        assert_eq!(response.map(|r| r.status), Ok(404));
    }
}
