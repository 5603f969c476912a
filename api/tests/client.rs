//! Bearer token handling and session renewal of the HTTP client.

use league_api::{
    http::Method,
    model::team::TeamFilter,
    storage::{TokenStore, REDIRECT_AFTER_LOGIN_KEY, USER_KEY},
    ApiError,
};
use serde_json::json;
use test_utils::{
    builder::{TestBuilder, CURRENT_PATH},
    error::TestError,
    fixture,
};

const REFRESH: &str = "/auth/refresh-token";

/// Tests that the stored access token is sent as a bearer token.
///
/// Expected: Authorization header "Bearer access"
#[tokio::test]
async fn attaches_bearer_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auth_token("access")
        .with_json(Method::Get, "/teams", &vec![fixture::team::dto()])
        .build()?;

    let teams = test.client.teams().get_all(&TeamFilter::default()).await?;

    assert_eq!(teams.len(), 1);
    let request = test.transport.last_request().unwrap();
    assert_eq!(request.header("Authorization"), Some("Bearer access"));

    Ok(())
}

#[tokio::test]
async fn anonymous_requests_carry_no_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(Method::Get, "/teams", &json!([]))
        .build()?;

    test.client.teams().get_all(&TeamFilter::default()).await?;

    let request = test.transport.last_request().unwrap();
    assert_eq!(request.header("Authorization"), None);

    Ok(())
}

/// Tests renewing the session after a 401.
///
/// Verifies that the client calls the refresh endpoint with the stored refresh
/// token, stores the new tokens, and replays the original request with the new
/// access token.
///
/// Expected: Ok with the replayed response
#[tokio::test]
async fn refreshes_and_retries_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tokens("expired", "refresh")
        .with_response(Method::Get, "/teams", 401, "")
        .with_json(Method::Get, "/teams", &vec![fixture::team::dto()])
        .with_json(
            Method::Post,
            REFRESH,
            &json!({"token": "renewed", "refreshToken": "refresh-2"}),
        )
        .build()?;

    let teams = test.client.teams().get_all(&TeamFilter::default()).await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(
        test.transport.calls(),
        vec!["GET /teams", "POST /auth/refresh-token", "GET /teams"]
    );

    let requests = test.transport.requests();
    let refresh_body: serde_json::Value =
        serde_json::from_str(requests[1].body.as_deref().unwrap())?;
    assert_eq!(refresh_body, json!({"refreshToken": "refresh"}));
    assert_eq!(requests[2].header("Authorization"), Some("Bearer renewed"));

    assert_eq!(test.auth_token().as_deref(), Some("renewed"));
    assert_eq!(test.refresh_token().as_deref(), Some("refresh-2"));
    assert!(!test.session_expired());

    Ok(())
}

/// Tests that a request rejected again after renewal is not retried a second time.
///
/// Expected: Err(Status 401) after exactly one refresh and one replay
#[tokio::test]
async fn retries_only_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tokens("expired", "refresh")
        .with_response(Method::Get, "/teams", 401, "")
        .with_json(Method::Post, REFRESH, &json!({"token": "renewed"}))
        .build()?;

    let result = test.client.teams().get_all(&TeamFilter::default()).await;

    assert_eq!(result.map_err(|e| e.status()), Err(Some(401)));
    assert_eq!(test.transport.count("/teams"), 2);
    assert_eq!(test.transport.count(REFRESH), 1);
    assert_eq!(test.refresh_token().as_deref(), Some("refresh"));

    Ok(())
}

/// Tests a rejected refresh token.
///
/// Expected: tokens and cached user cleared, return path stored, session expired
#[tokio::test]
async fn failed_refresh_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tokens("expired", "revoked")
        .with_user(fixture::user::coach())
        .with_response(Method::Get, "/teams", 401, "")
        .with_response(Method::Post, REFRESH, 401, r#"{"message":"Invalid refresh token"}"#)
        .build()?;

    let result = test.client.teams().get_all(&TeamFilter::default()).await;

    assert!(matches!(result, Err(ApiError::Status { status: 401, .. })));
    assert_eq!(test.auth_token(), None);
    assert_eq!(test.refresh_token(), None);
    assert_eq!(test.store.get(USER_KEY), None);
    assert_eq!(
        test.store.get(REDIRECT_AFTER_LOGIN_KEY).as_deref(),
        Some(CURRENT_PATH)
    );
    assert_eq!(test.session.expired_count(), 1);
    assert_eq!(test.transport.count("/teams"), 1);

    Ok(())
}

#[tokio::test]
async fn unreachable_refresh_endpoint_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tokens("expired", "refresh")
        .with_response(Method::Get, "/teams", 401, "")
        .with_network_failure(Method::Post, REFRESH)
        .build()?;

    let result = test.client.teams().get_all(&TeamFilter::default()).await;

    assert!(result.is_err());
    assert_eq!(test.auth_token(), None);
    assert!(test.session_expired());

    Ok(())
}

/// Tests a 401 when no refresh token is stored.
///
/// Expected: no refresh call, return path stored and session expired
#[tokio::test]
async fn missing_refresh_token_redirects_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auth_token("expired")
        .with_response(Method::Get, "/teams", 401, "")
        .build()?;

    let result = test.client.teams().get_all(&TeamFilter::default()).await;

    assert!(result.is_err());
    assert_eq!(test.transport.calls(), vec!["GET /teams"]);
    assert_eq!(
        test.store.take_redirect_after_login().as_deref(),
        Some(CURRENT_PATH)
    );
    assert!(test.session_expired());

    Ok(())
}

/// Tests a refresh reply that carries no access token.
///
/// The backend answers the refresh call with plain text; the client keeps the
/// session and surfaces the original 401.
///
/// Expected: Err(Status 401), tokens untouched, session not expired
#[tokio::test]
async fn refresh_reply_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tokens("expired", "refresh")
        .with_response(Method::Get, "/teams", 401, "")
        .with_response(Method::Post, REFRESH, 200, "Token refreshed")
        .build()?;

    let result = test.client.teams().get_all(&TeamFilter::default()).await;

    assert_eq!(result.map_err(|e| e.status()), Err(Some(401)));
    assert_eq!(test.transport.count("/teams"), 1);
    assert_eq!(test.auth_token().as_deref(), Some("expired"));
    assert!(!test.session_expired());

    Ok(())
}

#[tokio::test]
async fn network_failure_is_reported() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_network_failure(Method::Get, "/teams")
        .build()?;

    let result = test.client.teams().get_all(&TeamFilter::default()).await;

    assert!(matches!(result, Err(ApiError::Network(_))));
    assert_eq!(
        result.map_err(|e| e.user_message()),
        Err("Unable to connect to the server".to_string())
    );

    Ok(())
}

/// Tests error messages taken from the response body.
///
/// Expected: the backend's message, or the default for the status
#[tokio::test]
async fn error_messages_from_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_response(Method::Get, "/teams/99", 404, r#"{"message":"Team not found"}"#)
        .with_response(Method::Get, "/teams/98", 403, "")
        .build()?;

    let missing = test.client.teams().get_by_id(99).await;
    let forbidden = test.client.teams().get_by_id(98).await;

    assert_eq!(
        missing.map_err(|e| e.user_message()),
        Err("Team not found".to_string())
    );
    assert_eq!(
        forbidden.map_err(|e| e.user_message()),
        Err("You don't have the required permissions".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_response(Method::Get, "/teams/1", 200, "<html>")
        .build()?;

    let result = test.client.teams().get_by_id(1).await;

    assert!(matches!(result, Err(ApiError::Decode(_))));

    Ok(())
}
