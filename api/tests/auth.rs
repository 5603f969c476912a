//! Login, logout and the cached current user.

use league_api::{
    http::Method,
    model::auth::LoginRequest,
    storage::{TokenStore, USER_KEY},
    ApiError,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, error::TestError, fixture};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "coach@league.test".to_string(),
        password: "Secret1!".to_string(),
    }
}

/// Tests that a successful login persists the session.
///
/// Expected: both tokens and the user stored, authenticated afterwards
#[tokio::test]
async fn login_persists_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(
            Method::Post,
            "/auth/login",
            &fixture::user::login_response(fixture::user::coach()),
        )
        .build()?;

    let auth = test.client.auth();
    assert!(!auth.is_authenticated());

    let response = auth.login(&credentials()).await?;

    assert_eq!(response.user.id, Some(fixture::user::DEFAULT_COACH_ID));
    assert_eq!(
        test.auth_token().as_deref(),
        Some(fixture::user::DEFAULT_ACCESS_TOKEN)
    );
    assert_eq!(
        test.refresh_token().as_deref(),
        Some(fixture::user::DEFAULT_REFRESH_TOKEN)
    );
    assert!(auth.is_authenticated());
    assert_eq!(auth.stored_user(), Some(fixture::user::coach()));

    let sent: serde_json::Value =
        serde_json::from_str(test.transport.last_request().unwrap().body.as_deref().unwrap())?;
    assert_eq!(
        sent,
        json!({"email": "coach@league.test", "password": "Secret1!"})
    );

    Ok(())
}

#[tokio::test]
async fn login_without_refresh_token_forgets_old_one() -> Result<(), TestError> {
    let reply = json!({"token": "fresh", "user": {"id": 1, "role": "COACH"}});
    let test = TestBuilder::new()
        .with_refresh_token("stale")
        .with_json(Method::Post, "/auth/login", &reply)
        .build()?;

    test.client.auth().login(&credentials()).await?;

    assert_eq!(test.auth_token().as_deref(), Some("fresh"));
    assert_eq!(test.refresh_token(), None);

    Ok(())
}

/// Tests that wrong credentials leave storage untouched.
///
/// Expected: Err with the backend's message and no token stored
#[tokio::test]
async fn failed_login_stores_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_response(
            Method::Post,
            "/auth/login",
            401,
            r#"{"message":"Bad credentials"}"#,
        )
        .build()?;

    let result = test.client.auth().login(&credentials()).await;

    assert_eq!(
        result.map_err(|e| e.user_message()),
        Err("Bad credentials".to_string())
    );
    assert_eq!(test.auth_token(), None);
    assert_eq!(test.store.get(USER_KEY), None);
    assert_eq!(test.transport.count("/auth/refresh-token"), 0);

    Ok(())
}

/// Tests that logout clears local state even when the backend call fails.
///
/// Expected: Err from the backend, storage cleared anyway
#[tokio::test]
async fn logout_clears_session_on_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auth_token("access")
        .with_user(fixture::user::coach())
        .with_response(Method::Post, "/auth/logout", 500, "")
        .build()?;

    let result = test.client.auth().logout().await;

    assert!(result.is_err());
    assert_eq!(test.auth_token(), None);
    assert_eq!(test.client.auth().stored_user(), None);

    Ok(())
}

#[tokio::test]
async fn logout_accepts_plain_text_reply() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tokens("access", "refresh")
        .with_response(Method::Post, "/auth/logout", 200, "Logged out successfully")
        .build()?;

    test.client.auth().logout().await?;

    assert_eq!(test.refresh_token(), None);

    Ok(())
}

/// Tests reading the current user.
///
/// Expected: cached user without a request, `/auth/me` otherwise
#[tokio::test]
async fn current_user_prefers_cache() -> Result<(), TestError> {
    let cached = TestBuilder::new()
        .with_auth_token("access")
        .with_user(fixture::user::organizer())
        .build()?;

    let user = cached.client.auth().current_user().await?;
    assert_eq!(user.id, Some(fixture::user::DEFAULT_ORGANIZER_ID));
    assert!(cached.transport.requests().is_empty());

    let fetched = TestBuilder::new()
        .with_auth_token("access")
        .with_json(Method::Get, "/auth/me", &fixture::user::coach())
        .build()?;

    let user = fetched.client.auth().current_user().await?;
    assert_eq!(user.id, Some(fixture::user::DEFAULT_COACH_ID));
    assert_eq!(fetched.client.auth().stored_user(), Some(fixture::user::coach()));

    Ok(())
}

#[tokio::test]
async fn current_user_requires_a_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = test.client.auth().current_user().await;

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert!(test.transport.requests().is_empty());

    Ok(())
}

#[tokio::test]
async fn forgot_password_returns_confirmation_text() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_response(
            Method::Post,
            "/auth/forgot-password",
            200,
            "A reset link has been sent",
        )
        .build()?;

    let message = test
        .client
        .auth()
        .forgot_password("coach@league.test")
        .await?;

    assert_eq!(message, "A reset link has been sent");

    Ok(())
}
