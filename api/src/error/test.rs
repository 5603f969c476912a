use super::*;

/// Tests that the body's `message` field wins.
///
/// Expected: message from the body, no validation errors
#[test]
fn message_from_body() {
    let error = ApiError::from_response(409, r#"{"message":"Team name already taken"}"#);

    assert_eq!(
        error,
        ApiError::Status {
            status: 409,
            message: "Team name already taken".to_string(),
            validation_errors: vec![],
        }
    );
    assert_eq!(error.user_message(), "Team name already taken");
}

#[test]
fn error_field_is_accepted() {
    let error = ApiError::from_response(400, r#"{"error":"Bad reason"}"#);
    assert_eq!(error.user_message(), "Bad reason");
}

/// Tests the per-status fallback for bodies without a message.
///
/// Expected: the default message of each status
#[test]
fn default_message_per_status() {
    let cases = [
        (400, "Invalid data"),
        (401, "Authentication required"),
        (403, "You don't have the required permissions"),
        (404, "The requested resource does not exist"),
        (422, "The provided data is invalid"),
        (500, "An error occurred on the server"),
        (502, "An error occurred"),
    ];

    for (status, expected) in cases {
        assert_eq!(ApiError::from_response(status, "").user_message(), expected);
    }

    let blank = ApiError::from_response(404, r#"{"message":"  "}"#);
    assert_eq!(blank.user_message(), "The requested resource does not exist");
}

/// Tests extraction of field-level validation errors.
///
/// Expected: strings kept, objects reduced to their message
#[test]
fn validation_errors() {
    let body = r#"{
        "message": "Validation failed",
        "errors": [
            "name must not be blank",
            {"field": "email", "defaultMessage": "must be a well-formed email address"},
            {"message": "password too short"}
        ]
    }"#;

    let ApiError::Status {
        validation_errors, ..
    } = ApiError::from_response(400, body)
    else {
        panic!("expected a status error");
    };

    assert_eq!(
        validation_errors,
        vec![
            "name must not be blank",
            "must be a well-formed email address",
            "password too short",
        ]
    );
}

#[test]
fn status_and_predicates() {
    assert_eq!(ApiError::from_response(404, "").status(), Some(404));
    assert!(ApiError::from_response(404, "").is_not_found());
    assert!(ApiError::SessionExpired.is_unauthorized());
    assert_eq!(ApiError::Network("timeout".to_string()).status(), None);
}

#[test]
fn log_prefixes() {
    assert_eq!(ApiError::from_response(403, "").log_prefix(), "Forbidden");
    assert_eq!(ApiError::from_response(418, "").log_prefix(), "HTTP error");
    assert_eq!(ApiError::Network("refused".to_string()).log_prefix(), "Connection error");
    assert_eq!(ApiError::Decode("eof".to_string()).log_prefix(), "Request error");
}

#[test]
fn network_user_message_hides_details() {
    let error = ApiError::Network("dns error: lookup failed".to_string());
    assert_eq!(error.user_message(), "Unable to connect to the server");
}
