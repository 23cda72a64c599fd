use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use eagerbirds_api::{
    config::parse_log_level,
    middleware::{auth::bearer_token, error_handling::{AppError, map_error}},
};
use eagerbirds_core::errors::SlotError;
use rstest::rstest;
use tracing::Level;

#[rstest]
#[case(SlotError::NotFound("Slot not found".to_string()), StatusCode::NOT_FOUND)]
#[case(SlotError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(SlotError::Authentication("Sign in required".to_string()), StatusCode::UNAUTHORIZED)]
#[case(SlotError::Authorization("Not authorized".to_string()), StatusCode::FORBIDDEN)]
#[case(SlotError::Store(eyre::eyre!("connection refused")), StatusCode::BAD_GATEWAY)]
#[case(
    SlotError::Internal(Box::new(std::io::Error::other("Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: SlotError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[rstest]
#[case(Some("Bearer abc.def"), Some("abc.def"))]
#[case(Some("Bearer   padded  "), Some("padded"))]
#[case(Some("Bearer "), None)]
#[case(Some("Basic dXNlcjpwYXNz"), None)]
#[case(None, None)]
fn test_bearer_token_extraction(#[case] header_value: Option<&str>, #[case] expected: Option<&str>) {
    let mut headers = HeaderMap::new();
    if let Some(value) = header_value {
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    }

    assert_eq!(bearer_token(&headers), expected);
}

#[rstest]
#[case("debug", Level::DEBUG)]
#[case("WARN", Level::WARN)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}

#[rstest]
#[case(SlotError::Store(eyre::eyre!("JWT expired")), "JWT expired")]
#[case(
    SlotError::Validation("End time must be after start time".to_string()),
    "Validation error: End time must be after start time"
)]
fn test_error_message_body(#[case] error: SlotError, #[case] expected: &str) {
    assert_eq!(AppError(error).message(), expected);
}
