//! Unit tests for the error types: display formatting and the
//! `std::error::Error` implementations the dashboard relies on when
//! converting failures into user-visible messages.

use verdash::types::errors::{FetchError, LocaleError, PreferenceError};

#[test]
fn test_fetch_error_display_distinguishes_transport_and_api() {
    let transport = FetchError::Transport("request failed with status 502".to_string());
    let api = FetchError::Api("backend unavailable".to_string());

    assert_eq!(
        transport.to_string(),
        "Transport error: request failed with status 502"
    );
    assert_eq!(api.to_string(), "API error: backend unavailable");
}

#[test]
fn test_fetch_error_decode_display() {
    let decode = FetchError::Decode("expected a JSON object".to_string());
    assert_eq!(decode.to_string(), "Decode error: expected a JSON object");
}

#[test]
fn test_preference_error_display() {
    let err = PreferenceError::DatabaseError("disk I/O error".to_string());
    assert_eq!(err.to_string(), "Preference database error: disk I/O error");
}

#[test]
fn test_locale_error_display() {
    let unsupported = LocaleError::UnsupportedLocale("fr".to_string());
    let missing = LocaleError::FileNotFound("locales/fr.json".to_string());

    assert_eq!(unsupported.to_string(), "Unsupported locale: fr");
    assert_eq!(missing.to_string(), "Locale file not found: locales/fr.json");
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error>(_e: &E) {}

    assert_error(&FetchError::Api("x".to_string()));
    assert_error(&PreferenceError::DatabaseError("x".to_string()));
    assert_error(&LocaleError::UnsupportedLocale("x".to_string()));
}
