use linkshelf::types::errors::*;

// === ApiError Tests ===

#[test]
fn api_error_transport_display() {
    let err = ApiError::Transport("connection refused".to_string());
    assert_eq!(err.to_string(), "Request failed: connection refused");
}

#[test]
fn api_error_status_display() {
    let err = ApiError::Status(500);
    assert_eq!(err.to_string(), "Request failed with status 500");
}

#[test]
fn api_error_invalid_body_display() {
    let err = ApiError::InvalidBody("expected array".to_string());
    assert_eq!(err.to_string(), "Invalid response body: expected array");
}

#[test]
fn api_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(ApiError::Status(404));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("trailing comma".to_string()).to_string(),
        "Settings serialization error: trailing comma"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(SettingsError::IoError("oops".to_string()));
    assert!(err.source().is_none());
}
