//! Unit tests for domain error types

use keystash_domain::Error;

#[test]
fn test_encode_error() {
    let error = Error::encode("value is not serializable");
    match error {
        Error::Encode { message } => assert_eq!(message, "value is not serializable"),
        _ => panic!("Expected Encode error"),
    }
}

#[test]
fn test_decode_error_display() {
    let error = Error::decode("unexpected end of input");
    assert_eq!(format!("{}", error), "Decode error: unexpected end of input");
}

#[test]
fn test_storage_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
    let error = Error::storage_with_source("vault is locked", io);
    match &error {
        Error::Storage { message, source } => {
            assert_eq!(message, "vault is locked");
            assert!(source.is_some());
        }
        _ => panic!("Expected Storage error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("capacity must be positive");
    assert!(format!("{}", error).contains("capacity must be positive"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io.into();
    assert!(matches!(error, Error::IoSimple { .. }));
}

#[test]
fn test_json_error_conversion() {
    let json = serde_json::from_str::<bool>("not json").unwrap_err();
    let error: Error = json.into();
    assert!(matches!(error, Error::Json { .. }));
}
