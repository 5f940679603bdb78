//! Tests for logging helpers

use keystash_infrastructure::logging::{init_logging, parse_log_level};
use keystash_infrastructure::config::LoggingConfig;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..Default::default()
    };
    assert!(init_logging(config).is_err());
}

#[test]
fn test_second_initialization_fails_cleanly() {
    // Whichever call installs the subscriber, the next one must error, not panic
    let _ = init_logging(LoggingConfig::default());
    assert!(init_logging(LoggingConfig::default()).is_err());
}
