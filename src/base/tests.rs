use crate::base::ddterror::DdtError;
use crate::console::Severity;

#[test]
fn test_invalid_channel_message() {
    let err = DdtError::invalid_channel("123", "watch");
    assert_eq!(
        err.to_string(),
        "invalid channel name \"123\" when calling watch"
    );
    assert!(err.is_input_error());
}

#[test]
fn test_no_matching_domain_message() {
    let err = DdtError::no_matching_domain("theta.com");
    assert_eq!(err.to_string(), "no configured domain matches host theta.com");
    assert!(!err.is_input_error());
}

#[test]
fn test_unsupported_severity_message() {
    let err = DdtError::UnsupportedSeverity(Severity::Info);
    assert_eq!(
        err.to_string(),
        "cannot proxy info, it is not defined in console"
    );
}

#[test]
fn test_config_parse_wraps_display() {
    let err = DdtError::config_parse("expected value at line 1 column 1");
    assert!(matches!(err, DdtError::ConfigParse { .. }));
    assert!(err.to_string().contains("line 1 column 1"));
}
