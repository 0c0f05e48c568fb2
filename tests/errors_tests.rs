use std::error::Error;
use hello_time::errors::GreetingError;

#[test]
fn test_greeting_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = GreetingError::Config("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_greeting_error_display() {
    let error = GreetingError::Config("bad zone".to_string());
    assert_eq!(format!("{error}"), "Invalid configuration: bad zone");

    let error = GreetingError::Serialization("boom".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to serialize response body: boom"
    );
}

#[test]
fn test_greeting_error_from_conversions() {
    let err = serde_json::from_str::<String>("not json").unwrap_err();
    let greeting_err: GreetingError = err.into();
    assert!(matches!(greeting_err, GreetingError::Serialization(_)));

    let err = "Not/AZone".parse::<chrono_tz::Tz>().unwrap_err();
    match GreetingError::from(err) {
        GreetingError::Config(msg) => assert!(msg.starts_with("GREETING_TIME_ZONE")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[test]
fn test_greeting_error_converts_into_lambda_error() {
    let err: lambda_runtime::Error = GreetingError::Config("x".to_string()).into();
    assert_eq!(err.to_string(), "Invalid configuration: x");
}
