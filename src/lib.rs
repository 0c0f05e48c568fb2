//! hello-time - a Lambda function that greets callers with the current time.
//!
//! Every invocation, whatever its payload, returns
//! `{"statusCode": 200, "body": "\"Hello World! Current time: YYYY-MM-DD HH:MM:SS\""}`.
//! The timestamp comes from the host's local clock unless `GREETING_TIME_ZONE`
//! pins a named zone.
//!
//! # Example
//!
//! ```
//! use hello_time::core::models::{InvocationResponse, GREETING_PREFIX};
//!
//! let response = InvocationResponse::greeting("2024-01-01 00:00:00").unwrap();
//! assert_eq!(response.status_code, 200);
//!
//! let text: String = serde_json::from_str(&response.body).unwrap();
//! assert!(text.starts_with(GREETING_PREFIX));
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at cold start;
/// later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// hello_time::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let level = if cfg!(feature = "debug-logs") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .try_init();
}
