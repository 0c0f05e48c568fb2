use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreetingError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to serialize response body: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GreetingError {
    fn from(error: serde_json::Error) -> Self {
        GreetingError::Serialization(error.to_string())
    }
}

impl From<chrono_tz::ParseError> for GreetingError {
    fn from(error: chrono_tz::ParseError) -> Self {
        GreetingError::Config(format!("GREETING_TIME_ZONE: {}", error))
    }
}
