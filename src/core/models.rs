use serde::{Deserialize, Serialize};

use crate::errors::GreetingError;

pub const GREETING_PREFIX: &str = "Hello World! Current time: ";
pub const STATUS_OK: u16 = 200;

/// HTTP-style payload handed back to the Lambda runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    /// JSON-encoded text: a string literal, quotes included.
    pub body: String,
}

impl InvocationResponse {
    /// 200 response whose body is the JSON encoding of `text`.
    pub fn ok(text: &str) -> Result<Self, GreetingError> {
        Ok(Self {
            status_code: STATUS_OK,
            body: serde_json::to_string(text)?,
        })
    }

    pub fn greeting(timestamp: &str) -> Result<Self, GreetingError> {
        Self::ok(&format!("{GREETING_PREFIX}{timestamp}"))
    }
}
