//! Lambda handler for the greeting function.
//!
//! The payload is never inspected: every invocation gets the same 200
//! response carrying the current timestamp.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info};

use crate::core::clock::GreetingClock;
use crate::core::models::InvocationResponse;

pub const INVOCATION_LOG_LINE: &str = "Function called!!!";

pub use self::function_handler as handler;

/// Builds the greeting response for one invocation.
///
/// # Errors
///
/// Only fails if the body cannot be JSON encoded, which the runtime reports
/// as an invocation error.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    clock: GreetingClock,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, Error> {
    info!("{}", INVOCATION_LOG_LINE);

    #[cfg(feature = "debug-logs")]
    debug!("Ignoring invocation payload: {:?}", event.payload);
    #[cfg(not(feature = "debug-logs"))]
    debug!("Ignoring invocation payload [... enable debug-logs feature to view it ...]");

    let response = InvocationResponse::greeting(&clock.timestamp())?;
    Ok(response)
}
