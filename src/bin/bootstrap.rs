// This is the Lambda bootstrap entry point for the greeting function

use hello_time::api::handler;
use hello_time::core::{clock::GreetingClock, config::AppConfig};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    hello_time::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let clock = GreetingClock::from_config(&config);
    info!(clock = ?clock, "Greeting function initialized");

    run(service_fn(move |event: LambdaEvent<Value>| handler(clock, event))).await
}
