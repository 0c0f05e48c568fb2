use std::env;

use chrono_tz::Tz;

use crate::errors::GreetingError;

pub const TIME_ZONE_VAR: &str = "GREETING_TIME_ZONE";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Pinned IANA zone. `None` keeps the host's local clock.
    pub time_zone: Option<Tz>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, GreetingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GreetingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let time_zone = match lookup(TIME_ZONE_VAR) {
            Some(name) if !name.trim().is_empty() => Some(name.trim().parse::<Tz>()?),
            _ => None,
        };

        Ok(Self { time_zone })
    }
}
